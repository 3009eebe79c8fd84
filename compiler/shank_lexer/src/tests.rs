#![allow(clippy::enum_glob_use)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn function_header_and_body() {
    use TokenKind::*;
    let source = "define main()\nvariables x : integer\n    x := 5\n";
    assert_eq!(
        kinds(source),
        vec![
            Define, Identifier, LParen, RParen, EndOfLine, //
            Variables, Identifier, Colon, Identifier, EndOfLine, //
            Indent, Identifier, Assign, Number, EndOfLine, //
            Dedent,
        ]
    );
}

#[test]
fn keywords_are_case_insensitive_identifiers_keep_spelling() {
    let tokens = lex("DEFINE Main()").unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::Define, 1));
    assert_eq!(tokens[1], Token::with_text(TokenKind::Identifier, "Main", 1));
}

#[test]
fn every_line_gets_one_end_of_line() {
    let source = "a\n\n   \n{ note }\nb";
    let tokens = lex(source).unwrap();
    let eols: Vec<u32> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::EndOfLine)
        .map(|t| t.line)
        .collect();
    assert_eq!(eols, vec![1, 2, 3, 4, 5]);
}

#[test]
fn blank_and_comment_lines_do_not_change_indentation() {
    use TokenKind::*;
    let source = "\
define f()
    a := 1

{ a comment at column zero }
    b := 2
";
    assert_eq!(
        kinds(source),
        vec![
            Define, Identifier, LParen, RParen, EndOfLine, //
            Indent, Identifier, Assign, Number, EndOfLine, //
            EndOfLine, //
            EndOfLine, //
            Identifier, Assign, Number, EndOfLine, //
            Dedent,
        ]
    );
}

#[test]
fn tab_counts_as_one_level() {
    use TokenKind::*;
    assert_eq!(
        kinds("x\n\ty\n\t    z"),
        vec![
            Identifier, EndOfLine, //
            Indent, Identifier, EndOfLine, //
            Indent, Identifier, EndOfLine, //
            Dedent, Dedent,
        ]
    );
}

#[test]
fn multiple_levels_close_at_once() {
    use TokenKind::*;
    assert_eq!(
        kinds("a\n    b\n        c\nd"),
        vec![
            Identifier, EndOfLine, //
            Indent, Identifier, EndOfLine, //
            Indent, Identifier, EndOfLine, //
            Dedent, Dedent, Identifier, EndOfLine,
        ]
    );
}

#[test]
fn partial_indentation_rounds_down() {
    assert_eq!(indent_level("   x"), 0);
    assert_eq!(indent_level("     x"), 1);
    assert_eq!(indent_level("\t\tx"), 2);
    assert_eq!(indent_level(""), 0);
}

#[test]
fn code_after_a_closing_comment_is_indented_from_the_brace() {
    use TokenKind::*;
    let source = "\
define main()
{ the body starts
  right after this }    write(1)
    write(2)
{ and ends
here } x := 3
";
    assert_eq!(
        kinds(source),
        vec![
            Define, Identifier, LParen, RParen, EndOfLine, //
            EndOfLine, //
            Indent, Identifier, LParen, Number, RParen, EndOfLine, //
            Identifier, LParen, Number, RParen, EndOfLine, //
            EndOfLine, //
            Dedent, Identifier, Assign, Number, EndOfLine,
        ]
    );
}

#[test]
fn multi_line_comment_spans_lines() {
    use TokenKind::*;
    let source = "a { begins\n  still inside\n ends } b\nc";
    assert_eq!(
        kinds(source),
        vec![
            Identifier, EndOfLine, //
            EndOfLine, //
            Identifier, EndOfLine, //
            Identifier, EndOfLine,
        ]
    );
}

#[test]
fn lex_error_reports_line() {
    let err = lex("a := 1\nb := 2 # 3").unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('#'));
    assert_eq!(
        err.to_diagnostic().to_string(),
        "Lexical Error at line 2: Unexpected character: # [E0002]"
    );
}

#[test]
fn incremental_lexing_matches_whole_source() {
    let source = "define main()\n    write(\"hi\", 'c', 2.5)\n";
    let mut lexer = Lexer::new();
    for line in source.lines() {
        lexer.lex_line(line).unwrap();
    }
    assert!(!lexer.in_comment());
    assert_eq!(lexer.finish(), lex(source).unwrap());
}

fn layout_counts(tokens: &[Token]) -> (usize, usize) {
    let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
    let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
    (indents, dedents)
}

/// Running depth never goes negative and ends at zero.
fn balanced(tokens: &[Token]) -> bool {
    let mut depth: i64 = 0;
    for token in tokens {
        match token.kind {
            TokenKind::Indent => depth += 1,
            TokenKind::Dedent => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}

proptest! {
    #[test]
    fn rise_then_fall_balances(peak in 1usize..8, rest in 0usize..8, blank_every in 1usize..4) {
        let settle = rest.min(peak);
        let mut levels: Vec<usize> = (0..=peak).collect();
        levels.extend((settle..peak).rev());

        let mut source = String::new();
        for (idx, level) in levels.iter().enumerate() {
            source.push_str(&" ".repeat(level * INDENT_WIDTH));
            source.push_str("x := 1\n");
            if idx % blank_every == 0 {
                source.push('\n');
            }
        }

        let tokens = lex(&source).unwrap();
        let (indents, dedents) = layout_counts(&tokens);
        prop_assert_eq!(indents, peak);
        prop_assert_eq!(dedents, peak);
        prop_assert!(balanced(&tokens));

        let trailing = tokens
            .iter()
            .rev()
            .take_while(|t| t.kind == TokenKind::Dedent)
            .count();
        prop_assert_eq!(trailing, settle);
    }

    #[test]
    fn arbitrary_indentation_always_balances(levels in prop::collection::vec(0usize..6, 1..30)) {
        let source: String = levels
            .iter()
            .map(|level| format!("{}y\n", "\t".repeat(*level)))
            .collect();
        let tokens = lex(&source).unwrap();
        prop_assert!(balanced(&tokens));
    }
}
