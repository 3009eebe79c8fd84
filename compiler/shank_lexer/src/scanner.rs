//! Character-level state machine for one physical line.

use shank_ir::{Token, TokenKind};

use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    Start,
    Identifier,
    Number,
    Decimal,
    String,
    Character,
    Comment,
}

/// Tokenize one line, without layout tokens.
///
/// `in_comment` carries an open `{ ... }` comment across lines: it is read
/// as the starting state and updated to whether the line ends inside one.
pub(crate) fn scan_line(
    text: &str,
    line: u32,
    in_comment: &mut bool,
) -> Result<Vec<Token>, LexError> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut lexeme = String::new();
    let mut state = if *in_comment {
        State::Comment
    } else {
        State::Start
    };

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match state {
            State::Start => {
                if c.is_alphabetic() {
                    lexeme.push(c);
                    state = State::Identifier;
                } else if c.is_ascii_digit() {
                    lexeme.push(c);
                    state = State::Number;
                } else if c == '"' {
                    state = State::String;
                } else if c == '\'' {
                    state = State::Character;
                } else if c == '{' {
                    state = State::Comment;
                } else if let Some((kind, width)) = operator(c, chars.get(i + 1).copied()) {
                    tokens.push(Token::new(kind, line));
                    i += width;
                    continue;
                } else if !c.is_whitespace() {
                    return Err(LexError::new(LexErrorKind::UnexpectedCharacter(c), line));
                }
            }
            State::Identifier => {
                if c.is_alphanumeric() {
                    lexeme.push(c);
                } else {
                    tokens.push(word(std::mem::take(&mut lexeme), line));
                    state = State::Start;
                    continue;
                }
            }
            State::Number | State::Decimal => {
                if c.is_ascii_digit() {
                    lexeme.push(c);
                } else if c == '.' && state == State::Number {
                    lexeme.push(c);
                    state = State::Decimal;
                } else {
                    tokens.push(number(std::mem::take(&mut lexeme), line));
                    state = State::Start;
                    continue;
                }
            }
            State::String => {
                if c == '"' {
                    tokens.push(Token::with_text(
                        TokenKind::StringLiteral,
                        std::mem::take(&mut lexeme),
                        line,
                    ));
                    state = State::Start;
                } else {
                    lexeme.push(c);
                }
            }
            State::Character => {
                if c == '\'' {
                    if lexeme.chars().count() != 1 {
                        return Err(LexError::new(LexErrorKind::CharacterLength, line));
                    }
                    tokens.push(Token::with_text(
                        TokenKind::CharLiteral,
                        std::mem::take(&mut lexeme),
                        line,
                    ));
                    state = State::Start;
                } else {
                    lexeme.push(c);
                }
            }
            State::Comment => {
                if c == '}' {
                    state = State::Start;
                }
            }
        }
        i += 1;
    }

    match state {
        State::Identifier => tokens.push(word(lexeme, line)),
        State::Number | State::Decimal => tokens.push(number(lexeme, line)),
        State::String => {
            return Err(LexError::new(LexErrorKind::UnterminatedString, line));
        }
        State::Character => {
            return Err(LexError::new(LexErrorKind::UnterminatedCharacter, line));
        }
        State::Start | State::Comment => {}
    }

    *in_comment = state == State::Comment;
    Ok(tokens)
}

/// Keyword, or identifier keeping its original spelling.
fn word(text: String, line: u32) -> Token {
    match keywords::lookup(&text) {
        Some(kind) => Token::new(kind, line),
        None => Token::with_text(TokenKind::Identifier, text, line),
    }
}

fn number(text: String, line: u32) -> Token {
    Token::with_text(TokenKind::Number, text, line)
}

/// Punctuation and operators, with one character of lookahead for the
/// two-character forms. Returns the kind and how many characters it spans.
fn operator(c: char, next: Option<char>) -> Option<(TokenKind, usize)> {
    let found = match (c, next) {
        (':', Some('=')) => (TokenKind::Assign, 2),
        (':', _) => (TokenKind::Colon, 1),
        ('<', Some('>')) => (TokenKind::NotEqual, 2),
        ('<', Some('=')) => (TokenKind::LessEqual, 2),
        ('<', _) => (TokenKind::Less, 1),
        ('>', Some('=')) => (TokenKind::GreaterEqual, 2),
        ('>', _) => (TokenKind::Greater, 1),
        ('=', _) => (TokenKind::Equal, 1),
        (';', _) => (TokenKind::Semicolon, 1),
        (',', _) => (TokenKind::Comma, 1),
        ('(', _) => (TokenKind::LParen, 1),
        (')', _) => (TokenKind::RParen, 1),
        ('[', _) => (TokenKind::LBracket, 1),
        (']', _) => (TokenKind::RBracket, 1),
        ('+', _) => (TokenKind::Plus, 1),
        ('-', _) => (TokenKind::Minus, 1),
        ('*', _) => (TokenKind::Times, 1),
        ('/', _) => (TokenKind::Divide, 1),
        _ => return None,
    };
    Some(found)
}
