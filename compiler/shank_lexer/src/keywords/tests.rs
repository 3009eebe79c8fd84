use super::*;

#[test]
fn declaration_keywords() {
    assert_eq!(lookup("define"), Some(TokenKind::Define));
    assert_eq!(lookup("variables"), Some(TokenKind::Variables));
    assert_eq!(lookup("constants"), Some(TokenKind::Constants));
    assert_eq!(lookup("var"), Some(TokenKind::Var));
    assert_eq!(lookup("array"), Some(TokenKind::Array));
    assert_eq!(lookup("of"), Some(TokenKind::Of));
}

#[test]
fn control_flow_keywords() {
    assert_eq!(lookup("if"), Some(TokenKind::If));
    assert_eq!(lookup("then"), Some(TokenKind::Then));
    assert_eq!(lookup("elsif"), Some(TokenKind::Elsif));
    assert_eq!(lookup("else"), Some(TokenKind::Else));
    assert_eq!(lookup("for"), Some(TokenKind::For));
    assert_eq!(lookup("from"), Some(TokenKind::From));
    assert_eq!(lookup("to"), Some(TokenKind::To));
    assert_eq!(lookup("while"), Some(TokenKind::While));
    assert_eq!(lookup("repeat"), Some(TokenKind::Repeat));
    assert_eq!(lookup("until"), Some(TokenKind::Until));
}

#[test]
fn value_and_operator_keywords() {
    assert_eq!(lookup("true"), Some(TokenKind::True));
    assert_eq!(lookup("false"), Some(TokenKind::False));
    assert_eq!(lookup("mod"), Some(TokenKind::Mod));
}

#[test]
fn lookup_ignores_case() {
    assert_eq!(lookup("DEFINE"), Some(TokenKind::Define));
    assert_eq!(lookup("While"), Some(TokenKind::While));
    assert_eq!(lookup("vArIaBlEs"), Some(TokenKind::Variables));
}

#[test]
fn type_names_are_identifiers() {
    for name in ["integer", "real", "string", "boolean", "character"] {
        assert_eq!(lookup(name), None, "{name}");
    }
}

#[test]
fn near_misses_are_identifiers() {
    assert_eq!(lookup("i"), None);
    assert_eq!(lookup("iff"), None);
    assert_eq!(lookup("defines"), None);
    assert_eq!(lookup("variable"), None);
    assert_eq!(lookup("constantsx"), None);
}
