use super::*;

#[test]
fn display_matches_as_str() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E6007.as_str(), "E6007");
}

#[test]
fn leading_digit_selects_phase() {
    for code in ErrorCode::ALL {
        let expected = match code.as_str().as_bytes()[1] {
            b'0' => Phase::Lexical,
            b'1' => Phase::Syntax,
            b'2' => Phase::Semantic,
            b'6' => Phase::Runtime,
            b'9' => Phase::Driver,
            other => panic!("unexpected leading digit {}", other as char),
        };
        assert_eq!(code.phase(), expected, "{code}");
    }
}

#[test]
fn codes_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for code in ErrorCode::ALL {
        assert!(seen.insert(code.as_str()), "duplicate code {code}");
    }
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("e2001".parse::<ErrorCode>(), Ok(ErrorCode::E2001));
    assert_eq!("E9001".parse::<ErrorCode>(), Ok(ErrorCode::E9001));
    assert_eq!("E7777".parse::<ErrorCode>(), Err(()));
}

#[test]
fn descriptions_are_lowercase_phrases() {
    for code in ErrorCode::ALL {
        let description = code.description();
        assert!(!description.is_empty());
        assert!(!description.ends_with('.'), "{code}");
    }
}
