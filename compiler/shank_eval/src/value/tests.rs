use pretty_assertions::assert_eq;

use super::*;

#[test]
fn defaults_per_type() {
    assert_eq!(Value::default_for(&ShankType::Integer), Value::Integer(0));
    assert_eq!(Value::default_for(&ShankType::Real), Value::Real(0.0));
    assert_eq!(Value::default_for(&ShankType::String), Value::Str(String::new()));
    assert_eq!(Value::default_for(&ShankType::Character), Value::Char('\0'));
    assert_eq!(Value::default_for(&ShankType::Boolean), Value::Bool(false));
    assert_eq!(
        Value::default_for(&ShankType::Array(Box::new(ShankType::Real))),
        Value::Array(ArrayValue::new(ShankType::Real))
    );
}

#[test]
fn reals_always_show_a_fraction() {
    assert_eq!(Value::Real(3.0).to_string(), "3.0");
    assert_eq!(Value::Real(-2.0).to_string(), "-2.0");
    assert_eq!(Value::Real(2.5).to_string(), "2.5");
    assert_eq!(Value::Integer(3).to_string(), "3");
}

#[test]
fn scalar_display() {
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Char('q').to_string(), "q");
    assert_eq!(Value::Str("hi there".into()).to_string(), "hi there");
}

#[test]
fn array_display_and_growth() {
    let mut array = ArrayValue::new(ShankType::Integer);
    array.store(2, Value::Integer(7));
    assert_eq!(
        array.items,
        vec![Value::Integer(0), Value::Integer(0), Value::Integer(7)]
    );
    assert_eq!(Value::Array(array).to_string(), "[0, 0, 7]");
}

#[test]
fn coercion_widens_integers_only() {
    assert_eq!(Value::Integer(4).coerce_to(&ShankType::Real), Ok(Value::Real(4.0)));
    assert_eq!(
        Value::Real(4.5).coerce_to(&ShankType::Integer),
        Err(Value::Real(4.5))
    );
    assert_eq!(
        Value::Str("x".into()).coerce_to(&ShankType::String),
        Ok(Value::Str("x".into()))
    );
}

#[test]
fn arrays_conform_by_element_type() {
    let ints = Value::Array(ArrayValue::new(ShankType::Integer));
    assert!(ints.conforms_to(&ShankType::Array(Box::new(ShankType::Integer))));
    assert!(!ints.conforms_to(&ShankType::Array(Box::new(ShankType::Real))));
    assert!(!ints.conforms_to(&ShankType::Integer));
}

#[test]
fn parse_like_follows_the_target_kind() {
    assert_eq!(Value::Integer(0).parse_like(" 42 "), Some(Value::Integer(42)));
    assert_eq!(Value::Integer(0).parse_like("abc"), Some(Value::Integer(0)));
    assert_eq!(Value::Real(0.0).parse_like("2.25"), Some(Value::Real(2.25)));
    assert_eq!(Value::Real(0.0).parse_like("nope"), Some(Value::Real(0.0)));
    assert_eq!(
        Value::Str(String::new()).parse_like("  spaced "),
        Some(Value::Str("  spaced ".into()))
    );
    assert_eq!(Value::Char('\0').parse_like("xyz"), Some(Value::Char('x')));
    assert_eq!(Value::Char('a').parse_like(""), Some(Value::Char('\0')));
    assert_eq!(
        Value::Array(ArrayValue::new(ShankType::Integer)).parse_like("1"),
        None
    );
}

#[test]
fn boolean_input_words() {
    for word in ["true", "TRUE", " yes ", "1"] {
        assert_eq!(Value::Bool(false).parse_like(word), Some(Value::Bool(true)), "{word}");
    }
    for word in ["false", "no", "0", "maybe"] {
        assert_eq!(Value::Bool(true).parse_like(word), Some(Value::Bool(false)), "{word}");
    }
}

#[test]
fn literals_become_values() {
    assert_eq!(Value::from_literal(&Expr::Integer(-4)), Some(Value::Integer(-4)));
    assert_eq!(Value::from_literal(&Expr::Char('z')), Some(Value::Char('z')));
    assert_eq!(Value::from_literal(&Expr::var("x")), None);
}
