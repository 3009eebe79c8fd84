use super::*;

use ShankType::{Boolean, Character, Integer, Real, String};

#[test]
fn integer_math_stays_integer() {
    for op in [MathOp::Add, MathOp::Sub, MathOp::Mul, MathOp::Div, MathOp::Mod] {
        assert_eq!(math_result(op, &Integer, &Integer), Some(Integer));
    }
}

#[test]
fn mixed_numeric_math_promotes_to_real() {
    assert_eq!(math_result(MathOp::Add, &Integer, &Real), Some(Real));
    assert_eq!(math_result(MathOp::Div, &Real, &Integer), Some(Real));
    assert_eq!(math_result(MathOp::Mul, &Real, &Real), Some(Real));
}

#[test]
fn mod_requires_integers() {
    assert_eq!(math_result(MathOp::Mod, &Real, &Integer), None);
    assert_eq!(math_result(MathOp::Mod, &Real, &Real), None);
}

#[test]
fn strings_only_concatenate() {
    assert_eq!(math_result(MathOp::Add, &String, &String), Some(String));
    assert_eq!(math_result(MathOp::Sub, &String, &String), None);
    assert_eq!(math_result(MathOp::Add, &String, &Integer), None);
    assert_eq!(math_result(MathOp::Add, &Character, &Character), None);
    assert_eq!(math_result(MathOp::Add, &Boolean, &Boolean), None);
}

#[test]
fn ordering_comparisons() {
    assert!(comparable(CompareOp::Less, &Integer, &Integer));
    assert!(comparable(CompareOp::GreaterEqual, &Integer, &Real));
    assert!(comparable(CompareOp::Less, &Character, &Character));
    assert!(!comparable(CompareOp::Less, &String, &String));
    assert!(!comparable(CompareOp::Greater, &Boolean, &Boolean));
}

#[test]
fn equality_comparisons() {
    assert!(comparable(CompareOp::Equal, &String, &String));
    assert!(comparable(CompareOp::NotEqual, &Boolean, &Boolean));
    assert!(comparable(CompareOp::Equal, &Real, &Integer));
    assert!(!comparable(CompareOp::Equal, &String, &Character));
    assert!(!comparable(CompareOp::Equal, &Integer, &Boolean));
}

#[test]
fn array_comparisons_need_matching_element_types() {
    let ints = ShankType::Array(Box::new(Integer));
    let reals = ShankType::Array(Box::new(Real));
    assert!(comparable(CompareOp::Equal, &ints, &ints));
    assert!(!comparable(CompareOp::Less, &ints, &ints));
    assert!(!comparable(CompareOp::Equal, &ints, &reals));
}

#[test]
fn assignment_widens_integer_to_real_only() {
    assert!(assignable(&Real, &Integer));
    assert!(assignable(&Integer, &Integer));
    assert!(!assignable(&Integer, &Real));
    assert!(!assignable(&String, &Character));
    assert!(!assignable(&Character, &String));
}
