use pretty_assertions::assert_eq;
use shank_ir::{Argument, CompareOp, Expr, FunctionCall, MathOp, ShankType, Stmt, VariableRef};

use super::Checker;
use crate::{SemanticErrorKind, TypeEnv};

fn checker(bindings: &[(&str, ShankType)]) -> Checker {
    let mut env = TypeEnv::new();
    for (name, ty) in bindings {
        env.bind(name, ty.clone());
    }
    Checker::new(env)
}

fn int_array() -> ShankType {
    ShankType::Array(Box::new(ShankType::Integer))
}

#[test]
fn literal_types() {
    let c = checker(&[]);
    assert_eq!(c.expr_type(&Expr::Integer(1)), Ok(ShankType::Integer));
    assert_eq!(c.expr_type(&Expr::Real(1.5)), Ok(ShankType::Real));
    assert_eq!(c.expr_type(&Expr::Str("s".into())), Ok(ShankType::String));
    assert_eq!(c.expr_type(&Expr::Char('c')), Ok(ShankType::Character));
    assert_eq!(c.expr_type(&Expr::Bool(true)), Ok(ShankType::Boolean));
}

#[test]
fn lookup_ignores_case() {
    let c = checker(&[("Total", ShankType::Real)]);
    assert_eq!(c.expr_type(&Expr::var("TOTAL")), Ok(ShankType::Real));
}

#[test]
fn undeclared_variable() {
    let c = checker(&[]);
    assert_eq!(
        c.expr_type(&Expr::var("ghost")),
        Err(SemanticErrorKind::UndeclaredVariable {
            name: "ghost".into()
        })
    );
}

#[test]
fn nested_math_promotes() {
    let c = checker(&[("i", ShankType::Integer), ("r", ShankType::Real)]);
    let expr = Expr::math(
        MathOp::Mul,
        Expr::math(MathOp::Add, Expr::var("i"), Expr::Integer(1)),
        Expr::var("r"),
    );
    assert_eq!(c.expr_type(&expr), Ok(ShankType::Real));
}

#[test]
fn mod_on_real_is_rejected() {
    let c = checker(&[("r", ShankType::Real)]);
    let expr = Expr::math(MathOp::Mod, Expr::var("r"), Expr::Integer(2));
    assert_eq!(
        c.expr_type(&expr),
        Err(SemanticErrorKind::MathOperands {
            op: MathOp::Mod,
            left: ShankType::Real,
            right: ShankType::Integer,
        })
    );
}

#[test]
fn negate_requires_number() {
    let c = checker(&[("s", ShankType::String), ("i", ShankType::Integer)]);
    assert_eq!(
        c.expr_type(&Expr::Negate(Box::new(Expr::var("i")))),
        Ok(ShankType::Integer)
    );
    assert_eq!(
        c.expr_type(&Expr::Negate(Box::new(Expr::var("s")))),
        Err(SemanticErrorKind::NegateOperand {
            found: ShankType::String
        })
    );
}

#[test]
fn comparison_yields_boolean() {
    let c = checker(&[("i", ShankType::Integer)]);
    let expr = Expr::compare(CompareOp::LessEqual, Expr::var("i"), Expr::Real(2.0));
    assert_eq!(c.expr_type(&expr), Ok(ShankType::Boolean));
}

#[test]
fn string_ordering_is_rejected() {
    let c = checker(&[]);
    let expr = Expr::compare(CompareOp::Less, Expr::Str("a".into()), Expr::Str("b".into()));
    assert!(matches!(
        c.expr_type(&expr),
        Err(SemanticErrorKind::CompareOperands {
            op: CompareOp::Less,
            ..
        })
    ));
}

#[test]
fn indexing_yields_element_type() {
    let c = checker(&[("a", int_array())]);
    let var = VariableRef::indexed("a", Expr::Integer(0));
    assert_eq!(c.variable_type(&var), Ok(ShankType::Integer));
    assert_eq!(c.variable_type(&VariableRef::new("a")), Ok(int_array()));
}

#[test]
fn indexing_a_scalar_is_rejected() {
    let c = checker(&[("n", ShankType::Integer)]);
    let var = VariableRef::indexed("n", Expr::Integer(0));
    assert_eq!(
        c.variable_type(&var),
        Err(SemanticErrorKind::NotAnArray {
            name: "n".into(),
            found: ShankType::Integer,
        })
    );
}

#[test]
fn index_must_be_integer() {
    let c = checker(&[("a", int_array())]);
    let var = VariableRef::indexed("a", Expr::Real(1.0));
    assert_eq!(
        c.variable_type(&var),
        Err(SemanticErrorKind::IndexNotInteger {
            name: "a".into(),
            found: ShankType::Real,
        })
    );
}

#[test]
fn assignment_into_array_element() {
    let c = checker(&[("a", int_array())]);
    let ok = Stmt::Assignment {
        target: VariableRef::indexed("a", Expr::Integer(0)),
        value: Expr::Integer(7),
    };
    assert_eq!(c.check_stmt(&ok), Ok(()));

    let bad = Stmt::Assignment {
        target: VariableRef::indexed("a", Expr::Integer(0)),
        value: Expr::Str("x".into()),
    };
    assert_eq!(
        c.check_stmt(&bad),
        Err(SemanticErrorKind::AssignmentMismatch {
            target: "a".into(),
            expected: ShankType::Integer,
            found: ShankType::String,
        })
    );
}

#[test]
fn call_arguments_are_typed_but_not_matched() {
    let c = checker(&[("s", ShankType::String)]);
    let call = |args| {
        Stmt::Call(FunctionCall {
            name: "whatever".into(),
            args,
            line: 1,
        })
    };
    assert_eq!(
        c.check_stmt(&call(vec![
            Argument::Value(Expr::Integer(1)),
            Argument::Var(VariableRef::new("s")),
        ])),
        Ok(())
    );
    assert_eq!(
        c.check_stmt(&call(vec![Argument::Var(VariableRef::new("missing"))])),
        Err(SemanticErrorKind::UndeclaredVariable {
            name: "missing".into()
        })
    );
}
