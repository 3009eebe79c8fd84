use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::errors::EvalErrorKind;
use crate::print_handler::buffer_handler;

#[test]
fn scripted_lines_are_consumed_in_order() {
    let mut ctx = EvalContext::builder().scripted_input(["one", "two"]).build();
    assert_eq!(ctx.read_line(), Ok("one".to_string()));
    assert_eq!(ctx.read_line(), Ok("two".to_string()));
    let err = ctx.read_line().err().map(|err| err.kind);
    assert_eq!(
        err,
        Some(EvalErrorKind::InputFailure {
            message: "no more input lines".into()
        })
    );
}

#[test]
fn output_goes_to_the_chosen_handler() {
    let out = buffer_handler();
    let ctx = EvalContext::builder().output(Arc::clone(&out)).build();
    assert!(ctx.output().write_line("hi").is_ok());
    assert_eq!(out.captured(), "hi\n");
}

#[test]
fn seeded_random_is_reproducible_and_in_range() {
    let mut a = EvalContext::builder().seed(42).build();
    let mut b = EvalContext::builder().seed(42).build();
    for _ in 0..100 {
        let x = a.random();
        assert_eq!(x.to_bits(), b.random().to_bits());
        assert!((0.0..1.0).contains(&x));
    }
}
