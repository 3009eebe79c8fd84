//! Expressions, by precedence level.
//!
//! `boolCompare` allows at most one comparison; `a < b < c` leaves the
//! second `<` for the enclosing statement to reject.

use shank_diagnostic::ErrorCode;
use shank_ir::{CompareOp, Expr, MathOp, TokenKind, VariableRef};
use shank_stack::ensure_sufficient_stack;

use super::ty::text_literal;
use crate::outcome::Required;
use crate::{ParseResult, Parsed, Parser, Pos};

impl Parser<'_> {
    /// `boolCompare := expression [ compareOp expression ]`
    pub fn bool_compare(&self, pos: Pos) -> ParseResult<Expr> {
        let cursor = &self.cursor;
        let Some(left) = self.expression(pos)? else {
            return Ok(None);
        };
        let Some(op) = cursor.kind(left.next).and_then(compare_op) else {
            return Ok(Some(left));
        };
        let rhs = left.next.next();
        let right = self.expression(rhs).required(|| {
            cursor.error(
                rhs,
                ErrorCode::E1002,
                format!("expected expression after '{}'", op.as_symbol()),
            )
        })?;
        let expr = Expr::compare(op, left.value, right.value);
        Ok(Some(Parsed::new(expr, right.next)))
    }

    /// `expression := term { ('+'|'-') term }`
    fn expression(&self, pos: Pos) -> ParseResult<Expr> {
        self.binary_level(pos, additive_op, Self::term)
    }

    /// `term := factor { ('*'|'/'|'mod') factor }`
    fn term(&self, pos: Pos) -> ParseResult<Expr> {
        self.binary_level(pos, multiplicative_op, Self::factor)
    }

    /// One left-associative precedence level.
    fn binary_level(
        &self,
        pos: Pos,
        op_for: fn(TokenKind) -> Option<MathOp>,
        operand: fn(&Self, Pos) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let cursor = &self.cursor;
        let Some(first) = operand(self, pos)? else {
            return Ok(None);
        };
        let mut expr = first.value;
        let mut pos = first.next;
        while let Some(op) = cursor.kind(pos).and_then(op_for) {
            let rhs = pos.next();
            let right = operand(self, rhs).required(|| {
                cursor.error(
                    rhs,
                    ErrorCode::E1002,
                    format!("expected expression after '{}'", op.as_symbol()),
                )
            })?;
            expr = Expr::math(op, expr, right.value);
            pos = right.next;
        }
        Ok(Some(Parsed::new(expr, pos)))
    }

    /// ```text
    /// factor := '-' factor | NUMBER | STRING | CHAR | 'true' | 'false'
    ///         | '(' boolCompare ')' | varRef
    /// ```
    fn factor(&self, pos: Pos) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| {
            let cursor = &self.cursor;
            let Some(token) = cursor.token(pos) else {
                return Ok(None);
            };
            let next = pos.next();
            let expr = match token.kind {
                TokenKind::Minus => return self.negation(next),
                TokenKind::Number => self.number_literal(pos, token, false)?,
                TokenKind::StringLiteral | TokenKind::CharLiteral => text_literal(token),
                TokenKind::True => Expr::Bool(true),
                TokenKind::False => Expr::Bool(false),
                TokenKind::LParen => {
                    let inner = self.bool_compare(next).required(|| {
                        cursor.error(next, ErrorCode::E1002, "expected expression after '('")
                    })?;
                    let (_, after) = cursor.expect(
                        inner.next,
                        TokenKind::RParen,
                        ErrorCode::E1003,
                        "expected ')' to close the parenthesized expression",
                    )?;
                    return Ok(Some(Parsed::new(inner.value, after)));
                }
                TokenKind::Identifier if cursor.check(next, TokenKind::LParen) => {
                    return Err(cursor.error(
                        pos,
                        ErrorCode::E1011,
                        format!(
                            "function '{}' cannot be used as a value; \
                             pass a var argument to receive its result",
                            token.text()
                        ),
                    ));
                }
                TokenKind::Identifier => {
                    return Ok(self.variable_ref(pos)?.map(|var| var.map(Expr::Variable)));
                }
                _ => return Ok(None),
            };
            Ok(Some(Parsed::new(expr, next)))
        })
    }

    /// After a leading `-`: a number folds into a negative literal,
    /// anything else becomes a negation node.
    fn negation(&self, pos: Pos) -> ParseResult<Expr> {
        let cursor = &self.cursor;
        if let Some((number, next)) = cursor.eat(pos, TokenKind::Number) {
            let literal = self.number_literal(pos, number, true)?;
            return Ok(Some(Parsed::new(literal, next)));
        }
        let operand = self
            .factor(pos)
            .required(|| cursor.error(pos, ErrorCode::E1002, "expected expression after '-'"))?;
        Ok(Some(operand.map(|expr| Expr::Negate(Box::new(expr)))))
    }

    /// `varRef := IDENT [ '[' expression ']' ]`
    pub(super) fn variable_ref(&self, pos: Pos) -> ParseResult<VariableRef> {
        let cursor = &self.cursor;
        let Some((name, next)) = cursor.eat(pos, TokenKind::Identifier) else {
            return Ok(None);
        };
        let Some((_, after_bracket)) = cursor.eat(next, TokenKind::LBracket) else {
            return Ok(Some(Parsed::new(VariableRef::new(name.text()), next)));
        };
        let index = self.expression(after_bracket).required(|| {
            cursor.error(after_bracket, ErrorCode::E1002, "expected index expression")
        })?;
        let (_, next) = cursor.expect(
            index.next,
            TokenKind::RBracket,
            ErrorCode::E1003,
            "expected ']' after index",
        )?;
        Ok(Some(Parsed::new(
            VariableRef::indexed(name.text(), index.value),
            next,
        )))
    }
}

fn compare_op(kind: TokenKind) -> Option<CompareOp> {
    match kind {
        TokenKind::Less => Some(CompareOp::Less),
        TokenKind::Greater => Some(CompareOp::Greater),
        TokenKind::LessEqual => Some(CompareOp::LessEqual),
        TokenKind::GreaterEqual => Some(CompareOp::GreaterEqual),
        TokenKind::Equal => Some(CompareOp::Equal),
        TokenKind::NotEqual => Some(CompareOp::NotEqual),
        _ => None,
    }
}

fn additive_op(kind: TokenKind) -> Option<MathOp> {
    match kind {
        TokenKind::Plus => Some(MathOp::Add),
        TokenKind::Minus => Some(MathOp::Sub),
        _ => None,
    }
}

fn multiplicative_op(kind: TokenKind) -> Option<MathOp> {
    match kind {
        TokenKind::Times => Some(MathOp::Mul),
        TokenKind::Divide => Some(MathOp::Div),
        TokenKind::Mod => Some(MathOp::Mod),
        _ => None,
    }
}
