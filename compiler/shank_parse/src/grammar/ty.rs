//! Types, literal values, and range constraints.

use shank_diagnostic::ErrorCode;
use shank_ir::{Expr, RangeConstraint, ShankType, Token, TokenKind};

use crate::{ParseError, Parsed, Parser, Pos};

impl Parser<'_> {
    /// `type := 'integer' | 'real' | 'string' | 'boolean' | 'character' | 'array' 'of' type`
    pub(super) fn type_spec(&self, pos: Pos) -> Result<Parsed<ShankType>, ParseError> {
        let cursor = &self.cursor;
        if let Some((_, next)) = cursor.eat(pos, TokenKind::Array) {
            let (_, next) = cursor.expect(
                next,
                TokenKind::Of,
                ErrorCode::E1005,
                "expected 'of' after 'array'",
            )?;
            return Ok(self
                .type_spec(next)?
                .map(|element| ShankType::Array(Box::new(element))));
        }

        let Some((name, next)) = cursor.eat(pos, TokenKind::Identifier) else {
            return Err(cursor.error(pos, ErrorCode::E1005, "expected type"));
        };
        match ShankType::from_name(name.text()) {
            Some(ty) => Ok(Parsed::new(ty, next)),
            None => Err(cursor.error(
                pos,
                ErrorCode::E1005,
                format!("unknown type '{}'", name.text()),
            )),
        }
    }

    /// `constValue := ['-'] NUMBER | STRING | CHAR | 'true' | 'false'`
    pub(super) fn constant_value(&self, pos: Pos) -> Result<Parsed<Expr>, ParseError> {
        let cursor = &self.cursor;
        if let Some((_, next)) = cursor.eat(pos, TokenKind::Minus) {
            let (number, after) = cursor.expect(
                next,
                TokenKind::Number,
                ErrorCode::E1008,
                "expected number after '-'",
            )?;
            return Ok(Parsed::new(self.number_literal(next, number, true)?, after));
        }

        let Some(token) = cursor.token(pos) else {
            return Err(cursor.error(pos, ErrorCode::E1002, "expected literal value"));
        };
        let value = match token.kind {
            TokenKind::Number => self.number_literal(pos, token, false)?,
            TokenKind::True => Expr::Bool(true),
            TokenKind::False => Expr::Bool(false),
            TokenKind::StringLiteral | TokenKind::CharLiteral => text_literal(token),
            _ => return Err(cursor.error(pos, ErrorCode::E1002, "expected literal value")),
        };
        Ok(Parsed::new(value, pos.next()))
    }

    /// A `NUMBER` token as an integer or real literal. The sign is folded
    /// into the text so the full `i32` range is reachable.
    pub(super) fn number_literal(
        &self,
        pos: Pos,
        token: &Token,
        negative: bool,
    ) -> Result<Expr, ParseError> {
        let text = if negative {
            format!("-{}", token.text())
        } else {
            token.text().to_string()
        };
        let parsed = if text.contains('.') {
            text.parse::<f32>().ok().map(Expr::Real)
        } else {
            text.parse::<i32>().ok().map(Expr::Integer)
        };
        parsed.ok_or_else(|| {
            self.cursor.error(
                pos,
                ErrorCode::E1008,
                format!("Invalid number format: {text}"),
            )
        })
    }

    /// Check `from .. to` bounds against the declared type.
    ///
    /// Integers take integer bounds, reals take any numeric bounds, strings
    /// take integer bounds on their length. Nothing else takes a range.
    #[expect(
        clippy::cast_precision_loss,
        reason = "integer bounds on a real variable widen like an assignment"
    )]
    pub(super) fn range_constraint(
        &self,
        pos: Pos,
        ty: &ShankType,
        from: &Expr,
        to: &Expr,
    ) -> Result<RangeConstraint, ParseError> {
        let as_real = |bound: &Expr| match *bound {
            Expr::Integer(n) => Some(n as f32),
            Expr::Real(r) => Some(r),
            _ => None,
        };
        match (ty, from, to) {
            (ShankType::Integer | ShankType::String, &Expr::Integer(from), &Expr::Integer(to)) => {
                Ok(RangeConstraint::Integer { from, to })
            }
            (ShankType::Real, _, _) => match (as_real(from), as_real(to)) {
                (Some(from), Some(to)) => Ok(RangeConstraint::Real { from, to }),
                _ => Err(self.cursor.error(
                    pos,
                    ErrorCode::E1009,
                    "range bounds for real variables must be numbers",
                )),
            },
            (ShankType::Integer | ShankType::String, _, _) => Err(self.cursor.error(
                pos,
                ErrorCode::E1009,
                format!("range bounds for {ty} variables must be integers"),
            )),
            _ => Err(self.cursor.error(
                pos,
                ErrorCode::E1009,
                format!("range constraints are not allowed on {ty} variables"),
            )),
        }
    }
}

/// String and character literal tokens. A character token always holds
/// exactly one character.
pub(super) fn text_literal(token: &Token) -> Expr {
    let text = token.text();
    match (token.kind, text.chars().next()) {
        (TokenKind::CharLiteral, Some(c)) => Expr::Char(c),
        _ => Expr::Str(text.to_string()),
    }
}

/// Declared type of a constant, from its literal.
pub(super) fn literal_type(value: &Expr) -> ShankType {
    match value {
        Expr::Integer(_) => ShankType::Integer,
        Expr::Real(_) => ShankType::Real,
        Expr::Char(_) => ShankType::Character,
        Expr::Bool(_) => ShankType::Boolean,
        _ => ShankType::String,
    }
}
