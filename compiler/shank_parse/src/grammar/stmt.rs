//! Blocks and statements.

use shank_diagnostic::ErrorCode;
use shank_ir::{Argument, Expr, FunctionCall, IfStmt, Stmt, TokenKind};
use shank_stack::ensure_sufficient_stack;

use crate::outcome::Required;
use crate::{ParseError, ParseResult, Parsed, Parser, Pos};

impl Parser<'_> {
    /// `INDENT statement EOL { statement EOL } DEDENT`
    ///
    /// Compound statements end at their own `DEDENT`, so only simple
    /// statements consume a trailing end of line.
    pub(super) fn block(&self, pos: Pos) -> Result<Parsed<Vec<Stmt>>, ParseError> {
        ensure_sufficient_stack(|| {
            let cursor = &self.cursor;
            let (_, mut pos) = cursor.expect(
                pos,
                TokenKind::Indent,
                ErrorCode::E1001,
                "expected indented block",
            )?;

            let mut body = Vec::new();
            loop {
                pos = cursor.skip_eols(pos);
                if let Some((_, next)) = cursor.eat(pos, TokenKind::Dedent) {
                    if body.is_empty() {
                        return Err(cursor.error(pos, ErrorCode::E1001, "expected statement"));
                    }
                    return Ok(Parsed::new(body, next));
                }
                let stmt = self
                    .statement(pos)
                    .required(|| cursor.error(pos, ErrorCode::E1001, "expected statement"))?;
                body.push(stmt.value);
                pos = stmt.next;
            }
        })
    }

    /// `statement := if | while | repeat | for | call | assignment`
    pub(super) fn statement(&self, pos: Pos) -> ParseResult<Stmt> {
        if let Some(parsed) = self.if_stmt(pos)? {
            return Ok(Some(parsed.map(Stmt::If)));
        }
        if let Some(parsed) = self.while_stmt(pos)? {
            return Ok(Some(parsed));
        }
        if let Some(parsed) = self.repeat_stmt(pos)? {
            return Ok(Some(parsed));
        }
        if let Some(parsed) = self.for_stmt(pos)? {
            return Ok(Some(parsed));
        }
        if let Some(parsed) = self.call_stmt(pos)? {
            return Ok(Some(parsed.map(Stmt::Call)));
        }
        self.assignment(pos)
    }

    /// `'if' cond 'then' EOL block { 'elsif' cond 'then' EOL block } [ 'else' EOL block ]`
    fn if_stmt(&self, pos: Pos) -> ParseResult<IfStmt> {
        let cursor = &self.cursor;
        let Some((_, pos)) = cursor.eat(pos, TokenKind::If) else {
            return Ok(None);
        };
        let first = self.conditional_branch(pos, "if")?;
        let mut pos = first.next;

        let mut rest = Vec::new();
        loop {
            if let Some((_, next)) = cursor.eat(pos, TokenKind::Elsif) {
                let branch = self.conditional_branch(next, "elsif")?;
                pos = branch.next;
                rest.push((Some(branch.value.0), branch.value.1));
            } else if let Some((_, next)) = cursor.eat(pos, TokenKind::Else) {
                let next = cursor.expect_eols(next, "expected end of line after 'else'")?;
                let body = self.block(next)?;
                pos = body.next;
                rest.push((None, body.value));
                break;
            } else {
                break;
            }
        }

        let mut tail = None;
        for (condition, body) in rest.into_iter().rev() {
            tail = Some(Box::new(IfStmt {
                condition,
                body,
                next: tail,
            }));
        }
        let (condition, body) = first.value;
        let chain = IfStmt {
            condition: Some(condition),
            body,
            next: tail,
        };
        Ok(Some(Parsed::new(chain, pos)))
    }

    /// `cond 'then' EOL block`, shared by `if` and `elsif`.
    fn conditional_branch(
        &self,
        pos: Pos,
        keyword: &str,
    ) -> Result<Parsed<(Expr, Vec<Stmt>)>, ParseError> {
        let cursor = &self.cursor;
        let condition = self.bool_compare(pos).required(|| {
            cursor.error(
                pos,
                ErrorCode::E1002,
                format!("expected condition after '{keyword}'"),
            )
        })?;
        let (_, next) = cursor.expect(
            condition.next,
            TokenKind::Then,
            ErrorCode::E1001,
            "expected 'then' after condition",
        )?;
        let next = cursor.expect_eols(next, "expected end of line after 'then'")?;
        let body = self.block(next)?;
        Ok(Parsed::new((condition.value, body.value), body.next))
    }

    /// `'while' boolCompare EOL block`
    fn while_stmt(&self, pos: Pos) -> ParseResult<Stmt> {
        let cursor = &self.cursor;
        let Some((_, pos)) = cursor.eat(pos, TokenKind::While) else {
            return Ok(None);
        };
        let condition = self.bool_compare(pos).required(|| {
            cursor.error(pos, ErrorCode::E1002, "expected condition after 'while'")
        })?;
        let next = cursor.expect_eols(condition.next, "expected end of line after condition")?;
        let body = self.block(next)?;
        let stmt = Stmt::While {
            condition: condition.value,
            body: body.value,
        };
        Ok(Some(Parsed::new(stmt, body.next)))
    }

    /// `'repeat' EOL block 'until' boolCompare EOL`
    fn repeat_stmt(&self, pos: Pos) -> ParseResult<Stmt> {
        let cursor = &self.cursor;
        let Some((_, pos)) = cursor.eat(pos, TokenKind::Repeat) else {
            return Ok(None);
        };
        let next = cursor.expect_eols(pos, "expected end of line after 'repeat'")?;
        let body = self.block(next)?;
        let (_, next) = cursor.expect(
            body.next,
            TokenKind::Until,
            ErrorCode::E1001,
            "expected 'until' after repeat body",
        )?;
        let condition = self.bool_compare(next).required(|| {
            cursor.error(next, ErrorCode::E1002, "expected condition after 'until'")
        })?;
        let next = cursor.expect_eols(condition.next, "expected end of line after condition")?;
        let stmt = Stmt::Repeat {
            body: body.value,
            condition: condition.value,
        };
        Ok(Some(Parsed::new(stmt, next)))
    }

    /// `'for' varRef 'from' boolCompare 'to' boolCompare EOL block`
    fn for_stmt(&self, pos: Pos) -> ParseResult<Stmt> {
        let cursor = &self.cursor;
        let Some((_, pos)) = cursor.eat(pos, TokenKind::For) else {
            return Ok(None);
        };
        let var = self.variable_ref(pos).required(|| {
            cursor.error(pos, ErrorCode::E1004, "expected loop variable after 'for'")
        })?;
        let (_, next) = cursor.expect(
            var.next,
            TokenKind::From,
            ErrorCode::E1001,
            "expected 'from' after loop variable",
        )?;
        let from = self.bool_compare(next).required(|| {
            cursor.error(next, ErrorCode::E1002, "expected start value after 'from'")
        })?;
        let (_, next) = cursor.expect(
            from.next,
            TokenKind::To,
            ErrorCode::E1001,
            "expected 'to' after start value",
        )?;
        let to = self.bool_compare(next).required(|| {
            cursor.error(next, ErrorCode::E1002, "expected end value after 'to'")
        })?;
        let next = cursor.expect_eols(to.next, "expected end of line after loop bounds")?;
        let body = self.block(next)?;
        let stmt = Stmt::For {
            var: var.value,
            from: from.value,
            to: to.value,
            body: body.value,
        };
        Ok(Some(Parsed::new(stmt, body.next)))
    }

    /// `IDENT '(' [ arg { ',' arg } ] ')' EOL` where `arg := 'var' varRef | boolCompare`
    fn call_stmt(&self, pos: Pos) -> ParseResult<FunctionCall> {
        let cursor = &self.cursor;
        let Some((name, after_name)) = cursor.eat(pos, TokenKind::Identifier) else {
            return Ok(None);
        };
        let Some((_, mut next)) = cursor.eat(after_name, TokenKind::LParen) else {
            return Ok(None);
        };

        let mut args = Vec::new();
        if !cursor.check(next, TokenKind::RParen) {
            loop {
                let arg = self.argument(next)?;
                args.push(arg.value);
                next = arg.next;
                match cursor.eat(next, TokenKind::Comma) {
                    Some((_, after)) => next = after,
                    None => break,
                }
            }
        }
        let (_, next) = cursor.expect(
            next,
            TokenKind::RParen,
            ErrorCode::E1003,
            "expected ')' to close the argument list",
        )?;
        let next = cursor.expect_eols(next, "expected end of line after call")?;
        let call = FunctionCall {
            name: name.text().to_string(),
            args,
            line: name.line,
        };
        Ok(Some(Parsed::new(call, next)))
    }

    fn argument(&self, pos: Pos) -> Result<Parsed<Argument>, ParseError> {
        let cursor = &self.cursor;
        if let Some((_, next)) = cursor.eat(pos, TokenKind::Var) {
            let var = self.variable_ref(next).required(|| {
                cursor.error(next, ErrorCode::E1004, "expected variable after 'var'")
            })?;
            return Ok(var.map(Argument::Var));
        }
        let value = self
            .bool_compare(pos)
            .required(|| cursor.error(pos, ErrorCode::E1002, "expected argument"))?;
        Ok(value.map(Argument::Value))
    }

    /// `varRef ':=' boolCompare EOL`
    fn assignment(&self, pos: Pos) -> ParseResult<Stmt> {
        let cursor = &self.cursor;
        let Some(target) = self.variable_ref(pos)? else {
            return Ok(None);
        };
        let (_, next) = cursor.expect(
            target.next,
            TokenKind::Assign,
            ErrorCode::E1001,
            "expected ':=' after variable",
        )?;
        let value = self.bool_compare(next).required(|| {
            cursor.error(next, ErrorCode::E1002, "expected expression after ':='")
        })?;
        let next = cursor.expect_eols(value.next, "expected end of line after assignment")?;
        let stmt = Stmt::Assignment {
            target: target.value,
            value: value.value,
        };
        Ok(Some(Parsed::new(stmt, next)))
    }
}
