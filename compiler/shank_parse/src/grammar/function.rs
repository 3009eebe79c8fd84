//! Program, function headers, and the declaration section.

use shank_diagnostic::ErrorCode;
use shank_ir::{Function, Program, TokenKind, VariableDecl};
use tracing::trace;

use crate::{ParseError, ParseResult, Parsed, Parser, Pos};

impl Parser<'_> {
    /// `program := { EOL } { function { EOL } }`
    pub fn parse_program(&self) -> Result<Program, ParseError> {
        let cursor = &self.cursor;
        let mut program = Program::new();
        let mut pos = cursor.skip_eols(Pos::START);

        while !cursor.is_at_end(pos) {
            let Some(parsed) = self.function(pos)? else {
                return Err(cursor.error(
                    pos,
                    ErrorCode::E1006,
                    "expected function definition starting with 'define'",
                ));
            };
            if let Err(duplicate) = program.insert(parsed.value) {
                return Err(cursor.error(
                    pos,
                    ErrorCode::E1010,
                    format!("function '{}' is already defined", duplicate.name),
                ));
            }
            pos = cursor.skip_eols(parsed.next);
        }
        Ok(program)
    }

    /// `'define' IDENT '(' [params] ')' EOL { decls } INDENT block DEDENT`
    fn function(&self, pos: Pos) -> ParseResult<Function> {
        let cursor = &self.cursor;
        let Some((define, pos)) = cursor.eat(pos, TokenKind::Define) else {
            return Ok(None);
        };
        let (name, pos) = cursor.expect(
            pos,
            TokenKind::Identifier,
            ErrorCode::E1004,
            "expected function name after 'define'",
        )?;
        trace!(name = name.text(), line = define.line, "function");

        let (_, pos) = cursor.expect(
            pos,
            TokenKind::LParen,
            ErrorCode::E1006,
            "expected '(' after function name",
        )?;
        let Parsed {
            value: params,
            next: pos,
        } = self.parameters(pos)?;
        let (_, pos) = cursor.expect(
            pos,
            TokenKind::RParen,
            ErrorCode::E1003,
            "expected ')' to close the parameter list",
        )?;
        let mut pos = cursor.expect_eols(pos, "expected end of line after function header")?;

        let mut constants = Vec::new();
        let mut locals = Vec::new();
        loop {
            if let Some(parsed) = self.constants(pos)? {
                constants.extend(parsed.value);
                pos = parsed.next;
            } else if let Some(parsed) = self.variables(pos)? {
                locals.extend(parsed.value);
                pos = parsed.next;
            } else {
                break;
            }
        }

        if !cursor.check(pos, TokenKind::Indent) {
            return Err(cursor.error(
                pos,
                ErrorCode::E1007,
                format!("expected indented body for function '{}'", name.text()),
            ));
        }
        let body = self.block(pos)?;

        let function = Function {
            name: name.text().to_string(),
            params,
            constants,
            locals,
            body: body.value,
            line: define.line,
        };
        Ok(Some(Parsed::new(function, body.next)))
    }

    /// `paramGroup { ';' paramGroup }` where
    /// `paramGroup := ['var'] IDENT { ',' IDENT } ':' type`.
    ///
    /// An empty list is allowed; the caller checks for `)`.
    fn parameters(&self, pos: Pos) -> Result<Parsed<Vec<VariableDecl>>, ParseError> {
        let cursor = &self.cursor;
        let mut params = Vec::new();
        if cursor.check(pos, TokenKind::RParen) {
            return Ok(Parsed::new(params, pos));
        }

        let mut pos = pos;
        loop {
            let (is_var, next) = match cursor.eat(pos, TokenKind::Var) {
                Some((_, next)) => (true, next),
                None => (false, pos),
            };
            let Parsed { value: names, next } = self.name_list(next, "parameter")?;
            let (_, next) = cursor.expect(
                next,
                TokenKind::Colon,
                ErrorCode::E1001,
                "expected ':' before parameter type",
            )?;
            let ty = self.type_spec(next)?;
            params.extend(
                names
                    .into_iter()
                    .map(|name| VariableDecl::param(name, ty.value.clone(), is_var)),
            );
            pos = ty.next;

            match cursor.eat(pos, TokenKind::Semicolon) {
                Some((_, next)) => pos = next,
                None => return Ok(Parsed::new(params, pos)),
            }
        }
    }

    /// `'constants' IDENT '=' constValue { ',' IDENT '=' constValue } EOL`
    fn constants(&self, pos: Pos) -> ParseResult<Vec<VariableDecl>> {
        let cursor = &self.cursor;
        let Some((_, mut pos)) = cursor.eat(pos, TokenKind::Constants) else {
            return Ok(None);
        };

        let mut decls = Vec::new();
        loop {
            let (name, next) = cursor.expect(
                pos,
                TokenKind::Identifier,
                ErrorCode::E1004,
                "expected constant name",
            )?;
            let (_, next) = cursor.expect(
                next,
                TokenKind::Equal,
                ErrorCode::E1001,
                "expected '=' after constant name",
            )?;
            let value = self.constant_value(next)?;
            let ty = super::ty::literal_type(&value.value);
            decls.push(VariableDecl::constant(name.text(), ty, value.value));
            pos = value.next;

            match cursor.eat(pos, TokenKind::Comma) {
                Some((_, next)) => pos = next,
                None => break,
            }
        }
        let pos = cursor.expect_eols(pos, "expected end of line after constants")?;
        Ok(Some(Parsed::new(decls, pos)))
    }

    /// `'variables' IDENT { ',' IDENT } ':' type ['from' constValue 'to' constValue] EOL`
    fn variables(&self, pos: Pos) -> ParseResult<Vec<VariableDecl>> {
        let cursor = &self.cursor;
        let Some((_, pos)) = cursor.eat(pos, TokenKind::Variables) else {
            return Ok(None);
        };

        let Parsed { value: names, next } = self.name_list(pos, "variable")?;
        let (_, next) = cursor.expect(
            next,
            TokenKind::Colon,
            ErrorCode::E1001,
            "expected ':' before variable type",
        )?;
        let ty = self.type_spec(next)?;
        let mut pos = ty.next;

        let mut range = None;
        if let Some((_, next)) = cursor.eat(pos, TokenKind::From) {
            let from = self.constant_value(next)?;
            let (_, next) = cursor.expect(
                from.next,
                TokenKind::To,
                ErrorCode::E1009,
                "expected 'to' in range constraint",
            )?;
            let to = self.constant_value(next)?;
            range = Some(self.range_constraint(pos, &ty.value, &from.value, &to.value)?);
            pos = to.next;
        }

        let pos = cursor.expect_eols(pos, "expected end of line after variable declaration")?;
        let decls = names
            .into_iter()
            .map(|name| VariableDecl::local(name, ty.value.clone(), range))
            .collect();
        Ok(Some(Parsed::new(decls, pos)))
    }

    /// `IDENT { ',' IDENT }`
    fn name_list(&self, pos: Pos, what: &str) -> Result<Parsed<Vec<String>>, ParseError> {
        let cursor = &self.cursor;
        let mut names = Vec::new();
        let mut pos = pos;
        loop {
            let (name, next) = cursor.expect(
                pos,
                TokenKind::Identifier,
                ErrorCode::E1004,
                &format!("expected {what} name"),
            )?;
            names.push(name.text().to_string());
            pos = next;
            match cursor.eat(pos, TokenKind::Comma) {
                Some((_, next)) => pos = next,
                None => return Ok(Parsed::new(names, pos)),
            }
        }
    }
}
