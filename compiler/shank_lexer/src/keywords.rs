//! Keyword resolution.
//!
//! Shank keywords are case-insensitive, so the identifier is lower-cased
//! before lookup. The lookup buckets on length first: keywords are 2-9
//! characters, and most identifiers are rejected without a string compare.

use shank_ir::TokenKind;

/// Look up a keyword by identifier text, ignoring case.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=9).contains(&len) {
        return None;
    }
    let folded = text.to_ascii_lowercase();

    match len {
        2 => match folded.as_str() {
            "if" => Some(TokenKind::If),
            "of" => Some(TokenKind::Of),
            "to" => Some(TokenKind::To),
            _ => None,
        },
        3 => match folded.as_str() {
            "for" => Some(TokenKind::For),
            "mod" => Some(TokenKind::Mod),
            "var" => Some(TokenKind::Var),
            _ => None,
        },
        4 => match folded.as_str() {
            "else" => Some(TokenKind::Else),
            "from" => Some(TokenKind::From),
            "then" => Some(TokenKind::Then),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match folded.as_str() {
            "array" => Some(TokenKind::Array),
            "elsif" => Some(TokenKind::Elsif),
            "false" => Some(TokenKind::False),
            "until" => Some(TokenKind::Until),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match folded.as_str() {
            "define" => Some(TokenKind::Define),
            "repeat" => Some(TokenKind::Repeat),
            _ => None,
        },
        9 => match folded.as_str() {
            "constants" => Some(TokenKind::Constants),
            "variables" => Some(TokenKind::Variables),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
