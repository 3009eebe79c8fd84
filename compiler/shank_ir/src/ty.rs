//! Declared types.

use std::fmt;

/// A type as written in a declaration.
///
/// Scalar type names (`integer`, `real`, `string`, `character`, `boolean`)
/// are plain identifiers in the token stream; only `array of` is keyword
/// syntax.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ShankType {
    Integer,
    Real,
    String,
    Character,
    Boolean,
    Array(Box<ShankType>),
}

impl ShankType {
    /// Resolve a scalar type name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "integer" => Some(ShankType::Integer),
            "real" => Some(ShankType::Real),
            "string" => Some(ShankType::String),
            "character" => Some(ShankType::Character),
            "boolean" => Some(ShankType::Boolean),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ShankType::Integer | ShankType::Real)
    }

    /// Element type of an array, `None` for scalars.
    pub fn element(&self) -> Option<&ShankType> {
        match self {
            ShankType::Array(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for ShankType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShankType::Integer => write!(f, "integer"),
            ShankType::Real => write!(f, "real"),
            ShankType::String => write!(f, "string"),
            ShankType::Character => write!(f, "character"),
            ShankType::Boolean => write!(f, "boolean"),
            ShankType::Array(inner) => write!(f, "array of {inner}"),
        }
    }
}
