//! Runtime values.

use std::fmt;

use shank_ir::{Expr, ShankType};

/// A Shank runtime value.
///
/// Values are plain data. Cloning is a deep copy, which is what value
/// parameters get; sharing between a caller and a callee happens one level
/// up, through [`Slot`](crate::Slot).
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Integer(i32),
    Real(f32),
    Str(String),
    Char(char),
    Bool(bool),
    Array(ArrayValue),
}

/// An array keeps its declared element type so it can grow with defaults.
#[derive(Clone, PartialEq, Debug)]
pub struct ArrayValue {
    pub element: ShankType,
    pub items: Vec<Value>,
}

impl ArrayValue {
    pub fn new(element: ShankType) -> Self {
        ArrayValue {
            element,
            items: Vec::new(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Store `value` at `index`, padding with element defaults if the array
    /// is shorter.
    pub fn store(&mut self, index: usize, value: Value) {
        if index >= self.items.len() {
            let fill = Value::default_for(&self.element);
            self.items.resize(index + 1, fill);
        }
        self.items[index] = value;
    }
}

impl Value {
    /// Initial value of a local of type `ty`.
    pub fn default_for(ty: &ShankType) -> Value {
        match ty {
            ShankType::Integer => Value::Integer(0),
            ShankType::Real => Value::Real(0.0),
            ShankType::String => Value::Str(String::new()),
            ShankType::Character => Value::Char('\0'),
            ShankType::Boolean => Value::Bool(false),
            ShankType::Array(element) => Value::Array(ArrayValue::new((**element).clone())),
        }
    }

    /// Value of a literal node; `None` for anything else.
    pub fn from_literal(expr: &Expr) -> Option<Value> {
        match expr {
            Expr::Integer(i) => Some(Value::Integer(*i)),
            Expr::Real(r) => Some(Value::Real(*r)),
            Expr::Str(s) => Some(Value::Str(s.clone())),
            Expr::Char(c) => Some(Value::Char(*c)),
            Expr::Bool(b) => Some(Value::Bool(*b)),
            _ => None,
        }
    }

    pub fn shank_type(&self) -> ShankType {
        match self {
            Value::Integer(_) => ShankType::Integer,
            Value::Real(_) => ShankType::Real,
            Value::Str(_) => ShankType::String,
            Value::Char(_) => ShankType::Character,
            Value::Bool(_) => ShankType::Boolean,
            Value::Array(array) => ShankType::Array(Box::new(array.element.clone())),
        }
    }

    pub fn conforms_to(&self, ty: &ShankType) -> bool {
        match (self, ty) {
            (Value::Integer(_), ShankType::Integer)
            | (Value::Real(_), ShankType::Real)
            | (Value::Str(_), ShankType::String)
            | (Value::Char(_), ShankType::Character)
            | (Value::Bool(_), ShankType::Boolean) => true,
            (Value::Array(array), ShankType::Array(element)) => array.element == **element,
            _ => false,
        }
    }

    /// Convert to `ty` for storage, widening integers into reals.
    ///
    /// Gives the value back unchanged when it does not fit.
    #[expect(
        clippy::cast_precision_loss,
        reason = "integer to real widening is the language's only implicit conversion"
    )]
    pub fn coerce_to(self, ty: &ShankType) -> Result<Value, Value> {
        match (self, ty) {
            (Value::Integer(i), ShankType::Real) => Ok(Value::Real(i as f32)),
            (value, ty) if value.conforms_to(ty) => Ok(value),
            (value, _) => Err(value),
        }
    }

    /// Parse input text into a value of the same kind as `self`.
    ///
    /// Unparseable numbers read as zero, booleans accept `true`, `1`, and
    /// `yes`, and characters take the first character of the line. Arrays
    /// cannot be read.
    pub fn parse_like(&self, text: &str) -> Option<Value> {
        let value = match self {
            Value::Integer(_) => Value::Integer(text.trim().parse().unwrap_or(0)),
            Value::Real(_) => Value::Real(text.trim().parse().unwrap_or(0.0)),
            Value::Str(_) => Value::Str(text.to_string()),
            Value::Char(_) => Value::Char(text.chars().next().unwrap_or('\0')),
            Value::Bool(_) => {
                let word = text.trim().to_ascii_lowercase();
                Value::Bool(matches!(word.as_str(), "true" | "1" | "yes"))
            }
            Value::Array(_) => return None,
        };
        Some(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            // Reals always show a fractional part.
            Value::Real(r) if r.is_finite() && r.fract() == 0.0 => write!(f, "{r:.1}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Array(array) => {
                write!(f, "[")?;
                for (i, item) in array.items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests;
