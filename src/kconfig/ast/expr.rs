//! Boolean/tristate expression tree
//!
//! Conditions on properties, default values and range bounds all share this
//! representation. The parser never evaluates expressions; it only builds them.

use serde::Serialize;
use std::fmt;

/// A boolean/tristate expression as it appears between `[` and `]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Expr {
    /// Tristate `y`, also the "always true" condition
    Yes,
    /// Tristate `m`
    Mod,
    /// Tristate `n`
    No,
    /// A symbol reference
    Id(String),
    /// A quoted string value, escape pairs kept verbatim
    Literal(String),
    /// A decimal value, kept as written so any width round-trips
    Int(String),
    /// A hex value, kept as written (including the `0x` prefix)
    Hex(String),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Eq(Box<Expr>, Box<Expr>),
    NotEq(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// The condition used whenever the source omits one
    pub fn always_true() -> Self {
        Expr::Yes
    }

    pub fn is_always_true(&self) -> bool {
        matches!(self, Expr::Yes)
    }

    pub fn id(name: impl Into<String>) -> Self {
        Expr::Id(name.into())
    }

    pub fn int(value: impl fmt::Display) -> Self {
        Expr::Int(value.to_string())
    }

    pub fn not(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn and(lhs: Expr, rhs: Expr) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Expr, rhs: Expr) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn eq(lhs: Expr, rhs: Expr) -> Self {
        Expr::Eq(Box::new(lhs), Box::new(rhs))
    }

    pub fn not_eq(lhs: Expr, rhs: Expr) -> Self {
        Expr::NotEq(Box::new(lhs), Box::new(rhs))
    }

    /// Conjoin two conditions, dropping always-true operands
    pub fn conjoin(self, other: Expr) -> Self {
        match (self.is_always_true(), other.is_always_true()) {
            (_, true) => self,
            (true, false) => other,
            (false, false) => Expr::and(self, other),
        }
    }

    /// Binding strength used when printing; higher binds tighter
    fn precedence(&self) -> u8 {
        match self {
            Expr::Or(..) => 1,
            Expr::And(..) => 2,
            Expr::Eq(..) | Expr::NotEq(..) => 3,
            Expr::Not(..) => 4,
            _ => 5,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

/// Prints the expression in the extract's concrete syntax, parenthesizing
/// only where precedence requires it. Operators associate to the left.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Yes => write!(f, "y"),
            Expr::Mod => write!(f, "m"),
            Expr::No => write!(f, "n"),
            Expr::Id(name) => write!(f, "{}", name),
            Expr::Literal(text) => write!(f, "\"{}\"", text),
            Expr::Int(value) => write!(f, "{}", value),
            Expr::Hex(text) => write!(f, "{}", text),
            Expr::Not(inner) => {
                write!(f, "!")?;
                inner.fmt_operand(f, 4)
            }
            Expr::And(lhs, rhs) => {
                lhs.fmt_operand(f, 2)?;
                write!(f, " && ")?;
                rhs.fmt_operand(f, 3)
            }
            Expr::Or(lhs, rhs) => {
                lhs.fmt_operand(f, 1)?;
                write!(f, " || ")?;
                rhs.fmt_operand(f, 2)
            }
            Expr::Eq(lhs, rhs) => {
                lhs.fmt_operand(f, 4)?;
                write!(f, "=")?;
                rhs.fmt_operand(f, 4)
            }
            Expr::NotEq(lhs, rhs) => {
                lhs.fmt_operand(f, 4)?;
                write!(f, "!=")?;
                rhs.fmt_operand(f, 4)
            }
        }
    }
}
