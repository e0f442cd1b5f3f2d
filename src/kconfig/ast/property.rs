//! Property records attached to configs, choices and menus
//!
//! Every property carries exactly one condition. When the source has no
//! `if [..]` clause the condition is [`Expr::Yes`].

use super::expr::Expr;
use serde::Serialize;
use std::fmt;

/// `env NAME [if [..]]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Env {
    pub name: String,
    pub condition: Expr,
}

/// `prompt "text" [if [..]]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prompt {
    pub text: String,
    pub condition: Expr,
}

/// `select TARGET [if [..]]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Select {
    pub target: String,
    pub condition: Expr,
}

/// `default [value] [if [..]]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefaultValue {
    pub value: Expr,
    pub condition: Expr,
}

/// `range [low high] [if [..]]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueRange {
    pub low: Expr,
    pub high: Expr,
    pub condition: Expr,
}

/// `depends on [..]`, also used as the visibility guard of a menu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependsOn {
    pub condition: Expr,
}

impl Prompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            condition: Expr::always_true(),
        }
    }

    pub fn with_condition(mut self, condition: Expr) -> Self {
        self.condition = condition;
        self
    }
}

impl Env {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            condition: Expr::always_true(),
        }
    }
}

impl Select {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            condition: Expr::always_true(),
        }
    }

    pub fn with_condition(mut self, condition: Expr) -> Self {
        self.condition = condition;
        self
    }
}

impl DefaultValue {
    pub fn new(value: Expr) -> Self {
        Self {
            value,
            condition: Expr::always_true(),
        }
    }

    pub fn with_condition(mut self, condition: Expr) -> Self {
        self.condition = condition;
        self
    }
}

impl ValueRange {
    pub fn new(low: Expr, high: Expr) -> Self {
        Self {
            low,
            high,
            condition: Expr::always_true(),
        }
    }
}

impl DependsOn {
    pub fn new(condition: Expr) -> Self {
        Self { condition }
    }
}

/// A single property clause, before it is sorted into a node's typed fields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "property")]
pub enum Property {
    Env(Env),
    Prompt(Prompt),
    Select(Select),
    Default(DefaultValue),
    Range(ValueRange),
    DependsOn(DependsOn),
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Env(p) => write!(f, "Env({})", p.name),
            Property::Prompt(p) => write!(f, "Prompt('{}')", p.text),
            Property::Select(p) => write!(f, "Select({})", p.target),
            Property::Default(p) => write!(f, "Default([{}])", p.value),
            Property::Range(p) => write!(f, "Range([{} {}])", p.low, p.high),
            Property::DependsOn(p) => write!(f, "DependsOn([{}])", p.condition),
        }
    }
}
