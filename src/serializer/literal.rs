//! Inline literal formatting and LIKE escaping.

use crate::ast::Value;
use serde::{Deserialize, Serialize};

/// Dialect hook for values only the dialect knows how to spell
/// (`Value::Custom`). Returning `None` falls back to a quoted string.
pub trait CustomLiteral: Send + Sync + std::fmt::Debug {
    fn format(&self, ty: &str, text: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumLiteral {
    /// `'VARIANT'`
    #[default]
    Name,
    /// `Type.VARIANT`
    Qualified,
}

/// How constants are spelled when inlined.
///
/// Date and time patterns take the ISO text of the value at `{0}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralPolicy {
    pub true_literal: String,
    pub false_literal: String,
    /// Backslashes are doubled inside string literals as well as quotes.
    pub escape_backslash: bool,
    pub date: String,
    pub time: String,
    pub datetime: String,
    pub enums: EnumLiteral,
    /// Collection constants are bound element by element as `(?, ?, ?)`
    /// rather than as a single value.
    pub expand_lists: bool,
}

impl Default for LiteralPolicy {
    fn default() -> Self {
        Self {
            true_literal: "true".to_string(),
            false_literal: "false".to_string(),
            escape_backslash: false,
            date: "(date '{0}')".to_string(),
            time: "(time '{0}')".to_string(),
            datetime: "(timestamp '{0}')".to_string(),
            enums: EnumLiteral::Name,
            expand_lists: true,
        }
    }
}

impl LiteralPolicy {
    /// Booleans spelled as `1`/`0`.
    pub fn numeric_booleans(mut self) -> Self {
        self.true_literal = "1".to_string();
        self.false_literal = "0".to_string();
        self
    }

    pub fn dates(mut self, date: &str, time: &str, datetime: &str) -> Self {
        self.date = date.to_string();
        self.time = time.to_string();
        self.datetime = datetime.to_string();
        self
    }

    pub fn quote(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('\'');
        for c in s.chars() {
            match c {
                '\'' => out.push_str("''"),
                '\\' if self.escape_backslash => out.push_str("\\\\"),
                c => out.push(c),
            }
        }
        out.push('\'');
        out
    }

    /// Spell `value` as inline text.
    ///
    /// Negative numbers are wrapped as `(-3)` so they never touch a preceding
    /// `-`. Non-finite floats go to the custom hook as type `float`; `None`
    /// means the dialect has no spelling for the value.
    pub fn format(&self, value: &Value, custom: Option<&dyn CustomLiteral>) -> Option<String> {
        let text = match value {
            Value::Bool(true) => self.true_literal.clone(),
            Value::Bool(false) => self.false_literal.clone(),
            Value::Float(f) if !f.is_finite() => {
                let text = if f.is_nan() {
                    "NaN"
                } else if *f > 0.0 {
                    "Infinity"
                } else {
                    "-Infinity"
                };
                return custom.and_then(|handler| handler.format("float", text));
            }
            Value::Int(n) if *n < 0 => format!("({})", n),
            Value::Float(f) if f.is_sign_negative() => format!("({})", f),
            Value::Decimal(d) if d.is_sign_negative() => format!("({})", d),
            Value::Int(_) | Value::Float(_) | Value::Decimal(_) => value.to_string(),
            Value::String(s) => self.quote(s),
            Value::Date(_) => self.date.replace("{0}", &value.to_string()),
            Value::Time(_) => self.time.replace("{0}", &value.to_string()),
            Value::DateTime(_) => self.datetime.replace("{0}", &value.to_string()),
            Value::Enum { ty, variant } => match self.enums {
                EnumLiteral::Name => self.quote(variant),
                EnumLiteral::Qualified => format!("{}.{}", ty, variant),
            },
            Value::Uuid(u) => self.quote(&u.to_string()),
            Value::Custom { ty, text } => custom
                .and_then(|handler| handler.format(ty, text))
                .unwrap_or_else(|| self.quote(text)),
            Value::List(items) => {
                let parts = items
                    .iter()
                    .map(|v| self.format(v, custom))
                    .collect::<Option<Vec<_>>>()?;
                format!("({})", parts.join(", "))
            }
        };
        Some(text)
    }
}

/// Escape LIKE wildcards (and the escape character itself) so `s` matches literally.
pub fn escape_like(s: &str, escape: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == escape || c == '%' || c == '_' {
            out.push(escape);
        }
        out.push(c);
    }
    out
}
