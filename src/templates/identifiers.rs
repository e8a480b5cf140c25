//! Identifier quoting for path segments.

use serde::{Deserialize, Serialize};

/// Words that must be quoted when used as a path segment.
pub const RESERVED_WORDS: &[&str] = &[
    "all", "and", "any", "as", "asc", "between", "by", "case", "check", "column", "constraint",
    "create", "cross", "default", "delete", "desc", "distinct", "drop", "else", "end", "exists",
    "false", "foreign", "from", "full", "group", "having", "in", "index", "inner", "insert", "is",
    "join", "key", "left", "like", "limit", "not", "null", "offset", "on", "or", "order", "outer",
    "primary", "references", "right", "select", "table", "then", "true", "union", "update",
    "user", "value", "when", "where",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteMode {
    /// Emit names verbatim.
    Never,
    /// Quote reserved words and names that are not plain identifiers.
    #[default]
    Reserved,
    /// Quote every segment.
    Always,
}

/// Delimiters and mode used when rendering a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierQuoting {
    pub open: char,
    pub close: char,
    pub mode: QuoteMode,
}

impl IdentifierQuoting {
    pub const ANSI: Self = Self::new('"', '"', QuoteMode::Reserved);
    pub const BACKTICK: Self = Self::new('`', '`', QuoteMode::Reserved);
    pub const BRACKET: Self = Self::new('[', ']', QuoteMode::Reserved);
    pub const NONE: Self = Self::new('"', '"', QuoteMode::Never);

    pub const fn new(open: char, close: char, mode: QuoteMode) -> Self {
        Self { open, close, mode }
    }

    pub fn with_mode(self, mode: QuoteMode) -> Self {
        Self { mode, ..self }
    }

    pub fn quote(&self, name: &str) -> String {
        let quote = match self.mode {
            QuoteMode::Never => false,
            QuoteMode::Always => true,
            QuoteMode::Reserved => needs_quoting(name),
        };
        if quote {
            let doubled: String = [self.close, self.close].iter().collect();
            format!(
                "{}{}{}",
                self.open,
                name.replace(self.close, &doubled),
                self.close
            )
        } else {
            name.to_string()
        }
    }
}

impl Default for IdentifierQuoting {
    fn default() -> Self {
        Self::ANSI
    }
}

fn needs_quoting(name: &str) -> bool {
    let lower = name.to_lowercase();
    name.is_empty()
        || RESERVED_WORDS.contains(&lower.as_str())
        || name.chars().any(|c| !c.is_alphanumeric() && c != '_')
        || name.chars().next().is_some_and(|c| c.is_numeric())
}
