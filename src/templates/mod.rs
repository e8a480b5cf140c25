//! Dialect template tables.
//!
//! A [`Templates`] table maps each operator to a pattern and a precedence,
//! and carries the dialect's literal, placeholder and quoting policies.
//! Tables extend a parent: operator lookup walks the chain, child entries
//! shadow parent entries.
//!
//! ```
//! use qdsl::ast::Operator;
//! use qdsl::templates::{Dialect, TemplatesBuilder};
//!
//! let sql = Dialect::Sql.templates().unwrap();
//! let custom = TemplatesBuilder::extending(&sql, "sql-xor")
//!     .add_prec(Operator::Xor, "({0} <> {1})", 18)
//!     .build()
//!     .unwrap();
//! assert_eq!(custom.template(Operator::Xor).unwrap().pattern(), "({0} <> {1})");
//! assert_eq!(custom.template(Operator::And).unwrap().pattern(), "{0} and {1}");
//! ```

mod base;
mod dialect;
pub mod identifiers;
pub mod jpql;
pub mod pattern;
pub mod sql;

pub use dialect::Dialect;
pub use identifiers::{IdentifierQuoting, QuoteMode};
pub use pattern::{Element, Marker, Template};

use crate::ast::Operator;
use crate::error::{QdslError, QdslResult};
use crate::serializer::literal::{CustomLiteral, LiteralPolicy};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// Precedence levels shared by the built-in tables. Lower binds tighter.
pub mod precedence {
    pub const ALIAS: u16 = 0;
    pub const NEGATE: u16 = 6;
    pub const MULT: u16 = 7;
    pub const ADD: u16 = 13;
    pub const CONCAT: u16 = 14;
    pub const COMPARISON: u16 = 18;
    pub const LIKE: u16 = 26;
    pub const NULL_CHECK: u16 = 26;
    pub const IN: u16 = 27;
    pub const BETWEEN: u16 = 30;
    pub const NOT: u16 = 35;
    pub const AND: u16 = 36;
    pub const OR: u16 = 38;
    pub const XOR: u16 = 39;
}

/// How bound values are marked in the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// `?`
    #[default]
    Question,
    /// `?1`, `?2`
    Positional,
    /// `$1`, `$2`
    Dollar,
    /// `:1`, `:2`
    Colon,
}

impl PlaceholderStyle {
    /// Numbered styles reuse the label of an equal, earlier value.
    pub fn is_numbered(&self) -> bool {
        !matches!(self, PlaceholderStyle::Question)
    }

    /// Placeholder text for the 1-based bind position `index`.
    pub fn render(&self, index: usize) -> String {
        match self {
            PlaceholderStyle::Question => "?".to_string(),
            PlaceholderStyle::Positional => format!("?{}", index),
            PlaceholderStyle::Dollar => format!("${}", index),
            PlaceholderStyle::Colon => format!(":{}", index),
        }
    }
}

/// Capability flags the surrounding query builder consults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub exists_projection: Option<String>,
    pub wrap_elements: HashSet<Operator>,
    pub type_as_string: bool,
    pub enum_in_path_supported: bool,
    pub select1_supported: bool,
}

/// An immutable, shareable dialect table.
#[derive(Debug)]
pub struct Templates {
    name: String,
    parent: Option<Arc<Templates>>,
    escape: char,
    entries: HashMap<Operator, Template>,
    literals: LiteralPolicy,
    placeholders: PlaceholderStyle,
    quoting: IdentifierQuoting,
    capabilities: Capabilities,
    custom_literals: Option<Arc<dyn CustomLiteral>>,
}

impl Templates {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Arc<Templates>> {
        self.parent.as_ref()
    }

    /// Escape character used in LIKE patterns.
    pub fn escape(&self) -> char {
        self.escape
    }

    /// Entry for `op` in this table or the nearest ancestor that has one.
    pub fn find(&self, op: Operator) -> Option<&Template> {
        let mut current = Some(self);
        while let Some(table) = current {
            if let Some(t) = table.entries.get(&op) {
                return Some(t);
            }
            current = table.parent.as_deref();
        }
        None
    }

    /// Like [`find`](Self::find), failing with `UnsupportedOperator`.
    pub fn template(&self, op: Operator) -> QdslResult<&Template> {
        self.find(op)
            .ok_or_else(|| QdslError::unsupported(op, self.name.as_str()))
    }

    pub fn supports(&self, op: Operator) -> bool {
        self.find(op).is_some()
    }

    /// Every reachable entry, child entries shadowing parent entries.
    pub fn entries(&self) -> BTreeMap<Operator, &Template> {
        let mut merged = BTreeMap::new();
        let mut current = Some(self);
        while let Some(table) = current {
            for (op, t) in &table.entries {
                merged.entry(*op).or_insert(t);
            }
            current = table.parent.as_deref();
        }
        merged
    }

    /// Table names from this one up to the root.
    pub fn lineage(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = Some(self);
        while let Some(table) = current {
            names.push(table.name.as_str());
            current = table.parent.as_deref();
        }
        names
    }

    pub fn literals(&self) -> &LiteralPolicy {
        &self.literals
    }

    pub fn placeholders(&self) -> PlaceholderStyle {
        self.placeholders
    }

    pub fn quoting(&self) -> IdentifierQuoting {
        self.quoting
    }

    pub fn quote_identifier(&self, name: &str) -> String {
        self.quoting.quote(name)
    }

    pub fn custom_literals(&self) -> Option<&dyn CustomLiteral> {
        self.custom_literals.as_deref()
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Projection used inside `exists(...)` subqueries, if the dialect needs one.
    pub fn exists_projection(&self) -> Option<&str> {
        self.capabilities.exists_projection.as_deref()
    }

    /// Whether a collection operand of `op` is wrapped in parentheses when bound whole.
    pub fn wrap_elements(&self, op: Operator) -> bool {
        self.capabilities.wrap_elements.contains(&op)
    }

    pub fn is_type_as_string(&self) -> bool {
        self.capabilities.type_as_string
    }

    pub fn is_enum_in_path_supported(&self) -> bool {
        self.capabilities.enum_in_path_supported
    }

    pub fn is_select1_supported(&self) -> bool {
        self.capabilities.select1_supported
    }
}

/// Builder for [`Templates`].
///
/// Patterns are parsed as they are added; the first malformed pattern is
/// reported by [`build`](Self::build).
#[derive(Debug)]
pub struct TemplatesBuilder {
    name: String,
    parent: Option<Arc<Templates>>,
    escape: char,
    entries: HashMap<Operator, Template>,
    literals: LiteralPolicy,
    placeholders: PlaceholderStyle,
    quoting: IdentifierQuoting,
    capabilities: Capabilities,
    custom_literals: Option<Arc<dyn CustomLiteral>>,
    error: Option<QdslError>,
}

impl TemplatesBuilder {
    /// A root table with ANSI policies and no entries.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            escape: '\\',
            entries: HashMap::new(),
            literals: LiteralPolicy::default(),
            placeholders: PlaceholderStyle::default(),
            quoting: IdentifierQuoting::default(),
            capabilities: Capabilities::default(),
            custom_literals: None,
            error: None,
        }
    }

    /// A table extending `parent`; policies start as copies of the parent's.
    pub fn extending(parent: &Arc<Templates>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: Some(Arc::clone(parent)),
            escape: parent.escape,
            entries: HashMap::new(),
            literals: parent.literals.clone(),
            placeholders: parent.placeholders,
            quoting: parent.quoting,
            capabilities: parent.capabilities.clone(),
            custom_literals: parent.custom_literals.clone(),
            error: None,
        }
    }

    pub fn escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    /// Escape character this table will use, for building LIKE patterns.
    pub fn escape_char(&self) -> char {
        self.escape
    }

    /// Add a self-delimiting entry (never parenthesized). Last write wins.
    pub fn add(self, op: Operator, pattern: &str) -> Self {
        self.insert(op, pattern, None)
    }

    /// Add an entry with a precedence level. Last write wins.
    pub fn add_prec(self, op: Operator, pattern: &str, precedence: u16) -> Self {
        self.insert(op, pattern, Some(precedence))
    }

    fn insert(mut self, op: Operator, pattern: &str, precedence: Option<u16>) -> Self {
        match Template::parse(pattern, precedence) {
            Ok(t) => {
                self.entries.insert(op, t);
            }
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
        self
    }

    pub fn literals(mut self, literals: LiteralPolicy) -> Self {
        self.literals = literals;
        self
    }

    pub fn placeholders(mut self, style: PlaceholderStyle) -> Self {
        self.placeholders = style;
        self
    }

    pub fn quoting(mut self, quoting: IdentifierQuoting) -> Self {
        self.quoting = quoting;
        self
    }

    pub fn custom_literals(mut self, handler: Arc<dyn CustomLiteral>) -> Self {
        self.custom_literals = Some(handler);
        self
    }

    pub fn exists_projection(mut self, projection: Option<&str>) -> Self {
        self.capabilities.exists_projection = projection.map(str::to_string);
        self
    }

    pub fn wrap_elements(mut self, op: Operator) -> Self {
        self.capabilities.wrap_elements.insert(op);
        self
    }

    pub fn type_as_string(mut self, on: bool) -> Self {
        self.capabilities.type_as_string = on;
        self
    }

    pub fn enum_in_path_supported(mut self, on: bool) -> Self {
        self.capabilities.enum_in_path_supported = on;
        self
    }

    pub fn select1_supported(mut self, on: bool) -> Self {
        self.capabilities.select1_supported = on;
        self
    }

    pub fn build(self) -> QdslResult<Arc<Templates>> {
        if let Some(e) = self.error {
            return Err(e);
        }
        tracing::debug!(
            dialect = %self.name,
            parent = self.parent.as_ref().map(|p| p.name.as_str()).unwrap_or("-"),
            entries = self.entries.len(),
            "built template table"
        );
        Ok(Arc::new(Templates {
            name: self.name,
            parent: self.parent,
            escape: self.escape,
            entries: self.entries,
            literals: self.literals,
            placeholders: self.placeholders,
            quoting: self.quoting,
            capabilities: self.capabilities,
            custom_literals: self.custom_literals,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Arc<Templates> {
        TemplatesBuilder::new("root")
            .add_prec(Operator::And, "{0} and {1}", precedence::AND)
            .add(Operator::Lower, "lower({0})")
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup_walks_parents() {
        let child = TemplatesBuilder::extending(&root(), "child")
            .add(Operator::Lower, "lcase({0})")
            .build()
            .unwrap();
        assert_eq!(child.template(Operator::Lower).unwrap().pattern(), "lcase({0})");
        assert_eq!(child.template(Operator::And).unwrap().pattern(), "{0} and {1}");
        assert_eq!(child.lineage(), vec!["child", "root"]);
        assert_eq!(child.entries().len(), 2);
    }

    #[test]
    fn test_missing_operator() {
        let err = root().template(Operator::Xnor).unwrap_err();
        assert!(matches!(
            err,
            QdslError::UnsupportedOperator {
                operator: Operator::Xnor,
                ..
            }
        ));
    }

    #[test]
    fn test_last_write_wins() {
        let t = TemplatesBuilder::new("t")
            .add(Operator::Upper, "upper({0})")
            .add(Operator::Upper, "ucase({0})")
            .build()
            .unwrap();
        assert_eq!(t.template(Operator::Upper).unwrap().pattern(), "ucase({0})");
    }

    #[test]
    fn test_malformed_pattern_fails_build() {
        let err = TemplatesBuilder::new("bad")
            .add(Operator::Upper, "upper({0q})")
            .build()
            .unwrap_err();
        assert!(matches!(err, QdslError::InvalidTemplate { .. }));
    }

    #[test]
    fn test_policies_inherited() {
        let parent = TemplatesBuilder::new("p")
            .placeholders(PlaceholderStyle::Dollar)
            .escape('!')
            .select1_supported(true)
            .build()
            .unwrap();
        let child = TemplatesBuilder::extending(&parent, "c").build().unwrap();
        assert_eq!(child.placeholders(), PlaceholderStyle::Dollar);
        assert_eq!(child.escape(), '!');
        assert!(child.is_select1_supported());
    }

    #[test]
    fn test_placeholder_styles() {
        assert_eq!(PlaceholderStyle::Question.render(3), "?");
        assert_eq!(PlaceholderStyle::Positional.render(3), "?3");
        assert_eq!(PlaceholderStyle::Dollar.render(1), "$1");
        assert_eq!(PlaceholderStyle::Colon.render(2), ":2");
        assert!(!PlaceholderStyle::Question.is_numbered());
    }
}
