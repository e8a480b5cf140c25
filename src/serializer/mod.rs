//! Expression serializer.
//!
//! Walks an expression tree depth-first and expands each node through the
//! active dialect's template, inserting parentheses only where precedence
//! requires them. Constants and parameters become placeholders (recorded in
//! the binding list in text order) or, in literal mode, inline literals.
//!
//! Rendering holds no state between calls: the same tree rendered twice
//! yields identical text and bindings, and one [`Templates`] table may be
//! shared by any number of concurrent renders.

pub mod literal;

#[cfg(test)]
mod tests;

use crate::ast::builders::{concat, lower};
use crate::ast::{Expr, Operation, Operator, Path, Value};
use crate::error::{QdslError, QdslResult};
use crate::templates::{Dialect, Element, Marker, Template, Templates};
use literal::escape_like;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Values for named parameters, looked up at render time.
pub type ParamBindings = HashMap<String, Value>;

/// One bound value and the node it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    pub node: Expr,
    pub value: Value,
}

/// Output of a render: query text plus bound values in placeholder order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    pub text: String,
    pub bindings: Vec<Binding>,
}

impl Rendered {
    pub fn values(&self) -> Vec<&Value> {
        self.bindings.iter().map(|b| &b.value).collect()
    }
}

impl std::fmt::Display for Rendered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Inline constants as literals instead of binding them.
    #[serde(default)]
    pub use_literals: bool,
}

/// Convert an expression to query text.
pub trait ToQuery {
    /// Render with a built-in dialect and default options.
    fn to_query(&self, dialect: Dialect) -> QdslResult<Rendered> {
        let templates = dialect.templates()?;
        self.to_query_with(&templates, RenderOptions::default(), None)
    }

    fn to_query_with(
        &self,
        templates: &Templates,
        options: RenderOptions,
        params: Option<&ParamBindings>,
    ) -> QdslResult<Rendered>;
}

impl ToQuery for Expr {
    fn to_query_with(
        &self,
        templates: &Templates,
        options: RenderOptions,
        params: Option<&ParamBindings>,
    ) -> QdslResult<Rendered> {
        let mut serializer = Serializer::new(templates).use_literals(options.use_literals);
        if let Some(params) = params {
            serializer = serializer.bindings(params);
        }
        serializer.render(self)
    }
}

/// Renders expressions against one dialect table.
#[derive(Debug, Clone)]
pub struct Serializer<'a> {
    templates: &'a Templates,
    params: Option<&'a ParamBindings>,
    use_literals: bool,
}

#[derive(Default)]
struct RenderState {
    buf: String,
    bindings: Vec<Binding>,
    /// (node, value, label) for numbered placeholder reuse
    labels: Vec<(Expr, Value, usize)>,
}

/// A template argument: an operand, or a bare identifier from a path.
enum Arg<'e> {
    Expr(&'e Expr),
    Ident(&'e str),
}

impl<'a> Serializer<'a> {
    pub fn new(templates: &'a Templates) -> Self {
        Self {
            templates,
            params: None,
            use_literals: false,
        }
    }

    pub fn use_literals(mut self, on: bool) -> Self {
        self.use_literals = on;
        self
    }

    pub fn bindings(mut self, params: &'a ParamBindings) -> Self {
        self.params = Some(params);
        self
    }

    pub fn templates(&self) -> &Templates {
        self.templates
    }

    /// Render `expr`. On error no partial text is returned.
    pub fn render(&self, expr: &Expr) -> QdslResult<Rendered> {
        tracing::trace!(dialect = %self.templates.name(), expr = %expr, "rendering");
        let mut state = RenderState::default();
        self.expr(expr, None, &mut state)?;
        tracing::trace!(
            dialect = %self.templates.name(),
            text = %state.buf,
            bindings = state.bindings.len(),
            "rendered"
        );
        Ok(Rendered {
            text: state.buf,
            bindings: state.bindings,
        })
    }

    /// `context` is the operator whose template this operand sits in.
    fn expr(&self, expr: &Expr, context: Option<Operator>, st: &mut RenderState) -> QdslResult<()> {
        match expr {
            Expr::Path(p) => self.path(p, st),
            Expr::Constant(c) => self.value(expr, c.value(), context, st),
            Expr::Param(p) => {
                let value = self.resolve(p.name())?;
                self.value(expr, value, context, st)
            }
            Expr::Operation(o) => self.operation(o, st),
        }
    }

    fn resolve(&self, name: &str) -> QdslResult<&'a Value> {
        self.params
            .and_then(|params| params.get(name))
            .ok_or_else(|| QdslError::unbound(name))
    }

    fn path(&self, path: &Arc<Path>, st: &mut RenderState) -> QdslResult<()> {
        match path.parent() {
            None => self.apply(Operator::Variable, &[Arg::Ident(path.name())], st),
            Some(parent) => {
                let parent = Expr::Path(Arc::clone(parent));
                self.apply(
                    Operator::Property,
                    &[Arg::Expr(&parent), Arg::Ident(path.name())],
                    st,
                )
            }
        }
    }

    fn operation(&self, op: &Operation, st: &mut RenderState) -> QdslResult<()> {
        let args: Vec<Arg<'_>> = op.args().iter().map(Arg::Expr).collect();
        self.apply(op.operator(), &args, st)
    }

    fn apply(&self, op: Operator, args: &[Arg<'_>], st: &mut RenderState) -> QdslResult<()> {
        let template = self.templates.template(op)?;
        if template.arity() != args.len() {
            return Err(QdslError::TemplateMismatch {
                operator: op,
                dialect: self.templates.name().to_string(),
                pattern: template.pattern().to_string(),
                expected: template.arity(),
                actual: args.len(),
            });
        }
        for (position, element) in template.elements().iter().enumerate() {
            match element {
                Element::Text(text) => st.buf.push_str(text),
                Element::Arg { index, marker } => match &args[*index] {
                    Arg::Ident(name) => st.buf.push_str(&self.templates.quote_identifier(name)),
                    Arg::Expr(e) => {
                        let start = st.buf.len();
                        self.marked(op, template, e, *marker, position == 0, st)?;
                        // `--` would open a line comment
                        if st.buf[..start].ends_with('-') && st.buf[start..].starts_with('-') {
                            st.buf.insert(start, ' ');
                        }
                    }
                },
            }
        }
        Ok(())
    }

    fn marked(
        &self,
        op: Operator,
        template: &Template,
        e: &Expr,
        marker: Marker,
        leading: bool,
        st: &mut RenderState,
    ) -> QdslResult<()> {
        match marker {
            Marker::None => self.operand(op, template, e, leading, st),
            Marker::AsString => self.raw(e, st),
            Marker::Lower => match self.scalar(e)? {
                Some(value) => self.value(e, &value.to_lowercase(), Some(op), st),
                None => self.operand(op, template, &lower(e.clone()), leading, st),
            },
            Marker::Like {
                lead,
                trail,
                ignore_case,
            } => match self.scalar(e)? {
                Some(value) => {
                    let raw = value.to_string();
                    let raw = if ignore_case { raw.to_lowercase() } else { raw };
                    let mut pattern = escape_like(&raw, self.templates.escape());
                    if lead {
                        pattern.insert(0, '%');
                    }
                    if trail {
                        pattern.push('%');
                    }
                    self.value(e, &Value::String(pattern), Some(op), st)
                }
                None => {
                    let mut wrapped = if ignore_case { lower(e.clone()) } else { e.clone() };
                    if lead {
                        wrapped = concat(Expr::constant("%"), wrapped);
                    }
                    if trail {
                        wrapped = concat(wrapped, Expr::constant("%"));
                    }
                    self.operand(op, template, &wrapped, leading, st)
                }
            },
        }
    }

    /// Value of a constant or bound parameter; `None` for paths and operations.
    fn scalar<'e>(&self, e: &'e Expr) -> QdslResult<Option<&'e Value>>
    where
        'a: 'e,
    {
        match e {
            Expr::Constant(c) => Ok(Some(c.value())),
            Expr::Param(p) => self.resolve(p.name()).map(Some),
            _ => Ok(None),
        }
    }

    /// Operand rendered in place, parenthesized when precedence demands it.
    fn operand(
        &self,
        op: Operator,
        template: &Template,
        e: &Expr,
        leading: bool,
        st: &mut RenderState,
    ) -> QdslResult<()> {
        let wrap = match e {
            Expr::Operation(child) => {
                let child_precedence = self.templates.template(child.operator())?.precedence();
                needs_parens(
                    op,
                    template.precedence(),
                    child.operator(),
                    child_precedence,
                    leading,
                )
            }
            _ => false,
        };
        if wrap {
            st.buf.push('(');
        }
        self.expr(e, Some(op), st)?;
        if wrap {
            st.buf.push(')');
        }
        Ok(())
    }

    /// Inline raw text. Single quotes are doubled so the text cannot close a
    /// surrounding string literal.
    fn raw(&self, e: &Expr, st: &mut RenderState) -> QdslResult<()> {
        match self.scalar(e)? {
            Some(value) => {
                st.buf.push_str(&value.to_string().replace('\'', "''"));
                Ok(())
            }
            None => self.expr(e, None, st),
        }
    }

    fn value(
        &self,
        node: &Expr,
        value: &Value,
        context: Option<Operator>,
        st: &mut RenderState,
    ) -> QdslResult<()> {
        if let (Value::List(items), Some(op @ (Operator::In | Operator::NotIn))) = (value, context)
        {
            if items.is_empty() {
                return Err(QdslError::EmptyCollection { operator: op });
            }
        }
        if self.use_literals {
            let text = self
                .templates
                .literals()
                .format(value, self.templates.custom_literals())
                .ok_or_else(|| QdslError::NoLiteral {
                    value: value.to_string(),
                    dialect: self.templates.name().to_string(),
                })?;
            st.buf.push_str(&text);
            return Ok(());
        }
        match value {
            Value::List(items) if self.templates.literals().expand_lists => {
                st.buf.push('(');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        st.buf.push_str(", ");
                    }
                    self.placeholder(node, item, st);
                }
                st.buf.push(')');
            }
            Value::List(_) if context.is_some_and(|op| self.templates.wrap_elements(op)) => {
                st.buf.push('(');
                self.placeholder(node, value, st);
                st.buf.push(')');
            }
            _ => self.placeholder(node, value, st),
        }
        Ok(())
    }

    fn placeholder(&self, node: &Expr, value: &Value, st: &mut RenderState) {
        let style = self.templates.placeholders();
        if style.is_numbered() {
            let existing = st
                .labels
                .iter()
                .find(|(n, v, _)| n == node && v == value)
                .map(|(_, _, label)| *label);
            if let Some(label) = existing {
                st.buf.push_str(&style.render(label));
                return;
            }
        }
        st.bindings.push(Binding {
            node: node.clone(),
            value: value.clone(),
        });
        let label = st.bindings.len();
        if style.is_numbered() {
            st.labels.push((node.clone(), value.clone(), label));
        }
        st.buf.push_str(&style.render(label));
    }
}

/// Parenthesization rule. Lower precedence binds tighter; `None` marks a
/// self-delimiting template that never wraps nor is wrapped.
///
/// A child binding looser than its parent is wrapped. At equal precedence
/// the leading operand is left bare (left associativity) and any other
/// operand is wrapped unless parent and child are the same associative
/// operator.
pub(crate) fn needs_parens(
    parent: Operator,
    parent_precedence: Option<u16>,
    child: Operator,
    child_precedence: Option<u16>,
    leading: bool,
) -> bool {
    match (parent_precedence, child_precedence) {
        (Some(p), Some(c)) if c > p => true,
        (Some(p), Some(c)) if c == p => {
            !leading && !(parent == child && parent.is_associative())
        }
        _ => false,
    }
}
