mod dialects;
mod scenarios;

use crate::ast::Expr;
use crate::serializer::{Rendered, Serializer};
use crate::templates::Dialect;

pub(super) fn render(dialect: Dialect, expr: &Expr) -> Rendered {
    let templates = dialect.templates().unwrap();
    Serializer::new(&templates).render(expr).unwrap()
}

pub(super) fn literal(dialect: Dialect, expr: &Expr) -> String {
    let templates = dialect.templates().unwrap();
    let rendered = Serializer::new(&templates)
        .use_literals(true)
        .render(expr)
        .unwrap();
    assert!(rendered.bindings.is_empty());
    rendered.text
}
