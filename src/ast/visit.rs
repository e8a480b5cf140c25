//! Double-dispatch visiting for tree consumers other than the serializer.

use crate::ast::{Constant, Expr, Operation, Param, Path};
use std::sync::Arc;

/// Per-variant handlers, dispatched by [`Expr::accept`].
pub trait Visitor {
    type Output;

    fn visit_path(&mut self, path: &Arc<Path>) -> Self::Output;
    fn visit_constant(&mut self, constant: &Constant) -> Self::Output;
    fn visit_param(&mut self, param: &Param) -> Self::Output;
    fn visit_operation(&mut self, operation: &Operation) -> Self::Output;
}

impl Expr {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Path(p) => visitor.visit_path(p),
            Expr::Constant(c) => visitor.visit_constant(c),
            Expr::Param(p) => visitor.visit_param(p),
            Expr::Operation(o) => visitor.visit_operation(o),
        }
    }
}

/// Collects the distinct paths referenced by a tree, in first-seen order.
#[derive(Debug, Default)]
pub struct PathCollector {
    paths: Vec<Arc<Path>>,
}

impl PathCollector {
    pub fn collect(expr: &Expr) -> Vec<Arc<Path>> {
        let mut collector = Self::default();
        expr.accept(&mut collector);
        collector.paths
    }
}

impl Visitor for PathCollector {
    type Output = ();

    fn visit_path(&mut self, path: &Arc<Path>) {
        if !self.paths.iter().any(|p| p == path) {
            self.paths.push(Arc::clone(path));
        }
    }

    fn visit_constant(&mut self, _constant: &Constant) {}

    fn visit_param(&mut self, _param: &Param) {}

    fn visit_operation(&mut self, operation: &Operation) {
        for arg in operation.args() {
            arg.accept(self);
        }
    }
}

/// Collects the distinct parameter names of a tree, in first-seen order.
#[derive(Debug, Default)]
pub struct ParamCollector {
    names: Vec<String>,
}

impl ParamCollector {
    pub fn collect(expr: &Expr) -> Vec<String> {
        let mut collector = Self::default();
        expr.accept(&mut collector);
        collector.names
    }
}

impl Visitor for ParamCollector {
    type Output = ();

    fn visit_path(&mut self, _path: &Arc<Path>) {}

    fn visit_constant(&mut self, _constant: &Constant) {}

    fn visit_param(&mut self, param: &Param) {
        if !self.names.iter().any(|n| n == param.name()) {
            self.names.push(param.name().to_string());
        }
    }

    fn visit_operation(&mut self, operation: &Operation) {
        for arg in operation.args() {
            arg.accept(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::*;
    use crate::ast::ValueKind;

    #[test]
    fn test_collect_paths() {
        let e = and(
            eq(Expr::dotted("u.name"), Expr::constant("x")),
            or(
                eq(Expr::dotted("u.name"), Expr::constant("y")),
                is_null(Expr::dotted("u.email")),
            ),
        );
        let paths: Vec<String> = PathCollector::collect(&e)
            .iter()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(paths, vec!["u.name", "u.email"]);
    }

    #[test]
    fn test_collect_params() {
        let e = and(
            eq(Expr::path("a"), Expr::param("first", ValueKind::Numeric)),
            ne(Expr::path("b"), Expr::param("first", ValueKind::Numeric)),
        );
        assert_eq!(ParamCollector::collect(&e), vec!["first"]);
    }
}
