//! # qdsl: typed query expressions, rendered per dialect
//!
//! Build predicates and expressions as immutable trees, then render them to
//! query text for a target dialect. Each dialect is a table of templates
//! (`"{0} and {1}"`) with precedence levels, so the same tree renders as
//! ANSI SQL, PostgreSQL, MySQL, JPQL and others, with parentheses only
//! where they are needed.
//!
//! ## Quick Example
//!
//! ```
//! use qdsl::prelude::*;
//!
//! let pred = and(
//!     eq(Expr::path("a"), Expr::constant(1)),
//!     or(eq(Expr::path("b"), Expr::constant(2)), eq(Expr::path("c"), Expr::constant(3))),
//! );
//!
//! let q = pred.to_query(Dialect::Sql).unwrap();
//! assert_eq!(q.text, "a = ? and (b = ? or c = ?)");
//! assert_eq!(q.bindings.len(), 3);
//!
//! let q = pred.to_query(Dialect::Postgres).unwrap();
//! assert_eq!(q.text, "a = $1 and (b = $2 or c = $3)");
//! ```
//!
//! ## Template markers
//!
//! | Marker      | Meaning                                 |
//! |-------------|-----------------------------------------|
//! | `{0}`       | operand, rendered normally              |
//! | `{0s}`      | operand inlined as raw text             |
//! | `{0l}`      | operand case-folded                     |
//! | `{%0%}`     | LIKE operand, wildcards escaped         |
//! | `{%%0%%}`   | LIKE operand, escaped and case-folded   |

pub mod ast;
pub mod config;
pub mod error;
pub mod serializer;
pub mod templates;

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::*;
    pub use crate::config::RenderConfig;
    pub use crate::error::*;
    pub use crate::serializer::{
        Binding, ParamBindings, RenderOptions, Rendered, Serializer, ToQuery,
    };
    pub use crate::templates::{Dialect, PlaceholderStyle, Templates, TemplatesBuilder};
}

/// Render `expr` with a built-in dialect and default options.
///
/// # Example
///
/// ```
/// use qdsl::ast::{builders::is_null, Expr};
/// use qdsl::templates::Dialect;
///
/// let q = qdsl::render(&is_null(Expr::dotted("user.email")), Dialect::Jpql).unwrap();
/// assert_eq!(q.text, "user.email is null");
/// ```
pub fn render(
    expr: &ast::Expr,
    dialect: templates::Dialect,
) -> error::QdslResult<serializer::Rendered> {
    serializer::ToQuery::to_query(expr, dialect)
}
