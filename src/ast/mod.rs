//! Expression node model.

pub mod builders;
pub mod expr;
pub mod ops;
pub mod transform;
pub mod values;
pub mod visit;

pub use expr::{Constant, Expr, Operation, Param, Path};
pub use ops::{Operator, OperatorFamily};
pub use values::{Value, ValueKind};
pub use visit::{ParamCollector, PathCollector, Visitor};
