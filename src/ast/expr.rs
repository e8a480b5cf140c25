use crate::ast::{Operator, Value, ValueKind};
use crate::error::{QdslError, QdslResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An immutable expression node.
///
/// Children are shared through `Arc`, so cloning is cheap and a subtree may
/// hang off several parents (or several threads) at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Path(Arc<Path>),
    Constant(Arc<Constant>),
    Param(Arc<Param>),
    Operation(Arc<Operation>),
}

/// A named reference, optionally nested under a parent path (`a.b.c`).
///
/// Paths are built bottom-up from existing parents, which rules out cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<Arc<Path>>,
    name: String,
    #[serde(default)]
    kind: ValueKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    value: Value,
}

/// Named placeholder whose value is supplied at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Param {
    name: String,
    #[serde(default)]
    kind: ValueKind,
}

/// Operator applied to an ordered operand list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "OperationRepr")]
pub struct Operation {
    op: Operator,
    args: Vec<Expr>,
    #[serde(default)]
    kind: ValueKind,
}

#[derive(Deserialize)]
struct OperationRepr {
    op: Operator,
    #[serde(default)]
    args: Vec<Expr>,
    kind: Option<ValueKind>,
}

impl TryFrom<OperationRepr> for Operation {
    type Error = QdslError;

    fn try_from(repr: OperationRepr) -> Result<Self, Self::Error> {
        match repr.kind {
            Some(kind) => Operation::new(kind, repr.op, repr.args),
            None => {
                let kind = repr.op.result_kind(repr.args.first().map(Expr::kind));
                Operation::new(kind, repr.op, repr.args)
            }
        }
    }
}

impl Path {
    /// A root path (rendered through the `VARIABLE` template).
    pub fn root(name: impl Into<String>) -> Arc<Path> {
        Arc::new(Path {
            parent: None,
            name: name.into(),
            kind: ValueKind::Custom,
        })
    }

    /// A property of this path (rendered through the `PROPERTY` template).
    pub fn child(self: &Arc<Self>, name: impl Into<String>) -> Arc<Path> {
        Arc::new(Path {
            parent: Some(Arc::clone(self)),
            name: name.into(),
            kind: ValueKind::Custom,
        })
    }

    /// Same path with a different result kind.
    pub fn typed(&self, kind: ValueKind) -> Arc<Path> {
        Arc::new(Path {
            parent: self.parent.clone(),
            name: self.name.clone(),
            kind,
        })
    }

    pub fn parent(&self) -> Option<&Arc<Path>> {
        self.parent.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of segments from the root, the root itself being 1.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.parent.as_deref();
        while let Some(p) = current {
            depth += 1;
            current = p.parent.as_deref();
        }
        depth
    }

    /// Segment names from the root down to this path.
    pub fn segments(&self) -> Vec<&str> {
        let mut segments = vec![self.name.as_str()];
        let mut current = self.parent.as_deref();
        while let Some(p) = current {
            segments.push(p.name.as_str());
            current = p.parent.as_deref();
        }
        segments.reverse();
        segments
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.parent == other.parent
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments().join("."))
    }
}

impl Constant {
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }
}

impl Param {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Operation {
    /// Checked constructor: the operand count must match the operator's arity.
    pub fn new(kind: ValueKind, op: Operator, args: Vec<Expr>) -> QdslResult<Self> {
        if args.len() != op.arity() {
            return Err(QdslError::InvalidArity {
                operator: op,
                expected: op.arity(),
                actual: args.len(),
            });
        }
        Ok(Self { op, args, kind })
    }

    /// Constructor for builders whose operand count is fixed by their signature.
    pub(crate) fn new_unchecked(op: Operator, args: Vec<Expr>) -> Self {
        debug_assert_eq!(args.len(), op.arity(), "arity of {}", op);
        let kind = op.result_kind(args.first().map(Expr::kind));
        Self { op, args, kind }
    }

    pub fn operator(&self) -> Operator {
        self.op
    }

    pub fn args(&self) -> &[Expr] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> Option<&Expr> {
        self.args.get(index)
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.args == other.args
    }
}

impl Expr {
    /// A root path expression.
    pub fn path(name: impl Into<String>) -> Expr {
        Expr::Path(Path::root(name))
    }

    /// A property expression under `parent`.
    pub fn property(parent: &Arc<Path>, name: impl Into<String>) -> Expr {
        Expr::Path(parent.child(name))
    }

    /// Build a path from a dotted string (`"user.address.city"`).
    pub fn dotted(text: &str) -> Expr {
        let mut parts = text.split('.');
        let mut path = Path::root(parts.next().unwrap_or_default());
        for part in parts {
            path = path.child(part);
        }
        Expr::Path(path)
    }

    pub fn constant(value: impl Into<Value>) -> Expr {
        Expr::Constant(Arc::new(Constant {
            value: value.into(),
        }))
    }

    pub fn param(name: impl Into<String>, kind: ValueKind) -> Expr {
        Expr::Param(Arc::new(Param {
            name: name.into(),
            kind,
        }))
    }

    /// An operation whose result kind is derived from the operator.
    pub fn operation(op: Operator, args: Vec<Expr>) -> QdslResult<Expr> {
        let kind = op.result_kind(args.first().map(Expr::kind));
        Self::operation_of(kind, op, args)
    }

    /// An operation with an explicit result kind.
    pub fn operation_of(kind: ValueKind, op: Operator, args: Vec<Expr>) -> QdslResult<Expr> {
        Ok(Expr::Operation(Arc::new(Operation::new(kind, op, args)?)))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Expr::Path(p) => p.kind(),
            Expr::Constant(c) => c.kind(),
            Expr::Param(p) => p.kind(),
            Expr::Operation(o) => o.kind(),
        }
    }

    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            Expr::Operation(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Expr::Constant(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&Arc<Path>> {
        match self {
            Expr::Path(p) => Some(p),
            _ => None,
        }
    }

    /// Top-level operator, if this is an operation.
    pub fn operator(&self) -> Option<Operator> {
        self.as_operation().map(Operation::operator)
    }
}

impl From<Arc<Path>> for Expr {
    fn from(path: Arc<Path>) -> Self {
        Expr::Path(path)
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Path(p) => write!(f, "{}", p),
            Expr::Constant(c) => match c.value() {
                Value::String(s) => write!(f, "'{}'", s),
                Value::List(_) => write!(f, "[{}]", c.value()),
                v => write!(f, "{}", v),
            },
            Expr::Param(p) => write!(f, ":{}", p.name()),
            Expr::Operation(o) => {
                write!(f, "{}(", o.operator())?;
                for (i, arg) in o.args().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
