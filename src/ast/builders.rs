//! Builders for common predicates and expressions.
//!
//! ```
//! use qdsl::ast::builders::*;
//! use qdsl::ast::Expr;
//!
//! let pred = and(
//!     eq(Expr::path("a"), Expr::constant(1)),
//!     or(eq(Expr::path("b"), Expr::constant(2)), is_null(Expr::path("c"))),
//! );
//! assert_eq!(pred.to_string(), "AND(EQ(a, 1), OR(EQ(b, 2), IS_NULL(c)))");
//! ```

use crate::ast::{Expr, Operation, Operator, Value};
use crate::error::{QdslError, QdslResult};
use std::sync::Arc;

fn make(op: Operator, args: Vec<Expr>) -> Expr {
    Expr::Operation(Arc::new(Operation::new_unchecked(op, args)))
}

// boolean

pub fn and(left: Expr, right: Expr) -> Expr {
    make(Operator::And, vec![left, right])
}

pub fn or(left: Expr, right: Expr) -> Expr {
    make(Operator::Or, vec![left, right])
}

pub fn not(expr: Expr) -> Expr {
    make(Operator::Not, vec![expr])
}

pub fn xor(left: Expr, right: Expr) -> Expr {
    make(Operator::Xor, vec![left, right])
}

pub fn xnor(left: Expr, right: Expr) -> Expr {
    make(Operator::Xnor, vec![left, right])
}

/// AND together the present predicates, left to right.
///
/// Returns `None` ("no predicate") when nothing is present. The caller
/// decides whether that drops the whole clause.
pub fn all_of(predicates: impl IntoIterator<Item = Option<Expr>>) -> Option<Expr> {
    predicates
        .into_iter()
        .flatten()
        .reduce(|acc, p| and(acc, p))
}

/// OR together the present predicates, left to right. See [`all_of`].
pub fn any_of(predicates: impl IntoIterator<Item = Option<Expr>>) -> Option<Expr> {
    predicates
        .into_iter()
        .flatten()
        .reduce(|acc, p| or(acc, p))
}

// comparison

pub fn eq(left: Expr, right: Expr) -> Expr {
    make(Operator::Eq, vec![left, right])
}

/// Create an equality against a constant (left = value)
pub fn eq_const(left: Expr, value: impl Into<Value>) -> Expr {
    eq(left, Expr::constant(value))
}

pub fn ne(left: Expr, right: Expr) -> Expr {
    make(Operator::Ne, vec![left, right])
}

pub fn ne_const(left: Expr, value: impl Into<Value>) -> Expr {
    ne(left, Expr::constant(value))
}

pub fn lt(left: Expr, right: Expr) -> Expr {
    make(Operator::Lt, vec![left, right])
}

pub fn loe(left: Expr, right: Expr) -> Expr {
    make(Operator::Loe, vec![left, right])
}

pub fn gt(left: Expr, right: Expr) -> Expr {
    make(Operator::Gt, vec![left, right])
}

pub fn goe(left: Expr, right: Expr) -> Expr {
    make(Operator::Goe, vec![left, right])
}

pub fn between(expr: Expr, low: Expr, high: Expr) -> Expr {
    make(Operator::Between, vec![expr, low, high])
}

pub fn is_null(expr: Expr) -> Expr {
    make(Operator::IsNull, vec![expr])
}

pub fn is_not_null(expr: Expr) -> Expr {
    make(Operator::IsNotNull, vec![expr])
}

pub fn eq_ignore_case(left: Expr, right: Expr) -> Expr {
    make(Operator::EqIgnoreCase, vec![left, right])
}

/// Create a membership test against a list of constants.
///
/// A single element canonicalizes to `eq(left, constant(element))`, which
/// changes how dialects render it. An empty list is rejected.
pub fn is_in<V: Into<Value>>(left: Expr, values: impl IntoIterator<Item = V>) -> QdslResult<Expr> {
    let mut values: Vec<Value> = values.into_iter().map(Into::into).collect();
    match values.len() {
        0 => Err(QdslError::EmptyCollection {
            operator: Operator::In,
        }),
        1 => Ok(eq(left, Expr::constant(values.remove(0)))),
        _ => Ok(make(Operator::In, vec![left, Expr::constant(Value::List(values))])),
    }
}

/// Negated [`is_in`]; a single element canonicalizes to `ne`.
pub fn not_in<V: Into<Value>>(left: Expr, values: impl IntoIterator<Item = V>) -> QdslResult<Expr> {
    let mut values: Vec<Value> = values.into_iter().map(Into::into).collect();
    match values.len() {
        0 => Err(QdslError::EmptyCollection {
            operator: Operator::NotIn,
        }),
        1 => Ok(ne(left, Expr::constant(values.remove(0)))),
        _ => Ok(make(
            Operator::NotIn,
            vec![left, Expr::constant(Value::List(values))],
        )),
    }
}

/// Membership test against an arbitrary collection expression (a param, a path).
///
/// A constant list follows the [`is_in`] rules.
pub fn in_expr(left: Expr, collection: Expr) -> QdslResult<Expr> {
    match collection.as_constant().map(|c| c.value()) {
        Some(Value::List(items)) => is_in(left, items.clone()),
        _ => Ok(make(Operator::In, vec![left, collection])),
    }
}

// quantifiers and collections

/// The "every element of" wrapper consumed by comparison operators.
pub fn all(collection: Expr) -> Expr {
    make(Operator::All, vec![collection])
}

/// The "any element of" wrapper consumed by comparison operators.
pub fn any(collection: Expr) -> Expr {
    make(Operator::Any, vec![collection])
}

pub fn exists(subject: Expr) -> Expr {
    make(Operator::Exists, vec![subject])
}

pub fn member_of(element: Expr, collection: Expr) -> Expr {
    make(Operator::MemberOf, vec![element, collection])
}

pub fn col_size(collection: Expr) -> Expr {
    make(Operator::ColSize, vec![collection])
}

pub fn col_is_empty(collection: Expr) -> Expr {
    make(Operator::ColIsEmpty, vec![collection])
}

/// Entity type test; `ty` is usually a path naming the type.
pub fn instance_of(expr: Expr, ty: Expr) -> Expr {
    make(Operator::InstanceOf, vec![expr, ty])
}

/// Fold expressions into nested `LIST` operations (`a, b, c`).
pub fn list(exprs: impl IntoIterator<Item = Expr>) -> QdslResult<Expr> {
    exprs
        .into_iter()
        .reduce(|acc, e| make(Operator::List, vec![acc, e]))
        .ok_or(QdslError::EmptyCollection {
            operator: Operator::List,
        })
}

// strings

pub fn like(expr: Expr, pattern: Expr) -> Expr {
    make(Operator::Like, vec![expr, pattern])
}

/// LIKE with an explicit escape character, rendered inline.
pub fn like_escape(expr: Expr, pattern: Expr, escape: char) -> Expr {
    make(
        Operator::LikeEscape,
        vec![expr, pattern, Expr::constant(escape.to_string())],
    )
}

pub fn matches(expr: Expr, regex: Expr) -> Expr {
    make(Operator::Matches, vec![expr, regex])
}

pub fn starts_with(expr: Expr, prefix: Expr) -> Expr {
    make(Operator::StartsWith, vec![expr, prefix])
}

pub fn starts_with_ic(expr: Expr, prefix: Expr) -> Expr {
    make(Operator::StartsWithIc, vec![expr, prefix])
}

pub fn ends_with(expr: Expr, suffix: Expr) -> Expr {
    make(Operator::EndsWith, vec![expr, suffix])
}

pub fn ends_with_ic(expr: Expr, suffix: Expr) -> Expr {
    make(Operator::EndsWithIc, vec![expr, suffix])
}

pub fn contains(expr: Expr, infix: Expr) -> Expr {
    make(Operator::StringContains, vec![expr, infix])
}

pub fn contains_ic(expr: Expr, infix: Expr) -> Expr {
    make(Operator::StringContainsIc, vec![expr, infix])
}

pub fn concat(left: Expr, right: Expr) -> Expr {
    make(Operator::Concat, vec![left, right])
}

pub fn lower(expr: Expr) -> Expr {
    make(Operator::Lower, vec![expr])
}

pub fn upper(expr: Expr) -> Expr {
    make(Operator::Upper, vec![expr])
}

pub fn trim(expr: Expr) -> Expr {
    make(Operator::Trim, vec![expr])
}

pub fn length(expr: Expr) -> Expr {
    make(Operator::Length, vec![expr])
}

/// Suffix starting at the 0-based position `start`.
pub fn substring(expr: Expr, start: Expr) -> Expr {
    make(Operator::Substring, vec![expr, start])
}

/// `len` characters starting at the 0-based position `start`.
pub fn substring_len(expr: Expr, start: Expr, len: Expr) -> Expr {
    make(Operator::SubstringLen, vec![expr, start, len])
}

/// 0-based position of `needle`, -1 when absent.
pub fn index_of(expr: Expr, needle: Expr) -> Expr {
    make(Operator::IndexOf, vec![expr, needle])
}

/// 0-based position of `needle` at or after the 0-based `start`, -1 when absent.
pub fn index_of_from(expr: Expr, needle: Expr, start: Expr) -> Expr {
    make(Operator::IndexOfFrom, vec![expr, needle, start])
}

/// Character at the 0-based position `index`.
pub fn char_at(expr: Expr, index: Expr) -> Expr {
    make(Operator::CharAt, vec![expr, index])
}

pub fn string_is_empty(expr: Expr) -> Expr {
    make(Operator::StringIsEmpty, vec![expr])
}

pub fn string_cast(expr: Expr) -> Expr {
    make(Operator::StringCast, vec![expr])
}

// arithmetic

pub fn add(left: Expr, right: Expr) -> Expr {
    make(Operator::Add, vec![left, right])
}

pub fn sub(left: Expr, right: Expr) -> Expr {
    make(Operator::Sub, vec![left, right])
}

pub fn mult(left: Expr, right: Expr) -> Expr {
    make(Operator::Mult, vec![left, right])
}

pub fn div(left: Expr, right: Expr) -> Expr {
    make(Operator::Div, vec![left, right])
}

pub fn modulo(left: Expr, right: Expr) -> Expr {
    make(Operator::Mod, vec![left, right])
}

pub fn negate(expr: Expr) -> Expr {
    make(Operator::Negate, vec![expr])
}

pub fn abs(expr: Expr) -> Expr {
    make(Operator::Abs, vec![expr])
}

pub fn sqrt(expr: Expr) -> Expr {
    make(Operator::Sqrt, vec![expr])
}

pub fn power(base: Expr, exponent: Expr) -> Expr {
    make(Operator::Power, vec![base, exponent])
}

pub fn round(expr: Expr) -> Expr {
    make(Operator::Round, vec![expr])
}

pub fn ceil(expr: Expr) -> Expr {
    make(Operator::Ceil, vec![expr])
}

pub fn floor(expr: Expr) -> Expr {
    make(Operator::Floor, vec![expr])
}

pub fn exp(expr: Expr) -> Expr {
    make(Operator::Exp, vec![expr])
}

pub fn ln(expr: Expr) -> Expr {
    make(Operator::Ln, vec![expr])
}

/// Logarithm of `expr` in `base`.
pub fn log(expr: Expr, base: Expr) -> Expr {
    make(Operator::Log, vec![expr, base])
}

pub fn sign(expr: Expr) -> Expr {
    make(Operator::Sign, vec![expr])
}

// dates and times

pub fn current_date() -> Expr {
    make(Operator::CurrentDate, vec![])
}

pub fn current_time() -> Expr {
    make(Operator::CurrentTime, vec![])
}

pub fn current_timestamp() -> Expr {
    make(Operator::CurrentTimestamp, vec![])
}

pub fn sysdate() -> Expr {
    make(Operator::Sysdate, vec![])
}

pub fn year(expr: Expr) -> Expr {
    make(Operator::Year, vec![expr])
}

pub fn month(expr: Expr) -> Expr {
    make(Operator::Month, vec![expr])
}

pub fn week(expr: Expr) -> Expr {
    make(Operator::Week, vec![expr])
}

pub fn day_of_month(expr: Expr) -> Expr {
    make(Operator::DayOfMonth, vec![expr])
}

pub fn day_of_week(expr: Expr) -> Expr {
    make(Operator::DayOfWeek, vec![expr])
}

pub fn day_of_year(expr: Expr) -> Expr {
    make(Operator::DayOfYear, vec![expr])
}

pub fn hour(expr: Expr) -> Expr {
    make(Operator::Hour, vec![expr])
}

pub fn minute(expr: Expr) -> Expr {
    make(Operator::Minute, vec![expr])
}

pub fn second(expr: Expr) -> Expr {
    make(Operator::Second, vec![expr])
}

pub fn millisecond(expr: Expr) -> Expr {
    make(Operator::Millisecond, vec![expr])
}

// aggregates and windows

pub fn count(expr: Expr) -> Expr {
    make(Operator::Count, vec![expr])
}

pub fn count_distinct(expr: Expr) -> Expr {
    make(Operator::CountDistinct, vec![expr])
}

pub fn count_all() -> Expr {
    make(Operator::CountAll, vec![])
}

pub fn sum(expr: Expr) -> Expr {
    make(Operator::Sum, vec![expr])
}

pub fn avg(expr: Expr) -> Expr {
    make(Operator::Avg, vec![expr])
}

pub fn min(expr: Expr) -> Expr {
    make(Operator::Min, vec![expr])
}

pub fn max(expr: Expr) -> Expr {
    make(Operator::Max, vec![expr])
}

pub fn row_number() -> Expr {
    make(Operator::RowNumber, vec![])
}

pub fn rank() -> Expr {
    make(Operator::Rank, vec![])
}

pub fn dense_rank() -> Expr {
    make(Operator::DenseRank, vec![])
}

pub fn lead(expr: Expr) -> Expr {
    make(Operator::Lead, vec![expr])
}

pub fn lag(expr: Expr) -> Expr {
    make(Operator::Lag, vec![expr])
}

pub fn first_value(expr: Expr) -> Expr {
    make(Operator::FirstValue, vec![expr])
}

pub fn last_value(expr: Expr) -> Expr {
    make(Operator::LastValue, vec![expr])
}

/// Split the window into `buckets` groups and number them from 1.
pub fn ntile(buckets: Expr) -> Expr {
    make(Operator::Ntile, vec![buckets])
}

pub fn stddev(expr: Expr) -> Expr {
    make(Operator::Stddev, vec![expr])
}

pub fn stddev_pop(expr: Expr) -> Expr {
    make(Operator::StddevPop, vec![expr])
}

pub fn stddev_samp(expr: Expr) -> Expr {
    make(Operator::StddevSamp, vec![expr])
}

pub fn stddev_distinct(expr: Expr) -> Expr {
    make(Operator::StddevDistinct, vec![expr])
}

pub fn variance(expr: Expr) -> Expr {
    make(Operator::Variance, vec![expr])
}

pub fn var_pop(expr: Expr) -> Expr {
    make(Operator::VarPop, vec![expr])
}

pub fn var_samp(expr: Expr) -> Expr {
    make(Operator::VarSamp, vec![expr])
}

/// Share of `expr` in the window total.
pub fn ratio_to_report(expr: Expr) -> Expr {
    make(Operator::RatioToReport, vec![expr])
}

/// Value of `expr` at the `n`th row of the window frame, 1-based.
pub fn nth_value(expr: Expr, n: Expr) -> Expr {
    make(Operator::NthValue, vec![expr, n])
}

pub fn cume_dist() -> Expr {
    make(Operator::CumeDist, vec![])
}

pub fn percent_rank() -> Expr {
    make(Operator::PercentRank, vec![])
}

// regression and correlation: `y` is the dependent expression

pub fn corr(y: Expr, x: Expr) -> Expr {
    make(Operator::Corr, vec![y, x])
}

pub fn covar_pop(y: Expr, x: Expr) -> Expr {
    make(Operator::CovarPop, vec![y, x])
}

pub fn covar_samp(y: Expr, x: Expr) -> Expr {
    make(Operator::CovarSamp, vec![y, x])
}

pub fn regr_slope(y: Expr, x: Expr) -> Expr {
    make(Operator::RegrSlope, vec![y, x])
}

pub fn regr_intercept(y: Expr, x: Expr) -> Expr {
    make(Operator::RegrIntercept, vec![y, x])
}

pub fn regr_count(y: Expr, x: Expr) -> Expr {
    make(Operator::RegrCount, vec![y, x])
}

pub fn regr_r2(y: Expr, x: Expr) -> Expr {
    make(Operator::RegrR2, vec![y, x])
}

pub fn regr_avgx(y: Expr, x: Expr) -> Expr {
    make(Operator::RegrAvgx, vec![y, x])
}

pub fn regr_avgy(y: Expr, x: Expr) -> Expr {
    make(Operator::RegrAvgy, vec![y, x])
}

pub fn regr_sxx(y: Expr, x: Expr) -> Expr {
    make(Operator::RegrSxx, vec![y, x])
}

pub fn regr_syy(y: Expr, x: Expr) -> Expr {
    make(Operator::RegrSyy, vec![y, x])
}

pub fn regr_sxy(y: Expr, x: Expr) -> Expr {
    make(Operator::RegrSxy, vec![y, x])
}

pub fn asc(expr: Expr) -> Expr {
    make(Operator::Asc, vec![expr])
}

pub fn desc(expr: Expr) -> Expr {
    make(Operator::Desc, vec![expr])
}

/// `func over (partition by .. order by ..)`; either clause may be absent.
pub fn over(func: Expr, partition_by: Option<Expr>, order_by: Option<Expr>) -> Expr {
    let partition = partition_by.map(|p| make(Operator::PartitionBy, vec![p]));
    let order = order_by.map(|o| make(Operator::OrderBy, vec![o]));
    let spec = match (partition, order) {
        (Some(p), Some(o)) => Some(make(Operator::WindowSpec, vec![p, o])),
        (Some(p), None) => Some(p),
        (None, Some(o)) => Some(o),
        (None, None) => None,
    };
    match spec {
        Some(spec) => make(Operator::Over, vec![func, spec]),
        None => make(Operator::OverEmpty, vec![func]),
    }
}

// various

pub fn alias(expr: Expr, name: &str) -> Expr {
    make(Operator::Alias, vec![expr, Expr::path(name)])
}

pub fn coalesce(exprs: impl IntoIterator<Item = Expr>) -> QdslResult<Expr> {
    Ok(make(Operator::Coalesce, vec![list(exprs)?]))
}

pub fn nullif(left: Expr, right: Expr) -> Expr {
    make(Operator::Nullif, vec![left, right])
}

/// Cast to a dialect type name, rendered inline.
pub fn cast(expr: Expr, type_name: &str) -> Expr {
    make(Operator::Cast, vec![expr, Expr::constant(type_name)])
}

pub fn nextval(sequence: &str) -> Expr {
    make(Operator::NextVal, vec![Expr::constant(sequence)])
}

/// Builder for searched `CASE` expressions.
///
/// ```
/// use qdsl::ast::builders::*;
/// use qdsl::ast::Expr;
///
/// let e = CaseBuilder::new()
///     .when(gt(Expr::path("age"), Expr::constant(17)), Expr::constant("adult"))
///     .otherwise(Expr::constant("minor"))
///     .unwrap();
/// assert_eq!(
///     e.to_string(),
///     "CASE(CASE_WHEN(GT(age, 17), 'adult', CASE_ELSE('minor')))"
/// );
/// ```
#[derive(Debug, Default)]
pub struct CaseBuilder {
    whens: Vec<(Expr, Expr)>,
}

impl CaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when(mut self, condition: Expr, then: Expr) -> Self {
        self.whens.push((condition, then));
        self
    }

    /// Close the expression with an ELSE branch.
    pub fn otherwise(self, otherwise: Expr) -> QdslResult<Expr> {
        if self.whens.is_empty() {
            return Err(QdslError::EmptyCollection {
                operator: Operator::CaseWhen,
            });
        }
        let tail = make(Operator::CaseElse, vec![otherwise]);
        let body = self
            .whens
            .into_iter()
            .rev()
            .fold(tail, |rest, (cond, then)| {
                make(Operator::CaseWhen, vec![cond, then, rest])
            });
        Ok(make(Operator::Case, vec![body]))
    }
}

/// Builder for simple `CASE` expressions that compare one operand against
/// each `when` value.
///
/// ```
/// use qdsl::ast::builders::*;
/// use qdsl::ast::Expr;
///
/// let e = SimpleCaseBuilder::new(Expr::path("grade"))
///     .when(Expr::constant("A"), Expr::constant(4))
///     .otherwise(Expr::constant(0))
///     .unwrap();
/// assert_eq!(
///     e.to_string(),
///     "CASE_EQ(grade, CASE_EQ_WHEN(grade, 'A', 4, CASE_EQ_ELSE(0)))"
/// );
/// ```
#[derive(Debug)]
pub struct SimpleCaseBuilder {
    base: Expr,
    whens: Vec<(Expr, Expr)>,
}

impl SimpleCaseBuilder {
    pub fn new(base: Expr) -> Self {
        Self {
            base,
            whens: Vec::new(),
        }
    }

    pub fn when(mut self, value: Expr, then: Expr) -> Self {
        self.whens.push((value, then));
        self
    }

    /// Close the expression with an ELSE branch.
    pub fn otherwise(self, otherwise: Expr) -> QdslResult<Expr> {
        if self.whens.is_empty() {
            return Err(QdslError::EmptyCollection {
                operator: Operator::CaseEqWhen,
            });
        }
        let base = self.base;
        let tail = make(Operator::CaseEqElse, vec![otherwise]);
        let body = self
            .whens
            .into_iter()
            .rev()
            .fold(tail, |rest, (value, then)| {
                make(Operator::CaseEqWhen, vec![base.clone(), value, then, rest])
            });
        Ok(make(Operator::CaseEq, vec![base, body]))
    }
}

// spatial

pub fn geo_dimension(geom: Expr) -> Expr {
    make(Operator::GeoDimension, vec![geom])
}

pub fn geo_geometry_type(geom: Expr) -> Expr {
    make(Operator::GeoGeometryType, vec![geom])
}

pub fn geo_as_text(geom: Expr) -> Expr {
    make(Operator::GeoAsText, vec![geom])
}

pub fn geo_as_binary(geom: Expr) -> Expr {
    make(Operator::GeoAsBinary, vec![geom])
}

pub fn geo_srid(geom: Expr) -> Expr {
    make(Operator::GeoSrid, vec![geom])
}

pub fn geo_set_srid(geom: Expr, srid: Expr) -> Expr {
    make(Operator::GeoSetSrid, vec![geom, srid])
}

/// Geometry from WKT text in the spatial reference system `srid`.
pub fn geo_from_text(wkt: Expr, srid: Expr) -> Expr {
    make(Operator::GeoFromText, vec![wkt, srid])
}

pub fn geo_is_empty(geom: Expr) -> Expr {
    make(Operator::GeoIsEmpty, vec![geom])
}

pub fn geo_is_simple(geom: Expr) -> Expr {
    make(Operator::GeoIsSimple, vec![geom])
}

pub fn geo_boundary(geom: Expr) -> Expr {
    make(Operator::GeoBoundary, vec![geom])
}

pub fn geo_envelope(geom: Expr) -> Expr {
    make(Operator::GeoEnvelope, vec![geom])
}

pub fn geo_equals(a: Expr, b: Expr) -> Expr {
    make(Operator::GeoEquals, vec![a, b])
}

pub fn geo_disjoint(a: Expr, b: Expr) -> Expr {
    make(Operator::GeoDisjoint, vec![a, b])
}

pub fn geo_intersects(a: Expr, b: Expr) -> Expr {
    make(Operator::GeoIntersects, vec![a, b])
}

pub fn geo_touches(a: Expr, b: Expr) -> Expr {
    make(Operator::GeoTouches, vec![a, b])
}

pub fn geo_crosses(a: Expr, b: Expr) -> Expr {
    make(Operator::GeoCrosses, vec![a, b])
}

pub fn geo_within(a: Expr, b: Expr) -> Expr {
    make(Operator::GeoWithin, vec![a, b])
}

pub fn geo_contains(a: Expr, b: Expr) -> Expr {
    make(Operator::GeoContains, vec![a, b])
}

pub fn geo_overlaps(a: Expr, b: Expr) -> Expr {
    make(Operator::GeoOverlaps, vec![a, b])
}

/// DE-9IM test of `a` against `b` with an intersection `matrix` pattern.
pub fn geo_relate(a: Expr, b: Expr, matrix: Expr) -> Expr {
    make(Operator::GeoRelate, vec![a, b, matrix])
}

pub fn geo_distance(a: Expr, b: Expr) -> Expr {
    make(Operator::GeoDistance, vec![a, b])
}

/// Whether `a` and `b` lie within `distance` of each other.
pub fn geo_dwithin(a: Expr, b: Expr, distance: Expr) -> Expr {
    make(Operator::GeoDwithin, vec![a, b, distance])
}

pub fn geo_buffer(geom: Expr, distance: Expr) -> Expr {
    make(Operator::GeoBuffer, vec![geom, distance])
}

pub fn geo_convex_hull(geom: Expr) -> Expr {
    make(Operator::GeoConvexHull, vec![geom])
}

pub fn geo_intersection(a: Expr, b: Expr) -> Expr {
    make(Operator::GeoIntersection, vec![a, b])
}

pub fn geo_union(a: Expr, b: Expr) -> Expr {
    make(Operator::GeoUnion, vec![a, b])
}

pub fn geo_difference(a: Expr, b: Expr) -> Expr {
    make(Operator::GeoDifference, vec![a, b])
}

pub fn geo_sym_difference(a: Expr, b: Expr) -> Expr {
    make(Operator::GeoSymDifference, vec![a, b])
}

pub fn geo_x(point: Expr) -> Expr {
    make(Operator::GeoX, vec![point])
}

pub fn geo_y(point: Expr) -> Expr {
    make(Operator::GeoY, vec![point])
}

pub fn geo_z(point: Expr) -> Expr {
    make(Operator::GeoZ, vec![point])
}

pub fn geo_m(point: Expr) -> Expr {
    make(Operator::GeoM, vec![point])
}

pub fn geo_start_point(line: Expr) -> Expr {
    make(Operator::GeoStartPoint, vec![line])
}

pub fn geo_end_point(line: Expr) -> Expr {
    make(Operator::GeoEndPoint, vec![line])
}

pub fn geo_is_closed(line: Expr) -> Expr {
    make(Operator::GeoIsClosed, vec![line])
}

pub fn geo_is_ring(line: Expr) -> Expr {
    make(Operator::GeoIsRing, vec![line])
}

pub fn geo_num_points(line: Expr) -> Expr {
    make(Operator::GeoNumPoints, vec![line])
}

/// `n`th point of a line string, 1-based.
pub fn geo_point_n(line: Expr, n: Expr) -> Expr {
    make(Operator::GeoPointN, vec![line, n])
}

pub fn geo_area(geom: Expr) -> Expr {
    make(Operator::GeoArea, vec![geom])
}

pub fn geo_length(geom: Expr) -> Expr {
    make(Operator::GeoLength, vec![geom])
}

pub fn geo_centroid(geom: Expr) -> Expr {
    make(Operator::GeoCentroid, vec![geom])
}

pub fn geo_point_on_surface(geom: Expr) -> Expr {
    make(Operator::GeoPointOnSurface, vec![geom])
}

pub fn geo_exterior_ring(polygon: Expr) -> Expr {
    make(Operator::GeoExteriorRing, vec![polygon])
}

pub fn geo_num_interior_rings(polygon: Expr) -> Expr {
    make(Operator::GeoNumInteriorRings, vec![polygon])
}

/// `n`th interior ring of a polygon, 1-based.
pub fn geo_interior_ring_n(polygon: Expr, n: Expr) -> Expr {
    make(Operator::GeoInteriorRingN, vec![polygon, n])
}

pub fn geo_num_geometries(collection: Expr) -> Expr {
    make(Operator::GeoNumGeometries, vec![collection])
}

/// `n`th member of a geometry collection, 1-based.
pub fn geo_geometry_n(collection: Expr, n: Expr) -> Expr {
    make(Operator::GeoGeometryN, vec![collection, n])
}
