//! Entries shared by every built-in table.

use super::precedence::*;
use super::{Templates, TemplatesBuilder};
use crate::ast::Operator;
use crate::error::QdslResult;
use std::sync::Arc;

/// Root table: paths, boolean logic, comparison, arithmetic, the LIKE
/// family, aggregates and CASE.
pub(crate) fn build(escape: char) -> QdslResult<Arc<Templates>> {
    let b = TemplatesBuilder::new("base")
        .escape(escape)
        // paths
        .add(Operator::Variable, "{0s}")
        .add(Operator::Property, "{0}.{1s}")
        // boolean
        .add_prec(Operator::And, "{0} and {1}", AND)
        .add_prec(Operator::Or, "{0} or {1}", OR)
        .add_prec(Operator::Not, "not {0}", NOT)
        // comparison
        .add_prec(Operator::Eq, "{0} = {1}", COMPARISON)
        .add_prec(Operator::Ne, "{0} <> {1}", COMPARISON)
        .add_prec(Operator::Lt, "{0} < {1}", COMPARISON)
        .add_prec(Operator::Loe, "{0} <= {1}", COMPARISON)
        .add_prec(Operator::Gt, "{0} > {1}", COMPARISON)
        .add_prec(Operator::Goe, "{0} >= {1}", COMPARISON)
        .add_prec(Operator::EqIgnoreCase, "{0l} = {1l}", COMPARISON)
        .add_prec(Operator::Between, "{0} between {1} and {2}", BETWEEN)
        .add_prec(Operator::IsNull, "{0} is null", NULL_CHECK)
        .add_prec(Operator::IsNotNull, "{0} is not null", NULL_CHECK)
        .add_prec(Operator::In, "{0} in {1}", IN)
        .add_prec(Operator::NotIn, "{0} not in {1}", IN)
        .add(Operator::Exists, "exists ({0})")
        .add(Operator::All, "all ({0})")
        .add(Operator::Any, "any ({0})")
        // arithmetic
        .add_prec(Operator::Add, "{0} + {1}", ADD)
        .add_prec(Operator::Sub, "{0} - {1}", ADD)
        .add_prec(Operator::Mult, "{0} * {1}", MULT)
        .add_prec(Operator::Div, "{0} / {1}", MULT)
        .add_prec(Operator::Negate, "-{0}", NEGATE)
        .add(Operator::Mod, "mod({0},{1})")
        .add(Operator::Abs, "abs({0})")
        .add(Operator::Sqrt, "sqrt({0})")
        // strings
        .add(Operator::Lower, "lower({0})")
        .add(Operator::Upper, "upper({0})")
        .add(Operator::Trim, "trim({0})")
        .add(Operator::Length, "length({0})")
        .add_prec(Operator::StringIsEmpty, "length({0}) = 0", COMPARISON)
        // aggregates
        .add(Operator::Count, "count({0})")
        .add(Operator::CountDistinct, "count(distinct {0})")
        .add(Operator::CountAll, "count(*)")
        .add(Operator::Sum, "sum({0})")
        .add(Operator::Avg, "avg({0})")
        .add(Operator::Min, "min({0})")
        .add(Operator::Max, "max({0})")
        // case and friends
        .add(Operator::Case, "case {0} end")
        .add(Operator::CaseWhen, "when {0} then {1} {2}")
        .add(Operator::CaseElse, "else {0}")
        .add(Operator::CaseEq, "case {1} end")
        .add(Operator::CaseEqWhen, "when {0} = {1} then {2} {3}")
        .add(Operator::CaseEqElse, "else {0}")
        .add(Operator::Coalesce, "coalesce({0})")
        .add(Operator::Nullif, "nullif({0},{1})")
        // various
        .add(Operator::List, "{0}, {1}")
        .add(Operator::Asc, "{0} asc")
        .add(Operator::Desc, "{0} desc")
        .add_prec(Operator::Alias, "{0} as {1}", ALIAS)
        .add(Operator::Cast, "cast({0} as {1s})")
        .add(Operator::CurrentDate, "current_date")
        .add(Operator::CurrentTime, "current_time")
        .add(Operator::CurrentTimestamp, "current_timestamp");
    like_family(b).build()
}

/// LIKE and its wildcard shorthands, using the builder's escape character
/// spelled by its literal policy.
pub(crate) fn like_family(b: TemplatesBuilder) -> TemplatesBuilder {
    let esc = b.literals.quote(&b.escape.to_string());
    b.add_prec(Operator::Like, &format!("{{0}} like {{1}} escape {}", esc), LIKE)
        .add_prec(Operator::LikeEscape, "{0} like {1} escape '{2s}'", LIKE)
        .add_prec(
            Operator::StartsWith,
            &format!("{{0}} like {{1%}} escape {}", esc),
            LIKE,
        )
        .add_prec(
            Operator::StartsWithIc,
            &format!("{{0l}} like {{1%%}} escape {}", esc),
            LIKE,
        )
        .add_prec(
            Operator::EndsWith,
            &format!("{{0}} like {{%1}} escape {}", esc),
            LIKE,
        )
        .add_prec(
            Operator::EndsWithIc,
            &format!("{{0l}} like {{%%1}} escape {}", esc),
            LIKE,
        )
        .add_prec(
            Operator::StringContains,
            &format!("{{0}} like {{%1%}} escape {}", esc),
            LIKE,
        )
        .add_prec(
            Operator::StringContainsIc,
            &format!("{{0l}} like {{%%1%%}} escape {}", esc),
            LIKE,
        )
}
