use crate::ast::Operator;
use crate::error::QdslResult;
use crate::templates::precedence::*;
use crate::templates::{Templates, TemplatesBuilder};
use std::sync::Arc;

/// H2.
pub fn h2(escape: char) -> QdslResult<Arc<Templates>> {
    let sql = super::ansi(escape)?;
    TemplatesBuilder::extending(&sql, "h2")
        .add_prec(Operator::Matches, "{0} regexp {1}", COMPARISON)
        .add_prec(Operator::IndexOf, "locate({1},{0}) - 1", ADD)
        .add_prec(Operator::IndexOfFrom, "locate({1},{0},{2}+1) - 1", ADD)
        .add(Operator::Week, "week({0})")
        .add(Operator::DayOfWeek, "day_of_week({0})")
        .add(Operator::DayOfYear, "day_of_year({0})")
        .add(Operator::Millisecond, "extract(millisecond from {0})")
        .build()
}
