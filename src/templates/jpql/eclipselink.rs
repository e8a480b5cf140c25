use crate::ast::Operator;
use crate::error::QdslResult;
use crate::templates::precedence::*;
use crate::templates::{Templates, TemplatesBuilder};
use std::sync::Arc;

/// EclipseLink: `extract` date parts, `select 1` support, regex matching.
pub fn eclipselink(escape: char) -> QdslResult<Arc<Templates>> {
    let jpql = super::jpql(escape)?;
    TemplatesBuilder::extending(&jpql, "eclipselink")
        .select1_supported(true)
        .add_prec(Operator::Matches, "{0} regexp {1}", COMPARISON)
        .add(Operator::StringCast, "cast({0} as varchar)")
        .add(Operator::CharAt, "substring({0},{1}+1,1)")
        .add(Operator::Year, "extract(year from {0})")
        .add(Operator::Month, "extract(month from {0})")
        .add(Operator::Week, "extract(week from {0})")
        .add(Operator::DayOfMonth, "extract(day from {0})")
        .add(Operator::DayOfWeek, "extract(day_of_week from {0})")
        .add(Operator::DayOfYear, "extract(day_of_year from {0})")
        .add(Operator::Hour, "extract(hour from {0})")
        .add(Operator::Minute, "extract(minute from {0})")
        .add(Operator::Second, "extract(second from {0})")
        .build()
}
