use crate::ast::Operator;
use crate::error::QdslResult;
use crate::templates::precedence::*;
use crate::templates::{Templates, TemplatesBuilder};
use std::sync::Arc;

/// SQLite: 1/0 booleans, ISO text dates, `strftime` date parts.
pub fn sqlite(escape: char) -> QdslResult<Arc<Templates>> {
    let sql = super::ansi(escape)?;
    let literals = sql
        .literals()
        .clone()
        .numeric_booleans()
        .dates("'{0}'", "'{0}'", "'{0}'");
    TemplatesBuilder::extending(&sql, "sqlite")
        .literals(literals)
        .add_prec(Operator::Matches, "{0} regexp {1}", COMPARISON)
        .add(Operator::Substring, "substr({0},{1}+1)")
        .add(Operator::SubstringLen, "substr({0},{1}+1,{2})")
        .add_prec(Operator::IndexOf, "instr({0},{1}) - 1", ADD)
        .add(Operator::CharAt, "substr({0},{1}+1,1)")
        .add(Operator::StringCast, "cast({0} as text)")
        .add(Operator::Year, "cast(strftime('%Y',{0}) as integer)")
        .add(Operator::Month, "cast(strftime('%m',{0}) as integer)")
        .add(Operator::Week, "cast(strftime('%W',{0}) as integer)")
        .add(Operator::DayOfMonth, "cast(strftime('%d',{0}) as integer)")
        .add(Operator::DayOfWeek, "cast(strftime('%w',{0}) as integer) + 1")
        .add(Operator::DayOfYear, "cast(strftime('%j',{0}) as integer)")
        .add(Operator::Hour, "cast(strftime('%H',{0}) as integer)")
        .add(Operator::Minute, "cast(strftime('%M',{0}) as integer)")
        .add(Operator::Second, "cast(strftime('%S',{0}) as integer)")
        .add(Operator::Sysdate, "datetime('now')")
        .build()
}
