use crate::ast::Operator;
use crate::error::QdslResult;
use crate::templates::precedence::*;
use crate::templates::{IdentifierQuoting, Templates, TemplatesBuilder};
use std::sync::Arc;

/// SQL Server: bracket quoting, `+` concatenation, `datepart`.
pub fn sqlserver(escape: char) -> QdslResult<Arc<Templates>> {
    let sql = super::ansi(escape)?;
    let literals = sql.literals().clone().numeric_booleans().dates(
        "cast('{0}' as date)",
        "cast('{0}' as time)",
        "cast('{0}' as datetime2)",
    );
    TemplatesBuilder::extending(&sql, "sqlserver")
        .quoting(IdentifierQuoting::BRACKET)
        .literals(literals)
        .add_prec(Operator::Concat, "{0} + {1}", ADD)
        .add_prec(Operator::Mod, "{0} % {1}", MULT)
        .add(Operator::Length, "len({0})")
        .add_prec(Operator::StringIsEmpty, "len({0}) = 0", COMPARISON)
        .add(Operator::Trim, "ltrim(rtrim({0}))")
        .add(Operator::Substring, "substring({0},{1}+1,len({0}))")
        .add(Operator::SubstringLen, "substring({0},{1}+1,{2})")
        .add_prec(Operator::IndexOf, "charindex({1},{0}) - 1", ADD)
        .add_prec(Operator::IndexOfFrom, "charindex({1},{0},{2}+1) - 1", ADD)
        .add(Operator::CharAt, "substring({0},{1}+1,1)")
        .add(Operator::StringCast, "cast({0} as varchar(max))")
        .add(Operator::Ceil, "ceiling({0})")
        .add(Operator::Ln, "log({0})")
        .add(Operator::Log, "log({0},{1})")
        .add(Operator::Round, "round({0},0)")
        .add(Operator::Year, "year({0})")
        .add(Operator::Month, "month({0})")
        .add(Operator::DayOfMonth, "day({0})")
        .add(Operator::Week, "datepart(week,{0})")
        .add(Operator::DayOfWeek, "datepart(weekday,{0})")
        .add(Operator::DayOfYear, "datepart(dayofyear,{0})")
        .add(Operator::Hour, "datepart(hour,{0})")
        .add(Operator::Minute, "datepart(minute,{0})")
        .add(Operator::Second, "datepart(second,{0})")
        .add(Operator::Millisecond, "datepart(millisecond,{0})")
        .add(Operator::Stddev, "stdev({0})")
        .add(Operator::StddevPop, "stdevp({0})")
        .add(Operator::StddevSamp, "stdev({0})")
        .add(Operator::StddevDistinct, "stdev(distinct {0})")
        .add(Operator::Variance, "var({0})")
        .add(Operator::VarPop, "varp({0})")
        .add(Operator::VarSamp, "var({0})")
        .add(Operator::CurrentDate, "cast(getdate() as date)")
        .add(Operator::Sysdate, "getdate()")
        .build()
}
