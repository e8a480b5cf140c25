use crate::ast::Operator;
use crate::error::QdslResult;
use crate::templates::precedence::*;
use crate::templates::{PlaceholderStyle, Templates, TemplatesBuilder};
use std::sync::Arc;

/// Oracle: `:n` placeholders, `to_date` and `timestamp` literals, `regexp_like`.
pub fn oracle(escape: char) -> QdslResult<Arc<Templates>> {
    let sql = super::ansi(escape)?;
    let literals = sql.literals().clone().numeric_booleans().dates(
        "to_date('{0}','YYYY-MM-DD')",
        "to_date('{0}','HH24:MI:SS')",
        "timestamp '{0}'",
    );
    TemplatesBuilder::extending(&sql, "oracle")
        .placeholders(PlaceholderStyle::Colon)
        .literals(literals)
        .select1_supported(false)
        .add(Operator::Matches, "regexp_like({0},{1})")
        .add(Operator::MatchesIc, "regexp_like({0},{1},'i')")
        // the empty string is null
        .add_prec(Operator::StringIsEmpty, "{0} is null", NULL_CHECK)
        .add(Operator::Substring, "substr({0},{1}+1)")
        .add(Operator::SubstringLen, "substr({0},{1}+1,{2})")
        .add_prec(Operator::IndexOf, "instr({0},{1}) - 1", ADD)
        .add_prec(Operator::IndexOfFrom, "instr({0},{1},{2}+1) - 1", ADD)
        .add(Operator::CharAt, "substr({0},{1}+1,1)")
        .add(Operator::StringCast, "cast({0} as varchar2(4000))")
        .add(Operator::Week, "to_number(to_char({0},'WW'))")
        .add(Operator::DayOfWeek, "to_number(to_char({0},'D'))")
        .add(Operator::DayOfYear, "to_number(to_char({0},'DDD'))")
        .add(Operator::Sysdate, "sysdate")
        .add(Operator::NextVal, "{0s}.nextval")
        .build()
}
