//! JPQL dialect tables.
//!
//! JPQL binds collections as a single value, spells dates with JDBC escapes
//! and enums by their qualified name. Paths are never quoted.

mod eclipselink;
mod hibernate;

pub use eclipselink::eclipselink;
pub use hibernate::hibernate;

use super::precedence::*;
use super::{IdentifierQuoting, PlaceholderStyle, Templates, TemplatesBuilder, base};
use crate::ast::Operator;
use crate::error::QdslResult;
use crate::serializer::literal::{EnumLiteral, LiteralPolicy};
use std::sync::Arc;

/// Default LIKE escape character for JPQL.
pub const DEFAULT_ESCAPE: char = '!';

/// Generic JPQL.
pub fn jpql(escape: char) -> QdslResult<Arc<Templates>> {
    let base = base::build(escape)?;
    let literals = LiteralPolicy {
        enums: EnumLiteral::Qualified,
        expand_lists: false,
        ..LiteralPolicy::default()
    }
    .dates("{d '{0}'}", "{t '{0}'}", "{ts '{0}'}");
    TemplatesBuilder::extending(&base, "jpql")
        .literals(literals)
        .placeholders(PlaceholderStyle::Positional)
        .quoting(IdentifierQuoting::NONE)
        .exists_projection(None)
        .enum_in_path_supported(true)
        .add_prec(Operator::Xor, "{0} xor {1}", XOR)
        .add_prec(Operator::Xnor, "{0} xnor {1}", XOR)
        .add(Operator::Concat, "concat({0},{1})")
        .add(Operator::Substring, "substring({0},{1}+1)")
        .add(Operator::SubstringLen, "substring({0},{1}+1,{2})")
        .add_prec(Operator::IndexOf, "locate({1},{0}) - 1", ADD)
        .add_prec(Operator::IndexOfFrom, "locate({1},{0},{2}+1) - 1", ADD)
        .add_prec(Operator::InstanceOf, "type({0}) = {1}", COMPARISON)
        .add_prec(Operator::MemberOf, "{0} member of {1}", COMPARISON)
        .add(Operator::ColSize, "size({0})")
        .add_prec(Operator::ColIsEmpty, "{0} is empty", NULL_CHECK)
        .add(Operator::Year, "year({0})")
        .add(Operator::Month, "month({0})")
        .add(Operator::Week, "week({0})")
        .add(Operator::DayOfMonth, "day({0})")
        .add(Operator::DayOfWeek, "dayofweek({0})")
        .add(Operator::DayOfYear, "dayofyear({0})")
        .add(Operator::Hour, "hour({0})")
        .add(Operator::Minute, "minute({0})")
        .add(Operator::Second, "second({0})")
        .add(Operator::Sysdate, "current_timestamp")
        .build()
}
