use crate::ast::Operator;
use crate::error::QdslResult;
use crate::templates::{Templates, TemplatesBuilder};
use std::sync::Arc;

/// Hibernate HQL: wraps bound collections, `str()` casts, type names as strings.
pub fn hibernate(escape: char) -> QdslResult<Arc<Templates>> {
    let jpql = super::jpql(escape)?;
    TemplatesBuilder::extending(&jpql, "hibernate")
        .wrap_elements(Operator::In)
        .wrap_elements(Operator::NotIn)
        .type_as_string(true)
        .add(Operator::StringCast, "str({0})")
        .add(Operator::Ceil, "ceiling({0})")
        .add(Operator::Floor, "floor({0})")
        .add(Operator::Round, "round({0})")
        .add(Operator::Power, "power({0},{1})")
        .build()
}
