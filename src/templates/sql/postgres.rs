use crate::ast::Operator;
use crate::error::QdslResult;
use crate::serializer::literal::CustomLiteral;
use crate::templates::precedence::*;
use crate::templates::{PlaceholderStyle, Templates, TemplatesBuilder};
use std::sync::Arc;

/// PostgreSQL: `$n` placeholders, ILIKE for the case-insensitive LIKE
/// family, POSIX regex matching.
pub fn postgres(escape: char) -> QdslResult<Arc<Templates>> {
    let sql = super::ansi(escape)?;
    let esc = sql.literals().quote(&escape.to_string());
    TemplatesBuilder::extending(&sql, "postgres")
        .placeholders(PlaceholderStyle::Dollar)
        .custom_literals(Arc::new(PostgresLiterals))
        .add_prec(Operator::Matches, "{0} ~ {1}", COMPARISON)
        .add_prec(Operator::MatchesIc, "{0} ~* {1}", COMPARISON)
        .add_prec(
            Operator::StartsWithIc,
            &format!("{{0}} ilike {{1%}} escape {}", esc),
            LIKE,
        )
        .add_prec(
            Operator::EndsWithIc,
            &format!("{{0}} ilike {{%1}} escape {}", esc),
            LIKE,
        )
        .add_prec(
            Operator::StringContainsIc,
            &format!("{{0}} ilike {{%1%}} escape {}", esc),
            LIKE,
        )
        .add(Operator::StringCast, "cast({0} as text)")
        .add(Operator::Week, "extract(week from {0})")
        .add(Operator::DayOfWeek, "extract(dow from {0}) + 1")
        .add(Operator::DayOfYear, "extract(doy from {0})")
        .add(Operator::Millisecond, "extract(milliseconds from {0})")
        .add(Operator::NextVal, "nextval('{0s}')")
        .build()
}

/// Literal spellings for PostgreSQL types with no generic form.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresLiterals;

impl CustomLiteral for PostgresLiterals {
    fn format(&self, ty: &str, text: &str) -> Option<String> {
        let quoted = format!("'{}'", text.replace('\'', "''"));
        match ty.to_ascii_lowercase().as_str() {
            "json" => Some(format!("{}::json", quoted)),
            "jsonb" => Some(format!("{}::jsonb", quoted)),
            "interval" => Some(format!("interval {}", quoted)),
            "float" | "float8" => Some(format!("{}::float8", quoted)),
            "inet" | "cidr" | "macaddr" => Some(format!("{}::{}", quoted, ty)),
            // PostGIS accepts EWKT directly
            "geometry" | "geography" => Some(format!("{}::{}", quoted, ty)),
            _ => None,
        }
    }
}
