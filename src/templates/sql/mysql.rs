use crate::ast::Operator;
use crate::error::QdslResult;
use crate::serializer::literal::LiteralPolicy;
use crate::templates::base::like_family;
use crate::templates::precedence::*;
use crate::templates::{IdentifierQuoting, Templates, TemplatesBuilder};
use std::sync::Arc;

/// MySQL: backtick quoting, backslash-escaping string literals, `concat()`.
pub fn mysql(escape: char) -> QdslResult<Arc<Templates>> {
    let sql = super::ansi(escape)?;
    let literals = LiteralPolicy {
        escape_backslash: true,
        ..LiteralPolicy::default()
    }
    .dates("'{0}'", "'{0}'", "'{0}'");
    let b = TemplatesBuilder::extending(&sql, "mysql")
        .quoting(IdentifierQuoting::BACKTICK)
        .literals(literals);
    // escape clause spelled under the new string policy
    like_family(b)
        .add(Operator::Concat, "concat({0},{1})")
        .add_prec(Operator::Matches, "{0} regexp {1}", COMPARISON)
        .add_prec(Operator::MatchesIc, "{0l} regexp {1l}", COMPARISON)
        .add(Operator::Substring, "substring({0},{1}+1)")
        .add(Operator::SubstringLen, "substring({0},{1}+1,{2})")
        .add_prec(Operator::IndexOf, "locate({1},{0}) - 1", ADD)
        .add_prec(Operator::IndexOfFrom, "locate({1},{0},{2}+1) - 1", ADD)
        .add(Operator::CharAt, "substring({0},{1}+1,1)")
        .add(Operator::StringCast, "cast({0} as char)")
        .add(Operator::Length, "char_length({0})")
        .add_prec(Operator::StringIsEmpty, "char_length({0}) = 0", COMPARISON)
        .add(Operator::Year, "year({0})")
        .add(Operator::Month, "month({0})")
        .add(Operator::Week, "week({0})")
        .add(Operator::DayOfMonth, "dayofmonth({0})")
        .add(Operator::DayOfWeek, "dayofweek({0})")
        .add(Operator::DayOfYear, "dayofyear({0})")
        .add(Operator::Hour, "hour({0})")
        .add(Operator::Minute, "minute({0})")
        .add(Operator::Second, "second({0})")
        .add(Operator::Sysdate, "sysdate()")
        .build()
}

/// MariaDB: MySQL plus sequences.
pub fn mariadb(escape: char) -> QdslResult<Arc<Templates>> {
    let mysql = mysql(escape)?;
    TemplatesBuilder::extending(&mysql, "mariadb")
        .add(Operator::NextVal, "nextval({0s})")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_clause_doubles_backslash() {
        let t = mysql('\\').unwrap();
        assert_eq!(
            t.template(Operator::Like).unwrap().pattern(),
            "{0} like {1} escape '\\\\'"
        );
        assert_eq!(t.quote_identifier("order"), "`order`");
    }

    #[test]
    fn test_mariadb_extends_mysql() {
        let t = mariadb('\\').unwrap();
        assert_eq!(t.lineage(), vec!["mariadb", "mysql", "sql", "base"]);
        assert_eq!(t.template(Operator::Concat).unwrap().pattern(), "concat({0},{1})");
    }
}
