use super::{Templates, jpql, sql};
use crate::error::{QdslError, QdslResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// Built-in dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    #[default]
    Sql,
    Postgres,
    PostGis,
    MySql,
    MariaDb,
    Sqlite,
    SqlServer,
    Oracle,
    H2,
    Jpql,
    Hibernate,
    EclipseLink,
}

static BUILT_IN: LazyLock<Result<HashMap<Dialect, Arc<Templates>>, String>> =
    LazyLock::new(|| {
        Dialect::ALL
            .iter()
            .map(|d| {
                d.build(d.default_escape())
                    .map(|t| (*d, t))
                    .map_err(|e| e.to_string())
            })
            .collect()
    });

impl Dialect {
    pub const ALL: &'static [Dialect] = &[
        Dialect::Sql,
        Dialect::Postgres,
        Dialect::PostGis,
        Dialect::MySql,
        Dialect::MariaDb,
        Dialect::Sqlite,
        Dialect::SqlServer,
        Dialect::Oracle,
        Dialect::H2,
        Dialect::Jpql,
        Dialect::Hibernate,
        Dialect::EclipseLink,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Sql => "sql",
            Dialect::Postgres => "postgres",
            Dialect::PostGis => "postgis",
            Dialect::MySql => "mysql",
            Dialect::MariaDb => "mariadb",
            Dialect::Sqlite => "sqlite",
            Dialect::SqlServer => "sqlserver",
            Dialect::Oracle => "oracle",
            Dialect::H2 => "h2",
            Dialect::Jpql => "jpql",
            Dialect::Hibernate => "hibernate",
            Dialect::EclipseLink => "eclipselink",
        }
    }

    pub fn is_jpql(&self) -> bool {
        matches!(
            self,
            Dialect::Jpql | Dialect::Hibernate | Dialect::EclipseLink
        )
    }

    pub fn default_escape(&self) -> char {
        if self.is_jpql() {
            jpql::DEFAULT_ESCAPE
        } else {
            '\\'
        }
    }

    /// Shared table for this dialect, built once per process.
    pub fn templates(&self) -> QdslResult<Arc<Templates>> {
        let tables = BUILT_IN
            .as_ref()
            .map_err(|e| QdslError::Config(format!("built-in dialect table: {}", e)))?;
        tables
            .get(self)
            .cloned()
            .ok_or_else(|| QdslError::UnknownDialect(self.name().to_string()))
    }

    /// Fresh table for this dialect using a non-default LIKE escape character.
    pub fn templates_with_escape(&self, escape: char) -> QdslResult<Arc<Templates>> {
        if escape == self.default_escape() {
            return self.templates();
        }
        self.build(escape)
    }

    fn build(&self, escape: char) -> QdslResult<Arc<Templates>> {
        match self {
            Dialect::Sql => sql::ansi(escape),
            Dialect::Postgres => sql::postgres(escape),
            Dialect::PostGis => sql::postgis(escape),
            Dialect::MySql => sql::mysql(escape),
            Dialect::MariaDb => sql::mariadb(escape),
            Dialect::Sqlite => sql::sqlite(escape),
            Dialect::SqlServer => sql::sqlserver(escape),
            Dialect::Oracle => sql::oracle(escape),
            Dialect::H2 => sql::h2(escape),
            Dialect::Jpql => jpql::jpql(escape),
            Dialect::Hibernate => jpql::hibernate(escape),
            Dialect::EclipseLink => jpql::eclipselink(escape),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Dialect {
    type Err = QdslError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "sql" | "ansi" => Ok(Dialect::Sql),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "postgis" => Ok(Dialect::PostGis),
            "mysql" => Ok(Dialect::MySql),
            "mariadb" => Ok(Dialect::MariaDb),
            "sqlite" => Ok(Dialect::Sqlite),
            "sqlserver" | "mssql" => Ok(Dialect::SqlServer),
            "oracle" => Ok(Dialect::Oracle),
            "h2" => Ok(Dialect::H2),
            "jpql" | "jpa" => Ok(Dialect::Jpql),
            "hibernate" | "hql" => Ok(Dialect::Hibernate),
            "eclipselink" => Ok(Dialect::EclipseLink),
            _ => Err(QdslError::UnknownDialect(s.to_string())),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = QdslError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Dialect> for String {
    fn from(d: Dialect) -> Self {
        d.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;

    #[test]
    fn test_every_built_in_table_builds() {
        for d in Dialect::ALL {
            let t = d.templates().unwrap();
            assert_eq!(t.name(), d.name());
            assert_eq!(t.escape(), d.default_escape());
        }
    }

    #[test]
    fn test_tables_are_shared() {
        let a = Dialect::Postgres.templates().unwrap();
        let b = Dialect::Postgres.templates().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("hql".parse::<Dialect>().unwrap(), Dialect::Hibernate);
        for d in Dialect::ALL {
            assert_eq!(d.name().parse::<Dialect>().unwrap(), *d);
        }
        assert!(matches!(
            "db2".parse::<Dialect>(),
            Err(QdslError::UnknownDialect(_))
        ));
    }

    #[test]
    fn test_custom_escape() {
        let t = Dialect::Sql.templates_with_escape('!').unwrap();
        assert_eq!(
            t.template(Operator::Like).unwrap().pattern(),
            "{0} like {1} escape '!'"
        );
    }

    #[test]
    fn test_capabilities() {
        let jpql = Dialect::Jpql.templates().unwrap();
        assert_eq!(jpql.exists_projection(), None);
        assert!(jpql.is_enum_in_path_supported());
        assert!(!jpql.is_select1_supported());
        assert!(!jpql.is_type_as_string());

        let eclipselink = Dialect::EclipseLink.templates().unwrap();
        assert!(eclipselink.is_select1_supported());

        let hibernate = Dialect::Hibernate.templates().unwrap();
        assert!(hibernate.wrap_elements(Operator::In));
        assert!(!jpql.wrap_elements(Operator::In));

        let sql = Dialect::Sql.templates().unwrap();
        assert_eq!(sql.exists_projection(), Some("1"));
    }

    #[test]
    fn test_sql_lacks_jpql_only_operators() {
        let sql = Dialect::Sql.templates().unwrap();
        assert!(!sql.supports(Operator::Xnor));
        assert!(!sql.supports(Operator::MemberOf));
        assert!(Dialect::Jpql.templates().unwrap().supports(Operator::Xnor));
    }
}
