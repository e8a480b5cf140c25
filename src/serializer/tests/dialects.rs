//! Dialect-specific rendering.

use super::{literal, render};
use crate::ast::builders::*;
use crate::ast::{Expr, Value};
use crate::error::QdslError;
use crate::serializer::Serializer;
use crate::templates::Dialect;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn day() -> Expr {
    Expr::constant(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
}

#[test]
fn test_every_reachable_entry_renders() {
    let paths = [Expr::path("a"), Expr::path("b"), Expr::path("c"), Expr::path("d")];
    for dialect in Dialect::ALL {
        let templates = dialect.templates().unwrap();
        let serializer = Serializer::new(&templates);
        for (op, template) in templates.entries() {
            assert_eq!(
                template.arity(),
                op.arity(),
                "{} in {}: {}",
                op,
                dialect,
                template.pattern()
            );
            let args = paths[..op.arity()].to_vec();
            let e = Expr::operation(op, args).unwrap();
            let r = serializer.render(&e);
            assert!(r.is_ok(), "{} in {}: {:?}", op, dialect, r.err());
        }
    }
}

#[test]
fn test_date_literals() {
    let e = eq(Expr::path("d"), day());
    assert_eq!(literal(Dialect::Sql, &e), "d = (date '2024-01-31')");
    assert_eq!(literal(Dialect::Jpql, &e), "d = {d '2024-01-31'}");
    assert_eq!(literal(Dialect::MySql, &e), "d = '2024-01-31'");
    assert_eq!(literal(Dialect::Sqlite, &e), "d = '2024-01-31'");
    assert_eq!(
        literal(Dialect::Oracle, &e),
        "d = to_date('2024-01-31','YYYY-MM-DD')"
    );
    assert_eq!(
        literal(Dialect::SqlServer, &e),
        "d = cast('2024-01-31' as date)"
    );

    let r = render(Dialect::Sql, &e);
    assert_eq!(r.text, "d = ?");
    assert_eq!(r.values(), vec![&Value::Date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())]);
}

#[test]
fn test_boolean_literals() {
    let e = eq(Expr::path("active"), Expr::constant(true));
    assert_eq!(literal(Dialect::Sql, &e), "active = true");
    assert_eq!(literal(Dialect::Postgres, &e), "active = true");
    assert_eq!(literal(Dialect::Sqlite, &e), "active = 1");
    assert_eq!(literal(Dialect::SqlServer, &e), "active = 1");
    assert_eq!(literal(Dialect::Oracle, &e), "active = 1");
}

#[test]
fn test_enum_literals() {
    let e = eq(
        Expr::path("status"),
        Expr::constant(Value::Enum {
            ty: "Status".into(),
            variant: "ACTIVE".into(),
        }),
    );
    assert_eq!(literal(Dialect::Sql, &e), "status = 'ACTIVE'");
    assert_eq!(literal(Dialect::Hibernate, &e), "status = Status.ACTIVE");
}

#[test]
fn test_string_literals() {
    let e = eq(Expr::path("path"), Expr::constant("C:\\temp's"));
    assert_eq!(literal(Dialect::Sql, &e), "path = 'C:\\temp''s'");
    assert_eq!(literal(Dialect::MySql, &e), "path = 'C:\\\\temp''s'");
}

#[test]
fn test_postgres_custom_literals() {
    let e = eq(
        Expr::path("data"),
        Expr::constant(Value::Custom {
            ty: "jsonb".into(),
            text: "{}".into(),
        }),
    );
    assert_eq!(literal(Dialect::Postgres, &e), "data = '{}'::jsonb");
    assert_eq!(literal(Dialect::Sql, &e), "data = '{}'");
}

#[test]
fn test_postgres_regex_and_ilike() {
    let e = matches(Expr::path("code"), Expr::constant("^A[0-9]+$"));
    assert_eq!(render(Dialect::Postgres, &e).text, "code ~ $1");
    assert_eq!(render(Dialect::MySql, &e).text, "code regexp ?");
    assert_eq!(render(Dialect::Oracle, &e).text, "regexp_like(code,:1)");
    assert!(Serializer::new(&Dialect::Sql.templates().unwrap())
        .render(&e)
        .is_err());
}

#[test]
fn test_concat_per_dialect() {
    let e = concat(Expr::path("first"), Expr::path("last"));
    assert_eq!(literal(Dialect::Sql, &e), "first || last");
    assert_eq!(literal(Dialect::MySql, &e), "concat(first,last)");
    assert_eq!(literal(Dialect::SqlServer, &e), "first + last");
    assert_eq!(literal(Dialect::Jpql, &e), "concat(first,last)");
}

#[test]
fn test_mysql_escape_clause() {
    let e = like(Expr::path("name"), Expr::constant("a\\%"));
    assert_eq!(
        literal(Dialect::MySql, &e),
        "name like 'a\\\\%' escape '\\\\'"
    );
}

#[test]
fn test_date_parts() {
    let e = year(Expr::path("born"));
    assert_eq!(literal(Dialect::Sql, &e), "extract(year from born)");
    assert_eq!(literal(Dialect::MySql, &e), "year(born)");
    assert_eq!(
        literal(Dialect::Sqlite, &e),
        "cast(strftime('%Y',born) as integer)"
    );
    assert_eq!(literal(Dialect::EclipseLink, &e), "extract(year from born)");
    assert_eq!(literal(Dialect::Hibernate, &e), "year(born)");
}

#[test]
fn test_jpql_collections() {
    let e = member_of(Expr::param("role", Default::default()), Expr::dotted("user.roles"));
    let mut params = crate::serializer::ParamBindings::new();
    params.insert("role".into(), Value::from("admin"));
    let templates = Dialect::Jpql.templates().unwrap();
    let r = Serializer::new(&templates).bindings(&params).render(&e).unwrap();
    assert_eq!(r.text, "?1 member of user.roles");

    let e = and(
        gt(col_size(Expr::dotted("user.roles")), Expr::constant(1)),
        not(col_is_empty(Expr::dotted("user.groups"))),
    );
    assert_eq!(
        literal(Dialect::Jpql, &e),
        "size(user.roles) > 1 and not user.groups is empty"
    );
}

#[test]
fn test_string_functions() {
    let e = eq(index_of(Expr::path("s"), Expr::constant("x")), Expr::constant(0));
    assert_eq!(literal(Dialect::Sql, &e), "position('x' in s) - 1 = 0");
    assert_eq!(literal(Dialect::Jpql, &e), "locate('x',s) - 1 = 0");
    assert_eq!(literal(Dialect::Oracle, &e), "instr(s,'x') - 1 = 0");

    let e = string_is_empty(Expr::path("s"));
    assert_eq!(literal(Dialect::Oracle, &e), "s is null");
    assert_eq!(literal(Dialect::SqlServer, &e), "len(s) = 0");
}

#[test]
fn test_fractional_seconds_survive_literals() {
    let ts = NaiveDate::from_ymd_opt(2024, 1, 31)
        .unwrap()
        .and_hms_milli_opt(13, 5, 0, 123)
        .unwrap();
    let e = eq(Expr::path("t"), Expr::constant(ts));
    assert_eq!(
        literal(Dialect::Sql, &e),
        "t = (timestamp '2024-01-31 13:05:00.123')"
    );
    assert_eq!(literal(Dialect::Jpql, &e), "t = {ts '2024-01-31 13:05:00.123'}");
    assert_eq!(
        literal(Dialect::Oracle, &e),
        "t = timestamp '2024-01-31 13:05:00.123'"
    );
    assert_eq!(
        literal(Dialect::SqlServer, &e),
        "t = cast('2024-01-31 13:05:00.123' as datetime2)"
    );
}

#[test]
fn test_non_finite_floats() {
    let nan = eq(Expr::path("a"), Expr::constant(f64::NAN));
    let templates = Dialect::MySql.templates().unwrap();
    let err = Serializer::new(&templates)
        .use_literals(true)
        .render(&nan)
        .unwrap_err();
    assert!(
        matches!(&err, QdslError::NoLiteral { dialect, .. } if dialect == "mysql"),
        "{}",
        err
    );
    // bound values are left to the driver
    assert_eq!(render(Dialect::MySql, &nan).text, "a = ?");

    assert_eq!(literal(Dialect::Postgres, &nan), "a = 'NaN'::float8");
    let inf = gt(Expr::path("a"), Expr::constant(f64::NEG_INFINITY));
    assert_eq!(literal(Dialect::Postgres, &inf), "a > '-Infinity'::float8");
}

#[test]
fn test_zero_based_positions_compose() {
    let s = || Expr::path("s");
    let e = substring(s(), index_of(s(), Expr::constant("x")));
    assert_eq!(
        literal(Dialect::Sql, &e),
        "substring(s from position('x' in s) - 1+1)"
    );
    assert_eq!(literal(Dialect::Jpql, &e), "substring(s,locate('x',s) - 1+1)");
    assert_eq!(literal(Dialect::Oracle, &e), "substr(s,instr(s,'x') - 1+1)");

    let e = substring_len(s(), Expr::constant(0), Expr::constant(3));
    assert_eq!(literal(Dialect::Sql, &e), "substring(s from 0+1 for 3)");
    assert_eq!(literal(Dialect::MySql, &e), "substring(s,0+1,3)");
    assert_eq!(literal(Dialect::Sqlite, &e), "substr(s,0+1,3)");
    assert_eq!(literal(Dialect::SqlServer, &e), "substring(s,0+1,3)");
}

#[test]
fn test_index_of_from() {
    let e = index_of_from(Expr::path("s"), Expr::constant("x"), Expr::constant(2));
    assert_eq!(literal(Dialect::Jpql, &e), "locate('x',s,2+1) - 1");
    assert_eq!(literal(Dialect::MySql, &e), "locate('x',s,2+1) - 1");
    assert_eq!(literal(Dialect::Oracle, &e), "instr(s,'x',2+1) - 1");
    assert_eq!(literal(Dialect::SqlServer, &e), "charindex('x',s,2+1) - 1");
    assert!(matches!(
        Serializer::new(&Dialect::Sql.templates().unwrap()).render(&e),
        Err(QdslError::UnsupportedOperator { .. })
    ));
}

#[test]
fn test_simple_case() {
    let e = SimpleCaseBuilder::new(Expr::path("grade"))
        .when(Expr::constant("A"), Expr::constant(4))
        .when(Expr::constant("B"), Expr::constant(3))
        .otherwise(Expr::constant(0))
        .unwrap();
    assert_eq!(
        literal(Dialect::Sql, &e),
        "case grade when 'A' then 4 when 'B' then 3 else 0 end"
    );
    assert_eq!(
        literal(Dialect::Jpql, &e),
        "case when grade = 'A' then 4 when grade = 'B' then 3 else 0 end"
    );
    let r = render(Dialect::Postgres, &e);
    assert_eq!(
        r.text,
        "case grade when $1 then $2 when $3 then $4 else $5 end"
    );
}

#[test]
fn test_statistical_functions() {
    let salary = || Expr::path("salary");
    let e = over(stddev_pop(salary()), Some(Expr::path("dept")), None);
    assert_eq!(
        literal(Dialect::Sql, &e),
        "stddev_pop(salary) over (partition by dept)"
    );
    assert_eq!(
        literal(Dialect::SqlServer, &e),
        "stdevp(salary) over (partition by dept)"
    );
    let e = regr_slope(salary(), Expr::path("age"));
    assert_eq!(literal(Dialect::Oracle, &e), "regr_slope(salary,age)");
    assert_eq!(literal(Dialect::Sql, &variance(salary())), "variance(salary)");
    assert_eq!(literal(Dialect::SqlServer, &var_samp(salary())), "var(salary)");
    assert!(matches!(
        Serializer::new(&Dialect::Jpql.templates().unwrap()).render(&corr(salary(), salary())),
        Err(QdslError::UnsupportedOperator { .. })
    ));
}

#[test]
fn test_spatial_requires_postgis() {
    let e = geo_within(
        Expr::path("location"),
        geo_from_text(Expr::constant("POLYGON((0 0,1 0,1 1,0 0))"), Expr::constant(4326)),
    );
    assert_eq!(
        literal(Dialect::PostGis, &e),
        "ST_Within(location,ST_GeomFromText('POLYGON((0 0,1 0,1 1,0 0))',4326))"
    );
    assert!(matches!(
        Serializer::new(&Dialect::Postgres.templates().unwrap()).render(&e),
        Err(QdslError::UnsupportedOperator { .. })
    ));
}
