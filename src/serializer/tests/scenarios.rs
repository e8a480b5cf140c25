//! Rendering behavior common to every dialect.

use super::{literal, render};
use crate::ast::builders::*;
use crate::ast::{Expr, Operator, Value, ValueKind};
use crate::error::QdslError;
use crate::serializer::{ParamBindings, RenderOptions, Serializer, ToQuery, needs_parens};
use crate::templates::{Dialect, TemplatesBuilder};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn a() -> Expr {
    Expr::path("a")
}

fn b() -> Expr {
    Expr::path("b")
}

fn c() -> Expr {
    Expr::path("c")
}

fn mixed() -> Expr {
    and(
        eq(a(), Expr::constant(1)),
        or(eq(b(), Expr::constant(2)), eq(c(), Expr::constant(3))),
    )
}

#[test]
fn test_or_under_and_is_wrapped() {
    assert_eq!(literal(Dialect::Sql, &mixed()), "a = 1 and (b = 2 or c = 3)");

    let r = render(Dialect::Sql, &mixed());
    assert_eq!(r.text, "a = ? and (b = ? or c = ?)");
    assert_eq!(
        r.values(),
        vec![&Value::Int(1), &Value::Int(2), &Value::Int(3)]
    );
    assert_eq!(r.bindings[0].node, Expr::constant(1));
}

#[test]
fn test_and_under_or_is_bare() {
    let e = or(and(eq(a(), b()), eq(b(), c())), is_null(c()));
    assert_eq!(literal(Dialect::Sql, &e), "a = b and b = c or c is null");
}

#[test]
fn test_associative_chains() {
    let left = or(or(is_null(a()), is_null(b())), is_null(c()));
    let right = or(is_null(a()), or(is_null(b()), is_null(c())));
    assert_eq!(literal(Dialect::Sql, &left), "a is null or b is null or c is null");
    assert_eq!(literal(Dialect::Sql, &right), "a is null or b is null or c is null");
}

#[test]
fn test_non_associative_right_operand() {
    assert_eq!(literal(Dialect::Sql, &sub(a(), sub(b(), c()))), "a - (b - c)");
    assert_eq!(literal(Dialect::Sql, &sub(sub(a(), b()), c())), "a - b - c");
    assert_eq!(literal(Dialect::Sql, &add(a(), sub(b(), c()))), "a + (b - c)");
    assert_eq!(literal(Dialect::Sql, &div(a(), mult(b(), c()))), "a / (b * c)");
}

#[test]
fn test_arithmetic_precedence() {
    assert_eq!(literal(Dialect::Sql, &mult(add(a(), b()), c())), "(a + b) * c");
    assert_eq!(literal(Dialect::Sql, &add(a(), mult(b(), c()))), "a + b * c");
    assert_eq!(literal(Dialect::Sql, &negate(negate(a()))), "-(-a)");
}

#[test]
fn test_nested_not() {
    let e = not(not(Expr::path("flag")));
    assert_eq!(literal(Dialect::Sql, &e), "not (not flag)");
    assert_eq!(literal(Dialect::Sql, &not(eq(a(), b()))), "not a = b");
    assert_eq!(
        literal(Dialect::Sql, &not(and(is_null(a()), is_null(b())))),
        "not (a is null and b is null)"
    );
}

#[test]
fn test_functions_never_wrap() {
    let e = lower(concat(a(), b()));
    assert_eq!(literal(Dialect::Sql, &e), "lower(a || b)");
    let e = eq(upper(a()), lower(b()));
    assert_eq!(literal(Dialect::Sql, &e), "upper(a) = lower(b)");
}

#[test]
fn test_needs_parens_rule() {
    assert!(needs_parens(Operator::And, Some(36), Operator::Or, Some(38), true));
    assert!(!needs_parens(Operator::Or, Some(38), Operator::And, Some(36), false));
    assert!(!needs_parens(Operator::Sub, Some(13), Operator::Sub, Some(13), true));
    assert!(needs_parens(Operator::Sub, Some(13), Operator::Sub, Some(13), false));
    assert!(!needs_parens(Operator::Add, Some(13), Operator::Add, Some(13), false));
    assert!(!needs_parens(Operator::Lower, None, Operator::Or, Some(38), false));
    assert!(!needs_parens(Operator::And, Some(36), Operator::Lower, None, false));
}

#[test]
fn test_render_is_idempotent() {
    let templates = Dialect::Postgres.templates().unwrap();
    let serializer = Serializer::new(&templates);
    let first = serializer.render(&mixed()).unwrap();
    let second = serializer.render(&mixed()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_renders_share_a_table() {
    let templates = Dialect::Postgres.templates().unwrap();
    let expr = mixed();
    let expected = Serializer::new(&templates).render(&expr).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let templates = Arc::clone(&templates);
                let expr = expr.clone();
                s.spawn(move || Serializer::new(&templates).render(&expr).unwrap())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_unsupported_operator() {
    let e = and(
        eq(a(), Expr::constant(1)),
        Expr::operation(Operator::Xnor, vec![b(), c()]).unwrap(),
    );
    let templates = Dialect::Sql.templates().unwrap();
    let err = Serializer::new(&templates).render(&e).unwrap_err();
    match err {
        QdslError::UnsupportedOperator { operator, dialect } => {
            assert_eq!(operator, Operator::Xnor);
            assert_eq!(dialect, "sql");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_template_mismatch() {
    let sql = Dialect::Sql.templates().unwrap();
    let broken = TemplatesBuilder::extending(&sql, "broken")
        .add_prec(Operator::Eq, "{0} is true", 18)
        .build()
        .unwrap();
    let err = Serializer::new(&broken)
        .render(&eq(a(), b()))
        .unwrap_err();
    assert!(matches!(
        err,
        QdslError::TemplateMismatch {
            operator: Operator::Eq,
            expected: 1,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn test_params() {
    let e = and(
        eq(a(), Expr::param("x", ValueKind::Numeric)),
        gt(b(), Expr::param("x", ValueKind::Numeric)),
    );
    let templates = Dialect::Postgres.templates().unwrap();
    let err = Serializer::new(&templates).render(&e).unwrap_err();
    assert!(matches!(err, QdslError::ParamNotBound { ref name } if name == "x"));

    let mut params = ParamBindings::new();
    params.insert("x".to_string(), Value::Int(7));
    let r = Serializer::new(&templates).bindings(&params).render(&e).unwrap();
    assert_eq!(r.text, "a = $1 and b > $1");
    assert_eq!(r.bindings.len(), 1);
    assert_eq!(r.bindings[0].node, Expr::param("x", ValueKind::Numeric));
    assert_eq!(r.bindings[0].value, Value::Int(7));

    let r = e
        .to_query_with(
            &templates,
            RenderOptions { use_literals: true },
            Some(&params),
        )
        .unwrap();
    assert_eq!(r.text, "a = 7 and b > 7");
}

#[test]
fn test_numbered_placeholders_reuse_equal_values() {
    let same = and(eq(a(), Expr::constant(1)), eq(b(), Expr::constant(1)));
    let r = render(Dialect::Postgres, &same);
    assert_eq!(r.text, "a = $1 and b = $1");
    assert_eq!(r.bindings.len(), 1);

    let r = render(Dialect::Sql, &same);
    assert_eq!(r.text, "a = ? and b = ?");
    assert_eq!(r.bindings.len(), 2);

    let distinct = and(eq(a(), Expr::constant(1)), eq(b(), Expr::constant(2)));
    assert_eq!(render(Dialect::Jpql, &distinct).text, "a = ?1 and b = ?2");
    assert_eq!(render(Dialect::Oracle, &distinct).text, "a = :1 and b = :2");
}

#[test]
fn test_in_list() {
    let e = is_in(a(), [1, 2, 3]).unwrap();
    let r = render(Dialect::Sql, &e);
    assert_eq!(r.text, "a in (?, ?, ?)");
    assert_eq!(r.bindings.len(), 3);
    assert_eq!(literal(Dialect::Sql, &e), "a in (1, 2, 3)");

    let r = render(Dialect::Jpql, &e);
    assert_eq!(r.text, "a in ?1");
    assert_eq!(r.values(), vec![&Value::from(vec![1, 2, 3])]);
    assert_eq!(render(Dialect::Hibernate, &e).text, "a in (?1)");
    assert_eq!(literal(Dialect::Jpql, &e), "a in (1, 2, 3)");

    let single = is_in(a(), ["x"]).unwrap();
    assert_eq!(render(Dialect::Sql, &single).text, "a = ?");
    assert!(matches!(
        is_in(a(), Vec::<i32>::new()),
        Err(QdslError::EmptyCollection { .. })
    ));
}

#[test]
fn test_in_expr_constant_lists() {
    let single = in_expr(a(), Expr::constant(vec![5])).unwrap();
    assert_eq!(render(Dialect::Sql, &single).text, "a = ?");
    assert!(matches!(
        in_expr(a(), Expr::constant(Value::List(Vec::new()))),
        Err(QdslError::EmptyCollection { .. })
    ));

    // hand-built trees are checked when rendered
    let empty = Expr::operation(Operator::In, vec![a(), Expr::constant(Value::List(Vec::new()))])
        .unwrap();
    let templates = Dialect::Sql.templates().unwrap();
    for use_literals in [false, true] {
        let r = Serializer::new(&templates).use_literals(use_literals).render(&empty);
        assert!(
            matches!(r, Err(QdslError::EmptyCollection { operator: Operator::In })),
            "{:?}",
            r
        );
    }
}

#[test]
fn test_negative_literals_never_form_comments() {
    let minus_three = || Expr::constant(-3);
    assert_eq!(literal(Dialect::Sql, &sub(a(), minus_three())), "a - (-3)");
    assert_eq!(literal(Dialect::Sql, &negate(minus_three())), "-(-3)");
    assert_eq!(
        literal(Dialect::Postgres, &negate(Expr::constant(-1.5))),
        "-(-1.5)"
    );
    assert_eq!(literal(Dialect::MySql, &add(a(), minus_three())), "a + (-3)");
    let e = eq(a(), Expr::constant(-7));
    assert_eq!(literal(Dialect::Sql, &e), "a = (-7)");
    assert_eq!(literal(Dialect::Sql, &sub(a(), negate(b()))), "a - -b");
    assert_eq!(literal(Dialect::Sql, &negate(negate(b()))), "-(-b)");

    // a table whose minus never wraps its operand
    let sql = Dialect::Sql.templates().unwrap();
    let bare = TemplatesBuilder::extending(&sql, "bare")
        .add(Operator::Negate, "-{0}")
        .build()
        .unwrap();
    let r = Serializer::new(&bare).render(&negate(negate(b()))).unwrap();
    assert_eq!(r.text, "- -b");
}

#[test]
fn test_like_constants_are_escaped() {
    let e = starts_with(Expr::path("name"), Expr::constant("50%_"));
    let r = render(Dialect::Sql, &e);
    assert_eq!(r.text, "name like ? escape '\\'");
    assert_eq!(r.values(), vec![&Value::from("50\\%\\_%")]);

    let e = starts_with(Expr::path("name"), Expr::constant("a%b"));
    let r = render(Dialect::Jpql, &e);
    assert_eq!(r.text, "name like ?1 escape '!'");
    assert_eq!(r.values(), vec![&Value::from("a!%b%")]);

    let e = starts_with(Expr::path("name"), Expr::constant("O'Re"));
    assert_eq!(literal(Dialect::Sql, &e), "name like 'O''Re%' escape '\\'");
}

#[test]
fn test_like_case_folding() {
    let e = contains_ic(Expr::path("name"), Expr::constant("ABC"));
    let r = render(Dialect::Sql, &e);
    assert_eq!(r.text, "lower(name) like ? escape '\\'");
    assert_eq!(r.values(), vec![&Value::from("%abc%")]);

    // ilike folds case itself, the pattern is left as given
    let r = render(Dialect::Postgres, &e);
    assert_eq!(r.text, "name ilike $1 escape '\\'");
    assert_eq!(r.values(), vec![&Value::from("%ABC%")]);
}

#[test]
fn test_like_non_constant_operand() {
    let e = ends_with(Expr::path("name"), Expr::path("suffix"));
    assert_eq!(
        literal(Dialect::Sql, &e),
        "name like '%' || suffix escape '\\'"
    );
    assert_eq!(
        literal(Dialect::Jpql, &e),
        "name like concat('%',suffix) escape '!'"
    );
    let e = contains_ic(Expr::path("name"), Expr::path("part"));
    assert_eq!(
        literal(Dialect::Sql, &e),
        "lower(name) like '%' || lower(part) || '%' escape '\\'"
    );
}

#[test]
fn test_eq_ignore_case() {
    let r = render(
        Dialect::Sql,
        &eq_ignore_case(Expr::path("name"), Expr::constant("Bob")),
    );
    assert_eq!(r.text, "lower(name) = ?");
    assert_eq!(r.values(), vec![&Value::from("bob")]);
}

#[test]
fn test_paths_are_quoted_per_dialect() {
    let p = Expr::dotted("user.address.city");
    assert_eq!(literal(Dialect::Sql, &p), "\"user\".address.city");
    assert_eq!(literal(Dialect::MySql, &p), "`user`.address.city");
    assert_eq!(literal(Dialect::SqlServer, &p), "[user].address.city");
    assert_eq!(literal(Dialect::Jpql, &p), "user.address.city");
}

#[test]
fn test_case_expression() {
    let e = CaseBuilder::new()
        .when(gt(Expr::path("age"), Expr::constant(17)), Expr::constant("adult"))
        .otherwise(Expr::constant("minor"))
        .unwrap();
    assert_eq!(
        literal(Dialect::Sql, &e),
        "case when age > 17 then 'adult' else 'minor' end"
    );
}

#[test]
fn test_raw_operands() {
    let e = cast(Expr::path("x"), "varchar(10)");
    let r = render(Dialect::Sql, &e);
    assert_eq!(r.text, "cast(x as varchar(10))");
    assert!(r.bindings.is_empty());

    assert_eq!(render(Dialect::Postgres, &nextval("seq")).text, "nextval('seq')");
    assert_eq!(render(Dialect::Oracle, &nextval("seq")).text, "seq.nextval");
    assert_eq!(
        render(Dialect::Postgres, &nextval("it's")).text,
        "nextval('it''s')"
    );
}

#[test]
fn test_lists_and_windows() {
    let e = coalesce([a(), b(), Expr::constant(0)]).unwrap();
    assert_eq!(render(Dialect::Sql, &e).text, "coalesce(a, b, ?)");

    let e = over(row_number(), Some(Expr::path("dept")), Some(desc(Expr::path("salary"))));
    assert_eq!(
        literal(Dialect::Sql, &e),
        "row_number() over (partition by dept order by salary desc)"
    );
    let e = alias(over(rank(), None, None), "r");
    assert_eq!(literal(Dialect::Sql, &e), "rank() over () as r");
}

#[test]
fn test_all_of_skips_missing_predicates() {
    let e = all_of([Some(is_null(a())), None, Some(is_null(b()))]).unwrap();
    assert_eq!(literal(Dialect::Sql, &e), "a is null and b is null");
    assert!(any_of([None, None]).is_none());
}

#[test]
fn test_to_query() {
    let r = mixed().to_query(Dialect::Sqlite).unwrap();
    assert_eq!(r.text, "a = ? and (b = ? or c = ?)");
    assert_eq!(r.to_string(), r.text);
}
