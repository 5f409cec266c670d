//! Public-API integration tests.

use sqlforge::{
    delete, insert, raw, select, update, Bind, Builder, Dialect, Join, Quote, Value, Where,
};

#[test]
fn builder_is_reusable_across_statement_kinds() {
    let mut builder = Builder::new(Dialect::Generic);

    let sql = builder
        .to_insert(&insert("logs").set("level", "info").set("message", "started"))
        .unwrap();
    assert_eq!(
        sql,
        "INSERT INTO \"logs\" ( \"level\", \"message\" ) VALUES ( :db_prep_1, :db_prep_2 )"
    );

    builder.reset();
    let sql = builder
        .to_select(&select("logs").where_clause(Where::column("level").eq("warn")))
        .unwrap();
    assert_eq!(sql, "SELECT * FROM \"logs\" WHERE \"level\" = :db_prep_1");
    assert_eq!(builder.bindings().len(), 1);
}

#[test]
fn same_statement_renders_identically_per_dialect() {
    let stmt = select("users")
        .where_clause(Where::column("id").in_list([1, 2, 3]))
        .limit(5);

    let (generic, _) = stmt.build(Dialect::Generic).unwrap();
    let (pg, _) = stmt.build(Dialect::PostgreSql).unwrap();
    assert_eq!(generic, pg);

    let (mysql, _) = stmt.build(Dialect::MySql).unwrap();
    assert!(mysql.contains("`users`"));
}

#[test]
fn mixed_and_or_grouping_end_to_end() {
    let dormant = Where::column("last_login").is_null().or_column("status").eq("inactive");
    let stmt = select("users")
        .where_clause(Where::column("verified").eq(true))
        .where_clause(dormant);

    let (sql, bindings) = stmt.build(Dialect::Generic).unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM \"users\" WHERE \"verified\" = :db_prep_1 \
         AND ( \"last_login\" IS NULL OR \"status\" = :db_prep_2 )"
    );
    assert_eq!(bindings[0].1, Value::Bool(true));
    assert_eq!(bindings[1].1, Value::Text("inactive".into()));
}

#[test]
fn where_clause_preserves_precedence_of_prebuilt_or_tree() {
    // An OR tree attached through an intermediate wrapper (as happens
    // when criteria are assembled from fragments) still gets
    // parenthesized next to an AND condition.
    let dormant = Where::column("last_login").is_null().or_column("status").eq("inactive");
    let prebuilt = Where::new().and_where(dormant);
    let stmt = select("users")
        .where_clause(Where::column("verified").eq(true))
        .where_clause(prebuilt);

    let (sql, _) = stmt.build(Dialect::Generic).unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM \"users\" WHERE \"verified\" = :db_prep_1 \
         AND ( \"last_login\" IS NULL OR \"status\" = :db_prep_2 )"
    );
}

#[test]
fn join_on_criteria_with_parent_reference() {
    // `$.region` resolves against the enclosing query's alias, `region`
    // alone against the joined table's alias.
    let stmt = select("orders").alias("o").join(
        Join::table("users")
            .alias("u")
            .on(Where::column("region").eq("eu").and_column("$.region").eq("eu")),
    );
    let (sql, bindings) = stmt.build(Dialect::Generic).unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM \"orders\" \"o\" JOIN \"users\" \"u\" \
         ON ( \"u\".\"region\" = :db_prep_1 AND \"o\".\"region\" = :db_prep_2 )"
    );
    assert_eq!(bindings.len(), 2);
}

#[test]
fn join_using_and_on_combined() {
    let stmt = select("orders").alias("o").join(
        Join::table("users")
            .alias("u")
            .left()
            .using(["tenant_id"])
            .on(Where::column("active").eq(true)),
    );
    let (sql, bindings) = stmt.build(Dialect::Generic).unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM \"orders\" \"o\" LEFT OUTER JOIN \"users\" \"u\" \
         ON ( \"u\".\"tenant_id\"=\"o\".\"tenant_id\" AND ( \"u\".\"active\" = :db_prep_1 ) )"
    );
    assert_eq!(bindings.len(), 1);
}

#[test]
fn group_and_having_with_aggregate() {
    let stmt = select("orders")
        .column("user_id")
        .column(raw("COUNT(*)"))
        .group_by("user_id")
        .having(Where::column(raw("COUNT(*)")).gt(5));
    let (sql, bindings) = stmt.build(Dialect::Generic).unwrap();
    assert_eq!(
        sql,
        "SELECT \"user_id\", COUNT(*) FROM \"orders\" \
         GROUP BY \"user_id\" HAVING COUNT(*) > :db_prep_1"
    );
    assert_eq!(bindings[0].1, Value::Int(5));
}

#[test]
fn shared_bind_across_fragments_keeps_global_order() {
    let mut bind = Bind::new();
    let quote = Quote::new();

    let w1 = Where::column("a").eq(1);
    let w2 = Where::column("b").between(2, 3);
    let first = w1.build(&mut bind, &quote, None, None).unwrap();
    let second = w2.build(&mut bind, &quote, None, None).unwrap();

    assert_eq!(first, "\"a\" = :db_prep_1");
    assert_eq!(second, "\"b\" BETWEEN :db_prep_2 AND :db_prep_3");
    assert_eq!(bind.len(), 3);
}

#[test]
fn update_and_delete_guardrails() {
    assert!(update("t").build(Dialect::Generic).is_err());
    assert!(delete("t").build(Dialect::Generic).is_err());
    assert!(delete("t").allow_delete_all(true).build(Dialect::Generic).is_ok());
}
