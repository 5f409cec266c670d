//! End-to-end statement tests across the stmt module.

use crate::criteria::{Logic, Where};
use crate::dialect::Dialect;
use crate::join::Join;
use crate::stmt::{delete, insert, select, update};
use crate::value::Value;

#[test]
fn insert_one_column() {
    let (sql, bindings) = insert("testTable")
        .set("testCol", "value1234")
        .build(Dialect::Generic)
        .unwrap();
    assert_eq!(
        sql,
        "INSERT INTO \"testTable\" ( \"testCol\" ) VALUES ( :db_prep_1 )"
    );
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0], (":db_prep_1".to_string(), Value::Text("value1234".into())));
}

#[test]
fn update_two_columns_and_key() {
    let (sql, bindings) = update("testTable")
        .set("testCol", "v1")
        .set("moreCol", "v2")
        .where_clause(Where::column("pKey").eq("k1"))
        .build(Dialect::Generic)
        .unwrap();
    assert_eq!(
        sql,
        "UPDATE \"testTable\" SET \"testCol\"=:db_prep_1, \"moreCol\"=:db_prep_2 \
         WHERE \"pKey\" = :db_prep_3"
    );
    let tokens: Vec<&str> = bindings.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(tokens, vec![":db_prep_1", ":db_prep_2", ":db_prep_3"]);
    assert_eq!(bindings[0].1, Value::Text("v1".into()));
    assert_eq!(bindings[1].1, Value::Text("v2".into()));
    assert_eq!(bindings[2].1, Value::Text("k1".into()));
}

#[test]
fn select_with_contain_and_in() {
    let (sql, bindings) = select("testTable")
        .where_clause(
            Where::column("name")
                .contain("bob")
                .and_column("status")
                .in_list(["a1", "a2"]),
        )
        .order_by("pKey")
        .build(Dialect::Generic)
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM \"testTable\" \
         WHERE \"name\" LIKE :db_prep_1 AND \"status\" IN ( :db_prep_2, :db_prep_3 ) \
         ORDER BY \"pKey\" ASC"
    );
    assert_eq!(bindings[0].1, Value::Text("%bob%".into()));
    assert_eq!(bindings[1].1, Value::Text("a1".into()));
    assert_eq!(bindings[2].1, Value::Text("a2".into()));
}

#[test]
fn select_between() {
    let (sql, bindings) = select("testTable")
        .where_clause(Where::column("value").between(123, 345))
        .order_by("pKey")
        .build(Dialect::Generic)
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM \"testTable\" \
         WHERE \"value\" BETWEEN :db_prep_1 AND :db_prep_2 ORDER BY \"pKey\" ASC"
    );
    assert_eq!(bindings[0].1, Value::Int(123));
    assert_eq!(bindings[1].1, Value::Int(345));
}

#[test]
fn select_null_checks_bind_nothing() {
    let (sql, bindings) = select("testTable")
        .where_clause(Where::column("value").is_null())
        .build(Dialect::Generic)
        .unwrap();
    assert_eq!(sql, "SELECT * FROM \"testTable\" WHERE \"value\" IS NULL");
    assert!(bindings.is_empty());

    let (sql, bindings) = select("testTable")
        .where_clause(Where::column("value").is_not_null())
        .build(Dialect::Generic)
        .unwrap();
    assert_eq!(sql, "SELECT * FROM \"testTable\" WHERE \"value\" IS NOT NULL");
    assert!(bindings.is_empty());
}

#[test]
fn multiple_where_calls_with_or() {
    let (sql, bindings) = select("testTable")
        .where_clause(Where::column("value").is_null())
        .where_with(Where::column("value").eq(""), Logic::Or)
        .build(Dialect::Generic)
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM \"testTable\" WHERE \"value\" IS NULL OR \"value\" = :db_prep_1"
    );
    assert_eq!(bindings[0].1, Value::Text("".into()));
}

#[test]
fn select_dotted_and_aliased_column() {
    let (sql, bindings) = select("testTable")
        .column_as("colTest", "aliasAs")
        .where_clause(Where::column("\"my table\".name").like("bob"))
        .order_by("pKey")
        .build(Dialect::Generic)
        .unwrap();
    assert_eq!(
        sql,
        "SELECT \"colTest\" AS \"aliasAs\" FROM \"testTable\" \
         WHERE \"my table\".\"name\" LIKE :db_prep_1 ORDER BY \"pKey\" ASC"
    );
    assert_eq!(bindings[0].1, Value::Text("bob".into()));
}

#[test]
fn join_using_with_outer_context() {
    let (sql, bindings) = select("a")
        .join(Join::table("b").alias("bb").using(["id"]))
        .build(Dialect::Generic)
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM \"a\" JOIN \"b\" \"bb\" ON ( \"bb\".\"id\"=\"a\".\"id\" )"
    );
    assert!(bindings.is_empty());
}

#[test]
fn delete_by_key() {
    let (sql, bindings) = delete("testTable")
        .where_clause(Where::column("pKey").eq("k1"))
        .build(Dialect::Generic)
        .unwrap();
    assert_eq!(sql, "DELETE FROM \"testTable\" WHERE \"pKey\" = :db_prep_1");
    assert_eq!(bindings[0].1, Value::Text("k1".into()));
}

#[test]
fn count_keeps_criteria() {
    let (sql, bindings) = select("users")
        .where_clause(Where::column("status").eq("active"))
        .order_by("id")
        .limit(20)
        .build_count(Dialect::Generic)
        .unwrap();
    assert_eq!(sql, "SELECT COUNT(*) FROM \"users\" WHERE \"status\" = :db_prep_1");
    assert_eq!(bindings.len(), 1);
}
