//! Example demonstrating sqlforge's statement builders across dialects.
//!
//! Run with:
//!   cargo run --example sql_builder -p sqlforge

use sqlforge::{
    Builder, Dialect, Join, SqlResult, Where, delete, insert, raw, select, update,
};

fn demo_insert() -> SqlResult<()> {
    let stmt = insert("users")
        .set("name", "Alice")
        .set("status", "active");

    let (sql, bindings) = stmt.build(Dialect::Generic)?;
    println!("[insert]");
    println!("  SQL:    {sql}");
    println!("  params: {bindings:?}");
    println!();
    Ok(())
}

fn demo_select_with_join() -> SqlResult<()> {
    let stmt = select("orders")
        .alias("o")
        .column("o.id")
        .column_as("u.name", "customer")
        .join(
            Join::table("users")
                .alias("u")
                .left()
                .using(["user_id"]),
        )
        .where_clause(Where::column("o.status").in_list(["open", "paid"]))
        .order_by("o.id")
        .limit(20);

    let (sql, bindings) = stmt.build(Dialect::PostgreSql)?;
    println!("[select + join]");
    println!("  SQL:    {sql}");
    println!("  params: {bindings:?}");
    println!();
    Ok(())
}

fn demo_grouping() -> SqlResult<()> {
    let recent = Where::column("created_at").gte("2026-01-01");
    let vip = Where::or(
        Where::column("tier").eq("gold"),
        Where::column("lifetime_value").gt(10_000),
    );

    let stmt = select("customers")
        .column(raw("COUNT(*)"))
        .where_clause(recent.and_where(vip))
        .group_by("region")
        .having(Where::column(raw("COUNT(*)")).gt(5));

    let (sql, bindings) = stmt.build(Dialect::MySql)?;
    println!("[grouped criteria, mysql]");
    println!("  SQL:    {sql}");
    println!("  params: {bindings:?}");
    println!();
    Ok(())
}

fn demo_builder_reuse() -> SqlResult<()> {
    let mut builder = Builder::new(Dialect::Generic);

    let upd = update("users")
        .set("status", "archived")
        .where_clause(Where::column("last_seen").lt("2025-01-01"));
    let sql = builder.to_update(&upd)?;
    println!("[update via shared builder]");
    println!("  SQL:    {sql}");
    println!("  params: {:?}", builder.bindings());
    println!();

    builder.reset();
    let del = delete("sessions").where_clause(Where::column("user_id").eq(42));
    let sql = builder.to_delete(&del)?;
    println!("[delete via shared builder]");
    println!("  SQL:    {sql}");
    println!("  params: {:?}", builder.bindings());
    println!();
    Ok(())
}

fn main() -> SqlResult<()> {
    demo_insert()?;
    demo_select_with_join()?;
    demo_grouping()?;
    demo_builder_reuse()?;
    Ok(())
}
