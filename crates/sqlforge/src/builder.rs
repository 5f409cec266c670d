//! Dialect-driven statement assembly.
//!
//! A [`Builder`] owns the [`Bind`] allocator and [`Quote`] engine shared
//! by every fragment of one statement build, and concatenates the
//! rendered fragments in the dialect's clause order. After a successful
//! `to_*` call, [`Builder::bindings`] holds the ordered token/value map
//! that must accompany the SQL text to the execution layer.
//!
//! ```
//! use sqlforge::{select, Builder, Dialect, Where};
//!
//! let stmt = select("users").where_clause(Where::column("id").eq(7));
//! let mut builder = Builder::new(Dialect::PostgreSql);
//! let sql = builder.to_select(&stmt).unwrap();
//! assert_eq!(sql, "SELECT * FROM \"users\" WHERE \"id\" = :db_prep_1");
//! assert_eq!(builder.bindings().len(), 1);
//! ```

use tracing::debug;

use crate::bind::Bind;
use crate::criteria::{ColumnRef, Where};
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::quote::Quote;
use crate::stmt::{Delete, Insert, Select, SetExpr, Update};
use crate::value::Value;

/// Statement assembler for one dialect.
#[derive(Clone, Debug)]
pub struct Builder {
    dialect: Dialect,
    bind: Bind,
    quote: Quote,
}

impl Builder {
    /// Create a builder for `dialect`, with the dialect's quote character.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            bind: Bind::new(),
            quote: Quote::with_char(dialect.quote_char()),
        }
    }

    /// Create a builder from a dialect name (`"mysql"`, `"pgsql"`, ...).
    pub fn for_dialect(name: &str) -> SqlResult<Self> {
        Ok(Self::new(Dialect::from_name(name)?))
    }

    /// The active dialect.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The quoting engine.
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// The placeholder allocator.
    pub fn bind(&self) -> &Bind {
        &self.bind
    }

    /// Ordered `(token, value)` pairs of the current build.
    pub fn bindings(&self) -> &[(String, Value)] {
        self.bind.bindings()
    }

    /// Consume the builder, yielding the ordered bindings.
    pub fn into_bindings(self) -> Vec<(String, Value)> {
        self.bind.into_bindings()
    }

    /// Clear binding state to start an independent build.
    pub fn reset(&mut self) {
        self.bind.reset();
    }

    /// Render a SELECT statement.
    pub fn to_select(&mut self, stmt: &Select) -> SqlResult<String> {
        let mut parts = vec!["SELECT".to_string()];
        if stmt.distinct {
            parts.push("DISTINCT".to_string());
        }
        parts.push(self.select_columns(stmt));
        self.select_core(&mut parts, stmt)?;

        if !stmt.order_cols.is_empty() {
            let order: Vec<String> = stmt
                .order_cols
                .iter()
                .map(|(col, dir)| format!("{} {}", self.quote.quote(col), dir.keyword()))
                .collect();
            parts.push(format!("ORDER BY {}", order.join(", ")));
        }

        let paging = self.dialect.render_paging(stmt.limit, stmt.offset)?;
        if !paging.is_empty() {
            parts.push(paging);
        }

        if stmt.for_update && self.dialect.supports_for_update() {
            parts.push("FOR UPDATE".to_string());
        }

        let sql = parts.join(" ");
        debug!(dialect = ?self.dialect, %sql, "built SELECT statement");
        Ok(sql)
    }

    /// Render the `SELECT COUNT(*)` form of a SELECT: same FROM/JOIN/
    /// WHERE/GROUP BY/HAVING, no projection, ordering or paging.
    pub fn to_count(&mut self, stmt: &Select) -> SqlResult<String> {
        let mut parts = vec!["SELECT".to_string(), "COUNT(*)".to_string()];
        self.select_core(&mut parts, stmt)?;
        let sql = parts.join(" ");
        debug!(dialect = ?self.dialect, %sql, "built COUNT statement");
        Ok(sql)
    }

    /// Render an INSERT statement.
    pub fn to_insert(&mut self, stmt: &Insert) -> SqlResult<String> {
        if stmt.sets.is_empty() {
            return Err(SqlError::usage("INSERT requires at least one column"));
        }
        let columns: Vec<String> = stmt
            .sets
            .iter()
            .map(|(col, _)| self.quote.quote(col))
            .collect();
        let values: Vec<String> = stmt
            .sets
            .iter()
            .map(|(_, expr)| self.set_expr(expr))
            .collect();
        let sql = format!(
            "INSERT INTO {} ( {} ) VALUES ( {} )",
            self.quote.quote(&stmt.table),
            columns.join(", "),
            values.join(", ")
        );
        debug!(dialect = ?self.dialect, %sql, "built INSERT statement");
        Ok(sql)
    }

    /// Render an UPDATE statement.
    pub fn to_update(&mut self, stmt: &Update) -> SqlResult<String> {
        if stmt.sets.is_empty() {
            return Err(SqlError::usage("UPDATE requires at least one SET column"));
        }
        let sets: Vec<String> = stmt
            .sets
            .iter()
            .map(|(col, expr)| format!("{}={}", self.quote.quote(col), self.set_expr(expr)))
            .collect();
        let mut sql = format!("UPDATE {} SET {}", self.quote.quote(&stmt.table), sets.join(", "));
        if let Some(where_sql) = self.criteria_sql(&stmt.criteria)? {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }
        debug!(dialect = ?self.dialect, %sql, "built UPDATE statement");
        Ok(sql)
    }

    /// Render a DELETE statement.
    pub fn to_delete(&mut self, stmt: &Delete) -> SqlResult<String> {
        let mut sql = format!("DELETE FROM {}", self.quote.quote(&stmt.table));
        match self.criteria_sql(&stmt.criteria)? {
            Some(where_sql) => {
                sql.push_str(" WHERE ");
                sql.push_str(&where_sql);
            }
            None if !stmt.allow_delete_all => {
                return Err(SqlError::usage(
                    "DELETE without WHERE deletes every row; call allow_delete_all first",
                ));
            }
            None => {}
        }
        debug!(dialect = ?self.dialect, %sql, "built DELETE statement");
        Ok(sql)
    }

    /// FROM/JOIN/WHERE/GROUP BY/HAVING, shared by SELECT and COUNT.
    fn select_core(&mut self, parts: &mut Vec<String>, stmt: &Select) -> SqlResult<()> {
        let mut from = format!("FROM {}", self.quote.quote(&stmt.table));
        if let Some(alias) = &stmt.alias {
            from.push(' ');
            from.push_str(&self.quote.quote(alias));
        }
        parts.push(from);

        // The join context is the table as predicates see it: the alias
        // when one is set.
        let query_table = stmt.alias.as_deref().unwrap_or(&stmt.table);
        for join in &stmt.joins {
            let mut join = join.clone();
            join.set_query_table(query_table);
            parts.push(join.build(&mut self.bind, &self.quote)?);
        }

        if let Some(where_sql) = self.criteria_sql(&stmt.criteria)? {
            parts.push(format!("WHERE {where_sql}"));
        }

        if !stmt.group_cols.is_empty() {
            let cols: Vec<String> = stmt.group_cols.iter().map(|c| self.quote.quote(c)).collect();
            parts.push(format!("GROUP BY {}", cols.join(", ")));
        }

        if let Some(having_sql) = self.criteria_sql(&stmt.having)? {
            parts.push(format!("HAVING {having_sql}"));
        }

        Ok(())
    }

    fn select_columns(&self, stmt: &Select) -> String {
        if stmt.columns.is_empty() {
            return "*".to_string();
        }
        let cols: Vec<String> = stmt
            .columns
            .iter()
            .map(|(col, alias)| {
                let text = match col {
                    ColumnRef::Ident(name) => self.quote.quote(name),
                    ColumnRef::Raw(expr) => expr.clone(),
                };
                match alias {
                    Some(a) => format!("{} AS {}", text, self.quote.quote(a)),
                    None => text,
                }
            })
            .collect();
        cols.join(", ")
    }

    /// Render a criteria tree; `None` means the clause is omitted.
    fn criteria_sql(&mut self, criteria: &Where) -> SqlResult<Option<String>> {
        let sql = criteria.build(&mut self.bind, &self.quote, None, None)?;
        if sql.is_empty() { Ok(None) } else { Ok(Some(sql)) }
    }

    fn set_expr(&mut self, expr: &SetExpr) -> String {
        match expr {
            SetExpr::Value(value) => self.bind.prepare(value.clone()),
            SetExpr::Raw(raw) => raw.clone(),
        }
    }
}
