//! Statement descriptions.
//!
//! These are declarative: a statement records the target table, columns,
//! values, criteria and paging, and the [`crate::builder::Builder`] turns
//! it into dialect-specific SQL text plus ordered bindings.
//!
//! ```
//! use sqlforge::{select, Dialect, Where};
//!
//! let stmt = select("users")
//!     .where_clause(Where::column("status").eq("active"))
//!     .order_by("created_at")
//!     .limit(10);
//! let (sql, bindings) = stmt.build(Dialect::Generic).unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM \"users\" WHERE \"status\" = :db_prep_1 \
//!      ORDER BY \"created_at\" ASC LIMIT 10"
//! );
//! assert_eq!(bindings.len(), 1);
//! ```

mod delete;
mod insert;
mod select;
mod update;

pub use delete::Delete;
pub use insert::Insert;
pub use select::{Order, Select};
pub use update::Update;

use crate::value::Value;

/// Right-hand side of a SET/VALUES entry: a bound value or a raw SQL
/// expression spliced in verbatim (`NOW()` and friends).
#[derive(Clone, Debug)]
pub(crate) enum SetExpr {
    Value(Value),
    Raw(String),
}

/// Create a SELECT statement for the given table.
pub fn select(table: &str) -> Select {
    Select::new(table)
}

/// Create an INSERT statement for the given table.
pub fn insert(table: &str) -> Insert {
    Insert::new(table)
}

/// Create an UPDATE statement for the given table.
pub fn update(table: &str) -> Update {
    Update::new(table)
}

/// Create a DELETE statement for the given table.
pub fn delete(table: &str) -> Delete {
    Delete::new(table)
}

#[cfg(test)]
mod tests;
