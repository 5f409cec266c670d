//! # sqlforge
//!
//! A dialect-aware SQL statement builder: statements are described in
//! memory and rendered to a parameterized SQL string plus an ordered set
//! of bound values, ready for a prepared-statement interface. No SQL is
//! ever executed here and no string concatenation of user data happens;
//! every literal goes behind a `:db_prep_<n>` placeholder.
//!
//! ## Features
//!
//! - **Criteria trees**: composable AND/OR condition trees for
//!   WHERE/HAVING/ON, with raw-SQL escapes for aggregate expressions
//! - **Identifier quoting**: dialect-specific quoting with dotted-path
//!   splitting, `expr AS alias` handling and join-context resolution
//! - **Ordered bindings**: deterministic placeholder naming; iterating
//!   the binding map matches allocation order for positional execution
//! - **Dialects**: generic ANSI, MySQL and PostgreSQL quoting and paging
//! - **Safe defaults**: DELETE requires WHERE, UPDATE requires SET
//!
//! ## Example
//!
//! ```
//! use sqlforge::{select, Dialect, Where};
//!
//! let stmt = select("users")
//!     .column("id")
//!     .column("name")
//!     .where_clause(
//!         Where::column("name").contain("bob").and_column("status").in_list([1, 2]),
//!     )
//!     .order_by_desc("created_at")
//!     .limit(10);
//!
//! let (sql, bindings) = stmt.build(Dialect::PostgreSql).unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT \"id\", \"name\" FROM \"users\" \
//!      WHERE \"name\" LIKE :db_prep_1 AND \"status\" IN ( :db_prep_2, :db_prep_3 ) \
//!      ORDER BY \"created_at\" DESC LIMIT 10"
//! );
//! assert_eq!(bindings.len(), 3);
//! ```

pub mod bind;
pub mod builder;
pub mod criteria;
pub mod dialect;
pub mod error;
pub mod join;
pub mod quote;
pub mod stmt;
pub mod value;

pub use bind::Bind;
pub use builder::Builder;
pub use criteria::{raw, CmpOp, ColumnRef, Logic, Where, WhereColumn};
pub use dialect::Dialect;
pub use error::{SqlError, SqlResult};
pub use join::{Join, JoinType};
pub use quote::Quote;
pub use stmt::{delete, insert, select, update, Delete, Insert, Order, Select, Update};
pub use value::Value;
