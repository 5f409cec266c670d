//! SELECT statement description.

use crate::builder::Builder;
use crate::criteria::{ColumnRef, Logic, Where};
use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::join::Join;
use crate::value::Value;

/// Sort direction for an ORDER BY entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Order {
    /// Ascending (the default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl Order {
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// SELECT statement: table, projection, joins, criteria, grouping,
/// ordering and paging. Renders `SELECT *` when no columns are given.
#[derive(Clone, Debug)]
pub struct Select {
    pub(crate) table: String,
    pub(crate) alias: Option<String>,
    pub(crate) columns: Vec<(ColumnRef, Option<String>)>,
    pub(crate) joins: Vec<Join>,
    pub(crate) criteria: Where,
    pub(crate) group_cols: Vec<String>,
    pub(crate) having: Where,
    pub(crate) order_cols: Vec<(String, Order)>,
    pub(crate) limit: Option<i64>,
    pub(crate) offset: Option<i64>,
    pub(crate) distinct: bool,
    pub(crate) for_update: bool,
}

impl Select {
    /// Create a SELECT for `table`.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            alias: None,
            columns: Vec::new(),
            joins: Vec::new(),
            criteria: Where::new(),
            group_cols: Vec::new(),
            having: Where::new(),
            order_cols: Vec::new(),
            limit: None,
            offset: None,
            distinct: false,
            for_update: false,
        }
    }

    /// Alias the target table.
    pub fn alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_string());
        self
    }

    /// Append a projection column (identifier or raw expression).
    pub fn column(mut self, column: impl Into<ColumnRef>) -> Self {
        self.columns.push((column.into(), None));
        self
    }

    /// Append an aliased projection column.
    pub fn column_as(mut self, column: impl Into<ColumnRef>, alias: &str) -> Self {
        self.columns.push((column.into(), Some(alias.to_string())));
        self
    }

    /// SELECT DISTINCT.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Append `FOR UPDATE` on dialects that support it.
    pub fn for_update(mut self) -> Self {
        self.for_update = true;
        self
    }

    /// Append a join fragment. The enclosing table (or its alias) is
    /// injected into the fragment at build time.
    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// AND a criteria tree onto the WHERE clause.
    pub fn where_clause(mut self, criteria: Where) -> Self {
        self.criteria = self.criteria.and_where(criteria);
        self
    }

    /// OR a criteria tree onto the WHERE clause.
    pub fn or_where(mut self, criteria: Where) -> Self {
        self.criteria = self.criteria.or_where(criteria);
        self
    }

    /// Attach a criteria tree with an explicit connective.
    pub fn where_with(mut self, criteria: Where, logic: Logic) -> Self {
        self.criteria = self.criteria.join_where(criteria, logic);
        self
    }

    /// Append a GROUP BY column.
    pub fn group_by(mut self, column: &str) -> Self {
        self.group_cols.push(column.to_string());
        self
    }

    /// AND a criteria tree onto the HAVING clause. Use a raw column for
    /// aggregates: `Where::column(raw("COUNT(*)")).gt(5)`.
    pub fn having(mut self, criteria: Where) -> Self {
        self.having = self.having.and_where(criteria);
        self
    }

    /// Append an ORDER BY column, ascending.
    pub fn order_by(mut self, column: &str) -> Self {
        self.order_cols.push((column.to_string(), Order::Asc));
        self
    }

    /// Append an ORDER BY column, descending.
    pub fn order_by_desc(mut self, column: &str) -> Self {
        self.order_cols.push((column.to_string(), Order::Desc));
        self
    }

    /// Set LIMIT, emitted as an integer literal.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set OFFSET, emitted as an integer literal.
    pub fn offset(mut self, n: i64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Render against a fresh builder for `dialect`, returning the SQL
    /// text and the ordered `(token, value)` bindings.
    pub fn build(&self, dialect: Dialect) -> SqlResult<(String, Vec<(String, Value)>)> {
        let mut builder = Builder::new(dialect);
        let sql = builder.to_select(self)?;
        Ok((sql, builder.into_bindings()))
    }

    /// Render the matching `SELECT COUNT(*)` statement.
    pub fn build_count(&self, dialect: Dialect) -> SqlResult<(String, Vec<(String, Value)>)> {
        let mut builder = Builder::new(dialect);
        let sql = builder.to_count(self)?;
        Ok((sql, builder.into_bindings()))
    }
}
