//! UPDATE statement description.

use crate::builder::Builder;
use crate::criteria::{Logic, Where};
use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::stmt::SetExpr;
use crate::value::Value;

/// UPDATE statement: target table, SET list and WHERE criteria.
///
/// An UPDATE with no SET entries is rejected at build time.
#[derive(Clone, Debug)]
pub struct Update {
    pub(crate) table: String,
    pub(crate) sets: Vec<(String, SetExpr)>,
    pub(crate) criteria: Where,
}

impl Update {
    /// Create an UPDATE for `table`.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            sets: Vec::new(),
            criteria: Where::new(),
        }
    }

    /// Set a column value.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.sets.push((column.to_string(), SetExpr::Value(value.into())));
        self
    }

    /// Set an optional column value; `None` skips the column.
    pub fn set_opt(self, column: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    /// Set a column to a raw SQL expression, spliced verbatim.
    pub fn set_raw(mut self, column: &str, expr: &str) -> Self {
        self.sets.push((column.to_string(), SetExpr::Raw(expr.to_string())));
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

    /// Render against a fresh builder for `dialect`.
    pub fn build(&self, dialect: Dialect) -> SqlResult<(String, Vec<(String, Value)>)> {
        let mut builder = Builder::new(dialect);
        let sql = builder.to_update(self)?;
        Ok((sql, builder.into_bindings()))
    }
}
