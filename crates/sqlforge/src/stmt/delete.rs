//! DELETE statement description.

use crate::builder::Builder;
use crate::criteria::{Logic, Where};
use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::value::Value;

/// DELETE statement: target table and WHERE criteria.
///
/// A DELETE with no WHERE criteria is rejected at build time unless
/// [`Delete::allow_delete_all`] was called.
#[derive(Clone, Debug)]
pub struct Delete {
    pub(crate) table: String,
    pub(crate) criteria: Where,
    pub(crate) allow_delete_all: bool,
}

impl Delete {
    /// Create a DELETE for `table`.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            criteria: Where::new(),
            allow_delete_all: false,
        }
    }

    /// Permit a DELETE without WHERE criteria.
    pub fn allow_delete_all(mut self, allow: bool) -> Self {
        self.allow_delete_all = allow;
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
        let sql = builder.to_delete(self)?;
        Ok((sql, builder.into_bindings()))
    }
}
