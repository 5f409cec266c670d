//! INSERT statement description.

use crate::builder::Builder;
use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::stmt::SetExpr;
use crate::value::Value;

/// INSERT statement: target table plus an ordered column/value list.
#[derive(Clone, Debug)]
pub struct Insert {
    pub(crate) table: String,
    pub(crate) sets: Vec<(String, SetExpr)>,
}

impl Insert {
    /// Create an INSERT for `table`.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            sets: Vec::new(),
        }
    }

    /// Set a column value. Column order is preserved in the rendered
    /// statement and in the bindings.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.sets.push((column.to_string(), SetExpr::Value(value.into())));
        self
    }

    /// Set an optional column value; `None` skips the column entirely.
    pub fn set_opt(self, column: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    /// Set a column to a raw SQL expression, spliced verbatim with no
    /// placeholder.
    pub fn set_raw(mut self, column: &str, expr: &str) -> Self {
        self.sets.push((column.to_string(), SetExpr::Raw(expr.to_string())));
        self
    }

    /// Render against a fresh builder for `dialect`.
    pub fn build(&self, dialect: Dialect) -> SqlResult<(String, Vec<(String, Value)>)> {
        let mut builder = Builder::new(dialect);
        let sql = builder.to_insert(self)?;
        Ok((sql, builder.into_bindings()))
    }
}
