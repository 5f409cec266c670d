//! Join clause fragments.
//!
//! A [`Join`] describes one `JOIN ... ON ( ... )` clause. USING columns
//! resolve to equality predicates between the joined table's alias and the
//! enclosing query's table, which the owning statement injects via
//! [`Join::set_query_table`] before the fragment is built:
//!
//! ```
//! use sqlforge::{Bind, Join, Quote};
//!
//! let mut join = Join::table("b").alias("bb").using(["id"]);
//! join.set_query_table("a");
//! let mut bind = Bind::new();
//! let sql = join.build(&mut bind, &Quote::new()).unwrap();
//! assert_eq!(sql, "JOIN \"b\" \"bb\" ON ( \"bb\".\"id\"=\"a\".\"id\" )");
//! ```

use crate::bind::Bind;
use crate::criteria::Where;
use crate::error::{SqlError, SqlResult};
use crate::quote::Quote;

/// Join kind.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum JoinType {
    /// `JOIN`
    #[default]
    Inner,
    /// `LEFT OUTER JOIN`
    LeftOuter,
    /// `RIGHT OUTER JOIN`
    RightOuter,
    /// `FULL OUTER JOIN`
    FullOuter,
    /// `CROSS JOIN`
    Cross,
}

impl JoinType {
    /// Parse a join-type keyword. Unrecognized keywords are a
    /// configuration error, raised here rather than surfacing as broken
    /// SQL later.
    pub fn parse(keyword: &str) -> SqlResult<Self> {
        match keyword.trim().to_ascii_uppercase().as_str() {
            "JOIN" | "INNER JOIN" => Ok(Self::Inner),
            "LEFT JOIN" | "LEFT OUTER JOIN" => Ok(Self::LeftOuter),
            "RIGHT JOIN" | "RIGHT OUTER JOIN" => Ok(Self::RightOuter),
            "FULL JOIN" | "FULL OUTER JOIN" => Ok(Self::FullOuter),
            "CROSS JOIN" => Ok(Self::Cross),
            other => Err(SqlError::configuration(format!(
                "unrecognized join type: {other}"
            ))),
        }
    }

    fn keyword(&self) -> &'static str {
        match self {
            Self::Inner => "JOIN",
            Self::LeftOuter => "LEFT OUTER JOIN",
            Self::RightOuter => "RIGHT OUTER JOIN",
            Self::FullOuter => "FULL OUTER JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

#[derive(Clone, Debug)]
enum OnClause {
    Criteria(Where),
    Raw(String),
}

/// A single join clause referencing a criteria subtree or a USING column
/// list (or both; USING equalities come first).
#[derive(Clone, Debug)]
pub struct Join {
    table: String,
    alias: Option<String>,
    join_type: JoinType,
    using_cols: Vec<String>,
    on: Option<OnClause>,
    query_table: Option<String>,
}

impl Join {
    /// Start a join on `table`, defaulting to an inner `JOIN`.
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            alias: None,
            join_type: JoinType::default(),
            using_cols: Vec::new(),
            on: None,
            query_table: None,
        }
    }

    /// Alias the joined table.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Use `LEFT OUTER JOIN`.
    pub fn left(mut self) -> Self {
        self.join_type = JoinType::LeftOuter;
        self
    }

    /// Use `RIGHT OUTER JOIN`.
    pub fn right(mut self) -> Self {
        self.join_type = JoinType::RightOuter;
        self
    }

    /// Use `CROSS JOIN`.
    pub fn cross(mut self) -> Self {
        self.join_type = JoinType::Cross;
        self
    }

    /// Set the join kind explicitly.
    pub fn by(mut self, join_type: JoinType) -> Self {
        self.join_type = join_type;
        self
    }

    /// Set the join kind from a keyword string.
    pub fn by_keyword(self, keyword: &str) -> SqlResult<Self> {
        Ok(self.by(JoinType::parse(keyword)?))
    }

    /// Join USING the named columns: each resolves to
    /// `alias.col = queryTable.col`.
    pub fn using<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.using_cols = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Join ON a criteria subtree.
    pub fn on(mut self, criteria: Where) -> Self {
        self.on = Some(OnClause::Criteria(criteria));
        self
    }

    /// Join ON a raw SQL condition.
    pub fn on_sql(mut self, sql: impl Into<String>) -> Self {
        self.on = Some(OnClause::Raw(sql.into()));
        self
    }

    /// Inject the enclosing query's table (or alias). The owning statement
    /// calls this before [`Join::build`]; USING columns cannot resolve
    /// without it.
    pub fn set_query_table(&mut self, query_table: impl Into<String>) {
        self.query_table = Some(query_table.into());
    }

    /// The joined table's name as seen by predicates: its alias when set.
    fn inner_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.table)
    }

    /// Render the full join clause.
    pub fn build(&self, bind: &mut Bind, quote: &Quote) -> SqlResult<String> {
        let mut sql = String::from(self.join_type.keyword());
        sql.push(' ');
        sql.push_str(&quote.quote(&self.table));
        if let Some(alias) = &self.alias {
            sql.push(' ');
            sql.push_str(&quote.quote(alias));
        }
        let tail = self.build_predicate(bind, quote)?;
        if !tail.is_empty() {
            sql.push(' ');
            sql.push_str(&tail);
        }
        Ok(sql)
    }

    fn build_predicate(&self, bind: &mut Bind, quote: &Quote) -> SqlResult<String> {
        let mut parts = Vec::new();

        if !self.using_cols.is_empty() {
            let outer = self.query_table.as_deref().ok_or_else(|| {
                SqlError::usage("USING columns require the enclosing query table")
            })?;
            let inner = self.inner_name();
            for col in &self.using_cols {
                parts.push(format!(
                    "{}={}",
                    quote.quote(&format!("{inner}.{col}")),
                    quote.quote(&format!("{outer}.{col}"))
                ));
            }
        }

        match &self.on {
            Some(OnClause::Criteria(criteria)) => {
                let sql = criteria.build(
                    bind,
                    quote,
                    Some(self.inner_name()),
                    self.query_table.as_deref(),
                )?;
                if !sql.is_empty() {
                    if parts.is_empty() {
                        parts.push(sql);
                    } else {
                        parts.push(format!("( {sql} )"));
                    }
                }
            }
            Some(OnClause::Raw(sql)) => {
                if parts.is_empty() {
                    parts.push(sql.clone());
                } else {
                    parts.push(format!("( {sql} )"));
                }
            }
            None => {}
        }

        if parts.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("ON ( {} )", parts.join(" AND ")))
    }
}
