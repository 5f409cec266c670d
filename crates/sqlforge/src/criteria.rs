//! Criteria tree for WHERE/HAVING/ON clauses.
//!
//! A [`Where`] is an ordered list of terms, each attached to the preceding
//! terms with AND or OR. A term is a leaf condition (column, operator,
//! operands), a raw SQL fragment, or a nested group. Construction is
//! purely declarative; placeholder allocation and quoting happen once, at
//! [`Where::build`] time, against the [`Bind`] and [`Quote`] shared with
//! the owning statement.
//!
//! ```
//! use sqlforge::{Bind, Quote, Where};
//!
//! let w = Where::column("name").contain("bob").and_column("status").in_list([1, 2]);
//! let mut bind = Bind::new();
//! let sql = w.build(&mut bind, &Quote::new(), None, None).unwrap();
//! assert_eq!(sql, "\"name\" LIKE :db_prep_1 AND \"status\" IN ( :db_prep_2, :db_prep_3 )");
//! ```

use crate::bind::Bind;
use crate::error::{SqlError, SqlResult};
use crate::quote::Quote;
use crate::value::Value;

/// Connective attaching a term to the terms before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Logic {
    /// All conditions must hold.
    And,
    /// At least one condition must hold.
    Or,
}

impl Logic {
    fn keyword(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// Left-hand side of a condition: a quotable identifier or a raw
/// pass-through expression.
///
/// Raw expressions bypass quoting entirely, which is what HAVING needs for
/// aggregates:
///
/// ```
/// use sqlforge::{raw, Bind, Quote, Where};
///
/// let having = Where::column(raw("COUNT(*)")).gt(5);
/// let mut bind = Bind::new();
/// let sql = having.build(&mut bind, &Quote::new(), None, None).unwrap();
/// assert_eq!(sql, "COUNT(*) > :db_prep_1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColumnRef {
    /// Identifier routed through the quoting engine.
    Ident(String),
    /// Verbatim expression, never quoted.
    Raw(String),
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        Self::Ident(name.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        Self::Ident(name)
    }
}

/// Mark an expression as raw SQL, bypassing identifier quoting.
pub fn raw(expr: impl Into<String>) -> ColumnRef {
    ColumnRef::Raw(expr.into())
}

/// Comparison operator of a leaf condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    /// `=`, one operand.
    Eq,
    /// `!=`, one operand.
    Ne,
    /// `>`, one operand.
    Gt,
    /// `>=`, one operand.
    Gte,
    /// `<`, one operand.
    Lt,
    /// `<=`, one operand.
    Lte,
    /// `LIKE`, one operand, value bound unaltered.
    Like,
    /// `LIKE`, one operand, value wrapped in `%...%` at bind time.
    Contain,
    /// `IN ( ... )`, one operand per listed value.
    In,
    /// `BETWEEN low AND high`, exactly two operands in given order.
    Between,
    /// `IS NULL`, no operands, no binding.
    IsNull,
    /// `IS NOT NULL`, no operands, no binding.
    NotNull,
}

impl CmpOp {
    fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Like | Self::Contain => "LIKE",
            Self::In => "IN",
            Self::Between => "BETWEEN",
            Self::IsNull => "IS NULL",
            Self::NotNull => "IS NOT NULL",
        }
    }
}

#[derive(Clone, Debug)]
enum Term {
    Cond {
        column: ColumnRef,
        op: CmpOp,
        values: Vec<Value>,
    },
    Raw(String),
    Group(Where),
}

/// Boolean condition tree, immutable during render.
#[derive(Clone, Debug, Default)]
pub struct Where {
    terms: Vec<(Logic, Term)>,
}

impl Where {
    /// Empty tree; renders to an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tree with a first leaf condition on `column`.
    ///
    /// Returns a pending builder; exactly one operator call closes the
    /// leaf and yields the [`Where`].
    pub fn column(column: impl Into<ColumnRef>) -> WhereColumn {
        Self::new().and_column(column)
    }

    /// Chain another leaf, AND-ed onto the tree.
    pub fn and_column(self, column: impl Into<ColumnRef>) -> WhereColumn {
        WhereColumn {
            tree: self,
            logic: Logic::And,
            column: column.into(),
        }
    }

    /// Chain another leaf, OR-ed onto the tree.
    pub fn or_column(self, column: impl Into<ColumnRef>) -> WhereColumn {
        WhereColumn {
            tree: self,
            logic: Logic::Or,
            column: column.into(),
        }
    }

    /// Append a raw SQL fragment, AND-ed onto the tree.
    pub fn and_raw(mut self, sql: impl Into<String>) -> Self {
        self.terms.push((Logic::And, Term::Raw(sql.into())));
        self
    }

    /// Append a raw SQL fragment, OR-ed onto the tree.
    pub fn or_raw(mut self, sql: impl Into<String>) -> Self {
        self.terms.push((Logic::Or, Term::Raw(sql.into())));
        self
    }

    /// Combine two trees with AND.
    pub fn and(a: Where, b: Where) -> Self {
        Self::new().and_where(a).and_where(b)
    }

    /// Combine two trees with OR.
    pub fn or(a: Where, b: Where) -> Self {
        Self::new().and_where(a).or_where(b)
    }

    /// Append a whole tree as a nested group, AND-ed on.
    pub fn and_where(mut self, other: Where) -> Self {
        self.terms.push((Logic::And, Term::Group(other)));
        self
    }

    /// Append a whole tree as a nested group, OR-ed on.
    pub fn or_where(mut self, other: Where) -> Self {
        self.terms.push((Logic::Or, Term::Group(other)));
        self
    }

    /// Append a whole tree with an explicit connective.
    pub fn join_where(self, other: Where, logic: Logic) -> Self {
        match logic {
            Logic::And => self.and_where(other),
            Logic::Or => self.or_where(other),
        }
    }

    /// Low-level leaf constructor. Arity is checked at build time, not
    /// here; construction stays declarative.
    pub fn condition(
        mut self,
        column: impl Into<ColumnRef>,
        op: CmpOp,
        values: Vec<Value>,
    ) -> Self {
        self.terms.push((
            Logic::And,
            Term::Cond {
                column: column.into(),
                op,
                values,
            },
        ));
        self
    }

    /// Check if the tree holds no conditions.
    pub fn is_empty(&self) -> bool {
        self.terms.iter().all(|(_, term)| match term {
            Term::Group(w) => w.is_empty(),
            _ => false,
        })
    }

    /// Render the tree, allocating placeholders out of `bind` and routing
    /// every identifier through `quote`.
    ///
    /// `sub_alias` and `parent` carry the join context: the joined table's
    /// alias and the enclosing query's table, used by the quoting engine
    /// to qualify bare and `$.`-prefixed columns. An empty tree renders to
    /// an empty string; the caller omits the clause keyword in that case.
    pub fn build(
        &self,
        bind: &mut Bind,
        quote: &Quote,
        sub_alias: Option<&str>,
        parent: Option<&str>,
    ) -> SqlResult<String> {
        let mut sql = String::new();
        for (logic, term) in &self.terms {
            let text = match term {
                Term::Cond { column, op, values } => {
                    render_cond(column, *op, values, bind, quote, sub_alias, parent)?
                }
                Term::Raw(fragment) => fragment.clone(),
                Term::Group(tree) => {
                    let inner = tree.build(bind, quote, sub_alias, parent)?;
                    if inner.is_empty() {
                        continue;
                    }
                    if self.needs_parens(tree, *logic) {
                        format!("( {inner} )")
                    } else {
                        inner
                    }
                }
            };
            if text.is_empty() {
                continue;
            }
            if !sql.is_empty() {
                sql.push(' ');
                sql.push_str(logic.keyword());
                sql.push(' ');
            }
            sql.push_str(&text);
        }
        Ok(sql)
    }

    /// A nested group needs parentheses only when it mixes a different
    /// connective into a multi-term parent; single leaves and same-
    /// connective groups flatten without changing precedence.
    ///
    /// The decision looks at the group's effective terms: a wrapper group
    /// holding a single nested group contributes that inner group's
    /// connectives, not its own.
    fn needs_parens(&self, group: &Where, attach: Logic) -> bool {
        let group = Self::unwrap_single(group);
        if group.terms.len() <= 1 || self.terms.len() <= 1 {
            return false;
        }
        let parent_conns: Vec<Logic> = self
            .terms
            .iter()
            .skip(1)
            .map(|(l, _)| *l)
            .chain(std::iter::once(attach))
            .collect();
        group
            .terms
            .iter()
            .skip(1)
            .any(|(l, _)| parent_conns.iter().any(|p| p != l))
    }

    /// Descend through single-term wrapper groups to the tree whose terms
    /// carry the effective top-level connectives.
    fn unwrap_single(mut group: &Where) -> &Where {
        while group.terms.len() == 1 {
            match &group.terms[0].1 {
                Term::Group(inner) => group = inner,
                _ => break,
            }
        }
        group
    }
}

fn render_cond(
    column: &ColumnRef,
    op: CmpOp,
    values: &[Value],
    bind: &mut Bind,
    quote: &Quote,
    sub_alias: Option<&str>,
    parent: Option<&str>,
) -> SqlResult<String> {
    let col = match column {
        ColumnRef::Ident(name) => quote.quote_with(name, sub_alias, parent),
        ColumnRef::Raw(expr) => expr.clone(),
    };
    match op {
        CmpOp::IsNull | CmpOp::NotNull => {
            require_arity(op, values, 0)?;
            Ok(format!("{col} {}", op.symbol()))
        }
        CmpOp::In => {
            if values.is_empty() {
                // `IN ()` is not valid SQL in any supported dialect.
                return Err(SqlError::usage("IN requires at least one value"));
            }
            let tokens: Vec<String> = values.iter().map(|v| bind.prepare(v.clone())).collect();
            Ok(format!("{col} IN ( {} )", tokens.join(", ")))
        }
        CmpOp::Between => {
            require_arity(op, values, 2)?;
            // Bound in (low, high) order as supplied; no reordering.
            let low = bind.prepare(values[0].clone());
            let high = bind.prepare(values[1].clone());
            Ok(format!("{col} BETWEEN {low} AND {high}"))
        }
        CmpOp::Contain => {
            require_arity(op, values, 1)?;
            let token = bind.prepare(Value::Text(format!("%{}%", values[0].to_text())));
            Ok(format!("{col} LIKE {token}"))
        }
        CmpOp::Eq | CmpOp::Ne | CmpOp::Gt | CmpOp::Gte | CmpOp::Lt | CmpOp::Lte | CmpOp::Like => {
            require_arity(op, values, 1)?;
            let token = bind.prepare(values[0].clone());
            Ok(format!("{col} {} {token}", op.symbol()))
        }
    }
}

fn require_arity(op: CmpOp, values: &[Value], expected: usize) -> SqlResult<()> {
    if values.len() != expected {
        return Err(SqlError::usage(format!(
            "{op:?} takes {expected} value(s), got {}",
            values.len()
        )));
    }
    Ok(())
}

/// Pending leaf: a column waiting for its operator.
#[derive(Clone, Debug)]
pub struct WhereColumn {
    tree: Where,
    logic: Logic,
    column: ColumnRef,
}

impl WhereColumn {
    fn close(mut self, op: CmpOp, values: Vec<Value>) -> Where {
        self.tree.terms.push((
            self.logic,
            Term::Cond {
                column: self.column,
                op,
                values,
            },
        ));
        self.tree
    }

    /// `column = value`
    pub fn eq(self, value: impl Into<Value>) -> Where {
        self.close(CmpOp::Eq, vec![value.into()])
    }

    /// `column != value`
    pub fn ne(self, value: impl Into<Value>) -> Where {
        self.close(CmpOp::Ne, vec![value.into()])
    }

    /// `column > value`
    pub fn gt(self, value: impl Into<Value>) -> Where {
        self.close(CmpOp::Gt, vec![value.into()])
    }

    /// `column >= value`
    pub fn gte(self, value: impl Into<Value>) -> Where {
        self.close(CmpOp::Gte, vec![value.into()])
    }

    /// `column < value`
    pub fn lt(self, value: impl Into<Value>) -> Where {
        self.close(CmpOp::Lt, vec![value.into()])
    }

    /// `column <= value`
    pub fn lte(self, value: impl Into<Value>) -> Where {
        self.close(CmpOp::Lte, vec![value.into()])
    }

    /// `column LIKE pattern`, pattern bound as given.
    pub fn like(self, pattern: impl Into<Value>) -> Where {
        self.close(CmpOp::Like, vec![pattern.into()])
    }

    /// `column LIKE %value%`, wildcards applied at bind time.
    pub fn contain(self, value: impl Into<Value>) -> Where {
        self.close(CmpOp::Contain, vec![value.into()])
    }

    /// `column IN ( values... )`, one placeholder per value in order.
    pub fn in_list<V: Into<Value>>(self, values: impl IntoIterator<Item = V>) -> Where {
        self.close(CmpOp::In, values.into_iter().map(Into::into).collect())
    }

    /// `column BETWEEN low AND high`, bounds bound in the order supplied.
    pub fn between(self, low: impl Into<Value>, high: impl Into<Value>) -> Where {
        self.close(CmpOp::Between, vec![low.into(), high.into()])
    }

    /// `column IS NULL`, allocates no placeholder.
    pub fn is_null(self) -> Where {
        self.close(CmpOp::IsNull, Vec::new())
    }

    /// `column IS NOT NULL`, allocates no placeholder.
    pub fn is_not_null(self) -> Where {
        self.close(CmpOp::NotNull, Vec::new())
    }
}
