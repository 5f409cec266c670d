//! SQL dialect selection.
//!
//! A [`Dialect`] is picked once at build start and parameterizes the
//! assembler: identifier quote character, LIMIT/OFFSET spelling, and
//! whether `FOR UPDATE` is available.

use crate::error::{SqlError, SqlResult};

/// Supported SQL dialects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Generic ANSI SQL.
    #[default]
    Generic,
    /// MySQL: backtick quoting, `LIMIT offset, count`.
    MySql,
    /// PostgreSQL.
    PostgreSql,
}

impl Dialect {
    /// Look up a dialect by name, case-insensitive. Unknown names are a
    /// configuration error.
    pub fn from_name(name: &str) -> SqlResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "" | "generic" | "ansi" => Ok(Self::Generic),
            "mysql" => Ok(Self::MySql),
            "pgsql" | "postgres" | "postgresql" => Ok(Self::PostgreSql),
            other => Err(SqlError::configuration(format!("unknown dialect: {other}"))),
        }
    }

    /// Identifier delimiter for this dialect.
    pub fn quote_char(self) -> char {
        match self {
            Self::MySql => '`',
            Self::Generic | Self::PostgreSql => '"',
        }
    }

    /// Whether `FOR UPDATE` has a spelling in this dialect. Generic SQL
    /// has none and the clause is omitted.
    pub fn supports_for_update(self) -> bool {
        !matches!(self, Self::Generic)
    }

    /// Render the paging clause. Limit and offset are emitted as integer
    /// literals, never bound.
    pub(crate) fn render_paging(
        self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> SqlResult<String> {
        match self {
            Self::MySql => match (limit, offset) {
                (Some(l), Some(o)) => Ok(format!("LIMIT {o}, {l}")),
                (Some(l), None) => Ok(format!("LIMIT {l}")),
                (None, Some(_)) => Err(SqlError::usage("MySQL cannot express OFFSET without LIMIT")),
                (None, None) => Ok(String::new()),
            },
            Self::Generic | Self::PostgreSql => {
                let mut parts = Vec::new();
                if let Some(l) = limit {
                    parts.push(format!("LIMIT {l}"));
                }
                if let Some(o) = offset {
                    parts.push(format!("OFFSET {o}"));
                }
                Ok(parts.join(" "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_vendor_spellings() {
        assert_eq!(Dialect::from_name("MySQL").unwrap(), Dialect::MySql);
        assert_eq!(Dialect::from_name("pgsql").unwrap(), Dialect::PostgreSql);
        assert_eq!(Dialect::from_name("postgresql").unwrap(), Dialect::PostgreSql);
        assert_eq!(Dialect::from_name("").unwrap(), Dialect::Generic);
    }

    #[test]
    fn unknown_dialect_is_configuration_error() {
        assert!(Dialect::from_name("oracle").unwrap_err().is_configuration());
    }

    #[test]
    fn quote_chars() {
        assert_eq!(Dialect::Generic.quote_char(), '"');
        assert_eq!(Dialect::MySql.quote_char(), '`');
    }

    #[test]
    fn paging_spellings() {
        assert_eq!(
            Dialect::PostgreSql.render_paging(Some(5), Some(10)).unwrap(),
            "LIMIT 5 OFFSET 10"
        );
        assert_eq!(
            Dialect::MySql.render_paging(Some(5), Some(10)).unwrap(),
            "LIMIT 10, 5"
        );
        assert_eq!(Dialect::Generic.render_paging(None, Some(3)).unwrap(), "OFFSET 3");
        assert!(Dialect::MySql.render_paging(None, Some(3)).is_err());
        assert_eq!(Dialect::Generic.render_paging(None, None).unwrap(), "");
    }
}
