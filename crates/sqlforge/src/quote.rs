//! Dialect-specific identifier quoting.
//!
//! [`Quote`] wraps identifiers in the dialect's quote character, splitting
//! compound forms first:
//!
//! - already-quoted input is returned unchanged (idempotent);
//! - `$.name` resolves against the enclosing query's table (`parent`
//!   context), which is how a join predicate refers to the outer table
//!   without hardcoding its name;
//! - `expr AS alias` / `expr as alias` quotes each side, keeping the
//!   keyword's original casing;
//! - `table.column` quotes each part and rejoins with the period, also
//!   when the table part is already quoted (`"tbl".col`);
//! - a bare name inside a join criteria (`sub_alias` context) is
//!   qualified as `"sub_alias"."name"`;
//! - anything else is wrapped verbatim, so a name with a space but no AS
//!   keyword becomes one quoted token.
//!
//! Raw pass-through expressions never reach this module; the criteria tree
//! routes them around quoting.

/// Identifier quoting engine for one dialect.
#[derive(Clone, Copy, Debug)]
pub struct Quote {
    quote_char: char,
}

impl Default for Quote {
    fn default() -> Self {
        Self { quote_char: '"' }
    }
}

impl Quote {
    /// Create a quoting engine with the ANSI double-quote delimiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a quoting engine with the given delimiter.
    pub fn with_char(quote_char: char) -> Self {
        Self { quote_char }
    }

    /// Change the delimiter. Set once, before any build starts.
    pub fn set_quote(&mut self, quote_char: char) {
        self.quote_char = quote_char;
    }

    /// The configured delimiter.
    pub fn quote_char(&self) -> char {
        self.quote_char
    }

    /// Quote an identifier with no surrounding context.
    pub fn quote(&self, name: &str) -> String {
        self.quote_with(name, None, None)
    }

    /// Quote an identifier inside a join criteria, where `sub_alias` is
    /// the joined table's alias and `parent` is the enclosing query's
    /// table.
    pub fn quote_with(
        &self,
        name: &str,
        sub_alias: Option<&str>,
        parent: Option<&str>,
    ) -> String {
        let qc = self.quote_char;

        // Already fully wrapped fragments pass through, which keeps the
        // function idempotent and lets callers compose from pre-quoted
        // pieces.
        if name.len() >= 2 && name.starts_with(qc) && name.ends_with(qc) {
            return name.to_string();
        }

        // Sentinel prefix: resolve against the parent query's table.
        if let Some(rest) = name.strip_prefix("$.") {
            return match parent {
                Some(p) => format!(
                    "{}.{}",
                    self.quote_with(p, None, None),
                    self.quote_with(rest, None, None)
                ),
                None => self.quote_with(rest, None, None),
            };
        }

        // Alias form: split on the first ` as ` keyword, case-insensitive,
        // preserving the original casing in the output.
        if let Some(idx) = name.to_ascii_lowercase().find(" as ") {
            let left = &name[..idx];
            let keyword = &name[idx..idx + 4];
            let right = &name[idx + 4..];
            return format!(
                "{}{}{}",
                self.quote_with(left, sub_alias, parent),
                keyword,
                self.quote_with(right, None, None)
            );
        }

        // Dotted path: split on the first period outside a leading quoted
        // segment and quote each part independently.
        if let Some(idx) = self.split_point(name) {
            let left = &name[..idx];
            let right = &name[idx + 1..];
            return format!(
                "{}.{}",
                self.quote_with(left, None, None),
                self.quote_with(right, None, None)
            );
        }

        // Bare name inside a join criteria: qualify with the join alias.
        if let Some(sub) = sub_alias {
            return format!("{}.{}{}{}", self.quote_with(sub, None, None), qc, name, qc);
        }

        format!("{qc}{name}{qc}")
    }

    /// Element-wise [`Quote::quote`].
    pub fn map<'a, I>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().map(|n| self.quote(n)).collect()
    }

    /// Index of the period separating the path parts, skipping any period
    /// inside a leading quoted segment (`"my table".col`).
    fn split_point(&self, name: &str) -> Option<usize> {
        let qc = self.quote_char;
        if let Some(rest) = name.strip_prefix(qc) {
            let close = rest.find(qc)?;
            let after = qc.len_utf8() + close + qc.len_utf8();
            name[after..].find('.').map(|i| after + i)
        } else {
            name.find('.')
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_wraps_value() {
        let q = Quote::new();
        assert_eq!(q.quote("test"), "\"test\"");
    }

    #[test]
    fn set_quote_uses_different_char() {
        let mut q = Quote::new();
        q.set_quote('*');
        assert_eq!(q.quote("test"), "*test*");
    }

    #[test]
    fn quote_is_idempotent() {
        let q = Quote::new();
        let once = q.quote("test");
        assert_eq!(q.quote(&once), once);

        let dotted = q.quote("a.b");
        assert_eq!(q.quote(&dotted), dotted);
    }

    #[test]
    fn dotted_path_quotes_each_part() {
        let q = Quote::new();
        assert_eq!(q.quote("a.b"), format!("{}.{}", q.quote("a"), q.quote("b")));
        assert_eq!(q.quote("table.column"), "\"table\".\"column\"");
    }

    #[test]
    fn splits_as_and_space_and_period() {
        let q = Quote::new();
        // A space without the AS keyword is one token.
        assert_eq!(q.quote("test more"), "\"test more\"");
        // The period after a quoted table part still splits.
        assert_eq!(q.quote("\"test more\".col"), "\"test more\".\"col\"");
        // Keyword casing is preserved.
        assert_eq!(q.quote("test.more as quote"), "\"test\".\"more\" as \"quote\"");
        assert_eq!(q.quote("test.more AS quote"), "\"test\".\"more\" AS \"quote\"");
    }

    #[test]
    fn alias_property() {
        let q = Quote::new();
        assert_eq!(
            q.quote("expr AS alias"),
            format!("{} AS {}", q.quote("expr"), q.quote("alias"))
        );
    }

    #[test]
    fn sentinel_resolves_against_parent() {
        let q = Quote::new();
        assert_eq!(q.quote_with("$.test", Some("sub"), Some("main")), "\"main\".\"test\"");
    }

    #[test]
    fn sentinel_without_parent_falls_back_to_plain() {
        let q = Quote::new();
        assert_eq!(q.quote_with("$.test", None, None), "\"test\"");
        // The join alias never substitutes for the missing parent.
        assert_eq!(q.quote_with("$.test", Some("bb"), None), "\"test\"");
    }

    #[test]
    fn bare_name_qualified_by_sub_alias() {
        let q = Quote::new();
        assert_eq!(q.quote_with("code", Some("bb"), Some("a")), "\"bb\".\"code\"");
        // Dotted names are taken as already qualified.
        assert_eq!(q.quote_with("x.code", Some("bb"), Some("a")), "\"x\".\"code\"");
    }

    #[test]
    fn map_quotes_each_element() {
        let q = Quote::new();
        assert_eq!(q.map(["a", "b.c"]), vec!["\"a\"", "\"b\".\"c\""]);
    }
}
