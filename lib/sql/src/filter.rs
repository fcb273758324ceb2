//! Structured query filters.
//!
//! A [`Filter`] is an ordered list of (column, condition) pairs that
//! renders to a parameterized WHERE clause. Services build filters from
//! request parameters (the property search builder is the heavy user)
//! and hand them to the document helpers, which only ever see indexed
//! columns — the JSON `data` column is never matched against.

use crate::traits::Value;

/// A single condition on an indexed column.
#[derive(Debug, Clone, PartialEq)]
pub enum Cond {
    /// `column = ?`
    Eq(Value),
    /// `column >= ?`
    Gte(Value),
    /// `column <= ?`
    Lte(Value),
    /// `column LIKE '%' || ? || '%'` — case-insensitive for ASCII under
    /// SQLite's default LIKE semantics.
    Contains(String),
}

/// An ordered set of column conditions, ANDed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conds: Vec<(String, Cond)>,
}

impl Filter {
    /// An empty filter (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// The conventional base filter: only records not soft-deleted.
    pub fn live() -> Self {
        let mut f = Self::new();
        f.push("is_deleted", Cond::Eq(Value::Integer(0)));
        f
    }

    /// Add a condition on a column.
    pub fn push(&mut self, column: &str, cond: Cond) -> &mut Self {
        self.conds.push((column.to_string(), cond));
        self
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with(mut self, column: &str, cond: Cond) -> Self {
        self.push(column, cond);
        self
    }

    /// Shorthand for an equality condition.
    pub fn eq(self, column: &str, value: Value) -> Self {
        self.with(column, Cond::Eq(value))
    }

    pub fn is_empty(&self) -> bool {
        self.conds.is_empty()
    }

    /// Look up the condition on a column, if any.
    pub fn get(&self, column: &str) -> Option<&Cond> {
        self.conds.iter().find(|(c, _)| c == column).map(|(_, cond)| cond)
    }

    /// Render to `(" WHERE ...", params)` with placeholders numbered from
    /// `start_idx`. An empty filter renders to an empty string.
    pub fn to_where_clause(&self, start_idx: usize) -> (String, Vec<Value>) {
        if self.conds.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut clauses = Vec::with_capacity(self.conds.len());
        let mut params = Vec::with_capacity(self.conds.len());
        let mut idx = start_idx;

        for (column, cond) in &self.conds {
            match cond {
                Cond::Eq(v) => {
                    clauses.push(format!("{} = ?{}", column, idx));
                    params.push(v.clone());
                }
                Cond::Gte(v) => {
                    clauses.push(format!("{} >= ?{}", column, idx));
                    params.push(v.clone());
                }
                Cond::Lte(v) => {
                    clauses.push(format!("{} <= ?{}", column, idx));
                    params.push(v.clone());
                }
                Cond::Contains(s) => {
                    clauses.push(format!("{} LIKE '%' || ?{} || '%'", column, idx));
                    params.push(Value::Text(s.clone()));
                }
            }
            idx += 1;
        }

        (format!(" WHERE {}", clauses.join(" AND ")), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_renders_nothing() {
        let (sql, params) = Filter::new().to_where_clause(1);
        assert_eq!(sql, "");
        assert!(params.is_empty());
    }

    #[test]
    fn test_live_filter() {
        let (sql, params) = Filter::live().to_where_clause(1);
        assert_eq!(sql, " WHERE is_deleted = ?1");
        assert_eq!(params, vec![Value::Integer(0)]);
    }

    #[test]
    fn test_conditions_are_anded_in_order() {
        let f = Filter::live()
            .eq("type", Value::Text("Villa".into()))
            .with("price", Cond::Gte(Value::Real(100.0)))
            .with("price", Cond::Lte(Value::Real(500.0)));
        let (sql, params) = f.to_where_clause(1);
        assert_eq!(
            sql,
            " WHERE is_deleted = ?1 AND type = ?2 AND price >= ?3 AND price <= ?4"
        );
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_contains_renders_like() {
        let f = Filter::new().with("name", Cond::Contains("Sidi".into()));
        let (sql, params) = f.to_where_clause(3);
        assert_eq!(sql, " WHERE name LIKE '%' || ?3 || '%'");
        assert_eq!(params, vec![Value::Text("Sidi".into())]);
    }

    #[test]
    fn test_start_index_offsets_placeholders() {
        let f = Filter::new().eq("role", Value::Text("admin".into()));
        let (sql, _) = f.to_where_clause(5);
        assert_eq!(sql, " WHERE role = ?5");
    }
}
