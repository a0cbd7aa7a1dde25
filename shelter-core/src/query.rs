//! Query construction and filtering API for document stores.
//!
//! Queries are backend-neutral: each backend walks the [`Expr`] tree with a
//! [`QueryVisitor`] and either evaluates it in place or translates it into its own
//! native filter syntax.
//!
//! # Query Building
//!
//! ```ignore
//! use shelter_core::query::{Filter, Query};
//!
//! let query = Query::builder()
//!     .filter(Filter::eq("species", "cat").and(Filter::range("age", Some(2), Some(5))))
//!     .limit(24)
//!     .build();
//! ```
//!
//! # Filter Expression API
//!
//! - Comparison: `eq`
//! - String: `contains` (case-insensitive literal substring)
//! - Range: `range` (closed interval, either bound optional)
//! - Logical: `and`, `or`

use bson::Bson;

use crate::error::DocumentStoreError;

/// Field comparison operators for filter expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOp {
    /// Equal to (exact match, numbers compared by value).
    Eq,
    /// String field contains the value as a case-insensitive substring.
    ///
    /// The value is matched literally; it is never interpreted as a pattern.
    Contains,
}

/// A filter expression for querying documents.
///
/// # Example
///
/// ```ignore
/// use shelter_core::query::Filter;
///
/// let expr = Filter::or([
///     Filter::contains("name", "lab"),
///     Filter::contains("breed", "lab"),
/// ])
/// .and(Filter::eq("featured", true));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Logical AND of multiple expressions (all must match).
    And(Vec<Expr>),
    /// Logical OR of multiple expressions (any must match).
    Or(Vec<Expr>),
    /// Field comparison expression.
    Field {
        /// The field name to compare.
        field: String,
        /// The comparison operator.
        op: FieldOp,
        /// The value to compare against.
        value: Bson,
    },
    /// Closed range constraint on a single field.
    ///
    /// A missing bound leaves that side of the interval open.
    Range {
        /// The field name to constrain.
        field: String,
        /// Inclusive lower bound.
        gte: Option<Bson>,
        /// Inclusive upper bound.
        lte: Option<Bson>,
    },
}

impl Expr {
    /// Creates a field comparison expression.
    pub fn field(field: String, op: FieldOp, value: Bson) -> Self {
        Expr::Field { field, op, value }
    }

    /// Combines this expression with another using logical AND.
    ///
    /// If this expression is already an AND, the other expression is appended
    /// to the list. Otherwise, a new AND expression is created.
    pub fn and(self, other: Expr) -> Self {
        match self {
            Expr::And(mut list) => {
                list.push(other);
                Expr::And(list)
            }
            _ => Expr::And(vec![self, other]),
        }
    }

    /// Combines this expression with another using logical OR.
    ///
    /// If this expression is already an OR, the other expression is appended
    /// to the list. Otherwise, a new OR expression is created.
    pub fn or(self, other: Expr) -> Self {
        match self {
            Expr::Or(mut list) => {
                list.push(other);
                Expr::Or(list)
            }
            _ => Expr::Or(vec![self, other]),
        }
    }
}

/// A structured query for retrieving documents.
///
/// Use [`QueryBuilder`] for ergonomic construction. A query without a filter
/// matches every document in the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Optional filter expression to match documents.
    pub filter: Option<Expr>,
    /// Maximum number of documents to return.
    pub limit: Option<usize>,
}

impl Query {
    /// Creates a new empty query with no filters or limits.
    pub fn new() -> Self {
        Query { filter: None, limit: None }
    }

    /// Creates a new query builder for fluent construction.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }
}

/// Helper struct for constructing filter expressions.
///
/// All methods accept field names and values as `Into<String>` and `Into<Bson>`.
pub struct Filter;

impl Filter {
    /// Matches documents where the field equals the specified value.
    pub fn eq(field: impl Into<String>, value: impl Into<Bson>) -> Expr {
        Expr::field(field.into(), FieldOp::Eq, value.into())
    }

    /// Matches documents where the string field contains the value, ignoring case.
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Expr {
        Expr::field(field.into(), FieldOp::Contains, Bson::String(value.into()))
    }

    /// Matches documents where the field lies in `[gte, lte]`.
    ///
    /// Returns `None` when both bounds are absent, since such a range constrains
    /// nothing.
    pub fn range<T: Into<Bson>>(field: impl Into<String>, gte: Option<T>, lte: Option<T>) -> Option<Expr> {
        if gte.is_none() && lte.is_none() {
            return None;
        }

        Some(Expr::Range {
            field: field.into(),
            gte: gte.map(Into::into),
            lte: lte.map(Into::into),
        })
    }

    /// Combines expressions such that all must match.
    pub fn and(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::And(exprs.into_iter().collect())
    }

    /// Combines expressions such that any can match.
    pub fn or(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Or(exprs.into_iter().collect())
    }

    /// Folds a set of optional constraints into a single conjunction.
    ///
    /// Returns `None` when no constraint is present, a bare expression when exactly
    /// one is present, and an AND of all of them otherwise.
    pub fn all(exprs: impl IntoIterator<Item = Expr>) -> Option<Expr> {
        let mut exprs = exprs.into_iter().collect::<Vec<_>>();

        match exprs.len() {
            0 => None,
            1 => exprs.pop(),
            _ => Some(Expr::And(exprs)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    /// Creates a new query builder.
    pub fn new() -> Self {
        QueryBuilder { query: Query::default() }
    }

    /// Sets the filter expression for this query.
    pub fn filter(mut self, filter: Expr) -> Self {
        self.query.filter = Some(filter);
        self
    }

    /// Sets the filter expression when one is present, leaving the query
    /// unfiltered otherwise.
    pub fn maybe_filter(mut self, filter: Option<Expr>) -> Self {
        self.query.filter = filter;
        self
    }

    /// Sets the maximum number of documents to return.
    pub fn limit(mut self, limit: usize) -> Self {
        self.query.limit = Some(limit);
        self
    }

    /// Builds and returns the final query.
    pub fn build(self) -> Query {
        self.query
    }
}

pub trait QueryVisitor {
    type Output;
    type Error: Into<DocumentStoreError>;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error>;
    fn visit_or(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error>;
    fn visit_field(
        &mut self,
        field: &str,
        op: &FieldOp,
        value: &Bson,
    ) -> Result<Self::Output, Self::Error>;
    fn visit_range(
        &mut self,
        field: &str,
        gte: Option<&Bson>,
        lte: Option<&Bson>,
    ) -> Result<Self::Output, Self::Error>;

    fn visit_expr(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error> {
        match expr {
            Expr::And(exprs) => self.visit_and(exprs),
            Expr::Or(exprs) => self.visit_or(exprs),
            Expr::Field { field, op, value } => self.visit_field(field, op, value),
            Expr::Range { field, gte, lte } => self.visit_range(field, gte.as_ref(), lte.as_ref()),
        }
    }
}
