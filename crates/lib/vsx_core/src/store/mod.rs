//! Data-store abstraction.
//!
//! Callers describe an existence check with [`ExistsQuery`] and hand it to a
//! [`Store`]. The store decides how to run it: [`postgres::PgStore`] renders
//! SQL, [`memory::MemoryStore`] evaluates it over in-process tables.

pub mod memory;
pub mod postgres;
pub mod schema;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a [`Store`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sql(#[from] sqlx::Error),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

/// A value bound to a query placeholder or stored in a memory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Bool(bool),
    Int(i64),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

/// A table-qualified column reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column {
    pub table: &'static str,
    pub name: &'static str,
}

impl Column {
    pub const fn new(table: &'static str, name: &'static str) -> Self {
        Self { table, name }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.name)
    }
}

/// Inner join on `left = right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub table: &'static str,
    pub left: Column,
    pub right: Column,
}

/// Equality predicate `column = value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: Column,
    pub value: Value,
}

/// "Does at least one row match?" query.
///
/// Predicates are combined with logical AND. The query never asks the store
/// for row contents, so a store is free to stop at the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistsQuery {
    from: &'static str,
    joins: Vec<Join>,
    predicates: Vec<Predicate>,
}

impl ExistsQuery {
    /// Start a query over `table`.
    pub fn from(table: &'static str) -> Self {
        Self {
            from: table,
            joins: Vec::new(),
            predicates: Vec::new(),
        }
    }

    /// Inner join `table` on `left = right`.
    pub fn join(mut self, table: &'static str, left: Column, right: Column) -> Self {
        self.joins.push(Join { table, left, right });
        self
    }

    /// Add an equality predicate.
    pub fn filter(mut self, column: Column, value: impl Into<Value>) -> Self {
        self.predicates.push(Predicate {
            column,
            value: value.into(),
        });
        self
    }

    /// Alias of [`ExistsQuery::filter`] for chained predicates.
    pub fn and(self, column: Column, value: impl Into<Value>) -> Self {
        self.filter(column, value)
    }

    pub fn table(&self) -> &'static str {
        self.from
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Bind values in placeholder order.
    pub fn binds(&self) -> impl Iterator<Item = &Value> {
        self.predicates.iter().map(|p| &p.value)
    }

    /// Render as a PostgreSQL `SELECT EXISTS(...)` statement with `$n` placeholders.
    pub fn to_sql(&self) -> String {
        let mut sql = format!("SELECT EXISTS(SELECT 1 FROM {}", self.from);
        for join in &self.joins {
            sql.push_str(&format!(
                " JOIN {} ON {} = {}",
                join.table, join.left, join.right
            ));
        }
        for (i, predicate) in self.predicates.iter().enumerate() {
            sql.push_str(if i == 0 { " WHERE " } else { " AND " });
            sql.push_str(&format!("{} = ${}", predicate.column, i + 1));
        }
        sql.push(')');
        sql
    }
}

/// A relational store that can answer existence queries.
#[async_trait]
pub trait Store: Send + Sync {
    /// Returns true iff at least one row satisfies `query`.
    async fn fetch_exists(&self, query: &ExistsQuery) -> Result<bool, StoreError>;
}

#[async_trait]
impl<S: Store + ?Sized> Store for Arc<S> {
    async fn fetch_exists(&self, query: &ExistsQuery) -> Result<bool, StoreError> {
        (**self).fetch_exists(query).await
    }
}
