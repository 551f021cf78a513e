//! In-process [`Store`] backed by plain tables.
//!
//! Evaluates an [`ExistsQuery`] by filtering the base table on its own
//! predicates, then joining depth-first and stopping at the first match.
//! SQL NULL is modelled as `None` and never compares equal to anything.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::schema::{self, personal_access_token, user_data};
use super::{Column, ExistsQuery, Store, StoreError, Value};
use crate::models::auth::{AccessToken, Account};

/// One row: column name to nullable cell.
pub type Row = HashMap<&'static str, Option<Value>>;

#[derive(Debug, Default)]
struct Table {
    columns: Vec<&'static str>,
    rows: Vec<Row>,
}

/// Memory store preloaded with the registry schema.
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<HashMap<&'static str, Table>>,
}

impl MemoryStore {
    /// Create an empty store with every table from [`schema::TABLES`].
    pub fn new() -> Self {
        let tables = schema::TABLES
            .iter()
            .map(|(name, columns)| {
                let table = Table {
                    columns: columns.iter().map(|c| c.name).collect(),
                    rows: Vec::new(),
                };
                (*name, table)
            })
            .collect();
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Insert a row. Columns left out are NULL.
    pub async fn insert_row<I>(&self, table: &str, cells: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = (&'static str, Option<Value>)>,
    {
        let mut tables = self.tables.write().await;
        let target = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::UnknownTable(table.to_string()))?;

        let mut row: Row = target.columns.iter().map(|c| (*c, None)).collect();
        for (column, value) in cells {
            let cell = row
                .get_mut(column)
                .ok_or_else(|| StoreError::UnknownColumn(format!("{table}.{column}")))?;
            *cell = value;
        }
        target.rows.push(row);
        Ok(())
    }

    pub async fn insert_account(&self, account: &Account) -> Result<(), StoreError> {
        self.insert_row(
            user_data::TABLE,
            [
                (user_data::ID.name, Some(Value::Int(account.id))),
                (
                    user_data::LOGIN_NAME.name,
                    Some(Value::from(account.login_name.as_str())),
                ),
                (
                    user_data::ROLE.name,
                    account.role.as_ref().map(|r| Value::from(r.as_str())),
                ),
            ],
        )
        .await
    }

    pub async fn insert_token(&self, token: &AccessToken) -> Result<(), StoreError> {
        self.insert_row(
            personal_access_token::TABLE,
            [
                (personal_access_token::ID.name, Some(Value::Int(token.id))),
                (
                    personal_access_token::USER_DATA.name,
                    Some(Value::Int(token.user_data)),
                ),
                (
                    personal_access_token::VALUE.name,
                    Some(Value::from(token.value.as_str())),
                ),
                (
                    personal_access_token::ACTIVE.name,
                    Some(Value::Bool(token.active)),
                ),
                (
                    personal_access_token::DESCRIPTION.name,
                    token.description.clone().map(Value::from),
                ),
            ],
        )
        .await
    }

    /// Set `column` on every row of `key.table` where `key` equals `key_value`.
    /// Returns the number of rows touched.
    pub async fn update_where(
        &self,
        key: Column,
        key_value: Value,
        column: Column,
        value: Option<Value>,
    ) -> Result<usize, StoreError> {
        let mut tables = self.tables.write().await;
        let table = tables
            .get_mut(key.table)
            .ok_or_else(|| StoreError::UnknownTable(key.table.to_string()))?;
        for c in [key, column] {
            if c.table != key.table || !table.columns.contains(&c.name) {
                return Err(StoreError::UnknownColumn(c.to_string()));
            }
        }

        let mut touched = 0;
        for row in &mut table.rows {
            if row.get(key.name).and_then(Option::as_ref) == Some(&key_value) {
                row.insert(column.name, value.clone());
                touched += 1;
            }
        }
        Ok(touched)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Tables in scope for one candidate row combination.
type Binding<'a> = Vec<(&'static str, &'a Row)>;

fn cell<'a>(binding: &Binding<'a>, column: Column) -> Option<&'a Value> {
    binding
        .iter()
        .find(|(table, _)| *table == column.table)
        .map(|(_, row)| *row)
        .and_then(|row| row.get(column.name))
        .and_then(Option::as_ref)
}

fn sql_eq(a: Option<&Value>, b: Option<&Value>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// True when every predicate on `table` holds for `binding`.
fn predicates_hold(query: &ExistsQuery, table: &str, binding: &Binding<'_>) -> bool {
    query
        .predicates()
        .iter()
        .filter(|p| p.column.table == table)
        .all(|p| sql_eq(cell(binding, p.column), Some(&p.value)))
}

/// Check every table and column the query names before touching any rows.
fn validate(tables: &HashMap<&'static str, Table>, query: &ExistsQuery) -> Result<(), StoreError> {
    let mut in_scope = vec![query.table()];
    in_scope.extend(query.joins().iter().map(|j| j.table));
    for name in &in_scope {
        if !tables.contains_key(name) {
            return Err(StoreError::UnknownTable(name.to_string()));
        }
    }

    let columns = query
        .joins()
        .iter()
        .flat_map(|j| [j.left, j.right])
        .chain(query.predicates().iter().map(|p| p.column));
    for column in columns {
        let known = in_scope.contains(&column.table)
            && tables
                .get(column.table)
                .is_some_and(|t| t.columns.contains(&column.name));
        if !known {
            return Err(StoreError::UnknownColumn(column.to_string()));
        }
    }
    Ok(())
}

/// Depth-first join from `joins[depth]` onwards. Each table's predicates are
/// checked as soon as its row is bound, and the search stops at the first
/// complete match.
fn join_matches<'a>(
    tables: &'a HashMap<&'static str, Table>,
    query: &ExistsQuery,
    depth: usize,
    binding: &mut Binding<'a>,
) -> bool {
    let Some(join) = query.joins().get(depth) else {
        return true;
    };
    for row in &tables[join.table].rows {
        binding.push((join.table, row));
        let hit = sql_eq(cell(binding, join.left), cell(binding, join.right))
            && predicates_hold(query, join.table, binding)
            && join_matches(tables, query, depth + 1, binding);
        binding.pop();
        if hit {
            return true;
        }
    }
    false
}

#[async_trait]
impl Store for MemoryStore {
    async fn fetch_exists(&self, query: &ExistsQuery) -> Result<bool, StoreError> {
        let guard = self.tables.read().await;
        let tables: &HashMap<&'static str, Table> = &guard;
        validate(tables, query)?;

        let base = query.table();
        let exists = tables[base]
            .rows
            .iter()
            .map(|row| vec![(base, row)])
            .filter(|binding| predicates_hold(query, base, binding))
            .any(|mut binding| join_matches(tables, query, 0, &mut binding));
        Ok(exists)
    }
}
