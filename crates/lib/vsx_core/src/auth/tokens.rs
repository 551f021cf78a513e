//! Personal access token lookups.
//!
//! Both checks are existence queries. Token values are not assumed unique, so
//! "exists" means at least one matching row.

use crate::models::auth::Role;
use crate::store::schema::{personal_access_token, user_data};
use crate::store::{ExistsQuery, Store, StoreError};

/// Query: any token with this value.
pub fn token_exists_query(value: &str) -> ExistsQuery {
    ExistsQuery::from(personal_access_token::TABLE).filter(personal_access_token::VALUE, value)
}

/// Query: any active token with this value owned by an admin account.
pub fn admin_token_query(value: &str) -> ExistsQuery {
    ExistsQuery::from(personal_access_token::TABLE)
        .join(
            user_data::TABLE,
            user_data::ID,
            personal_access_token::USER_DATA,
        )
        .filter(personal_access_token::VALUE, value)
        .and(personal_access_token::ACTIVE, true)
        .and(user_data::ROLE, Role::Admin.as_str())
}

/// Read-only token checks against a [`Store`].
#[derive(Debug, Clone)]
pub struct TokenLookup<S> {
    store: S,
}

impl<S: Store> TokenLookup<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether any stored token has exactly this value.
    pub async fn has_token(&self, value: &str) -> Result<bool, StoreError> {
        let exists = self.store.fetch_exists(&token_exists_query(value)).await?;
        log::debug!("has_token -> {exists}");
        Ok(exists)
    }

    /// Whether `value` names an active token owned by an [`Role::Admin`] account.
    pub async fn is_admin_token(&self, value: &str) -> Result<bool, StoreError> {
        let exists = self.store.fetch_exists(&admin_token_query(value)).await?;
        log::debug!("is_admin_token -> {exists}");
        Ok(exists)
    }
}
