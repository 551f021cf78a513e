//! JSON fixture loading for the memory store.

use std::path::Path;

use serde::Deserialize;
use vsx_core::models::auth::{AccessToken, Account};
use vsx_core::store::memory::MemoryStore;

use crate::Result;

/// Accounts and tokens to seed a [`MemoryStore`] with.
#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub tokens: Vec<AccessToken>,
}

impl Fixture {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let fixture = serde_json::from_str(&raw)?;
        Ok(fixture)
    }

    pub async fn into_store(self) -> Result<MemoryStore> {
        log::debug!(
            "Seeding memory store with {} accounts, {} tokens",
            self.accounts.len(),
            self.tokens.len()
        );
        let store = MemoryStore::new();
        for account in &self.accounts {
            store.insert_account(account).await?;
        }
        for token in &self.tokens {
            store.insert_token(token).await?;
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use vsx_core::TokenLookup;
    use vsx_core::models::auth::Role;

    use super::*;

    #[tokio::test]
    async fn seeds_store_from_json() {
        let fixture: Fixture = serde_json::from_str(
            r#"{
                "accounts": [{ "id": 1, "login_name": "root", "role": "admin" }],
                "tokens": [{ "id": 1, "user_data": 1, "value": "abc123", "active": true }]
            }"#,
        )
        .unwrap();
        assert_eq!(fixture.accounts[0].role, Some(Role::Admin));

        let lookup = TokenLookup::new(fixture.into_store().await.unwrap());
        assert!(lookup.is_admin_token("abc123").await.unwrap());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let fixture: Fixture = serde_json::from_str("{}").unwrap();
        assert!(fixture.accounts.is_empty());
        assert!(fixture.tokens.is_empty());
    }
}
