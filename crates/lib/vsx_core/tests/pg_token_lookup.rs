//! Token lookups against a live PostgreSQL database.
//!
//! Run with `DATABASE_URL` pointing at a server where the test user may create
//! databases: `cargo test -p vsx_core -- --ignored`.

use sqlx::PgPool;
use vsx_core::TokenLookup;
use vsx_core::store::postgres::PgStore;

#[sqlx::test(migrations = false, fixtures("schema", "tokens"))]
#[ignore = "requires DATABASE_URL"]
async fn active_admin_token(pool: PgPool) {
    let lookup = TokenLookup::new(PgStore::new(pool));
    assert!(lookup.has_token("abc123").await.expect("has_token"));
    assert!(lookup.is_admin_token("abc123").await.expect("is_admin_token"));
}

#[sqlx::test(migrations = false, fixtures("schema", "tokens"))]
#[ignore = "requires DATABASE_URL"]
async fn non_admin_and_inactive_tokens(pool: PgPool) {
    let lookup = TokenLookup::new(PgStore::new(pool));
    for value in ["xyz789", "dead000", "norole"] {
        assert!(lookup.has_token(value).await.expect("has_token"), "{value}");
        assert!(
            !lookup.is_admin_token(value).await.expect("is_admin_token"),
            "{value}"
        );
    }
}

#[sqlx::test(migrations = false, fixtures("schema", "tokens"))]
#[ignore = "requires DATABASE_URL"]
async fn missing_token(pool: PgPool) {
    let lookup = TokenLookup::new(PgStore::new(pool));
    assert!(!lookup.has_token("nonexistent").await.expect("has_token"));
    assert!(!lookup.is_admin_token("nonexistent").await.expect("is_admin_token"));
}

#[sqlx::test(migrations = false, fixtures("schema"))]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_values_still_exist(pool: PgPool) {
    sqlx::raw_sql(
        "INSERT INTO user_data (id, login_name, role) VALUES (1, 'root', 'admin');
         INSERT INTO personal_access_token (id, user_data, value, active) VALUES
             (1, 1, 'dup', FALSE),
             (2, 1, 'dup', TRUE);",
    )
    .execute(&pool)
    .await
    .expect("seed");

    let lookup = TokenLookup::new(PgStore::new(pool));
    assert!(lookup.has_token("dup").await.expect("has_token"));
    assert!(lookup.is_admin_token("dup").await.expect("is_admin_token"));
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL"]
async fn missing_table_surfaces_driver_error(pool: PgPool) {
    let lookup = TokenLookup::new(PgStore::new(pool));
    let err = lookup.has_token("abc123").await.unwrap_err();
    assert!(matches!(err, vsx_core::StoreError::Sql(sqlx::Error::Database(_))));
}
