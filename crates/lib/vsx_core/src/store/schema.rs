//! Table and column names of the registry schema.

use super::Column;

/// Personal access tokens.
pub mod personal_access_token {
    use super::Column;

    pub const TABLE: &str = "personal_access_token";

    pub const ID: Column = Column::new(TABLE, "id");
    pub const USER_DATA: Column = Column::new(TABLE, "user_data");
    pub const VALUE: Column = Column::new(TABLE, "value");
    pub const ACTIVE: Column = Column::new(TABLE, "active");
    pub const DESCRIPTION: Column = Column::new(TABLE, "description");

    pub const COLUMNS: &[Column] = &[ID, USER_DATA, VALUE, ACTIVE, DESCRIPTION];
}

/// User accounts.
pub mod user_data {
    use super::Column;

    pub const TABLE: &str = "user_data";

    pub const ID: Column = Column::new(TABLE, "id");
    pub const LOGIN_NAME: Column = Column::new(TABLE, "login_name");
    pub const ROLE: Column = Column::new(TABLE, "role");

    pub const COLUMNS: &[Column] = &[ID, LOGIN_NAME, ROLE];
}

/// Every table with its declared columns.
pub const TABLES: &[(&str, &[Column])] = &[
    (personal_access_token::TABLE, personal_access_token::COLUMNS),
    (user_data::TABLE, user_data::COLUMNS),
];
