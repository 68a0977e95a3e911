//! DDL for the `users` table and its performance index.

/// Table holding every user row.
pub const USERS_TABLE: &str = "users";

/// Secondary index accelerating the filtered scan.
pub const PERFORMANCE_INDEX_NAME: &str = "idx_users_sex_lastname";

/// Maximum length of the name columns.
pub const NAME_MAX_LEN: usize = 32;

/// Generate the DROP TABLE statement.
pub fn generate_drop_table() -> String {
    format!("DROP TABLE IF EXISTS \"{USERS_TABLE}\"")
}

/// Generate the CREATE TABLE statement.
pub fn generate_create_table() -> String {
    format!(
        "CREATE TABLE {USERS_TABLE} (\n    \
         user_id SERIAL NOT NULL,\n    \
         firstname varchar({NAME_MAX_LEN}),\n    \
         patronymic varchar({NAME_MAX_LEN}),\n    \
         lastname varchar({NAME_MAX_LEN}),\n    \
         birthday date NOT NULL,\n    \
         age int,\n    \
         sex varchar(8),\n    \
         PRIMARY KEY (user_id)\n)"
    )
}

/// Drop and recreate the table as one batch.
pub fn generate_recreate_table() -> String {
    format!("{};\n{};", generate_drop_table(), generate_create_table())
}

/// Generate the idempotent CREATE INDEX statement.
pub fn generate_create_performance_index() -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS {PERFORMANCE_INDEX_NAME} ON {USERS_TABLE} (sex, lastname)"
    )
}
