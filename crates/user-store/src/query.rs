//! Statements reading and writing single users, plus the two
//! distinguished queries (unique listing and filtered scan).

use crate::error::StoreError;
use crate::row::{user_from_row, users_from_rows, USER_COLUMNS};
use tokio_postgres::Client;
use tracing::debug;
use user_core::{User, UserId, FILTER_LETTER, SEX_MALE};

/// One row per distinct (lastname, firstname, patronymic, birthday), sorted
/// by that same key. Rows differing only in sex or age collapse into one.
pub fn unique_sorted_sql() -> String {
    format!(
        "SELECT DISTINCT ON (lastname, firstname, patronymic, birthday) {USER_COLUMNS} \
         FROM users \
         ORDER BY lastname, firstname, patronymic, birthday"
    )
}

/// Male users whose last name starts with the given pattern.
pub fn filtered_scan_sql() -> String {
    format!("SELECT {USER_COLUMNS} FROM users WHERE sex = $1 AND lastname LIKE $2")
}

/// LIKE pattern matching last names starting with [`FILTER_LETTER`].
pub fn filter_pattern() -> String {
    format!("{FILTER_LETTER}%")
}

pub async fn select_unique_sorted(client: &Client) -> Result<Vec<User>, StoreError> {
    let sql = unique_sorted_sql();
    debug!("Query: {}", sql);
    let rows = client.query(&sql, &[]).await?;
    Ok(users_from_rows(&rows)?)
}

/// Run the filtered scan and materialize every matching row.
pub async fn select_filtered(client: &Client) -> Result<Vec<User>, StoreError> {
    let sql = filtered_scan_sql();
    let pattern = filter_pattern();
    debug!("Query: {} [{}, {}]", sql, SEX_MALE, pattern);
    let rows = client.query(&sql, &[&SEX_MALE, &pattern]).await?;
    Ok(users_from_rows(&rows)?)
}

pub async fn select_by_id(client: &Client, id: UserId) -> Result<Option<User>, StoreError> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = $1");
    let row = client.query_opt(&sql, &[&id]).await?;
    Ok(row.as_ref().map(user_from_row).transpose()?)
}

pub async fn select_all(client: &Client) -> Result<Vec<User>, StoreError> {
    let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY user_id");
    let rows = client.query(&sql, &[]).await?;
    Ok(users_from_rows(&rows)?)
}

/// Insert one user and return the generated key.
pub async fn insert_user(client: &Client, user: &User) -> Result<UserId, StoreError> {
    let sql = "INSERT INTO users (firstname, patronymic, lastname, birthday, age, sex) \
               VALUES ($1, $2, $3, $4, $5, $6) \
               RETURNING user_id";
    let age = user.age();
    let row = client
        .query_one(
            sql,
            &[
                &user.first_name(),
                &user.patronymic(),
                &user.last_name(),
                &user.birthday(),
                &age,
                &user.sex(),
            ],
        )
        .await?;
    Ok(row.try_get(0)?)
}

pub async fn update_user(client: &Client, user: &User) -> Result<(), StoreError> {
    let id = user.id().ok_or(StoreError::Unsaved)?;
    let sql = "UPDATE users SET firstname = $1, patronymic = $2, lastname = $3, \
               birthday = $4, age = $5, sex = $6 \
               WHERE user_id = $7";
    let age = user.age();
    let updated = client
        .execute(
            sql,
            &[
                &user.first_name(),
                &user.patronymic(),
                &user.last_name(),
                &user.birthday(),
                &age,
                &user.sex(),
                &id,
            ],
        )
        .await?;
    if updated == 0 {
        return Err(StoreError::NotFound(id));
    }
    Ok(())
}

pub async fn delete_user(client: &Client, id: UserId) -> Result<(), StoreError> {
    let deleted = client
        .execute("DELETE FROM users WHERE user_id = $1", &[&id])
        .await?;
    if deleted == 0 {
        return Err(StoreError::NotFound(id));
    }
    Ok(())
}

pub async fn count_users(client: &Client) -> Result<u64, StoreError> {
    let row = client.query_one("SELECT COUNT(*) FROM users", &[]).await?;
    let count: i64 = row.try_get(0)?;
    Ok(count as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_sorted_sql_dedups_on_sort_key() {
        let sql = unique_sorted_sql();
        assert!(sql.contains("DISTINCT ON (lastname, firstname, patronymic, birthday)"));
        assert!(sql.ends_with("ORDER BY lastname, firstname, patronymic, birthday"));
        assert!(!sql.contains("sex,"));
    }

    #[test]
    fn test_filtered_scan_sql() {
        let sql = filtered_scan_sql();
        assert!(sql.ends_with("WHERE sex = $1 AND lastname LIKE $2"));
        assert_eq!(filter_pattern(), "F%");
    }
}
