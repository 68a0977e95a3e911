//! Mapping of `users` rows to [`User`].

use tokio_postgres::Row;
use user_core::User;

/// Columns selected by every user query.
pub const USER_COLUMNS: &str = "user_id, firstname, patronymic, lastname, birthday, age, sex";

/// Convert a selected row into a [`User`].
///
/// Name and sex columns are nullable in the table; NULL becomes an empty
/// string, except for the patronymic which stays absent.
pub fn user_from_row(row: &Row) -> Result<User, tokio_postgres::Error> {
    let id: i32 = row.try_get("user_id")?;
    let first_name: Option<String> = row.try_get("firstname")?;
    let patronymic: Option<String> = row.try_get("patronymic")?;
    let last_name: Option<String> = row.try_get("lastname")?;
    let birthday: chrono::NaiveDate = row.try_get("birthday")?;
    let sex: Option<String> = row.try_get("sex")?;

    Ok(User::restore(
        id,
        first_name.unwrap_or_default(),
        patronymic,
        last_name.unwrap_or_default(),
        birthday,
        sex.unwrap_or_default(),
    ))
}

/// Convert every row, failing on the first bad one.
pub fn users_from_rows(rows: &[Row]) -> Result<Vec<User>, tokio_postgres::Error> {
    rows.iter().map(user_from_row).collect()
}
