//! Streaming bulk load via `COPY ... FROM STDIN (FORMAT BINARY)`.
//!
//! A whole batch goes through one COPY: rows are streamed over a single
//! channel and committed by one `finish`. If anything fails before that, the
//! writer is dropped unfinished and PostgreSQL aborts the COPY, so no row of
//! the batch is kept.

use crate::error::StoreError;
use futures::pin_mut;
use std::borrow::Borrow;
use tokio_postgres::binary_copy::BinaryCopyInWriter;
use tokio_postgres::types::Type;
use tokio_postgres::Client;
use tracing::debug;
use user_core::User;

/// COPY statement; the column order matches [`COPY_COLUMN_TYPES`].
pub const COPY_USERS_SQL: &str =
    "COPY users (firstname, patronymic, lastname, birthday, age, sex) FROM STDIN (FORMAT BINARY)";

/// Wire types of the copied columns.
pub const COPY_COLUMN_TYPES: [Type; 6] = [
    Type::VARCHAR,
    Type::VARCHAR,
    Type::VARCHAR,
    Type::DATE,
    Type::INT4,
    Type::VARCHAR,
];

/// Rows between progress log lines.
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Stream every user into the `users` table with a single binary COPY.
///
/// Returns the number of rows PostgreSQL reports as copied. Generated ids
/// are not read back.
pub async fn copy_users<I>(client: &Client, users: I) -> Result<u64, StoreError>
where
    I: IntoIterator,
    I::Item: Borrow<User>,
{
    let sink = client.copy_in(COPY_USERS_SQL).await?;
    let writer = BinaryCopyInWriter::new(sink, &COPY_COLUMN_TYPES);
    pin_mut!(writer);

    let mut written: u64 = 0;
    for user in users {
        let user = user.borrow();
        let first_name = user.first_name();
        let patronymic = user.patronymic();
        let last_name = user.last_name();
        let birthday = user.birthday();
        let age = user.age();
        let sex = user.sex();

        writer
            .as_mut()
            .write(&[
                &first_name,
                &patronymic,
                &last_name,
                &birthday,
                &age,
                &sex,
            ])
            .await?;

        written += 1;
        if written % PROGRESS_INTERVAL == 0 {
            debug!("COPY progress: {} rows streamed", written);
        }
    }

    let copied = writer.finish().await?;
    debug!("COPY finished: {} rows streamed, {} committed", written, copied);

    Ok(copied)
}
