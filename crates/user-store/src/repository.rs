//! PostgreSQL-backed repository for users.

use crate::copy::copy_users;
use crate::error::StoreError;
use crate::index::{count_performance_indexes, create_performance_index};
use crate::query;
use crate::schema::generate_recreate_table;
use std::borrow::Borrow;
use tokio::sync::OnceCell;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, info};
use user_core::{User, UserId};

/// Repository owning one lazily opened PostgreSQL connection.
///
/// Every operation first calls [`UserRepository::connect`], which opens the
/// connection on first use and reuses it afterwards.
pub struct UserRepository {
    connection_string: String,
    client: OnceCell<Client>,
}

impl UserRepository {
    /// Create a repository for the given connection string.
    ///
    /// No connection is made until the first operation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let repository = UserRepository::new(
    ///     "host=localhost user=postgres password=postgres dbname=testdb",
    /// );
    /// repository.create_table().await?;
    /// ```
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            client: OnceCell::new(),
        }
    }

    /// Create a repository around an already connected client.
    pub fn with_client(client: Client) -> Self {
        Self {
            connection_string: String::new(),
            client: OnceCell::new_with(Some(client)),
        }
    }

    /// Open the connection if it is not open yet.
    pub async fn connect(&self) -> Result<&Client, StoreError> {
        self.client
            .get_or_try_init(|| open_client(&self.connection_string))
            .await
    }

    /// Whether the connection has been opened.
    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }

    /// Drop and recreate the users table. Destroys all rows.
    pub async fn create_table(&self) -> Result<(), StoreError> {
        let client = self.connect().await?;
        let sql = generate_recreate_table();
        info!("Recreating table: users");
        debug!("DDL: {}", sql);
        client.batch_execute(&sql).await?;
        Ok(())
    }

    /// Insert one user and return its generated id.
    pub async fn add(&self, user: &User) -> Result<UserId, StoreError> {
        let client = self.connect().await?;
        query::insert_user(client, user).await
    }

    /// Bulk load users through a single binary COPY.
    pub async fn add_batch<I>(&self, users: I) -> Result<u64, StoreError>
    where
        I: IntoIterator,
        I::Item: Borrow<User>,
    {
        let client = self.connect().await?;
        copy_users(client, users).await
    }

    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let client = self.connect().await?;
        query::select_by_id(client, id).await
    }

    pub async fn get_all(&self) -> Result<Vec<User>, StoreError> {
        let client = self.connect().await?;
        query::select_all(client).await
    }

    pub async fn get_unique_sorted_by_name(&self) -> Result<Vec<User>, StoreError> {
        let client = self.connect().await?;
        query::select_unique_sorted(client).await
    }

    /// Male users whose last name starts with the filter letter.
    pub async fn find_filtered(&self) -> Result<Vec<User>, StoreError> {
        let client = self.connect().await?;
        query::select_filtered(client).await
    }

    /// Update every column of a stored user.
    ///
    /// Fails with [`StoreError::NotFound`] when no row has the user's id.
    pub async fn update(&self, user: &User) -> Result<(), StoreError> {
        let client = self.connect().await?;
        query::update_user(client, user).await
    }

    /// Delete a user by id.
    ///
    /// Fails with [`StoreError::NotFound`] when no row has this id.
    pub async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let client = self.connect().await?;
        query::delete_user(client, id).await
    }

    pub async fn create_performance_index(&self) -> Result<(), StoreError> {
        let client = self.connect().await?;
        create_performance_index(client).await
    }

    pub async fn performance_index_count(&self) -> Result<u64, StoreError> {
        let client = self.connect().await?;
        count_performance_indexes(client).await
    }

    pub async fn row_count(&self) -> Result<u64, StoreError> {
        let client = self.connect().await?;
        query::count_users(client).await
    }
}

async fn open_client(connection_string: &str) -> Result<Client, StoreError> {
    let (client, connection) = tokio_postgres::connect(connection_string, NoTls).await?;

    // Spawn the connection task
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("PostgreSQL connection error: {}", e);
        }
    });

    info!("Connected to PostgreSQL");
    Ok(client)
}
