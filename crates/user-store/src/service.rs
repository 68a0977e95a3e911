//! Caller-facing user operations.

use crate::benchmark::{run_index_benchmark, BenchmarkReport};
use crate::error::StoreError;
use crate::metrics::LoadMetrics;
use crate::repository::UserRepository;
use chrono::NaiveDate;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use user_core::timing::measure;
use user_core::{FullName, User, UserId};
use user_generator::UserGenerator;

/// User operations on top of a [`UserRepository`].
pub struct UserService {
    repository: UserRepository,
}

impl UserService {
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }

    /// Get a reference to the repository.
    pub fn repository(&self) -> &UserRepository {
        &self.repository
    }

    /// Drop and recreate the users table.
    pub async fn create_table_if_not_exists(&self) -> Result<(), StoreError> {
        self.repository.create_table().await
    }

    /// Parse `full_name` (`Last First [Patronymic...]`), validate, insert and
    /// return the user with its new id.
    pub async fn create_user(
        &self,
        full_name: &str,
        birthday: NaiveDate,
        sex: &str,
    ) -> Result<User, StoreError> {
        let name = FullName::parse(full_name)?;
        let user = User::create(
            name.first_name,
            name.patronymic,
            name.last_name,
            birthday,
            sex,
        )?;

        let id = self.repository.add(&user).await?;
        info!("Created user {} with id {}", user.full_name(), id);
        Ok(user.with_id(id))
    }

    pub async fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        self.repository.get_by_id(id).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.repository.get_all().await
    }

    /// Users deduplicated and sorted by (last, first, patronymic, birthday).
    pub async fn get_unique_users_sorted_by_name(&self) -> Result<Vec<User>, StoreError> {
        self.repository.get_unique_sorted_by_name().await
    }

    /// Generate `primary_count` random users plus `filtered_count` users
    /// matching the filtered scan, and load them all with one COPY.
    ///
    /// Without a seed the generator draws from OS entropy.
    pub async fn generate_and_load(
        &self,
        primary_count: u64,
        filtered_count: u64,
        seed: Option<u64>,
    ) -> Result<LoadMetrics, StoreError> {
        let start_time = Instant::now();
        let mut generator = match seed {
            Some(seed) => UserGenerator::new(seed),
            None => UserGenerator::from_entropy(),
        };

        info!(
            "Generating and loading {} users ({} primary, {} filtered)",
            primary_count + filtered_count,
            primary_count,
            filtered_count
        );

        let rows_loaded = self
            .repository
            .add_batch(generator.population(primary_count, filtered_count))
            .await?;

        let metrics = LoadMetrics {
            rows_loaded,
            total_duration: start_time.elapsed(),
        };

        info!(
            "Load complete: {} rows in {:?} ({:.2} rows/sec)",
            metrics.rows_loaded,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Run the filtered scan and measure it.
    ///
    /// The connection is opened before the clock starts, so the duration
    /// covers only the query and the materialization of its rows.
    pub async fn find_filtered_scan(&self) -> Result<(Vec<User>, Duration), StoreError> {
        self.repository.connect().await?;
        let (users, elapsed) = measure(self.repository.find_filtered()).await;
        Ok((users?, elapsed))
    }

    pub async fn ensure_performance_index(&self) -> Result<(), StoreError> {
        self.repository.create_performance_index().await
    }

    /// Time the filtered scan before and after creating the index.
    pub async fn run_index_benchmark(&self) -> Result<BenchmarkReport, StoreError> {
        run_index_benchmark(self).await
    }

    /// Delete a user.
    ///
    /// A missing user is not an error: it is logged and reported as `false`.
    pub async fn delete_user(&self, id: UserId) -> Result<bool, StoreError> {
        match self.repository.delete(id).await {
            Ok(()) => Ok(true),
            Err(e) if e.is_not_found() => {
                warn!("User with id {} not found. Nothing to delete.", id);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
