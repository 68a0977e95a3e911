//! Command-line interface for user-bench
//!
//! # Usage Examples
//!
//! ```bash
//! # Recreate the users table (destroys existing rows)
//! user-bench create-table
//!
//! # Create one user: "LastName FirstName [Patronymic]" YYYY-MM-DD Sex
//! user-bench create-user "Ivanov Petr Sergeevich" 2009-07-12 Male
//!
//! # Unique users sorted by full name
//! user-bench list-unique
//!
//! # Bulk load 1,000,000 random users and 100 male 'F' users
//! user-bench populate --primary-count 1000000 --filtered-count 100
//!
//! # Time the filtered scan, then compare it before/after indexing
//! user-bench query
//! user-bench optimize
//! ```
//!
//! The connection string comes from `--connection-string`,
//! `USER_BENCH_CONNECTION_STRING`, `--config <PATH>` or `user-bench.toml`.

use anyhow::Context;
use clap::Parser;
use user_bench::config::resolve_connection_string;
use user_bench::{Cli, Commands};
use user_core::User;
use user_store::{UserRepository, UserService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let connection_string = resolve_connection_string(
        cli.connection.connection_string.as_deref(),
        cli.connection.config.as_deref(),
    )?;
    let service = UserService::new(UserRepository::new(connection_string));

    match cli.command {
        Commands::CreateTable => {
            tracing::info!("Creating table 'users'");
            service
                .create_table_if_not_exists()
                .await
                .context("Failed to create table 'users'")?;
            println!("Done. Table 'users' is ready.");
        }
        Commands::CreateUser {
            full_name,
            birthday,
            sex,
        } => {
            tracing::info!("Creating user: {}, born {}, sex {}", full_name, birthday, sex);
            let user = service
                .create_user(&full_name, birthday, &sex)
                .await
                .with_context(|| format!("Failed to create user '{full_name}'"))?;
            println!(
                "User '{} {}' created successfully with Id {}.",
                user.last_name(),
                user.first_name(),
                user.id().unwrap_or_default()
            );
        }
        Commands::ListUnique { json } => {
            let users = service
                .get_unique_users_sorted_by_name()
                .await
                .context("Failed to fetch unique users")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else {
                print_users(&users);
            }
        }
        Commands::Show { id } => {
            match service
                .get_user(id)
                .await
                .with_context(|| format!("Failed to fetch user {id}"))?
            {
                Some(user) => print_users(std::slice::from_ref(&user)),
                None => println!("User with Id {id} not found."),
            }
        }
        Commands::Populate { args } => {
            tracing::info!(
                "Populating users: {} primary + {} filtered (seed={:?})",
                args.primary_count,
                args.filtered_count,
                args.seed
            );
            let metrics = service
                .generate_and_load(args.primary_count, args.filtered_count, args.seed)
                .await
                .context("Failed to populate users")?;
            println!(
                "Done. Loaded {} users in {:.2} seconds ({:.0} rows/sec).",
                metrics.rows_loaded,
                metrics.total_duration.as_secs_f64(),
                metrics.rows_per_second()
            );
        }
        Commands::Query { json } => {
            let (users, elapsed) = service
                .find_filtered_scan()
                .await
                .context("Filtered scan failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            }
            println!("Query found {} users.", users.len());
            println!("Execution Time: {:.4} ms", elapsed.as_secs_f64() * 1000.0);
        }
        Commands::Optimize => {
            let report = service
                .run_index_benchmark()
                .await
                .context("Index benchmark failed")?;
            println!(
                "Without index: {} users in {:.4} ms",
                report.before.rows,
                report.before.elapsed.as_secs_f64() * 1000.0
            );
            println!(
                "Index created in {:.2} seconds",
                report.index_build.as_secs_f64()
            );
            println!(
                "With index:    {} users in {:.4} ms",
                report.after.rows,
                report.after.elapsed.as_secs_f64() * 1000.0
            );
            if let Some(speedup) = report.speedup() {
                println!("Speedup: {speedup:.2}x");
            }
        }
        Commands::Delete { id } => {
            let deleted = service
                .delete_user(id)
                .await
                .with_context(|| format!("Failed to delete user {id}"))?;
            if deleted {
                println!("User with Id {id} deleted.");
            } else {
                println!("Warning: User with Id {id} not found. Nothing to delete.");
            }
        }
    }

    Ok(())
}

fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("No users found.");
        return;
    }

    let rule = "-".repeat(81);
    println!("{rule}");
    println!("{:<35} | {:<12} | {:<8} | Age", "Full Name", "Birthday", "Sex");
    println!("{rule}");
    for user in users {
        println!(
            "{:<35} | {:<12} | {:<8} | {}",
            user.full_name(),
            user.birthday().format("%Y-%m-%d").to_string(),
            user.sex(),
            user.age()
        );
    }
    println!("{rule}");
}
