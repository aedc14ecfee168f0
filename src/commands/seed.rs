//! Seed command - Reference data and the admin account.

use crate::cli::args::{SeedAction, SeedArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::db::seed;
use crate::infra::Database;

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        SeedAction::Lookups => {
            let summary = seed::seed_lookups(db.connection()).await?;
            println!(
                "Inserted {} areas of law, {} services, {} target client types",
                summary.areas_of_law, summary.services, summary.target_clients
            );
        }
        SeedAction::Admin { username, password } => {
            let user_id = seed::upsert_admin(db.connection(), &username, &password).await?;
            println!("Admin account '{}' ready (user_id {})", username, user_id);
        }
    }

    Ok(())
}
