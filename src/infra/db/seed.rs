//! Reference data and admin account provisioning.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::config::{ROLE_ADMIN, SEED_AREAS_OF_LAW, SEED_SERVICES, SEED_TARGET_CLIENTS};
use crate::domain::Password;
use crate::errors::AppResult;
use crate::infra::repositories::entities::{area_of_law, service, target_client, user};

/// Number of rows inserted per lookup table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub areas_of_law: usize,
    pub services: usize,
    pub target_clients: usize,
}

/// Insert the standard lookup values, skipping names that already exist.
pub async fn seed_lookups(db: &DatabaseConnection) -> AppResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for name in SEED_AREAS_OF_LAW {
        let existing = area_of_law::Entity::find()
            .filter(area_of_law::Column::AreaName.eq(*name))
            .one(db)
            .await?;
        if existing.is_none() {
            area_of_law::ActiveModel {
                area_name: Set(name.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await?;
            summary.areas_of_law += 1;
        }
    }

    for name in SEED_SERVICES {
        let existing = service::Entity::find()
            .filter(service::Column::ServiceName.eq(*name))
            .one(db)
            .await?;
        if existing.is_none() {
            service::ActiveModel {
                service_name: Set(name.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await?;
            summary.services += 1;
        }
    }

    for name in SEED_TARGET_CLIENTS {
        let existing = target_client::Entity::find()
            .filter(target_client::Column::ClientType.eq(*name))
            .one(db)
            .await?;
        if existing.is_none() {
            target_client::ActiveModel {
                client_type: Set(name.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await?;
            summary.target_clients += 1;
        }
    }

    tracing::info!(
        areas_of_law = summary.areas_of_law,
        services = summary.services,
        target_clients = summary.target_clients,
        "Lookup tables seeded"
    );
    Ok(summary)
}

/// Create the admin account, or reset its password and role if it exists.
///
/// Returns the account id.
pub async fn upsert_admin(db: &DatabaseConnection, username: &str, password: &str) -> AppResult<i32> {
    let password_hash = Password::new(password)?.into_string();

    let existing = user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?;

    let model = match existing {
        Some(model) => {
            let mut active: user::ActiveModel = model.into();
            active.password_hash = Set(password_hash);
            active.role = Set(ROLE_ADMIN.to_string());
            let updated = active.update(db).await?;
            tracing::info!(username, "Admin password reset");
            updated
        }
        None => {
            let created = user::ActiveModel {
                username: Set(username.to_string()),
                password_hash: Set(password_hash),
                role: Set(ROLE_ADMIN.to_string()),
                created_at: Set(Utc::now()),
                ..Default::default()
            }
            .insert(db)
            .await?;
            tracing::info!(username, "Admin account created");
            created
        }
    };

    Ok(model.user_id)
}
