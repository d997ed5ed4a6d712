use anyhow::Result;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

use crate::entities::{identity, prelude::*};
use picture_types::Identity;

/// Only one identity is kept per client.
const IDENTITY_ROW_ID: i32 = 1;

pub struct IdentityRepository {
    db: DatabaseConnection,
}

impl IdentityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_identity(model: identity::Model) -> Identity {
        Identity {
            session_id: model.session_id,
            user_id: model.user_id,
            name: model.name,
        }
    }

    pub async fn load(&self) -> Result<Option<Identity>> {
        let model = IdentityEntity::find_by_id(IDENTITY_ROW_ID)
            .one(&self.db)
            .await?;
        Ok(model.map(Self::model_to_identity))
    }

    /// Store the identity, replacing any previous one.
    pub async fn save(&self, identity: &Identity) -> Result<()> {
        self.clear().await?;

        let model = identity::ActiveModel {
            id: ActiveValue::Set(IDENTITY_ROW_ID),
            session_id: ActiveValue::Set(identity.session_id.clone()),
            user_id: ActiveValue::Set(identity.user_id.clone()),
            name: ActiveValue::Set(identity.name.clone()),
            saved_at: ActiveValue::Set(chrono::Utc::now().into()),
        };
        IdentityEntity::insert(model).exec(&self.db).await?;

        tracing::debug!("Saved identity for user {}", identity.user_id);
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        let result = IdentityEntity::delete_many().exec(&self.db).await?;
        if result.rows_affected > 0 {
            tracing::debug!("Cleared stored identity");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use migration::{Migrator, MigratorTrait};

    async fn setup_test_db() -> IdentityRepository {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        IdentityRepository::new(db)
    }

    fn test_identity(name: &str) -> Identity {
        Identity {
            session_id: format!("session-{}", name.to_lowercase()),
            user_id: format!("user-{}", name.to_lowercase()),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_empty_store() {
        let repo = setup_test_db().await;
        assert_eq!(repo.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let repo = setup_test_db().await;
        let identity = test_identity("Ada");

        repo.save(&identity).await.unwrap();

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded, identity);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_identity() {
        let repo = setup_test_db().await;

        repo.save(&test_identity("Ada")).await.unwrap();
        repo.save(&test_identity("Grace")).await.unwrap();

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded.name, "Grace");
        assert_eq!(loaded.user_id, "user-grace");
    }

    #[tokio::test]
    async fn test_clear() {
        let repo = setup_test_db().await;

        repo.save(&test_identity("Ada")).await.unwrap();
        repo.clear().await.unwrap();
        assert_eq!(repo.load().await.unwrap(), None);

        // Clearing an empty store is fine
        repo.clear().await.unwrap();
    }
}
