use picture_persistence::repositories::IdentityRepository;
use picture_types::Identity;

use crate::error::ClientError;

/// Owner recorded on games created without a signed-in player.
pub const ANONYMOUS_OWNER: &str = "anonymous";

/// The signed-in player's identity, loaded at start-up and persisted on change.
pub struct SessionContext {
    repository: IdentityRepository,
    identity: Option<Identity>,
}

impl SessionContext {
    pub async fn load(repository: IdentityRepository) -> Result<Self, ClientError> {
        let identity = repository.load().await?;
        match &identity {
            Some(identity) => tracing::debug!("Restored identity for {}", identity.name),
            None => tracing::debug!("No stored identity"),
        }
        Ok(Self {
            repository,
            identity,
        })
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    pub fn require_identity(&self) -> Result<&Identity, ClientError> {
        self.identity.as_ref().ok_or(ClientError::NotSignedIn)
    }

    /// User id to attribute created games to.
    pub fn owner_id(&self) -> &str {
        self.identity
            .as_ref()
            .map(|identity| identity.user_id.as_str())
            .unwrap_or(ANONYMOUS_OWNER)
    }

    pub async fn save(&mut self, identity: Identity) -> Result<(), ClientError> {
        self.repository.save(&identity).await?;
        self.identity = Some(identity);
        Ok(())
    }

    /// Forget the identity, both in memory and in the store.
    pub async fn clear(&mut self) -> Result<(), ClientError> {
        self.repository.clear().await?;
        self.identity = None;
        Ok(())
    }
}
