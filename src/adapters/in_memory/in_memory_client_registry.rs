// In memory client registry.
//
// Purpose
// - Hold registered clients for the lifetime of the process.
//
// Responsibilities
// - Reject a second client with the same username inside the same write lock as the insert.
// - Look clients up with a linear scan. There is no removal.

use crate::core::account::{Client, User};
use crate::core::ports::{ClientRepository, RepositoryError};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryClientRegistry {
    clients: RwLock<Vec<Client>>,
    is_offline: bool,
}

impl InMemoryClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Client registry offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ClientRepository for InMemoryClientRegistry {
    async fn register(&self, client: Client) -> Result<(), RepositoryError> {
        self.ensure_online()?;

        let mut guard = self.clients.write().await;
        if guard.iter().any(|c| c.username() == client.username()) {
            return Err(RepositoryError::DuplicateUsername(client.username().to_string()));
        }
        tracing::info!(username = client.username(), "client registered");
        guard.push(client);
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Client>, RepositoryError> {
        self.ensure_online()?;

        Ok(self
            .clients
            .read()
            .await
            .iter()
            .find(|c| c.username() == username)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Client>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.clients.read().await.clone())
    }
}
