use crate::application::errors::ApplicationError;
use crate::core::account::{Account, User};
use crate::core::decider::log_in::{LogIn, decide_log_in};
use crate::core::ports::ClientRepository;
use std::sync::Arc;

pub struct LogInHandler<TClients>
where
    TClients: ClientRepository + 'static,
{
    clients: Arc<TClients>,
}

impl<TClients> LogInHandler<TClients>
where
    TClients: ClientRepository + 'static,
{
    pub fn new(clients: Arc<TClients>) -> Self {
        Self { clients }
    }

    pub async fn handle(&self, command: LogIn) -> Result<Account, ApplicationError> {
        let registered = self.clients.find_by_username(&command.username).await?;
        match decide_log_in(&command, registered) {
            Some(account) => {
                tracing::info!(
                    username = account.username(),
                    manager = account.is_manager(),
                    "logged in"
                );
                Ok(account)
            }
            None => {
                tracing::warn!(username = %command.username, "login failed");
                Err(ApplicationError::InvalidCredentials)
            }
        }
    }
}
