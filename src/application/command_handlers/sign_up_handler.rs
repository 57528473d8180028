use crate::application::errors::ApplicationError;
use crate::core::account::{Client, User};
use crate::core::decider::sign_up::{SignUp, decide_sign_up};
use crate::core::ports::ClientRepository;
use std::sync::Arc;

pub struct SignUpHandler<TClients>
where
    TClients: ClientRepository + 'static,
{
    clients: Arc<TClients>,
}

impl<TClients> SignUpHandler<TClients>
where
    TClients: ClientRepository + 'static,
{
    pub fn new(clients: Arc<TClients>) -> Self {
        Self { clients }
    }

    pub async fn handle(&self, command: SignUp) -> Result<Client, ApplicationError> {
        let client = decide_sign_up(command).inspect_err(|e| {
            tracing::warn!(error = %e, "sign up rejected");
        })?;
        self.clients.register(client.clone()).await.inspect_err(|e| {
            tracing::warn!(error = %e, username = client.username(), "sign up rejected");
        })?;
        Ok(client)
    }
}

#[cfg(test)]
mod sign_up_handler_tests {
    use super::*;
    use crate::adapters::in_memory::in_memory_client_registry::InMemoryClientRegistry;
    use crate::core::account::ClientError;
    use crate::core::decider::DecideError;
    use crate::core::ports::RepositoryError;
    use crate::test_support::fixtures::clients::ClientBuilder;
    use rstest::{fixture, rstest};

    fn sign_up(builder: ClientBuilder) -> SignUp {
        let dto = builder.dto();
        SignUp {
            username: dto.username,
            password: dto.password,
            email: dto.email,
        }
    }

    #[fixture]
    fn before_each() -> (Arc<InMemoryClientRegistry>, SignUpHandler<InMemoryClientRegistry>) {
        let registry = Arc::new(InMemoryClientRegistry::new());
        let handler = SignUpHandler::new(registry.clone());
        (registry, handler)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_register_a_new_client(
        before_each: (Arc<InMemoryClientRegistry>, SignUpHandler<InMemoryClientRegistry>),
    ) {
        let (registry, handler) = before_each;
        let client = handler.handle(sign_up(ClientBuilder::new())).await.unwrap();
        assert_eq!(
            registry.find_by_username("alice").await.unwrap(),
            Some(client)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_second_alice(
        before_each: (Arc<InMemoryClientRegistry>, SignUpHandler<InMemoryClientRegistry>),
    ) {
        let (registry, handler) = before_each;
        handler.handle(sign_up(ClientBuilder::new())).await.unwrap();
        let result = handler
            .handle(sign_up(ClientBuilder::new().email("alice2@email.com")))
            .await;
        assert_eq!(
            result,
            Err(ApplicationError::Repository(
                RepositoryError::DuplicateUsername("alice".into())
            ))
        );
        assert_eq!(registry.list().await.unwrap().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_register_an_invalid_client(
        before_each: (Arc<InMemoryClientRegistry>, SignUpHandler<InMemoryClientRegistry>),
    ) {
        let (registry, handler) = before_each;
        let result = handler
            .handle(sign_up(ClientBuilder::new().email("no-at-sign")))
            .await;
        assert_eq!(
            result,
            Err(ApplicationError::Rejected(DecideError::Client(
                ClientError::InvalidEmail
            )))
        );
        assert!(registry.list().await.unwrap().is_empty());
    }
}
