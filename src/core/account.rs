// Accounts that can log in: self-registered clients and the single manager.
//
// Responsibilities
// - Validate client fields at construction; a client either exists fully valid or not at all.
// - Expose a shared `User` capability and a tagged `Account` for callers that need the role.
//
// Boundaries
// - Username uniqueness is a registry concern (see ports::ClientRepository), not checked here.
// - Passwords are compared as plain strings. This is not an authentication design.

use crate::core::view::View;
use thiserror::Error;

pub const MANAGER_USERNAME: &str = "admin";
pub const MANAGER_PASSWORD: &str = "admin123";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("Username cannot be empty")]
    EmptyUsername,
    #[error("Password cannot be empty")]
    EmptyPassword,
    #[error("Invalid email format.")]
    InvalidEmail,
}

pub trait User {
    fn username(&self) -> &str;
    fn verify_password(&self, input: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    username: String,
    password: String,
    email: String,
}

fn validate_email(email: &str) -> Result<(), ClientError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(ClientError::InvalidEmail)
    }
}

impl Client {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let username = username.into();
        let password = password.into();
        let email = email.into();

        if username.trim().is_empty() {
            return Err(ClientError::EmptyUsername);
        }
        if password.trim().is_empty() {
            return Err(ClientError::EmptyPassword);
        }
        validate_email(&email)?;

        Ok(Self {
            username,
            password,
            email,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), ClientError> {
        let email = email.into();
        validate_email(&email)?;
        self.email = email;
        Ok(())
    }
}

impl User for Client {
    fn username(&self) -> &str {
        &self.username
    }

    fn verify_password(&self, input: &str) -> bool {
        self.password == input
    }
}

/// The fixed manager identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manager;

impl User for Manager {
    fn username(&self) -> &str {
        MANAGER_USERNAME
    }

    fn verify_password(&self, input: &str) -> bool {
        input == MANAGER_PASSWORD
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    Client(Client),
    Manager(Manager),
}

impl Account {
    pub fn is_manager(&self) -> bool {
        matches!(self, Account::Manager(_))
    }

    /// View shown right after logging in.
    pub fn landing_view(&self) -> View {
        match self {
            Account::Manager(_) => View::ManagerDashboard,
            Account::Client(_) => View::ClientMovieList,
        }
    }
}

impl User for Account {
    fn username(&self) -> &str {
        match self {
            Account::Client(client) => client.username(),
            Account::Manager(manager) => manager.username(),
        }
    }

    fn verify_password(&self, input: &str) -> bool {
        match self {
            Account::Client(client) => client.verify_password(input),
            Account::Manager(manager) => manager.verify_password(input),
        }
    }
}
