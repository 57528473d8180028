// Shared test fixture for sign-up input and clients.
// Defaults come from json/client.json; setters override single fields.

use crate::core::account::Client;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (form shape)
#[derive(Debug, Clone, Deserialize)]
pub struct ClientDto {
    pub username: String,
    pub password: String,
    pub email: String,
}

pub struct ClientBuilder {
    inner: ClientDto,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ClientBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/test_support/fixtures/json/client.json").unwrap();
        let inner: ClientDto = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn username(mut self, v: impl Into<String>) -> Self {
        self.inner.username = v.into();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn dto(self) -> ClientDto {
        self.inner
    }

    pub fn build(self) -> Client {
        Client::new(self.inner.username, self.inner.password, self.inner.email).unwrap()
    }
}
