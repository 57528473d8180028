// Signing up as a client. Field validation only; uniqueness is checked on registration.

use crate::core::account::Client;
use crate::core::decider::DecideError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUp {
    pub username: String,
    pub password: String,
    pub email: String,
}

pub fn decide_sign_up(command: SignUp) -> Result<Client, DecideError> {
    Ok(Client::new(command.username, command.password, command.email)?)
}

#[cfg(test)]
mod sign_up_decide_tests {
    use super::*;
    use crate::core::account::{ClientError, User};
    use rstest::rstest;

    #[rstest]
    fn it_should_decide_to_create_the_client() {
        let client = decide_sign_up(SignUp {
            username: "clara".into(),
            password: "cinema789".into(),
            email: "clara@email.com".into(),
        })
        .unwrap();
        assert_eq!(client.username(), "clara");
    }

    #[rstest]
    fn it_should_surface_the_client_validation_message() {
        let error = decide_sign_up(SignUp {
            username: "clara".into(),
            password: String::new(),
            email: "clara@email.com".into(),
        })
        .unwrap_err();
        assert_eq!(error, DecideError::Client(ClientError::EmptyPassword));
        assert_eq!(error.to_string(), "Password cannot be empty");
    }
}
