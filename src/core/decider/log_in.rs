// Resolving login credentials.
//
// Rules
// - The manager identity is checked first.
// - Otherwise the client found under that username must accept the password.

use crate::core::account::{Account, Client, Manager, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogIn {
    pub username: String,
    pub password: String,
}

pub fn decide_log_in(command: &LogIn, registered: Option<Client>) -> Option<Account> {
    let manager = Manager;
    if manager.username() == command.username && manager.verify_password(&command.password) {
        return Some(Account::Manager(manager));
    }
    registered
        .filter(|client| {
            client.username() == command.username && client.verify_password(&command.password)
        })
        .map(Account::Client)
}

#[cfg(test)]
mod log_in_decide_tests {
    use super::*;
    use crate::test_support::fixtures::clients::ClientBuilder;
    use rstest::rstest;

    fn log_in(username: &str, password: &str) -> LogIn {
        LogIn {
            username: username.into(),
            password: password.into(),
        }
    }

    #[rstest]
    fn it_should_recognise_the_manager() {
        let account = decide_log_in(&log_in("admin", "admin123"), None);
        assert_eq!(account, Some(Account::Manager(Manager)));
    }

    #[rstest]
    fn it_should_recognise_a_client() {
        let client = ClientBuilder::new().build();
        let account = decide_log_in(&log_in("alice", "pass123"), Some(client.clone()));
        assert_eq!(account, Some(Account::Client(client)));
    }

    #[rstest]
    #[case("alice", "wrong")]
    #[case("admin", "pass123")]
    fn it_should_reject_wrong_passwords(#[case] username: &str, #[case] password: &str) {
        let client = ClientBuilder::new().build();
        assert_eq!(decide_log_in(&log_in(username, password), Some(client)), None);
    }

    #[rstest]
    fn it_should_reject_unknown_users() {
        assert_eq!(decide_log_in(&log_in("nobody", "pass123"), None), None);
    }
}
