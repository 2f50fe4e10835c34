use derive_getters::Getters;
use std::fmt::{Debug, Formatter};

/// SMTP login, used for PLAIN authentication.
#[derive(Getters, PartialEq, Clone)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    pub fn new(login: String, password: String) -> Self {
        Self { login, password }
    }

    /// Credentials only exist when both login and password are set.
    pub fn from_optional(login: Option<String>, password: Option<String>) -> Option<Self> {
        match (login, password) {
            (Some(login), Some(password)) if !login.is_empty() && !password.is_empty() => {
                Some(Self::new(login, password))
            }
            _ => None,
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SMTP Credentials {{login={}, password=MASKED}}", self.login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[test]
    fn should_mask_password() {
        let credentials = Credentials::new("login".to_owned(), "secret".to_owned());

        let debug = format!("{credentials:?}");

        assert!(debug.contains("login"));
        assert!(!debug.contains("secret"));
    }

    #[parameterized(
        login = {None, Some("login".to_owned()), Some("".to_owned()), Some("login".to_owned())},
        password = {Some("secret".to_owned()), None, Some("secret".to_owned()), Some("".to_owned())}
    )]
    fn should_not_create_incomplete_credentials(login: Option<String>, password: Option<String>) {
        assert_eq!(None, Credentials::from_optional(login, password));
    }

    #[test]
    fn should_create_complete_credentials() {
        let credentials =
            Credentials::from_optional(Some("login".to_owned()), Some("secret".to_owned()));

        assert_eq!(
            Some(Credentials::new("login".to_owned(), "secret".to_owned())),
            credentials
        );
    }
}
