/// Username/password pair that passed login request validation.
///
/// Only constructible through [`Credentials::new`], which rejects empty fields.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    // Accepted but never verified
    _password: String,
}

impl Credentials {
    pub fn new(username: String, password: String) -> crate::error::Result<Self> {
        if username.is_empty() {
            return Err(crate::error::UserDirectoryError::Validation(
                "username is required".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(crate::error::UserDirectoryError::Validation(
                "password is required".to_string(),
            ));
        }

        Ok(Self {
            username,
            _password: password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
