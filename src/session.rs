/// Authorization context for operations that require a logged-in user.
///
/// Established at login, dropped at logout or expiry, and passed explicitly
/// to every call that needs it. There is no ambient global session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn bearer_token(&self) -> &str {
        &self.token
    }
}
