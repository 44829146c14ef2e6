/// Source of the bearer token attached to API requests.
///
/// Read on every request so a token refreshed elsewhere (login page,
/// another tab) is picked up without rebuilding the client.
pub trait TokenProvider {
    fn token(&self) -> Option<String>;
}

/// A fixed token, for tests and embedded deployments.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticToken(pub String);

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        (!self.0.is_empty()).then(|| self.0.clone())
    }
}

/// Reads the token from browser local storage.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStorageToken {
    key: String,
}

pub const DEFAULT_TOKEN_KEY: &str = "token";

impl LocalStorageToken {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalStorageToken {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_KEY)
    }
}

impl TokenProvider for LocalStorageToken {
    fn token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        match storage.get_item(&self.key) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(_) => {
                log::warn!("local storage read of {:?} failed", self.key);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_token() {
        assert_eq!(StaticToken("abc".into()).token().as_deref(), Some("abc"));
        assert_eq!(StaticToken(String::new()).token(), None);
    }
}
