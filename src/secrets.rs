use std::fmt;

use crate::CredentialError;

pub trait SecretsProvider {
    fn get_consumer_key_pair<'a>(&'a self) -> (&'a str, &'a str);

    fn get_token_pair<'a>(&'a self) -> (&'a str, &'a str);
}

/// Consumer key/secret and access token/secret of the authorized account.
///
/// Values are stored as given (no trimming), and never change once built.
#[derive(Clone, PartialEq, Eq)]
pub struct Secrets {
    consumer_key: String,
    consumer_secret: String,
    token: String,
    token_secret: String,
}

impl Secrets {
    /// Constructs the credential set.
    ///
    /// # Errors
    ///
    /// Fails with `CredentialError::Empty` naming the first empty value.
    pub fn new<TKey, TSecret, TToken, TTokenSecret>(
        consumer_key: TKey,
        consumer_secret: TSecret,
        token: TToken,
        token_secret: TTokenSecret,
    ) -> Result<Self, CredentialError>
    where
        TKey: Into<String>,
        TSecret: Into<String>,
        TToken: Into<String>,
        TTokenSecret: Into<String>,
    {
        let secrets = Secrets {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
        };
        for (name, value) in [
            ("consumer_key", &secrets.consumer_key),
            ("consumer_secret", &secrets.consumer_secret),
            ("access_token", &secrets.token),
            ("access_token_secret", &secrets.token_secret),
        ] {
            if value.is_empty() {
                return Err(CredentialError::Empty(name));
            }
        }
        Ok(secrets)
    }
}

impl SecretsProvider for Secrets {
    fn get_consumer_key_pair<'a>(&'a self) -> (&'a str, &'a str) {
        (&self.consumer_key, &self.consumer_secret)
    }

    fn get_token_pair<'a>(&'a self) -> (&'a str, &'a str) {
        (&self.token, &self.token_secret)
    }
}

// secrets stay out of logs
impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token", &self.token)
            .field("token_secret", &"<redacted>")
            .finish()
    }
}
