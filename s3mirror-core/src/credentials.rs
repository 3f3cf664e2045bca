use std::fmt::{Debug, Formatter};

/// Environment variable holding the access key id.
pub const AWS_ACCESS_KEY: &str = "AWS_ACCESS_KEY_ID";
/// Environment variable holding the secret access key.
pub const AWS_SECRET_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// S3 credentials resolved once at startup.
///
/// Missing keys are not an error at this layer, the engine decides whether to
/// fall back to anonymous access.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Credentials {
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
}

impl Credentials {
    #[must_use]
    pub const fn new(access_key_id: Option<String>, secret_access_key: Option<String>) -> Self {
        Self {
            access_key_id,
            secret_access_key,
        }
    }

    /// Both the access key id and the secret key are present.
    #[must_use]
    pub const fn has_keys(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some()
    }

    #[must_use]
    pub fn access_key_id(&self) -> Option<&str> {
        self.access_key_id.as_deref()
    }

    #[must_use]
    pub fn secret_access_key(&self) -> Option<&str> {
        self.secret_access_key.as_deref()
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
