use secrecy::SecretString;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub base_url: String,
    pub token: Option<SecretString>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(base_url: String, token: Option<SecretString>) -> Self {
        Self { base_url, token }
    }
}
