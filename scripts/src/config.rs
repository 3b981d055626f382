use envconfig::Envconfig;

#[derive(Envconfig, Clone)]
pub struct AppConfig {
    #[envconfig(default = "local")]
    pub env: String,
    pub db_host: String,
    /// SENSITIVE: SQLCipher key, only used in prod
    pub db_pass_encrypt: String,
}

impl AppConfig {
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }
}
