#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub acquiring_bank_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8081".to_string()),
            acquiring_bank_base_url: std::env::var("ACQUIRING_BANK_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        }
    }
}
