const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Reads the configuration from the environment, falling back to
    /// defaults for anything unset.
    pub fn init() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { port }
    }
}
