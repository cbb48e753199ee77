use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub mail: MailConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Собранный фронтенд (index.html + wasm)
    pub static_dir: String,
}

/// Параметры почтового сервиса (шаблон письма и получатели)
#[derive(Debug, Deserialize, Clone)]
pub struct MailConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_email_1: String,
    pub to_email_2: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    15
}

impl MailConfig {
    pub fn recipients(&self) -> [&str; 2] {
        [self.to_email_1.as_str(), self.to_email_2.as_str()]
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[mail]
endpoint = "https://api.emailjs.com/api/v1.0/email/send"
service_id = "service_jhulacraft"
template_id = "template_inquiry"
public_key = "replace-with-public-key"
to_email_1 = "sales@jhulacraft.com"
to_email_2 = "thejhulacraft@gmail.com"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolve the static directory; relative paths are taken from the
/// executable directory
pub fn resolve_static_dir(config: &Config) -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));
    resolve_relative(&config.server.static_dir, exe_dir.as_deref())
}

fn resolve_relative(raw: &str, base: Option<&Path>) -> PathBuf {
    let path = Path::new(raw);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    match base {
        Some(dir) => dir.join(path),
        // Fallback: relative to current directory
        None => PathBuf::from(raw),
    }
}
