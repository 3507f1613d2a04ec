use config::{Config, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod env_vars;
pub mod models;

pub use config::ConfigError;
pub use models::*;

/// Loads the layered application configuration.
///
/// Sources, lowest priority first:
/// 1. `config/default.*`
/// 2. `config/{RUN_ENV}.*` (RUN_ENV defaults to `debug`)
/// 3. `{PREFIX}__SECTION__KEY` environment variables (PREFIX defaults to `BOOKING`)
/// 4. flat legacy variables such as `BOOKING_FROM_EMAIL`
///
/// Every file is optional, so an empty environment yields `AppConfig::default()`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env_vars::get_config_prefix();

    let config_dir = config_dir();
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);

    debug!(
        "Loading config from {} (RUN_ENV={}, sender override {} or {})",
        config_dir.display(),
        run_env,
        env_vars::config_path_to_env_var(&prefix, "mail.from_email"),
        env_vars::FROM_EMAIL_ENV
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(&prefix).separator(env_vars::CONFIG_SEPARATOR));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(env_vars::apply_legacy_overrides(raw_config))
}

/// Directory holding the config files: `CONFIG_DIR` if set, otherwise the
/// workspace `config/` directory.
fn config_dir() -> PathBuf {
    if let Ok(dir) = env::var("CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    // crates/booking_config -> workspace root
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(|root| root.join("config"))
        .unwrap_or_else(|| PathBuf::from("config"))
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is `DOTENV_OVERRIDE` if set, otherwise `.env`. Loading happens at
/// most once per process; a missing file is not an error. Returns the path
/// that was (or would have been) loaded.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
