use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources are layered in order, later ones winning:
/// `<CONFIG_DIR>/default`, `<CONFIG_DIR>/<RUN_ENV>` and finally environment
/// variables prefixed with `PREFIX` (default `DRTIME`), using `__` as the
/// section separator, e.g. `DRTIME_BOOKING__TIMEOUT_MS=5000`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "DRTIME".to_string());
    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    load_config_from(&config_dir, &run_env, &prefix)
}

/// Same as [`load_config`] but with every location given explicitly.
pub fn load_config_from(
    config_dir: &Path,
    run_env: &str,
    prefix: &str,
) -> Result<AppConfig, ConfigError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    debug!("config: default_path: {}", default_path.display());
    debug!("config: env_path: {}", env_path.display());

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("calendar.slot_catalog"),
        );

    let app_config: AppConfig = builder.build()?.try_deserialize()?;
    app_config.validate()?;
    Ok(app_config)
}

impl AppConfig {
    /// Rejects settings the calendar cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let calendar = &self.calendar;
        if calendar.availability_window_days == 0 {
            return Err(ConfigError::Message(
                "calendar.availability_window_days must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&calendar.slot_keep_probability) {
            return Err(ConfigError::Message(format!(
                "calendar.slot_keep_probability must be within [0, 1], got {}",
                calendar.slot_keep_probability
            )));
        }
        if calendar.slot_catalog.is_empty() {
            return Err(ConfigError::Message(
                "calendar.slot_catalog must not be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for label in &calendar.slot_catalog {
            if label.trim().is_empty() || !seen.insert(label.as_str()) {
                return Err(ConfigError::Message(format!(
                    "calendar.slot_catalog contains a blank or duplicated label: {label:?}"
                )));
            }
        }
        if self.booking.timeout_ms == 0 {
            return Err(ConfigError::Message(
                "booking.timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// `DOTENV_OVERRIDE` names an alternative file; otherwise a first command line
/// argument starting with `.env` is used, falling back to `.env`. The file is
/// read at most once per process. Returns the path that was considered.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("drtime-config-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let dir = scratch_dir("empty");
        let config = load_config_from(&dir, "debug", "DRTIME_TEST_EMPTY").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.calendar.availability_window_days, 30);
        assert_eq!(config.calendar.slot_catalog.len(), 7);
        assert_eq!(config.notification.dismiss_after_ms, 5000);
    }

    #[test]
    fn test_env_file_overrides_default_file() {
        let dir = scratch_dir("layered");
        fs::write(
            dir.join("default.toml"),
            "[booking]\nsimulated_latency_ms = 500\n[calendar]\nseed = 7\n",
        )
        .unwrap();
        fs::write(dir.join("test.toml"), "[booking]\nsimulated_latency_ms = 10\n").unwrap();

        let config = load_config_from(&dir, "test", "DRTIME_TEST_LAYERED").unwrap();
        assert_eq!(config.booking.simulated_latency_ms, 10);
        assert_eq!(config.calendar.seed, Some(7));
        assert_eq!(config.booking.timeout_ms, 10_000);
    }

    #[test]
    fn test_validate_rejects_bad_probability() {
        let mut config = AppConfig::default();
        config.calendar.slot_keep_probability = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_slots() {
        let mut config = AppConfig::default();
        config.calendar.slot_catalog = vec!["9:00 AM".to_string(), "9:00 AM".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let mut config = AppConfig::default();
        config.calendar.availability_window_days = 0;
        assert!(config.validate().is_err());
    }
}
