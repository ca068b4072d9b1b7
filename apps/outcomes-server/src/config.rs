//! Layered configuration loading using figment.
//!
//! Precedence (highest to lowest):
//! 1. Command-line overrides (`--bind`, `--database-url`, `--seed`)
//! 2. Environment variables (`OUTCOMES_*` prefix, `__` for nesting)
//! 3. YAML file given by `--config`
//! 4. Default values

use crate::cli::Cli;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use outcomes_service::Config;
use thiserror::Error;

/// Env var read by the tracing filter, not part of [`Config`]
pub const LOG_ENV: &str = "OUTCOMES_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// Config file given on the command line does not exist.
    #[error("Configuration file not found: {path}")]
    MissingFile { path: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Figment(Box::new(error))
    }
}

/// Build the figment provider chain for the given arguments.
pub fn figment(cli: &Cli) -> Result<Figment, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(path) = &cli.config {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }
        figment = figment.merge(Yaml::file(path));
    }

    figment = figment.merge(Env::prefixed("OUTCOMES_").split("__").ignore(&["log"]));

    if let Some(bind) = &cli.bind {
        figment = figment.merge(Serialized::default("bind_addr", bind));
    }
    if let Some(url) = &cli.database_url {
        figment = figment.merge(Serialized::default("database_url", url));
    }
    if cli.seed {
        figment = figment.merge(Serialized::default("seed_reference_data", true));
    }

    Ok(figment)
}

/// Load `.env` (if any), then extract the configuration.
pub fn load(cli: &Cli) -> Result<Config, ConfigError> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }
    Ok(figment(cli)?.extract()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::path::PathBuf;

    fn cli(config: Option<&str>) -> Cli {
        Cli {
            config: config.map(PathBuf::from),
            bind: None,
            database_url: None,
            seed: false,
        }
    }

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config: Config = figment(&cli(None)).unwrap().extract()?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn env_overrides_yaml() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "outcomes.yaml",
                r#"
bind_addr: "127.0.0.1:7000"
database_url: "sqlite://from-file.db?mode=rwc"
cors_allowed_origins:
  - "https://ilo.example"
"#,
            )?;
            jail.set_env("OUTCOMES_DATABASE_URL", "sqlite://from-env.db?mode=rwc");
            jail.set_env("OUTCOMES_LOG", "debug");

            let config: Config = figment(&cli(Some("outcomes.yaml"))).unwrap().extract()?;
            assert_eq!(config.bind_addr, "127.0.0.1:7000");
            assert_eq!(config.database_url, "sqlite://from-env.db?mode=rwc");
            assert_eq!(config.cors_allowed_origins, vec!["https://ilo.example"]);
            Ok(())
        });
    }

    #[test]
    fn command_line_wins() {
        Jail::expect_with(|jail| {
            jail.set_env("OUTCOMES_BIND_ADDR", "127.0.0.1:7000");

            let mut args = cli(None);
            args.bind = Some("127.0.0.1:9000".into());
            args.seed = true;

            let config: Config = figment(&args).unwrap().extract()?;
            assert_eq!(config.bind_addr, "127.0.0.1:9000");
            assert!(config.seed_reference_data);
            Ok(())
        });
    }

    #[test]
    fn missing_config_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let err = figment(&cli(Some("nope.yaml"))).unwrap_err();
            assert!(matches!(err, ConfigError::MissingFile { .. }));
            Ok(())
        });
    }

    #[test]
    fn unknown_keys_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("outcomes.yaml", "port: 5000\n")?;
            let result = figment(&cli(Some("outcomes.yaml")))
                .unwrap()
                .extract::<Config>();
            assert!(result.is_err());
            Ok(())
        });
    }
}
