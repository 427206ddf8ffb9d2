use std::{
    env::VarError,
    net::{Ipv4Addr, SocketAddr},
    str::FromStr,
};

use crate::server::error::config::ConfigError;

pub static DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration read from environment variables.
///
/// Every variable is optional; an unset variable falls back to its default.
///
/// | Variable | Default |
/// |---|---|
/// | `DATABASE_URL` | `sqlite::memory:` |
/// | `BIND_ADDRESS` | `0.0.0.0:8080` |
/// | `SEED_ON_STARTUP` | `true` |
/// | `SEED_RNG` | unset, values are random each run |
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub seed_on_startup: bool,
    pub seed_rng: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var))
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let database_url =
            optional(&lookup, "DATABASE_URL")?.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let bind_address = parse(&lookup, "BIND_ADDRESS")?
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)));
        let seed_on_startup = parse(&lookup, "SEED_ON_STARTUP")?.unwrap_or(true);
        let seed_rng = parse(&lookup, "SEED_RNG")?;

        Ok(Self {
            database_url,
            bind_address,
            seed_on_startup,
            seed_rng,
        })
    }
}

fn optional<F>(lookup: &F, var: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&'static str) -> Result<String, VarError>,
{
    match lookup(var) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(var)),
    }
}

fn parse<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&'static str) -> Result<String, VarError>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional(lookup, var)?
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var,
                    reason: format!("{} ({:?})", e, value),
                })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, env::VarError};

    use super::Config;
    use crate::server::error::config::ConfigError;

    fn lookup(
        vars: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&'static str) -> Result<String, VarError> {
        let vars: HashMap<_, _> = vars.iter().copied().collect();
        move |var| {
            vars.get(var)
                .map(|value| value.to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Expect defaults when no variables are set
    #[test]
    fn uses_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_address.port(), 8080);
        assert!(config.seed_on_startup);
        assert_eq!(config.seed_rng, None);
    }

    /// Expect provided variables to override defaults
    #[test]
    fn reads_provided_values() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite://agape.db?mode=rwc"),
            ("BIND_ADDRESS", "127.0.0.1:3000"),
            ("SEED_ON_STARTUP", "false"),
            ("SEED_RNG", "1234"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite://agape.db?mode=rwc");
        assert_eq!(config.bind_address.port(), 3000);
        assert!(!config.seed_on_startup);
        assert_eq!(config.seed_rng, Some(1234));
    }

    /// Expect an error naming the variable when a value fails to parse
    #[test]
    fn rejects_invalid_values() {
        let result = Config::from_lookup(lookup(&[("SEED_ON_STARTUP", "sometimes")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue {
                var: "SEED_ON_STARTUP",
                ..
            })
        ));
    }
}
