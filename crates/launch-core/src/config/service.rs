//! Service settings resolved from the environment descriptor

use crate::config::EnvFile;
use crate::{Error, Result};

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const BACKEND_URL: &str = "BACKEND_URL";
pub const PORT: &str = "PORT";

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_PORT: u16 = 8000;

/// Settings the launcher needs from the service's configuration.
///
/// Lookup order per key: process environment, then the env file, then the
/// default. Empty values count as unset. The API key is carried through
/// untouched and never validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub openai_api_key: Option<String>,
    pub backend_url: String,
    pub port: u16,
}

impl ServiceSettings {
    /// Resolve against `file` and an explicit process-environment lookup.
    pub fn resolve<F>(file: &EnvFile, process_env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| -> Option<String> {
            process_env(key)
                .or_else(|| file.get(key).map(str::to_string))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match lookup(PORT) {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            openai_api_key: lookup(OPENAI_API_KEY),
            backend_url: lookup(BACKEND_URL).unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            port,
        })
    }

    /// Resolve against `file` and the real process environment.
    pub fn from_env(file: &EnvFile) -> Result<Self> {
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Variables exported to the launched service.
    pub fn child_env(&self) -> Vec<(String, String)> {
        vec![
            (PORT.to_string(), self.port.to_string()),
            (BACKEND_URL.to_string(), self.backend_url.clone()),
        ]
    }
}

/// Parse a `PORT` value; `0` is rejected since it would bind a random port
/// the frontend cannot know about.
pub fn parse_port(raw: &str) -> Result<u16> {
    match raw.trim().parse::<u16>() {
        Ok(0) => Err(Error::InvalidPort {
            value: raw.to_string(),
            reason: "port must be between 1 and 65535".to_string(),
        }),
        Ok(port) => Ok(port),
        Err(e) => Err(Error::InvalidPort {
            value: raw.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn no_process_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = ServiceSettings::resolve(&EnvFile::default(), no_process_env).unwrap();
        assert_eq!(
            settings,
            ServiceSettings {
                openai_api_key: None,
                backend_url: "http://localhost:5000".to_string(),
                port: 8000,
            }
        );
    }

    #[test]
    fn test_values_from_file() {
        let file = EnvFile::parse("OPENAI_API_KEY=sk-1\nBACKEND_URL=http://api:5000\nPORT=8081\n");
        let settings = ServiceSettings::resolve(&file, no_process_env).unwrap();
        assert_eq!(settings.openai_api_key.as_deref(), Some("sk-1"));
        assert_eq!(settings.backend_url, "http://api:5000");
        assert_eq!(settings.port, 8081);
    }

    #[test]
    fn test_process_env_wins_over_file() {
        let file = EnvFile::parse("PORT=8081\n");
        let settings = ServiceSettings::resolve(&file, |key| {
            (key == PORT).then(|| "9090".to_string())
        })
        .unwrap();
        assert_eq!(settings.port, 9090);
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let file = EnvFile::parse("OPENAI_API_KEY=\nPORT=\nBACKEND_URL=\n");
        let settings = ServiceSettings::resolve(&file, no_process_env).unwrap();
        assert_eq!(settings.openai_api_key, None);
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.backend_url, DEFAULT_BACKEND_URL);
    }

    #[rstest]
    #[case("eighty")]
    #[case("70000")]
    #[case("-1")]
    #[case("0")]
    fn test_invalid_port(#[case] raw: &str) {
        let err = parse_port(raw).unwrap_err();
        assert!(matches!(err, Error::InvalidPort { .. }));
        assert!(err.to_string().contains(raw));
    }

    #[test]
    fn test_child_env() {
        let settings = ServiceSettings {
            openai_api_key: Some("sk-secret".to_string()),
            backend_url: "http://api:5000".to_string(),
            port: 8000,
        };
        let env = settings.child_env();
        assert_eq!(
            env,
            vec![
                ("PORT".to_string(), "8000".to_string()),
                ("BACKEND_URL".to_string(), "http://api:5000".to_string()),
            ]
        );
    }
}
