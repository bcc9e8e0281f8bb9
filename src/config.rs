use std::env;
use std::fs;

use serde::Serialize;

use crate::error::AppError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_USER_ID: &str = "john_doe_17091999";
const DEFAULT_EMAIL: &str = "john@xyz.com";
const DEFAULT_ROLL_NUMBER: &str = "ABCD123";

/// Static per-deployment identity echoed in every successful response.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            roll_number: DEFAULT_ROLL_NUMBER.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Settings {
    /// HTTP listening port
    pub port: u16,
    pub identity: Identity,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_port(self.port)?;
        validate_not_blank("user_id", &self.identity.user_id)?;
        validate_not_blank("email", &self.identity.email)?;
        validate_not_blank("roll_number", &self.identity.roll_number)?;
        validate_email(&self.identity.email)?;
        Ok(())
    }
}

fn validate_port(port: u16) -> Result<(), AppError> {
    if port == 0 {
        return Err(AppError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

fn validate_not_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Config(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if !email.contains('@') {
        return Err(AppError::Config(format!("Invalid email address: {email}")));
    }
    Ok(())
}

/// Read a value from environment variable, with support for _FILE suffix (Docker Secrets).
/// Returns `Ok(None)` when neither is set.
fn get_env_or_file(env_name: &str) -> Result<Option<String>, AppError> {
    let file_env = format!("{env_name}_FILE");
    if let Ok(file_path) = env::var(&file_env) {
        return fs::read_to_string(&file_path)
            .map(|content| Some(content.trim().to_string()))
            .map_err(|e| AppError::Config(format!("Failed to read {file_env}: {e}")));
    }

    Ok(env::var(env_name).ok())
}

fn get_port() -> Result<u16, AppError> {
    match env::var("PORT") {
        Ok(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("Invalid PORT '{raw}': {e}"))),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

/// Port the healthcheck subcommand should probe.
pub fn configured_port() -> u16 {
    get_port().unwrap_or(DEFAULT_PORT)
}

pub fn get_configuration() -> Result<Settings, AppError> {
    let port = get_port()?;

    let defaults = Identity::default();
    let identity = Identity {
        user_id: get_env_or_file("BFHL_USER_ID")?.unwrap_or(defaults.user_id),
        email: get_env_or_file("BFHL_EMAIL")?.unwrap_or(defaults.email),
        roll_number: get_env_or_file("BFHL_ROLL_NUMBER")?.unwrap_or(defaults.roll_number),
    };

    let settings = Settings { port, identity };

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const ALL_VARS: [&str; 7] = [
        "PORT",
        "BFHL_USER_ID",
        "BFHL_USER_ID_FILE",
        "BFHL_EMAIL",
        "BFHL_EMAIL_FILE",
        "BFHL_ROLL_NUMBER",
        "BFHL_ROLL_NUMBER_FILE",
    ];

    /// Every config variable unset except the given overrides.
    fn env_with<'a>(overrides: &[(&str, &'a str)]) -> Vec<(&'static str, Option<&'a str>)> {
        ALL_VARS
            .iter()
            .map(|&k| {
                let value = overrides.iter().find(|(o, _)| *o == k).map(|(_, v)| *v);
                (k, value)
            })
            .collect()
    }

    #[test]
    fn test_validate_port_valid() {
        assert!(validate_port(80).is_ok());
        assert!(validate_port(3000).is_ok());
        assert!(validate_port(65535).is_ok());
        assert!(validate_port(1).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let err = validate_port(0).unwrap_err();
        assert!(err.to_string().contains("Port cannot be 0"));
    }

    #[test]
    fn test_settings_validate_success() {
        let settings = Settings {
            port: 3000,
            identity: Identity::default(),
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_validate_blank_user_id_fails() {
        let settings = Settings {
            port: 3000,
            identity: Identity {
                user_id: "   ".into(),
                ..Identity::default()
            },
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("user_id cannot be empty"));
    }

    #[test]
    fn test_settings_validate_bad_email_fails() {
        let settings = Settings {
            port: 3000,
            identity: Identity {
                email: "not-an-email".into(),
                ..Identity::default()
            },
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid email address"));
    }

    #[test]
    fn test_get_configuration_defaults() {
        temp_env::with_vars(env_with(&[]), || {
            let settings = get_configuration().unwrap();
            assert_eq!(settings.port, 3000);
            assert_eq!(settings.identity, Identity::default());
        });
    }

    #[test]
    fn test_get_configuration_from_env() {
        let vars = env_with(&[
            ("PORT", "8081"),
            ("BFHL_USER_ID", "jane_roe_01012000"),
            ("BFHL_EMAIL", "jane@example.com"),
            ("BFHL_ROLL_NUMBER", "XYZ999"),
        ]);
        temp_env::with_vars(vars, || {
            let settings = get_configuration().unwrap();
            assert_eq!(settings.port, 8081);
            assert_eq!(settings.identity.user_id, "jane_roe_01012000");
            assert_eq!(settings.identity.email, "jane@example.com");
            assert_eq!(settings.identity.roll_number, "XYZ999");
        });
    }

    #[test]
    fn test_get_configuration_invalid_port() {
        let vars = env_with(&[("PORT", "not-a-port")]);
        temp_env::with_vars(vars, || {
            let err = get_configuration().unwrap_err();
            assert!(err.to_string().contains("Invalid PORT"));
        });
    }

    #[test]
    fn test_get_configuration_zero_port() {
        let vars = env_with(&[("PORT", "0")]);
        temp_env::with_vars(vars, || {
            assert!(get_configuration().is_err());
        });
    }

    #[test]
    fn test_get_configuration_reads_secret_file() {
        let mut secret = NamedTempFile::new().unwrap();
        writeln!(secret, "ROLL42").unwrap();
        let path = secret.path().to_string_lossy().into_owned();

        let vars = env_with(&[("BFHL_ROLL_NUMBER_FILE", path.as_str())]);
        temp_env::with_vars(vars, || {
            let settings = get_configuration().unwrap();
            assert_eq!(settings.identity.roll_number, "ROLL42");
        });
    }

    #[test]
    fn test_secret_file_takes_precedence_over_env() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("email");
        fs::write(&path, "  secret@example.com \n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let vars = env_with(&[
            ("BFHL_EMAIL", "plain@example.com"),
            ("BFHL_EMAIL_FILE", path.as_str()),
        ]);
        temp_env::with_vars(vars, || {
            let settings = get_configuration().unwrap();
            assert_eq!(settings.identity.email, "secret@example.com");
        });
    }

    #[test]
    fn test_get_configuration_missing_secret_file() {
        let vars = env_with(&[("BFHL_EMAIL_FILE", "/nonexistent/bfhl/email")]);
        temp_env::with_vars(vars, || {
            let err = get_configuration().unwrap_err();
            assert!(err.to_string().contains("Failed to read BFHL_EMAIL_FILE"));
        });
    }
}
