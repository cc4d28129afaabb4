use crate::error::{Context, ErrorKind, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const API_ROOT: &str = "https://discord.com/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub guild_id: String,
    pub emoji_id: String,
    pub token: String,
    pub channel_id: String,
    pub message_id: String,
    pub response_limit: String,
    pub api_version: Option<String>,
    pub timeout_time: Option<u64>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let raw = fs::read(path).context("failed to read config file")?;
        serde_json::from_slice(&raw).context("failed to unmarshal config file")
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("guild_id", &self.guild_id),
            ("emoji_id", &self.emoji_id),
            ("token", &self.token),
            ("channel_id", &self.channel_id),
            ("message_id", &self.message_id),
            ("response_limit", &self.response_limit),
        ];

        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ErrorKind::ValidationError(missing).into())
        }
    }

    pub fn timeout(&self) -> Duration {
        match self.timeout_time {
            Some(secs) if secs > 0 => Duration::from_secs(secs),
            _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref().filter(|v| !v.is_empty())
    }

    pub fn base_url(&self, api_root: &str) -> String {
        match self.api_version() {
            Some(version) => format!("{}/v{}", api_root, version),
            None => api_root.to_string(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("guild_id", &self.guild_id)
            .field("emoji_id", &self.emoji_id)
            .field("token", &"<redacted>")
            .field("channel_id", &self.channel_id)
            .field("message_id", &self.message_id)
            .field("response_limit", &self.response_limit)
            .field("api_version", &self.api_version)
            .field("timeout_time", &self.timeout_time)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn complete() -> Config {
        Config {
            guild_id: "197038439483310086".to_string(),
            emoji_id: "41771983429993937".to_string(),
            token: "secret-token".to_string(),
            channel_id: "197038439483310087".to_string(),
            message_id: "1095735893519589376".to_string(),
            response_limit: "100".to_string(),
            api_version: None,
            timeout_time: None,
        }
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_complete() {
        assert!(complete().validate().is_ok());

        let config = Config {
            api_version: Some("10".to_string()),
            timeout_time: Some(30),
            ..complete()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_each_missing_field() {
        let clears: [(&str, fn(&mut Config)); 6] = [
            ("guild_id", |c| c.guild_id.clear()),
            ("emoji_id", |c| c.emoji_id.clear()),
            ("token", |c| c.token.clear()),
            ("channel_id", |c| c.channel_id.clear()),
            ("message_id", |c| c.message_id.clear()),
            ("response_limit", |c| c.response_limit.clear()),
        ];

        for (name, clear) in clears {
            let mut config = complete();
            clear(&mut config);

            let err = config.validate().unwrap_err();
            match err.kind() {
                ErrorKind::ValidationError(missing) => assert_eq!(missing, &vec![name]),
                other => panic!("expected validation error for {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_validate_default_lists_all_fields() {
        let err = Config::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required config fields: guild_id, emoji_id, token, channel_id, message_id, response_limit"
        );
    }

    #[test]
    fn test_timeout() {
        assert_eq!(complete().timeout(), Duration::from_secs(10));

        let zero = Config {
            timeout_time: Some(0),
            ..complete()
        };
        assert_eq!(zero.timeout(), Duration::from_secs(10));

        let thirty = Config {
            timeout_time: Some(30),
            ..complete()
        };
        assert_eq!(thirty.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_base_url() {
        assert_eq!(complete().base_url(API_ROOT), "https://discord.com/api");

        let empty = Config {
            api_version: Some(String::new()),
            ..complete()
        };
        assert_eq!(empty.base_url(API_ROOT), "https://discord.com/api");

        let v10 = Config {
            api_version: Some("10".to_string()),
            ..complete()
        };
        assert_eq!(v10.base_url(API_ROOT), "https://discord.com/api/v10");
    }

    #[test]
    fn test_load() {
        let file = write_config(
            r#"{
                "guild_id": "1",
                "emoji_id": "2",
                "token": "abc",
                "channel_id": "3",
                "message_id": "4",
                "response_limit": "25",
                "timeout_time": 30
            }"#,
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.guild_id, "1");
        assert_eq!(config.response_limit, "25");
        assert_eq!(config.api_version, None);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_keys_fails_validation() {
        let file = write_config(r#"{"guild_id": "1", "token": "abc"}"#);

        let config = Config::load(file.path()).unwrap();
        let err = config.validate().unwrap_err();
        match err.kind() {
            ErrorKind::ValidationError(missing) => assert_eq!(
                missing,
                &vec!["emoji_id", "channel_id", "message_id", "response_limit"]
            ),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("config.json")).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::IoError(_)));
        assert_eq!(err.context(), ["failed to read config file"]);
    }

    #[test]
    fn test_load_malformed() {
        let file = write_config(r#"{"guild_id": 1"#);
        let err = Config::load(file.path()).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::ParseError(_)));
        assert_eq!(err.context(), ["failed to unmarshal config file"]);
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", complete());
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }
}
