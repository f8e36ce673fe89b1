use serde::{Deserialize, Serialize};

/// URLs seeded into a fresh profile.
const DEFAULT_AUTO_OPEN_URLS: [&str; 3] = [
    "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
    "tiktok.com",
    "facebook.com",
];

/// Persisted settings record. Values are opaque strings; nothing here
/// validates them as URLs or executable paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub auto_open_urls: Vec<String>,
    #[serde(default)]
    pub allowed_apps: Vec<String>,
}

impl Default for Config {
    /// The record substituted whenever `config.json` is missing or
    /// unparsable. It is returned to the caller, never written back to disk.
    fn default() -> Self {
        Self {
            auto_open_urls: DEFAULT_AUTO_OPEN_URLS
                .iter()
                .map(ToString::to_string)
                .collect(),
            allowed_apps: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn default_has_urls_but_no_apps() {
        let config = Config::default();
        assert!(!config.auto_open_urls.is_empty());
        assert!(config.allowed_apps.is_empty());
    }

    #[test]
    fn missing_fields_parse_as_empty() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.auto_open_urls.is_empty());
        assert!(config.allowed_apps.is_empty());
    }

    #[test]
    fn wire_keys_are_snake_case() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert!(json.get("auto_open_urls").is_some());
        assert!(json.get("allowed_apps").is_some());
    }
}
