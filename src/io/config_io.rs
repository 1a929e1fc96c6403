use std::fs;
use std::path::Path;

use crate::model::config::AppConfig;

/// Read config.toml from the data directory. Missing or malformed config
/// falls back to defaults — cosmetic overrides are never worth a startup
/// failure.
pub fn read_config(data_dir: &Path) -> AppConfig {
    let path = data_dir.join("config.toml");
    let Ok(text) = fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    toml::from_str(&text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_default() {
        let dir = TempDir::new().unwrap();
        let config = read_config(dir.path());
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn malformed_config_is_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "not toml [[[").unwrap();
        let config = read_config(dir.path());
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn reads_color_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[ui.colors]\nhighlight = \"#112233\"\n",
        )
        .unwrap();
        let config = read_config(dir.path());
        assert_eq!(
            config.ui.colors.get("highlight").map(String::as_str),
            Some("#112233")
        );
    }
}
