//! Configuration bootstrap: optional TOML file plus environment overrides.

use std::path::Path;

use em_core::config::AppConfig;

/// Loads `path` if given, otherwise starts from defaults, then applies
/// environment overrides.
pub fn resolve_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    resolve_config_with(path, |key| std::env::var(key).ok())
}

fn resolve_config_with(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => em_infra::load_config(path)?,
        None => AppConfig::default(),
    };
    Ok(config.with_env_overrides(lookup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use em_core::config::app_config::ENV_API_BASE_URL;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_env_override_beats_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[api]\nbase_url = \"http://from-file/api\"\n")
            .unwrap();

        let config = resolve_config_with(Some(file.path()), |key| {
            (key == ENV_API_BASE_URL).then(|| "http://from-env/api".to_string())
        })
        .unwrap();

        assert_eq!(config.api.base_url, "http://from-env/api");
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_config_with(None, |_| None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(resolve_config_with(Some(Path::new("/no/such/config.toml")), |_| None).is_err());
    }
}
