use camino::Utf8Path;
use config::Config;
use config::ConfigError as ExternalConfigError;
use config::File;
use config::FileFormat;
use directories::ProjectDirs;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Name of the client-side settings section, e.g. in VS Code's
/// `settings.json` or `workspace/didChangeConfiguration`.
pub const SETTINGS_SECTION: &str = "liquidInspector";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration build/deserialize error")]
    Config(#[from] ExternalConfigError),
    #[error("Failed to parse client settings JSON")]
    OverridesParse(#[from] serde_json::Error),
    #[error("Failed to convert client settings to TOML")]
    OverridesSerialize(#[from] toml::ser::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub enabled: bool,
    #[serde(alias = "enableFilterHover")]
    pub enable_filter_hover: bool,
    #[serde(alias = "enableTagHover")]
    pub enable_tag_hover: bool,
    #[serde(alias = "showTypes")]
    pub show_types: bool,
    #[serde(alias = "showDescription")]
    pub show_description: bool,
    #[serde(alias = "showDeprecatedWarnings")]
    pub show_deprecated_warnings: bool,
    /// Parameter tables in both filter and tag panels.
    #[serde(alias = "showFilterParameters")]
    pub show_filter_parameters: bool,
    #[serde(alias = "showFilterExamples")]
    pub show_filter_examples: bool,
    #[serde(alias = "showTagExamples")]
    pub show_tag_examples: bool,
    /// Rows in a variable's "Available Properties" table.
    #[serde(alias = "maxPropertiesInHover")]
    pub max_properties_in_hover: usize,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            enable_filter_hover: true,
            enable_tag_hover: true,
            show_types: true,
            show_description: true,
            show_deprecated_warnings: true,
            show_filter_parameters: true,
            show_filter_examples: true,
            show_tag_examples: true,
            max_properties_in_hover: 25,
            debug: false,
        }
    }
}

impl Settings {
    /// Load settings for `project_root`, layering (later wins) the user config
    /// file, `.lqls.toml`, `lqls.toml`, and finally `overrides` from the client.
    pub fn new(project_root: &Utf8Path, overrides: Option<&Value>) -> Result<Self, ConfigError> {
        let user_config_file = ProjectDirs::from("com.github", "lqls", "lqls")
            .map(|proj_dirs| proj_dirs.config_dir().join("lqls.toml"));

        Self::load_from_paths(
            project_root.as_std_path(),
            user_config_file.as_deref(),
            overrides,
        )
    }

    /// Settings from client overrides alone, on top of the defaults.
    pub fn from_overrides(overrides: &Value) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(source) = overrides_to_toml(overrides)? {
            builder = builder.add_source(File::from_str(&source, FileFormat::Toml));
        }
        Ok(builder.build()?.try_deserialize()?)
    }

    fn load_from_paths(
        project_root: &std::path::Path,
        user_config_path: Option<&std::path::Path>,
        overrides: Option<&Value>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = user_config_path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        for name in [".lqls.toml", "lqls.toml"] {
            builder = builder.add_source(
                File::from(project_root.join(name))
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        if let Some(source) = overrides.map(overrides_to_toml).transpose()?.flatten() {
            builder = builder.add_source(File::from_str(&source, FileFormat::Toml));
        }

        let config = builder.build()?;
        let settings = config.try_deserialize()?;
        Ok(settings)
    }
}

/// Parse a JSON object of client settings, e.g. from the command line.
pub fn parse_overrides(json: &str) -> Result<Value, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Render a client settings object as TOML with snake_case keys.
///
/// Null values are dropped. Anything other than a JSON object is ignored.
fn overrides_to_toml(overrides: &Value) -> Result<Option<String>, ConfigError> {
    let Value::Object(map) = overrides else {
        tracing::warn!("Ignoring client settings that are not an object: {overrides}");
        return Ok(None);
    };

    let table: serde_json::Map<String, Value> = map
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (snake_case(key), value.clone()))
        .collect();

    if table.is_empty() {
        return Ok(None);
    }

    Ok(Some(toml::to_string(&table)?))
}

fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::tempdir;

    use super::*;

    fn load(project_root: &std::path::Path) -> Settings {
        Settings::load_from_paths(project_root, None, None).unwrap()
    }

    mod defaults {
        use super::*;

        #[test]
        fn test_load_no_files() {
            let dir = tempdir().unwrap();
            assert_eq!(load(dir.path()), Settings::default());
        }

        #[test]
        fn test_default_values() {
            let settings = Settings::default();
            assert!(settings.enabled);
            assert!(settings.enable_filter_hover);
            assert_eq!(settings.max_properties_in_hover, 25);
            assert!(!settings.debug);
        }
    }

    mod project_files {
        use super::*;

        #[test]
        fn test_load_lqls_toml_only() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join("lqls.toml"), "show_types = false").unwrap();
            let settings = load(dir.path());
            assert_eq!(
                settings,
                Settings {
                    show_types: false,
                    ..Settings::default()
                }
            );
        }

        #[test]
        fn test_load_dot_lqls_toml_only() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join(".lqls.toml"), "max_properties_in_hover = 5").unwrap();
            assert_eq!(load(dir.path()).max_properties_in_hover, 5);
        }

        #[test]
        fn test_invalid_toml_is_an_error() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join("lqls.toml"), "enabled = [").unwrap();
            let result = Settings::load_from_paths(dir.path(), None, None);
            assert!(matches!(result, Err(ConfigError::Config(_))));
        }
    }

    mod priority {
        use super::*;

        #[test]
        fn test_project_priority_lqls_overrides_dot_lqls() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join(".lqls.toml"), "debug = false").unwrap();
            fs::write(dir.path().join("lqls.toml"), "debug = true").unwrap();
            assert!(load(dir.path()).debug);
        }

        #[test]
        fn test_user_priority_project_overrides_user() {
            let user_dir = tempdir().unwrap();
            let project_dir = tempdir().unwrap();
            let user_conf_path = user_dir.path().join("lqls.toml");
            fs::write(&user_conf_path, "debug = true\nshow_types = false").unwrap();
            fs::write(project_dir.path().join("lqls.toml"), "debug = false").unwrap();

            let settings =
                Settings::load_from_paths(project_dir.path(), Some(&user_conf_path), None)
                    .unwrap();
            assert!(!settings.debug);
            assert!(!settings.show_types);
        }

        #[test]
        fn test_overrides_win_over_files() {
            let dir = tempdir().unwrap();
            fs::write(dir.path().join("lqls.toml"), "enabled = true").unwrap();
            let overrides = json!({ "enabled": false });

            let settings = Settings::load_from_paths(dir.path(), None, Some(&overrides)).unwrap();
            assert!(!settings.enabled);
        }
    }

    mod user_config {
        use super::*;

        #[test]
        fn test_load_user_config_only() {
            let user_dir = tempdir().unwrap();
            let project_dir = tempdir().unwrap();
            let user_conf_path = user_dir.path().join("lqls.toml");
            fs::write(&user_conf_path, "enable_tag_hover = false").unwrap();

            let settings =
                Settings::load_from_paths(project_dir.path(), Some(&user_conf_path), None)
                    .unwrap();
            assert!(!settings.enable_tag_hover);
        }

        #[test]
        fn test_missing_user_config_is_ignored() {
            let project_dir = tempdir().unwrap();
            let missing = project_dir.path().join("missing").join("lqls.toml");
            let settings =
                Settings::load_from_paths(project_dir.path(), Some(&missing), None).unwrap();
            assert_eq!(settings, Settings::default());
        }
    }

    mod overrides {
        use super::*;

        #[test]
        fn test_camel_case_keys() {
            let overrides = json!({
                "enableFilterHover": false,
                "showFilterExamples": false,
                "maxPropertiesInHover": 3,
            });
            let settings = Settings::from_overrides(&overrides).unwrap();
            assert!(!settings.enable_filter_hover);
            assert!(!settings.show_filter_examples);
            assert_eq!(settings.max_properties_in_hover, 3);
            assert!(settings.enabled);
        }

        #[test]
        fn test_null_values_keep_defaults() {
            let overrides = json!({ "showTypes": null, "debug": true });
            let settings = Settings::from_overrides(&overrides).unwrap();
            assert!(settings.show_types);
            assert!(settings.debug);
        }

        #[test]
        fn test_non_object_is_ignored() {
            let settings = Settings::from_overrides(&json!(["enabled"])).unwrap();
            assert_eq!(settings, Settings::default());
        }

        #[test]
        fn test_parse_overrides() {
            let value = parse_overrides(r#"{"showTypes": false}"#).unwrap();
            assert_eq!(value, json!({ "showTypes": false }));
            assert!(matches!(
                parse_overrides("{not json"),
                Err(ConfigError::OverridesParse(_))
            ));
        }

        #[test]
        fn test_snake_case() {
            assert_eq!(snake_case("maxPropertiesInHover"), "max_properties_in_hover");
            assert_eq!(snake_case("enabled"), "enabled");
            assert_eq!(snake_case("show_types"), "show_types");
        }
    }
}
