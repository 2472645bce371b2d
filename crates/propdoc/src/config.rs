//! Layered configuration loading.
//!
//! Priority: environment variables > config file > defaults. Callers such as
//! the CLI apply their own overrides on top of the loaded value.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml},
};

use crate::error::{DocsError, Result};
use crate::options::DocgenOptions;

/// Config file names looked up in the working directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["propdoc.toml", "propdoc.json"];

/// Prefix for environment overrides, e.g. `PROPDOC_OUTPUT_VARIANT=classic`.
pub const ENV_PREFIX: &str = "PROPDOC_";

impl DocgenOptions {
    /// Load options relative to the current directory.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_from(Path::new("."), config_path)
    }

    /// Load options, discovering a config file under `root` unless an
    /// explicit path is given.
    pub fn load_from(root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(DocsError::config(
                        Some(path.to_path_buf()),
                        "config file not found",
                    ));
                }
                Some(path.to_path_buf())
            }
            None => discover(root),
        };

        if let Some(path) = &config_file {
            tracing::debug!(path = %path.display(), "loading configuration file");
            figment = if is_json(path) {
                figment.merge(Json::file(path))
            } else {
                figment.merge(Toml::file(path))
            };
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        figment
            .extract()
            .map_err(|error| DocsError::config(config_file, error.to_string()))
    }
}

fn discover(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{HeritageMode, OutputVariant};

    #[test]
    fn defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let options = DocgenOptions::load_from(dir.path(), None).unwrap();
        assert_eq!(options.heritage_mode, HeritageMode::Resolved);
        assert_eq!(options.output_variant, OutputVariant::Named);
        assert!(options.is_component_marker("React.Component"));
    }

    #[test]
    fn discovers_toml_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("propdoc.toml"),
            "heritage_mode = \"convention\"\noutput_variant = \"classic\"\n",
        )
        .unwrap();

        let options = DocgenOptions::load_from(dir.path(), None).unwrap();
        assert_eq!(options.heritage_mode, HeritageMode::Convention);
        assert_eq!(options.output_variant, OutputVariant::Classic);
        assert_eq!(options.namespace_markers, vec!["React", "Preact"]);
    }

    #[test]
    fn explicit_json_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(
            &path,
            r#"{ "component_markers": ["Widget"], "include_value_sets": true }"#,
        )
        .unwrap();

        let options = DocgenOptions::load_from(dir.path(), Some(&path)).unwrap();
        assert_eq!(options.component_markers, vec!["Widget"]);
        assert!(options.include_value_sets);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let error = DocgenOptions::load_from(dir.path(), Some(&path)).unwrap_err();
        assert!(matches!(error, DocsError::Config { .. }));
    }

    #[test]
    fn invalid_values_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("propdoc.toml"), "heritage_mode = \"guess\"\n").unwrap();
        let error = DocgenOptions::load_from(dir.path(), None).unwrap_err();
        assert!(error.to_string().contains("propdoc.toml"));
    }
}
