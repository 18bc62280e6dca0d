//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use livevue_diagrams::{DiagramError, config::AppConfig};

/// Path probed in the working directory when no explicit file is given.
const LOCAL_CONFIG: &str = "livevue-diagrams/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for DiagramError {
    fn from(err: ConfigError) -> Self {
        DiagramError::Config(err.to_string())
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    /// Given with `--config`; must exist.
    Explicit,
    /// `livevue-diagrams/config.toml` under the working directory.
    Local,
    /// `config.toml` in the platform config directory.
    System,
}

/// A configuration file chosen for loading.
#[derive(Debug, PartialEq, Eq)]
struct Located {
    source: Source,
    path: PathBuf,
}

/// Load the configuration for this run.
///
/// An explicit path always wins. Otherwise the local file, then the
/// platform config directory are tried, and defaults are used when neither
/// exists.
///
/// # Errors
///
/// Returns [`DiagramError::Config`] when the explicit file is missing or the
/// chosen file is not valid TOML, and [`DiagramError::Io`] when it cannot be
/// read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, DiagramError> {
    let system_config = ProjectDirs::from("com", "livevue", "livevue-diagrams")
        .map(|dirs| dirs.config_dir().join("config.toml"));
    if system_config.is_none() {
        debug!("Could not determine platform-specific config directory");
    }

    let explicit_path = explicit_path.map(|path| path.as_ref().to_path_buf());
    match locate(explicit_path, Path::new("."), system_config) {
        Some(located) => {
            info!(
                source:? = located.source,
                path = located.path.display().to_string();
                "Loading configuration"
            );
            read_config(&located.path)
        }
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

/// Pick the file to load, relative to `root` for the local lookup.
fn locate(explicit: Option<PathBuf>, root: &Path, system: Option<PathBuf>) -> Option<Located> {
    if let Some(path) = explicit {
        return Some(Located {
            source: Source::Explicit,
            path,
        });
    }

    let candidates = [
        Some((Source::Local, root.join(LOCAL_CONFIG))),
        system.map(|path| (Source::System, path)),
    ];
    candidates
        .into_iter()
        .flatten()
        .find(|(_, path)| path.is_file())
        .map(|(source, path)| Located { source, path })
}

fn read_config(path: &Path) -> Result<AppConfig, DiagramError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    parse_config(&fs::read_to_string(path)?)
}

fn parse_config(content: &str) -> Result<AppConfig, DiagramError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
            [output]
            svg_dir = "diagrams/svg"

            [style]
            font_size = 14
            "#,
        )
        .unwrap();

        assert_eq!(config.output().svg_dir(), Path::new("diagrams/svg"));
        assert_eq!(config.output().mermaid_dir(), Path::new("mermaid"));
        assert_eq!(config.style().font_size(), 14);
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = parse_config("[layout\nnode_spacing = ").unwrap_err();

        assert!(matches!(err, DiagramError::Config(_)));
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let err = parse_config("[style]\nedge_color = \"not-a-color\"\n").unwrap_err();

        assert!(matches!(err, DiagramError::Config(_)));
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(&path)).unwrap_err();

        assert!(matches!(err, DiagramError::Config(_)));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[layout]\nnode_spacing = 75.0\n").unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.layout().node_spacing(), 75.0);
    }

    #[test]
    fn test_local_file_wins_over_system_file() {
        let root = tempdir().unwrap();
        let local = root.path().join(LOCAL_CONFIG);
        fs::create_dir_all(local.parent().unwrap()).unwrap();
        fs::write(&local, "").unwrap();
        let system = root.path().join("system.toml");
        fs::write(&system, "").unwrap();

        let located = locate(None, root.path(), Some(system.clone())).unwrap();
        assert_eq!(located.source, Source::Local);
        assert_eq!(located.path, local);

        fs::remove_file(&local).unwrap();
        let located = locate(None, root.path(), Some(system.clone())).unwrap();
        assert_eq!(located, Located { source: Source::System, path: system });
    }

    #[test]
    fn test_explicit_path_is_used_even_when_absent() {
        let root = tempdir().unwrap();
        let explicit = root.path().join("missing.toml");

        let located = locate(Some(explicit.clone()), root.path(), None).unwrap();

        assert_eq!(located, Located { source: Source::Explicit, path: explicit });
    }

    #[test]
    fn test_no_candidates_means_defaults() {
        let root = tempdir().unwrap();

        assert!(locate(None, root.path(), Some(root.path().join("absent.toml"))).is_none());
    }
}
