//! Env parsing, catalogue loading, and constants.

use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::data::Catalogue;
use crate::hover::NavigationKind;

const CATALOGUE_ENV: &str = "SCENE_CATALOGUE";
const ASSET_DIR_ENV: &str = "SCENE_ASSET_DIR";

const DEFAULT_ASSET_DIR: &str = "assets";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalogue {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalogue {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalogue {0} lists no models")]
    Empty(PathBuf),
    #[error("invalid external link {link:?}: {source}")]
    InvalidLink {
        link: String,
        #[source]
        source: url::ParseError,
    },
}

/// Bevy asset root. `SCENE_ASSET_DIR` wins over the default `assets`.
pub fn asset_dir() -> String {
    std::env::var(ASSET_DIR_ENV)
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ASSET_DIR.to_string())
}

/// Returns the catalogue named by `SCENE_CATALOGUE`, or the built-in one when unset.
pub fn catalogue() -> Result<Catalogue, ConfigError> {
    match std::env::var(CATALOGUE_ENV) {
        Ok(path) if !path.trim().is_empty() => load_catalogue(Path::new(&path)),
        _ => Ok(Catalogue::builtin()),
    }
}

/// Reads and validates a JSON catalogue file.
pub fn load_catalogue(path: &Path) -> Result<Catalogue, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalogue = Catalogue::from_json(&json).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if catalogue.is_empty() {
        return Err(ConfigError::Empty(path.to_path_buf()));
    }
    validate_links(&catalogue)?;
    Ok(catalogue)
}

/// External links must be absolute URLs; in-app routes are taken as-is.
pub fn validate_links(catalogue: &Catalogue) -> Result<(), ConfigError> {
    for model in &catalogue.models {
        if NavigationKind::of(&model.link) == NavigationKind::ExternalOpen {
            Url::parse(model.link.trim()).map_err(|source| ConfigError::InvalidLink {
                link: model.link.clone(),
                source,
            })?;
        }
    }
    Ok(())
}
