//! Configuration loading and root folder resolution
//!
//! The root folder holds everything ScentMatch reads at runtime: the
//! catalog database (`scentmatch.db`) and the fragrance image directory
//! (`fragrance_images/`).

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// File name of the catalog database inside the root folder
pub const DATABASE_FILE: &str = "scentmatch.db";

/// Directory of fragrance images inside the root folder
pub const IMAGE_FOLDER: &str = "fragrance_images";

/// Environment variable overriding the root folder
pub const ROOT_ENV_VAR: &str = "SCENTMATCH_ROOT";

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. `SCENTMATCH_ROOT` environment variable
/// 3. TOML config file (`root_folder` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ROOT_ENV_VAR) {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return PathBuf::from(root_folder);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Create the root folder if it does not exist yet
pub fn ensure_root_folder(root: &Path) -> Result<()> {
    std::fs::create_dir_all(root)?;
    Ok(())
}

/// Path of the catalog database inside the root folder
pub fn database_path(root: &Path) -> PathBuf {
    root.join(DATABASE_FILE)
}

/// Path of the fragrance image directory inside the root folder
pub fn image_folder(root: &Path) -> PathBuf {
    root.join(IMAGE_FOLDER)
}

/// Get configuration file path for the platform
fn locate_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/scentmatch/config.toml first, then /etc/scentmatch/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("scentmatch").join("config.toml"));
        let system_config = PathBuf::from("/etc/scentmatch/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        Err(Error::Config("No config file found".to_string()))
    } else {
        let path = dirs::config_dir()
            .map(|d| d.join("scentmatch").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        if path.exists() {
            Ok(path)
        } else {
            Err(Error::Config(format!("Config file not found: {:?}", path)))
        }
    }
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        dirs::data_local_dir()
            .map(|d| d.join("scentmatch"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/scentmatch"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("scentmatch"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/scentmatch"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("scentmatch"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\scentmatch"))
    } else {
        PathBuf::from("./scentmatch_data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_arg_has_highest_priority() {
        let root = resolve_root_folder(Some("/tmp/scentmatch-test"));
        assert_eq!(root, PathBuf::from("/tmp/scentmatch-test"));
    }

    #[test]
    fn test_database_and_image_paths() {
        let root = PathBuf::from("/data/scentmatch");
        assert_eq!(database_path(&root), root.join("scentmatch.db"));
        assert_eq!(image_folder(&root), root.join("fragrance_images"));
    }
}
