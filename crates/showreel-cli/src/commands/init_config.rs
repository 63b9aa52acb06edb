use std::path::Path;

use anyhow::{bail, Result};

use showreel_core::AppConfig;

/// Write the default configuration to the config path
pub fn run(force: bool) -> Result<()> {
    let path = AppConfig::config_path();
    write_default(&path, force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Never reads the existing file, so a config that fails to load can still
/// be replaced with `force`
fn write_default(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }

    AppConfig::default().save_to(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_force_replaces_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[carousel]\nvisible_count = 0\n").unwrap();

        assert!(write_default(&path, false).is_err());
        write_default(&path, true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let config = AppConfig::from_toml(&content).unwrap();
        assert_eq!(config.carousel.visible_count, 3);
    }

    #[test]
    fn test_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("showreel").join("config.toml");
        write_default(&path, false).unwrap();
        assert!(path.exists());
    }
}
