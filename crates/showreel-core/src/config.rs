use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::carousel::{SlideGeometry, DESKTOP_BREAKPOINT_PX};
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Slides shown side by side in desktop mode
    #[serde(default = "default_visible_count")]
    pub visible_count: usize,
    /// Indicator dots shown in mobile mode
    #[serde(default = "default_group_count")]
    pub group_count: usize,
    /// Viewport width (px) at which desktop mode starts
    #[serde(default = "default_breakpoint_px")]
    pub breakpoint_px: u32,
    /// Minimum horizontal drag distance (px) before a swipe commits
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: u32,
    /// Pixels represented by one terminal column
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,
    /// Optional catalog file replacing the built-in case studies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_count: default_visible_count(),
            group_count: default_group_count(),
            breakpoint_px: default_breakpoint_px(),
            swipe_threshold_px: default_swipe_threshold_px(),
            cell_width_px: default_cell_width_px(),
            catalog_path: None,
        }
    }
}

impl CarouselConfig {
    /// Build the pagination geometry for a list of `len` slides
    pub fn geometry(&self, len: usize) -> SlideGeometry {
        SlideGeometry::new(len, self.visible_count, self.group_count)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Initial color scheme
    #[serde(default)]
    pub theme: ThemeMode,
    /// Track slide transition
    #[serde(default)]
    pub transition: TransitionConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: ThemeMode::default(),
            transition: TransitionConfig::default(),
        }
    }
}

/// Easing curve applied to the track transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump straight to the target
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Animate the track between positions
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Transition length in milliseconds
    #[serde(default = "default_transition_duration")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Redraw rate while a transition runs
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_transition_duration(),
            easing: EasingType::default(),
            fps: default_fps(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "q", "<C-c>", "<Left>", "<Right>", "<CR>", "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Previous window (desktop only)
    #[serde(default = "default_key_prev_slide")]
    pub prev_slide: String,
    /// Next window (desktop only)
    #[serde(default = "default_key_next_slide")]
    pub next_slide: String,
    /// Switch between light and dark
    #[serde(default = "default_key_toggle_theme")]
    pub toggle_theme: String,
    /// Open the focused case study's download link
    #[serde(default = "default_key_open_link")]
    pub open_link: String,
    /// Show the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            prev_slide: default_key_prev_slide(),
            next_slide: default_key_next_slide(),
            toggle_theme: default_key_toggle_theme(),
            open_link: default_key_open_link(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_prev_slide() -> String { "<Left>".to_string() }
fn default_key_next_slide() -> String { "<Right>".to_string() }
fn default_key_toggle_theme() -> String { "t".to_string() }
fn default_key_open_link() -> String { "o".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("showreel")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_visible_count() -> usize {
    3
}

fn default_group_count() -> usize {
    3
}

fn default_breakpoint_px() -> u32 {
    DESKTOP_BREAKPOINT_PX
}

fn default_swipe_threshold_px() -> u32 {
    10
}

fn default_cell_width_px() -> u32 {
    8 // 768px breakpoint lands on 96 columns
}

fn default_tick_rate() -> u64 {
    100
}

fn default_transition_duration() -> u64 {
    500
}

fn default_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the carousel geometry cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let carousel = &self.carousel;
        if carousel.visible_count == 0 {
            return Err(crate::Error::Config(
                "carousel.visible_count must be at least 1".to_string(),
            ));
        }
        if carousel.group_count == 0 {
            return Err(crate::Error::Config(
                "carousel.group_count must be at least 1".to_string(),
            ));
        }
        if carousel.cell_width_px == 0 {
            return Err(crate::Error::Config(
                "carousel.cell_width_px must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/showreel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("showreel")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("showreel.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the catalog override path (with tilde expansion)
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.carousel.catalog_path.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.carousel.visible_count, 3);
        assert_eq!(config.carousel.group_count, 3);
        assert_eq!(config.carousel.breakpoint_px, 768);
        assert_eq!(config.carousel.swipe_threshold_px, 10);
        assert_eq!(config.ui.transition.duration_ms, 500);
        assert_eq!(config.ui.transition.easing, EasingType::Cubic);
        assert_eq!(config.ui.theme, ThemeMode::Dark);
        assert_eq!(config.keymap.prev_slide, "<Left>");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [carousel]
            visible_count = 2

            [ui]
            theme = "light"

            [ui.transition]
            easing = "ease-out"
            "#,
        )
        .unwrap();

        assert_eq!(config.carousel.visible_count, 2);
        assert_eq!(config.carousel.group_count, 3);
        assert_eq!(config.ui.theme, ThemeMode::Light);
        assert_eq!(config.ui.transition.easing, EasingType::EaseOut);
        assert!(config.ui.transition.enabled);
        assert_eq!(config.keymap.quit, "q");
    }

    #[test]
    fn test_zero_visible_count_rejected() {
        let err = AppConfig::from_toml("[carousel]\nvisible_count = 0\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_zero_group_count_rejected() {
        assert!(AppConfig::from_toml("[carousel]\ngroup_count = 0\n").is_err());
    }

    #[test]
    fn test_geometry_from_config() {
        let geometry = CarouselConfig::default().geometry(7);
        assert_eq!(geometry.len(), 7);
        assert_eq!(geometry.max_desktop_index(), 4);
        assert_eq!(geometry.slides_per_group(), 3);
    }
}
