// File: src/config.rs
// Purpose: Configuration parsing from folio.toml

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Placeholder replaced by the submitter's trimmed name
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FolioConfig {
    #[serde(default)]
    pub form: FormSettings,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub page: PageConfig,
}

/// Contact form behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    /// How long the confirmation banner stays visible
    #[serde(default = "default_success_hide_ms")]
    pub success_hide_ms: u64,

    /// Confirmation text, must contain `{name}`
    #[serde(default = "default_success_template")]
    pub success_template: String,
}

/// Log output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error
    #[serde(default = "default_level")]
    pub level: String,
}

/// Page-level behaviors outside the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Scroll distance in pixels after which the navbar gets `scroll-active`
    #[serde(default = "default_navbar_threshold")]
    pub navbar_scroll_threshold: f64,

    /// Added to the scroll position before picking the active section
    #[serde(default = "default_section_offset")]
    pub section_offset: f64,

    /// Subtracted from an anchor target's top so it clears the sticky navbar
    #[serde(default = "default_anchor_offset")]
    pub anchor_offset: f64,

    /// Elements faded in the first time they scroll into view
    #[serde(default = "default_reveal_selector")]
    pub reveal_selector: String,

    #[serde(default = "default_skip_link_target")]
    pub skip_link_target: String,
}

// Default values
fn default_success_hide_ms() -> u64 {
    5000
}

fn default_success_template() -> String {
    "Thank you {name}! I'll get back to you soon.".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

fn default_navbar_threshold() -> f64 {
    50.0
}

fn default_section_offset() -> f64 {
    100.0
}

fn default_anchor_offset() -> f64 {
    80.0
}

fn default_reveal_selector() -> String {
    ".project-card, .experience-card, .skill-category, .about-content, .resume-card".to_string()
}

fn default_skip_link_target() -> String {
    "#home".to_string()
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            success_hide_ms: default_success_hide_ms(),
            success_template: default_success_template(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: default_navbar_threshold(),
            section_offset: default_section_offset(),
            anchor_offset: default_anchor_offset(),
            reveal_selector: default_reveal_selector(),
            skip_link_target: default_skip_link_target(),
        }
    }
}

impl FormSettings {
    pub fn success_hide_delay(&self) -> Duration {
        Duration::from_millis(self.success_hide_ms)
    }

    /// Confirmation text for a submitter
    pub fn success_message(&self, name: &str) -> String {
        self.success_template.replace(NAME_PLACEHOLDER, name)
    }
}

impl LoggingConfig {
    pub fn max_level(&self) -> Result<tracing::Level> {
        self.level
            .trim()
            .parse::<tracing::Level>()
            .map_err(|_| anyhow::anyhow!("Unknown log level: {:?}", self.level))
    }
}

impl FolioConfig {
    /// Parse configuration from TOML text; empty text gives the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FolioConfig =
            toml::from_str(content).context("Failed to parse folio configuration")?;
        config.check()?;

        Ok(config)
    }

    /// Load configuration from folio.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))
    }

    fn check(&self) -> Result<()> {
        if !self.form.success_template.contains(NAME_PLACEHOLDER) {
            bail!(
                "form.success_template must contain {}: {:?}",
                NAME_PLACEHOLDER,
                self.form.success_template
            );
        }
        self.logging.max_level()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.form.success_hide_ms, 5000);
        assert_eq!(config.form.success_hide_delay(), Duration::from_secs(5));
        assert_eq!(config.logging.max_level().unwrap(), tracing::Level::INFO);
        assert_eq!(config.page.navbar_scroll_threshold, 50.0);
        assert_eq!(config.page.anchor_offset, 80.0);
        assert!(config.page.reveal_selector.contains(".project-card"));
        assert_eq!(config.page.skip_link_target, "#home");
    }

    #[test]
    fn test_empty_config() {
        let config = FolioConfig::from_toml_str("  \n").unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_success_message() {
        let settings = FormSettings::default();
        assert_eq!(
            settings.success_message("Jane Doe"),
            "Thank you Jane Doe! I'll get back to you soon."
        );
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
            [form]
            success_hide_ms = 1500

            [logging]
            level = "debug"
        "#;
        let config = FolioConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.form.success_hide_ms, 1500);
        assert_eq!(config.form.success_template, default_success_template());
        assert_eq!(config.logging.max_level().unwrap(), tracing::Level::DEBUG);
        assert_eq!(config.page, PageConfig::default());
    }

    #[test]
    fn test_template_without_placeholder_is_rejected() {
        let toml = r#"
            [form]
            success_template = "Thanks!"
        "#;
        let err = FolioConfig::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("{name}"));
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let toml = r#"
            [logging]
            level = "loud"
        "#;
        assert!(FolioConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::load(dir.path().join("folio.toml")).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[page]\nnavbar_scroll_threshold = 80.0\nreveal_selector = \".card\""
        )
        .unwrap();
        let config = FolioConfig::load(file.path()).unwrap();
        assert_eq!(config.page.navbar_scroll_threshold, 80.0);
        assert_eq!(config.page.reveal_selector, ".card");
        assert_eq!(config.page.anchor_offset, 80.0);
    }
}
