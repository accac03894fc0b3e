//! TOML Configuration File Support
//!
//! Settings for the console, read from
//! `$XDG_CONFIG_HOME/marquee-console/config.toml` (typically
//! `~/.config/marquee-console/config.toml`).
//!
//! # Configuration Priority
//!
//! Highest first:
//! 1. CLI arguments (applied by the caller through [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [marquee]
//! text = "Hello from the marquee"
//! speed_ms = 80
//! start_animating = true
//!
//! [animation]
//! frame_dir = "/usr/share/marquee-console/frames"
//! frame_interval_ms = 100
//! max_frames = 93
//!
//! [glyphs]
//! glyph_dir = "/usr/share/marquee-console/glyphs"
//! ascii_art = false
//!
//! [display]
//! prompt = "marquee> "
//! loop_tick_ms = 10
//! farewell_timeout_ms = 3000
//!
//! [input]
//! history_limit = 100
//!
//! [debug]
//! status_command = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::state::{SharedState, DEFAULT_MARQUEE_TEXT, DEFAULT_SPEED_MS, MIN_SPEED_MS};

/// Environment variable names
pub const ENV_TEXT: &str = "MARQUEE_TEXT";
pub const ENV_SPEED_MS: &str = "MARQUEE_SPEED_MS";
pub const ENV_DATA_DIR: &str = "MARQUEE_DATA_DIR";
pub const ENV_ASCII_ART: &str = "MARQUEE_ASCII_ART";
pub const ENV_FRAME_INTERVAL_MS: &str = "MARQUEE_FRAME_INTERVAL_MS";

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {}: {source}", .path.display())]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where the configuration last changed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    Cli,
    Env,
    File,
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// `[marquee]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeToml {
    /// Initial banner text
    pub text: Option<String>,
    /// Milliseconds between scroll steps
    pub speed_ms: Option<u64>,
    /// Scroll from the first frame
    pub start_animating: Option<bool>,
}

/// `[animation]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationToml {
    pub frame_dir: Option<PathBuf>,
    pub frame_interval_ms: Option<u64>,
    pub max_frames: Option<usize>,
}

/// `[glyphs]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphsToml {
    pub glyph_dir: Option<PathBuf>,
    pub ascii_art: Option<bool>,
}

/// `[display]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayToml {
    pub prompt: Option<String>,
    pub loop_tick_ms: Option<u64>,
    pub farewell_timeout_ms: Option<u64>,
}

/// `[input]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputToml {
    pub history_limit: Option<usize>,
}

/// `[debug]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugToml {
    /// Enable the `status` command
    pub status_command: Option<bool>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeConfigToml {
    pub marquee: MarqueeToml,
    pub animation: AnimationToml,
    pub glyphs: GlyphsToml,
    pub display: DisplayToml,
    pub input: InputToml,
    pub debug: DebugToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved console configuration
///
/// Use [`load_config`] to build one with proper priority handling, then
/// [`ConfigOverrides::apply`] for command-line flags.
#[derive(Clone, Debug)]
pub struct MarqueeConfig {
    /// Initial banner text
    pub text: String,
    /// Initial scroll interval, never below [`MIN_SPEED_MS`]
    pub speed_ms: u64,
    /// Whether the banner scrolls from the start
    pub start_animating: bool,

    /// Directory holding `frame_NN.txt`
    pub frame_dir: PathBuf,
    /// Interval between animation frames
    pub frame_interval: Duration,
    /// Upper bound on frames probed at startup
    pub max_frames: usize,

    /// Directory holding `<C>.txt` glyphs
    pub glyph_dir: PathBuf,
    /// Start in ASCII-art banner mode
    pub ascii_art: bool,

    /// Text shown before the input buffer
    pub prompt: String,
    /// Longest wait between loop cycles
    pub loop_tick: Duration,
    /// How long the farewell screen waits for a key
    pub farewell_timeout: Duration,

    /// Remembered input lines
    pub history_limit: usize,

    /// Enable the `status` command
    pub status_command: bool,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    source: ConfigSource,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_MARQUEE_TEXT.to_string(),
            speed_ms: DEFAULT_SPEED_MS,
            start_animating: false,
            frame_dir: PathBuf::from("assets/frames"),
            frame_interval: Duration::from_millis(100),
            max_frames: 93,
            glyph_dir: PathBuf::from("assets/glyphs"),
            ascii_art: false,
            prompt: "marquee> ".to_string(),
            loop_tick: Duration::from_millis(10),
            farewell_timeout: Duration::from_secs(3),
            history_limit: DEFAULT_HISTORY_LIMIT,
            status_command: cfg!(debug_assertions),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl MarqueeConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the configuration last changed
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Point both asset directories under one data directory
    pub fn set_data_dir(&mut self, dir: &Path) {
        self.frame_dir = dir.join("frames");
        self.glyph_dir = dir.join("glyphs");
    }

    /// Clamp the speed floor and reject zero intervals
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a zero frame interval,
    /// loop tick or history limit.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.speed_ms < MIN_SPEED_MS {
            tracing::warn!(
                speed_ms = self.speed_ms,
                min = MIN_SPEED_MS,
                "Marquee speed below minimum, clamping"
            );
            self.speed_ms = MIN_SPEED_MS;
        }
        if self.frame_interval.is_zero() {
            return Err(ConfigError::ValidationError(
                "frame_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.loop_tick.is_zero() {
            return Err(ConfigError::ValidationError(
                "loop_tick_ms must be greater than zero".to_string(),
            ));
        }
        if self.history_limit == 0 {
            return Err(ConfigError::ValidationError(
                "history_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Initial shared state described by this configuration
    pub fn initial_state(&self) -> SharedState {
        let mut state = SharedState::new(self.text.clone());
        state.set_speed_ms(self.speed_ms);
        state.animating = self.start_animating;
        state.ascii_art = self.ascii_art;
        state
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/marquee-console/config.toml`, or `None` when no
/// configuration directory is known.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("marquee-console").join("config.toml"))
}

/// Load configuration from the default path and the process environment
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed,
/// or if the resulting values are invalid. A missing file is not an error.
pub fn load_config() -> Result<MarqueeConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path and the process environment
///
/// # Errors
///
/// See [`load_config`].
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<MarqueeConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration with an explicit environment lookup
///
/// # Errors
///
/// See [`load_config`].
pub fn load_config_with_env<F>(path: Option<PathBuf>, env: F) -> Result<MarqueeConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = MarqueeConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: MarqueeConfigToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(path = %config_path.display(), "Loaded configuration from file");
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, env);
    config.validate()?;

    Ok(config)
}

fn apply_toml_config(config: &mut MarqueeConfig, toml: &MarqueeConfigToml) {
    if let Some(ref text) = toml.marquee.text {
        config.text = text.clone();
    }
    if let Some(speed) = toml.marquee.speed_ms {
        config.speed_ms = speed;
    }
    if let Some(animating) = toml.marquee.start_animating {
        config.start_animating = animating;
    }

    if let Some(ref dir) = toml.animation.frame_dir {
        config.frame_dir = dir.clone();
    }
    if let Some(ms) = toml.animation.frame_interval_ms {
        config.frame_interval = Duration::from_millis(ms);
    }
    if let Some(max) = toml.animation.max_frames {
        config.max_frames = max;
    }

    if let Some(ref dir) = toml.glyphs.glyph_dir {
        config.glyph_dir = dir.clone();
    }
    if let Some(art) = toml.glyphs.ascii_art {
        config.ascii_art = art;
    }

    if let Some(ref prompt) = toml.display.prompt {
        config.prompt = prompt.clone();
    }
    if let Some(ms) = toml.display.loop_tick_ms {
        config.loop_tick = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.display.farewell_timeout_ms {
        config.farewell_timeout = Duration::from_millis(ms);
    }

    if let Some(limit) = toml.input.history_limit {
        config.history_limit = limit;
    }

    if let Some(enabled) = toml.debug.status_command {
        config.status_command = enabled;
    }
}

fn parse_flag(value: &str) -> bool {
    value != "0" && !value.eq_ignore_ascii_case("false") && !value.eq_ignore_ascii_case("off")
}

fn apply_env_config<F>(config: &mut MarqueeConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(text) = env(ENV_TEXT) {
        config.text = text;
        config.source = ConfigSource::Env;
    }
    if let Some(speed) = env(ENV_SPEED_MS) {
        match speed.parse::<u64>() {
            Ok(ms) => {
                config.speed_ms = ms;
                config.source = ConfigSource::Env;
            }
            Err(_) => tracing::warn!(value = %speed, "Ignoring invalid {ENV_SPEED_MS}"),
        }
    }
    if let Some(dir) = env(ENV_DATA_DIR) {
        config.set_data_dir(Path::new(&dir));
        config.source = ConfigSource::Env;
    }
    if let Some(art) = env(ENV_ASCII_ART) {
        config.ascii_art = parse_flag(&art);
        config.source = ConfigSource::Env;
    }
    if let Some(interval) = env(ENV_FRAME_INTERVAL_MS) {
        match interval.parse::<u64>() {
            Ok(ms) => {
                config.frame_interval = Duration::from_millis(ms);
                config.source = ConfigSource::Env;
            }
            Err(_) => tracing::warn!(value = %interval, "Ignoring invalid {ENV_FRAME_INTERVAL_MS}"),
        }
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Command-line overrides, applied after [`load_config`]
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub text: Option<String>,
    pub speed_ms: Option<u64>,
    pub data_dir: Option<PathBuf>,
    pub ascii_art: Option<bool>,
}

impl ConfigOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    #[must_use]
    pub fn with_speed_ms(mut self, ms: u64) -> Self {
        self.speed_ms = Some(ms);
        self
    }

    #[must_use]
    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = Some(dir);
        self
    }

    #[must_use]
    pub fn with_ascii_art(mut self, enabled: bool) -> Self {
        self.ascii_art = Some(enabled);
        self
    }

    /// Apply overrides and re-validate
    ///
    /// # Errors
    ///
    /// See [`MarqueeConfig::validate`].
    pub fn apply(&self, config: &mut MarqueeConfig) -> Result<(), ConfigError> {
        if self.text.is_some()
            || self.speed_ms.is_some()
            || self.data_dir.is_some()
            || self.ascii_art.is_some()
        {
            config.source = ConfigSource::Cli;
        }

        if let Some(ref text) = self.text {
            config.text = text.clone();
        }
        if let Some(ms) = self.speed_ms {
            config.speed_ms = ms;
        }
        if let Some(ref dir) = self.data_dir {
            config.set_data_dir(dir);
        }
        if let Some(enabled) = self.ascii_art {
            config.ascii_art = enabled;
        }

        config.validate()
    }
}

// =============================================================================
// Tests
// =============================================================================
