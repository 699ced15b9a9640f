//! Configuration for fetch dispatch and row layout.
//!
//! Configuration is loaded from TOML with a precedence system:
//! - Bundled defaults (include_str! from courier.toml)
//! - User overrides (~/.config/courier/courier.toml, then ./courier.toml)
//! - Later sources override earlier ones field by field

use crate::PixelDimensions;
use config::{Config, File, FileFormat};
use courier_error::{ConfigError, CourierError, CourierResult};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Settings for the fetch dispatch facade.
///
/// # Example
///
/// ```toml
/// [fetch]
/// photo_display_width = 1280
/// photo_display_height = 1280
/// elevated_priority = false
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
pub struct FetchConfig {
    /// Width of the box photos are displayed in
    #[serde(default = "default_photo_dimension")]
    photo_display_width: i32,

    /// Height of the box photos are displayed in
    #[serde(default = "default_photo_dimension")]
    photo_display_height: i32,

    /// Whether message fetches jump ahead of same-priority fetches
    #[serde(default)]
    elevated_priority: bool,
}

fn default_photo_dimension() -> i32 {
    1280
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            photo_display_width: default_photo_dimension(),
            photo_display_height: default_photo_dimension(),
            elevated_priority: false,
        }
    }
}

impl FetchConfig {
    /// Target size used to pick a photo representation.
    pub fn photo_display_size(&self) -> PixelDimensions {
        PixelDimensions::new(self.photo_display_width, self.photo_display_height)
    }

    /// Validates that the photo display size is positive.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or negative.
    pub fn validate(&self) -> CourierResult<()> {
        if self.photo_display_width <= 0 || self.photo_display_height <= 0 {
            return Err(ConfigError::in_section(
                "fetch",
                format!(
                    "Photo display size must be positive, got {}",
                    self.photo_display_size()
                ),
            )
            .into());
        }
        Ok(())
    }
}

/// Layout metrics for the label/text row.
///
/// All lengths are in points.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
#[serde(default)]
pub struct RowConfig {
    /// Lines shown before the text is cut behind "show more"
    max_collapsed_lines: usize,
    /// Horizontal room reserved for the copy/gift button
    action_button_width: f64,
    /// Height added below the text for the launch-app button
    launch_app_extra_height: f64,
    /// Vertical padding of legacy rows
    legacy_vertical_padding: f64,
    /// Amount subtracted from modern rows' inner vertical insets
    modern_vertical_adjust: f64,
    /// Gap between label and text
    label_spacing: f64,
    /// Top offset of the label when a launch-app button is shown
    launch_app_top: f64,
    /// Left inset of legacy rows
    legacy_inset_left: f64,
    /// Right inset of legacy rows
    legacy_inset_right: f64,
    /// Horizontal margin around modern blocks
    modern_outer_inset: f64,
    /// Widest a modern block may grow
    max_block_width: f64,
    /// Gap between the label and the hide/reveal button
    toggle_spacing: f64,
    /// Extra width of the "show more" button around its text
    more_padding: f64,
    /// Downward nudge of the "show more" button
    more_bottom_offset: f64,
    /// Width of the fade shadow behind "show more"
    shadow_width: f64,
    /// Height of the fade shadow behind "show more"
    shadow_height: f64,
    /// Distance of the shadow's left edge from the right inset
    shadow_right_offset: f64,
    /// Height of the launch-app button
    launch_button_height: f64,
    /// Margin around the launch-app button
    launch_button_margin: f64,
    /// Thickness of the separator line
    border_size: f64,
    /// Side of the square copy, gift and hide/reveal icons
    icon_size: f64,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            max_collapsed_lines: 3,
            action_button_width: 30.0,
            launch_app_extra_height: 50.0,
            legacy_vertical_padding: 20.0,
            modern_vertical_adjust: 4.0,
            label_spacing: 4.0,
            launch_app_top: 8.0,
            legacy_inset_left: 30.0,
            legacy_inset_right: 30.0,
            modern_outer_inset: 20.0,
            max_block_width: 600.0,
            toggle_spacing: 3.0,
            more_padding: 10.0,
            more_bottom_offset: 3.0,
            shadow_width: 120.0,
            shadow_height: 20.0,
            shadow_right_offset: 100.0,
            launch_button_height: 40.0,
            launch_button_margin: 10.0,
            border_size: 1.0,
            icon_size: 20.0,
        }
    }
}

impl RowConfig {
    /// Validates the layout metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if no collapsed line is allowed or a length is negative.
    pub fn validate(&self) -> CourierResult<()> {
        if self.max_collapsed_lines == 0 {
            return Err(
                ConfigError::in_section("row", "max_collapsed_lines must be at least 1").into(),
            );
        }
        let lengths = [
            ("action_button_width", self.action_button_width),
            ("launch_app_extra_height", self.launch_app_extra_height),
            ("legacy_vertical_padding", self.legacy_vertical_padding),
            ("label_spacing", self.label_spacing),
            ("legacy_inset_left", self.legacy_inset_left),
            ("legacy_inset_right", self.legacy_inset_right),
            ("modern_outer_inset", self.modern_outer_inset),
            ("max_block_width", self.max_block_width),
            ("border_size", self.border_size),
            ("icon_size", self.icon_size),
        ];
        if let Some((name, value)) = lengths.iter().find(|(_, v)| *v < 0.0 || !v.is_finite()) {
            return Err(ConfigError::in_section(
                "row",
                format!("{} must be a non-negative length, got {}", name, value),
            )
            .into());
        }
        Ok(())
    }
}

/// Logging and span export settings.
///
/// # Example
///
/// ```toml
/// [telemetry]
/// service_name = "courier"
/// filter = "courier_fetch=debug"
/// json_logs = false
/// export_spans = true
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct TelemetryConfig {
    /// Service name attached to exported spans
    service_name: String,
    /// Filter directives; `RUST_LOG` is used when unset
    filter: Option<String>,
    /// Emit log lines as JSON
    json_logs: bool,
    /// Export spans to stdout through OpenTelemetry
    export_spans: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "courier".to_string(),
            filter: None,
            json_logs: false,
            export_spans: true,
        }
    }
}

impl TelemetryConfig {
    /// Validates that spans have a service name.
    ///
    /// # Errors
    ///
    /// Returns an error if the service name is blank.
    pub fn validate(&self) -> CourierResult<()> {
        if self.service_name.trim().is_empty() {
            return Err(
                ConfigError::in_section("telemetry", "service_name must not be empty").into(),
            );
        }
        Ok(())
    }
}

/// Top-level Courier configuration.
///
/// # Example
///
/// ```no_run
/// use courier_core::CourierConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CourierConfig::load()?;
/// println!("Photo target: {}", config.fetch.photo_display_size());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CourierConfig {
    /// Fetch dispatch settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Row layout metrics
    #[serde(default)]
    pub row: RowConfig,

    /// Logging and span export
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl CourierConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> CourierResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                CourierError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CourierError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the merged
    /// configuration fails validation.
    #[instrument]
    pub fn load() -> CourierResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../courier.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/courier/courier.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("courier").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                CourierError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CourierError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> CourierResult<()> {
        self.fetch.validate()?;
        self.row.validate()?;
        self.telemetry.validate()
    }
}
