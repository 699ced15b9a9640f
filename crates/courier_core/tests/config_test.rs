use courier_core::{CourierConfig, FetchConfig, PixelDimensions, RowConfig};
use std::io::Write;

#[test]
fn defaults_match_bundled_values() {
    let config = CourierConfig::default();
    assert_eq!(config.fetch.photo_display_size(), PixelDimensions::new(1280, 1280));
    assert!(!*config.fetch.elevated_priority());
    assert_eq!(*config.row.max_collapsed_lines(), 3);
    assert_eq!(*config.row.action_button_width(), 30.0);
    assert_eq!(*config.row.launch_app_extra_height(), 50.0);
    assert!(config.validate().is_ok());
}

#[test]
fn from_file_overrides_fields() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[fetch]\nphoto_display_width = 640\nphoto_display_height = 480\n\n[row]\nmax_collapsed_lines = 5"
    )
    .unwrap();

    let config = CourierConfig::from_file(file.path()).unwrap();
    assert_eq!(config.fetch.photo_display_size(), PixelDimensions::new(640, 480));
    assert_eq!(*config.row.max_collapsed_lines(), 5);
    // Unspecified fields keep their defaults.
    assert_eq!(*config.row.label_spacing(), 4.0);
}

#[test]
fn from_file_rejects_invalid_values() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[fetch]\nphoto_display_width = 0").unwrap();

    assert!(CourierConfig::from_file(file.path()).is_err());
}

#[test]
fn validate_rejects_zero_collapsed_lines() {
    let row = RowConfig::default().with_max_collapsed_lines(0);
    assert!(row.validate().is_err());

    let row = RowConfig::default().with_action_button_width(-1.0);
    assert!(row.validate().is_err());
}

#[test]
fn builder_fills_defaults() {
    let fetch = courier_core::FetchConfigBuilder::default()
        .photo_display_width(800)
        .build()
        .unwrap();
    assert_eq!(fetch.photo_display_size(), PixelDimensions::new(800, 1280));
    assert_eq!(FetchConfig::default().photo_display_size(), PixelDimensions::new(1280, 1280));
}

#[test]
fn telemetry_section_is_optional_and_partial() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[telemetry]\njson_logs = true\nfilter = \"courier_fetch=trace\"").unwrap();

    let config = CourierConfig::from_file(file.path()).unwrap();
    assert!(*config.telemetry.json_logs());
    assert_eq!(config.telemetry.filter().as_deref(), Some("courier_fetch=trace"));
    assert_eq!(config.telemetry.service_name(), "courier");
    assert_eq!(config.row, RowConfig::default());
}

#[test]
fn validation_errors_name_their_section() {
    let err = RowConfig::default()
        .with_max_collapsed_lines(0)
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("Configuration Error in [row]"));

    let err = FetchConfig::default()
        .with_photo_display_height(-5)
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("[fetch]"));
}
