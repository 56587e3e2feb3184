use super::loader::parse;
use super::template::generate_config;
use super::*;

#[test]
fn default_config_has_expected_values() {
    // Arrange / Act
    let config = Config::default();

    // Assert
    assert_eq!(config.layout.density, 96.0);
    assert_eq!(config.layout.scale_fraction, 0.3);
    assert_eq!(config.modes.frequency_order, FrequencyOrder::Lexicographic);
    assert!(!config.logging.enabled);
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml_str = "[layout]\ndensity = 88.0\n";

    // Act
    let config = parse(toml_str).unwrap();

    // Assert
    assert_eq!(config.layout.density, 88.0);
    assert_eq!(config.layout.box_width, 400.0);
    assert_eq!(config.modes.frequency_order, FrequencyOrder::Lexicographic);
}

#[test]
fn numeric_frequency_order_parses() {
    let config = parse("[modes]\nfrequency_order = \"numeric\"\n").unwrap();

    assert_eq!(config.modes.frequency_order, FrequencyOrder::Numeric);
}

#[test]
fn bounding_box_origin_parses() {
    let config = parse("[layout]\norigin = \"bounding-box\"\n").unwrap();

    assert_eq!(config.layout.origin, Origin::BoundingBox);
}

#[test]
fn unknown_enum_value_is_a_parse_error() {
    assert!(parse("[modes]\nfrequency_order = \"random\"\n").is_err());
}

#[test]
fn validate_clamps_extreme_values() {
    // Arrange
    let mut config = Config {
        layout: LayoutConfig {
            density: -4.0,
            box_width: 0.0,
            scale_fraction: 7.0,
            vertical_margin_fraction: f64::NAN,
            ..Default::default()
        },
        ..Default::default()
    };

    // Act
    config.validate();

    // Assert
    assert_eq!(config.layout.density, 1.0);
    assert_eq!(config.layout.box_width, 1.0);
    assert_eq!(config.layout.scale_fraction, 1.0);
    assert_eq!(config.layout.vertical_margin_fraction, 0.125);
}

#[test]
fn params_carry_every_layout_field() {
    let layout = LayoutConfig {
        density: 88.0,
        origin: Origin::BoundingBox,
        ..Default::default()
    };

    let params = layout.params();

    assert_eq!(params.density, 88.0);
    assert_eq!(params.box_height, 100.0);
    assert_eq!(params.origin, Origin::BoundingBox);
}

#[test]
fn template_parses_to_defaults() {
    // Arrange
    let template = generate_config();

    // Act
    let config = parse(&template).unwrap();

    // Assert
    let defaults = Config::default();
    assert_eq!(config.layout.density, defaults.layout.density);
    assert_eq!(config.layout.box_width, defaults.layout.box_width);
    assert_eq!(config.layout.origin, defaults.layout.origin);
    assert_eq!(config.modes.frequency_order, defaults.modes.frequency_order);
    assert_eq!(config.logging.level, defaults.logging.level);
}
