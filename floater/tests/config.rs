use floater::prelude::*;

#[test]
fn test_defaults() {
    let config = OverlayConfig::default();
    assert_eq!(config.placement, Placement::BottomStart);
    assert_eq!(config.offset, 8.0);
    assert!(!config.match_width);
    assert_eq!(config.padding, 8.0);
    assert_eq!(config.strategy, Strategy::Absolute);
    assert_eq!(config.portal_target, "body");
    assert!(config.close_on_escape);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(OverlayConfig::from_toml_str("").unwrap(), OverlayConfig::default());
}

#[test]
fn test_partial_toml() {
    let config = OverlayConfig::from_toml_str(
        r##"
placement = "top-end"
match_width = true
strategy = "fixed"
portal_target = "#menus"
"##,
    )
    .unwrap();

    assert_eq!(config.placement, Placement::TopEnd);
    assert!(config.match_width);
    assert_eq!(config.strategy, Strategy::Fixed);
    assert_eq!(config.portal_target, "#menus");
    assert_eq!(config.offset, 8.0);
}

#[test]
fn test_unknown_placement_is_rejected() {
    let err = OverlayConfig::from_toml_str(r#"placement = "middle""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_unknown_strategy_is_rejected() {
    let err = OverlayConfig::from_toml_str(r#"strategy = "sticky""#).unwrap_err();
    assert!(err.to_string().contains("unknown strategy 'sticky'"));
}

#[test]
fn test_round_trip_through_toml() {
    let config = OverlayConfig {
        placement: Placement::Left,
        offset: 4.0,
        ..OverlayConfig::default()
    };
    let text = toml::to_string(&config).unwrap();
    assert_eq!(OverlayConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_position_options_from_config() {
    let config = OverlayConfig {
        placement: Placement::RightEnd,
        offset: 2.0,
        padding: 12.0,
        match_width: true,
        ..OverlayConfig::default()
    };
    let options = config.position_options();
    assert_eq!(options.placement, Placement::RightEnd);
    assert_eq!(options.offset, 2.0);
    assert_eq!(options.padding, 12.0);
    assert!(options.match_width);
    assert!(options.flip);
    assert!(options.shift);
}

#[test]
fn test_props_from_config() {
    let config = OverlayConfig::from_toml_str("offset = 0.0\nclose_on_escape = false").unwrap();
    let props = OverlayProps::from_config(&config, None, true);
    let state = props.state();
    assert_eq!(state.offset, 0.0);
    assert!(state.open);
    assert_eq!(state.anchor, None);
    assert!(!props.close_on_escape);
}
