use super::*;

#[test]
fn defaults_match_documented_values() {
    let cfg = BackdropConfig::default();
    assert_eq!(cfg.persistent_back_height, 0.0);
    assert_eq!(cfg.min_front_height, 0.0);
    assert_eq!(cfg.initial_active_layer, Layer::Front);
    assert_eq!(cfg.ease, Ease::AccelerateDecelerate);
    assert!(!cfg.measure_persistent_back);
    assert!(!cfg.override_front_click);
    cfg.validate().unwrap();
}

#[test]
fn empty_json_yields_defaults() {
    let cfg = BackdropConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, BackdropConfig::default());
}

#[test]
fn json_fields_are_applied() {
    let cfg = BackdropConfig::from_json_str(
        r#"{
            "persistent_back_height": 56.0,
            "min_front_height": 100.0,
            "initial_active_layer": "back",
            "ease": "linear"
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.persistent_back_height, 56.0);
    assert_eq!(cfg.min_front_height, 100.0);
    assert_eq!(cfg.initial_active_layer, Layer::Back);
    assert_eq!(cfg.ease, Ease::Linear);
}

#[test]
fn unknown_fields_are_serde_errors() {
    let err = BackdropConfig::from_json_str(r#"{ "layers": 3 }"#).unwrap_err();
    assert!(matches!(err, BackdropError::Serde(_)));
}

#[test]
fn negative_heights_are_configuration_errors() {
    let err = BackdropConfig::from_json_str(r#"{ "min_front_height": -1.0 }"#).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("min_front_height"));

    let cfg = BackdropConfig {
        persistent_back_height: f64::NAN,
        ..BackdropConfig::default()
    };
    assert!(cfg.validate().is_err());
}
