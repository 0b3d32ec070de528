use super::*;
use rust_decimal_macros::dec;

#[test]
fn test_default_thresholds_shape() {
    let thresholds = default_thresholds();

    let labels: Vec<&str> = thresholds.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Excellent", "Normal", "Warning", "Need Attention", "Need Action"]
    );
    assert_eq!(thresholds[0].max_variance, Some(dec!(0)));
    assert_eq!(thresholds[3].max_variance, Some(dec!(30)));
    assert_eq!(thresholds[4].max_variance, None);
}

#[test]
fn test_load_without_sources_uses_defaults() {
    temp_env::with_vars_unset(["PMREPORT__LOG__FILTER", "PMREPORT__LOG__JSON"], || {
        let config = AppConfig::load().unwrap();

        assert_eq!(config.log.filter, "pmreport=info");
        assert!(!config.log.json);
        assert_eq!(config.variance.thresholds, default_thresholds());
    });
}

#[test]
fn test_environment_overrides_log_filter() {
    temp_env::with_var("PMREPORT__LOG__FILTER", Some("pmreport=trace"), || {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.log.filter, "pmreport=trace");
    });
}

#[test]
fn test_missing_settings_file_is_an_error() {
    let result = AppConfig::load_with(Some(Path::new("does/not/exist.toml")));
    assert!(result.is_err());
}

#[test]
fn test_thresholds_from_toml() {
    let config = AppConfig::from_toml_str(
        r##"
        [[variance.thresholds]]
        label = "Green"
        max_variance = 5
        color = "#00ff00"

        [[variance.thresholds]]
        label = "Amber"
        max_variance = 12.5

        [[variance.thresholds]]
        label = "Red"
        color = "#ff0000"
        "##,
    )
    .unwrap();

    let thresholds = &config.variance.thresholds;
    assert_eq!(thresholds.len(), 3);
    assert_eq!(thresholds[0].max_variance, Some(dec!(5)));
    assert_eq!(thresholds[1].max_variance, Some(dec!(12.5)));
    assert_eq!(thresholds[1].color, "#9e9e9e");
    assert_eq!(thresholds[2].max_variance, None);
    assert_eq!(config.log.filter, "pmreport=info");
}

#[test]
fn test_log_section_from_toml() {
    let config = AppConfig::from_toml_str(
        r#"
        [log]
        filter = "pmreport=warn"
        json = true
        "#,
    )
    .unwrap();

    assert_eq!(config.log.filter, "pmreport=warn");
    assert!(config.log.json);
    assert_eq!(config.variance.thresholds.len(), 5);
}

#[test]
fn test_threshold_without_label_rejected() {
    let result = AppConfig::from_toml_str(
        r#"
        [[variance.thresholds]]
        max_variance = 5
        "#,
    );
    assert!(result.is_err());
}
