use anyhow::Result;
use birthday_paradox::app::report;
use birthday_paradox::utils::validation::Validate;
use birthday_paradox::{ConfigProvider, MonteCarloEstimator, SimulationEngine, TomlConfig};
use tempfile::TempDir;

/// 從 TOML 檔案一路跑到 JSON 報告
#[test]
fn test_toml_config_end_to_end_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("birthday-sim.toml");

    std::fs::write(
        &config_path,
        r#"
[simulation]
group_size = 23
trial_count = 20000
workers = 2
seed = 7
detector = "hash"
progress_interval = 5000

[output]
format = "json"
show_example = true
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let estimator = MonteCarloEstimator::from_config(&config);
    let engine = SimulationEngine::new(estimator, config.seed());
    let report = engine.run(config.group_size(), config.trial_count(), config.show_example())?;

    let rendered = report::render_json(&report)?;
    let value: serde_json::Value = serde_json::from_str(&rendered)?;

    assert_eq!(value["summary"]["group_size"], 23);
    assert_eq!(value["summary"]["trial_count"], 20_000);
    assert_eq!(value["example"]["birthdays"].as_array().map(Vec::len), Some(23));
    let probability = value["summary"]["probability"].as_f64().unwrap_or_default();
    assert!((0.45..=0.55).contains(&probability));

    Ok(())
}

#[test]
fn test_toml_config_text_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("sim.toml");

    std::fs::write(
        &config_path,
        r#"
[simulation]
group_size = 70
trial_count = 2000
seed = 70
detector = "pairwise"

[output]
decimals = 1
show_example = false
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let engine = SimulationEngine::new(MonteCarloEstimator::from_config(&config), config.seed());
    let report = engine.run(config.group_size(), config.trial_count(), config.show_example())?;
    let text = report::render_text(&report, config.decimals());

    assert!(text.starts_with("Out of 2,000 simulations of 70 people"));
    assert!(text.contains("(Exact probability: 99.9 %)"));
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = TomlConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, birthday_paradox::SimError::IoError(_)));
}
