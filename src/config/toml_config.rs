use crate::config::{DEFAULT_DECIMALS, DEFAULT_MAX_GROUP_SIZE, MAX_DECIMALS};
use crate::core::detector::DetectorKind;
use crate::core::estimator::{default_workers, DEFAULT_PROGRESS_INTERVAL, DEFAULT_TRIAL_COUNT};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SimError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub simulation: SimulationConfig,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub group_size: Option<usize>,
    pub trial_count: Option<u64>,
    pub max_group_size: Option<usize>,
    pub workers: Option<usize>,
    pub seed: Option<u64>,
    pub detector: Option<DetectorKind>,
    pub progress_interval: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub decimals: Option<u32>,
    pub format: Option<String>,
    pub show_example: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SimError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SimError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BIRTHDAY_SEED})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SimError::ConfigParseError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn max_group_size(&self) -> usize {
        self.simulation
            .max_group_size
            .unwrap_or(DEFAULT_MAX_GROUP_SIZE)
    }

    pub fn decimals(&self) -> u32 {
        self.output
            .as_ref()
            .and_then(|o| o.decimals)
            .unwrap_or(DEFAULT_DECIMALS)
    }

    pub fn output_format(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or("text")
    }

    pub fn is_json_output(&self) -> bool {
        self.output_format() == "json"
    }

    pub fn show_example(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.show_example)
            .unwrap_or(true)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let group_size =
            validation::validate_required_field("simulation.group_size", &self.simulation.group_size)?;
        validation::validate_group_size("simulation.group_size", *group_size, self.max_group_size())?;

        if let Some(trials) = self.simulation.trial_count {
            validation::validate_positive_number("simulation.trial_count", trials, 1)?;
        }

        if let Some(workers) = self.simulation.workers {
            validation::validate_positive_number("simulation.workers", workers as u64, 1)?;
        }

        if let Some(interval) = self.simulation.progress_interval {
            validation::validate_positive_number("simulation.progress_interval", interval, 1)?;
        }

        validation::validate_range("output.decimals", self.decimals(), 0, MAX_DECIMALS)?;
        validation::validate_one_of("output.format", self.output_format(), &OUTPUT_FORMATS)?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn group_size(&self) -> usize {
        self.simulation.group_size.unwrap_or_default()
    }

    fn trial_count(&self) -> u64 {
        self.simulation.trial_count.unwrap_or(DEFAULT_TRIAL_COUNT)
    }

    fn workers(&self) -> usize {
        self.simulation.workers.unwrap_or_else(default_workers)
    }

    fn seed(&self) -> Option<u64> {
        self.simulation.seed
    }

    fn detector(&self) -> DetectorKind {
        self.simulation.detector.unwrap_or_default()
    }

    fn progress_interval(&self) -> u64 {
        self.simulation
            .progress_interval
            .unwrap_or(DEFAULT_PROGRESS_INTERVAL)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
