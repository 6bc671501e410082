use birthday_paradox::app::report;
use birthday_paradox::utils::{logger, validation::Validate};
use birthday_paradox::{CliConfig, ConfigProvider, MonteCarloEstimator, SimulationEngine};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting birthday-paradox CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let estimator = MonteCarloEstimator::from_config(&config);
    let engine = SimulationEngine::new_with_monitoring(estimator, config.seed(), config.monitor);

    let outcome = engine
        .run(config.group_size(), config.trial_count(), !config.no_example)
        .and_then(|report| {
            if config.json {
                report::render_json(&report)
            } else {
                Ok(report::render_text(&report, config.decimals))
            }
        });

    match outcome {
        Ok(rendered) => print!("{}", rendered),
        Err(e) => {
            tracing::error!(
                "❌ Simulation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
