use birthday_paradox::app::report;
use birthday_paradox::config::toml_config::TomlConfig;
use birthday_paradox::core::analytic::exact_collision_probability;
use birthday_paradox::utils::{logger, validation::Validate};
use birthday_paradox::{ConfigProvider, MonteCarloEstimator, SimulationEngine};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-sim")]
#[command(about = "Birthday paradox simulation driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "birthday-sim.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the seed from config
    #[arg(long)]
    seed: Option<u64>,

    /// Validate and print the configuration without running trials
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based birthday simulation");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 套用命令列覆蓋設定
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
        tracing::info!("🔧 Seed overridden to: {}", seed);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // JSON 輸出時不印摘要，保持 stdout 可被解析
    if args.dry_run || !config.is_json_output() {
        display_config_summary(&config, &args);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no trials will be run");
        println!(
            "Exact probability for {} people: {:.*} %",
            config.group_size(),
            config.decimals() as usize,
            exact_collision_probability(config.group_size()) * 100.0
        );
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let estimator = MonteCarloEstimator::from_config(&config);
    let engine = SimulationEngine::new_with_monitoring(estimator, config.seed(), monitor_enabled);

    let outcome = engine
        .run(config.group_size(), config.trial_count(), config.show_example())
        .and_then(|report| {
            if config.is_json_output() {
                report::render_json(&report)
            } else {
                Ok(report::render_text(&report, config.decimals()))
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
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Group size: {} (max {})",
        config.group_size(),
        config.max_group_size()
    );
    println!("  Trials: {}", config.trial_count());
    println!("  Workers: {}", config.workers());
    println!("  Detector: {}", config.detector());
    match config.seed() {
        Some(seed) => println!("  Seed: {}", seed),
        None => println!("  Seed: from OS entropy"),
    }
    println!("  Progress every: {} trials", config.progress_interval());
    println!("  Output: {} ({} decimals)", config.output_format(), config.decimals());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
