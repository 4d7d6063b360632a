use anyhow::Context;
use clap::Parser;
use course_registrar::domain::ports::ConfigProvider;
use course_registrar::utils::{logger, validation::Validate};
use course_registrar::{
    CliConfig, Console, EnrollmentStore, LocalStorage, Registrar, RegistrarError, TomlConfig,
};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let toml = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                exit_with_config_error(&e);
            }
        },
        None => None,
    };

    let verbose = cli.verbose || toml.as_ref().is_some_and(TomlConfig::verbose);
    if cli.json_logs || toml.as_ref().is_some_and(TomlConfig::json_logs) {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Command-line validation failed: {}", e);
        exit_with_config_error(&e);
    }
    let provider: &dyn ConfigProvider = match &toml {
        Some(config) => {
            if let Err(e) = config.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                exit_with_config_error(&e);
            }
            config
        }
        None => &cli,
    };
    tracing::debug!(
        "Using data_dir={} file={}",
        provider.data_dir(),
        provider.file_name()
    );

    let storage = LocalStorage::new(provider.data_dir().to_string());
    let mut registrar = Registrar::new(EnrollmentStore::new(storage), provider.file_name());
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    registrar.load_existing(&mut console)?;
    if let Err(e) = registrar.run(&mut console) {
        tracing::error!("Console I/O failed: {}", e);
        return Err(e).context("Menu loop stopped");
    }

    tracing::info!("Exited with {} registrations in memory", registrar.students().len());
    Ok(())
}

fn exit_with_config_error(e: &RegistrarError) -> ! {
    eprintln!("❌ {} {}", e.user_friendly_message(), e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
