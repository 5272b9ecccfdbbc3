use clap::Parser;
use todo::cli::commands::Cli;
use todo::io::config_io;
use todo::logging;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(cli.config.as_deref())?;

    // Command-line flags win over the config file
    let log_file = cli.log_file.as_deref().or(config.log.file.as_deref());
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log.level);
    logging::init_logging(log_file, log_level)?;

    todo::tui::run(&config, !cli.empty)
}
