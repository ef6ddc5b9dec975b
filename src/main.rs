use clap::Parser;
use stargate_cli::{
    app::config::Settings,
    apply::http_client::HttpApplier,
    cli::{self, Cli},
    logging,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments first to get logging flags
    let cli = Cli::parse();

    let guard = logging::init(cli.verbose, cli.log_json);
    tracing::trace!("CLI arguments: {:?}", cli);

    // Set config directory override if --config flag was used
    if let Some(ref config_dir) = cli.config {
        tracing::info!("Using config directory override: {:?}", config_dir);
        stargate_cli::util::paths::set_config_dir_override(Some(config_dir.clone()));
    }

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            cli::error::ERROR
        }
    };

    // Flush buffered log records before exiting
    drop(guard);
    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let settings = Settings::load()?;
    let applier = HttpApplier::new(&settings.server)?;

    let mut out = std::io::stdout();
    let mut err = std::io::stderr();

    Ok(cli::handler::handle_command(cli.command, &applier, &mut out, &mut err).await)
}
