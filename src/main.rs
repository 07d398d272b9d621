use clap::Parser;
use discord_ip_lookup::utils::{logger, validation::Validate};
use discord_ip_lookup::{CliConfig, DiscordClient, LookupEngine};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = LookupEngine::new(DiscordClient::from_config(&config));

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    // A non-200 status is already printed by the engine; anything reaching
    // here is a failure the lookup does not handle.
    if let Err(e) = engine.run(&mut input, &mut output).await {
        tracing::error!("Lookup aborted: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }
}
