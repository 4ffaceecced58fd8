//! rcctl - main entry point

use clap::Parser;
use log::{debug, error, info};

use rcctl::ui::ConsolePrompter;
use rcctl::{
    load_credential, run_authorize_command, run_list_orders_command, Cli, Command, RcClient,
    TokenStore,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting rcctl v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: {:?}", cli);

    if let Err(e) = run(&cli).await {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("Completed successfully");
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = TokenStore::new();

    match &cli.command {
        Command::Authorize(_) => {
            run_authorize_command(cli, &store, &mut ConsolePrompter)?;
        }
        Command::ListOrders(_) => {
            let credential = load_credential(cli, &store)?;
            let client = RcClient::new(&credential);
            run_list_orders_command(&client, cli).await?;
        }
    }

    Ok(())
}
