//! CLI argument parsing

mod authorize;
mod common;

use clap::{Parser, Subcommand};

use crate::config::{api, defaults};

pub use authorize::AuthorizeArgs;
pub use common::OutputFormat;

/// ReadyCloud CLI
#[derive(Parser, Debug)]
#[command(name = "rcctl")]
#[command(version)]
#[command(about = "Authorize against ReadyCloud and list its resources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API endpoint (a stored token keeps the endpoint it was issued for)
    #[arg(
        short = 'a',
        long,
        global = true,
        env = "READYCLOUD_API_ENDPOINT",
        default_value = api::DEFAULT_ENDPOINT
    )]
    pub api_endpoint: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Hide the progress spinner
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Obtain an access token through the browser
    Authorize(AuthorizeArgs),

    /// List orders
    #[command(name = "list_orders", visible_alias = "list-orders")]
    ListOrders(ListOrdersArgs),
}

/// Arguments for the 'list_orders' command
#[derive(Parser, Debug)]
pub struct ListOrdersArgs {
    /// Display format
    #[arg(value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}
