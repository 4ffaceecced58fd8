//! Orders command handlers

use log::debug;

use crate::cli::{Cli, Command};
use crate::output::output_records;
use crate::rc::RcClient;
use crate::ui::{create_spinner, finish_spinner};

use super::ORDER_FIELDS;

/// Run the list_orders command
pub async fn run_list_orders_command(
    client: &RcClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::ListOrders(args) = &cli.command else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching orders...", cli.quiet);
    let result = client.fetch_orders(Some(ORDER_FIELDS)).await;
    finish_spinner(spinner);
    let orders = result?;

    debug!("Rendering {} order(s) as {}", orders.len(), args.format);
    output_records(&orders, args.format)?;
    Ok(())
}
