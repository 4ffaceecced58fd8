//! ReadyCloud API client module
//!
//! Fetches resource collections and turns their objects into records.

mod client;
pub mod orders;
mod record;

pub use client::RcClient;
pub use orders::{run_list_orders_command, ORDER_FIELDS, ORDER_LABEL};
pub use record::{cell_value, display_value, Record};
