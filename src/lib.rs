//! rcctl - command-line client for the ReadyCloud API
//!
//! Authorizes through the browser, keeps the access token on disk, and
//! lists resource collections as plain text or CSV.
//!
//! # Example
//!
//! ```bash
//! # Obtain and store an access token
//! rcctl authorize --client-id=YOUR_CLIENT_ID
//!
//! # List orders
//! rcctl list_orders
//!
//! # List orders as CSV
//! rcctl list_orders csv > orders.csv
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod rc;
pub mod ui;

pub use auth::{
    load_credential, run_authorize_command, AuthFlow, AuthOutcome, AuthSettings, AuthState,
    Credential, TokenStore,
};
pub use cli::{AuthorizeArgs, Cli, Command, ListOrdersArgs, OutputFormat};
pub use error::{RcError, Result};
pub use output::{output_records, Formatter};
pub use rc::{run_list_orders_command, RcClient, Record};
