//! Access token lifecycle
//!
//! Obtains a token through the browser-mediated authorization flow and
//! persists it for later commands.

mod commands;
mod flow;
mod store;

pub use commands::{load_credential, run_authorize_command};
pub use flow::{AuthFlow, AuthOutcome, AuthSettings, AuthState};
pub use store::{Credential, TokenStore};
