//! Authorization command handlers

use clap::CommandFactory;
use log::debug;

use crate::cli::{Cli, Command};
use crate::config::normalize_endpoint;
use crate::error::{RcError, Result};
use crate::ui::Prompter;

use super::flow::{AuthFlow, AuthOutcome, AuthSettings};
use super::store::{Credential, TokenStore};

/// Run the authorize command
pub fn run_authorize_command(
    cli: &Cli,
    store: &TokenStore,
    prompter: &mut dyn Prompter,
) -> Result<AuthOutcome> {
    let Command::Authorize(args) = &cli.command else {
        unreachable!()
    };

    let settings = match AuthSettings::from_args(args, &cli.api_endpoint) {
        Ok(settings) => settings,
        Err(e @ RcError::MissingClientId) => {
            if let Err(e) = Cli::command().print_help() {
                debug!("Failed to print usage: {}", e);
            }
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    let mut flow = AuthFlow::new(settings, store);
    let outcome = flow.run(prompter)?;
    debug!("Authorization finished: {:?}", outcome);
    Ok(outcome)
}

/// Load the stored credential for a data command
pub fn load_credential(cli: &Cli, store: &TokenStore) -> Result<Credential> {
    let mut credential = store.load(&normalize_endpoint(&cli.api_endpoint))?;
    credential.api_endpoint = normalize_endpoint(&credential.api_endpoint);
    Ok(credential)
}
