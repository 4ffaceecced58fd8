//! Authorize command arguments

use clap::Parser;

use crate::config::defaults;

/// Arguments for the 'authorize' command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        rcctl authorize --client-id=MY_CLIENT_ID\n  \
        rcctl authorize -c MY_CLIENT_ID --scope \"order xml_backup\"\n  \
        rcctl authorize -c MY_CLIENT_ID --redirect-uri https://example.com/cb")]
pub struct AuthorizeArgs {
    /// The client id of the app
    #[arg(short = 'c', long)]
    pub client_id: Option<String>,

    /// Redirect uri the client is set up for [default: {API_ENDPOINT}oauth2/auth_code]
    #[arg(short = 'r', long)]
    pub redirect_uri: Option<String>,

    /// Requested scope; single or space separated, e.g. "xml_backup" or "xml_backup order"
    #[arg(short = 'z', long, default_value = defaults::SCOPE)]
    pub scope: String,
}
