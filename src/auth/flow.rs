//! Browser-mediated authorization flow

use log::{debug, info};

use crate::cli::AuthorizeArgs;
use crate::config::{api, normalize_endpoint};
use crate::error::{RcError, Result};
use crate::ui::Prompter;

use super::store::{Credential, TokenStore};

/// Where the flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No token stored yet
    NeedsAuth,
    /// A token is stored; replacing it needs confirmation
    HasAuth,
    /// Waiting for the operator to paste a code
    Authorizing,
    /// Finished, with or without a new token
    Complete,
}

/// How a finished flow ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// New token stored
    Saved(Credential),
    /// Operator kept the existing token
    Declined,
    /// Operator pasted nothing; store untouched
    NoCode,
}

/// Inputs to the authorization URL
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub client_id: String,
    pub api_endpoint: String,
    pub redirect_uri: Option<String>,
    pub scope: String,
}

impl AuthSettings {
    /// Build settings from CLI arguments; a client id is required
    pub fn from_args(args: &AuthorizeArgs, api_endpoint: &str) -> Result<Self> {
        let client_id = args
            .client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(RcError::MissingClientId)?;

        Ok(Self {
            client_id: client_id.to_string(),
            api_endpoint: normalize_endpoint(api_endpoint),
            redirect_uri: args.redirect_uri.clone(),
            scope: args.scope.clone(),
        })
    }

    /// Explicit redirect uri, or `{endpoint}oauth2/auth_code`
    pub fn redirect_uri(&self) -> String {
        match &self.redirect_uri {
            Some(uri) if !uri.is_empty() => uri.clone(),
            _ => format!("{}{}", self.api_endpoint, api::AUTH_CODE_PATH),
        }
    }

    /// Page the operator opens to grant access
    pub fn authorization_url(&self) -> String {
        let mut params = vec![
            ("redirect_uri", self.redirect_uri()),
            ("client_id", self.client_id.clone()),
            ("response_type", "token".to_string()),
        ];
        if !self.scope.trim().is_empty() {
            params.push(("scope", self.scope.trim().to_string()));
        }

        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}{}?{}", self.api_endpoint, api::AUTHORIZE_PATH, query)
    }
}

/// Authorization state machine over a token store
pub struct AuthFlow<'a> {
    settings: AuthSettings,
    store: &'a TokenStore,
    state: AuthState,
}

impl<'a> AuthFlow<'a> {
    pub fn new(settings: AuthSettings, store: &'a TokenStore) -> Self {
        let state = if store.exists() {
            AuthState::HasAuth
        } else {
            AuthState::NeedsAuth
        };
        debug!("Authorization starts in state {:?}", state);
        Self {
            settings,
            store,
            state,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Drive the flow to `Complete`
    pub fn run(&mut self, prompter: &mut dyn Prompter) -> Result<AuthOutcome> {
        loop {
            match self.state {
                AuthState::NeedsAuth => self.state = AuthState::Authorizing,
                AuthState::HasAuth => {
                    prompter.say("You seem to have an access code already.");
                    if prompter.confirm("Would you like to get another one?")? {
                        self.state = AuthState::Authorizing;
                    } else {
                        prompter.say("Exiting.");
                        self.state = AuthState::Complete;
                        return Ok(AuthOutcome::Declined);
                    }
                }
                AuthState::Authorizing => {
                    let outcome = self.authorize(prompter)?;
                    self.state = AuthState::Complete;
                    return Ok(outcome);
                }
                // A completed flow has nothing left to do
                AuthState::Complete => return Ok(AuthOutcome::Declined),
            }
        }
    }

    fn authorize(&self, prompter: &mut dyn Prompter) -> Result<AuthOutcome> {
        let url = self.settings.authorization_url();
        debug!("Authorization URL: {}", url);

        prompter.say(&format!(
            "\nTo authenticate with ReadyCloud and grant {} access to your account,\n\
             follow this link in a web browser:",
            env!("CARGO_PKG_NAME")
        ));
        prompter.say(&format!("\n\t{}", url));
        prompter.say("\nAfter authorizing, please paste the code displayed on the page here.");

        let code = prompter.read_line("Enter code")?;
        let code = code.trim();
        if code.is_empty() {
            info!("No code entered, keeping stored token unchanged");
            return Ok(AuthOutcome::NoCode);
        }

        let credential = Credential {
            access_token: code.to_string(),
            api_endpoint: self.settings.api_endpoint.clone(),
        };
        self.store.save(&credential)?;
        info!("Access token saved to {}", self.store.path().display());
        Ok(AuthOutcome::Saved(credential))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ScriptedPrompter;
    use std::fs;
    use tempfile::TempDir;

    fn settings() -> AuthSettings {
        AuthSettings {
            client_id: "my-client".to_string(),
            api_endpoint: "https://www.readycloud.com/api/v1/".to_string(),
            redirect_uri: None,
            scope: "order".to_string(),
        }
    }

    fn test_store(dir: &TempDir) -> TokenStore {
        TokenStore::with_path(dir.path().join("access_token.txt"))
    }

    fn args(client_id: Option<&str>) -> AuthorizeArgs {
        AuthorizeArgs {
            client_id: client_id.map(String::from),
            redirect_uri: None,
            scope: "order".to_string(),
        }
    }

    #[test]
    fn test_from_args_requires_client_id() {
        assert!(matches!(
            AuthSettings::from_args(&args(None), "https://x/"),
            Err(RcError::MissingClientId)
        ));
        assert!(matches!(
            AuthSettings::from_args(&args(Some("  ")), "https://x/"),
            Err(RcError::MissingClientId)
        ));
    }

    #[test]
    fn test_from_args_normalizes_endpoint() {
        let settings = AuthSettings::from_args(&args(Some("id")), "http://localhost:8000/api/v1")
            .unwrap();
        assert_eq!(settings.api_endpoint, "http://localhost:8000/api/v1/");
        assert_eq!(
            settings.redirect_uri(),
            "http://localhost:8000/api/v1/oauth2/auth_code"
        );
    }

    #[test]
    fn test_authorization_url() {
        assert_eq!(
            settings().authorization_url(),
            "https://www.readycloud.com/api/v1/oauth2/authorize\
             ?redirect_uri=https%3A%2F%2Fwww.readycloud.com%2Fapi%2Fv1%2Foauth2%2Fauth_code\
             &client_id=my-client&response_type=token&scope=order"
        );
    }

    #[test]
    fn test_authorization_url_without_scope() {
        let settings = AuthSettings {
            scope: String::new(),
            redirect_uri: Some("http://localhost/cb".to_string()),
            ..settings()
        };
        let url = settings.authorization_url();
        assert!(url.ends_with("&response_type=token"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%2Fcb"));
        assert!(!url.contains("scope="));
    }

    #[test]
    fn test_authorization_url_multi_scope() {
        let settings = AuthSettings {
            scope: "order xml_backup".to_string(),
            ..settings()
        };
        assert!(settings
            .authorization_url()
            .ends_with("&scope=order%20xml_backup"));
    }

    #[test]
    fn test_needs_auth_saves_pasted_code() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let mut flow = AuthFlow::new(settings(), &store);
        assert_eq!(flow.state(), AuthState::NeedsAuth);

        let mut prompter = ScriptedPrompter::new(&[], &["  pasted-token \n"]);
        let outcome = flow.run(&mut prompter).unwrap();

        assert_eq!(flow.state(), AuthState::Complete);
        let expected = Credential {
            access_token: "pasted-token".to_string(),
            api_endpoint: "https://www.readycloud.com/api/v1/".to_string(),
        };
        assert_eq!(outcome, AuthOutcome::Saved(expected.clone()));
        assert_eq!(store.load("unused").unwrap(), expected);
        assert!(prompter
            .transcript
            .iter()
            .any(|line| line.contains("oauth2/authorize?")));
    }

    #[test]
    fn test_has_auth_declined_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        fs::write(store.path(), "old-token\nhttps://old.example/api/").unwrap();
        let before = fs::read(store.path()).unwrap();

        let mut flow = AuthFlow::new(settings(), &store);
        assert_eq!(flow.state(), AuthState::HasAuth);

        let mut prompter = ScriptedPrompter::new(&[false], &["never-read"]);
        assert_eq!(flow.run(&mut prompter).unwrap(), AuthOutcome::Declined);
        assert_eq!(flow.state(), AuthState::Complete);
        assert_eq!(fs::read(store.path()).unwrap(), before);
        // The code prompt was never reached
        assert_eq!(prompter.lines.len(), 1);
    }

    #[test]
    fn test_has_auth_confirmed_replaces_token() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        fs::write(store.path(), "old-token\nhttps://old.example/api/").unwrap();

        let mut flow = AuthFlow::new(settings(), &store);
        let mut prompter = ScriptedPrompter::new(&[true], &["new-token"]);
        flow.run(&mut prompter).unwrap();

        let cred = store.load("unused").unwrap();
        assert_eq!(cred.access_token, "new-token");
        assert_eq!(cred.api_endpoint, "https://www.readycloud.com/api/v1/");
    }

    #[test]
    fn test_empty_code_saves_nothing() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let mut flow = AuthFlow::new(settings(), &store);
        let mut prompter = ScriptedPrompter::new(&[], &[""]);

        assert_eq!(flow.run(&mut prompter).unwrap(), AuthOutcome::NoCode);
        assert!(!store.exists());
    }

    #[test]
    fn test_completed_flow_does_nothing_more() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let mut flow = AuthFlow::new(settings(), &store);
        flow.run(&mut ScriptedPrompter::new(&[], &["tok"])).unwrap();

        let mut prompter = ScriptedPrompter::new(&[], &[]);
        assert_eq!(flow.run(&mut prompter).unwrap(), AuthOutcome::Declined);
        assert!(prompter.transcript.is_empty());
    }
}
