/// Configuration constants for the ReadyCloud API
pub mod api {
    /// Default API base endpoint
    pub const DEFAULT_ENDPOINT: &str = "https://www.readycloud.com/api/v1/";

    /// Template suffix of the authorization page, relative to the endpoint
    pub const AUTHORIZE_PATH: &str = "oauth2/authorize";

    /// Default redirect path, relative to the endpoint
    pub const AUTH_CODE_PATH: &str = "oauth2/auth_code";

    /// Query parameter carrying the access token
    pub const TOKEN_PARAM: &str = "bearer_token";

    /// Response format requested from the API
    pub const RESPONSE_FORMAT: &str = "json";

    /// Envelope key holding the list of returned objects
    pub const OBJECTS_FIELD: &str = "objects";

    /// Envelope key holding an API-reported error
    pub const ERROR_FIELD: &str = "error_message";

    /// Orders resource name
    pub const ORDERS: &str = "order";
}

/// Configuration constants for the credential file
pub mod credentials {
    /// Token file name, relative to the working directory
    pub const FILE_NAME: &str = "access_token.txt";
}

/// Default values for CLI
pub mod defaults {
    /// Default OAuth2 scope requested on authorize
    pub const SCOPE: &str = "order";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

/// Append a trailing slash to an endpoint if it lacks one
pub fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{}/", endpoint)
    }
}
