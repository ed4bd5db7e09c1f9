pub const DEFAULT_RESOURCE_SERVER_URL: &str = "http://localhost:9090/api";
pub const DEFAULT_ISSUER_URL: &str = "http://localhost:8080";
pub const DEFAULT_CLIENT_ID: &str = "orgadmin-cli";

// The redirect URI must match the client registration on the authorization
// server, so the port is fixed in config rather than picked at random.
pub const DEFAULT_REDIRECT_PORT: u16 = 5173;
pub const CALLBACK_PATH: &str = "/callback";

pub const OAUTH_SCOPES: &str = "openid profile read";

pub const CONFIG_FILE: &str = ".orgadmin-config.json";
pub const SESSION_FILE: &str = ".orgadmin-session.json";

pub const ENV_TOKEN: &str = "ORGADMIN_TOKEN";
pub const ENV_RESOURCE_URL: &str = "ORGADMIN_RESOURCE_URL";
pub const ENV_ISSUER_URL: &str = "ORGADMIN_ISSUER_URL";

// Endpoint paths on the authorization server (Spring Authorization Server
// defaults).
pub const AUTHORIZE_ENDPOINT: &str = "/oauth2/authorize";
pub const TOKEN_ENDPOINT: &str = "/oauth2/token";
pub const USERINFO_ENDPOINT: &str = "/userinfo";
pub const END_SESSION_ENDPOINT: &str = "/connect/logout";
