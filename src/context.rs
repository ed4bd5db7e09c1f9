use crate::client::ApiClient;
use crate::config::load_config;
use crate::error::{AdminError, AdminResult};
use crate::logging::log_info;
use crate::auth::Session;

/// Everything a command handler needs: the resolved session and an API
/// client pointed at the configured resource server. Built once per
/// invocation and passed down by reference.
pub struct AppContext {
    pub session: Session,
    pub client: ApiClient,
}

impl AppContext {
    pub fn load() -> Self {
        let config = load_config();
        let client = ApiClient::new(config.resource_server_url());
        let session = Session::load(config);

        Self { session, client }
    }

    pub fn token(&self) -> AdminResult<String> {
        self.session.access_token()
    }

    /// Central 401 handling: a rejected token is dropped immediately so the
    /// next invocation starts anonymous and asks for a login.
    pub fn check(&mut self, err: AdminError) -> AdminError {
        if matches!(err, AdminError::Unauthorized) {
            self.session.clear();
            log_info("Cleared session after 401 from resource server");
        }
        err
    }
}
