mod api_client;

pub use api_client::{parse_error_message, ApiClient};
