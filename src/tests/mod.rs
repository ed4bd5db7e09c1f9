mod client_tests;
mod error_tests;
mod form_tests;
mod model_tests;
mod pkce_tests;
mod search_tests;
mod session_tests;
mod stats_tests;
