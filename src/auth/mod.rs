pub mod flow;
pub mod pkce;
pub mod session;

pub use flow::{await_callback, open_browser, AuthRequest, CallbackParams};
pub use session::{Profile, Session, SessionState, TokenSet};
