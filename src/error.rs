use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Not logged in. Run 'orgadmin login' to authenticate.")]
    LoginRequired,

    #[error("Session expired or rejected by the resource server")]
    Unauthorized,

    #[error("API request failed ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type AdminResult<T> = Result<T, AdminError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AdminResult<T>;
    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> AdminResult<T> {
        self.map_err(|e| AdminError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AdminError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> AdminResult<T> {
        self.ok_or_else(|| AdminError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| AdminError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! admin_error {
    ($error_type:ident, $msg:expr) => {
        AdminError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        AdminError::$error_type(format!($fmt, $($arg)*))
    };
}
