use crate::admin_error;
use crate::error::{AdminError, ErrorContext};

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    let admin_result = result.context("Failed to read config file");
    assert!(admin_result.is_err());

    match admin_result {
        Err(AdminError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected AdminError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Username is required");

    assert!(result.is_err());
    match result {
        Err(AdminError::Unknown(msg)) => {
            assert_eq!(msg, "Username is required");
        }
        _ => panic!("Expected AdminError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied",
    ));

    let admin_result =
        result.with_context(|| format!("Failed to access file at path: {}", "/tmp/test.json"));

    assert!(admin_result.is_err());
    match admin_result {
        Err(AdminError::Unknown(msg)) => {
            assert!(msg.contains("Failed to access file at path: /tmp/test.json"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected AdminError::Unknown"),
    }
}

#[test]
fn test_admin_error_macro() {
    let error = admin_error!(Auth, "state mismatch");
    match error {
        AdminError::Auth(msg) => assert_eq!(msg, "state mismatch"),
        _ => panic!("Expected AdminError::Auth"),
    }

    let error = admin_error!(InvalidInput, "Invalid size: {}", "9000+");
    match error {
        AdminError::InvalidInput(msg) => assert_eq!(msg, "Invalid size: 9000+"),
        _ => panic!("Expected AdminError::InvalidInput"),
    }
}

#[test]
fn test_unauthorized_display() {
    let error = AdminError::Unauthorized;
    assert!(error.to_string().contains("Session expired"));
}

#[test]
fn test_api_error_carries_server_message() {
    let error = AdminError::Api {
        status: 404,
        message: "User not found".to_string(),
    };
    let text = error.to_string();
    assert!(text.contains("404"));
    assert!(text.contains("User not found"));
}
