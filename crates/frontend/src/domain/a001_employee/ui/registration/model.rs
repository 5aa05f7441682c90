use contracts::domain::a001_employee::{RegistrationRequest, RegistrationResponse};
use gloo_net::http::Request;

use super::error::SubmitError;
use crate::shared::api_utils::api_url;

/// POST the registration payload
pub async fn register(request: &RegistrationRequest) -> Result<RegistrationResponse, SubmitError> {
    let response = Request::post(&api_url("/register"))
        .json(request)
        .map_err(|e| SubmitError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Failed to read registration response body: {}", e);
            String::new()
        }
    };

    interpret_response(status, &body)
}

/// Map an HTTP status and raw body to the submission outcome
///
/// Any 2xx status is a success even when the body is not parsable; for
/// other statuses the body's `message` is surfaced when present.
pub fn interpret_response(status: u16, body: &str) -> Result<RegistrationResponse, SubmitError> {
    let parsed = serde_json::from_str::<RegistrationResponse>(body).ok();

    if (200..300).contains(&status) {
        return Ok(parsed.unwrap_or_default());
    }

    match parsed
        .map(|r| r.message)
        .filter(|message| !message.trim().is_empty())
    {
        Some(message) => Err(SubmitError::Server { status, message }),
        None => Err(SubmitError::Status { status }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_is_success() {
        let body = r#"{"message":"Employee Jane Doe registered successfully!"}"#;
        let response = interpret_response(201, body).unwrap();
        assert_eq!(response.message, "Employee Jane Doe registered successfully!");
    }

    #[test]
    fn test_ok_with_unparsable_body_is_still_success() {
        assert_eq!(
            interpret_response(200, "<html>ok</html>"),
            Ok(RegistrationResponse::default())
        );
    }

    #[test]
    fn test_server_message_is_surfaced() {
        let err = interpret_response(409, r#"{"message":"Duplicate ID"}"#).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Server {
                status: 409,
                message: "Duplicate ID".into()
            }
        );
        assert_eq!(err.to_string(), "Duplicate ID");
    }

    #[test]
    fn test_generic_fallback_without_message() {
        for body in ["", "Internal Server Error", r#"{"message":"  "}"#] {
            let err = interpret_response(500, body).unwrap_err();
            assert_eq!(err, SubmitError::Status { status: 500 });
            assert_eq!(err.to_string(), "The server returned an error (HTTP 500).");
        }
    }
}
