// HTTP response utilities - status checking and typed JSON decoding
use crate::error::{Result, SdcError};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

fn non_empty_str<'a>(body: &'a Value, pointer: &str) -> Option<&'a str> {
    body.pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Human readable message for a failed response, taken from the first of
/// `errors[0].message`, `errors[0].reason` and `message` that is a non-empty
/// string. Each path is looked up independently of the others.
pub fn error_message(status: u16, body: &[u8]) -> String {
    let parsed: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

    ["/errors/0/message", "/errors/0/reason", "/message"]
        .iter()
        .find_map(|pointer| non_empty_str(&parsed, pointer))
        .map(str::to_string)
        .unwrap_or_else(|| format!("status code {}", status))
}

pub fn status_error(status: StatusCode, body: &[u8]) -> SdcError {
    let code = status.as_u16();
    let message = error_message(code, body);

    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => SdcError::Validation {
            status: code,
            message,
        },
        _ => SdcError::Transport {
            status: code,
            message,
        },
    }
}

async fn read_body(response: Response, context: &'static str) -> Result<Vec<u8>> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let error = status_error(status, &body);
        tracing::debug!("{} request failed: {}", context, error);
        return Err(error);
    }
    Ok(body.to_vec())
}

/// Read the body, failing on non-2xx statuses, and decode it as `T`.
pub async fn read_json<T: DeserializeOwned>(
    response: Response,
    context: &'static str,
) -> Result<T> {
    let body = read_body(response, context).await?;
    serde_json::from_slice(&body).map_err(|source| SdcError::Decode { context, source })
}

/// Fail on non-2xx statuses and ignore whatever body a successful response carries.
pub async fn check_status(response: Response, context: &'static str) -> Result<()> {
    read_body(response, context).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_preference_order() {
        let body = br#"{"errors": [{"message": "bad token", "reason": "auth"}], "message": "top"}"#;
        assert_eq!(error_message(401, body), "bad token");

        let body = br#"{"errors": [{"message": "", "reason": "Not Found"}], "message": "top"}"#;
        assert_eq!(error_message(404, body), "Not Found");

        let body = br#"{"errors": [{}], "message": "top level"}"#;
        assert_eq!(error_message(500, body), "top level");

        let body = br#"{"message": "only message"}"#;
        assert_eq!(error_message(500, body), "only message");
    }

    #[test]
    fn test_error_message_ignores_malformed_siblings() {
        let body = br#"{"errors": [{"message": "bad scope", "reason": "Bad Request"}], "message": {"code": 7}}"#;
        assert_eq!(error_message(400, body), "bad scope");

        let body = br#"{"errors": [{"message": 12, "reason": "Conflict"}]}"#;
        assert_eq!(error_message(409, body), "Conflict");

        let body = br#"{"errors": {"message": "not a list"}, "message": "top"}"#;
        assert_eq!(error_message(500, body), "top");

        assert_eq!(error_message(500, br#"{"message": 7}"#), "status code 500");
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(error_message(502, b"<html>Bad Gateway</html>"), "status code 502");
        assert_eq!(error_message(503, b""), "status code 503");
        assert_eq!(error_message(500, br#"{"errors": []}"#), "status code 500");
    }

    #[test]
    fn test_status_error_kinds() {
        assert!(matches!(
            status_error(StatusCode::UNPROCESSABLE_ENTITY, br#"{"message": "items invalid"}"#),
            SdcError::Validation { status: 422, ref message } if message == "items invalid"
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_REQUEST, b""),
            SdcError::Validation { status: 400, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::CONFLICT, b""),
            SdcError::Transport { status: 409, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::MULTIPLE_CHOICES, b""),
            SdcError::Transport { status: 300, .. }
        ));
    }
}
