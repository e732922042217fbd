//! Request and response types for the verification API call.

use serde::{Deserialize, Serialize};

/// Body for `POST /verify`, carrying the six concatenated digits.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub code: String,
}

/// Response from the verification endpoint. Only `message` is read; extra
/// fields are ignored and a missing `message` deserializes to empty.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_request_serializes_the_code_field() {
        let request = VerifyRequest {
            code: "123456".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert_eq!(json, r#"{"code":"123456"}"#);
    }

    #[test]
    fn verify_response_reads_the_message_field() {
        let parsed: VerifyResponse =
            serde_json::from_str(r#"{"message":"Success"}"#).expect("Failed to deserialize");
        assert_eq!(parsed.message, "Success");
    }

    #[test]
    fn verify_response_tolerates_missing_and_extra_fields() {
        let parsed: VerifyResponse = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(parsed.message, "");

        let parsed: VerifyResponse = serde_json::from_str(r#"{"message":"nope","attempt":3}"#)
            .expect("Failed to deserialize");
        assert_eq!(parsed.message, "nope");
    }
}
