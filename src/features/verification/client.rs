//! Client wrapper for the verification endpoint.

use crate::{
    app_lib::{AppError, post_json},
    features::verification::types::{VerifyRequest, VerifyResponse},
};

/// Message the server returns when a code is accepted.
const SUCCESS_MESSAGE: &str = "Success";

/// Result of a submission that reached the server and parsed cleanly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The server confirmed the code; the form navigates to the success view.
    Verified,
    /// The response parsed but did not carry the success message; the form
    /// stays put and shows nothing.
    Unconfirmed,
}

/// Submits the collected code and classifies the server's answer.
pub async fn verify_code(request: &VerifyRequest) -> Result<VerifyOutcome, AppError> {
    let response: VerifyResponse = post_json("/verify", request).await?;
    Ok(classify(&response))
}

fn classify(response: &VerifyResponse) -> VerifyOutcome {
    if response.message == SUCCESS_MESSAGE {
        VerifyOutcome::Verified
    } else {
        VerifyOutcome::Unconfirmed
    }
}

#[cfg(test)]
mod tests {
    use super::{VerifyOutcome, classify};
    use crate::features::verification::types::VerifyResponse;

    fn response(message: &str) -> VerifyResponse {
        VerifyResponse {
            message: message.to_string(),
        }
    }

    #[test]
    fn classify_confirms_only_the_exact_success_message() {
        assert_eq!(classify(&response("Success")), VerifyOutcome::Verified);
    }

    #[test]
    fn classify_treats_anything_else_as_unconfirmed() {
        assert_eq!(classify(&response("")), VerifyOutcome::Unconfirmed);
        assert_eq!(classify(&response("success")), VerifyOutcome::Unconfirmed);
        assert_eq!(classify(&response("Failure")), VerifyOutcome::Unconfirmed);
    }
}
