//! API Lambda handler for waiver submissions.
//!
//! One linear pipeline per request: extract the JSON body, validate it,
//! pick the notification recipient, render both emails, send them through
//! the provider concurrently, and map the aggregate outcome to a response.

use super::{helpers, validation};
use crate::clients::{EmailSender, ResendClient};
use crate::core::config::AppConfig;
use crate::core::models::WaiverSubmission;
use crate::email::{render, routing};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

pub use self::function_handler as handler;

pub const MSG_SUBMITTED: &str = "Waiver submitted successfully";
pub const ERR_SIGNATURE_MISMATCH: &str = "Signature must match your full name exactly";
pub const ERR_NOT_CONFIGURED: &str = "Email service not configured. Please contact support.";
pub const ERR_SEND_FAILED: &str = "Failed to send confirmation emails. Please contact support.";
pub const ERR_GENERIC: &str =
    "An error occurred while processing your waiver. Please try again.";

/// Lambda handler for the waiver API entrypoint.
///
/// Reads configuration from the environment on every invocation, answers
/// CORS preflights directly, and hands everything else to the submission
/// pipeline. All failure modes are mapped to a response payload; the
/// returned `Result` is always `Ok`.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env();

    if http_method(&event.payload).eq_ignore_ascii_case("OPTIONS") {
        return Ok(helpers::ok_preflight());
    }

    let client = config.resend_api_key.clone().map(ResendClient::new);
    let sender = client.as_ref().map(|c| c as &dyn EmailSender);

    Ok(handle_submission(&config, &event.payload, sender).await)
}

/// The submission pipeline, with the sender injected so tests can exercise
/// dispatch outcomes without network access. `sender` is `None` when the
/// provider credential is absent; that case is reported only after input
/// validation, so client errors keep precedence over configuration errors.
pub async fn handle_submission(
    config: &AppConfig,
    payload: &Value,
    sender: Option<&dyn EmailSender>,
) -> Value {
    let Some(body) = extract_body(payload) else {
        error!("Request body missing or not a string");
        return helpers::err_response(500, ERR_GENERIC);
    };

    let data: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            error!("Error processing waiver: {}", e);
            return helpers::err_response(500, ERR_GENERIC);
        }
    };

    let missing = validation::missing_fields(&data);
    if !missing.is_empty() {
        return helpers::err_response(
            400,
            &format!("Missing required fields: {}", missing.join(", ")),
        );
    }

    if !validation::signature_matches(&data) {
        return helpers::err_response(400, ERR_SIGNATURE_MISMATCH);
    }

    let Some(sender) = sender else {
        error!("RESEND_API_KEY not configured");
        return helpers::err_response(500, ERR_NOT_CONFIGURED);
    };

    let submission: WaiverSubmission = match serde_json::from_value(data) {
        Ok(s) => s,
        Err(e) => {
            error!("Error processing waiver: {}", e);
            return helpers::err_response(500, ERR_GENERIC);
        }
    };

    let route = routing::route_for(&submission.cave, config);
    let confirmation = render::confirmation_email(&submission, &route);
    let notification = render::owner_email(&submission, &route);

    // Both sends always run to completion; one failing never cancels or
    // skips the other.
    let (confirmation_result, notification_result) =
        futures::join!(sender.send(&confirmation), sender.send(&notification));

    let mut any_failed = false;
    for (which, result) in [
        ("confirmation", &confirmation_result),
        ("notification", &notification_result),
    ] {
        if let Err(e) = result {
            error!(email = which, "Email sending failed: {}", e);
            any_failed = true;
        }
    }
    if any_failed {
        return helpers::err_response(500, ERR_SEND_FAILED);
    }

    info!(cave = %submission.cave, notify = %route.notify_address, "Waiver submitted");
    helpers::ok_submitted(MSG_SUBMITTED)
}

fn http_method(payload: &Value) -> &str {
    payload
        .pointer("/requestContext/http/method")
        .and_then(Value::as_str)
        .or_else(|| payload.get("httpMethod").and_then(Value::as_str))
        .unwrap_or("POST")
}

fn extract_body(payload: &Value) -> Option<&str> {
    payload.get("body")?.as_str()
}
