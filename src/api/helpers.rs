//! Response builders for the waiver API.
//!
//! Every response, success or failure, carries the CORS headers so the
//! public waiver form can call the endpoint cross-origin.

use serde_json::{Value, json};

/// Returns the CORS header set shared by all responses.
#[must_use]
pub fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "POST, OPTIONS",
        "Access-Control-Allow-Headers": "Content-Type",
    })
}

fn json_headers() -> Value {
    let mut headers = cors_headers();
    if let Some(map) = headers.as_object_mut() {
        map.insert("Content-Type".to_string(), json!("application/json"));
    }
    headers
}

/// Returns a 200 OK preflight response with no body.
#[must_use]
pub fn ok_preflight() -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": ""
    })
}

/// Returns a 200 OK response with a success acknowledgment.
#[must_use]
pub fn ok_submitted(message: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": json_headers(),
        "body": json!({ "success": true, "message": message }).to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": json_headers(),
        "body": json!({ "error": message }).to_string()
    })
}
