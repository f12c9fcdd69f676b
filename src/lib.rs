/// Waivers - serverless handler for caving-trip liability waiver submissions.
///
/// A single Lambda function receives a waiver form as JSON, validates it,
/// renders a confirmation email for the participant and a notification email
/// for the property owner or site admin, and sends both through the Resend
/// API before answering the caller.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (Function URL) for serverless execution
/// - reqwest for the outbound Resend API calls
/// - Tokio for async runtime
///
/// There is no persistence: a submission lives only for the duration of the
/// request that carries it.
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod email;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call once at the start of the Lambda process.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
