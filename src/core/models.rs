use serde::{Deserialize, Serialize};

/// One waiver form submission. Built fresh from the request body and
/// discarded once the response is written; nothing is persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaiverSubmission {
    pub cave: String,
    pub participant_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city_state_zip: Option<String>,
    pub birth_date: String,
    pub trip_date: String,
    pub emergency1_name: String,
    pub emergency1_phone: String,
    pub emergency1_relationship: Option<String>,
    pub emergency2_name: Option<String>,
    pub emergency2_phone: Option<String>,
    pub emergency2_relationship: Option<String>,
    #[serde(default)]
    pub wns_acknowledge: bool,
    #[serde(default)]
    pub risks_acknowledge: bool,
    #[serde(default)]
    pub rules_acknowledge: bool,
    #[serde(default)]
    pub liability_acknowledge: bool,
    pub signature: String,
    pub submitted_at: Option<String>,
}

/// Wire body for the Resend send endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}
