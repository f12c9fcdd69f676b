//! Email rendering for waiver submissions.
//!
//! Pure string building: a summary table shared by both emails, plus the two
//! full bodies (participant confirmation, owner/admin notification). Field
//! values are interpolated into the markup without escaping, matching the
//! behavior this service has always had; see the
//! `markup_in_fields_is_interpolated_verbatim` test.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::core::models::{OutboundEmail, WaiverSubmission};
use crate::email::routing::Route;

/// Fixed sender identity for both emails.
pub const FROM_ADDRESS: &str = "Southern Mammoth Waivers <noreply@yourdomain.com>";

const TH_STYLE: &str = "text-align: left; padding: 12px; border: 1px solid #dee2e6;";
const TD_STYLE: &str = "padding: 12px; border: 1px solid #dee2e6;";
const SHADED_TR: &str = r#"<tr style="background: #f8f9fa;">"#;

/// Renders a date input as en-US `M/D/YYYY`. Accepts RFC 3339 timestamps or
/// bare `YYYY-MM-DD` dates; anything else is echoed back unchanged.
#[must_use]
pub fn localized_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%-m/%-d/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%-m/%-d/%Y").to_string();
    }
    raw.to_string()
}

/// Renders a timestamp input as en-US `M/D/YYYY, H:MM:SS AM/PM`, falling
/// back like [`localized_date`].
#[must_use]
pub fn localized_datetime(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%-m/%-d/%Y, 12:00:00 AM").to_string();
    }
    raw.to_string()
}

fn mark(acknowledged: bool) -> &'static str {
    if acknowledged { "✓" } else { "✗" }
}

fn push_row(out: &mut String, shaded: bool, label: &str, value: &str) {
    let tr = if shaded { SHADED_TR } else { "<tr>" };
    out.push_str(&format!(
        "{tr}\n  <th style=\"{TH_STYLE}\">{label}</th>\n  <td style=\"{TD_STYLE}\">{value}</td>\n</tr>\n"
    ));
}

/// The waiver summary table embedded in both emails.
#[must_use]
pub fn waiver_table(data: &WaiverSubmission) -> String {
    let mut out = String::from(
        "<table style=\"width: 100%; border-collapse: collapse; font-family: sans-serif;\">\n",
    );

    push_row(&mut out, true, "Cave", &data.cave);
    push_row(&mut out, false, "Full Name", &data.participant_name);
    push_row(&mut out, true, "Email", &data.email);
    push_row(&mut out, false, "Phone", &data.phone);

    let mut address = data.address.clone();
    if let Some(city_state_zip) = &data.city_state_zip {
        address.push_str("<br>");
        address.push_str(city_state_zip);
    }
    push_row(&mut out, true, "Address", &address);

    push_row(&mut out, false, "Birth Date", &localized_date(&data.birth_date));
    push_row(
        &mut out,
        true,
        "Planned Trip Date",
        &localized_date(&data.trip_date),
    );

    let mut emergency1 = format!("{}<br>{}", data.emergency1_name, data.emergency1_phone);
    if let Some(relationship) = &data.emergency1_relationship {
        emergency1.push_str("<br>Relationship: ");
        emergency1.push_str(relationship);
    }
    push_row(&mut out, false, "Emergency Contact #1", &emergency1);

    if let Some(emergency2_name) = &data.emergency2_name {
        let mut emergency2 = format!(
            "{}<br>{}",
            emergency2_name,
            data.emergency2_phone.as_deref().unwrap_or("N/A")
        );
        if let Some(relationship) = &data.emergency2_relationship {
            emergency2.push_str("<br>Relationship: ");
            emergency2.push_str(relationship);
        }
        push_row(&mut out, true, "Emergency Contact #2", &emergency2);
    }

    let acknowledgments = format!(
        "{} White-nose Syndrome Prevention<br>\
         {} Risks and Hazards<br>\
         {} Conservation and Safety Rules<br>\
         {} Liability Release",
        mark(data.wns_acknowledge),
        mark(data.risks_acknowledge),
        mark(data.rules_acknowledge),
        mark(data.liability_acknowledge),
    );
    push_row(&mut out, false, "Acknowledgments", &acknowledgments);

    let signature = format!(
        "<span style=\"font-style: italic;\">{}</span>",
        data.signature
    );
    push_row(&mut out, true, "Electronic Signature", &signature);

    let submitted = localized_datetime(data.submitted_at.as_deref().unwrap_or(""));
    push_row(&mut out, false, "Submission Date/Time", &submitted);

    out.push_str("</table>\n");
    out
}

/// Confirmation email back to the participant.
#[must_use]
pub fn confirmation_email(data: &WaiverSubmission, route: &Route) -> OutboundEmail {
    let notice = if route.needs_owner_approval {
        "<p><strong>Note:</strong> Your waiver has been sent to the property owner \
         for review. You will receive confirmation once it has been approved. \
         Please wait for this confirmation before planning your trip.</p>\n"
    } else {
        ""
    };

    let html = format!(
        "<h2>Waiver Submission Confirmed</h2>\n\
         <p>Dear {name},</p>\n\
         <p>Thank you for submitting your waiver for <strong>{cave}</strong>.</p>\n\
         {notice}\
         <p><strong>Submitted:</strong> {submitted}</p>\n\
         <p><strong>Planned Trip Date:</strong> {trip_date}</p>\n\
         <hr>\n\
         <h3>Your Waiver Details:</h3>\n\
         {table}\
         <hr>\n\
         <p style=\"color: #666; font-size: 12px;\">This is an automated message. \
         Please do not reply to this email.</p>\n",
        name = data.participant_name,
        cave = data.cave,
        submitted = localized_datetime(data.submitted_at.as_deref().unwrap_or("")),
        trip_date = localized_date(&data.trip_date),
        table = waiver_table(data),
    );

    OutboundEmail {
        from: FROM_ADDRESS.to_string(),
        to: vec![data.email.clone()],
        subject: format!("Waiver Confirmation - {}", data.cave),
        html,
    }
}

/// Notification email to the property owner or site admin.
#[must_use]
pub fn owner_email(data: &WaiverSubmission, route: &Route) -> OutboundEmail {
    let notice = if route.needs_owner_approval {
        "<p style=\"background: #fff3cd; padding: 10px; border-left: 4px solid #ffc107;\">\
         <strong>Action Required:</strong> This waiver requires property owner approval. \
         Please review and contact the participant if needed.</p>\n"
    } else {
        ""
    };

    let html = format!(
        "<h2>New Waiver Submission</h2>\n\
         <p><strong>Cave:</strong> {cave}</p>\n\
         <p><strong>Participant:</strong> {name}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Phone:</strong> {phone}</p>\n\
         <p><strong>Planned Trip Date:</strong> {trip_date}</p>\n\
         <p><strong>Submitted:</strong> {submitted}</p>\n\
         {notice}\
         <hr>\n\
         <h3>Full Waiver Details:</h3>\n\
         {table}",
        cave = data.cave,
        name = data.participant_name,
        email = data.email,
        phone = data.phone,
        trip_date = localized_date(&data.trip_date),
        submitted = localized_datetime(data.submitted_at.as_deref().unwrap_or("")),
        table = waiver_table(data),
    );

    OutboundEmail {
        from: FROM_ADDRESS.to_string(),
        to: vec![route.notify_address.clone()],
        subject: format!(
            "New Waiver Submission - {} - {}",
            data.cave, data.participant_name
        ),
        html,
    }
}
