//! Request validation for waiver submissions.
//!
//! Checks run against the raw JSON body before typed deserialization so the
//! handler can report every violated constraint, not just the first field
//! serde happens to trip over.

use serde_json::Value;

/// Required fields, in the order they are reported when missing.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "cave",
    "participantName",
    "email",
    "phone",
    "address",
    "birthDate",
    "tripDate",
    "emergency1Name",
    "emergency1Phone",
    "signature",
];

/// A field counts as present only when its value is truthy: absent keys,
/// null, empty strings, zero, and false are all treated as missing.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Returns every required field missing from `data`, in declared order.
#[must_use]
pub fn missing_fields(data: &Value) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| !is_truthy(data.get(**field)))
        .copied()
        .collect()
}

/// Checks that the electronic signature matches the participant name after
/// trimming whitespace and folding case. Only meaningful once presence has
/// passed; non-string values never match.
#[must_use]
pub fn signature_matches(data: &Value) -> bool {
    let Some(signature) = data.get("signature").and_then(Value::as_str) else {
        return false;
    };
    let Some(name) = data.get("participantName").and_then(Value::as_str) else {
        return false;
    };

    signature.trim().to_lowercase() == name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_payload() -> Value {
        json!({
            "cave": "Sinking Creek Cave",
            "participantName": "Jordan Blake",
            "email": "jordan@example.com",
            "phone": "555-0134",
            "address": "12 Karst Ln",
            "birthDate": "1990-04-02",
            "tripDate": "2026-09-12",
            "emergency1Name": "Sam Blake",
            "emergency1Phone": "555-0178",
            "signature": "Jordan Blake",
        })
    }

    #[test]
    fn complete_payload_has_no_missing_fields() {
        assert!(missing_fields(&complete_payload()).is_empty());
    }

    #[test]
    fn reports_all_missing_fields_in_declared_order() {
        let mut data = complete_payload();
        data.as_object_mut().unwrap().remove("cave");
        data.as_object_mut().unwrap().remove("emergency1Phone");
        data["email"] = json!("");

        assert_eq!(missing_fields(&data), vec!["cave", "email", "emergency1Phone"]);
    }

    #[test]
    fn null_zero_and_false_count_as_missing() {
        let mut data = complete_payload();
        data["phone"] = json!(0);
        data["address"] = Value::Null;
        data["signature"] = json!(false);

        assert_eq!(missing_fields(&data), vec!["phone", "address", "signature"]);
    }

    #[test]
    fn signature_comparison_trims_and_folds_case() {
        let mut data = complete_payload();
        data["signature"] = json!("  JORDAN blake ");
        assert!(signature_matches(&data));

        data["signature"] = json!("Jordan B.");
        assert!(!signature_matches(&data));
    }
}
