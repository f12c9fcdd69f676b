use std::error::Error;
use waivers::errors::WaiverError;

#[test]
fn test_waiver_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = WaiverError::EmailApi("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_waiver_error_display() {
    let error = WaiverError::EmailApi("invalid recipient".to_string());
    assert_eq!(format!("{error}"), "Resend API error: invalid recipient");

    let error = WaiverError::HttpError("connection refused".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: connection refused"
    );
}

#[test]
fn test_waiver_error_from_reqwest() {
    // We can't easily construct a reqwest::Error directly, but we can verify
    // that the From<reqwest::Error> conversion exists.
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> WaiverError {
        WaiverError::from(err)
    }
}
