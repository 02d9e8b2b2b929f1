use super::*;

#[test]
fn new_form_has_empty_fields() {
    let form = SubmissionState::new(&["email", "password"]);
    assert_eq!(form.get("email"), "");
    assert_eq!(form.values().len(), 2);
    assert!(!form.submitting());
    assert!(form.message().is_none());
    assert!(form.error().is_none());
}

#[test]
fn unknown_field_reads_empty() {
    let form = SubmissionState::new(&["email"]);
    assert_eq!(form.get("phone"), "");
}

#[test]
fn set_updates_value() {
    let mut form = SubmissionState::new(&["email"]);
    form.set("email", "a@b.edu");
    assert_eq!(form.get("email"), "a@b.edu");
}

#[test]
fn begin_refuses_double_submit() {
    let mut form = SubmissionState::new(&["email"]);
    assert!(form.begin());
    assert!(!form.begin());
}

#[test]
fn begin_clears_previous_outcome() {
    let mut form = SubmissionState::new(&["email"]);
    form.reject(&ApiError::Validation("Email is required.".to_owned()));
    assert!(form.begin());
    assert!(form.error().is_none());
    assert!(form.message().is_none());
}

#[test]
fn reject_records_validation_message() {
    let mut form = SubmissionState::new(&["password", "confirm"]);
    form.reject(&ApiError::Validation("Passwords do not match.".to_owned()));
    assert_eq!(form.error(), Some("Passwords do not match."));
    assert!(!form.submitting());
}

#[test]
fn reject_while_in_flight_keeps_guard_closed() {
    let mut form = SubmissionState::new(&["password", "confirm"]);
    assert!(form.begin());
    form.reject(&ApiError::Validation("Passwords do not match.".to_owned()));
    assert!(form.submitting());
    assert!(form.error().is_none());
    assert!(!form.begin());
}

#[test]
fn fail_keeps_entered_values() {
    let mut form = SubmissionState::new(&["email"]);
    form.set("email", "a@b.edu");
    form.begin();
    form.fail(&ApiError::Request { status: Some(409), message: "Email already registered".to_owned() });
    assert_eq!(form.error(), Some("Email already registered"));
    assert_eq!(form.get("email"), "a@b.edu");
    assert!(!form.submitting());
}

#[test]
fn succeed_with_reset_restores_defaults() {
    let mut form = SubmissionState::with_defaults(&[("program", "BSc"), ("name", "")]);
    form.set("program", "MSc");
    form.set("name", "Asha");
    form.begin();
    form.succeed("Application submitted.", true);
    assert_eq!(form.get("program"), "BSc");
    assert_eq!(form.get("name"), "");
    assert_eq!(form.message(), Some("Application submitted."));
}

#[test]
fn succeed_without_reset_keeps_values() {
    let mut form = SubmissionState::new(&["name"]);
    form.set("name", "Asha");
    form.begin();
    form.succeed("Profile updated.", false);
    assert_eq!(form.get("name"), "Asha");
}

#[test]
fn reset_clears_everything() {
    let mut form = SubmissionState::new(&["name"]);
    form.set("name", "Asha");
    form.begin();
    form.fail(&ApiError::transport("Failed."));
    form.reset();
    assert_eq!(form, SubmissionState::new(&["name"]));
}
