//! Catalogue of backend resource endpoints.
//!
//! Each endpoint pairs a path with the fallback message shown when the
//! server rejects a call without saying why.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// One backend resource or action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub failure_message: &'static str,
}

impl Endpoint {
    fn fixed(path: &str, failure_message: &'static str) -> Self {
        Self { path: path.to_owned(), failure_message }
    }
}

pub fn current_user() -> Endpoint {
    Endpoint::fixed("/api/auth/me", "Failed to load your session.")
}

pub fn forgot_password() -> Endpoint {
    Endpoint::fixed("/api/auth/forgot-password", "Failed to send the reset link.")
}

pub fn reset_password(token: &str) -> Endpoint {
    Endpoint {
        path: format!("/api/auth/reset-password/{}", encode_segment(token)),
        failure_message: "Failed to reset password.",
    }
}

pub fn change_password() -> Endpoint {
    Endpoint::fixed("/api/auth/change-password", "Failed to change password.")
}

pub fn profile() -> Endpoint {
    Endpoint::fixed("/api/users/me/profile", "Failed to load profile.")
}

pub fn update_profile() -> Endpoint {
    Endpoint::fixed("/api/users/me/profile", "Failed to update profile.")
}

pub fn admissions_apply() -> Endpoint {
    Endpoint::fixed("/api/admissions/apply", "Failed to submit the application.")
}

pub fn staff_register() -> Endpoint {
    Endpoint::fixed("/api/staff/register", "Staff registration failed.")
}

pub fn courses() -> Endpoint {
    Endpoint::fixed("/api/courses", "Failed to load courses.")
}

pub fn enrollments() -> Endpoint {
    Endpoint::fixed("/api/enrollments", "Enrollment failed.")
}

pub fn attendance() -> Endpoint {
    Endpoint::fixed("/api/attendance", "Failed to load attendance.")
}

pub fn record_attendance() -> Endpoint {
    Endpoint::fixed("/api/attendance", "Failed to save attendance.")
}

/// Exam results, optionally narrowed to one course.
pub fn exam_results(course_id: Option<&str>) -> Endpoint {
    let path = match course_id {
        Some(id) => format!("/api/exam-results?courseId={}", encode_segment(id)),
        None => "/api/exam-results".to_owned(),
    };
    Endpoint { path, failure_message: "Failed to load exam results." }
}

pub fn record_exam_result() -> Endpoint {
    Endpoint::fixed("/api/exam-results", "Failed to save marks.")
}

pub fn generate_invoice() -> Endpoint {
    Endpoint::fixed("/api/fees/invoices/generate", "Failed to generate the invoice.")
}

pub fn invoices() -> Endpoint {
    Endpoint::fixed("/api/fees/invoices", "Failed to load invoices.")
}

pub fn upload() -> Endpoint {
    Endpoint::fixed("/api/upload", "File upload failed.")
}

/// Percent-encode everything outside the unreserved set so ids cannot
/// escape their path segment.
pub fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
