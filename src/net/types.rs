//! Wire DTOs for the institute backend.
//!
//! DESIGN
//! ======
//! Responses are decoded into these types at the network boundary. A body
//! that is missing a required field fails decoding and surfaces as a
//! malformed response instead of rendering blanks. Unknown fields are
//! ignored so backend additions do not break older clients.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Portal role. Decides which areas a user can reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
            Self::Admin => "Admin",
        }
    }
}

/// Authenticated portal user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Profile details shown on the profile view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Editable subset of a profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// A course offered for enrollment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(alias = "_id")]
    pub id: String,
    pub code: String,
    pub title: String,
    /// Enrollment fee in minor currency units.
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub teacher_name: Option<String>,
}

/// Batch enrollment of the current student into courses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    pub course_ids: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

/// One attendance mark for one student on one date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub student_id: String,
    #[serde(default)]
    pub student_name: Option<String>,
    pub course_id: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    pub status: AttendanceStatus,
}

/// Marks for one student in one exam.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub student_id: String,
    #[serde(default)]
    pub student_name: Option<String>,
    pub course_id: String,
    pub exam: String,
    pub marks: f64,
    pub max_marks: f64,
}

impl ExamResult {
    /// Score as a percentage, or `None` when the exam has no maximum.
    pub fn percentage(&self) -> Option<f64> {
        (self.max_marks > 0.0).then(|| self.marks / self.max_marks * 100.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub student_id: String,
    pub amount: u64,
    pub description: String,
    /// ISO date (`YYYY-MM-DD`).
    pub due_date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(alias = "_id")]
    pub id: String,
    pub student_id: String,
    pub amount: u64,
    pub description: String,
    pub due_date: String,
    #[serde(default)]
    pub paid: bool,
}

/// Public admission application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub program: String,
    pub date_of_birth: String,
}

/// Staff registration text fields; sent as multipart alongside a photo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaffRegistration {
    pub name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
}

impl StaffRegistration {
    /// Text parts in the order the backend expects them.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("department", self.department.clone()),
            ("designation", self.designation.clone()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotPassword {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetPassword {
    pub password: String,
}

/// Conventional acknowledgement body: `{"message": "..."}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    /// Server message, or `fallback` when it sent none.
    pub fn or(self, fallback: &str) -> String {
        self.message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_owned())
    }
}

/// Stored-file reference returned by the upload endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub filename: String,
    #[serde(default)]
    pub path: Option<String>,
}
