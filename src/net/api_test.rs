use super::*;
use crate::net::endpoints;
use crate::net::test_support::ScriptedTransport;
use crate::net::types::{ApiMessage, Course, EnrollmentRequest};
use futures::executor::block_on;

// =============================================================
// interpret
// =============================================================

#[test]
fn interpret_decodes_success_body() {
    let resp = RawResponse { status: 200, body: r#"[{"id":"c1","code":"M1","title":"Algebra"}]"#.to_owned() };
    let courses: Vec<Course> = interpret(&resp, "Failed to load courses.").unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title, "Algebra");
}

#[test]
fn interpret_empty_success_body_as_unit() {
    let resp = RawResponse { status: 204, body: String::new() };
    let unit: Result<(), ApiError> = interpret(&resp, "Failed.");
    assert_eq!(unit, Ok(()));
}

#[test]
fn interpret_mismatched_success_body_is_malformed() {
    let resp = RawResponse { status: 200, body: r#"{"items":[]}"#.to_owned() };
    let result: Result<Vec<Course>, ApiError> = interpret(&resp, "Failed to load courses.");
    assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
}

#[test]
fn interpret_error_status_uses_server_message() {
    let resp = RawResponse { status: 404, body: r#"{"message":"Not found"}"#.to_owned() };
    let result: Result<Vec<Course>, ApiError> = interpret(&resp, "Failed to load courses.");
    assert_eq!(result, Err(ApiError::Request { status: Some(404), message: "Not found".to_owned() }));
}

#[test]
fn interpret_error_status_without_body_uses_fallback() {
    let resp = RawResponse { status: 500, body: String::new() };
    let result: Result<Vec<Course>, ApiError> = interpret(&resp, "Failed to load courses.");
    assert_eq!(
        result,
        Err(ApiError::Request { status: Some(500), message: "Failed to load courses.".to_owned() })
    );
}

#[test]
fn raw_response_ok_range() {
    assert!(RawResponse { status: 200, body: String::new() }.ok());
    assert!(RawResponse { status: 299, body: String::new() }.ok());
    assert!(!RawResponse { status: 304, body: String::new() }.ok());
    assert!(!RawResponse { status: 199, body: String::new() }.ok());
}

// =============================================================
// fetch_json / send_json / send_multipart
// =============================================================

#[test]
fn fetch_json_issues_one_get_to_endpoint_path() {
    let transport = ScriptedTransport::new().reply(200, "[]");
    let courses: Vec<Course> = block_on(fetch_json(&transport, &endpoints::courses())).unwrap();
    assert!(courses.is_empty());
    let seen = transport.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, Method::Get);
    assert_eq!(seen[0].path, "/api/courses");
    assert!(matches!(seen[0].body, RequestBody::Empty));
}

#[test]
fn fetch_json_transport_failure_uses_endpoint_fallback() {
    let transport = ScriptedTransport::new().fail("offline");
    let result: Result<Vec<Course>, ApiError> = block_on(fetch_json(&transport, &endpoints::attendance()));
    let err = result.unwrap_err();
    assert_eq!(err.status(), None);
    assert_eq!(err.user_message(), "Failed to load attendance.");
}

#[test]
fn fetch_json_does_not_retry() {
    let transport = ScriptedTransport::new().fail("offline").reply(200, "[]");
    let _ = block_on(fetch_json::<Vec<Course>, _>(&transport, &endpoints::courses()));
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn send_json_posts_serialized_body() {
    let transport = ScriptedTransport::new().reply(201, r#"{"message":"Enrolled"}"#);
    let body = EnrollmentRequest { course_ids: vec!["c1".to_owned()] };
    let ack: ApiMessage = block_on(send_json(&transport, Method::Post, &endpoints::enrollments(), &body)).unwrap();
    assert_eq!(ack.message.as_deref(), Some("Enrolled"));
    let seen = transport.seen.borrow();
    assert_eq!(seen[0].method, Method::Post);
    match &seen[0].body {
        RequestBody::Json(value) => assert_eq!(value["courseIds"][0], "c1"),
        other => panic!("expected json body, got {other:?}"),
    }
}

#[test]
fn send_multipart_posts_form_fields() {
    let transport = ScriptedTransport::new().reply(200, r#"{"message":"Registered"}"#);
    let form = MultipartForm::new().text("name", "R. Iyer").text("department", "Physics");
    let ack: ApiMessage = block_on(send_multipart(&transport, &endpoints::staff_register(), form)).unwrap();
    assert_eq!(ack.or("Registered."), "Registered");
    let seen = transport.seen.borrow();
    assert_eq!(seen[0].path, "/api/staff/register");
    match &seen[0].body {
        RequestBody::Multipart(form) => {
            assert_eq!(form.text_fields()[0], ("name".to_owned(), "R. Iyer".to_owned()));
            assert_eq!(form.text_fields().len(), 2);
        }
        other => panic!("expected multipart body, got {other:?}"),
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_transport_is_unavailable_outside_browser() {
    let transport = HttpTransport::default();
    let result = block_on(transport.execute(ApiRequest::get("/api/courses")));
    assert!(result.is_err());
}

#[test]
fn method_names() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Patch.as_str(), "PATCH");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}
