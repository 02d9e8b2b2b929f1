use super::*;

fn not_found() -> ApiError {
    ApiError::Request { status: Some(404), message: "Not found".to_owned() }
}

// =============================================================
// Read lifecycle
// =============================================================

#[test]
fn new_resource_is_idle() {
    let sync = ResourceSync::<Vec<u32>>::new();
    assert_eq!(sync.status(), FetchStatus::Idle);
    assert!(sync.data().is_none());
    assert!(sync.error().is_none());
    assert_eq!(sync.generation(), 0);
}

#[test]
fn begin_enters_loading() {
    let mut sync = ResourceSync::<Vec<u32>>::new();
    let token = sync.begin();
    assert!(sync.is_loading());
    assert!(sync.is_current(token));
}

#[test]
fn success_enters_ready_with_data() {
    let mut sync = ResourceSync::new();
    let token = sync.begin();
    assert!(sync.settle(token, Ok(vec![1, 2, 3])));
    assert_eq!(sync.status(), FetchStatus::Ready);
    assert_eq!(sync.data(), Some(&vec![1, 2, 3]));
    assert!(sync.error().is_none());
}

#[test]
fn failure_surfaces_server_message() {
    let mut sync = ResourceSync::<Vec<u32>>::new();
    let token = sync.begin();
    sync.settle(token, Err(not_found()));
    assert_eq!(sync.status(), FetchStatus::Error);
    assert_eq!(sync.error(), Some("Not found"));
    assert!(sync.data().is_none());
}

#[test]
fn network_failure_surfaces_fallback_not_blank() {
    let mut sync = ResourceSync::<Vec<u32>>::new();
    let token = sync.begin();
    sync.settle(token, Err(ApiError::transport("Failed to load exam results.")));
    assert_eq!(sync.error(), Some("Failed to load exam results."));
}

#[test]
fn reload_after_error_goes_back_to_loading() {
    let mut sync = ResourceSync::<Vec<u32>>::new();
    let first = sync.begin();
    sync.settle(first, Err(not_found()));
    let second = sync.begin();
    assert!(sync.is_loading());
    assert!(sync.error().is_none());
    sync.settle(second, Ok(vec![7]));
    assert_eq!(sync.data(), Some(&vec![7]));
}

// =============================================================
// Generation tokens
// =============================================================

#[test]
fn stale_response_is_discarded() {
    let mut sync = ResourceSync::new();
    let first = sync.begin();
    let second = sync.begin();
    assert!(sync.settle(second, Ok("course-b")));
    assert!(!sync.settle(first, Ok("course-a")));
    assert_eq!(sync.data(), Some(&"course-b"));
}

#[test]
fn stale_response_arriving_first_does_not_settle() {
    let mut sync = ResourceSync::new();
    let first = sync.begin();
    let second = sync.begin();
    assert!(!sync.settle(first, Ok("course-a")));
    assert!(sync.is_loading());
    assert!(sync.settle(second, Ok("course-b")));
    assert_eq!(sync.data(), Some(&"course-b"));
}

#[test]
fn stale_error_does_not_clobber_ready_data() {
    let mut sync = ResourceSync::new();
    let first = sync.begin();
    let second = sync.begin();
    sync.settle(second, Ok(5));
    assert!(!sync.settle(first, Err(not_found())));
    assert_eq!(sync.data(), Some(&5));
}

#[test]
fn reset_drops_read_in_flight() {
    let mut sync = ResourceSync::new();
    let course_a = sync.begin();
    sync.reset();
    assert_eq!(sync.status(), FetchStatus::Idle);
    assert!(!sync.settle(course_a, Ok(vec!["course-a result"])));
    assert_eq!(sync.status(), FetchStatus::Idle);
    assert!(sync.data().is_none());
}

#[test]
fn reset_clears_ready_data() {
    let mut sync = ResourceSync::new();
    let token = sync.begin();
    sync.settle(token, Ok(3));
    sync.reset();
    assert!(sync.data().is_none());
    let next = sync.begin();
    assert!(sync.settle(next, Ok(4)));
    assert_eq!(sync.data(), Some(&4));
}

#[test]
fn tokens_are_distinct() {
    let mut sync = ResourceSync::<()>::new();
    let a = sync.begin();
    let b = sync.begin();
    assert_ne!(a, b);
    assert!(!sync.is_current(a));
    assert!(sync.is_current(b));
    assert_eq!(sync.generation(), 2);
}

// =============================================================
// Writes
// =============================================================

#[test]
fn begin_submit_refuses_concurrent_write() {
    let mut sync = ResourceSync::<()>::new();
    assert!(sync.begin_submit());
    assert!(sync.submitting());
    assert!(!sync.begin_submit());
}

#[test]
fn submit_failure_keeps_loaded_data() {
    let mut sync = ResourceSync::new();
    let token = sync.begin();
    sync.settle(token, Ok(vec!["math"]));
    sync.begin_submit();
    sync.finish_submit(Err(ApiError::transport("Enrollment failed.")));
    assert!(!sync.submitting());
    assert_eq!(sync.submit_error(), Some("Enrollment failed."));
    assert_eq!(sync.data(), Some(&vec!["math"]));
    assert_eq!(sync.status(), FetchStatus::Ready);
}

#[test]
fn next_submit_clears_previous_error() {
    let mut sync = ResourceSync::<()>::new();
    sync.begin_submit();
    sync.finish_submit(Err(ApiError::transport("Failed.")));
    assert!(sync.begin_submit());
    assert!(sync.submit_error().is_none());
    sync.finish_submit(Ok(()));
    assert!(sync.submit_error().is_none());
}

// =============================================================
// Optimistic mutation
// =============================================================

#[test]
fn update_data_edits_ready_payload() {
    let mut sync = ResourceSync::new();
    let token = sync.begin();
    sync.settle(token, Ok(vec![1]));
    assert!(sync.update_data(|items| items.push(2)));
    assert_eq!(sync.data(), Some(&vec![1, 2]));
}

#[test]
fn update_data_is_noop_when_not_ready() {
    let mut sync = ResourceSync::<Vec<u32>>::new();
    sync.begin();
    assert!(!sync.update_data(|items| items.push(2)));
    assert!(sync.data().is_none());
}

#[test]
fn fetch_state_status_mapping() {
    assert_eq!(FetchState::<u8>::Idle.status(), FetchStatus::Idle);
    assert_eq!(FetchState::<u8>::Loading.status(), FetchStatus::Loading);
    assert_eq!(FetchState::Ready(1u8).status(), FetchStatus::Ready);
    assert_eq!(FetchState::<u8>::Error("x".into()).status(), FetchStatus::Error);
}
