use super::*;
use crate::net::http::calls;
use futures::executor::block_on;

fn update_payload(assigned_to: Option<&str>) -> UpdateTaskPayload {
    UpdateTaskPayload {
        title: "T".to_owned(),
        description: "D".to_owned(),
        status: TaskStatus::Pending,
        assigned_to: assigned_to.map(str::to_owned),
    }
}

#[test]
fn urls_are_rooted_at_the_api_base() {
    assert!(tasks_url().ends_with("/tasks"));
    assert!(task_url("t1").ends_with("/tasks/t1"));
    assert!(assign_url("t1").ends_with("/tasks/t1/assign"));
    assert!(dashboard_url().ends_with("/tasks/dashboard"));
}

#[test]
fn update_with_empty_id_fails_before_any_network_call() {
    calls::reset();
    let result = block_on(update_task("", &update_payload(None)));
    assert!(matches!(result, Err(ApiError::Input(_))));
    let result = block_on(update_task("   ", &update_payload(None)));
    assert!(matches!(result, Err(ApiError::Input(_))));
    assert_eq!(calls::total(), 0);
}

#[test]
fn delete_with_empty_id_fails_before_any_network_call() {
    calls::reset();
    let result = block_on(delete_task(""));
    assert!(matches!(result, Err(ApiError::Input(_))));
    assert_eq!(calls::total(), 0);
}

#[test]
fn get_and_assign_with_empty_id_fail_locally_too() {
    calls::reset();
    assert!(matches!(block_on(get_task("")), Err(ApiError::Input(_))));
    assert!(matches!(block_on(assign_task("", "u1")), Err(ApiError::Input(_))));
    assert_eq!(calls::total(), 0);
}

#[test]
fn nonempty_id_reaches_the_gateway() {
    calls::reset();
    // Native gateway has no fetch; the point is that dispatch was attempted.
    let result = block_on(delete_task("t1"));
    assert!(matches!(result, Err(ApiError::Network(_))));
    assert_eq!(calls::total(), 1);
}

#[test]
fn create_payload_omits_unassigned_entirely() {
    let payload = CreateTaskPayload {
        title: "T".to_owned(),
        description: "D".to_owned(),
        status: TaskStatus::InProgress,
        assigned_to: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("assignedTo"));
    assert_eq!(object["status"], "In Progress");
}

#[test]
fn create_payload_includes_selected_assignee() {
    let payload = CreateTaskPayload {
        title: "T".to_owned(),
        description: "D".to_owned(),
        status: TaskStatus::Pending,
        assigned_to: Some("u7".to_owned()),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["assignedTo"], "u7");
}

#[test]
fn update_payload_sends_explicit_null_to_unassign() {
    let value = serde_json::to_value(update_payload(None)).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("assignedTo"));
    assert!(object["assignedTo"].is_null());

    let value = serde_json::to_value(update_payload(Some("u7"))).unwrap();
    assert_eq!(value["assignedTo"], "u7");
}
