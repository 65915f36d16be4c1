use super::*;

#[test]
fn user_wire_prefers_mongo_id() {
    let wire: UserWire = serde_json::from_str(r#"{"_id":"m1","id":"i1","name":"A"}"#).unwrap();
    assert_eq!(wire.into_user().id, "m1");
}

#[test]
fn user_wire_falls_back_to_plain_id() {
    let wire: UserWire = serde_json::from_str(r#"{"id":"i1","name":"A","email":"a@b.com"}"#).unwrap();
    let user = wire.into_user();
    assert_eq!(user.id, "i1");
    assert_eq!(user.email, "a@b.com");
}

#[test]
fn user_wire_unknown_role_normalizes_to_user() {
    let wire: UserWire = serde_json::from_str(r#"{"id":"i1","role":"superadmin"}"#).unwrap();
    assert_eq!(wire.into_user().role, Role::User);
    let wire: UserWire = serde_json::from_str(r#"{"id":"i1","role":"Admin"}"#).unwrap();
    assert_eq!(wire.into_user().role, Role::Admin);
}

#[test]
fn task_status_parses_wire_spellings() {
    assert_eq!(TaskStatus::parse("Pending"), TaskStatus::Pending);
    assert_eq!(TaskStatus::parse("In Progress"), TaskStatus::InProgress);
    assert_eq!(TaskStatus::parse("Done"), TaskStatus::Done);
    assert_eq!(TaskStatus::parse("garbage"), TaskStatus::Pending);
    assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
}

#[test]
fn assignee_accepts_bare_id_string() {
    let task: TaskWire =
        serde_json::from_str(r#"{"_id":"t1","title":"T","assignedTo":"u9"}"#).unwrap();
    let task = task.into_task();
    assert_eq!(task.assignee_id(), "u9");
    assert_eq!(task.assignee_display(), "u9");
}

#[test]
fn assignee_accepts_expanded_user_object() {
    let task: TaskWire = serde_json::from_str(
        r#"{"_id":"t1","title":"T","assignedTo":{"_id":"u9","name":"Nia","email":"nia@x.com"}}"#,
    )
    .unwrap();
    let task = task.into_task();
    assert_eq!(task.assignee_id(), "u9");
    assert_eq!(task.assignee_display(), "Nia");
}

#[test]
fn assignee_object_without_name_displays_email_then_id() {
    let by_email = normalize_assignee(Some(AssigneeWire::Expanded(UserWire {
        mongo_id: Some("u9".to_owned()),
        email: Some("nia@x.com".to_owned()),
        ..UserWire::default()
    })))
    .unwrap();
    assert_eq!(by_email.display_name(), "nia@x.com");

    let by_id = normalize_assignee(Some(AssigneeWire::Id("u9".to_owned()))).unwrap();
    assert_eq!(by_id.display_name(), "u9");
}

#[test]
fn assignee_null_empty_or_unrecognizable_means_unassigned() {
    let task: TaskWire =
        serde_json::from_str(r#"{"_id":"t1","title":"T","assignedTo":null}"#).unwrap();
    assert_eq!(task.into_task().assignee, None);

    assert_eq!(normalize_assignee(None), None);
    assert_eq!(normalize_assignee(Some(AssigneeWire::Id(String::new()))), None);
    assert_eq!(
        normalize_assignee(Some(AssigneeWire::Expanded(UserWire::default()))),
        None
    );
}

#[test]
fn task_ids_unify_and_status_defaults() {
    let task: TaskWire = serde_json::from_str(r#"{"id":"t2","title":"T"}"#).unwrap();
    let task = task.into_task();
    assert_eq!(task.id, "t2");
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.assignee, None);
}

#[test]
fn timestamps_parse_rfc3339() {
    let parsed = normalize_timestamp(Some("2024-03-01T10:00:00Z"));
    assert_eq!(parsed.to_rfc3339(), "2024-03-01T10:00:00+00:00");
}

#[test]
fn missing_or_bad_timestamps_default_to_now() {
    let before = Utc::now();
    let missing = normalize_timestamp(None);
    let garbage = normalize_timestamp(Some("yesterday-ish"));
    let after = Utc::now();
    assert!(missing >= before && missing <= after);
    assert!(garbage >= before && garbage <= after);
}

#[test]
fn user_serde_roundtrips_for_storage() {
    let user = User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: Role::Admin,
    };
    let raw = serde_json::to_string(&user).unwrap();
    assert!(raw.contains(r#""role":"admin""#));
    let back: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}
