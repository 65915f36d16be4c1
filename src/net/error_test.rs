use super::*;

#[test]
fn status_404_maps_to_not_found() {
    assert_eq!(ApiError::from_status(404, "task t1"), ApiError::NotFound("task t1".to_owned()));
}

#[test]
fn status_401_and_403_map_to_auth() {
    assert!(matches!(ApiError::from_status(401, "login"), ApiError::Auth(_)));
    assert!(matches!(ApiError::from_status(403, "login"), ApiError::Auth(_)));
}

#[test]
fn other_statuses_map_to_network() {
    assert!(matches!(ApiError::from_status(500, "tasks"), ApiError::Network(_)));
    assert!(matches!(ApiError::from_status(418, "tasks"), ApiError::Network(_)));
}

#[test]
fn messages_render_kind_prefix() {
    assert_eq!(
        ApiError::Input("task id is required".to_owned()).to_string(),
        "invalid input: task id is required"
    );
    assert_eq!(
        ApiError::NotFound("task t1".to_owned()).to_string(),
        "not found: task t1"
    );
}
