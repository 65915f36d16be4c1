use super::*;

#[test]
fn read_returns_none_for_missing_key() {
    clear_all();
    assert_eq!(read("absent"), Ok(None));
}

#[test]
fn write_then_read_roundtrips() {
    clear_all();
    write("k", "v").unwrap();
    assert_eq!(read("k"), Ok(Some("v".to_owned())));
}

#[test]
fn remove_is_idempotent() {
    clear_all();
    write("k", "v").unwrap();
    remove("k").unwrap();
    remove("k").unwrap();
    assert_eq!(read("k"), Ok(None));
}

#[test]
fn load_json_tolerates_undecodable_values() {
    clear_all();
    write("k", "not json").unwrap();
    let loaded: Option<Vec<u32>> = load_json("k").unwrap();
    assert_eq!(loaded, None);
}

#[test]
fn save_json_then_load_json_roundtrips() {
    clear_all();
    save_json("nums", &vec![1u32, 2, 3]).unwrap();
    let loaded: Option<Vec<u32>> = load_json("nums").unwrap();
    assert_eq!(loaded, Some(vec![1, 2, 3]));
}
