use super::*;

#[test]
fn validate_login_input_trims_email_and_requires_both_fields() {
    let (email, password) = validate_login_input("  a@b.com ", "secret").unwrap();
    assert_eq!(email, "a@b.com");
    assert_eq!(password, "secret");

    assert_eq!(validate_login_input("   ", "secret"), Err("Email is required."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Password is required."));
}
