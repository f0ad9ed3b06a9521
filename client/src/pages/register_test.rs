use super::*;

#[test]
fn validate_registration_trims_name_and_email() {
    let registration = validate_registration("  Ada  ", " ada@example.com ", "secret").unwrap();
    assert_eq!(
        registration,
        Registration { name: "Ada".to_owned(), email: "ada@example.com".to_owned(), password: "secret".to_owned() }
    );
}

#[test]
fn validate_registration_reports_first_problem() {
    assert_eq!(validate_registration(" ", "ada@example.com", "pw"), Err("Name is required"));
    assert_eq!(validate_registration("Ada", "ada.example.com", "pw"), Err("Invalid email address"));
    assert_eq!(validate_registration("Ada", "ada@example.com", ""), Err("Password must be at least 6 characters"));
}

#[test]
fn password_needs_six_characters() {
    assert_eq!(validate_registration("Ada", "ada@example.com", "12345"), Err("Password must be at least 6 characters"));
    assert!(validate_registration("Ada", "ada@example.com", "123456").is_ok());
    assert_eq!(validate_registration("Ada", "ada@example.com", "ééééé"), Err("Password must be at least 6 characters"));
}

#[test]
fn email_shape_requires_local_part_and_dotted_domain() {
    assert!(looks_like_email("a@b.co"));
    assert!(!looks_like_email("@b.co"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("a@.co"));
    assert!(!looks_like_email("a@b."));
    assert!(!looks_like_email("a b@c.de"));
    assert!(!looks_like_email("a@b@c.de"));
}

#[test]
fn email_shape_splits_domain_on_last_dot() {
    assert!(!looks_like_email("ada@example.com."));
    assert!(looks_like_email("ada@.example.com"));
    assert!(looks_like_email("ada@mail.example.co.uk"));
}
