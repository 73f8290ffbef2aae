use std::io::Write;

use fold_access::testing::{AccessError, AccessTarget, PolicyInterpreter, RequestIdentity};

const ARTICLES_POLICY: &str = r#"{
    "name": "articles",
    "permissions": [
        {"action": "read", "rule": {"type": "allow_any"}},
        {"action": "create", "rule": {"type": "is_admin_user"}},
        {"action": "update", "rule": {"type": "self_reference", "action": "create"}},
        {"action": "delete", "rule": {
            "type": "all",
            "rules": [
                {"type": "is_authenticated"},
                {"type": "any", "rules": [
                    {"type": "is_superuser"},
                    {"type": "not", "rule": {"type": "is_authenticated"}}
                ]}
            ]
        }},
        {"action": "__default__", "rule": {"type": "is_superuser"}}
    ]
}"#;

#[test]
fn test_interpret_full_policy_decisions() {
    let _ = env_logger::builder().is_test(true).try_init();
    let core = PolicyInterpreter::new().interpret_str(ARTICLES_POLICY).unwrap();
    assert_eq!(core.name(), "articles");

    let anonymous = RequestIdentity::anonymous();
    let staff = RequestIdentity::staff("staff_key");
    let admin = RequestIdentity::superuser("admin_key");

    // read is open
    assert!(core.can_read(&anonymous, None).unwrap());

    // create requires staff; update mirrors create through a self reference
    assert!(!core.can_create(&anonymous, None).unwrap());
    assert!(core.can_create(&staff, None).unwrap());
    assert!(core.can_update(&staff, None).unwrap());
    assert!(!core.can_update(&admin, None).unwrap());

    // delete: authenticated and superuser
    assert!(core.can_delete(&admin, None).unwrap());
    assert!(!core.can_delete(&staff, None).unwrap());

    // unlisted actions fall back to the default rule
    assert!(core.has_permission("export", &admin, None).unwrap());
    assert!(!core.has_permission("export", &staff, None).unwrap());
}

#[test]
fn test_interpret_keeps_document_order() {
    let _ = env_logger::builder().is_test(true).try_init();
    let core = PolicyInterpreter::new().interpret_str(ARTICLES_POLICY).unwrap();

    let names: Vec<&str> = core.permission_set().names().collect();
    assert_eq!(
        names,
        vec!["read", "create", "update", "delete", "__default__"]
    );
}

#[test]
fn test_interpret_file_round_trip() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ARTICLES_POLICY.as_bytes()).unwrap();

    let core = PolicyInterpreter::new()
        .interpret_file(file.path().to_str().unwrap())
        .unwrap();
    assert_eq!(core.name(), "articles");
}

#[test]
fn test_interpret_missing_file_is_invalid_policy() {
    let _ = env_logger::builder().is_test(true).try_init();
    let result = PolicyInterpreter::new().interpret_file("no_such_policy.json");
    assert!(matches!(result, Err(AccessError::InvalidPolicy(_))));
}

#[test]
fn test_interpret_rejects_malformed_json() {
    let _ = env_logger::builder().is_test(true).try_init();
    let result = PolicyInterpreter::new().interpret_str("{not json");
    assert!(matches!(result, Err(AccessError::InvalidPolicy(_))));
}

#[test]
fn test_interpret_rejects_unknown_rule_type() {
    let _ = env_logger::builder().is_test(true).try_init();
    let result = PolicyInterpreter::new().interpret_str(
        r#"{
            "name": "articles",
            "permissions": [
                {"action": "read", "rule": {"type": "is_wizard"}}
            ]
        }"#,
    );
    assert!(matches!(result, Err(AccessError::InvalidPolicy(_))));
}

#[test]
fn test_interpret_rejects_empty_policy_name() {
    let _ = env_logger::builder().is_test(true).try_init();
    let result = PolicyInterpreter::new().interpret_str(
        r#"{"name": "", "permissions": []}"#,
    );
    assert!(matches!(result, Err(AccessError::InvalidPolicy(_))));
}

#[test]
fn test_interpret_rejects_nested_unknown_self_reference() {
    let _ = env_logger::builder().is_test(true).try_init();
    let result = PolicyInterpreter::new().interpret_str(
        r#"{
            "name": "articles",
            "permissions": [
                {"action": "read", "rule": {
                    "type": "not",
                    "rule": {"type": "self_reference", "action": "missing"}
                }}
            ]
        }"#,
    );
    assert!(matches!(result, Err(AccessError::InvalidPolicy(_))));
}

#[test]
fn test_interpreted_core_allowed_delegates() {
    let _ = env_logger::builder().is_test(true).try_init();
    let core = PolicyInterpreter::new()
        .interpret_str(
            r#"{
                "name": "article_history",
                "permissions": [
                    {"action": "read", "rule": {"type": "is_admin_user"}},
                    {"action": "list", "rule": {"type": "core_allowed", "action": "read"}}
                ]
            }"#,
        )
        .unwrap();

    let staff = RequestIdentity::staff("staff_key");
    let user = RequestIdentity::authenticated("user_key");

    assert!(core.has_permission("list", &staff, None).unwrap());
    assert!(!core.has_permission("list", &user, None).unwrap());
}
