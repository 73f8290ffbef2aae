use fold_access::testing::{
    create_test_core, AccessError, Permission, PermissionsSet, RequestIdentity, DEFAULT_PERMISSION,
};

#[test]
fn test_lookup_miss_without_default_denies() {
    let _ = env_logger::builder().is_test(true).try_init();
    let core = create_test_core("records");
    let set = PermissionsSet::new();

    let subject = RequestIdentity::superuser("admin_key");
    let result = set.has_permission("read", &subject, &core, None);
    assert!(!result.unwrap());
}

#[test]
fn test_lookup_miss_falls_back_to_default() {
    let _ = env_logger::builder().is_test(true).try_init();
    let core = create_test_core("records");
    let set = PermissionsSet::from_entries([
        ("create", Permission::IsSuperuser),
        (DEFAULT_PERMISSION, Permission::AllowAny),
    ]);

    let subject = RequestIdentity::authenticated("user_key");

    // registered entry wins over the default
    assert!(!set.has_permission("create", &subject, &core, None).unwrap());
    // unregistered action falls back to the default
    assert!(set
        .has_permission("anything-else", &subject, &core, None)
        .unwrap());
}

#[test]
fn test_overwrite_changes_decision() {
    let _ = env_logger::builder().is_test(true).try_init();
    let core = create_test_core("records");
    let subject = RequestIdentity::authenticated("user_key");

    let mut set = PermissionsSet::new();
    set.set("read", Permission::IsSuperuser);
    assert!(!set.has_permission("read", &subject, &core, None).unwrap());

    set.set("read", Permission::AllowAny);
    assert!(set.has_permission("read", &subject, &core, None).unwrap());
}

#[test]
fn test_self_reference_outside_set_is_configuration_error() {
    let _ = env_logger::builder().is_test(true).try_init();
    let core = create_test_core("records");
    let subject = RequestIdentity::superuser("admin_key");

    let reference = Permission::self_reference("read");
    let result = reference.has_permission("read", &subject, &core, None);
    assert!(matches!(result, Err(AccessError::ImproperlyConfigured(_))));
}

#[test]
fn test_self_reference_matches_referenced_entry() {
    let _ = env_logger::builder().is_test(true).try_init();
    let core = create_test_core("records");
    let set = PermissionsSet::from_entries([
        ("x", Permission::IsSuperuser),
        ("y", Permission::self_reference("x")),
    ]);

    let subjects = [
        RequestIdentity::anonymous(),
        RequestIdentity::authenticated("user_key"),
        RequestIdentity::staff("staff_key"),
        RequestIdentity::superuser("admin_key"),
    ];

    for subject in subjects {
        assert_eq!(
            set.has_permission("y", &subject, &core, None).unwrap(),
            set.has_permission("x", &subject, &core, None).unwrap(),
        );
    }
}

#[test]
fn test_self_reference_nested_in_combinator_resolves_against_outer_set() {
    let _ = env_logger::builder().is_test(true).try_init();
    let core = create_test_core("records");
    let set = PermissionsSet::from_entries([
        ("x", Permission::IsSuperuser),
        (
            "y",
            Permission::and([Permission::AllowAny, Permission::self_reference("x")]),
        ),
        (
            "z",
            Permission::negate(Permission::self_reference("x")),
        ),
    ]);

    let admin = RequestIdentity::superuser("admin_key");
    let user = RequestIdentity::authenticated("user_key");

    assert!(set.has_permission("y", &admin, &core, None).unwrap());
    assert!(!set.has_permission("y", &user, &core, None).unwrap());
    assert!(!set.has_permission("z", &admin, &core, None).unwrap());
    assert!(set.has_permission("z", &user, &core, None).unwrap());
}

#[test]
fn test_delegated_self_reference_resolves_in_owning_set() {
    let _ = env_logger::builder().is_test(true).try_init();

    // the core's own set resolves its self-references, even when the check
    // started from a different set that shadows the referenced name
    let core = create_test_core("articles")
        .with_permission("read", Permission::IsSuperuser)
        .with_permission("ui_read", Permission::self_reference("read"));

    let view_set = PermissionsSet::from_entries([
        ("read", Permission::AllowAny),
        ("view", Permission::core_action_allowed("ui_read")),
    ]);

    let user = RequestIdentity::authenticated("user_key");
    let admin = RequestIdentity::superuser("admin_key");

    assert!(!view_set.has_permission("view", &user, &core, None).unwrap());
    assert!(view_set.has_permission("view", &admin, &core, None).unwrap());
}

#[test]
fn test_default_entry_receives_original_action_name() {
    let _ = env_logger::builder().is_test(true).try_init();
    let core = create_test_core("records");
    let subject = RequestIdentity::authenticated("user_key");

    // the default entry still sees the action that was asked for
    let set = PermissionsSet::from_entries([(
        DEFAULT_PERMISSION,
        Permission::custom(|action, _, _, _| action == "export"),
    )]);

    assert!(set.has_permission("export", &subject, &core, None).unwrap());
    assert!(!set.has_permission("import", &subject, &core, None).unwrap());
}
