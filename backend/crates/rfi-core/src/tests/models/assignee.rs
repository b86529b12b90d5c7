use crate::Assignee;

#[test]
fn test_assignee_from_parts() {
    assert_eq!(Assignee::from_parts(None, None), Assignee::Unassigned);
    assert_eq!(Assignee::from_parts(Some("a"), None), Assignee::User("a"));
    assert_eq!(Assignee::from_parts(None, Some("g")), Assignee::Group("g"));
    assert_eq!(
        Assignee::from_parts(Some("a"), Some("g")),
        Assignee::UserAndGroup {
            user: "a",
            group: "g"
        }
    );
}

#[test]
fn test_assignee_is_assigned() {
    assert!(!Assignee::Unassigned.is_assigned());
    assert!(Assignee::User("a").is_assigned());
    assert!(Assignee::Group("g").is_assigned());
}
