use crate::AssignmentType;

use std::str::FromStr;

#[test]
fn test_assignment_type_from_str() {
    assert_eq!(AssignmentType::from_str("USER").unwrap(), AssignmentType::User);
    assert_eq!(
        AssignmentType::from_str("GROUP").unwrap(),
        AssignmentType::Group
    );
    assert!(AssignmentType::from_str("TEAM").is_err());
}

#[test]
fn test_assignment_type_display() {
    assert_eq!(AssignmentType::Group.to_string(), "GROUP");
}
