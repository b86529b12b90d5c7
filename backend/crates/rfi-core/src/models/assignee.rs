/// Borrowed view of the assignee fields on a create request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignee<'a> {
    Unassigned,
    User(&'a str),
    Group(&'a str),
    /// Both fields set. The request is still valid; the receiving service decides.
    UserAndGroup { user: &'a str, group: &'a str },
}

impl<'a> Assignee<'a> {
    pub fn from_parts(user: Option<&'a str>, group: Option<&'a str>) -> Self {
        match (user, group) {
            (None, None) => Self::Unassigned,
            (Some(user), None) => Self::User(user),
            (None, Some(group)) => Self::Group(group),
            (Some(user), Some(group)) => Self::UserAndGroup { user, group },
        }
    }

    pub fn is_assigned(&self) -> bool {
        !matches!(self, Self::Unassigned)
    }
}
