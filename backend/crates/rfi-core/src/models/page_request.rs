use serde::{Deserialize, Serialize};

/// Paging query sent to the listing endpoints (`?page=&size=&sort=`).
///
/// Pages are zero-based. Unset fields are left to the service's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// `property[,asc|desc]`, e.g. "createdAt,desc"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl PageRequest {
    pub fn is_default(&self) -> bool {
        self.page.is_none() && self.size.is_none() && self.sort.is_none()
    }
}
