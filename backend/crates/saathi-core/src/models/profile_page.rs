use crate::UserProfile;

use serde::{Deserialize, Serialize};

/// One page of profiles ordered by creation time, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePage {
    pub users: Vec<UserProfile>,
    /// uid of the last profile on this page, the cursor for the next one
    pub last_doc_id: Option<String>,
    /// True when the page came back full
    pub has_more: bool,
}

impl ProfilePage {
    pub fn new(users: Vec<UserProfile>, limit: usize) -> Self {
        let last_doc_id = users.last().map(|p| p.uid.clone());
        let has_more = users.len() == limit;
        Self {
            users,
            last_doc_id,
            has_more,
        }
    }
}
