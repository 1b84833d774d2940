use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    pub limit: Option<usize>,
    /// uid of the last profile on the previous page
    pub last_doc_id: Option<String>,
}
