use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchUsersQuery {
    #[serde(default)]
    pub email: String,
}
