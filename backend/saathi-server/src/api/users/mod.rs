pub mod list_users_query;
pub mod profile_response;
pub mod search_users_query;
pub mod search_users_response;
pub mod set_admin_request;
pub mod update_profile_response;
pub mod users;
