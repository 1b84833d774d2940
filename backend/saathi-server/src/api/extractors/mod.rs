pub mod authenticated_caller;
pub mod json_body;
pub mod query_params;
