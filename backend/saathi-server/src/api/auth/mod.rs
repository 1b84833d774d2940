pub mod auth;
pub mod login_request;
pub mod message_response;
pub mod send_verification_response;
pub mod signup_response;
pub mod verify_email_request;
pub mod verify_email_response;
