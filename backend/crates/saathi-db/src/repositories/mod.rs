pub mod identity_repository;
pub mod profile_repository;
pub mod verification_code_repository;
