pub mod clock;
pub mod errors;
pub mod profile_service;
