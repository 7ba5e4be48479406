pub mod errors;
#[cfg(any(test, feature = "test-util"))]
pub mod memory_profile_repository;
pub mod profile_repository;
