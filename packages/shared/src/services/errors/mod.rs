pub mod profile_service_errors;
