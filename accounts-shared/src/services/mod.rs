pub mod cognito_services;
pub mod secrets_services;
