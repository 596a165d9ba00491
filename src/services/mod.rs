pub mod interpreter;
pub mod prompt_composer;
pub mod provider_client;
pub mod retry;
pub mod tutor_service;
