use std::sync::Arc;

use crate::{
    config::Config,
    services::{provider_client::HttpCompletionClient, tutor_service::TutorService},
};

#[derive(Clone)]
pub struct AppState {
    pub tutor_service: Arc<TutorService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let provider = Arc::new(HttpCompletionClient::new(&config));
        let tutor_service = Arc::new(TutorService::new(provider, &config));

        Self {
            tutor_service,
            config: Arc::new(config),
        }
    }
}
