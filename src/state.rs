use std::sync::Arc;

use crate::{
    config::AppConfig,
    error::AppError,
    services::trip_api::TripApiClient,
    skill::{Skill, SkillOptions, TripSkill},
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub skill: Arc<dyn Skill>,
}

impl AppState {
    pub fn new(config: AppConfig, skill: Arc<dyn Skill>) -> Self {
        Self { config, skill }
    }

    /// Wires the trip skill against the real trip API described by `config`.
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let api = Arc::new(TripApiClient::new(&config)?);
        let skill = TripSkill::new(
            api,
            SkillOptions {
                cancellation_enabled: config.cancellation_enabled,
            },
        );
        Ok(Self::new(config, Arc::new(skill)))
    }
}
