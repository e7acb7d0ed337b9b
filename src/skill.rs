//! Intent dispatch for the trip skill.
//!
//! The platform adapter only talks to the [`Skill`] trait; [`TripSkill`] maps
//! each intent to trip API calls and turns the result into speech.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::{
    error::AppError,
    humanize::humanize,
    models::speech::{IntentRequest, SpeechResponse},
    services::{resolver::resolve_trip_id, trip_api::TripApi},
};

pub const TRIP_SLOT: &str = "Item";

pub const WELCOME: &str = "Welcome to the Trip Helper. You can ask a question like, what trips do I have? ... Now, what can I help you with.";
pub const WELCOME_REPROMPT: &str = "For instructions on what you can say, please say help me.";
pub const HELP: &str = "You can ask for your trip summary, ask when a trip is, like, when is my trip to Paris, or, you can say exit... Now, what can I help you with?";
pub const HELP_REPROMPT: &str = "You can say things like, give me my trip summary, or you can say exit... Now, what can I help you with?";
pub const WHICH_TRIP: &str = "Which trip do you mean?";
pub const WHICH_TRIP_REPROMPT: &str = "Please tell me the name of the trip.";
pub const GOODBYE: &str = "Goodbye";
pub const NO_TRIPS: &str = "You currently do not have any trips planned.";
pub const NO_SUCH_TRIP: &str = "Sorry, there is no trip by that name.";
pub const SUMMARY_ERROR: &str = "Sorry, there was an error getting your trips.";
pub const DETAIL_ERROR: &str = "Sorry, there was an error getting your trip details.";
pub const CANCEL_ERROR: &str = "Sorry, there was an error canceling your trip.";

/// Events a skill receives from the voice platform.
#[async_trait]
pub trait Skill: Send + Sync {
    async fn on_launch(&self) -> SpeechResponse;

    async fn on_intent(&self, intent: &IntentRequest) -> Result<SpeechResponse, AppError>;

    async fn on_session_ended(&self, reason: Option<&str>) {
        debug!(reason, "session ended");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripIntent {
    DeleteTrip,
    GetTripSummary,
    GetTripDetail,
    Stop,
    Cancel,
    Help,
}

impl TripIntent {
    pub fn from_name(name: &str) -> Option<Self> {
        let intent = match name {
            "DeleteTrip" => Self::DeleteTrip,
            "GetTripSummary" => Self::GetTripSummary,
            "GetTripDetail" => Self::GetTripDetail,
            "AMAZON.StopIntent" => Self::Stop,
            "AMAZON.CancelIntent" => Self::Cancel,
            "AMAZON.HelpIntent" => Self::Help,
            _ => return None,
        };
        Some(intent)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SkillOptions {
    /// When off, `DeleteTrip` only acknowledges and never calls the cancel endpoint.
    pub cancellation_enabled: bool,
}

pub struct TripSkill<A: ?Sized> {
    api: Arc<A>,
    options: SkillOptions,
}

impl<A: TripApi + ?Sized> TripSkill<A> {
    pub fn new(api: Arc<A>, options: SkillOptions) -> Self {
        Self { api, options }
    }

    async fn delete_trip(&self, name: &str) -> SpeechResponse {
        let confirmation = format!("Okay! your trip to {name} has been canceled.");
        if !self.options.cancellation_enabled {
            info!(trip = name, "cancellation disabled, acknowledging only");
            return SpeechResponse::tell(confirmation);
        }

        let trip_id = match resolve_trip_id(self.api.as_ref(), name).await {
            Ok(Some(trip_id)) => trip_id,
            Ok(None) => return SpeechResponse::tell(NO_SUCH_TRIP),
            Err(err) => {
                warn!(error = %err, trip = name, "could not resolve trip for cancellation");
                return SpeechResponse::tell(CANCEL_ERROR);
            }
        };

        match self.api.cancel_trip(&trip_id).await {
            Ok(ack) => {
                info!(trip_id = %trip_id, document = %ack.document, "trip canceled");
                SpeechResponse::tell(confirmation)
            }
            Err(err) => {
                warn!(error = %err, trip_id = %trip_id, "trip cancellation failed");
                SpeechResponse::tell(CANCEL_ERROR)
            }
        }
    }

    async fn trip_summary(&self) -> SpeechResponse {
        match self.api.list_trips().await {
            Ok(trips) if trips.is_empty() => SpeechResponse::tell(NO_TRIPS),
            Ok(trips) => {
                let names = trips
                    .iter()
                    .map(|trip| trip.name.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                SpeechResponse::tell(format!(
                    "This is your trip summary. You have a trip to: {names}"
                ))
            }
            Err(err) => {
                warn!(error = %err, "trip summary failed");
                SpeechResponse::tell(SUMMARY_ERROR)
            }
        }
    }

    async fn trip_detail(&self, name: &str) -> SpeechResponse {
        match self.describe_trip(name).await {
            Ok(Some(text)) => SpeechResponse::tell(text),
            Ok(None) => SpeechResponse::tell(NO_SUCH_TRIP),
            Err(err) => {
                warn!(error = %err, trip = name, "trip detail failed");
                SpeechResponse::tell(DETAIL_ERROR)
            }
        }
    }

    async fn describe_trip(&self, name: &str) -> Result<Option<String>, AppError> {
        let Some(trip_id) = resolve_trip_id(self.api.as_ref(), name).await? else {
            return Ok(None);
        };
        let detail = self.api.get_trip_detail(&trip_id).await?;
        let date = humanize(&detail.start_date)?;
        Ok(Some(format!("Your trip to {} is on {date}", detail.name)))
    }
}

#[async_trait]
impl<A: TripApi + ?Sized> Skill for TripSkill<A> {
    async fn on_launch(&self) -> SpeechResponse {
        SpeechResponse::ask(WELCOME, WELCOME_REPROMPT)
    }

    async fn on_intent(&self, intent: &IntentRequest) -> Result<SpeechResponse, AppError> {
        let kind = TripIntent::from_name(&intent.name)
            .ok_or_else(|| AppError::UnsupportedIntent(intent.name.clone()))?;
        debug!(intent = %intent.name, "dispatching intent");

        let trip_name = intent.slot(TRIP_SLOT);
        let response = match (kind, trip_name) {
            (TripIntent::DeleteTrip | TripIntent::GetTripDetail, None) => {
                SpeechResponse::ask(WHICH_TRIP, WHICH_TRIP_REPROMPT)
            }
            (TripIntent::DeleteTrip, Some(name)) => self.delete_trip(name).await,
            (TripIntent::GetTripDetail, Some(name)) => self.trip_detail(name).await,
            (TripIntent::GetTripSummary, _) => self.trip_summary().await,
            (TripIntent::Stop | TripIntent::Cancel, _) => SpeechResponse::tell(GOODBYE),
            (TripIntent::Help, _) => SpeechResponse::ask(HELP, HELP_REPROMPT),
        };
        Ok(response)
    }
}
