//! Voice platform request/response envelopes.
//!
//! Only the fields the skill reads or writes are modelled; everything else in
//! the platform payload is ignored on decode.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::speech::{IntentRequest, SpeechResponse};

#[derive(Debug, Clone, Deserialize)]
pub struct SkillRequest {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Option<Context>,
    pub request: RequestBody,
}

impl SkillRequest {
    /// Application id from the session, falling back to the request context.
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|session| session.application.as_ref())
            .or_else(|| {
                self.context
                    .as_ref()
                    .and_then(|context| context.system.as_ref())
                    .and_then(|system| system.application.as_ref())
            })
            .map(|application| application.application_id.as_str())
    }

    pub fn is_new_session(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.new)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: Option<SystemContext>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemContext {
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum RequestBody {
    #[serde(rename = "LaunchRequest", rename_all = "camelCase")]
    Launch {
        #[serde(default)]
        request_id: Option<String>,
    },
    #[serde(rename = "IntentRequest", rename_all = "camelCase")]
    Intent {
        #[serde(default)]
        request_id: Option<String>,
        intent: Intent,
    },
    #[serde(rename = "SessionEndedRequest", rename_all = "camelCase")]
    SessionEnded {
        #[serde(default)]
        request_id: Option<String>,
        #[serde(default)]
        reason: Option<String>,
    },
}

impl RequestBody {
    pub fn request_id(&self) -> Option<&str> {
        match self {
            RequestBody::Launch { request_id }
            | RequestBody::Intent { request_id, .. }
            | RequestBody::SessionEnded { request_id, .. } => request_id.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl From<Intent> for IntentRequest {
    fn from(intent: Intent) -> Self {
        let slots = intent
            .slots
            .into_iter()
            .filter_map(|(key, slot)| slot.value.map(|value| (key, value)))
            .collect();
        IntentRequest {
            name: intent.name,
            slots,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub version: &'static str,
    pub session_attributes: HashMap<String, serde_json::Value>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl OutputSpeech {
    fn plain(text: String) -> Self {
        Self {
            kind: "PlainText",
            text,
        }
    }
}

impl SkillResponse {
    /// Response for a session-ended notification, which carries no speech.
    pub fn empty() -> Self {
        Self {
            version: "1.0",
            session_attributes: HashMap::new(),
            response: ResponseBody {
                output_speech: None,
                reprompt: None,
                should_end_session: true,
            },
        }
    }
}

impl From<SpeechResponse> for SkillResponse {
    fn from(speech: SpeechResponse) -> Self {
        let should_end_session = speech.ends_session();
        let (text, reprompt) = match speech {
            SpeechResponse::Statement(text) => (text, None),
            SpeechResponse::Question { text, reprompt } => (text, Some(reprompt)),
        };
        let response = ResponseBody {
            output_speech: Some(OutputSpeech::plain(text)),
            reprompt: reprompt.map(|text| Reprompt {
                output_speech: OutputSpeech::plain(text),
            }),
            should_end_session,
        };
        Self {
            version: "1.0",
            session_attributes: HashMap::new(),
            response,
        }
    }
}
