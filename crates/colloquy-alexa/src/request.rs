//! Typed view of the Alexa request envelope.
//!
//! Tolerant reader: every nested object is optional, unknown fields are
//! ignored, and unknown enum strings are preserved. Handle conditions and
//! routing glue read whatever is present; absent nesting never panics.

use std::any::Any;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use colloquy_core::error::Result;
use colloquy_core::request::PlatformRequest;

use crate::types::{PLATFORM_ID, PermissionStatus, PurchaseResult};

/// The slice of the Alexa request envelope that handle selection inspects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlexaRequest {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Option<Context>,
    #[serde(default)]
    pub request: Option<RequestObject>,
}

/// Skill session metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub application: Option<Application>,
}

/// Request context. Alexa capitalises the `System` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default, rename = "System")]
    pub system: Option<System>,
}

/// System context: skill identity and API access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub api_endpoint: Option<String>,
    #[serde(default)]
    pub api_access_token: Option<String>,
}

/// Skill application identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    pub application_id: Option<String>,
}

/// The `request` object inside the envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestObject {
    /// Request type string, e.g. `Connections.Response`.
    #[serde(default, rename = "type")]
    pub request_type: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<Intent>,
    /// Connection task name on `Connections.Response` (e.g. `AskFor`, `Buy`).
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<ConnectionStatus>,
    #[serde(default)]
    pub payload: Option<Payload>,
    #[serde(default)]
    pub api_request: Option<ApiRequest>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Resolved intent on `IntentRequest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub confirmation_status: Option<String>,
    #[serde(default)]
    pub slots: HashMap<String, Value>,
}

/// HTTP-style status on `Connections.Response`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatus {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `Connections.Response` payload fields handle selection reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(default)]
    pub status: Option<PermissionStatus>,
    #[serde(default)]
    pub permission_scope: Option<String>,
    #[serde(default)]
    pub purchase_result: Option<PurchaseResult>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// API request on `Dialog.API.Invoked`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub arguments: HashMap<String, Value>,
    #[serde(default)]
    pub slots: HashMap<String, Value>,
}

impl AlexaRequest {
    /// Parse an envelope from raw JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse an envelope from an already-decoded JSON value.
    pub fn from_value(raw: Value) -> Result<Self> {
        Ok(serde_json::from_value(raw)?)
    }

    /// The `request` object, when present.
    pub fn request_object(&self) -> Option<&RequestObject> {
        self.request.as_ref()
    }

    /// Request type string, e.g. `Connections.Response`.
    pub fn request_type(&self) -> Option<&str> {
        self.request.as_ref()?.request_type.as_deref()
    }

    /// Intent name on `IntentRequest`.
    pub fn intent_name(&self) -> Option<&str> {
        self.request.as_ref()?.intent.as_ref()?.name.as_deref()
    }

    /// Skill session identifier.
    pub fn session_id(&self) -> Option<&str> {
        self.session.as_ref()?.session_id.as_deref()
    }

    /// Whether this request opened a new session.
    pub fn is_new_session(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.new)
    }

    /// Request locale, e.g. `en-US`.
    pub fn locale(&self) -> Option<&str> {
        self.request.as_ref()?.locale.as_deref()
    }

    /// Skill id the request was sent to.
    pub fn application_id(&self) -> Option<&str> {
        self.context
            .as_ref()?
            .system
            .as_ref()?
            .application
            .as_ref()?
            .application_id
            .as_deref()
    }

    /// Token for the Alexa API on behalf of the current user.
    pub fn api_access_token(&self) -> Option<&str> {
        self.context.as_ref()?.system.as_ref()?.api_access_token.as_deref()
    }

    /// Connection task name on `Connections.Response`.
    pub fn connection_name(&self) -> Option<&str> {
        self.request.as_ref()?.name.as_deref()
    }

    /// `Connections.Response` payload, when present.
    pub fn payload(&self) -> Option<&Payload> {
        self.request.as_ref()?.payload.as_ref()
    }

    /// API request on `Dialog.API.Invoked`, when present.
    pub fn api_request(&self) -> Option<&ApiRequest> {
        self.request.as_ref()?.api_request.as_ref()
    }
}

impl PlatformRequest for AlexaRequest {
    fn platform(&self) -> &str {
        PLATFORM_ID
    }

    fn request_type(&self) -> Option<&str> {
        AlexaRequest::request_type(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn intent_name(&self) -> Option<&str> {
        AlexaRequest::intent_name(self)
    }

    fn session_id(&self) -> Option<&str> {
        AlexaRequest::session_id(self)
    }

    fn locale(&self) -> Option<&str> {
        AlexaRequest::locale(self)
    }
}
