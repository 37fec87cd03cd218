//! Platform enums and wire constants for the Alexa plugin.
//!
//! Enums that appear on the wire keep unknown strings instead of failing
//! deserialization, so new Alexa values degrade to `Other` rather than
//! breaking request parsing.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Platform identifier used in handle metadata.
pub const PLATFORM_ID: &str = "alexa";

/// Request type strings from the Alexa request envelope.
pub mod request_types {
    /// `Connections.Response`
    pub const CONNECTIONS_RESPONSE: &str = "Connections.Response";

    /// `Dialog.API.Invoked`
    pub const DIALOG_API_INVOKED: &str = "Dialog.API.Invoked";

    /// `LaunchRequest`
    pub const LAUNCH_REQUEST: &str = "LaunchRequest";

    /// `IntentRequest`
    pub const INTENT_REQUEST: &str = "IntentRequest";

    /// `SessionEndedRequest`
    pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";
}

/// Connection task names carried in `request.name`.
pub mod tasks {
    /// Permission consent response task.
    pub const ASK_FOR: &str = "AskFor";
}

/// Status of a permission consent response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionStatus {
    Accepted,
    Denied,
    NotAnswered,
    /// Statuses this version does not know about.
    Other(String),
}

impl PermissionStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Accepted => "ACCEPTED",
            Self::Denied => "DENIED",
            Self::NotAnswered => "NOT_ANSWERED",
            Self::Other(status) => status,
        }
    }
}

impl From<&str> for PermissionStatus {
    fn from(status: &str) -> Self {
        match status {
            "ACCEPTED" => Self::Accepted,
            "DENIED" => Self::Denied,
            "NOT_ANSWERED" => Self::NotAnswered,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PermissionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PermissionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let status = String::deserialize(deserializer)?;
        Ok(Self::from(status.as_str()))
    }
}

/// Permission kind a skill can ask consent for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionType {
    Timers,
    Reminders,
}

impl PermissionType {
    /// The consent scope string reported back in
    /// `request.payload.permissionScope`.
    pub fn scope(self) -> &'static str {
        match self {
            Self::Timers => "alexa::alerts:timers:skill:readwrite",
            Self::Reminders => "alexa::alerts:reminders:skill:readwrite",
        }
    }
}

/// In-skill-purchase connection task.
///
/// `Other` admits task names beyond the three standard ISP flows, matching
/// the free-form task strings Alexa allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IspType {
    Upsell,
    Buy,
    Cancel,
    Other(String),
}

impl IspType {
    /// The connection task name compared against `request.name`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Upsell => "Upsell",
            Self::Buy => "Buy",
            Self::Cancel => "Cancel",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for IspType {
    fn from(name: &str) -> Self {
        match name {
            "Upsell" => Self::Upsell,
            "Buy" => Self::Buy,
            "Cancel" => Self::Cancel,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for IspType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an in-skill-purchase flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseResult {
    Accepted,
    Declined,
    AlreadyPurchased,
    Error,
    /// Results this version does not know about.
    Other(String),
}

impl PurchaseResult {
    /// Wire representation of the result.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Accepted => "ACCEPTED",
            Self::Declined => "DECLINED",
            Self::AlreadyPurchased => "ALREADY_PURCHASED",
            Self::Error => "ERROR",
            Self::Other(result) => result,
        }
    }
}

impl From<&str> for PurchaseResult {
    fn from(result: &str) -> Self {
        match result {
            "ACCEPTED" => Self::Accepted,
            "DECLINED" => Self::Declined,
            "ALREADY_PURCHASED" => Self::AlreadyPurchased,
            "ERROR" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PurchaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PurchaseResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PurchaseResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let result = String::deserialize(deserializer)?;
        Ok(Self::from(result.as_str()))
    }
}
