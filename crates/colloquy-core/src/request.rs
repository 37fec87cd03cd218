//! Platform request abstraction.
//!
//! The router only sees requests through this trait. Platform plugins
//! downcast via [`PlatformRequest::as_any`] when a handle condition needs
//! platform-specific fields.

use std::any::Any;
use std::fmt::Debug;

/// The framework's view of an incoming platform request.
pub trait PlatformRequest: Debug + Send + Sync {
    /// Platform identifier (e.g. `"alexa"`).
    fn platform(&self) -> &str;

    /// Platform request type string (e.g. `"Connections.Response"`).
    fn request_type(&self) -> Option<&str>;

    /// Downcast hook for platform-specific handle conditions.
    fn as_any(&self) -> &dyn Any;

    /// Intent name, for platforms with intent-based routing.
    fn intent_name(&self) -> Option<&str> {
        None
    }

    /// Session identifier, when the platform carries one.
    fn session_id(&self) -> Option<&str> {
        None
    }

    /// Request locale (e.g. `"en-US"`).
    fn locale(&self) -> Option<&str> {
        None
    }
}
