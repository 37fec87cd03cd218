//! Alexa Platform Plugin for Colloquy
//!
//! The pieces the framework router needs to select handlers for Alexa
//! requests:
//! - Typed view of the request envelope (tolerant reader)
//! - Platform enums and wire constants
//! - Declarative handle-selection builders
//! - Plugin configuration and request acceptance

pub mod handles;
pub mod platform;
pub mod request;
pub mod types;

pub use handles::AlexaHandles;
pub use platform::{AlexaConfig, AlexaPlatform};
pub use request::AlexaRequest;
pub use types::{IspType, PLATFORM_ID, PermissionStatus, PermissionType, PurchaseResult};
