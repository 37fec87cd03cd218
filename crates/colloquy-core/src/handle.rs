//! Handle-selection metadata.
//!
//! Platform plugins build [`HandleOptions`] records declaratively; the
//! router reads them to decide whether a handler should fire for the
//! current request. Empty filter lists accept everything, so a default
//! record matches any request.

use std::fmt;
use std::sync::Arc;

use crate::request::PlatformRequest;

/// Predicate over the current request, evaluated by the router after the
/// type/platform filters pass.
pub type HandleCondition = Arc<dyn Fn(&dyn PlatformRequest) -> bool + Send + Sync>;

/// Declarative record controlling handler selection.
#[derive(Clone, Default)]
pub struct HandleOptions {
    /// Handler is reachable from any component state.
    pub global: bool,
    /// Platform request types the handler accepts.
    pub types: Vec<String>,
    /// Platform identifiers the handler accepts.
    pub platforms: Vec<String>,
    /// Component sub-state restriction.
    pub sub_state: Option<String>,
    /// Intent names the handler accepts.
    pub intents: Vec<String>,
    /// Wins against UNHANDLED fallbacks of more specific components.
    pub prioritized_over_unhandled: bool,
    /// Extra predicate; `None` means unconditional.
    pub condition: Option<HandleCondition>,
}

impl HandleOptions {
    /// Create an empty record. Nothing is restricted until a filter is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the handler as globally reachable.
    pub fn global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    /// Restrict to the given platform request types.
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to the given platform identifiers.
    pub fn platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = platforms.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to the given intent names.
    pub fn intents<I, S>(mut self, intents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.intents = intents.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to a component sub-state.
    pub fn sub_state(mut self, sub_state: impl Into<String>) -> Self {
        self.sub_state = Some(sub_state.into());
        self
    }

    /// Prioritize this handler over UNHANDLED fallbacks.
    pub fn prioritized_over_unhandled(mut self, prioritized: bool) -> Self {
        self.prioritized_over_unhandled = prioritized;
        self
    }

    /// Attach a predicate over the current request.
    pub fn condition<F>(mut self, condition: F) -> Self
    where
        F: Fn(&dyn PlatformRequest) -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Arc::new(condition));
        self
    }

    /// Evaluate the stored predicate. Vacuously `true` when none is set.
    pub fn condition_holds(&self, request: &dyn PlatformRequest) -> bool {
        self.condition.as_ref().is_none_or(|cond| cond(request))
    }

    /// Whether the record accepts the given request type. An empty type
    /// list accepts every type.
    pub fn accepts_type(&self, request_type: &str) -> bool {
        self.types.is_empty() || self.types.iter().any(|t| t == request_type)
    }

    /// Whether the record accepts the given platform. An empty platform
    /// list accepts every platform.
    pub fn accepts_platform(&self, platform: &str) -> bool {
        self.platforms.is_empty() || self.platforms.iter().any(|p| p == platform)
    }
}

impl fmt::Debug for HandleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandleOptions")
            .field("global", &self.global)
            .field("types", &self.types)
            .field("platforms", &self.platforms)
            .field("sub_state", &self.sub_state)
            .field("intents", &self.intents)
            .field("prioritized_over_unhandled", &self.prioritized_over_unhandled)
            .field("condition", &self.condition.as_ref().map(|_| "<condition>"))
            .finish()
    }
}
