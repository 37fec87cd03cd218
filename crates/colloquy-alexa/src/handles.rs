//! Handle-selection builders for the Alexa platform.
//!
//! Each builder returns a [`HandleOptions`] record that tells the router
//! when a handler should fire. All records are global, scoped to a single
//! request type and the `alexa` platform; the optional arguments tighten
//! the condition, `None` leaves the corresponding field unconstrained.

use colloquy_core::handle::HandleOptions;
use colloquy_core::request::PlatformRequest;

use crate::request::AlexaRequest;
use crate::types::{
    IspType, PLATFORM_ID, PermissionStatus, PermissionType, PurchaseResult, request_types, tasks,
};

/// Declarative handle-selection builders for Alexa requests.
pub struct AlexaHandles;

impl AlexaHandles {
    /// Select on a permission consent response (`Connections.Response` with
    /// task `AskFor`).
    ///
    /// Matches when the reported consent status equals `status`. When
    /// `permission` is given the reported consent scope must match it too.
    pub fn on_permission(
        status: PermissionStatus,
        permission: Option<PermissionType>,
    ) -> HandleOptions {
        let scope = permission.map(PermissionType::scope);
        HandleOptions::new()
            .global(true)
            .types([request_types::CONNECTIONS_RESPONSE])
            .platforms([PLATFORM_ID])
            .condition(move |request: &dyn PlatformRequest| {
                let Some(payload) = as_alexa(request)
                    .filter(|r| r.connection_name() == Some(tasks::ASK_FOR))
                    .and_then(AlexaRequest::payload)
                else {
                    return false;
                };
                payload.status.as_ref() == Some(&status)
                    && scope.is_none_or(|scope| payload.permission_scope.as_deref() == Some(scope))
            })
    }

    /// Select on an in-skill-purchase response (`Connections.Response` with
    /// an ISP task such as `Buy`, `Upsell` or `Cancel`).
    ///
    /// Matches when the connection task equals `isp_type`. When
    /// `purchase_result` is given the reported result must match it too.
    pub fn on_isp(isp_type: IspType, purchase_result: Option<PurchaseResult>) -> HandleOptions {
        HandleOptions::new()
            .global(true)
            .types([request_types::CONNECTIONS_RESPONSE])
            .platforms([PLATFORM_ID])
            .condition(move |request: &dyn PlatformRequest| {
                let Some(request) = as_alexa(request) else {
                    return false;
                };
                request.connection_name() == Some(isp_type.as_str())
                    && purchase_result.as_ref().is_none_or(|expected| {
                        request
                            .payload()
                            .and_then(|payload| payload.purchase_result.as_ref())
                            == Some(expected)
                    })
            })
    }

    /// Select on a dialog API invocation (`Dialog.API.Invoked`).
    ///
    /// When `name` is given only invocations of that API match; otherwise
    /// the request type alone selects and no condition is attached.
    pub fn on_dialog_api_invoked(name: Option<&str>) -> HandleOptions {
        let options = HandleOptions::new()
            .global(true)
            .types([request_types::DIALOG_API_INVOKED])
            .platforms([PLATFORM_ID]);
        let Some(name) = name else {
            return options;
        };
        let name = name.to_owned();
        options.condition(move |request: &dyn PlatformRequest| {
            as_alexa(request)
                .and_then(AlexaRequest::api_request)
                .and_then(|api| api.name.as_deref())
                == Some(name.as_str())
        })
    }
}

/// Recover the concrete Alexa request behind the router's trait object.
/// Requests from other platforms fail the downcast, so conditions built
/// here never match them.
fn as_alexa(request: &dyn PlatformRequest) -> Option<&AlexaRequest> {
    request.as_any().downcast_ref::<AlexaRequest>()
}
