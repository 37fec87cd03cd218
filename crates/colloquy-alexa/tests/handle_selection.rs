//! End-to-end handle selection over full request envelopes.
//!
//! Mimics what the router does: parse the envelope, check the record's
//! type/platform filters, then evaluate the condition.

use colloquy_alexa::{
    AlexaHandles, AlexaRequest, IspType, PermissionStatus, PermissionType, PurchaseResult,
};
use colloquy_core::handle::HandleOptions;
use colloquy_core::request::PlatformRequest;

const PERMISSION_ACCEPTED: &str = r#"{
    "version": "1.0",
    "session": {
        "sessionId": "amzn1.echo-api.session.9a3f",
        "new": false,
        "application": {"applicationId": "amzn1.ask.skill.radio"}
    },
    "context": {
        "System": {
            "application": {"applicationId": "amzn1.ask.skill.radio"},
            "apiEndpoint": "https://api.eu.amazonalexa.com",
            "apiAccessToken": "AxThk0a"
        }
    },
    "request": {
        "type": "Connections.Response",
        "requestId": "amzn1.echo-api.request.77c1",
        "timestamp": "2024-03-18T09:12:44Z",
        "locale": "en-GB",
        "name": "AskFor",
        "status": {"code": "200", "message": "OK"},
        "payload": {
            "status": "ACCEPTED",
            "permissionScope": "alexa::alerts:timers:skill:readwrite"
        }
    }
}"#;

const ISP_BUY_ACCEPTED: &str = r#"{
    "version": "1.0",
    "request": {
        "type": "Connections.Response",
        "requestId": "amzn1.echo-api.request.18aa",
        "locale": "en-US",
        "name": "Buy",
        "status": {"code": "200", "message": "OK"},
        "payload": {
            "purchaseResult": "ACCEPTED",
            "productId": "amzn1.adg.product.premium"
        }
    }
}"#;

const DIALOG_API_INVOKED: &str = r#"{
    "version": "1.0",
    "request": {
        "type": "Dialog.API.Invoked",
        "requestId": "amzn1.echo-api.request.4b02",
        "locale": "en-US",
        "apiRequest": {
            "name": "CheckWeather",
            "arguments": {"city": "Seattle"},
            "slots": {}
        }
    }
}"#;

/// Router-style selection: filters first, then the condition.
fn selects(options: &HandleOptions, request: &AlexaRequest) -> bool {
    options
        .types
        .iter()
        .any(|t| Some(t.as_str()) == request.request_type())
        && options.accepts_platform(request.platform())
        && options.condition_holds(request)
}

#[test]
fn permission_handle_selects_accepted_consent() {
    let request = AlexaRequest::from_json_str(PERMISSION_ACCEPTED).unwrap();

    let accepted = AlexaHandles::on_permission(PermissionStatus::Accepted, None);
    let denied = AlexaHandles::on_permission(PermissionStatus::Denied, None);
    assert!(selects(&accepted, &request));
    assert!(!selects(&denied, &request));
}

#[test]
fn permission_handle_scope_refinement_over_full_envelope() {
    let request = AlexaRequest::from_json_str(PERMISSION_ACCEPTED).unwrap();

    let timers =
        AlexaHandles::on_permission(PermissionStatus::Accepted, Some(PermissionType::Timers));
    let reminders =
        AlexaHandles::on_permission(PermissionStatus::Accepted, Some(PermissionType::Reminders));
    assert!(selects(&timers, &request));
    assert!(!selects(&reminders, &request));
}

#[test]
fn permission_handle_ignores_isp_responses() {
    let request = AlexaRequest::from_json_str(ISP_BUY_ACCEPTED).unwrap();
    let options = AlexaHandles::on_permission(PermissionStatus::Accepted, None);
    assert!(!selects(&options, &request));
}

#[test]
fn isp_handle_selects_matching_task_and_result() {
    let request = AlexaRequest::from_json_str(ISP_BUY_ACCEPTED).unwrap();

    assert!(selects(&AlexaHandles::on_isp(IspType::Buy, None), &request));
    assert!(selects(
        &AlexaHandles::on_isp(IspType::Buy, Some(PurchaseResult::Accepted)),
        &request
    ));
    assert!(!selects(
        &AlexaHandles::on_isp(IspType::Buy, Some(PurchaseResult::AlreadyPurchased)),
        &request
    ));
    assert!(!selects(&AlexaHandles::on_isp(IspType::Upsell, None), &request));
}

#[test]
fn dialog_api_handle_selects_by_type_and_name() {
    let request = AlexaRequest::from_json_str(DIALOG_API_INVOKED).unwrap();

    assert!(selects(&AlexaHandles::on_dialog_api_invoked(None), &request));
    assert!(selects(
        &AlexaHandles::on_dialog_api_invoked(Some("CheckWeather")),
        &request
    ));
    assert!(!selects(
        &AlexaHandles::on_dialog_api_invoked(Some("BookRide")),
        &request
    ));
}

#[test]
fn dialog_api_handle_rejects_other_request_types() {
    let request = AlexaRequest::from_json_str(PERMISSION_ACCEPTED).unwrap();
    let options = AlexaHandles::on_dialog_api_invoked(None);
    assert!(!selects(&options, &request));
}

#[test]
fn envelope_accessors_feed_routing_glue() {
    let request = AlexaRequest::from_json_str(PERMISSION_ACCEPTED).unwrap();
    assert_eq!(request.platform(), "alexa");
    assert_eq!(request.session_id(), Some("amzn1.echo-api.session.9a3f"));
    assert_eq!(request.locale(), Some("en-GB"));
    assert_eq!(request.application_id(), Some("amzn1.ask.skill.radio"));
    assert_eq!(request.api_access_token(), Some("AxThk0a"));
}

#[test]
fn unknown_purchase_result_still_parses_and_never_matches_known_results() {
    let raw = r#"{
        "request": {
            "type": "Connections.Response",
            "name": "Buy",
            "payload": {"purchaseResult": "PENDING_PURCHASE"}
        }
    }"#;
    let request = AlexaRequest::from_json_str(raw).unwrap();

    assert!(!selects(
        &AlexaHandles::on_isp(IspType::Buy, Some(PurchaseResult::Accepted)),
        &request
    ));
    assert!(selects(
        &AlexaHandles::on_isp(IspType::Buy, Some(PurchaseResult::from("PENDING_PURCHASE"))),
        &request
    ));
    assert!(selects(&AlexaHandles::on_isp(IspType::Buy, None), &request));
}
