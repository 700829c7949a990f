//! Reading htmx request headers and writing htmx response headers.
//!
//! All functions work on an actix-web [`HeaderMap`], so they can be used with
//! `req.headers()` on the way in and `res.headers_mut()` on the way out.
//! See <https://htmx.org/reference/#headers>

use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use log::warn;

use crate::events::HxEvents;
use crate::location::HxLocation;

pub struct RequestHeaders;
pub struct ResponseHeaders;

impl RequestHeaders {
    pub const HX_REQUEST: &'static str = "hx-request";
    pub const HX_BOOSTED: &'static str = "hx-boosted";
    pub const HX_CURRENT_URL: &'static str = "hx-current-url";
    pub const HX_HISTORY_RESTORE_REQUEST: &'static str = "hx-history-restore-request";
    pub const HX_PROMPT: &'static str = "hx-prompt";
    pub const HX_TARGET: &'static str = "hx-target";
    pub const HX_TRIGGER: &'static str = "hx-trigger";
    pub const HX_TRIGGER_NAME: &'static str = "hx-trigger-name";
}

impl ResponseHeaders {
    pub const HX_PUSH_URL: &'static str = "hx-push-url";
    pub const HX_LOCATION: &'static str = "hx-location";
    pub const HX_REDIRECT: &'static str = "hx-redirect";
    pub const HX_REFRESH: &'static str = "hx-refresh";
    pub const HX_TRIGGER: &'static str = "hx-trigger";
    pub const HX_TRIGGER_AFTER_SETTLE: &'static str = "hx-trigger-after-settle";
    pub const HX_TRIGGER_AFTER_SWAP: &'static str = "hx-trigger-after-swap";
    pub const HX_RESWAP: &'static str = "hx-reswap";
    pub const HX_RETARGET: &'static str = "hx-retarget";
    pub const HX_RESELECT: &'static str = "hx-reselect";
    pub const HX_REPLACE_URL: &'static str = "hx-replace-url";
}

/// The request came from an element using `hx-boost`.
///
/// Unlike the other flags this only checks that the header is non-empty, so
/// `HX-Boosted: false` still counts as boosted.
pub fn is_boosted(headers: &HeaderMap) -> bool {
    !get_string(headers, RequestHeaders::HX_BOOSTED).is_empty()
}

/// The browser URL at the time of the request.
pub fn get_current_url(headers: &HeaderMap) -> String {
    get_string(headers, RequestHeaders::HX_CURRENT_URL)
}

/// The request restores history after a miss in the local history cache.
pub fn is_history_restore_request(headers: &HeaderMap) -> bool {
    get_bool(headers, RequestHeaders::HX_HISTORY_RESTORE_REQUEST)
}

/// The user's answer to an `hx-prompt`.
pub fn get_prompt(headers: &HeaderMap) -> String {
    get_string(headers, RequestHeaders::HX_PROMPT)
}

/// The request was made by htmx.
pub fn is_request(headers: &HeaderMap) -> bool {
    get_bool(headers, RequestHeaders::HX_REQUEST)
}

/// The id of the target element, if it has one.
pub fn get_target(headers: &HeaderMap) -> String {
    get_string(headers, RequestHeaders::HX_TARGET)
}

/// The name of the triggering element, if it has one.
pub fn get_trigger_name(headers: &HeaderMap) -> String {
    get_string(headers, RequestHeaders::HX_TRIGGER_NAME)
}

/// The id of the triggering element, if it has one.
pub fn get_trigger(headers: &HeaderMap) -> String {
    get_string(headers, RequestHeaders::HX_TRIGGER)
}

/// Client-side redirect without a full page reload.
/// See <https://htmx.org/headers/hx-location>
pub fn set_location(headers: &mut HeaderMap, value: &str) {
    set(headers, ResponseHeaders::HX_LOCATION, value);
}

/// Like [`set_location`], with the JSON form built by [`HxLocation`].
pub fn set_location_with(
    headers: &mut HeaderMap,
    location: &HxLocation,
) -> serde_json::Result<()> {
    let value = location.to_header_value()?;
    set_location(headers, &value);
    Ok(())
}

/// Push a new URL into the history stack.
/// See <https://htmx.org/headers/hx-push-url>
pub fn set_push_url(headers: &mut HeaderMap, value: &str) {
    set(headers, ResponseHeaders::HX_PUSH_URL, value);
}

/// Client-side redirect to a new location, with a full page load.
pub fn set_redirect(headers: &mut HeaderMap, value: &str) {
    set(headers, ResponseHeaders::HX_REDIRECT, value);
}

/// Make the client do a full refresh of the page.
pub fn set_refresh(headers: &mut HeaderMap) {
    set(headers, ResponseHeaders::HX_REFRESH, "true");
}

/// Replace the current URL in the location bar.
/// See <https://htmx.org/headers/hx-replace-url>
pub fn set_replace_url(headers: &mut HeaderMap, value: &str) {
    set(headers, ResponseHeaders::HX_REPLACE_URL, value);
}

/// Override how the response is swapped in.
pub fn set_reswap(headers: &mut HeaderMap, value: &str) {
    set(headers, ResponseHeaders::HX_RESWAP, value);
}

/// A CSS selector that moves the swap to a different element.
pub fn set_retarget(headers: &mut HeaderMap, value: &str) {
    set(headers, ResponseHeaders::HX_RETARGET, value);
}

/// A CSS selector choosing which part of the response is swapped in.
pub fn set_reselect(headers: &mut HeaderMap, value: &str) {
    set(headers, ResponseHeaders::HX_RESELECT, value);
}

/// Trigger client-side events as soon as the response arrives.
/// See <https://htmx.org/headers/hx-trigger>
pub fn set_trigger(headers: &mut HeaderMap, value: &str) {
    set(headers, ResponseHeaders::HX_TRIGGER, value);
}

/// Trigger client-side events after the settle step.
pub fn set_trigger_after_settle(headers: &mut HeaderMap, value: &str) {
    set(headers, ResponseHeaders::HX_TRIGGER_AFTER_SETTLE, value);
}

/// Trigger client-side events after the swap step.
pub fn set_trigger_after_swap(headers: &mut HeaderMap, value: &str) {
    set(headers, ResponseHeaders::HX_TRIGGER_AFTER_SWAP, value);
}

pub fn set_trigger_events(headers: &mut HeaderMap, events: &HxEvents) -> serde_json::Result<()> {
    set_events(headers, ResponseHeaders::HX_TRIGGER, events)
}

pub fn set_trigger_after_settle_events(
    headers: &mut HeaderMap,
    events: &HxEvents,
) -> serde_json::Result<()> {
    set_events(headers, ResponseHeaders::HX_TRIGGER_AFTER_SETTLE, events)
}

pub fn set_trigger_after_swap_events(
    headers: &mut HeaderMap,
    events: &HxEvents,
) -> serde_json::Result<()> {
    set_events(headers, ResponseHeaders::HX_TRIGGER_AFTER_SWAP, events)
}

fn set_events(
    headers: &mut HeaderMap,
    name: &'static str,
    events: &HxEvents,
) -> serde_json::Result<()> {
    if events.is_empty() {
        return Ok(());
    }
    let value = events.to_header_value()?;
    set(headers, name, &value);
    Ok(())
}

fn get_bool(headers: &HeaderMap, name: &'static str) -> bool {
    get_string(headers, name) == "true"
}

fn get_string(headers: &HeaderMap, name: &'static str) -> String {
    headers
        .get(name)
        .map(|value| decode(value.as_bytes()))
        .unwrap_or_default()
}

/// UTF-8 when the bytes allow it, otherwise ISO-8859-1 as older clients send it.
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(value) => value.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

fn set(headers: &mut HeaderMap, name: &'static str, value: &str) {
    let value = match HeaderValue::from_str(value) {
        Ok(value) => Ok(value),
        Err(_) => {
            warn!("Replacing control characters in {} header value: {:?}", name, value);
            HeaderValue::from_str(&sanitize(value))
        }
    };

    match value {
        Ok(value) => {
            headers.insert(HeaderName::from_static(name), value);
        }
        Err(_) => {
            warn!("Failed to parse {} header value, removing it", name);
            headers.remove(name);
        }
    }
}

fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| if c != '\t' && c.is_ascii_control() { ' ' } else { c })
        .collect()
}
