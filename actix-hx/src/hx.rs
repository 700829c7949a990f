//! Typed constructors for the `hx-*` attribute vocabulary.
//!
//! Every constructor returns a [`Node::Attr`] that renders as `hx-<name>="<value>"`,
//! with the value escaped. The only exception is [`on`]/[`raw_attr`], which leave
//! inline scripts untouched.
//!
//! ```
//! use actix_hx::{el, hx};
//!
//! let button = el("button", [hx::post("/clicked"), hx::swap("outerHTML")]);
//! assert_eq!(
//!     button.to_string(),
//!     r#"<button hx-post="/clicked" hx-swap="outerHTML"></button>"#
//! );
//! ```

use serde::Serialize;

use crate::node::{Attribute, Node};

macro_rules! hx_attributes {
    ($($(#[$meta:meta])* $fn_name:ident => $name:literal;)*) => {
        $(
            $(#[$meta])*
            pub fn $fn_name(value: impl Into<String>) -> Node {
                Node::Attr(Attribute::new(concat!("hx-", $name), value))
            }
        )*
    };
}

hx_attributes! {
    /// Add or remove progressive enhancement for links and forms.
    /// See <https://htmx.org/attributes/hx-boost>
    boost => "boost";
    /// Issue a GET to the given URL.
    get => "get";
    /// Issue a POST to the given URL.
    post => "post";
    /// Issue a PUT to the given URL.
    put => "put";
    /// Issue a PATCH to the given URL.
    patch => "patch";
    /// Issue a DELETE to the given URL.
    delete => "delete";
    /// Push a URL into the browser location bar, creating a history entry.
    /// See <https://htmx.org/attributes/hx-push-url>
    push_url => "push-url";
    /// Pick the content to swap in from the response.
    select => "select";
    /// Pick content from the response to swap in somewhere other than the target.
    select_oob => "select-oob";
    /// How the response is swapped in. Accepts a [`SwapType`](crate::SwapType) too.
    /// See <https://htmx.org/attributes/hx-swap>
    swap => "swap";
    /// Mark response content as out of band.
    swap_oob => "swap-oob";
    /// The element the response is swapped into.
    target => "target";
    /// The event that triggers the request.
    /// See <https://htmx.org/attributes/hx-trigger>
    trigger => "trigger";
    /// Extra parameters to submit, JSON formatted. See also [`vals_json`].
    vals => "vals";
    /// Show a `confirm()` dialog before issuing the request.
    confirm => "confirm";
    /// Disable htmx processing for this node and its children.
    disable => "disable";
    /// Elements to disable while the request is in flight.
    disabled_elt => "disabled-elt";
    /// Stop attribute inheritance for child nodes.
    disinherit => "disinherit";
    /// Change the request encoding type.
    encoding => "encoding";
    /// Extensions to use for this element.
    ext => "ext";
    /// Extra request headers, JSON formatted.
    headers => "headers";
    /// Keep sensitive pages out of the history cache.
    history => "history";
    /// The element to snapshot and restore during history navigation.
    history_elt => "history-elt";
    include => "include";
    indicator => "indicator";
    params => "params";
    preserve => "preserve";
    /// Show a `prompt()` before the request. The answer arrives in `HX-Prompt`.
    prompt => "prompt";
    /// Replace the URL in the location bar without a new history entry.
    replace_url => "replace-url";
    request => "request";
    /// Synchronize requests between elements.
    /// See <https://htmx.org/attributes/hx-sync>
    sync => "sync";
    validate => "validate";
}

/// Handle `event` with an inline script, rendering `hx-on:<event>`.
///
/// Pass `":before-request"` to get the `hx-on::before-request` shorthand for htmx events.
/// The script is not escaped; see [`raw_attr`].
/// See <https://htmx.org/attributes/hx-on>
pub fn on(event: &str, script: impl Into<String>) -> Node {
    raw_attr(&format!(":{event}"), script)
}

/// Render `hx-on<event_suffix>="<script>"` with the script written verbatim.
///
/// `event_suffix` normally starts with a colon (`":click"`, `"::before-request"`).
/// The script must not contain `"`, since nothing stops it from closing the attribute.
pub fn raw_attr(event_suffix: &str, script: impl Into<String>) -> Node {
    Node::Attr(Attribute::raw(format!("hx-on{event_suffix}"), script))
}

/// Serialize `value` into an `hx-vals` attribute.
pub fn vals_json<T>(value: &T) -> serde_json::Result<Node>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).map(vals)
}
