use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::SwapType;

/// What the follow-up request of an `HX-Location` does to browser history.
#[derive(Clone, Debug, PartialEq, Eq)]
enum History {
    Push(String),
    NoPush,
}

impl Serialize for History {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            History::Push(path) => serializer.serialize_str(path),
            History::NoPush => serializer.serialize_bool(false),
        }
    }
}

/// The JSON form of `HX-Location`: an ajax navigation to `path` plus the
/// context htmx should use for it.
///
/// ```
/// use actix_hx::{HxLocation, SwapType};
///
/// let location = HxLocation::new("/inbox").target("#main").swap(SwapType::InnerHtml);
/// assert_eq!(
///     location.to_header_value().unwrap(),
///     r##"{"path":"/inbox","target":"#main","swap":"innerHTML"}"##
/// );
/// ```
///
/// Send it with [`set_location_with`](crate::headers::set_location_with).
#[derive(Clone, Debug, Serialize)]
pub struct HxLocation {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    handler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    swap: Option<SwapType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    select: Option<String>,
    #[serde(rename = "push", skip_serializing_if = "Option::is_none")]
    history: Option<History>,
    #[serde(skip_serializing_if = "Option::is_none")]
    replace: Option<String>,
}

impl HxLocation {
    pub fn new(path: impl Into<String>) -> Self {
        HxLocation {
            path: path.into(),
            source: None,
            event: None,
            handler: None,
            target: None,
            swap: None,
            values: None,
            headers: BTreeMap::new(),
            select: None,
            history: None,
            replace: None,
        }
    }

    pub fn source(self, selector: impl Into<String>) -> Self {
        HxLocation {
            source: Some(selector.into()),
            ..self
        }
    }

    pub fn event(self, event: impl Into<String>) -> Self {
        HxLocation {
            event: Some(event.into()),
            ..self
        }
    }

    /// Name of a client-side function that handles the response.
    pub fn handler(self, handler: impl Into<String>) -> Self {
        HxLocation {
            handler: Some(handler.into()),
            ..self
        }
    }

    pub fn target(self, selector: impl Into<String>) -> Self {
        HxLocation {
            target: Some(selector.into()),
            ..self
        }
    }

    pub fn swap(self, swap: SwapType) -> Self {
        HxLocation {
            swap: Some(swap),
            ..self
        }
    }

    /// Parameters submitted with the follow-up request.
    pub fn values(self, values: Value) -> Self {
        HxLocation {
            values: Some(values),
            ..self
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn select(self, selector: impl Into<String>) -> Self {
        HxLocation {
            select: Some(selector.into()),
            ..self
        }
    }

    /// Record `path` in history rather than `self.path`.
    pub fn push(self, path: impl Into<String>) -> Self {
        HxLocation {
            history: Some(History::Push(path.into())),
            ..self
        }
    }

    pub fn disable_push(self) -> Self {
        HxLocation {
            history: Some(History::NoPush),
            ..self
        }
    }

    pub fn replace(self, path: impl Into<String>) -> Self {
        HxLocation {
            replace: Some(path.into()),
            ..self
        }
    }

    pub fn to_header_value(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
