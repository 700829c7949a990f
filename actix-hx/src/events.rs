use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{to_value, Value};

static NULL: Value = Value::Null;

/// Client-side events for the `HX-Trigger*` response headers.
///
/// Events keep their insertion order. When none of them carries a payload the
/// header value is the comma-separated list of names, otherwise a JSON object
/// mapping each name to its payload (`null` for events without one).
#[derive(Clone, Debug, Default)]
pub struct HxEvents {
    events: IndexMap<String, Option<Value>>,
}

impl HxEvents {
    pub fn new() -> Self {
        HxEvents::default()
    }

    pub fn event(mut self, name: impl Into<String>) -> Self {
        self.events.insert(name.into(), None);
        self
    }

    pub fn event_with(mut self, name: impl Into<String>, payload: Value) -> Self {
        self.events.insert(name.into(), Some(payload));
        self
    }

    /// Attach any serializable payload.
    pub fn event_json<T>(self, name: impl Into<String>, payload: &T) -> serde_json::Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let payload = to_value(payload)?;
        Ok(self.event_with(name, payload))
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn to_header_value(&self) -> serde_json::Result<String> {
        if self.events.values().all(Option::is_none) {
            return Ok(self.events.keys().cloned().collect::<Vec<_>>().join(","));
        }

        let object: IndexMap<&str, &Value> = self
            .events
            .iter()
            .map(|(name, payload)| (name.as_str(), payload.as_ref().unwrap_or(&NULL)))
            .collect();
        serde_json::to_string(&object)
    }
}
