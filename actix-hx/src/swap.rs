use serde::{Serialize, Serializer};
use std::fmt;

/// The swap strategies htmx understands, for `hx-swap`, `hx-swap-oob` and `HX-Reswap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapType {
    InnerHtml,
    OuterHtml,
    BeforeBegin,
    AfterBegin,
    BeforeEnd,
    AfterEnd,
    Delete,
    None,
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapType::InnerHtml => write!(f, "innerHTML"),
            SwapType::OuterHtml => write!(f, "outerHTML"),
            SwapType::BeforeBegin => write!(f, "beforebegin"),
            SwapType::AfterBegin => write!(f, "afterbegin"),
            SwapType::BeforeEnd => write!(f, "beforeend"),
            SwapType::AfterEnd => write!(f, "afterend"),
            SwapType::Delete => write!(f, "delete"),
            SwapType::None => write!(f, "none"),
        }
    }
}

impl From<SwapType> for String {
    fn from(swap: SwapType) -> Self {
        swap.to_string()
    }
}

/// Serializes as the htmx name, e.g. `"outerHTML"`.
impl Serialize for SwapType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_type_names() {
        assert_eq!(SwapType::InnerHtml.to_string(), "innerHTML");
        assert_eq!(SwapType::OuterHtml.to_string(), "outerHTML");
        assert_eq!(SwapType::BeforeEnd.to_string(), "beforeend");
        assert_eq!(String::from(SwapType::None), "none");
    }

    #[test]
    fn test_swap_type_serializes_as_name() {
        assert_eq!(serde_json::to_string(&SwapType::AfterEnd).unwrap(), r#""afterend""#);
    }
}
