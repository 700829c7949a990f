use actix_web::dev::Payload;
use actix_web::error::Error;
use actix_web::http::header::HeaderMap;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::headers;

/// The htmx request headers of the current request.
///
/// Use it as a handler argument; extraction never fails. Missing headers read
/// as `false` or an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Htmx {
    pub is_htmx: bool,
    pub boosted: bool,
    pub history_restore_request: bool,
    current_url: String,
    prompt: String,
    target: String,
    trigger: String,
    trigger_name: String,
}

impl Htmx {
    pub fn from_headers(headers: &HeaderMap) -> Htmx {
        Htmx {
            is_htmx: headers::is_request(headers),
            boosted: headers::is_boosted(headers),
            history_restore_request: headers::is_history_restore_request(headers),
            current_url: headers::get_current_url(headers),
            prompt: headers::get_prompt(headers),
            target: headers::get_target(headers),
            trigger: headers::get_trigger(headers),
            trigger_name: headers::get_trigger_name(headers),
        }
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn trigger_name(&self) -> &str {
        &self.trigger_name
    }
}

impl FromRequest for Htmx {
    type Error = Error;
    type Future = Ready<Result<Htmx, Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Htmx::from_headers(req.headers())))
    }
}
