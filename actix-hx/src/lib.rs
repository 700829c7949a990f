//! # actix-hx
//!
//! `actix-hx` gives you typed constructors for htmx `hx-*` attributes and helpers for the
//! `HX-*` request and response headers, for use with Actix Web.
//!
//! ## Features
//!
//! - **Attributes**: one function per htmx attribute in [`hx`], producing nodes for a small
//!   HTML tree ([`Node`]) that renders with escaping
//! - **Inline handlers**: [`hx::on`] for `hx-on:*` attributes, written without escaping
//! - **Request headers**: [`headers::is_request`], [`headers::is_boosted`],
//!   [`headers::get_target`] and friends, or the [`Htmx`] extractor
//! - **Response headers**: [`headers::set_push_url`], [`headers::set_refresh`], etc.,
//!   plus JSON builders for `HX-Location` ([`HxLocation`]) and `HX-Trigger` ([`HxEvents`])
//! - **Responses**: a [`Node`] is an Actix Web `Responder`
//!
//! # Getting Started
//!
//! ```no_run
//! use actix_hx::{el, headers, hx, text, Htmx};
//! use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     HttpServer::new(|| App::new().route("/", web::post().to(clicked)))
//!         .bind("127.0.0.1:8080")?
//!         .run()
//!         .await
//! }
//!
//! async fn clicked(req: HttpRequest, htmx: Htmx) -> HttpResponse {
//!     let button = el("button", [hx::post("/"), hx::swap("outerHTML"), text("Clicked")]);
//!     let mut res = button.respond_to(&req);
//!     if htmx.is_htmx {
//!         headers::set_push_url(res.headers_mut(), "/clicked");
//!     }
//!     res
//! }
//! ```

pub mod headers;
pub mod hx;

mod events;
mod htmx;
mod location;
mod node;
mod responder;
mod swap;

pub use self::{
    events::HxEvents,
    htmx::Htmx,
    location::HxLocation,
    node::{attr, doctype, el, raw, text, Attribute, Element, Node},
    swap::SwapType,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::{RequestHeaders, ResponseHeaders};
    use actix_web::http::header::{HeaderName, HeaderValue};
    use actix_web::{
        body::to_bytes,
        test::{self, TestRequest},
        web, App, HttpRequest, HttpResponse, Responder,
    };

    #[actix_web::test]
    async fn test_htmx_request_detection() {
        let app = test::init_service(App::new().route(
            "/test",
            web::get().to(|htmx: Htmx| async move {
                assert!(htmx.is_htmx);
                assert!(!htmx.boosted);
                assert!(!htmx.history_restore_request);
                HttpResponse::Ok().finish()
            }),
        ))
        .await;

        let req = TestRequest::get()
            .uri("/test")
            .insert_header((HeaderName::from_static(RequestHeaders::HX_REQUEST), "true"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_non_htmx_request() {
        let app = test::init_service(App::new().route(
            "/test",
            web::get().to(|htmx: Htmx| async move {
                assert_eq!(htmx, Htmx::default());
                HttpResponse::Ok().finish()
            }),
        ))
        .await;

        let req = TestRequest::get().uri("/test").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_boosted_request_with_false_value() {
        let app = test::init_service(App::new().route(
            "/test",
            web::get().to(|htmx: Htmx| async move {
                assert!(htmx.boosted);
                HttpResponse::Ok().finish()
            }),
        ))
        .await;

        let req = TestRequest::get()
            .uri("/test")
            .insert_header((HeaderName::from_static(RequestHeaders::HX_BOOSTED), "false"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_request_information() {
        let app = test::init_service(App::new().route(
            "/test",
            web::get().to(|htmx: Htmx| async move {
                assert_eq!(htmx.current_url(), "http://example.com");
                assert_eq!(htmx.prompt(), "test prompt");
                assert_eq!(htmx.target(), "target");
                assert_eq!(htmx.trigger(), "button1");
                assert_eq!(htmx.trigger_name(), "save");
                assert!(htmx.history_restore_request);
                HttpResponse::Ok().finish()
            }),
        ))
        .await;

        let req = TestRequest::get()
            .uri("/test")
            .insert_header(("HX-Request", "true"))
            .insert_header(("HX-Current-URL", "http://example.com"))
            .insert_header(("HX-Prompt", "test prompt"))
            .insert_header(("HX-Target", "target"))
            .insert_header(("HX-Trigger", "button1"))
            .insert_header(("HX-Trigger-Name", "save"))
            .insert_header(("HX-History-Restore-Request", "true"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_non_ascii_headers() {
        let app = test::init_service(App::new().route(
            "/test",
            web::get().to(|htmx: Htmx| async move {
                assert_eq!(htmx.prompt(), "café");
                assert_eq!(htmx.target(), "résumé");
                assert!(!htmx.is_htmx);
                HttpResponse::Ok().finish()
            }),
        ))
        .await;

        let req = TestRequest::get()
            .uri("/test")
            .insert_header((
                HeaderName::from_static(RequestHeaders::HX_PROMPT),
                HeaderValue::from_bytes(b"caf\xE9").unwrap(),
            ))
            .insert_header((
                HeaderName::from_static(RequestHeaders::HX_TARGET),
                HeaderValue::from_bytes("résumé".as_bytes()).unwrap(),
            ))
            .insert_header((
                HeaderName::from_static(RequestHeaders::HX_REQUEST),
                HeaderValue::from_bytes(b"\xFF\xFF").unwrap(),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_node_responder() {
        let app = test::init_service(App::new().route(
            "/clicked",
            web::post().to(|| async {
                el("button", [hx::post("/clicked"), hx::swap(SwapType::OuterHtml)])
            }),
        ))
        .await;

        let req = TestRequest::post().uri("/clicked").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(
            body,
            r#"<button hx-post="/clicked" hx-swap="outerHTML"></button>"#
        );
    }

    #[actix_web::test]
    async fn test_response_headers_from_handler() {
        let app = test::init_service(App::new().route(
            "/test",
            web::get().to(|req: HttpRequest| async move {
                let mut res = el("p", [text("ok")]).respond_to(&req);
                let map = res.headers_mut();
                headers::set_push_url(map, "/pushed");
                headers::set_refresh(map);
                headers::set_trigger_events(map, &HxEvents::new().event("done")).unwrap();
                res
            }),
        ))
        .await;

        let req = TestRequest::get().uri("/test").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.headers()
                .get(HeaderName::from_static(ResponseHeaders::HX_PUSH_URL))
                .unwrap(),
            "/pushed"
        );
        assert_eq!(
            resp.headers()
                .get(HeaderName::from_static(ResponseHeaders::HX_REFRESH))
                .unwrap(),
            "true"
        );
        assert_eq!(
            resp.headers()
                .get(HeaderName::from_static(ResponseHeaders::HX_TRIGGER))
                .unwrap(),
            "done"
        );
    }
}
