use actix_hx::{attr, doctype, el, headers, hx, text, Htmx, Node, SwapType};
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use chrono::{DateTime, Local};
use log::info;
use std::sync::{Mutex, PoisonError};

pub const TIME_FORMAT: &str = "%H:%M:%S";

const BUTTON_CLASS: &str = "rounded-md border border-transparent bg-orange-600 px-4 py-2 text-sm font-medium text-white shadow-sm hover:bg-orange-700 focus:outline-none focus:ring-2 focus:ring-orange-500 focus:ring-offset-2";

/// When the time shown on the page was last updated.
///
/// Shared between workers through `web::Data`, so every request sees the same value.
pub struct LastUpdate(Mutex<DateTime<Local>>);

impl LastUpdate {
    pub fn new(at: DateTime<Local>) -> Self {
        LastUpdate(Mutex::new(at))
    }

    pub fn get(&self) -> DateTime<Local> {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, at: DateTime<Local>) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = at;
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
            .route(web::post().to(index)),
    );
}

async fn index(req: HttpRequest, htmx: Htmx, last_update: web::Data<LastUpdate>) -> HttpResponse {
    if req.method() == Method::POST && htmx.boosted {
        let now = Local::now();
        last_update.set(now);
        info!("Time updated to {}", now.format(TIME_FORMAT));

        let mut res = partial(now).respond_to(&req);
        headers::set_push_url(
            res.headers_mut(),
            &format!("/?time={}", now.format(TIME_FORMAT)),
        );
        return res;
    }

    page(last_update.get()).respond_to(&req)
}

pub fn page(now: DateTime<Local>) -> Node {
    doctype(el(
        "html",
        [
            attr("lang", "en"),
            el(
                "head",
                [
                    el("meta", [attr("charset", "utf-8")]),
                    el(
                        "meta",
                        [
                            attr("name", "viewport"),
                            attr("content", "width=device-width, initial-scale=1"),
                        ],
                    ),
                    el("title", [text(now.format(TIME_FORMAT).to_string())]),
                    el(
                        "script",
                        [attr("src", "https://cdn.tailwindcss.com?plugins=forms,typography")],
                    ),
                    el("script", [attr("src", "https://unpkg.com/htmx.org")]),
                ],
            ),
            el(
                "body",
                [el(
                    "div",
                    [
                        attr("class", "max-w-7xl mx-auto p-4 prose lg:prose-lg xl:prose-xl"),
                        el("h1", [text("actix-hx + htmx")]),
                        el(
                            "p",
                            [text(format!(
                                "Time at last full page refresh was {}.",
                                now.format(TIME_FORMAT)
                            ))],
                        ),
                        partial(now),
                        el(
                            "form",
                            [
                                attr("method", "post"),
                                attr("action", "/"),
                                hx::boost("true"),
                                hx::target("#partial"),
                                hx::swap(SwapType::OuterHtml),
                                el(
                                    "button",
                                    [
                                        attr("type", "submit"),
                                        text("Update time"),
                                        attr("class", BUTTON_CLASS),
                                    ],
                                ),
                            ],
                        ),
                    ],
                )],
            ),
        ],
    ))
}

pub fn partial(now: DateTime<Local>) -> Node {
    el(
        "p",
        [
            attr("id", "partial"),
            text(format!("Time was last updated at {}.", now.format(TIME_FORMAT))),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_hx::headers::ResponseHeaders;
    use actix_web::{
        body::to_bytes,
        test::{self, TestRequest},
        App,
    };
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 15).unwrap()
    }

    #[test]
    fn test_partial() {
        assert_eq!(
            partial(fixed_time()).to_string(),
            r#"<p id="partial">Time was last updated at 09:30:15.</p>"#
        );
    }

    #[test]
    fn test_page_contains_boosted_form() {
        let html = page(fixed_time()).to_string();
        assert!(html.starts_with("<!doctype html><html lang=\"en\">"));
        assert!(html.contains("<title>09:30:15</title>"));
        assert!(html.contains(
            r##"<form method="post" action="/" hx-boost="true" hx-target="#partial" hx-swap="outerHTML">"##
        ));
        assert!(html.contains(r#"<meta charset="utf-8">"#));
    }

    #[actix_web::test]
    async fn test_get_renders_full_page() {
        let state = web::Data::new(LastUpdate::new(fixed_time()));
        let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

        let req = TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert!(resp.headers().get(ResponseHeaders::HX_PUSH_URL).is_none());

        let body = to_bytes(resp.into_body()).await.unwrap();
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("Time at last full page refresh was 09:30:15."));
    }

    #[actix_web::test]
    async fn test_boosted_post_returns_partial_and_pushes_url() {
        let state = web::Data::new(LastUpdate::new(fixed_time()));
        let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

        let req = TestRequest::post()
            .uri("/")
            .insert_header(("HX-Boosted", "true"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let updated = state.get();
        assert_ne!(updated, fixed_time());
        let push_url = resp.headers().get(ResponseHeaders::HX_PUSH_URL).unwrap();
        assert_eq!(
            push_url.to_str().unwrap(),
            format!("/?time={}", updated.format(TIME_FORMAT))
        );

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, partial(updated).to_string());
    }

    #[actix_web::test]
    async fn test_plain_post_renders_full_page() {
        let state = web::Data::new(LastUpdate::new(fixed_time()));
        let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

        let req = TestRequest::post().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(state.get(), fixed_time());

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert!(std::str::from_utf8(&body).unwrap().starts_with("<!doctype html>"));
    }
}
