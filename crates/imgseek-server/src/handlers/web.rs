//! Search page and JSON error catcher

use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{Request, catch, get};

use crate::models::ErrorResponse;

// Embed templates at compile time
const INDEX_HTML: &str = include_str!("../templates/index.html");

/// Search page handler
#[get("/")]
pub fn index_page() -> RawHtml<&'static str> {
    RawHtml(INDEX_HTML)
}

/// Turn every unhandled status into a JSON `{error}` body
#[catch(default)]
pub fn json_catcher(status: Status, request: &Request<'_>) -> (Status, Json<ErrorResponse>) {
    let reason = status.reason().unwrap_or("Unknown error");
    (
        status,
        Json(ErrorResponse::new(format!("{}: {}", reason, request.uri()))),
    )
}
