//! `GET /image/<path..>`

use imgseek_domain::entities::normalize_path;
use rocket::fs::NamedFile;
use rocket::http::Status;
use rocket::http::uri::Segments;
use rocket::http::uri::fmt::Path as UriPath;
use rocket::serde::json::Json;
use rocket::{State, get};
use tracing::debug;

use crate::models::ErrorResponse;
use crate::state::{ApiError, SearchState};

/// Serve an image that is part of the loaded index
///
/// The tail is taken verbatim, so dot-directories, `.` and `..` segments and
/// a single percent-encoded segment holding the whole path all reach the
/// lookup. Membership in the index is the only access check: the path is
/// matched with and without a leading `/`, and anything not in the index is
/// a 404 whether or not it exists on disk.
#[get("/image/<path..>")]
pub async fn serve_image(
    state: &State<SearchState>,
    path: Segments<'_, UriPath>,
) -> Result<NamedFile, ApiError> {
    let requested = path.collect::<Vec<_>>().join("/");
    let not_found = || {
        (
            Status::NotFound,
            Json(ErrorResponse::new(format!("Image not found: {}", requested))),
        )
    };

    let mut candidates = vec![normalize_path(&requested)];
    if !requested.starts_with('/') {
        candidates.push(normalize_path(&format!("/{}", requested)));
    }

    let mut indexed = None;
    for candidate in candidates {
        match state.search.contains_path(&candidate).await {
            Ok(true) => {
                indexed = Some(candidate);
                break;
            }
            Ok(false) => {}
            Err(e) => {
                debug!(path = %requested, error = %e, "Image lookup without a usable index");
                return Err(not_found());
            }
        }
    }

    let indexed = indexed.ok_or_else(not_found)?;
    NamedFile::open(&indexed).await.map_err(|e| {
        debug!(path = %indexed, error = %e, "Indexed image is not readable");
        not_found()
    })
}
