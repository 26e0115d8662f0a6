//! Serves the compiled frontend bundled into the binary by `build.rs`.
//!
//! Client-side routes such as `/accounts/ACC001` have no file of their own,
//! so any unknown path gets `index.html` and the router takes over. Unknown
//! `/api/...` paths are the exception and answer with a JSON `404`.

use actix_web::{HttpRequest, HttpResponse};
use common::requests::ErrorBody;
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn process(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    if path == "api" || path.starts_with("api/") {
        debug!("No API route for /{path}");
        return HttpResponse::NotFound().json(ErrorBody {
            detail: format!("/{path} not found"),
        });
    }

    let file_path = if path.is_empty() { "index.html" } else { path };
    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}
