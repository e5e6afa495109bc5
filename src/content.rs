use gloo::net::http::Request;

use crate::model::Chapter;

pub(crate) const CHAPTERS_URL: &str = "/chapters.json";

/// One-shot fetch of the whole chapter collection. There is no retry; the
/// caller logs the error and renders with an empty collection.
pub(crate) async fn fetch_chapters() -> Result<Vec<Chapter>, String> {
    let response = Request::get(CHAPTERS_URL)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !response.ok() {
        return Err(format!(
            "chapter fetch failed with status {}",
            response.status()
        ));
    }
    response
        .json::<Vec<Chapter>>()
        .await
        .map_err(|err| err.to_string())
}
