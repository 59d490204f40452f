pub mod artists;
pub mod shows;
pub mod venues;

use axum::{
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::templates;

pub async fn index() -> Html<String> {
    Html(templates::home_page().into_string())
}

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        // Venue endpoints
        .route("/venues", get(venues::list))
        .route("/venues/search", post(venues::search))
        .route("/venues/create", get(venues::create_form).post(venues::create_submit))
        .route("/venues/:id", get(venues::detail).delete(venues::delete))
        .route("/venues/:id/edit", get(venues::edit_form).post(venues::edit_submit))
        // Artist endpoints
        .route("/artists", get(artists::list))
        .route("/artists/search", post(artists::search))
        .route("/artists/create", get(artists::create_form).post(artists::create_submit))
        .route("/artists/:id", get(artists::detail).delete(artists::delete))
        .route("/artists/:id/edit", get(artists::edit_form).post(artists::edit_submit))
        // Show endpoints
        .route("/shows", get(shows::list))
        .route("/shows/create", get(shows::create_form).post(shows::create_submit))
}
