//! Integration tests for venue routes
//!
//! Covers listing with area grouping, search, create, detail with show
//! partitions, edit, and delete (including the cascade to shows).

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use sea_orm::EntityTrait;
use tower::util::ServiceExt;

use showbill::db::entities::{shows, venues};
use showbill::handlers;
use showbill::state::AppState;
use showbill::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    handlers::routes().with_state(state.clone())
}

async fn response_body(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_list_venues_empty() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/venues")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body(response).await;
    assert!(body.contains("No venues listed yet"));
}

#[tokio::test]
async fn test_list_venues_groups_by_city_and_state() {
    let state = setup_test_app_state().await;

    create_test_venue(&state.db, "The Mohawk", "Austin", "TX").await;
    create_test_venue(&state.db, "Stubb's", "Austin", "TX").await;
    create_test_venue(&state.db, "Continental Club", "Austin", "TX").await;
    create_test_venue(&state.db, "Paradise Rock Club", "Boston", "MA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/venues")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body(response).await;

    let austin = body.find("Austin, TX").expect("Austin group missing");
    let boston = body.find("Boston, MA").expect("Boston group missing");
    // Areas are sorted, so Austin renders before Boston
    assert!(austin < boston);
    // Membership counts shown per group
    assert!(body.contains("(3)"));
    assert!(body.contains("(1)"));
}

#[tokio::test]
async fn test_create_venue_persists_all_fields() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/venues/create",
            "name=The+Dueling+Pianos+Bar&genres=Classical,R%26B,Jazz&address=335+Delancey+Street\
             &city=New+York&state=NY&phone=914-003-1132&website=https://duelingpianos.com\
             &facebook_link=https://facebook.com/duelingpianos&seeking_talent=true\
             &seeking_description=Looking+for+piano+duos&image_link=https://example.com/pianos.jpg",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let venue = venues::Entity::find()
        .one(&state.db)
        .await
        .unwrap()
        .expect("venue was not persisted");

    assert_eq!(venue.name, "The Dueling Pianos Bar");
    assert_eq!(venue.genre_list(), vec!["Classical", "R&B", "Jazz"]);
    assert_eq!(venue.address, "335 Delancey Street");
    assert_eq!(venue.city, "New York");
    assert_eq!(venue.state, "NY");
    assert_eq!(venue.phone, Some("914-003-1132".to_string()));
    assert_eq!(venue.website, Some("https://duelingpianos.com".to_string()));
    assert_eq!(
        venue.facebook_link,
        Some("https://facebook.com/duelingpianos".to_string())
    );
    assert!(venue.seeking_talent);
    assert_eq!(
        venue.seeking_description,
        Some("Looking for piano duos".to_string())
    );
    assert_eq!(
        venue.image_link,
        Some("https://example.com/pianos.jpg".to_string())
    );
}

#[tokio::test]
async fn test_create_venue_missing_fields_rerenders_with_errors() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request("/venues/create", "name=Nameless+Bar"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_body(response).await;
    assert!(body.contains("This field is required"));
    // Submitted values are kept in the re-rendered form
    assert!(body.contains("Nameless Bar"));

    let count = venues::Entity::find().all(&state.db).await.unwrap().len();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_venue_detail_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/venues/99999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_venue_detail_partitions_shows() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals", "San Francisco", "CA").await;

    let future = (Utc::now() + Duration::hours(1)).fixed_offset();
    let past = (Utc::now() - Duration::hours(1)).fixed_offset();
    create_test_show(&state.db, artist.id, venue.id, future).await;
    create_test_show(&state.db, artist.id, venue.id, past).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .uri(&format!("/venues/{}", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body(response).await;
    assert!(body.contains("Upcoming Shows (1)"));
    assert!(body.contains("Past Shows (1)"));
    assert!(body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_venue_detail_future_show_is_only_upcoming() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals", "San Francisco", "CA").await;
    let future = (Utc::now() + Duration::hours(1)).fixed_offset();
    create_test_show(&state.db, artist.id, venue.id, future).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .uri(&format!("/venues/{}", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = response_body(response).await;
    assert!(body.contains("Upcoming Shows (1)"));
    assert!(body.contains("Past Shows (0)"));
}

#[tokio::test]
async fn test_search_venues_substring_match() {
    let state = setup_test_app_state().await;

    create_test_venue(&state.db, "Bluebird Cafe", "Nashville", "TN").await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_request("/venues/search", "search_term=Blue"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body(response).await;
    assert!(body.contains("Bluebird Cafe"));
    assert!(!body.contains("The Musical Hop"));
    assert!(body.contains("1 result"));
}

#[tokio::test]
async fn test_search_venues_is_case_insensitive() {
    let state = setup_test_app_state().await;

    create_test_venue(&state.db, "Bluebird Cafe", "Nashville", "TN").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_request("/venues/search", "search_term=bLuE"))
        .await
        .unwrap();

    let body = response_body(response).await;
    assert!(body.contains("Bluebird Cafe"));
}

#[tokio::test]
async fn test_search_venues_counts_upcoming_shows() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "Bluebird Cafe", "Nashville", "TN").await;
    let artist = create_test_artist(&state.db, "Guns N Petals", "San Francisco", "CA").await;

    // One upcoming and one past show; only the upcoming one is counted
    let future = (Utc::now() + Duration::hours(2)).fixed_offset();
    let past = (Utc::now() - Duration::hours(2)).fixed_offset();
    create_test_show(&state.db, artist.id, venue.id, future).await;
    create_test_show(&state.db, artist.id, venue.id, past).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_request("/venues/search", "search_term=Bluebird"))
        .await
        .unwrap();

    let body = response_body(response).await;
    assert!(body.contains("1 upcoming show"));
}

#[tokio::test]
async fn test_edit_venue_changes_only_the_submitted_difference() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_request(
            &format!("/venues/{}/edit", venue.id),
            "name=The+Musical+Hop&genres=Jazz&address=1015+Folsom+Street\
             &city=San+Francisco&state=CA&phone=555-000-1111",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let updated = venues::Entity::find_by_id(venue.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.phone, Some("555-000-1111".to_string()));
    assert_eq!(updated.name, venue.name);
    assert_eq!(updated.genre_list(), venue.genre_list());
    assert_eq!(updated.address, venue.address);
    assert_eq!(updated.city, venue.city);
    assert_eq!(updated.state, venue.state);
    assert_eq!(updated.seeking_talent, venue.seeking_talent);
}

#[tokio::test]
async fn test_edit_form_prefills_current_values() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .uri(&format!("/venues/{}/edit", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("1015 Folsom Street"));
}

#[tokio::test]
async fn test_delete_venue_returns_success_flag() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/venues/{}", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value =
        serde_json::from_str(&response_body(response).await).unwrap();
    assert_eq!(body["success"], true);

    // Subsequent lookup fails with not-found
    let response = app
        .oneshot(
            Request::builder()
                .uri(&format!("/venues/{}", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_venue_cascades_to_shows() {
    let state = setup_test_app_state().await;

    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals", "San Francisco", "CA").await;
    let future = (Utc::now() + Duration::hours(1)).fixed_offset();
    create_test_show(&state.db, artist.id, venue.id, future).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/venues/{}", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let remaining = shows::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(remaining.len(), 0);
}

#[tokio::test]
async fn test_delete_venue_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/venues/99999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_venues_treats_wildcards_literally() {
    let state = setup_test_app_state().await;

    create_test_venue(&state.db, "100% Vinyl", "Portland", "OR").await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_request("/venues/search", "search_term=%25"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body(response).await;
    assert!(body.contains("100% Vinyl"));
    assert!(!body.contains("The Musical Hop"));
}
