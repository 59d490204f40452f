use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Deserialize;
use serde_json::json;

use crate::{
    db::entities::{shows, venues},
    error::{AppError, Result},
    forms::{genres_to_json, VenueForm},
    services,
    state::AppState,
    templates::{self, SearchResultData},
};

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: String,
}

/// Substring pattern for a name search. LIKE wildcards in the term are
/// escaped so they match literally.
pub(super) fn name_search_pattern(term: &str) -> LikeExpr {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    LikeExpr::new(format!("%{}%", escaped)).escape('\\')
}

/// Venues listing, grouped by (city, state).
pub async fn list(State(state): State<AppState>) -> Result<Html<String>> {
    let all_venues = venues::Entity::find()
        .order_by_asc(venues::Column::Name)
        .all(&state.db)
        .await?;

    let areas = services::venues::group_by_area(all_venues);
    Ok(Html(templates::venues_page(&areas).into_string()))
}

/// Case-insensitive substring search on venue names, each hit annotated with
/// its upcoming-show count.
pub async fn search(
    State(state): State<AppState>,
    Form(request): Form<SearchRequest>,
) -> Result<Html<String>> {
    let term = request.search_term.trim();

    let matches = venues::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col((
                venues::Entity,
                venues::Column::Name,
            ))))
            .like(name_search_pattern(term)),
        )
        .order_by_asc(venues::Column::Name)
        .all(&state.db)
        .await?;

    let venue_ids: Vec<i32> = matches.iter().map(|v| v.id).collect();
    let counts = services::shows::upcoming_counts_by_venue(&state.db, venue_ids).await?;

    let results: Vec<SearchResultData> = matches
        .into_iter()
        .map(|venue| SearchResultData {
            num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
            id: venue.id,
            name: venue.name,
        })
        .collect();

    let markup = templates::search_results_page(
        "Venue Search",
        "/venues/search",
        "/venues",
        term,
        &results,
    );
    Ok(Html(markup.into_string()))
}

pub async fn create_form() -> Html<String> {
    let markup = templates::venue_form_page(
        "List a Venue",
        "/venues/create",
        &VenueForm::default(),
        &[],
    );
    Html(markup.into_string())
}

pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Response> {
    let errors = form.validate();
    if !errors.is_empty() {
        let markup =
            templates::venue_form_page("List a Venue", "/venues/create", &form, &errors);
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(markup.into_string()),
        )
            .into_response());
    }

    let now: DateTimeWithTimeZone = Utc::now().into();
    let txn = state.db.begin().await?;
    let venue = venues::ActiveModel {
        name: Set(form.name.trim().to_string()),
        genres: Set(genres_to_json(&form.genre_list())),
        address: Set(form.address.trim().to_string()),
        city: Set(form.city.trim().to_string()),
        state: Set(form.state.trim().to_string()),
        phone: Set(form.phone_opt()),
        website: Set(form.website_opt()),
        facebook_link: Set(form.facebook_link_opt()),
        seeking_talent: Set(form.seeking_talent),
        seeking_description: Set(form.seeking_description_opt()),
        image_link: Set(form.image_link_opt()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    tracing::info!("Venue {} ({}) listed", venue.id, venue.name);
    Ok(Redirect::to("/venues").into_response())
}

/// Venue detail page with past/upcoming show partitions.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let venue = venues::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

    let entries = services::shows::for_venue(&state.db, id).await?;
    let partitions = services::shows::partition(entries, Utc::now().fixed_offset());

    Ok(Html(
        templates::venue_detail_page(&venue, &partitions).into_string(),
    ))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let venue = venues::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

    let form = VenueForm::from_model(&venue);
    let markup = templates::venue_form_page(
        "Edit Venue",
        &format!("/venues/{}/edit", id),
        &form,
        &[],
    );
    Ok(Html(markup.into_string()))
}

/// Full overwrite of every editable field; no partial patch semantics.
pub async fn edit_submit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<VenueForm>,
) -> Result<Response> {
    let venue = venues::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

    let errors = form.validate();
    if !errors.is_empty() {
        let markup = templates::venue_form_page(
            "Edit Venue",
            &format!("/venues/{}/edit", id),
            &form,
            &errors,
        );
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(markup.into_string()),
        )
            .into_response());
    }

    let txn = state.db.begin().await?;
    let mut active: venues::ActiveModel = venue.into();
    active.name = Set(form.name.trim().to_string());
    active.genres = Set(genres_to_json(&form.genre_list()));
    active.address = Set(form.address.trim().to_string());
    active.city = Set(form.city.trim().to_string());
    active.state = Set(form.state.trim().to_string());
    active.phone = Set(form.phone_opt());
    active.website = Set(form.website_opt());
    active.facebook_link = Set(form.facebook_link_opt());
    active.seeking_talent = Set(form.seeking_talent);
    active.seeking_description = Set(form.seeking_description_opt());
    active.image_link = Set(form.image_link_opt());
    active.updated_at = Set(Utc::now().into());
    active.update(&txn).await?;
    txn.commit().await?;

    Ok(Redirect::to(&format!("/venues/{}", id)).into_response())
}

/// Deletes the venue and its shows in one transaction.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>> {
    let venue = venues::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Venue not found".to_string()))?;

    let txn = state.db.begin().await?;
    shows::Entity::delete_many()
        .filter(shows::Column::VenueId.eq(id))
        .exec(&txn)
        .await?;
    venues::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!("Venue {} ({}) deleted", id, venue.name);
    Ok(Json(json!({ "success": true })))
}
