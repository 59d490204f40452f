use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde_json::json;

use crate::{
    db::entities::{artists, shows},
    error::{AppError, Result},
    forms::{genres_to_json, ArtistForm},
    services,
    state::AppState,
    templates::{self, SearchResultData},
};

use super::venues::SearchRequest;

pub async fn list(State(state): State<AppState>) -> Result<Html<String>> {
    let all_artists = artists::Entity::find()
        .order_by_asc(artists::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Html(templates::artists_page(&all_artists).into_string()))
}

/// Case-insensitive substring search on artist names, each hit annotated with
/// its upcoming-show count.
pub async fn search(
    State(state): State<AppState>,
    Form(request): Form<SearchRequest>,
) -> Result<Html<String>> {
    let term = request.search_term.trim();

    let matches = artists::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col((
                artists::Entity,
                artists::Column::Name,
            ))))
            .like(super::venues::name_search_pattern(term)),
        )
        .order_by_asc(artists::Column::Name)
        .all(&state.db)
        .await?;

    let artist_ids: Vec<i32> = matches.iter().map(|a| a.id).collect();
    let counts = services::shows::upcoming_counts_by_artist(&state.db, artist_ids).await?;

    let results: Vec<SearchResultData> = matches
        .into_iter()
        .map(|artist| SearchResultData {
            num_upcoming_shows: counts.get(&artist.id).copied().unwrap_or(0),
            id: artist.id,
            name: artist.name,
        })
        .collect();

    let markup = templates::search_results_page(
        "Artist Search",
        "/artists/search",
        "/artists",
        term,
        &results,
    );
    Ok(Html(markup.into_string()))
}

pub async fn create_form() -> Html<String> {
    let markup = templates::artist_form_page(
        "List an Artist",
        "/artists/create",
        &ArtistForm::default(),
        &[],
    );
    Html(markup.into_string())
}

pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<Response> {
    let errors = form.validate();
    if !errors.is_empty() {
        let markup =
            templates::artist_form_page("List an Artist", "/artists/create", &form, &errors);
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(markup.into_string()),
        )
            .into_response());
    }

    let now: DateTimeWithTimeZone = Utc::now().into();
    let txn = state.db.begin().await?;
    let artist = artists::ActiveModel {
        name: Set(form.name.trim().to_string()),
        genres: Set(genres_to_json(&form.genre_list())),
        city: Set(form.city.trim().to_string()),
        state: Set(form.state.trim().to_string()),
        phone: Set(form.phone_opt()),
        website: Set(form.website_opt()),
        facebook_link: Set(form.facebook_link_opt()),
        seeking_venue: Set(form.seeking_venue),
        seeking_description: Set(form.seeking_description_opt()),
        image_link: Set(form.image_link_opt()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    tracing::info!("Artist {} ({}) listed", artist.id, artist.name);
    Ok(Redirect::to("/artists").into_response())
}

/// Artist detail page with past/upcoming show partitions.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let artist = artists::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

    let entries = services::shows::for_artist(&state.db, id).await?;
    let partitions = services::shows::partition(entries, Utc::now().fixed_offset());

    Ok(Html(
        templates::artist_detail_page(&artist, &partitions).into_string(),
    ))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let artist = artists::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

    let form = ArtistForm::from_model(&artist);
    let markup = templates::artist_form_page(
        "Edit Artist",
        &format!("/artists/{}/edit", id),
        &form,
        &[],
    );
    Ok(Html(markup.into_string()))
}

/// Full overwrite of every editable field; no partial patch semantics.
pub async fn edit_submit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ArtistForm>,
) -> Result<Response> {
    let artist = artists::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

    let errors = form.validate();
    if !errors.is_empty() {
        let markup = templates::artist_form_page(
            "Edit Artist",
            &format!("/artists/{}/edit", id),
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
    let mut active: artists::ActiveModel = artist.into();
    active.name = Set(form.name.trim().to_string());
    active.genres = Set(genres_to_json(&form.genre_list()));
    active.city = Set(form.city.trim().to_string());
    active.state = Set(form.state.trim().to_string());
    active.phone = Set(form.phone_opt());
    active.website = Set(form.website_opt());
    active.facebook_link = Set(form.facebook_link_opt());
    active.seeking_venue = Set(form.seeking_venue);
    active.seeking_description = Set(form.seeking_description_opt());
    active.image_link = Set(form.image_link_opt());
    active.updated_at = Set(Utc::now().into());
    active.update(&txn).await?;
    txn.commit().await?;

    Ok(Redirect::to(&format!("/artists/{}", id)).into_response())
}

/// Deletes the artist and their shows in one transaction.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>> {
    let artist = artists::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Artist not found".to_string()))?;

    let txn = state.db.begin().await?;
    shows::Entity::delete_many()
        .filter(shows::Column::ArtistId.eq(id))
        .exec(&txn)
        .await?;
    artists::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!("Artist {} ({}) deleted", id, artist.name);
    Ok(Json(json!({ "success": true })))
}
