use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::collections::HashMap;

use crate::{
    db::entities::{artists, shows, venues},
    error::Result,
    forms::{FieldError, ShowForm},
    state::AppState,
    templates::{self, ShowListingData},
};

/// Shows listing with denormalized artist/venue display fields. Artists and
/// venues are batch-loaded in one query each, never per show.
pub async fn list(State(state): State<AppState>) -> Result<Html<String>> {
    let show_rows = shows::Entity::find()
        .order_by_asc(shows::Column::StartTime)
        .all(&state.db)
        .await?;

    if show_rows.is_empty() {
        return Ok(Html(templates::shows_page(&[]).into_string()));
    }

    let artist_ids: Vec<i32> = show_rows.iter().map(|s| s.artist_id).collect();
    let venue_ids: Vec<i32> = show_rows.iter().map(|s| s.venue_id).collect();

    let artist_map: HashMap<i32, artists::Model> = artists::Entity::find()
        .filter(artists::Column::Id.is_in(artist_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();

    let venue_map: HashMap<i32, venues::Model> = venues::Entity::find()
        .filter(venues::Column::Id.is_in(venue_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|v| (v.id, v))
        .collect();

    let listings: Vec<ShowListingData> = show_rows
        .iter()
        .filter_map(|show| {
            let artist = artist_map.get(&show.artist_id)?;
            let venue = venue_map.get(&show.venue_id)?;
            Some(ShowListingData {
                venue_id: venue.id,
                venue_name: venue.name.clone(),
                artist_id: artist.id,
                artist_name: artist.name.clone(),
                artist_image_link: artist.image_link.clone(),
                start_time: templates::format_start_time(&show.start_time),
            })
        })
        .collect();

    Ok(Html(templates::shows_page(&listings).into_string()))
}

pub async fn create_form() -> Html<String> {
    Html(templates::show_form_page(&ShowForm::default(), &[]).into_string())
}

pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Result<Response> {
    let new_show = match form.validate() {
        Ok(new_show) => new_show,
        Err(errors) => {
            let markup = templates::show_form_page(&form, &errors);
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(markup.into_string()),
            )
                .into_response());
        }
    };

    // Both foreign keys must reference existing rows. The checks share the
    // insert's transaction so a row deleted mid-request still comes back as a
    // form error rather than a constraint violation.
    let txn = state.db.begin().await?;

    let mut errors = Vec::new();
    if artists::Entity::find_by_id(new_show.artist_id)
        .one(&txn)
        .await?
        .is_none()
    {
        errors.push(FieldError::new("artist_id", "No artist with that id"));
    }
    if venues::Entity::find_by_id(new_show.venue_id)
        .one(&txn)
        .await?
        .is_none()
    {
        errors.push(FieldError::new("venue_id", "No venue with that id"));
    }
    if !errors.is_empty() {
        let markup = templates::show_form_page(&form, &errors);
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(markup.into_string()),
        )
            .into_response());
    }

    let now: DateTimeWithTimeZone = Utc::now().into();
    let show = shows::ActiveModel {
        artist_id: Set(new_show.artist_id),
        venue_id: Set(new_show.venue_id),
        start_time: Set(new_show.start_time),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    tracing::info!(
        "Show {} booked: artist {} at venue {}",
        show.id,
        show.artist_id,
        show.venue_id
    );
    Ok(Redirect::to("/shows").into_response())
}
