//! Show partitioning and upcoming-show counting.
//!
//! The partition boundary is uniform everywhere: a show is upcoming when its
//! start time is strictly after "now", otherwise it is past. Counterpart
//! display fields (name, image) are loaded with a single join rather than one
//! query per show.

use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use std::collections::HashMap;

use crate::db::entities::{artists, shows, venues};

/// One show row enriched with the counterpart entity's display fields:
/// the artist for a venue page, the venue for an artist page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowEntry {
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Default)]
pub struct ShowPartitions {
    pub past: Vec<ShowEntry>,
    pub upcoming: Vec<ShowEntry>,
}

/// Split show entries into past and upcoming relative to `now`.
/// Upcoming means strictly after `now`; both halves are ordered by start time.
pub fn partition(mut entries: Vec<ShowEntry>, now: DateTimeWithTimeZone) -> ShowPartitions {
    entries.sort_by_key(|e| e.start_time);

    let mut partitions = ShowPartitions::default();
    for entry in entries {
        if entry.start_time > now {
            partitions.upcoming.push(entry);
        } else {
            partitions.past.push(entry);
        }
    }
    partitions
}

/// All shows at a venue, with the artist's name and image joined in.
pub async fn for_venue(db: &DatabaseConnection, venue_id: i32) -> Result<Vec<ShowEntry>> {
    let rows = shows::Entity::find()
        .filter(shows::Column::VenueId.eq(venue_id))
        .find_also_related(artists::Entity)
        .order_by_asc(shows::Column::StartTime)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(show, artist)| {
            artist.map(|artist| ShowEntry {
                counterpart_id: artist.id,
                counterpart_name: artist.name,
                counterpart_image_link: artist.image_link,
                start_time: show.start_time,
            })
        })
        .collect())
}

/// All shows by an artist, with the venue's name and image joined in.
pub async fn for_artist(db: &DatabaseConnection, artist_id: i32) -> Result<Vec<ShowEntry>> {
    let rows = shows::Entity::find()
        .filter(shows::Column::ArtistId.eq(artist_id))
        .find_also_related(venues::Entity)
        .order_by_asc(shows::Column::StartTime)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(show, venue)| {
            venue.map(|venue| ShowEntry {
                counterpart_id: venue.id,
                counterpart_name: venue.name,
                counterpart_image_link: venue.image_link,
                start_time: show.start_time,
            })
        })
        .collect())
}

/// Upcoming-show counts for a set of venues, in one query.
pub async fn upcoming_counts_by_venue(
    db: &DatabaseConnection,
    venue_ids: Vec<i32>,
) -> Result<HashMap<i32, i64>> {
    if venue_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let now = Utc::now().fixed_offset();
    let rows: Vec<i32> = shows::Entity::find()
        .filter(shows::Column::VenueId.is_in(venue_ids))
        .filter(shows::Column::StartTime.gt(now))
        .select_only()
        .column(shows::Column::VenueId)
        .into_tuple()
        .all(db)
        .await?;

    Ok(count_by_id(rows))
}

/// Upcoming-show counts for a set of artists, in one query.
pub async fn upcoming_counts_by_artist(
    db: &DatabaseConnection,
    artist_ids: Vec<i32>,
) -> Result<HashMap<i32, i64>> {
    if artist_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let now = Utc::now().fixed_offset();
    let rows: Vec<i32> = shows::Entity::find()
        .filter(shows::Column::ArtistId.is_in(artist_ids))
        .filter(shows::Column::StartTime.gt(now))
        .select_only()
        .column(shows::Column::ArtistId)
        .into_tuple()
        .all(db)
        .await?;

    Ok(count_by_id(rows))
}

fn count_by_id(ids: Vec<i32>) -> HashMap<i32, i64> {
    let mut counts = HashMap::new();
    for id in ids {
        *counts.entry(id).or_insert(0) += 1;
    }
    counts
}
