//! Typed form schemas for the create/edit pages.
//!
//! Each entity has an explicit struct deserialized from the urlencoded body,
//! with a `validate` step producing field-level messages. Genres arrive as a
//! comma-separated input and cross the storage edge as a JSON-encoded list.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::db::entities::{artists, venues};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn require(field: &'static str, value: &str, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "This field is required"));
    }
}

fn parse_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect()
}

/// Encode a genre list for storage.
pub fn genres_to_json(genres: &[String]) -> String {
    serde_json::to_string(genres).unwrap_or_else(|_| "[]".to_string())
}

fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub seeking_talent: bool,
    #[serde(default)]
    pub seeking_description: String,
    #[serde(default)]
    pub image_link: String,
}

impl VenueForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require("name", &self.name, &mut errors);
        require("city", &self.city, &mut errors);
        require("state", &self.state, &mut errors);
        require("address", &self.address, &mut errors);
        errors
    }

    pub fn genre_list(&self) -> Vec<String> {
        parse_genres(&self.genres)
    }

    /// Prefill the edit form from a stored row.
    pub fn from_model(venue: &venues::Model) -> Self {
        Self {
            name: venue.name.clone(),
            genres: venue.genre_list().join(", "),
            address: venue.address.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            website: venue.website.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
        }
    }

    pub fn phone_opt(&self) -> Option<String> {
        none_if_blank(&self.phone)
    }

    pub fn website_opt(&self) -> Option<String> {
        none_if_blank(&self.website)
    }

    pub fn facebook_link_opt(&self) -> Option<String> {
        none_if_blank(&self.facebook_link)
    }

    pub fn seeking_description_opt(&self) -> Option<String> {
        none_if_blank(&self.seeking_description)
    }

    pub fn image_link_opt(&self) -> Option<String> {
        none_if_blank(&self.image_link)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default)]
    pub seeking_description: String,
    #[serde(default)]
    pub image_link: String,
}

impl ArtistForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require("name", &self.name, &mut errors);
        require("city", &self.city, &mut errors);
        require("state", &self.state, &mut errors);
        errors
    }

    pub fn genre_list(&self) -> Vec<String> {
        parse_genres(&self.genres)
    }

    pub fn from_model(artist: &artists::Model) -> Self {
        Self {
            name: artist.name.clone(),
            genres: artist.genre_list().join(", "),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            website: artist.website.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
        }
    }

    pub fn phone_opt(&self) -> Option<String> {
        none_if_blank(&self.phone)
    }

    pub fn website_opt(&self) -> Option<String> {
        none_if_blank(&self.website)
    }

    pub fn facebook_link_opt(&self) -> Option<String> {
        none_if_blank(&self.facebook_link)
    }

    pub fn seeking_description_opt(&self) -> Option<String> {
        none_if_blank(&self.seeking_description)
    }

    pub fn image_link_opt(&self) -> Option<String> {
        none_if_blank(&self.image_link)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

/// A show form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<FixedOffset>,
}

impl ShowForm {
    pub fn validate(&self) -> Result<NewShow, Vec<FieldError>> {
        let mut errors = Vec::new();

        let artist_id = self.artist_id.trim().parse::<i32>();
        if artist_id.is_err() {
            errors.push(FieldError::new("artist_id", "Enter a valid artist id"));
        }

        let venue_id = self.venue_id.trim().parse::<i32>();
        if venue_id.is_err() {
            errors.push(FieldError::new("venue_id", "Enter a valid venue id"));
        }

        let start_time = parse_start_time(&self.start_time);
        if start_time.is_none() {
            errors.push(FieldError::new(
                "start_time",
                "Enter a valid date and time",
            ));
        }

        match (artist_id, venue_id, start_time) {
            (Ok(artist_id), Ok(venue_id), Some(start_time)) if errors.is_empty() => Ok(NewShow {
                artist_id,
                venue_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

/// Accepts RFC 3339 or the `datetime-local` input format (assumed UTC).
fn parse_start_time(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    None
}
