//! Venue grouping for the listing page.

use std::collections::BTreeMap;

use crate::db::entities::venues;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Group venues by (city, state). Areas come back sorted by city then state,
/// members by name, so the listing page renders deterministically.
pub fn group_by_area(venues: Vec<venues::Model>) -> Vec<VenueArea> {
    let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for venue in venues {
        areas
            .entry((venue.city, venue.state))
            .or_default()
            .push(VenueSummary {
                id: venue.id,
                name: venue.name,
            });
    }

    areas
        .into_iter()
        .map(|((city, state), mut members)| {
            members.sort_by(|a, b| a.name.cmp(&b.name));
            VenueArea {
                city,
                state,
                venues: members,
            }
        })
        .collect()
}
