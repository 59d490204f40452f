use maud::{html, Markup};

use crate::forms::FieldError;
use crate::services::shows::ShowEntry;

/// One row on the shows listing page.
pub struct ShowListingData {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// One hit on a search results page.
pub struct SearchResultData {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300/1a1a1a/ffffff?text=No+Image";

pub fn format_start_time(start_time: &chrono::DateTime<chrono::FixedOffset>) -> String {
    start_time.format("%Y-%m-%d %H:%M").to_string()
}

pub fn search_bar(action: &str, placeholder: &str) -> Markup {
    html! {
        form method="post" action=(action) class="mb-6 flex gap-2" {
            input
                type="search"
                name="search_term"
                placeholder=(placeholder)
                class="flex-grow px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
            button
                type="submit"
                class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                "Search"
            }
        }
    }
}

pub fn search_result_row(result: &SearchResultData, base_path: &str) -> Markup {
    html! {
        li class="bg-white rounded-lg shadow-sm p-4 flex justify-between items-center" {
            a href={(format!("{}/{}", base_path, result.id))} class="font-semibold text-gray-900 hover:text-primary" {
                (result.name)
            }
            span class="text-sm text-gray-600" {
                (result.num_upcoming_shows) " upcoming "
                @if result.num_upcoming_shows == 1 { "show" } @else { "shows" }
            }
        }
    }
}

/// Card for one past or upcoming show on a detail page. `base_path` points at
/// the counterpart entity's pages.
pub fn show_entry_card(entry: &ShowEntry, base_path: &str) -> Markup {
    let image = entry
        .counterpart_image_link
        .as_deref()
        .unwrap_or(PLACEHOLDER_IMAGE);

    html! {
        div class="bg-white rounded-lg shadow-sm p-4 flex items-center gap-4" {
            img
                src=(image)
                alt=(entry.counterpart_name)
                class="w-16 h-16 rounded-full object-cover"
                loading="lazy";
            div {
                a href={(format!("{}/{}", base_path, entry.counterpart_id))}
                  class="font-semibold text-gray-900 hover:text-primary" {
                    (entry.counterpart_name)
                }
                p class="text-sm text-gray-600" { (format_start_time(&entry.start_time)) }
            }
        }
    }
}

pub fn genre_badges(genres: &[String]) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" {
            @for genre in genres {
                span class="px-2 py-1 bg-gray-100 text-gray-700 text-sm rounded" { (genre) }
            }
        }
    }
}

pub fn seeking_badge(seeking: bool, label: &str) -> Markup {
    html! {
        @if seeking {
            span class="px-2 py-1 bg-green-100 text-green-800 text-sm rounded" {
                "Seeking " (label)
            }
        } @else {
            span class="px-2 py-1 bg-gray-100 text-gray-800 text-sm rounded" {
                "Not seeking " (label)
            }
        }
    }
}

/// Delete button wired up with htmx; navigates to `redirect_to` once the
/// DELETE request completes.
pub fn delete_button(resource_path: &str, confirm: &str, redirect_to: &str) -> Markup {
    html! {
        button
            class="px-4 py-2 bg-red-500 hover:bg-red-600 text-white font-semibold rounded-md"
            hx-delete=(resource_path)
            hx-confirm=(confirm)
            hx-swap="none"
            hx-on--after-request={(format!("window.location='{}'", redirect_to))} {
            "Delete"
        }
    }
}

pub fn field_error_messages(field: &str, errors: &[FieldError]) -> Markup {
    html! {
        @for error in errors.iter().filter(|e| e.field == field) {
            p class="text-sm text-red-600 mt-1" { (error.message) }
        }
    }
}
