use maud::{html, Markup};

use super::components::{
    delete_button, genre_badges, search_bar, search_result_row, seeking_badge, show_entry_card,
    SearchResultData, ShowListingData,
};
use super::layout::base_layout;
use crate::db::entities::{artists, venues};
use crate::services::shows::ShowPartitions;
use crate::services::venues::VenueArea;

pub fn home_page() -> Markup {
    base_layout(
        "Home",
        html! {
            div class="text-center py-16" {
                h1 class="text-4xl font-bold text-gray-900 mb-4" { "Showbill" }
                p class="text-lg text-gray-600 mb-8" {
                    "Browse venues and artists, and book the next show."
                }
                div class="flex justify-center gap-4" {
                    a href="/venues" class="px-6 py-3 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                        "Find a Venue"
                    }
                    a href="/artists" class="px-6 py-3 bg-blue-500 hover:bg-blue-600 text-white font-semibold rounded-md" {
                        "Find an Artist"
                    }
                }
            }
        },
    )
}

pub fn venues_page(areas: &[VenueArea]) -> Markup {
    base_layout(
        "Venues",
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { "Venues" }
            (search_bar("/venues/search", "Search venues by name"))

            @if areas.is_empty() {
                p class="text-gray-600" { "No venues listed yet." }
            }

            @for area in areas {
                section class="mb-8" {
                    h2 class="text-xl font-semibold text-gray-800 mb-3" {
                        (area.city) ", " (area.state)
                        span class="text-sm text-gray-500 font-normal ml-2" {
                            "(" (area.venues.len()) ")"
                        }
                    }
                    ul class="space-y-2" {
                        @for venue in &area.venues {
                            li class="bg-white rounded-lg shadow-sm p-4" {
                                a href={(format!("/venues/{}", venue.id))}
                                  class="font-semibold text-gray-900 hover:text-primary" {
                                    (venue.name)
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn artists_page(artists: &[artists::Model]) -> Markup {
    base_layout(
        "Artists",
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { "Artists" }
            (search_bar("/artists/search", "Search artists by name"))

            @if artists.is_empty() {
                p class="text-gray-600" { "No artists listed yet." }
            }

            ul class="space-y-2" {
                @for artist in artists {
                    li class="bg-white rounded-lg shadow-sm p-4" {
                        a href={(format!("/artists/{}", artist.id))}
                          class="font-semibold text-gray-900 hover:text-primary" {
                            (artist.name)
                        }
                    }
                }
            }
        },
    )
}

pub fn shows_page(shows: &[ShowListingData]) -> Markup {
    base_layout(
        "Shows",
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { "Shows" }

            @if shows.is_empty() {
                p class="text-gray-600" { "No shows booked yet." }
            }

            ul class="space-y-2" {
                @for show in shows {
                    li class="bg-white rounded-lg shadow-sm p-4 flex justify-between items-center" {
                        div class="flex items-center gap-4" {
                            @if let Some(image) = &show.artist_image_link {
                                img src=(image) alt=(show.artist_name)
                                    class="w-12 h-12 rounded-full object-cover" loading="lazy";
                            }
                            a href={(format!("/artists/{}", show.artist_id))}
                              class="font-semibold text-gray-900 hover:text-primary" {
                                (show.artist_name)
                            }
                            span class="text-gray-600" { " at " }
                            a href={(format!("/venues/{}", show.venue_id))}
                              class="font-semibold text-gray-900 hover:text-primary" {
                                (show.venue_name)
                            }
                        }
                        span class="text-sm text-gray-600" { (show.start_time) }
                    }
                }
            }
        },
    )
}

pub fn search_results_page(
    heading: &str,
    search_action: &str,
    base_path: &str,
    search_term: &str,
    results: &[SearchResultData],
) -> Markup {
    base_layout(
        heading,
        html! {
            h1 class="text-2xl font-bold text-gray-900 mb-6" { (heading) }
            (search_bar(search_action, "Search by name"))

            p class="text-gray-600 mb-4" {
                (results.len()) " result"
                @if results.len() != 1 { "s" }
                " for \"" (search_term) "\""
            }

            ul class="space-y-2" {
                @for result in results {
                    (search_result_row(result, base_path))
                }
            }
        },
    )
}

pub fn venue_detail_page(venue: &venues::Model, partitions: &ShowPartitions) -> Markup {
    base_layout(
        &venue.name,
        html! {
            div class="bg-white rounded-lg shadow-md p-6 mb-8" {
                div class="flex flex-col md:flex-row gap-6" {
                    @if let Some(image) = &venue.image_link {
                        img src=(image) alt=(venue.name) class="w-full md:w-64 rounded-lg shadow-md object-cover";
                    }
                    div class="flex-grow" {
                        h1 class="text-3xl font-bold text-gray-900 mb-2" { (venue.name) }
                        (genre_badges(&venue.genre_list()))
                        dl class="mt-4 space-y-2 text-gray-700" {
                            div { dt class="inline font-medium" { "Address: " } dd class="inline" { (venue.address) } }
                            div { dt class="inline font-medium" { "City: " } dd class="inline" { (venue.city) ", " (venue.state) } }
                            @if let Some(phone) = &venue.phone {
                                div { dt class="inline font-medium" { "Phone: " } dd class="inline" { (phone) } }
                            }
                            @if let Some(website) = &venue.website {
                                div { dt class="inline font-medium" { "Website: " } dd class="inline" { a href=(website) class="text-primary hover:underline" { (website) } } }
                            }
                            @if let Some(facebook) = &venue.facebook_link {
                                div { dt class="inline font-medium" { "Facebook: " } dd class="inline" { a href=(facebook) class="text-primary hover:underline" { (facebook) } } }
                            }
                        }
                        div class="mt-4" {
                            (seeking_badge(venue.seeking_talent, "talent"))
                            @if let Some(description) = &venue.seeking_description {
                                p class="text-gray-600 mt-2" { (description) }
                            }
                        }
                        div class="mt-6 flex gap-3" {
                            a href={(format!("/venues/{}/edit", venue.id))}
                              class="px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white font-semibold rounded-md" {
                                "Edit"
                            }
                            (delete_button(&format!("/venues/{}", venue.id), "Delete this venue?", "/venues"))
                        }
                    }
                }
            }

            (show_partition_sections(partitions, "/artists"))
        },
    )
}

pub fn artist_detail_page(artist: &artists::Model, partitions: &ShowPartitions) -> Markup {
    base_layout(
        &artist.name,
        html! {
            div class="bg-white rounded-lg shadow-md p-6 mb-8" {
                div class="flex flex-col md:flex-row gap-6" {
                    @if let Some(image) = &artist.image_link {
                        img src=(image) alt=(artist.name) class="w-full md:w-64 rounded-lg shadow-md object-cover";
                    }
                    div class="flex-grow" {
                        h1 class="text-3xl font-bold text-gray-900 mb-2" { (artist.name) }
                        (genre_badges(&artist.genre_list()))
                        dl class="mt-4 space-y-2 text-gray-700" {
                            div { dt class="inline font-medium" { "City: " } dd class="inline" { (artist.city) ", " (artist.state) } }
                            @if let Some(phone) = &artist.phone {
                                div { dt class="inline font-medium" { "Phone: " } dd class="inline" { (phone) } }
                            }
                            @if let Some(website) = &artist.website {
                                div { dt class="inline font-medium" { "Website: " } dd class="inline" { a href=(website) class="text-primary hover:underline" { (website) } } }
                            }
                            @if let Some(facebook) = &artist.facebook_link {
                                div { dt class="inline font-medium" { "Facebook: " } dd class="inline" { a href=(facebook) class="text-primary hover:underline" { (facebook) } } }
                            }
                        }
                        div class="mt-4" {
                            (seeking_badge(artist.seeking_venue, "a venue"))
                            @if let Some(description) = &artist.seeking_description {
                                p class="text-gray-600 mt-2" { (description) }
                            }
                        }
                        div class="mt-6 flex gap-3" {
                            a href={(format!("/artists/{}/edit", artist.id))}
                              class="px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white font-semibold rounded-md" {
                                "Edit"
                            }
                            (delete_button(&format!("/artists/{}", artist.id), "Delete this artist?", "/artists"))
                        }
                    }
                }
            }

            (show_partition_sections(partitions, "/venues"))
        },
    )
}

fn show_partition_sections(partitions: &ShowPartitions, base_path: &str) -> Markup {
    html! {
        section class="mb-8" {
            h2 class="text-xl font-semibold text-gray-800 mb-3" {
                "Upcoming Shows (" (partitions.upcoming.len()) ")"
            }
            @if partitions.upcoming.is_empty() {
                p class="text-gray-600" { "No upcoming shows." }
            }
            div class="space-y-2" {
                @for entry in &partitions.upcoming {
                    (show_entry_card(entry, base_path))
                }
            }
        }

        section class="mb-8" {
            h2 class="text-xl font-semibold text-gray-800 mb-3" {
                "Past Shows (" (partitions.past.len()) ")"
            }
            @if partitions.past.is_empty() {
                p class="text-gray-600" { "No past shows." }
            }
            div class="space-y-2" {
                @for entry in &partitions.past {
                    (show_entry_card(entry, base_path))
                }
            }
        }
    }
}
