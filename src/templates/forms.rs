use maud::{html, Markup};

use super::components::field_error_messages;
use super::layout::base_layout;
use crate::forms::{ArtistForm, FieldError, ShowForm, VenueForm};

fn text_field(
    label: &str,
    name: &str,
    value: &str,
    errors: &[FieldError],
) -> Markup {
    html! {
        div class="mb-4" {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-1" { (label) }
            input
                type="text"
                id=(name)
                name=(name)
                value=(value)
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
            (field_error_messages(name, errors))
        }
    }
}

fn checkbox_field(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        div class="mb-4 flex items-center gap-2" {
            input type="checkbox" id=(name) name=(name) value="true" checked[checked];
            label for=(name) class="text-sm font-medium text-gray-700" { (label) }
        }
    }
}

fn submit_button(label: &str) -> Markup {
    html! {
        button
            type="submit"
            class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
            (label)
        }
    }
}

pub fn venue_form_page(
    heading: &str,
    action: &str,
    form: &VenueForm,
    errors: &[FieldError],
) -> Markup {
    base_layout(
        heading,
        html! {
            div class="max-w-xl mx-auto bg-white rounded-lg shadow-md p-6" {
                h1 class="text-2xl font-bold text-gray-900 mb-6" { (heading) }
                form method="post" action=(action) {
                    (text_field("Name", "name", &form.name, errors))
                    (text_field("Genres (comma separated)", "genres", &form.genres, errors))
                    (text_field("Address", "address", &form.address, errors))
                    (text_field("City", "city", &form.city, errors))
                    (text_field("State", "state", &form.state, errors))
                    (text_field("Phone", "phone", &form.phone, errors))
                    (text_field("Website", "website", &form.website, errors))
                    (text_field("Facebook Link", "facebook_link", &form.facebook_link, errors))
                    (checkbox_field("Seeking talent", "seeking_talent", form.seeking_talent))
                    (text_field("Seeking Description", "seeking_description", &form.seeking_description, errors))
                    (text_field("Image Link", "image_link", &form.image_link, errors))
                    (submit_button("Save Venue"))
                }
            }
        },
    )
}

pub fn artist_form_page(
    heading: &str,
    action: &str,
    form: &ArtistForm,
    errors: &[FieldError],
) -> Markup {
    base_layout(
        heading,
        html! {
            div class="max-w-xl mx-auto bg-white rounded-lg shadow-md p-6" {
                h1 class="text-2xl font-bold text-gray-900 mb-6" { (heading) }
                form method="post" action=(action) {
                    (text_field("Name", "name", &form.name, errors))
                    (text_field("Genres (comma separated)", "genres", &form.genres, errors))
                    (text_field("City", "city", &form.city, errors))
                    (text_field("State", "state", &form.state, errors))
                    (text_field("Phone", "phone", &form.phone, errors))
                    (text_field("Website", "website", &form.website, errors))
                    (text_field("Facebook Link", "facebook_link", &form.facebook_link, errors))
                    (checkbox_field("Seeking a venue", "seeking_venue", form.seeking_venue))
                    (text_field("Seeking Description", "seeking_description", &form.seeking_description, errors))
                    (text_field("Image Link", "image_link", &form.image_link, errors))
                    (submit_button("Save Artist"))
                }
            }
        },
    )
}

pub fn show_form_page(form: &ShowForm, errors: &[FieldError]) -> Markup {
    base_layout(
        "Book a Show",
        html! {
            div class="max-w-xl mx-auto bg-white rounded-lg shadow-md p-6" {
                h1 class="text-2xl font-bold text-gray-900 mb-6" { "Book a Show" }
                form method="post" action="/shows/create" {
                    (text_field("Artist ID", "artist_id", &form.artist_id, errors))
                    (text_field("Venue ID", "venue_id", &form.venue_id, errors))
                    div class="mb-4" {
                        label for="start_time" class="block text-sm font-medium text-gray-700 mb-1" { "Start Time" }
                        input
                            type="datetime-local"
                            id="start_time"
                            name="start_time"
                            value=(form.start_time)
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
                        (field_error_messages("start_time", errors))
                    }
                    (submit_button("Book Show"))
                }
            }
        },
    )
}
