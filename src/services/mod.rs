pub mod shows;
pub mod venues;
