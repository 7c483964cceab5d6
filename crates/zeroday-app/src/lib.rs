// Application layer wires infrastructure adapters into the contribution feed
// and exposes presentation-ready DTOs

pub mod application;
pub mod presentation;

pub use application::dtos::ContributionGraphDto;
pub use application::services::{ContributionFeed, FeedOptions, FeedSnapshot};
pub use presentation::state::AppState;
