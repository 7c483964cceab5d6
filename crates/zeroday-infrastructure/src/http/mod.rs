pub mod client;
mod contribution_source;

pub use client::HttpClient;
pub use contribution_source::HttpContributionSource;
