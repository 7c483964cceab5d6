mod layout;
mod series;
mod source;
mod summary;
mod synthetic;
mod value_objects;


pub use layout::{chunk_weeks, month_labels, MonthLabel, Week, DAYS_PER_WEEK};
pub use series::{ActivitySeries, SeriesRepair};
pub use source::{ContributionSource, RemoteContributions};
pub use summary::{ActivitySummary, Streaks};
pub use synthetic::SyntheticActivityGenerator;
pub use value_objects::{ActivityDay, ActivityLevel, DataOrigin};
