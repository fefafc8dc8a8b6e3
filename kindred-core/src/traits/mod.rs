pub mod clock;
pub mod privacy;
pub mod repository;

pub use clock::{Clock, SystemClock};
pub use privacy::PrivacyFilter;
pub use repository::{CandidateFilters, Repository};
