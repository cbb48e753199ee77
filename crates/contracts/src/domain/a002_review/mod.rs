pub mod aggregate;

pub use aggregate::{Review, ReviewDraft, ReviewSubmission, MAX_RATING, SAMPLE_COMMENTS};
