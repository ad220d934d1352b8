//! Typed views of WeValu payloads
//!
//! The fetcher passes records through as opaque JSON. These types give
//! consumers (and the CLI's pretty output) a structured view; every field is
//! optional because the service omits unanswered ratings.

mod evaluation;
mod summary;

pub use evaluation::{
    Comment, Evaluation, EvaluationResponse, LeadershipOrganization, MboRating,
    PersonalityInteraction, StrategyImplementation,
};
pub use summary::{Average, IterationSummary, Summary, SummaryData};

#[cfg(test)]
mod tests;
