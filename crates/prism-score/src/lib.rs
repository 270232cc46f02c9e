//! The PRISM composite opportunity rubric.
//!
//! Combines price, review count, rating, listing quality tier, and monthly
//! sales into a normalized 0–100 score with a proportional-points policy for
//! absent fields: missing data shrinks the denominator instead of
//! penalizing the row.

mod rubric;

pub use rubric::{evaluate, ScoreInputs};
