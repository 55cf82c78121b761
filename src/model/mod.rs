//! Domain records: officials, tiers, stations, and assignments.

mod assignment;
mod official;

pub use assignment::{Assignment, Station};
pub use official::{tier_weight, Official, Tier, RATING_MAX, RATING_MIN, TIER_WEIGHTS};
