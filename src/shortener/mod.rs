//! Collision-safe filename shortening with symbolic link substitution
//!
//! A run has two phases:
//! - **Planning** walks the tree read-only and picks every eligible file
//!   (regular, not a link, name longer than the limit, old enough).
//! - **Execution** handles the picked files one at a time: compute a unique short
//!   name, rename the file, and link the old name to the new one.

pub mod eligibility;
pub mod entry;
pub mod error;
pub mod executor;
pub mod link;
pub mod name;
pub mod planner;

pub use eligibility::{check_eligibility, Eligibility, SkipReason};
pub use entry::FileEntry;
pub use error::ShortenError;
pub use executor::{execute_plan, Outcome, Shortener};
pub use link::rename_and_link;
pub use name::{shorten, split_name};
pub use planner::{plan_shortening, ShortenPlan};
