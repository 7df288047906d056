//! Name-matching strategies.

pub mod containment;
pub mod exact;

pub use containment::ContainmentMatcher;
pub use exact::ExactMatcher;
