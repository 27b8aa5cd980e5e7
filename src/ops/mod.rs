//! The public operation facades.
//!
//! One extension trait per container shape and mutability: ordered
//! sequences ([`sequence::SequenceFilters`], [`sequence::SequenceFiltersMut`])
//! and unordered sets ([`set::SetFilters`], [`set::SetFiltersMut`]). Each
//! facade only selects a construction strategy for the output — build a new
//! collection, or compute new contents and swap them in wholesale — and
//! delegates the actual work to the engine.

pub mod sequence;
pub mod set;
