//! The chunked execution engine.
//!
//! The engine is the whole hard surface of the crate: a pure chunk planner,
//! a task dispatcher with a single fork/join barrier per call, an
//! ordinal-keyed result collector, and a strictly sequential reducer. The
//! public operation traits in [`crate::ops`] are thin facades over these
//! four pieces; they select a construction strategy for the output and
//! delegate everything else here.

pub mod chunk;
pub mod fold;
pub mod merge;
pub mod task;
