//! Pair enumeration and bounded-parallel statistics orchestration.
//!
//! Enumerates all unordered pairs of a ticker universe, fans the
//! per-pair processor out across a bounded worker pool, and collects the
//! fixed-schema metric records for persistence.

pub mod orchestrator;
pub mod processor;
pub mod universe;

pub use orchestrator::Screener;
pub use processor::PairProcessor;
pub use universe::unique_pairs;
