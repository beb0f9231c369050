#![doc = include_str!("../README.md")]

//! Gattai dictionary engine.
//!
//! Pipeline order: closure set -> decomposer -> recipe synthesizer ->
//! dictionary assembly -> reachability validator. The validator never
//! mutates the dictionary; it is a pure analysis pass whose report decides
//! whether manual overrides are needed.

pub mod assemble;
pub mod decompose;
pub mod difficulty;
pub mod lints;
pub mod reachability;
pub mod report;
pub mod synthesize;

pub use assemble::{assemble, AssemblyOutput, AssemblyStats};
pub use decompose::{DecomposePolicy, Decomposer, MAX_DEPTH, MAX_PARTS};
pub use reachability::{validate_reachability, Cause, ReachabilityReport, Verdict};
pub use synthesize::{synthesize, Synthesis};
