#![doc = include_str!("../README.md")]

//! Gattai dictionary data model.
//!
//! This crate defines the symbol and recipe types shared by the whole
//! toolchain, the dictionary container with override-precedence semantics,
//! and the closure set used as the termination oracle during decomposition.

pub mod closure;
pub mod recipe;
pub mod symbol;

pub use closure::ClosureSet;
pub use recipe::{Dictionary, Provenance, Recipe};
pub use symbol::{Symbol, SymbolParseError};
