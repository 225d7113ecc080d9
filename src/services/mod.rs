//! Tournament services
//!
//! This module wires factories, ships, the battle controller and the
//! presenters into the full Space Games sequence.

pub mod games;
