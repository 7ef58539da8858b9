//! Shared graph model for `graphstep`.
//!
//! This crate holds the types that cross the boundary between the engines in
//! `graphstep` and whatever renders their traces: the [`Graph`](core::entities::Graph)
//! being analysed and the closed set of visual states a node or edge can be in.
pub mod core;
