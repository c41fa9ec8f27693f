//! Read-only queries over a built [`ValueGraph`](crate::graph::ValueGraph).
//!
//! Both searches keep their traversal state in a
//! [`VisitedSet`](crate::graph::VisitedSet) owned by the call, so they take
//! `&ValueGraph` and may run concurrently over the same graph.

pub mod max_path;
pub mod reachability;

pub use max_path::MaxPath;
pub use reachability::{Reachability, SumPolicy};

use crate::graph::Value;

/// Value reported by sentinel-style queries when no path exists.
pub const NO_PATH: Value = -1;
