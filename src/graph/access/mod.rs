//! Traversal state shared by the graph searches.
//!
//! Kept apart from the graph itself so searches never mutate the vertices
//! they walk.

pub mod visited;

pub use visited::VisitedSet;
