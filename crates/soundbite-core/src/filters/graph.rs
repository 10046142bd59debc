//! Filtergraph Composition
//!
//! Composes audio filters into the chain syntax consumed by FFmpeg's
//! audio-filter argument (`-af`).
//!
//! A graph is write-once, read-once: built from filters in application
//! order and serialized straight into the engine's `-af` argument.

use thiserror::Error;

use super::Filter;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised at filtergraph construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Filter at position {0} has an empty kind")]
    MissingKind(usize),
}

pub type FilterResult<T> = Result<T, FilterError>;

// =============================================================================
// Capability Trait
// =============================================================================

/// Capability contract for anything that can join a filtergraph
///
/// The graph depends only on this trait, keeping the set of filter kinds
/// open: any type with a stable kind and a segment rendering qualifies.
pub trait AudioFilter {
    /// Returns the filter kind as named in FFmpeg's filtergraph syntax
    fn kind(&self) -> &str;

    /// Renders the filter as one filtergraph segment
    fn serialize(&self) -> String;
}

impl AudioFilter for Filter {
    fn kind(&self) -> &str {
        Filter::kind(self)
    }

    fn serialize(&self) -> String {
        Filter::serialize(self)
    }
}

// =============================================================================
// Filter Graph Composition
// =============================================================================

/// An ordered chain of audio filters
///
/// Order is significant: it is the left-to-right application order in the
/// serialized chain, matching FFmpeg's sequential-apply semantics.
pub struct FilterGraph {
    filters: Vec<Box<dyn AudioFilter>>,
}

impl FilterGraph {
    /// Creates a graph from filters in application order
    ///
    /// Every element must satisfy the filter contract; a filter with an
    /// empty kind is rejected. This is a structural check only, not a
    /// validation of parameter values.
    pub fn new(filters: Vec<Box<dyn AudioFilter>>) -> FilterResult<Self> {
        for (index, filter) in filters.iter().enumerate() {
            if filter.kind().is_empty() {
                return Err(FilterError::MissingKind(index));
            }
        }
        Ok(Self { filters })
    }

    /// Returns the number of filters in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if the chain holds no filters
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Renders the full audio-filter argument string
    ///
    /// Segments joined with `,` in sequence order. An empty graph renders
    /// as the empty string.
    pub fn serialize(&self) -> String {
        self.filters
            .iter()
            .map(|filter| filter.serialize())
            .collect::<Vec<_>>()
            .join(",")
    }
}

// =============================================================================
// Tests
// =============================================================================
