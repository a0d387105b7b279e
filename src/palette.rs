//! Runtime IDs for block states.
//!
//! A [`Palette`] is built once from the enumeration of a [`BlockKind`] and never changes after
//! that. Share it by reference or in an [`Arc`](std::sync::Arc) with everything that needs to look
//! up runtime IDs.
//!
//! ## Example
//!
//! ```
//! use mcpalette::{block_state::Log, material::Wood, util::Axis, Block, Palette};
//!
//! let palette = Palette::<Block>::new().unwrap();
//! assert_eq!(palette.len(), 42);
//!
//! let log = Block::from(Log::new(Wood::Oak, true, Axis::Y));
//! assert_eq!(palette.runtime_id(&log), Some(0));
//! assert_eq!(palette.state(0), Some(&log));
//! ```

use std::collections::HashMap;

use crate::{
    block_state::{Block, BlockKind, GenericBlockState, ProtocolGeneration},
    InvalidState, Result,
};

/// Errors that occur while building a [`Palette`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// One of the states cannot be named or serialized.
    #[error(transparent)]
    Invalid(#[from] InvalidState),
    /// The same state was listed more than once.
    #[error("{state} is listed at both runtime ID {first} and {second}")]
    Duplicate {
        /// The debug representation of the repeated state.
        state: String,
        /// The runtime ID the state was first given.
        first: u32,
        /// The position of the repetition.
        second: u32,
    },
}

/// An immutable mapping between block states and their numeric runtime IDs.
#[derive(Debug, Clone)]
pub struct Palette<B: BlockKind = Block> {
    states: Vec<B>,
    ids: HashMap<B, u32>,
}

impl<B: BlockKind> Palette<B> {
    /// Build the palette of all [states](BlockKind::all_states) of `B`.
    pub fn new() -> Result<Self, PaletteError> {
        Self::from_states(B::all_states())
    }

    /// Build a palette assigning runtime IDs to `states` in iteration order.
    ///
    /// Fails if any state is invalid or listed more than once.
    pub fn from_states(states: impl IntoIterator<Item = B>) -> Result<Self, PaletteError> {
        let states = states.into_iter().collect::<Vec<_>>();
        let mut ids = HashMap::with_capacity(states.len());
        for (id, state) in (0u32..).zip(&states) {
            state.item()?;
            if let Some(first) = ids.insert(*state, id) {
                return Err(PaletteError::Duplicate {
                    state: format!("{state:?}"),
                    first,
                    second: id,
                });
            }
        }
        tracing::debug!(kind = B::KIND, states = states.len(), "built block palette");
        Ok(Self { states, ids })
    }

    /// The runtime ID of `state`, if it is part of this palette.
    pub fn runtime_id(&self, state: &B) -> Option<u32> {
        self.ids.get(state).copied()
    }

    /// The state with the given runtime ID.
    pub fn state(&self, runtime_id: u32) -> Option<&B> {
        self.states.get(usize::try_from(runtime_id).ok()?)
    }

    /// The number of states in this palette.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether this palette has no states at all.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over all runtime IDs and their states in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &B)> + '_ {
        (0u32..).zip(&self.states)
    }

    /// The wire form of every state, indexed by runtime ID.
    pub fn wire_entries(&self, generation: ProtocolGeneration) -> Result<Vec<GenericBlockState>> {
        self.states
            .iter()
            .map(|state| state.to_wire(generation))
            .collect()
    }
}
