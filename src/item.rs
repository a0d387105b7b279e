//! Items that blocks turn into when broken.

pub use crate::block_state::Item;

/// Anything that can sit in an inventory slot.
pub trait ItemKind {
    /// The human-readable name of this item, e.g. `Stripped Oak Log`.
    fn name(&self) -> String;
}

/// A number of identical items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    item: Item,
    count: u8,
}

impl ItemStack {
    /// Create a new stack of `count` items.
    pub fn new(item: impl Into<Item>, count: u8) -> Self {
        Self {
            item: item.into(),
            count,
        }
    }

    /// The item in this stack.
    pub const fn item(&self) -> Item {
        self.item
    }

    /// How many items this stack holds.
    pub const fn count(&self) -> u8 {
        self.count
    }
}
