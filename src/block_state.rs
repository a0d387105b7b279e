//! Types and traits describing block states and their wire forms.
//!
//! ## Example
//!
//! ```
//! use mcpalette::{
//!     block_state::{Log, LogItem},
//!     material::Wood,
//!     util::Axis,
//!     BlockKind, ItemStack, ProtocolGeneration,
//! };
//!
//! let log = Log::new(Wood::Birch, true, Axis::Z);
//! assert_eq!(log.name().unwrap(), "Stripped Birch Log");
//! assert_eq!(
//!     log.item_drop().unwrap(),
//!     ItemStack::new(LogItem { wood: Wood::Birch, stripped: true }, 1),
//! );
//!
//! let legacy = log.to_wire(ProtocolGeneration::Legacy).unwrap();
//! assert_eq!(legacy.name, "minecraft:log");
//! assert_eq!(legacy.properties["old_log_type"], "birch");
//! assert_eq!(legacy.properties["pillar_axis"], "z");
//!
//! let flattened = log.to_wire(ProtocolGeneration::Flattened).unwrap();
//! assert_eq!(flattened.name, "minecraft:stripped_birch_log");
//! ```

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use crate::{
    item::{ItemKind, ItemStack},
    Result,
};

pub use self::{
    log::{Log, LogItem},
    planks::{Planks, PlanksItem},
};

#[macro_use]
mod macros;
mod log;
mod planks;

/// A family of block states, e.g. all logs.
///
/// Implementors are small immutable values. Every operation is a pure function of the value, so
/// states can be shared between threads freely.
pub trait BlockKind: Debug + Clone + Copy + PartialEq + Eq + Hash + Send + Sync + 'static {
    /// Short name of this kind, used in error messages, e.g. `log`.
    const KIND: &'static str;

    /// The fields of a state that survive when it is broken and picked up as an item.
    type Item: ItemKind + Into<crate::Item>;

    /// Every valid state of this kind.
    ///
    /// The order is part of the persisted format: palette runtime IDs are positions in this list,
    /// so reordering it changes the IDs of existing worlds.
    fn all_states() -> Vec<Self>;

    /// The human-readable name of this state, e.g. `Stripped Oak Log`.
    fn name(&self) -> Result<String>;

    /// The canonical item form of this state with all world-only fields removed.
    fn item(&self) -> Result<Self::Item>;

    /// A single [`item`](Self::item) as an [`ItemStack`].
    fn item_drop(&self) -> Result<ItemStack> {
        Ok(ItemStack::new(self.item()?, 1))
    }

    /// All items dropped when this block is broken.
    fn drops(&self) -> Result<Vec<ItemStack>> {
        Ok(vec![self.item_drop()?])
    }

    /// The identifier and property bag representing this state in the given protocol generation.
    fn to_wire(&self, generation: ProtocolGeneration) -> Result<GenericBlockState>;
}

/// A generation of the wire protocol with its own block identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProtocolGeneration {
    /// Block kinds share a few numeric-era identifiers and tell species apart by a property.
    ///
    /// Some kinds did not fit under a single identifier, so their species are split between two,
    /// e.g. `minecraft:log` and `minecraft:log2`.
    Legacy,
    /// Every species and variant has an identifier of its own, e.g. `minecraft:stripped_oak_log`.
    Flattened,
}

impl ProtocolGeneration {
    /// All supported generations, oldest first.
    pub const ALL: [Self; 2] = [Self::Legacy, Self::Flattened];
}

/// A generic block state that can represent _any_ possible block state by storing the name and
/// properties as strings.
///
/// This is the form a block state takes on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct GenericBlockState {
    /// The id of this block, e.g. `minecraft:log`.
    pub name: String,

    /// The properties of this block state as a map from names to values.
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: HashMap<String, String>,
}

impl GenericBlockState {
    /// Create a new state with the given id and no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    /// Add a property to this state, replacing any previous value of the same name.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

/// Builds the `Name`/`Properties` compound used by NBT block palettes.
impl From<GenericBlockState> for fastnbt::Value {
    fn from(state: GenericBlockState) -> Self {
        let properties = state
            .properties
            .into_iter()
            .map(|(name, value)| (name, fastnbt::Value::String(value)))
            .collect();
        fastnbt::Value::Compound(HashMap::from([
            ("Name".to_owned(), fastnbt::Value::String(state.name)),
            ("Properties".to_owned(), fastnbt::Value::Compound(properties)),
        ]))
    }
}

blocks! {
    /// `log`, see [`Log`].
    Log(Log) => LogItem;
    /// `planks`, see [`Planks`].
    Planks(Planks) => PlanksItem;
}
