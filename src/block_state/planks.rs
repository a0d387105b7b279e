use crate::{
    block_state::{BlockKind, GenericBlockState, ProtocolGeneration},
    item::ItemKind,
    material::{Material, Wood},
    Result,
};

/// Wooden planks, crafted from logs of the same species.
///
/// Planks have no facing, and their species is required at construction, so every operation on
/// them succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Planks {
    wood: Wood,
}

impl Planks {
    /// Create new planks.
    pub const fn new(wood: Wood) -> Self {
        Self { wood }
    }

    /// The species of these planks.
    pub const fn wood(&self) -> Wood {
        self.wood
    }
}

impl BlockKind for Planks {
    const KIND: &'static str = "planks";
    type Item = PlanksItem;

    fn all_states() -> Vec<Self> {
        Wood::ALL.iter().copied().map(Self::new).collect()
    }

    fn name(&self) -> Result<String> {
        Ok(self.item()?.name())
    }

    fn item(&self) -> Result<PlanksItem> {
        Ok(PlanksItem { wood: self.wood })
    }

    fn to_wire(&self, generation: ProtocolGeneration) -> Result<GenericBlockState> {
        Ok(match generation {
            ProtocolGeneration::Legacy => GenericBlockState::new("minecraft:planks")
                .with_property("wood_type", self.wood.legacy_name()),
            ProtocolGeneration::Flattened => {
                GenericBlockState::new(format!("minecraft:{}_planks", self.wood.legacy_name()))
            }
        })
    }
}

/// [`Planks`] in item form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanksItem {
    /// The species of the planks.
    pub wood: Wood,
}

impl ItemKind for PlanksItem {
    fn name(&self) -> String {
        format!("{} Planks", self.wood.display_name())
    }
}
