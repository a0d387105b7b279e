use crate::{
    block_state::{BlockKind, GenericBlockState, ProtocolGeneration},
    error::InvalidState,
    item::ItemKind,
    material::{Material, Wood},
    util::Axis,
    Result,
};

const PILLAR_AXIS: &str = "pillar_axis";

/// A log, the trunk block of a tree. It comes in every [`Wood`] species and can be stripped with an
/// axe.
///
/// A log is immutable. Use [`Log::new`] whenever the species is known; [`Log::from_parts`] accepts
/// a missing species, which every operation then reports as [`InvalidState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Log {
    wood: Option<Wood>,
    stripped: bool,
    axis: Axis,
}

impl Log {
    /// Create a new log.
    pub const fn new(wood: Wood, stripped: bool, axis: Axis) -> Self {
        Self::from_parts(Some(wood), stripped, axis)
    }

    /// Create a log whose species may be unset.
    pub const fn from_parts(wood: Option<Wood>, stripped: bool, axis: Axis) -> Self {
        Self {
            wood,
            stripped,
            axis,
        }
    }

    /// The species of this log, or [`None`] if it was never set.
    pub const fn wood(&self) -> Option<Wood> {
        self.wood
    }

    /// Whether the bark of this log has been stripped.
    pub const fn stripped(&self) -> bool {
        self.stripped
    }

    /// The axis this log is facing.
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// This log facing along another axis.
    pub const fn with_axis(self, axis: Axis) -> Self {
        Self { axis, ..self }
    }

    /// This log with its bark stripped or restored.
    pub const fn with_stripped(self, stripped: bool) -> Self {
        Self { stripped, ..self }
    }

    fn require_wood(&self) -> Result<Wood> {
        self.wood.ok_or(InvalidState::unset(Self::KIND, "wood type"))
    }
}

/// The legacy generation keeps four species under `minecraft:log` and the two later ones under
/// `minecraft:log2`, each with its own property name.
const fn legacy_route(wood: Wood) -> (&'static str, &'static str) {
    match wood {
        Wood::Oak | Wood::Spruce | Wood::Birch | Wood::Jungle => ("minecraft:log", "old_log_type"),
        Wood::Acacia | Wood::DarkOak => ("minecraft:log2", "new_log_type"),
    }
}

impl BlockKind for Log {
    const KIND: &'static str = "log";
    type Item = LogItem;

    /// Axes outermost in index order, then stripped before unstripped, then species in catalog
    /// order.
    fn all_states() -> Vec<Self> {
        let mut states = Vec::with_capacity(Axis::ALL.len() * 2 * Wood::ALL.len());
        for axis in Axis::ALL {
            for stripped in [true, false] {
                states.extend(
                    Wood::ALL
                        .iter()
                        .map(|&wood| Self::new(wood, stripped, axis)),
                );
            }
        }
        states
    }

    fn name(&self) -> Result<String> {
        Ok(self.item()?.name())
    }

    fn item(&self) -> Result<LogItem> {
        Ok(LogItem {
            wood: self.require_wood()?,
            stripped: self.stripped,
        })
    }

    fn to_wire(&self, generation: ProtocolGeneration) -> Result<GenericBlockState> {
        let wood = self.require_wood()?;
        let state = match generation {
            ProtocolGeneration::Legacy => {
                let (name, property) = legacy_route(wood);
                GenericBlockState::new(name).with_property(property, wood.legacy_name())
            }
            ProtocolGeneration::Flattened => GenericBlockState::new(format!(
                "minecraft:{}{}_log",
                if self.stripped { "stripped_" } else { "" },
                wood.legacy_name(),
            )),
        };
        Ok(state.with_property(PILLAR_AXIS, self.axis.as_str()))
    }
}

/// A [`Log`] in item form. Items have no facing, so only the species and the strip state remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogItem {
    /// The species of the log.
    pub wood: Wood,
    /// Whether the log is stripped.
    pub stripped: bool,
}

impl ItemKind for LogItem {
    fn name(&self) -> String {
        if self.stripped {
            format!("Stripped {} Log", self.wood.display_name())
        } else {
            format!("{} Log", self.wood.display_name())
        }
    }
}
