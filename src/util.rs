//! Other Minecraft related types.

/// One of the three spatial axes, e.g. the direction a log is facing.
///
/// The discriminants are the axis indices used for state enumeration, so [`Y`](Self::Y) comes
/// first. The canonical wire form is the lowercase axis letter.
///
/// ```
/// use mcpalette::util::Axis;
///
/// assert_eq!(Axis::ALL, [Axis::Y, Axis::Z, Axis::X]);
/// assert_eq!(Axis::X.to_string(), "x");
/// assert_eq!(Axis::from_index(1), Some(Axis::Z));
/// assert_eq!(Axis::from_index(3), None);
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Axis {
    /// The vertical axis.
    #[default]
    Y = 0,
    /// The north-south axis.
    Z = 1,
    /// The east-west axis.
    X = 2,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Self; 3] = [Self::Y, Self::Z, Self::X];

    /// The index of this axis in `0..3`.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Get the axis with the given [index](Self::index), if there is one.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Y),
            1 => Some(Self::Z),
            2 => Some(Self::X),
            _ => None,
        }
    }

    /// The canonical wire form of this axis.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
