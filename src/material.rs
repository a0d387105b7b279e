//! Closed catalogs of property values shared by many block kinds.
//!
//! ## Example
//!
//! ```
//! use mcpalette::material::{Material, Wood};
//!
//! assert_eq!(Wood::DarkOak.display_name(), "Dark Oak");
//! assert_eq!(Wood::DarkOak.legacy_name(), "dark_oak");
//! assert_eq!("dark_oak".parse::<Wood>(), Ok(Wood::DarkOak));
//! assert_eq!(Wood::ALL.len(), 6);
//! ```

use std::{fmt::Debug, hash::Hash};

#[macro_use]
mod macros;

/// A closed category of property values, e.g. [`Wood`].
///
/// Values are plain enum variants, so identity comparison never parses strings. Adding a value to a
/// category is a change to the catalog itself, and every exhaustive `match` over the category will
/// then refuse to compile until it handles the new value.
pub trait Material: Debug + Clone + Copy + PartialEq + Eq + Hash + 'static {
    /// Every value of this category in declaration order.
    ///
    /// State enumeration iterates this slice, so reordering it changes palette IDs.
    const ALL: &'static [Self];

    /// The human-readable name used in block and item names, e.g. `Dark Oak`.
    fn display_name(self) -> &'static str;

    /// The short identifier used on the wire, e.g. `dark_oak`.
    fn legacy_name(self) -> &'static str;
}

materials! {
    /// The species of wood a wooden block is made of.
    Wood {
        Oak => "Oak",
        Spruce => "Spruce",
        Birch => "Birch",
        Jungle => "Jungle",
        Acacia => "Acacia",
        DarkOak => "Dark Oak",
    }
}
