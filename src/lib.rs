#![doc = include_str!("../README.md")]
#![cfg_attr(
    feature = "docs",
    cfg_attr(doc, doc = ::document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#))
)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
#![warn(missing_docs, rust_2018_idioms)]

pub mod block_state;
mod error;
pub mod item;
pub mod material;
pub mod palette;
pub mod util;

pub use block_state::{Block, BlockKind, GenericBlockState, ProtocolGeneration};
pub use error::{InvalidState, Result};
pub use item::{Item, ItemStack};
pub use palette::{Palette, PaletteError};
