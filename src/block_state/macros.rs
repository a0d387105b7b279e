macro_rules! blocks {
    ($(
        $(#[$meta:meta])*
        $variant:ident($kind:ty) => $item:ty
    );+ $(;)?) => {
        /// A block state of any known kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
        pub enum Block {
            $(
                $(#[$meta])*
                $variant($kind),
            )+
        }

        /// The item form of any known block kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
        pub enum Item {
            $(
                $(#[$meta])*
                $variant($item),
            )+
        }

        /// Kinds are enumerated in declaration order, each in its own order.
        impl BlockKind for Block {
            const KIND: &'static str = "block";
            type Item = Item;

            fn all_states() -> Vec<Self> {
                let mut states = Vec::new();
                $(
                    states.extend(<$kind as BlockKind>::all_states().into_iter().map(Self::$variant));
                )+
                states
            }

            fn name(&self) -> Result<String> {
                match self {
                    $(Self::$variant(block) => block.name()),+
                }
            }

            fn item(&self) -> Result<Item> {
                match self {
                    $(Self::$variant(block) => block.item().map(Item::$variant)),+
                }
            }

            fn item_drop(&self) -> Result<ItemStack> {
                match self {
                    $(Self::$variant(block) => block.item_drop()),+
                }
            }

            fn drops(&self) -> Result<Vec<ItemStack>> {
                match self {
                    $(Self::$variant(block) => block.drops()),+
                }
            }

            fn to_wire(&self, generation: ProtocolGeneration) -> Result<GenericBlockState> {
                match self {
                    $(Self::$variant(block) => block.to_wire(generation)),+
                }
            }
        }

        impl ItemKind for Item {
            fn name(&self) -> String {
                match self {
                    $(Self::$variant(item) => item.name()),+
                }
            }
        }

        $(
            impl From<$kind> for Block {
                fn from(block: $kind) -> Self {
                    Self::$variant(block)
                }
            }

            impl From<$item> for Item {
                fn from(item: $item) -> Self {
                    Self::$variant(item)
                }
            }
        )+
    };
}
