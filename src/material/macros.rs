macro_rules! materials {
    ($(
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $display:literal),+ $(,)? }
    )+) => {$(
        $(#[$meta])*
        #[derive(
            Debug,
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
        #[strum(serialize_all = "snake_case")]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
        #[allow(missing_docs)]
        pub enum $name { $($variant),+ }

        impl $crate::material::Material for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn display_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $display),+
                }
            }

            fn legacy_name(self) -> &'static str {
                self.into()
            }
        }
    )+};
}
