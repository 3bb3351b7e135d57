pub(crate) mod color;
pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;

/// Declares a string-backed enum whose unknown names deserialize to a default variant.
///
/// Names compare case-insensitively with `-` and `_` ignored, so `"PING_PONG"`, `"ping-pong"`
/// and `"pingPong"` are the same value. Serialization writes the first listed name.
macro_rules! lenient_name_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident (default $default:ident) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Resolve a name, falling back to the default variant.
            pub fn from_name(name: &str) -> Self {
                let key = $crate::foundation::normalize_name(name);
                $(
                    if key == $crate::foundation::normalize_name($text)
                        $(|| key == $crate::foundation::normalize_name($alias))*
                    {
                        return Self::$variant;
                    }
                )+
                Self::$default
            }

            /// Canonical editor name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self::from_name(&name)
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.name().to_owned()
            }
        }
    };
}

pub(crate) use lenient_name_enum;

pub(crate) fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
