//! Macro for implementing wire conversions for uppercase enums
//!
//! The backend exchanges enumerations as uppercase string literals
//! (`"STEP1_APPROVED"`, `"ROLE_OFFICER"`). This macro generates `Display`,
//! `FromStr`, `Serialize` and `Deserialize` from a single variant table.
//!
//! # Example
//!
//! ```rust
//! use travelgate_domain::impl_wire_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Flag {
//!     On,
//!     Off,
//! }
//!
//! impl_wire_conversions!(Flag {
//!     On => "ON",
//!     Off => "OFF",
//! });
//!
//! assert_eq!("on".parse::<Flag>().unwrap(), Flag::On);
//! assert_eq!(Flag::Off.to_string(), "OFF");
//! ```

/// Implements Display, FromStr and serde for enums carried as uppercase
/// strings.
///
/// Two forms are supported:
///
/// - `impl_wire_conversions!(Enum { A => "A", ... })` – unknown input is an
///   error.
/// - `impl_wire_conversions!(Enum { A => "A", ... } else Other)` – unknown
///   input is preserved in the `Other(String)` variant and parsing never
///   fails. A JSON `null` deserializes as `Other(String::new())`.
///
/// Parsing trims surrounding whitespace and ignores case.
#[macro_export]
macro_rules! impl_wire_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }

        $crate::impl_wire_conversions!(@serde $enum_name);
    };

    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? } else $fallback:ident) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                    Self::$fallback(raw) => f.write_str(raw),
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(match s.trim().to_ascii_uppercase().as_str() {
                    $($str => Self::$variant,)+
                    _ => Self::$fallback(s.to_string()),
                })
            }
        }

        $crate::impl_wire_conversions!(@serialize $enum_name);

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };

    (@serialize $enum_name:ident) => {
        impl serde::Serialize for $enum_name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }
    };

    (@serde $enum_name:ident) => {
        $crate::impl_wire_conversions!(@serialize $enum_name);

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}
