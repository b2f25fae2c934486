//! Public visibility predicates
//!
//! Each status enum knows which of its values may be shown on a customer-facing
//! page. The data layer binds [`ProductStatus::publicly_visible`] and friends
//! into its queries so the predicates live in exactly one place.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a stored status string is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {entity} status \"{value}\"")]
pub struct StatusParseError {
    /// Entity the status belongs to.
    pub entity: &'static str,

    /// Rejected value.
    pub value: String,
}

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $entity:literal {
            $($(#[$variant_meta:meta])* $variant:ident => $text:literal, $visible:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
        }

        impl $name {
            /// Every status value.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Stored representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            /// Whether entities with this status appear on public pages.
            pub fn is_publicly_visible(self) -> bool {
                match self {
                    $(Self::$variant => $visible,)+
                }
            }

            /// Stored representations of every publicly visible status.
            pub fn publicly_visible() -> Vec<&'static str> {
                Self::ALL
                    .iter()
                    .copied()
                    .filter(|status| status.is_publicly_visible())
                    .map(Self::as_str)
                    .collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = StatusParseError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(StatusParseError {
                        entity: $entity,
                        value: value.to_string(),
                    }),
                }
            }
        }
    };
}

status_enum! {
    /// Product publication status.
    ProductStatus, "product" {
        /// Listed and purchasable.
        Public => "public", true;
        /// Hidden from the storefront.
        Private => "private", false;
    }
}

status_enum! {
    /// Course section publication status.
    SectionStatus, "section" {
        /// Shown in the course outline.
        Public => "public", true;
        /// Hidden from the course outline.
        Private => "private", false;
    }
}

status_enum! {
    /// Lesson publication status.
    LessonStatus, "lesson" {
        /// Listed, watchable by owners.
        Public => "public", true;
        /// Hidden from the course outline.
        Private => "private", false;
        /// Listed and watchable by anyone.
        Preview => "preview", true;
    }
}
