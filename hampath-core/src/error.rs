//! Error types for the hampath core library.
//!
//! Defines the error enum exposed by the public API, its stable codes, and a
//! convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

/// Generates a `Copy` code enum mirroring the variants of an error enum.
///
/// Provider crates reuse this macro so every error surfaced by the workspace
/// carries a stable machine-readable string.
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by graph lookups and path searches.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HampathError {
    /// A vertex was requested that the graph does not contain.
    #[error("vertex `{vertex}` does not exist in the graph")]
    UnknownVertex {
        /// Display form of the missing vertex.
        vertex: Arc<str>,
    },
}

impl HampathError {
    pub(crate) fn unknown_vertex(vertex: &impl fmt::Display) -> Self {
        Self::UnknownVertex {
            vertex: Arc::from(vertex.to_string()),
        }
    }
}

define_error_codes! {
    /// Stable codes describing [`HampathError`] variants.
    enum HampathErrorCode for HampathError {
        /// A vertex was requested that the graph does not contain.
        UnknownVertex => UnknownVertex { .. } => "HAMPATH_UNKNOWN_VERTEX",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, HampathError>;
