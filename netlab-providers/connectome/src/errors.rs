use std::{fmt, io, path::PathBuf};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
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
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!("Retrieve the stable [`", stringify!($CodeTy), "`] for this error.")]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors raised while reading or caching connectome tables.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConnectomeError {
    /// A table or cache file could not be opened, written or renamed.
    #[error("i/o failure on `{path}`: {source}")]
    Io {
        /// File that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A CSV row could not be decoded into its record type.
    #[error("invalid CSV in `{path}`: {source}")]
    Csv {
        /// File containing the row.
        path: PathBuf,
        /// Underlying CSV error, carrying the row position.
        #[source]
        source: csv::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConnectomeError`] variants.
    enum ConnectomeErrorCode for ConnectomeError {
        /// File-system failure.
        Io => Io { .. } => "CONNECTOME_IO",
        /// CSV decoding or encoding failure.
        Csv => Csv { .. } => "CONNECTOME_CSV",
    }
}

/// Errors raised by the run-based ROI deduplication scan.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CleanError {
    /// A grouping key reappeared after its run of records had ended.
    #[error("key {key} at index {index} already formed a run starting at index {run_start}")]
    NonContiguousKey {
        /// Debug rendering of the offending key.
        key: String,
        /// Position where the key reappeared.
        index: usize,
        /// Start of the earlier run with the same key.
        run_start: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`CleanError`] variants.
    enum CleanErrorCode for CleanError {
        /// Records sharing a key were not contiguous.
        NonContiguousKey => NonContiguousKey { .. } => "CLEAN_NON_CONTIGUOUS_KEY",
    }
}
