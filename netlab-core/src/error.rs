//! Error types for the netlab core library.
//!
//! Each public error enum carries structured fields and exposes a stable
//! machine-readable code so callers (and the CLI) can report failures without
//! matching on display strings.

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
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while generating a random graph model.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenerationError {
    /// The default Erdos-Renyi edge probability `1/n + 0.1` needs `n > 0`.
    #[error("model `{model}` cannot derive a default edge probability for zero nodes")]
    UndefinedDefaultProbability {
        /// Model that required the default.
        model: &'static str,
    },
    /// A probability parameter was NaN or outside `[0, 1]` where required.
    #[error("model `{model}` parameter `{parameter}` must be a probability (got {value})")]
    InvalidProbability {
        /// Model that rejected the value.
        model: &'static str,
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },
    /// Watts-Strogatz requested more ring neighbours than nodes.
    #[error("model `{model}` needs k <= n (got k={k}, n={n})")]
    NeighbourCountExceedsNodes {
        /// Model that rejected the value.
        model: &'static str,
        /// Requested ring neighbour count.
        k: usize,
        /// Requested node count.
        n: usize,
    },
    /// A preferential-attachment model received an unusable edge count.
    #[error("model `{model}` needs {constraint} (got m={m}, n={n})")]
    InvalidAttachment {
        /// Model that rejected the value.
        model: &'static str,
        /// Human-readable bound that was violated.
        constraint: &'static str,
        /// Requested edges per new node.
        m: usize,
        /// Requested node count.
        n: usize,
    },
    /// Rewiring never produced a connected graph.
    #[error("model `{model}` did not produce a connected graph after {tries} attempts")]
    NotConnected {
        /// Model that gave up.
        model: &'static str,
        /// Number of attempts made.
        tries: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GenerationError`] variants.
    enum GenerationErrorCode for GenerationError {
        /// The default edge probability is undefined for zero nodes.
        UndefinedDefaultProbability => UndefinedDefaultProbability { .. } => "GENERATION_UNDEFINED_DEFAULT_PROBABILITY",
        /// A probability parameter was invalid.
        InvalidProbability => InvalidProbability { .. } => "GENERATION_INVALID_PROBABILITY",
        /// More ring neighbours than nodes.
        NeighbourCountExceedsNodes => NeighbourCountExceedsNodes { .. } => "GENERATION_NEIGHBOUR_COUNT_EXCEEDS_NODES",
        /// Unusable preferential-attachment edge count.
        InvalidAttachment => InvalidAttachment { .. } => "GENERATION_INVALID_ATTACHMENT",
        /// Rewiring never produced a connected graph.
        NotConnected => NotConnected { .. } => "GENERATION_NOT_CONNECTED",
    }
}

/// An error produced while reading a graph dataset from disk.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be opened or read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// File that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A delimited record could not be decoded.
    #[error("failed to decode `{path}`: {source}")]
    Csv {
        /// File that triggered the failure.
        path: PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
    /// A water-network row had neither the pipe nor the coordinate layout.
    #[error("{path}:{line}: expected 9 pipe fields or 3 coordinate fields, found {fields}")]
    MalformedRow {
        /// File containing the row.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Number of tab-separated fields found.
        fields: usize,
    },
    /// A numeric field could not be parsed.
    #[error("{path}:{line}: `{value}` is not a valid number")]
    InvalidNumber {
        /// File containing the value.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Raw text that failed to parse.
        value: String,
    },
    /// A GML document was syntactically or structurally invalid.
    #[error("{path}:{line}: invalid GML: {message}")]
    Gml {
        /// File containing the document.
        path: PathBuf,
        /// One-based line number closest to the problem.
        line: usize,
        /// Description of the problem.
        message: String,
    },
    /// The dataset contained no nodes, so no component can be kept.
    #[error("dataset `{dataset}` contains no nodes")]
    EmptyGraph {
        /// Catalogue key of the dataset.
        dataset: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`DatasetError`] variants.
    enum DatasetErrorCode for DatasetError {
        /// The dataset file could not be opened or read.
        Io => Io { .. } => "DATASET_IO",
        /// A delimited record could not be decoded.
        Csv => Csv { .. } => "DATASET_CSV",
        /// A water-network row had an unexpected field count.
        MalformedRow => MalformedRow { .. } => "DATASET_MALFORMED_ROW",
        /// A numeric field could not be parsed.
        InvalidNumber => InvalidNumber { .. } => "DATASET_INVALID_NUMBER",
        /// A GML document was invalid.
        Gml => Gml { .. } => "DATASET_INVALID_GML",
        /// The dataset contained no nodes.
        EmptyGraph => EmptyGraph { .. } => "DATASET_EMPTY_GRAPH",
    }
}

/// Error type produced by [`crate::GraphCatalogue::load`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// A model was requested without a mandatory parameter.
    #[error("model `{model}` requires parameter `{parameter}`")]
    MissingParameter {
        /// Catalogue key of the model.
        model: &'static str,
        /// Name of the missing parameter.
        parameter: &'static str,
    },
    /// A random model rejected its parameters.
    #[error("model `{model}` failed: {error}")]
    Generation {
        /// Catalogue key of the model.
        model: &'static str,
        /// Underlying generator error.
        #[source]
        error: GenerationError,
    },
    /// A file-backed dataset could not be loaded.
    #[error("dataset `{dataset}` failed: {error}")]
    Dataset {
        /// Catalogue key of the dataset.
        dataset: &'static str,
        /// Underlying reader error.
        #[source]
        error: DatasetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`CatalogueError`] variants.
    enum CatalogueErrorCode for CatalogueError {
        /// A model was requested without a mandatory parameter.
        MissingParameter => MissingParameter { .. } => "CATALOGUE_MISSING_PARAMETER",
        /// A random model rejected its parameters.
        GenerationFailure => Generation { .. } => "CATALOGUE_GENERATION_FAILURE",
        /// A file-backed dataset could not be loaded.
        DatasetFailure => Dataset { .. } => "CATALOGUE_DATASET_FAILURE",
    }
}

impl CatalogueError {
    /// Retrieve the inner [`GenerationErrorCode`] when a model failed.
    pub const fn generation_code(&self) -> Option<GenerationErrorCode> {
        match self {
            Self::Generation { error, .. } => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`DatasetErrorCode`] when a dataset failed.
    pub const fn dataset_code(&self) -> Option<DatasetErrorCode> {
        match self {
            Self::Dataset { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the catalogue API.
pub type Result<T> = core::result::Result<T, CatalogueError>;
