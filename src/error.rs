use thiserror::Error;

/// Errors returned by the clustering routines in this crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// No points were supplied, so no seed center can be drawn.
    #[error("empty input")]
    EmptyInput,

    /// Requested cluster count exceeds the number of distinct input values.
    #[error("degenerate input: {requested} clusters requested, {distinct} distinct points")]
    DegenerateInput {
        /// Requested number of clusters.
        requested: usize,
        /// Number of distinct point values in the input.
        distinct: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Pixel buffer length does not line up with the pixel layout.
    #[error("pixel buffer of {len} bytes is not a multiple of the {stride}-byte pixel stride")]
    PixelBuffer {
        /// Buffer length in bytes.
        len: usize,
        /// Bytes per pixel for the requested layout.
        stride: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
