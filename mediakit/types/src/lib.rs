/*!
    Shared types for the mediakit crate ecosystem.

    This crate defines the vocabulary that crosses crate boundaries. It has
    no dependency on FFmpeg, making it lightweight and enabling consumers to
    depend on it without pulling in native bindings.

    # Core Types

    - [`MediaOptions`] - Decoder settings passed into an open operation
    - [`VideoStreamInfo`] - Eagerly resolved video stream parameters
    - [`Rational`] - Rational numbers for frame rates

    # Error Handling

    - [`Error`] and [`Result`] - Session-level error taxonomy
    - [`BackendError`] - Failures reported by a decoder backend
*/

mod error;
mod info;
mod options;

pub use error::{BackendError, Cause, Error, Result};
pub use info::{Rational, VideoStreamInfo};
pub use options::MediaOptions;
