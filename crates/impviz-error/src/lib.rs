//! # impviz-error
//!
//! Unified error handling for impviz.
//!
//! Every failure in impviz is fatal for the invocation: the tool runs once,
//! talks to two external processes, and either produces a diagram or aborts.
//! There is accordingly no retry axis here, only a categorized error with
//! enough context to locate the cause.
//!
//! - **ErrorKind**: know what failed (e.g. `AnalyzerFailed`, `ParseFailed`)
//! - **Error context**: operation name plus key-value pairs for locating it
//! - **Error source**: wrap underlying errors without leaking raw types
//!
//! ```rust
//! use impviz_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ParseFailed, "attribute block without `];`")
//!         .with_operation("dot::parse_attrs")
//!         .with_context("line", "app_utils [style=solid"))
//! }
//! ```

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the impviz Error
pub type Result<T> = std::result::Result<T, Error>;
