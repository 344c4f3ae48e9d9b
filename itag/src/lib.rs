//! Catalog of known YouTube stream encoding profiles, keyed by itag.
//!
//! [`catalog::lookup`] turns an itag into a [`Format`]; format-selection code then
//! reads attributes through [`Format::value_for_key`] and orders candidates with
//! [`Format::compare_key`].

pub mod catalog;
pub mod codec;
pub mod compare;
pub mod error;
pub mod format;
pub mod key;
pub mod value;

pub use error::{FormatError, Result};
pub use format::{Format, Profile};
pub use key::{FormatKey, Key};
pub use value::{MetaValue, Value};
