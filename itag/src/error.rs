use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unknown format key {0:?}")]
    UnknownKey(String),

    #[error("itag {itag} has no resolution label")]
    EmptyResolution { itag: u32 },

    #[error("itag {itag}: malformed resolution label {label:?}, expected digits followed by 'p'")]
    MalformedResolution { itag: u32, label: String },

    #[error("itag {itag} appears more than once in the catalog")]
    DuplicateItag { itag: u32 },

    #[error("itag {itag} has an empty container extension")]
    EmptyExtension { itag: u32 },

    #[error("metadata value has type {got}, expected {expected}")]
    MetaTypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, FormatError>;
