use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Well-known attributes every format carries.
///
/// The string form of each variant is the key name used by filter expressions
/// and serialised output (`"itag"`, `"ext"`, `"res"`, `"videnc"`, `"audenc"`, `"audbr"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum FormatKey {
    #[serde(rename = "itag")]
    Itag,
    #[serde(rename = "ext")]
    Extension,
    #[serde(rename = "res")]
    Resolution,
    #[serde(rename = "videnc")]
    VideoEncoding,
    #[serde(rename = "audenc")]
    AudioEncoding,
    #[serde(rename = "audbr")]
    AudioBitrate,
}

impl FormatKey {
    pub const ALL: [FormatKey; 6] = [
        FormatKey::Itag,
        FormatKey::Extension,
        FormatKey::Resolution,
        FormatKey::VideoEncoding,
        FormatKey::AudioEncoding,
        FormatKey::AudioBitrate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormatKey::Itag => "itag",
            FormatKey::Extension => "ext",
            FormatKey::Resolution => "res",
            FormatKey::VideoEncoding => "videnc",
            FormatKey::AudioEncoding => "audenc",
            FormatKey::AudioBitrate => "audbr",
        }
    }
}

impl fmt::Display for FormatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatKey {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| FormatError::UnknownKey(s.to_string()))
    }
}

/// Any key accepted by [`Format::value_for_key`](crate::format::Format::value_for_key):
/// a well-known attribute, or a caller-defined metadata key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    Known(FormatKey),
    Custom(&'a str),
}

impl From<FormatKey> for Key<'_> {
    fn from(key: FormatKey) -> Self {
        Key::Known(key)
    }
}

/// Strings naming a well-known attribute resolve to it; anything else is a metadata key.
impl<'a> From<&'a str> for Key<'a> {
    fn from(s: &'a str) -> Self {
        match s.parse() {
            Ok(known) => Key::Known(known),
            Err(_) => Key::Custom(s),
        }
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(s: &'a String) -> Self {
        Key::from(s.as_str())
    }
}
