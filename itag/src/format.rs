use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::codec::{self, CodecInfo};
use crate::compare;
use crate::error::{FormatError, Result};
use crate::key::{FormatKey, Key};
use crate::value::{MetaValue, Value};

/// One row of the format catalog: the fixed attributes of an encoding profile.
///
/// Empty codec strings mean the profile carries no track of that kind; an empty
/// resolution means no vertical size is published (audio-only profiles, and itag 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Format id assigned by the hosting service.
    pub itag: u32,
    /// Container extension (e.g. "mp4", "webm").
    pub extension: &'static str,
    /// Resolution label such as "720p", or empty.
    pub resolution: &'static str,
    /// Video codec name, empty when there is no video track.
    pub video_encoding: &'static str,
    /// Audio codec name, empty when there is no audio track.
    pub audio_encoding: &'static str,
    /// Audio bitrate in kbit/s, 0 when unknown.
    pub audio_bitrate: u32,
}

impl Profile {
    pub fn has_video(&self) -> bool {
        !self.video_encoding.is_empty()
    }

    pub fn has_audio(&self) -> bool {
        !self.audio_encoding.is_empty()
    }

    /// DASH video stream. Decided by the codec columns only, so itag 248 counts
    /// as video-only despite its nonzero audio bitrate.
    pub fn is_video_only(&self) -> bool {
        self.has_video() && !self.has_audio()
    }

    pub fn is_audio_only(&self) -> bool {
        self.has_audio() && !self.has_video()
    }

    /// Both tracks in one stream (progressive download and live profiles).
    pub fn is_muxed(&self) -> bool {
        self.has_video() && self.has_audio()
    }

    pub fn video_codec(&self) -> Option<&'static CodecInfo> {
        codec::codec_info(self.video_encoding)
    }

    pub fn audio_codec(&self) -> Option<&'static CodecInfo> {
        codec::codec_info(self.audio_encoding)
    }

    /// Vertical resolution in pixels, parsed strictly from the label ("720p" -> 720).
    pub fn height(&self) -> Result<u32> {
        if self.resolution.is_empty() {
            return Err(FormatError::EmptyResolution { itag: self.itag });
        }
        let malformed = || FormatError::MalformedResolution {
            itag: self.itag,
            label: self.resolution.to_string(),
        };
        let digits = self.resolution.strip_suffix('p').ok_or_else(malformed)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        digits.parse().map_err(|_| malformed())
    }
}

/// A format descriptor: a copy of a catalog row plus a private metadata bag.
///
/// Every descriptor owns its bag; cloning or looking up the same itag twice never
/// shares annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Format {
    #[serde(flatten)]
    profile: Profile,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    meta: BTreeMap<String, MetaValue>,
}

impl From<Profile> for Format {
    fn from(profile: Profile) -> Self {
        Self {
            profile,
            meta: BTreeMap::new(),
        }
    }
}

impl From<&Profile> for Format {
    fn from(profile: &Profile) -> Self {
        Self::from(*profile)
    }
}

impl Format {
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn itag(&self) -> u32 {
        self.profile.itag
    }

    pub fn extension(&self) -> &'static str {
        self.profile.extension
    }

    pub fn resolution(&self) -> &'static str {
        self.profile.resolution
    }

    pub fn video_encoding(&self) -> &'static str {
        self.profile.video_encoding
    }

    pub fn audio_encoding(&self) -> &'static str {
        self.profile.audio_encoding
    }

    pub fn audio_bitrate(&self) -> u32 {
        self.profile.audio_bitrate
    }

    /// Typed value of a well-known attribute. Never absent.
    pub fn attribute(&self, key: FormatKey) -> Value<'static> {
        let p = &self.profile;
        match key {
            FormatKey::Itag => Value::Int(p.itag as i64),
            FormatKey::Extension => Value::Str(p.extension),
            FormatKey::Resolution => Value::Str(p.resolution),
            FormatKey::VideoEncoding => Value::Str(p.video_encoding),
            FormatKey::AudioEncoding => Value::Str(p.audio_encoding),
            FormatKey::AudioBitrate => Value::Int(p.audio_bitrate as i64),
        }
    }

    /// Caller-supplied metadata stored under `key`, if any.
    pub fn meta(&self, key: &str) -> Option<&MetaValue> {
        self.meta.get(key)
    }

    /// Store an annotation, returning the value it replaced.
    ///
    /// Keys that name a well-known attribute (e.g. "ext") are stored but stay
    /// shadowed for [`Format::value_for_key`]; read them back with [`Format::meta`].
    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Option<MetaValue> {
        let key = key.into();
        let previous = self.meta.insert(key.clone(), value.into());
        if previous.is_some() {
            log::trace!("itag {}: replaced metadata {:?}", self.profile.itag, key);
        }
        previous
    }

    pub fn remove_meta(&mut self, key: &str) -> Option<MetaValue> {
        self.meta.remove(key)
    }

    /// Metadata keys in sorted order.
    pub fn meta_keys(&self) -> impl Iterator<Item = &str> {
        self.meta.keys().map(String::as_str)
    }

    /// Uniform accessor used by filtering code.
    ///
    /// Well-known keys always yield their field. Any other key reads the metadata
    /// bag and yields `None` when nothing was stored under it.
    pub fn value_for_key<'k>(&self, key: impl Into<Key<'k>>) -> Option<Value<'_>> {
        match key.into() {
            Key::Known(k) => Some(self.attribute(k)),
            Key::Custom(name) => self.meta.get(name).map(Value::from),
        }
    }

    /// Three-way comparison by `key`; see [`compare::compare_key`].
    pub fn compare_key(&self, other: &Format, key: FormatKey) -> i64 {
        compare::compare_key(self, other, key)
    }

    /// [`Format::compare_key`] as an [`Ordering`], for `sort_by`.
    pub fn cmp_by(&self, other: &Format, key: FormatKey) -> Ordering {
        self.compare_key(other, key).cmp(&0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HD: Profile = Profile {
        itag: 22,
        extension: "mp4",
        resolution: "720p",
        video_encoding: "H.264",
        audio_encoding: "aac",
        audio_bitrate: 192,
    };

    #[test]
    fn test_attribute_per_key() {
        let f = Format::from(HD);
        assert_eq!(f.attribute(FormatKey::Itag), Value::Int(22));
        assert_eq!(f.attribute(FormatKey::Extension), Value::Str("mp4"));
        assert_eq!(f.attribute(FormatKey::Resolution), Value::Str("720p"));
        assert_eq!(f.attribute(FormatKey::VideoEncoding), Value::Str("H.264"));
        assert_eq!(f.attribute(FormatKey::AudioEncoding), Value::Str("aac"));
        assert_eq!(f.attribute(FormatKey::AudioBitrate), Value::Int(192));
    }

    #[test]
    fn test_value_for_key_known_names() {
        let f = Format::from(HD);
        assert_eq!(f.value_for_key("videnc"), Some(Value::Str("H.264")));
        assert_eq!(f.value_for_key(FormatKey::AudioBitrate), Some(Value::Int(192)));
    }

    #[test]
    fn test_value_for_key_meta_and_absent() {
        let mut f = Format::from(HD);
        assert_eq!(f.value_for_key("url"), None);

        assert!(f.set_meta("url", "https://example.invalid/22").is_none());
        f.set_meta("expires", 1_700_000_000i64);
        f.set_meta("ciphered", false);

        assert_eq!(f.value_for_key("url"), Some(Value::Str("https://example.invalid/22")));
        assert_eq!(f.value_for_key("expires"), Some(Value::Int(1_700_000_000)));
        assert_eq!(f.value_for_key("ciphered"), Some(Value::Bool(false)));
        assert_eq!(f.meta_keys().collect::<Vec<_>>(), ["ciphered", "expires", "url"]);
    }

    #[test]
    fn test_set_meta_replaces_and_remove() {
        let mut f = Format::from(HD);
        f.set_meta("n", 1i64);
        assert_eq!(f.set_meta("n", 2i64), Some(MetaValue::Int(1)));
        assert_eq!(f.remove_meta("n"), Some(MetaValue::Int(2)));
        assert_eq!(f.meta("n"), None);
        assert_eq!(f.remove_meta("n"), None);
    }

    #[test]
    fn test_meta_does_not_shadow_known_attribute() {
        let mut f = Format::from(HD);
        f.set_meta("ext", "mkv");
        assert_eq!(f.value_for_key("ext"), Some(Value::Str("mp4")));
        assert_eq!(f.meta("ext"), Some(&MetaValue::from("mkv")));
    }

    #[test]
    fn test_clone_has_independent_bag() {
        let mut a = Format::from(HD);
        a.set_meta("k", 1i64);
        let mut b = a.clone();
        b.set_meta("k", 2i64);
        assert_eq!(a.meta("k"), Some(&MetaValue::Int(1)));
        assert_eq!(b.meta("k"), Some(&MetaValue::Int(2)));
    }

    #[test]
    fn test_default_is_zero_valued() {
        let f = Format::default();
        assert_eq!(f.itag(), 0);
        assert_eq!(f.extension(), "");
        assert_eq!(f.resolution(), "");
        assert_eq!(f.video_encoding(), "");
        assert_eq!(f.audio_encoding(), "");
        assert_eq!(f.audio_bitrate(), 0);
        assert_eq!(f.meta_keys().count(), 0);
    }

    #[test]
    fn test_profile_classification() {
        assert!(HD.is_muxed());
        let video = Profile { audio_encoding: "", audio_bitrate: 0, ..HD };
        assert!(video.is_video_only());
        assert!(!video.is_muxed());
        let audio = Profile { video_encoding: "", resolution: "", ..HD };
        assert!(audio.is_audio_only());
        assert!(!Profile::default().has_video());
        assert!(!Profile::default().has_audio());
    }

    #[test]
    fn test_profile_codecs() {
        assert_eq!(HD.video_codec().unwrap().name, "H.264");
        assert_eq!(HD.audio_codec().unwrap().category, codec::CodecCategory::Audio);
        assert!(Profile::default().video_codec().is_none());
    }

    #[test]
    fn test_height_strict() {
        assert_eq!(HD.height(), Ok(720));
        assert_eq!(Profile { resolution: "3072p", ..HD }.height(), Ok(3072));
        assert_eq!(
            Profile { resolution: "", ..HD }.height(),
            Err(FormatError::EmptyResolution { itag: 22 })
        );
        for bad in ["p", "720", "72op", "+720p", "720P", "99999999999p"] {
            assert!(
                matches!(
                    Profile { resolution: bad, ..HD }.height(),
                    Err(FormatError::MalformedResolution { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_format_serialises_flat_with_meta() {
        let mut f = Format::from(HD);
        assert_eq!(
            serde_json::to_string(&f).unwrap(),
            r#"{"itag":22,"extension":"mp4","resolution":"720p","videoEncoding":"H.264","audioEncoding":"aac","audioBitrate":192}"#
        );
        f.set_meta("url", "u");
        assert!(serde_json::to_string(&f).unwrap().ends_with(r#""audioBitrate":192,"meta":{"url":"u"}}"#));
    }
}
