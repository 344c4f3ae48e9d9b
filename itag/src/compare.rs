use crate::format::Format;
use crate::key::FormatKey;

/// Sort rank of a resolution label.
///
/// Drops the last two bytes of the label and parses the rest as a non-negative
/// integer, so "720p" ranks 72 and "1080p" ranks 108. This is the long-standing
/// ranking consumers sort by; it orders every catalog label the same way as
/// its pixel height. Empty, short and malformed labels rank 0.
pub fn resolution_rank(label: &str) -> i64 {
    if label.len() < 2 {
        return 0;
    }
    label
        .get(..label.len() - 2)
        .and_then(|digits| digits.parse::<u32>().ok())
        .map_or(0, i64::from)
}

/// Three-way comparison of two formats by `key`.
///
/// Negative when `a` sorts before `b`, positive when after. Only resolution and
/// audio bitrate are ordered; every other key compares equal (0), so callers
/// that need to order by container, codec or itag do it themselves through
/// [`Format::attribute`].
pub fn compare_key(a: &Format, b: &Format, key: FormatKey) -> i64 {
    match key {
        FormatKey::Resolution => resolution_rank(a.resolution()) - resolution_rank(b.resolution()),
        FormatKey::AudioBitrate => a.audio_bitrate() as i64 - b.audio_bitrate() as i64,
        FormatKey::Itag | FormatKey::Extension | FormatKey::VideoEncoding | FormatKey::AudioEncoding => 0,
    }
}
