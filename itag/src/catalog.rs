use std::collections::HashSet;

use crate::codec::{
    AAC, FLV, H264, MP3, MP4, MPEG4_VISUAL, OPUS, SORENSON_H263, SORENSON_H283, THREE_GP, TS, VORBIS,
    VP8, VP9, WEBM,
};
use crate::error::{FormatError, Result};
use crate::format::{Format, Profile};

const fn row(
    itag: u32,
    extension: &'static str,
    resolution: &'static str,
    video_encoding: &'static str,
    audio_encoding: &'static str,
    audio_bitrate: u32,
) -> Profile {
    Profile {
        itag,
        extension,
        resolution,
        video_encoding,
        audio_encoding,
        audio_bitrate,
    }
}

/// Every known format, in published order.
///
/// Columns: itag, container, resolution, video codec, audio codec, audio kbit/s.
/// Rows are reproduced as published, including itag 82 (bitrate without an audio
/// codec) and itag 248 (video-only with a bitrate of 9).
static FORMATS: &[Profile] = &[
    // Progressive download
    row(5, FLV, "240p", SORENSON_H283.name, MP3.name, 64),
    row(6, FLV, "270p", SORENSON_H263.name, MP3.name, 64),
    row(13, THREE_GP, "", MPEG4_VISUAL.name, AAC.name, 0),
    row(17, THREE_GP, "144p", MPEG4_VISUAL.name, AAC.name, 24),
    row(18, MP4, "360p", H264.name, AAC.name, 96),
    row(22, MP4, "720p", H264.name, AAC.name, 192),
    row(34, FLV, "480p", H264.name, AAC.name, 128),
    row(35, FLV, "360p", H264.name, AAC.name, 128),
    row(36, THREE_GP, "240p", MPEG4_VISUAL.name, AAC.name, 36),
    row(37, MP4, "1080p", H264.name, AAC.name, 192),
    row(38, MP4, "3072p", H264.name, AAC.name, 192),
    row(43, WEBM, "360p", VP8.name, VORBIS.name, 128),
    row(44, WEBM, "480p", VP8.name, VORBIS.name, 128),
    row(45, WEBM, "720p", VP8.name, VORBIS.name, 192),
    row(46, WEBM, "1080p", VP8.name, VORBIS.name, 192),
    row(82, MP4, "360p", H264.name, "", 96),
    row(83, MP4, "240p", H264.name, AAC.name, 96),
    row(84, MP4, "720p", H264.name, AAC.name, 192),
    row(85, MP4, "1080p", H264.name, AAC.name, 192),
    row(100, WEBM, "360p", VP8.name, VORBIS.name, 128),
    row(101, WEBM, "360p", VP8.name, VORBIS.name, 192),
    row(102, WEBM, "720p", VP8.name, VORBIS.name, 192),

    // DASH (video only)
    row(133, MP4, "240p", H264.name, "", 0),
    row(134, MP4, "360p", H264.name, "", 0),
    row(135, MP4, "480p", H264.name, "", 0),
    row(136, MP4, "720p", H264.name, "", 0),
    row(137, MP4, "1080p", H264.name, "", 0),
    row(138, MP4, "2160p", H264.name, "", 0),
    row(160, MP4, "144p", H264.name, "", 0),
    row(242, WEBM, "240p", VP9.name, "", 0),
    row(243, WEBM, "360p", VP9.name, "", 0),
    row(244, WEBM, "480p", VP9.name, "", 0),
    row(247, WEBM, "720p", VP9.name, "", 0),
    row(248, WEBM, "1080p", VP9.name, "", 9),
    row(264, MP4, "1440p", H264.name, "", 0),
    row(266, MP4, "2160p", H264.name, "", 0),
    row(271, WEBM, "1440p", VP9.name, "", 0),
    row(272, WEBM, "2160p", VP9.name, "", 0),
    row(278, WEBM, "144p", VP9.name, "", 0),
    row(298, MP4, "720p", H264.name, "", 0),
    row(299, MP4, "1080p", H264.name, "", 0),
    row(302, WEBM, "720p", VP9.name, "", 0),
    row(303, WEBM, "1080p", VP9.name, "", 0),

    // DASH (audio only)
    row(139, MP4, "", "", AAC.name, 48),
    row(140, MP4, "", "", AAC.name, 128),
    row(141, MP4, "", "", AAC.name, 256),
    row(171, WEBM, "", "", VORBIS.name, 128),
    row(172, WEBM, "", "", VORBIS.name, 192),
    row(249, WEBM, "", "", OPUS.name, 50),
    row(250, WEBM, "", "", OPUS.name, 70),
    row(251, WEBM, "", "", OPUS.name, 160),

    // Live streaming
    row(92, TS, "240p", H264.name, AAC.name, 48),
    row(93, TS, "480p", H264.name, AAC.name, 128),
    row(94, TS, "720p", H264.name, AAC.name, 128),
    row(95, TS, "1080p", H264.name, AAC.name, 256),
    row(96, TS, "720p", H264.name, AAC.name, 256),
    row(120, FLV, "720p", H264.name, AAC.name, 128),
    row(127, TS, "", "", AAC.name, 96),
    row(128, TS, "", "", AAC.name, 96),
    row(132, TS, "240p", H264.name, AAC.name, 48),
    row(151, TS, "720p", H264.name, AAC.name, 24),
];

/// All catalog rows in published order: progressive, DASH video, DASH audio, live.
pub fn all() -> &'static [Profile] {
    FORMATS
}

/// Borrow the catalog row for `itag`.
pub fn profile(itag: u32) -> Option<&'static Profile> {
    FORMATS.iter().find(|p| p.itag == itag)
}

pub fn is_known(itag: u32) -> bool {
    profile(itag).is_some()
}

/// Look up `itag`, returning a fresh descriptor with an empty metadata bag.
pub fn lookup(itag: u32) -> Option<Format> {
    let found = profile(itag).map(Format::from);
    if found.is_none() {
        log::debug!("itag {itag} is not in the format catalog");
    }
    found
}

/// [`lookup`] in `(descriptor, found)` form: a zero-valued descriptor and
/// `false` when `itag` is unknown.
pub fn lookup_or_default(itag: u32) -> (Format, bool) {
    match lookup(itag) {
        Some(format) => (format, true),
        None => (Format::default(), false),
    }
}

/// Fresh descriptors for every catalog row.
pub fn formats() -> impl Iterator<Item = Format> {
    FORMATS.iter().map(Format::from)
}

/// Check catalog invariants: unique itags, a container on every row, and
/// resolution labels that are empty or digits followed by 'p'.
pub fn validate(rows: &[Profile]) -> Result<()> {
    let mut seen = HashSet::with_capacity(rows.len());
    for p in rows {
        if !seen.insert(p.itag) {
            return Err(FormatError::DuplicateItag { itag: p.itag });
        }
        if p.extension.is_empty() {
            return Err(FormatError::EmptyExtension { itag: p.itag });
        }
        if !p.resolution.is_empty() {
            p.height()?;
        }
    }
    Ok(())
}
