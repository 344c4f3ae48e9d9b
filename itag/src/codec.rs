/// Codec category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecCategory {
    Video,
    Audio,
}

/// Information about a codec identified by the name the catalog publishes for it.
#[derive(Debug, Clone, Copy)]
pub struct CodecInfo {
    /// Codec name as it appears in catalog rows (e.g. "H.264", "opus").
    pub name: &'static str,
    /// Category of the codec.
    pub category: CodecCategory,
}

// Containers
pub const FLV: &str = "flv";
pub const THREE_GP: &str = "3gp";
pub const MP4: &str = "mp4";
pub const WEBM: &str = "webm";
pub const TS: &str = "ts";

// Video codecs
// "H.283" is how itag 5 has always been published; consumers match on it.
pub const SORENSON_H283: CodecInfo = CodecInfo { name: "Sorenson H.283", category: CodecCategory::Video };
pub const SORENSON_H263: CodecInfo = CodecInfo { name: "Sorenson H.263", category: CodecCategory::Video };
pub const MPEG4_VISUAL: CodecInfo = CodecInfo { name: "MPEG-4 Visual", category: CodecCategory::Video };
pub const H264: CodecInfo = CodecInfo { name: "H.264", category: CodecCategory::Video };
pub const VP8: CodecInfo = CodecInfo { name: "VP8", category: CodecCategory::Video };
pub const VP9: CodecInfo = CodecInfo { name: "VP9", category: CodecCategory::Video };

// Audio codecs
pub const MP3: CodecInfo = CodecInfo { name: "mp3", category: CodecCategory::Audio };
pub const AAC: CodecInfo = CodecInfo { name: "aac", category: CodecCategory::Audio };
pub const VORBIS: CodecInfo = CodecInfo { name: "vorbis", category: CodecCategory::Audio };
pub const OPUS: CodecInfo = CodecInfo { name: "opus", category: CodecCategory::Audio };

/// All codecs referenced by the catalog.
pub const ALL_CODECS: &[CodecInfo] = &[
    SORENSON_H283, SORENSON_H263, MPEG4_VISUAL, H264, VP8, VP9,
    MP3, AAC, VORBIS, OPUS,
];

/// All container extensions referenced by the catalog.
pub const ALL_CONTAINERS: &[&str] = &[FLV, THREE_GP, MP4, WEBM, TS];

/// Look up codec info by its published name. Empty names (no track) return None.
pub fn codec_info(name: &str) -> Option<&'static CodecInfo> {
    ALL_CODECS.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_info_categories() {
        assert_eq!(codec_info("H.264").unwrap().category, CodecCategory::Video);
        assert_eq!(codec_info("VP9").unwrap().category, CodecCategory::Video);
        assert_eq!(codec_info("opus").unwrap().category, CodecCategory::Audio);
        assert_eq!(codec_info("aac").unwrap().category, CodecCategory::Audio);
    }

    #[test]
    fn test_codec_info_unknown_or_empty() {
        assert!(codec_info("").is_none());
        assert!(codec_info("h264").is_none());
        assert!(codec_info("AV1").is_none());
    }

    #[test]
    fn test_codec_names_are_unique() {
        for (i, a) in ALL_CODECS.iter().enumerate() {
            for b in &ALL_CODECS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
