//! Default values shared by the configuration types.

/// Similarity preset used when none is configured.
pub const DEFAULT_MATCHING_PRESET: &str = "balanced";

/// Cap on run-length decoded output, in chars.
pub const DEFAULT_MAX_DECODED_LEN: usize = crate::codec::DEFAULT_MAX_DECODED_LEN;

pub(crate) fn default_matching_preset() -> String {
    DEFAULT_MATCHING_PRESET.to_string()
}

pub(crate) const fn default_max_decoded_len() -> usize {
    DEFAULT_MAX_DECODED_LEN
}
