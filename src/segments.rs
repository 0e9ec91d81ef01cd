//! Static mapping from model segment labels to the human-readable names from
//! the original segmentation analysis.

const SEGMENT_NAMES: [&str; 8] = [
    "Affluent Male Spenders",
    "Moderate Lifestyle Women",
    "High-Income Savers (Male)",
    "Young Male Enthusiasts",
    "Young Female Shoppers",
    "Affluent Female Spenders",
    "Conservative Older Men",
    "High-Income Savers (Female)",
];

/// Name for a segment label; labels outside the analyzed range fall back to a
/// generic `Segment N`.
pub fn segment_name(segment: i64) -> String {
    usize::try_from(segment)
        .ok()
        .and_then(|i| SEGMENT_NAMES.get(i))
        .map(|name| (*name).to_string())
        .unwrap_or_else(|| format!("Segment {segment}"))
}
