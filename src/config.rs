// src/config.rs
// =============================================================================
// Rule thresholds shared by the analyzers.
//
// There is no configuration file: every threshold is a named constant so it
// can be tuned in one place. Severity assignments stay inside each analyzer's
// rule table.
// =============================================================================

/// URL label used when the caller does not supply one
pub const UNKNOWN_URL: &str = "unknown";

// Meta tags
/// Titles shorter than this get truncated context in search results
pub const TITLE_MIN_LENGTH: usize = 30;
/// Search engines cut titles at roughly 60 characters
pub const TITLE_MAX_LENGTH: usize = 60;
pub const DESCRIPTION_MIN_LENGTH: usize = 120;
pub const DESCRIPTION_MAX_LENGTH: usize = 160;
/// Card types accepted by Twitter/X
pub const TWITTER_CARD_TYPES: &[&str] = &["summary", "summary_large_image", "app", "player"];

// Headings
pub const HEADING_MAX_LENGTH: usize = 70;
pub const MAX_HEADINGS: usize = 50;

// Images
pub const ALT_MAX_LENGTH: usize = 125;
/// Declared width or height (in px) above which an image is flagged as oversized
pub const OVERSIZED_IMAGE_DIMENSION: u32 = 2000;
/// Alt values that say nothing about the image
pub const GENERIC_ALT_VALUES: &[&str] = &[
    "image",
    "img",
    "photo",
    "picture",
    "pic",
    "graphic",
    "icon",
    "banner",
    "logo",
    "untitled",
    "placeholder",
    "thumbnail",
    "screenshot",
];
pub const IMAGE_FILE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".svg", ".webp", ".avif", ".bmp",
];

// Links
pub const MAX_LINKS: usize = 100;
pub const MAX_EXTERNAL_LINKS: usize = 50;
/// Anchor texts that tell neither users nor crawlers where the link goes
pub const NON_DESCRIPTIVE_LINK_TEXT: &[&str] = &[
    "click here",
    "click",
    "here",
    "read more",
    "more",
    "learn more",
    "link",
    "this",
    "this link",
    "go",
    "continue",
];

// Content
/// Pages below this word count are considered thin content
pub const THIN_CONTENT_WORDS: usize = 300;
/// Keyword density is only meaningful on texts of at least this many words
pub const KEYWORD_DENSITY_MIN_WORDS: usize = 100;
/// A single term above this share of all words looks like keyword stuffing
pub const KEYWORD_DENSITY_MAX: f64 = 0.05;
/// Terms shorter than this are ignored when computing density
pub const KEYWORD_MIN_LENGTH: usize = 4;
pub const STOP_WORDS: &[&str] = &[
    "that", "this", "with", "from", "have", "your", "they", "will", "were", "been", "their",
    "there", "what", "when", "which", "about", "would", "could", "should", "into", "than",
    "then", "them", "these", "those", "also", "some", "more", "only", "over", "such",
];

// Mobile
/// maximum-scale below this prevents meaningful pinch zoom
pub const MIN_MAXIMUM_SCALE: f64 = 2.0;

// Performance
pub const MAX_SCRIPTS: usize = 15;
pub const MAX_STYLESHEETS: usize = 5;
pub const MAX_INLINE_STYLE_BLOCKS: usize = 3;
/// Raw HTML above this size (100 KiB) is heavy before any subresource loads
pub const MAX_HTML_BYTES: usize = 100 * 1024;
/// Number of eagerly loaded images tolerated before suggesting lazy loading
pub const MAX_EAGER_IMAGES: usize = 5;
