use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(jpe?g|png|webp)$").expect("valid image suffix regex")
});

/// True when the URL ends with a supported image extension.
pub fn is_image_url(url: &str) -> bool {
    IMAGE_SUFFIX.is_match(url.trim())
}
