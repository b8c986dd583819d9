//! Advisory checks for sitemap hint values
//!
//! Values are stored as given. These checks only produce warning text for
//! values search engines would not understand.

/// Change frequencies defined by the sitemaps.org protocol
pub const CHANGE_FREQUENCIES: &[&str] = &[
    "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
];

/// Warning for a changefreq outside the protocol's vocabulary
pub fn changefreq_warning(value: &str) -> Option<String> {
    if CHANGE_FREQUENCIES.contains(&value) {
        return None;
    }
    Some(format!(
        "'{}' is not a standard changefreq (expected one of: {})",
        value,
        CHANGE_FREQUENCIES.join(", ")
    ))
}

/// Warning for a priority that is not a number between 0.0 and 1.0
pub fn priority_warning(value: &str) -> Option<String> {
    match value.trim().parse::<f64>() {
        Ok(p) if (0.0..=1.0).contains(&p) => None,
        _ => Some(format!(
            "'{}' is not a valid priority (expected a number from 0.0 to 1.0)",
            value
        )),
    }
}
