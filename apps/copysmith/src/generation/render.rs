//! Presentation of generated copy: console output for the CLI and the
//! plain-text export shared by both front ends.

use crate::generation::parser::GeneratedCopy;

const BANNER: &str = "==================================================";

/// Renders hashtags for display, `#` prefixed and space separated.
pub fn format_hashtags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Console rendering for the CLI front end.
pub fn format_console(copy: &GeneratedCopy) -> String {
    format!(
        "\n{BANNER}\nHEADLINE:\n{}\n\nDESCRIPTION:\n{}\n\nHASHTAGS:\n{}\n\nCALL TO ACTION:\n{}\n{BANNER}",
        copy.headline,
        copy.description,
        format_hashtags(&copy.hashtags),
        copy.cta,
    )
}

/// The plain-text export: the four fields in fixed order.
/// Served as a download by the web front end and written to disk by the CLI.
pub fn export_text(copy: &GeneratedCopy) -> String {
    format!(
        "HEADLINE: {}\n\nDESCRIPTION: {}\n\nHASHTAGS: {}\n\nCALL TO ACTION: {}\n",
        copy.headline,
        copy.description,
        format_hashtags(&copy.hashtags),
        copy.cta,
    )
}

/// Filename for the exported copy, derived from the brand name.
pub fn export_filename(brand: &str) -> String {
    let slug: String = brand
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if slug.chars().all(|c| c == '_') {
        "marketing_copy.txt".to_string()
    } else {
        format!("{slug}_marketing_copy.txt")
    }
}
