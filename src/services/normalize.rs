use crate::cli::FieldArgs;
use crate::domain::constants::{SECURITY_TXT_FILE, WELL_KNOWN_DIR};
use crate::domain::models::SecurityTxtConfig;

/// Split a raw comma-joined field into ordered values.
///
/// Whitespace around each piece is trimmed and empty pieces are dropped;
/// duplicates and input order are preserved. An absent or blank input yields
/// an empty sequence, which the builder treats as "field omitted".
pub fn split_values(raw: Option<&str>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(s) => s
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

fn single_value(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Convert raw flag values into the normalized config the builder expects.
///
/// Purely mechanical: no validation happens here. When `--canonical` is
/// absent and a site URL is known, the canonical URI defaults to the
/// well-known location under that site.
pub fn normalize(fields: &FieldArgs, site_url: Option<&str>) -> SecurityTxtConfig {
    let mut canonical = split_values(fields.canonical.as_deref());
    if canonical.is_empty() {
        if let Some(site) = site_url.map(str::trim).filter(|s| !s.is_empty()) {
            canonical.push(format!(
                "{}/{}/{}",
                site.trim_end_matches('/'),
                WELL_KNOWN_DIR,
                SECURITY_TXT_FILE
            ));
        }
    }

    SecurityTxtConfig {
        contact: split_values(fields.contact.as_deref()),
        expires: single_value(fields.expires.as_deref()),
        canonical,
        acknowledgments: split_values(fields.acknowledgments.as_deref()),
        encryption: split_values(fields.encryption.as_deref()),
        hiring: split_values(fields.hiring.as_deref()),
        policy: split_values(fields.policy.as_deref()),
        // Reproduced verbatim: the field is itself comma-separated.
        preferred_languages: single_value(fields.preferred_languages.as_deref()),
        include_comments: fields.comments,
    }
}
