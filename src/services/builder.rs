use crate::domain::constants::{FILE_HEADER, RFC_CITATION};
use crate::domain::models::SecurityTxtConfig;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Contact field is required per RFC 9116 section 2.5.3")]
    ContactRequired,
    #[error("Expires field is required per RFC 9116 section 2.5.5")]
    ExpiresRequired,
    #[error(
        "invalid contact \"{0}\": must be a mailto:/https:/tel: URI, an email address, or a phone number"
    )]
    InvalidContact(String),
}

/// Closed classification of a contact value. Computed once per value; both
/// validation and canonicalization are driven off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    MailtoUri,
    TelUri,
    HttpUri,
    BareEmail,
    BarePhone,
}

/// Classify a contact value, or report it as invalid.
///
/// Recognized URI schemes take priority, then email-like strings (contain
/// `@`), then phone-like strings (optional `+` followed by a digit).
pub fn classify_contact(value: &str) -> Result<ContactKind, BuildError> {
    if value.starts_with("mailto:") {
        return Ok(ContactKind::MailtoUri);
    }
    if value.starts_with("tel:") {
        return Ok(ContactKind::TelUri);
    }
    if value.starts_with("https://") || value.starts_with("http://") {
        return Ok(ContactKind::HttpUri);
    }
    if value.contains('@') {
        return Ok(ContactKind::BareEmail);
    }
    let digits = value.strip_prefix('+').unwrap_or(value);
    if digits.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Ok(ContactKind::BarePhone);
    }
    Err(BuildError::InvalidContact(value.to_string()))
}

/// Canonicalize a classified contact value into proper URI form.
/// Idempotent: values already carrying a scheme pass through unchanged.
fn canonicalize_contact(value: &str, kind: ContactKind) -> String {
    match kind {
        ContactKind::MailtoUri | ContactKind::TelUri | ContactKind::HttpUri => value.to_string(),
        ContactKind::BareEmail => format!("mailto:{value}"),
        ContactKind::BarePhone => format!("tel:{value}"),
    }
}

fn push_block(
    lines: &mut Vec<String>,
    key: &str,
    values: &[String],
    comment: &str,
    include_comments: bool,
) {
    if values.is_empty() {
        return;
    }
    if include_comments {
        lines.push(comment.to_string());
    }
    for value in values {
        lines.push(format!("{key}: {value}"));
    }
    lines.push(String::new());
}

/// Build the security.txt document for a validated configuration.
///
/// Validation is fail-fast and all-or-nothing: any violation aborts with no
/// partial output. The expiration date format is deliberately not checked
/// here; resolving shorthand or defaults is the caller's concern so this
/// stays a pure function of its literal input.
pub fn build_security_txt(config: &SecurityTxtConfig) -> Result<String, BuildError> {
    if config.contact.is_empty() {
        return Err(BuildError::ContactRequired);
    }
    let expires = config
        .expires
        .as_deref()
        .filter(|e| !e.is_empty())
        .ok_or(BuildError::ExpiresRequired)?;

    let mut contacts = Vec::with_capacity(config.contact.len());
    for value in &config.contact {
        let kind = classify_contact(value)?;
        contacts.push(canonicalize_contact(value, kind));
    }

    let mut lines: Vec<String> = Vec::new();

    if config.include_comments {
        lines.extend(FILE_HEADER.iter().map(|l| (*l).to_string()));
        lines.push(String::new());
        lines.extend(RFC_CITATION.iter().map(|l| (*l).to_string()));
        lines.push(String::new());
    }

    // Field order follows RFC 9116's recommendation: Canonical leads when
    // present, Contact and Expires before everything else.
    push_block(
        &mut lines,
        "Canonical",
        &config.canonical,
        "# Canonical URIs where this file is located",
        config.include_comments,
    );
    push_block(
        &mut lines,
        "Contact",
        &contacts,
        "# Contact information for security researchers",
        config.include_comments,
    );
    push_block(
        &mut lines,
        "Expires",
        &[expires.to_string()],
        "# Expiration date (ISO 8601 format)",
        config.include_comments,
    );
    push_block(
        &mut lines,
        "Encryption",
        &config.encryption,
        "# Link to encryption key for secure communication",
        config.include_comments,
    );
    push_block(
        &mut lines,
        "Acknowledgments",
        &config.acknowledgments,
        "# Security researchers hall of fame",
        config.include_comments,
    );
    let languages: Vec<String> = config.preferred_languages.iter().cloned().collect();
    push_block(
        &mut lines,
        "Preferred-Languages",
        &languages,
        "# Preferred languages for security reports",
        config.include_comments,
    );
    push_block(
        &mut lines,
        "Policy",
        &config.policy,
        "# Vulnerability disclosure policy",
        config.include_comments,
    );
    push_block(
        &mut lines,
        "Hiring",
        &config.hiring,
        "# Security-related job openings",
        config.include_comments,
    );

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::{build_security_txt, classify_contact, BuildError, ContactKind};
    use crate::domain::models::SecurityTxtConfig;

    fn minimal() -> SecurityTxtConfig {
        SecurityTxtConfig {
            contact: vec!["mailto:a@b.com".to_string()],
            expires: Some("2025-12-31T23:59:59Z".to_string()),
            ..SecurityTxtConfig::default()
        }
    }

    #[test]
    fn missing_contact_is_rejected() {
        let config = SecurityTxtConfig {
            expires: Some("2025-12-31T23:59:59Z".to_string()),
            ..SecurityTxtConfig::default()
        };
        assert_eq!(build_security_txt(&config), Err(BuildError::ContactRequired));
    }

    #[test]
    fn missing_expires_is_rejected() {
        let config = SecurityTxtConfig {
            contact: vec!["mailto:a@b.com".to_string()],
            ..SecurityTxtConfig::default()
        };
        assert_eq!(build_security_txt(&config), Err(BuildError::ExpiresRequired));
    }

    #[test]
    fn minimal_document_round_trips_required_fields() {
        let doc = build_security_txt(&minimal()).unwrap();
        assert!(doc.contains("Contact: mailto:a@b.com"));
        assert!(doc.contains("Expires: 2025-12-31T23:59:59Z"));
        assert!(!doc.contains('#'));
    }

    #[test]
    fn classification_covers_the_closed_set() {
        assert_eq!(classify_contact("mailto:x@y.com"), Ok(ContactKind::MailtoUri));
        assert_eq!(classify_contact("tel:+15550100"), Ok(ContactKind::TelUri));
        assert_eq!(
            classify_contact("https://example.com/security"),
            Ok(ContactKind::HttpUri)
        );
        assert_eq!(classify_contact("x@y.com"), Ok(ContactKind::BareEmail));
        assert_eq!(classify_contact("+1-555-0100"), Ok(ContactKind::BarePhone));
        assert_eq!(classify_contact("5550100"), Ok(ContactKind::BarePhone));
        assert_eq!(
            classify_contact("not-a-uri-or-email"),
            Err(BuildError::InvalidContact("not-a-uri-or-email".to_string()))
        );
    }

    #[test]
    fn canonicalization_is_idempotent_for_uris() {
        let mut config = minimal();
        config.contact = vec![
            "mailto:x@y.com".to_string(),
            "x@y.com".to_string(),
            "+15550100".to_string(),
        ];
        let doc = build_security_txt(&config).unwrap();
        assert!(doc.contains("Contact: mailto:x@y.com"));
        assert!(doc.contains("Contact: tel:+15550100"));
        assert_eq!(doc.matches("Contact: mailto:x@y.com").count(), 2);
    }

    #[test]
    fn repeatable_fields_fan_out_in_order() {
        let mut config = minimal();
        config.contact = vec!["mailto:a@b.com".to_string(), "tel:+15550100".to_string()];
        let doc = build_security_txt(&config).unwrap();
        let first = doc.find("Contact: mailto:a@b.com").unwrap();
        let second = doc.find("Contact: tel:+15550100").unwrap();
        assert!(first < second);
    }

    #[test]
    fn invalid_contact_error_names_the_value() {
        let mut config = minimal();
        config.contact = vec!["not-a-uri-or-email".to_string()];
        let err = build_security_txt(&config).unwrap_err();
        assert!(err.to_string().contains("not-a-uri-or-email"));
    }

    #[test]
    fn validation_precedes_canonicalization() {
        let mut config = minimal();
        config.contact = vec!["a@b.com".to_string(), "???".to_string()];
        assert_eq!(
            build_security_txt(&config),
            Err(BuildError::InvalidContact("???".to_string()))
        );
    }

    #[test]
    fn field_order_follows_rfc_recommendation() {
        let mut config = minimal();
        config.canonical = vec!["https://example.com/.well-known/security.txt".to_string()];
        config.acknowledgments = vec!["https://example.com/hall-of-fame".to_string()];
        config.encryption = vec!["https://example.com/pgp-key.txt".to_string()];
        config.policy = vec!["https://example.com/policy".to_string()];
        config.hiring = vec!["https://example.com/jobs".to_string()];
        config.preferred_languages = Some("en, es".to_string());
        let doc = build_security_txt(&config).unwrap();

        let fields: Vec<&str> = doc
            .lines()
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(|l| l.split(':').next().unwrap())
            .collect();
        assert_eq!(
            fields,
            vec![
                "Canonical",
                "Contact",
                "Expires",
                "Encryption",
                "Acknowledgments",
                "Preferred-Languages",
                "Policy",
                "Hiring"
            ]
        );
    }

    #[test]
    fn blocks_are_separated_by_single_blank_lines() {
        let mut config = minimal();
        config.policy = vec!["https://example.com/policy".to_string()];
        let doc = build_security_txt(&config).unwrap();
        assert_eq!(
            doc,
            "Contact: mailto:a@b.com\n\nExpires: 2025-12-31T23:59:59Z\n\nPolicy: https://example.com/policy\n"
        );
    }

    #[test]
    fn comments_toggle_only_adds_hash_lines() {
        let plain = build_security_txt(&minimal()).unwrap();
        let mut commented_config = minimal();
        commented_config.include_comments = true;
        let commented = build_security_txt(&commented_config).unwrap();

        let plain_fields: Vec<&str> = plain.lines().filter(|l| !l.is_empty()).collect();
        let commented_fields: Vec<&str> = commented
            .lines()
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
        assert_eq!(plain_fields, commented_fields);
        assert!(commented.contains("# security.txt file per RFC 9116"));
        assert!(commented.contains("# Contact information for security researchers"));
        assert!(commented.contains("# Expiration date (ISO 8601 format)"));
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let config = minimal();
        assert_eq!(
            build_security_txt(&config).unwrap(),
            build_security_txt(&config).unwrap()
        );
    }
}
