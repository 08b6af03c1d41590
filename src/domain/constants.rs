//! Stable constants shared across services and tests.

/// Directory RFC 9116 mandates for the published file.
pub const WELL_KNOWN_DIR: &str = ".well-known";

/// File name under the well-known directory.
pub const SECURITY_TXT_FILE: &str = "security.txt";

/// Shorthand resolved when no expiration is supplied.
pub const DEFAULT_EXPIRES: &str = "180d";

/// Banner emitted at the top of the document when comments are enabled.
pub const FILE_HEADER: &[&str] = &[
    "# Security.txt file",
    "# Per RFC 9116: https://www.rfc-editor.org/rfc/rfc9116",
    "#",
    "# This file provides information for security researchers",
    "# to responsibly report security vulnerabilities.",
];

/// RFC citation lines that follow the banner.
pub const RFC_CITATION: &[&str] = &[
    "# security.txt file per RFC 9116",
    "# https://www.rfc-editor.org/rfc/rfc9116",
];
