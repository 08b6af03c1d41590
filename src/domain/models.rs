use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Normalized security.txt configuration.
///
/// Repeatable fields are always ordered sequences; a single value is a
/// sequence of length one and an absent field is an empty sequence, so the
/// builder only ever iterates and never branches on shape.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SecurityTxtConfig {
    pub contact: Vec<String>,
    pub expires: Option<String>,
    pub canonical: Vec<String>,
    pub acknowledgments: Vec<String>,
    pub encryption: Vec<String>,
    pub hiring: Vec<String>,
    pub policy: Vec<String>,
    /// Comma-separated language tags, reproduced verbatim (never split).
    pub preferred_languages: Option<String>,
    pub include_comments: bool,
}

#[derive(Serialize)]
pub struct GenerateReport {
    pub security_path: String,
    pub expires: String,
    pub artifact: Option<ArtifactReport>,
}

#[derive(Serialize)]
pub struct ArtifactReport {
    pub name: String,
    pub path: String,
    pub retention_days: Option<u32>,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub status: String,
    pub contact_count: usize,
    pub expires: String,
}
