use clap::{Args, Parser, Subcommand};

pub const DEFAULT_ARTIFACT_NAME: &str = "securitytxt";

#[derive(Parser, Debug)]
#[command(name = "sectxt", version, about = "RFC 9116 security.txt generator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate security.txt and write it under <output-dir>/.well-known/
    Generate {
        #[command(flatten)]
        fields: FieldArgs,
        #[arg(
            long,
            default_value = ".",
            help = "Base directory for .well-known/security.txt"
        )]
        output_dir: String,
        #[arg(
            long,
            help = "Site base URL; supplies a default Canonical URI when --canonical is absent"
        )]
        site_url: Option<String>,
        #[arg(long, help = "Copy the written file into this directory as a build artifact")]
        artifact_dir: Option<String>,
        #[arg(long, default_value = DEFAULT_ARTIFACT_NAME)]
        artifact_name: String,
        #[arg(long, help = "Artifact retention period in days")]
        retention_days: Option<u32>,
        #[arg(long, default_value_t = false, help = "Echo the generated content")]
        debug: bool,
    },
    /// Build the document and print it to stdout without writing anything
    Print {
        #[command(flatten)]
        fields: FieldArgs,
        #[arg(long)]
        site_url: Option<String>,
    },
    /// Validate the configuration without producing a file
    Check {
        #[command(flatten)]
        fields: FieldArgs,
        #[arg(long)]
        site_url: Option<String>,
    },
}

/// Field inputs shared by every subcommand. Repeatable fields accept
/// comma-separated values; splitting happens in the normalizer.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    #[arg(long, help = "Contact URI(s), email address(es), or phone number(s)")]
    pub contact: Option<String>,
    #[arg(
        long,
        help = "Expiration: RFC 3339 timestamp, YYYY-MM-DD, or shorthand like 30d/6m/1y (default 180d)"
    )]
    pub expires: Option<String>,
    #[arg(long, help = "Canonical URI(s) of the published file")]
    pub canonical: Option<String>,
    #[arg(long, help = "URL(s) of the acknowledgments page")]
    pub acknowledgments: Option<String>,
    #[arg(long, help = "URL(s) of the encryption key")]
    pub encryption: Option<String>,
    #[arg(long, help = "URL(s) of security job postings")]
    pub hiring: Option<String>,
    #[arg(long, help = "URL(s) of the vulnerability disclosure policy")]
    pub policy: Option<String>,
    #[arg(long, help = "Comma-separated language tags, reproduced verbatim")]
    pub preferred_languages: Option<String>,
    #[arg(long, default_value_t = false, help = "Interleave explanatory comment lines")]
    pub comments: bool,
}
