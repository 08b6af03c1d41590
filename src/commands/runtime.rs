use crate::cli::{Cli, Commands, FieldArgs};
use crate::domain::models::{CheckReport, GenerateReport, SecurityTxtConfig};
use crate::services::artifact::{ArtifactSink, DirectorySink};
use crate::services::builder::build_security_txt;
use crate::services::expires::resolve_expires;
use crate::services::normalize::normalize;
use crate::services::output::print_one;
use crate::services::writer::write_security_txt;
use std::path::Path;

/// Normalize the flag inputs and resolve the expiration into a literal, so
/// the builder only ever sees its final form.
fn resolved_config(fields: &FieldArgs, site_url: Option<&str>) -> anyhow::Result<SecurityTxtConfig> {
    let mut config = normalize(fields, site_url);
    config.expires = Some(resolve_expires(config.expires.as_deref())?);
    Ok(config)
}

pub fn handle_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            fields,
            output_dir,
            site_url,
            artifact_dir,
            artifact_name,
            retention_days,
            debug,
        } => {
            let config = resolved_config(fields, site_url.as_deref())?;
            let content = build_security_txt(&config)?;
            let path = write_security_txt(Path::new(output_dir), &content)?;

            if *debug && !cli.json {
                print!("{content}");
            }

            let artifact = match artifact_dir {
                Some(dir) => {
                    let sink = DirectorySink::new(dir);
                    match sink.upload(artifact_name, &path, *retention_days) {
                        Ok(report) => Some(report),
                        Err(err) => {
                            // Upload failure is a warning, never fatal.
                            eprintln!("warning: artifact upload failed: {err:#}");
                            None
                        }
                    }
                }
                None => None,
            };

            let report = GenerateReport {
                security_path: path.to_string_lossy().to_string(),
                expires: config.expires.clone().unwrap_or_default(),
                artifact,
            };
            print_one(cli.json, report, |r| {
                let mut line = format!("generated {}", r.security_path);
                if let Some(a) = &r.artifact {
                    line.push_str(&format!("\nartifact {} -> {}", a.name, a.path));
                }
                line
            })?;
        }
        Commands::Print { fields, site_url } => {
            let config = resolved_config(fields, site_url.as_deref())?;
            let content = build_security_txt(&config)?;
            print!("{content}");
        }
        Commands::Check { fields, site_url } => {
            let config = resolved_config(fields, site_url.as_deref())?;
            build_security_txt(&config)?;
            let report = CheckReport {
                status: "valid".to_string(),
                contact_count: config.contact.len(),
                expires: config.expires.clone().unwrap_or_default(),
            };
            print_one(cli.json, report, |_| "config valid".to_string())?;
        }
    }
    Ok(())
}
