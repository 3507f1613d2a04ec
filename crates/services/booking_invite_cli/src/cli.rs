// File: services/booking_invite_cli/src/cli.rs
//! Argument handling and the payload -> artifacts step of the CLI, kept out of
//! `main` so they can be driven from tests.

use booking_common::{validation_error, BookingError, Context};
use booking_config::AppConfig;
use booking_invite::{InviteArtifactBuilder, InviteLabels, InvitePayload};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub const USAGE: &str = "Usage: booking-invite-cli [payload.json] [--localized]
Reads an invite payload (file or stdin) and prints the invite artifacts as JSON.
--localized  use title/subject labels in the payload's language";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Payload file; stdin when absent.
    pub payload_path: Option<PathBuf>,
    pub localized: bool,
    pub help: bool,
}

impl CliOptions {
    /// Parses the arguments after the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, BookingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = CliOptions::default();
        for arg in args {
            match arg.as_ref() {
                "-h" | "--help" => options.help = true,
                "--localized" => options.localized = true,
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(validation_error(format!("unknown option '{}'", flag)));
                }
                path => {
                    if options.payload_path.is_some() {
                        return Err(validation_error(format!(
                            "only one payload file may be given, got '{}' as well",
                            path
                        )));
                    }
                    // "-" is an explicit request for stdin
                    if path != "-" {
                        options.payload_path = Some(PathBuf::from(path));
                    }
                }
            }
        }
        Ok(options)
    }
}

/// Reads and parses the payload from the configured file, or from `stdin`.
pub fn read_payload<R: Read>(options: &CliOptions, mut stdin: R) -> Result<InvitePayload, BookingError> {
    let raw = match &options.payload_path {
        Some(path) => {
            info!("[Invite CLI] Reading invite payload from {}", path.display());
            fs::read_to_string(path).context(format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("reading payload from stdin")?;
            buf
        }
    };

    Ok(serde_json::from_str(&raw)?)
}

/// Builds the artifacts and renders them as pretty JSON.
pub fn render_artifacts(
    payload: &InvitePayload,
    config: Arc<AppConfig>,
    localized: bool,
) -> Result<String, BookingError> {
    let mut builder = InviteArtifactBuilder::from_config(config);
    if localized {
        builder = builder.with_labels(InviteLabels::for_language(payload.language));
    }
    let artifacts = builder.build(payload)?;

    Ok(serde_json::to_string_pretty(&artifacts)?)
}
