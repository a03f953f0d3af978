//! Core logic of the `bintext` command-line tool.
//!
//! Usage:
//!   bintext <encode|decode|validate> [--type base64] [--log-level <level>]
//!
//! Input is read from stdin and output written to stdout. The binary entry
//! point only wires the process streams and exit code to [`run`].

use std::io::{self, Read, Write};

use thiserror::Error;
use tracing::Level;

use crate::{decode_to_bin_validate, decode_to_vec, encode_to_string, EncodeError, EncodeType};

pub const USAGE: &str =
    "Usage: bintext <encode|decode|validate> [--type base64] [--log-level <level>]";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("input is not valid UTF-8 text")]
    NotUtf8,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Encode,
    Decode,
    Validate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub encode_type: EncodeType,
    pub log_level: Level,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Options, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut command = None;
    let mut encode_type = EncodeType::Base64;
    let mut log_level = Level::WARN;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--type" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--type requires a value".to_string()))?;
                encode_type = value
                    .as_ref()
                    .parse()
                    .map_err(|e: crate::UnknownEncodeName| CliError::Usage(e.to_string()))?;
            }
            "--log-level" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--log-level requires a value".to_string()))?;
                log_level = value.as_ref().parse().map_err(|_| {
                    CliError::Usage(format!("unknown log level '{}'", value.as_ref()))
                })?;
            }
            "encode" if command.is_none() => command = Some(Command::Encode),
            "decode" if command.is_none() => command = Some(Command::Decode),
            "validate" if command.is_none() => command = Some(Command::Validate),
            other => return Err(CliError::Usage(format!("unexpected argument '{other}'"))),
        }
    }

    let command = command.ok_or_else(|| CliError::Usage("missing command".to_string()))?;
    Ok(Options {
        command,
        encode_type,
        log_level,
    })
}

/// Runs a parsed command against the given streams.
///
/// `validate` writes `valid` and succeeds, or returns the format error.
pub fn run<R: Read, W: Write>(options: &Options, mut input: R, mut output: W) -> Result<(), CliError> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;

    match options.command {
        Command::Encode => {
            let text = encode_to_string(options.encode_type, &buf);
            output.write_all(text.as_bytes())?;
            output.write_all(b"\n")?;
        }
        Command::Decode => {
            let text = std::str::from_utf8(&buf).map_err(|_| CliError::NotUtf8)?;
            let bytes = decode_to_vec(options.encode_type, text.trim())?;
            output.write_all(&bytes)?;
        }
        Command::Validate => {
            let text = std::str::from_utf8(&buf).map_err(|_| CliError::NotUtf8)?;
            decode_to_bin_validate(options.encode_type, text.trim())?;
            output.write_all(b"valid\n")?;
        }
    }

    output.flush()?;
    Ok(())
}
