//! Command dispatch logic for coveralls-upload

use super::logging::{LogLevel, init_logging};
use crate::upload::{COVERALLS_JOBS_URL, UploadError, Uploader};
use crate::{Host, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use ohno::IntoAppError;
use std::io::Write;
use url::Url;

const LOG_TARGET: &str = "       run";

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "coveralls-upload", version, about, author, long_about = None)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    /// Coverage report to submit
    #[arg(value_name = "FILE")]
    file: Utf8PathBuf,

    /// Job submission endpoint
    #[arg(long, value_name = "URL", default_value = COVERALLS_JOBS_URL)]
    endpoint: Url,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    log_level: LogLevel,
}

/// Parse the command line, upload the report, and print the result URL.
///
/// On success the URL is the only thing written to the host's output. An upload
/// failure is described on the host's error stream and ends with `host.exit(1)`;
/// the returned error only covers failures to write to the host itself.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    init_logging(cli.log_level);

    match upload(&cli).await {
        Ok(url) => writeln!(host.output(), "{url}").into_app_err("writing the job URL"),
        Err(e) => {
            log::debug!(target: LOG_TARGET, "Upload of '{}' failed: {e:?}", cli.file);
            writeln!(host.error(), "error: {}", describe(&e)).into_app_err("writing the error report")?;
            host.exit(1);
            Ok(())
        }
    }
}

async fn upload(cli: &Cli) -> Result<String, UploadError> {
    let uploader = Uploader::new(cli.endpoint.clone())?;
    uploader.upload_file(&cli.file).await
}

/// Render an error followed by its chain of causes.
fn describe(error: &dyn core::error::Error) -> String {
    let mut text = error.to_string();
    let mut cause = error.source();
    while let Some(inner) = cause {
        text.push_str(": ");
        text.push_str(&inner.to_string());
        cause = inner.source();
    }

    text
}
