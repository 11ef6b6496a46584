//! Submit a coverage report to Coveralls and print the URL of the result document.

use coveralls_upload::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Host backed by the process's real streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args_os()).await
}
