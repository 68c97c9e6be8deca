//! explorar CLI - Exploratory Data Analysis and Reporting
//!
//! Command-line interface for explorar operations.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::uninlined_format_args)]

use std::process::ExitCode;

fn main() -> ExitCode {
    explorar::cli::run()
}
