// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A command line tool to drive a GPIO line.

use anyhow::Result;
use clap::Parser;
use gpio_setter::{Cdev, Config, Level};
use gpiocdev::line::{Offset, Value};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match Opts::try_parse() {
        Ok(opts) => {
            init_tracing(opts.verbose);
            match cmd(&opts) {
                Ok(()) => return ExitCode::SUCCESS,
                Err(e) => eprintln!("{e:#}"),
            }
        }
        Err(e) => eprintln!("{e}"),
    }
    ExitCode::FAILURE
}

#[derive(Debug, Parser)]
#[command(
    name = "gpio-setter",
    about = "Request a GPIO line as an output and drive it.",
    version
)]
struct Opts {
    /// The chip containing the line
    ///
    /// The chip may be identified by number, name, or path.
    /// e.g. the following all select the same chip:
    ///     --chip 0
    ///     --chip gpiochip0
    ///     --chip /dev/gpiochip0
    #[arg(
        short,
        long,
        value_name = "chip",
        default_value = gpio_setter::DEFAULT_CHIP,
        value_parser = parse_chip,
        verbatim_doc_comment
    )]
    chip: PathBuf,

    /// The offset of the line on the chip
    #[arg(short, long, value_name = "offset", default_value_t = gpio_setter::DEFAULT_OFFSET)]
    line: Offset,

    /// The consumer label applied to the requested line
    #[arg(long, value_name = "consumer", default_value = gpio_setter::DEFAULT_CONSUMER)]
    consumer: String,

    /// The value to drive the line to
    ///
    /// Values may be inactive/off/false/0 or active/on/true/1.
    #[arg(long, value_name = "value", default_value = "active", value_parser = gpio_setter::parse_value)]
    value: Value,

    /// Provide more detailed logging.
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Opts {
    fn config(&self) -> Config {
        Config {
            chip: self.chip.clone(),
            offset: self.line,
            consumer: self.consumer.clone(),
            value: self.value,
            ..Default::default()
        }
    }
}

fn parse_chip(s: &str) -> std::result::Result<PathBuf, std::convert::Infallible> {
    Ok(gpio_setter::chip_path_from_id(s))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn cmd(opts: &Opts) -> Result<()> {
    let cfg = opts.config();
    gpio_setter::run(&Cdev, &cfg)?;
    println!(
        "GPIO pin {} on {} set to {}",
        cfg.offset,
        cfg.chip.display(),
        Level(cfg.value)
    );
    Ok(())
}
