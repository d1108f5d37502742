// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A command line tool to sound a tone on an input event device.

use anyhow::Result;
use beep::{Phase, Report, Tone};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match Opts::try_parse() {
        Ok(opts) => {
            init_tracing(opts.verbose);
            match cmd(&opts) {
                Ok(status) => return ExitCode::from(status),
                Err(e) => eprintln!("{e:#}"),
            }
        }
        Err(e) => eprintln!("{e}"),
    }
    ExitCode::FAILURE
}

#[derive(Debug, Parser)]
#[command(
    name = "beep",
    about = "Sound a tone on a Linux input event device, such as the PC speaker.",
    version,
    allow_negative_numbers = true
)]
struct Opts {
    /// The input event device, e.g. /dev/input/event3
    ///
    /// Options must precede the device, as anything following it is taken
    /// as the frequency and duration.
    device: PathBuf,

    /// The tone frequency in Hz
    ///
    /// Parsed leniently, so anything that does not start with a number is 0.
    #[arg(
        default_value_t = beep::DEFAULT_FREQUENCY.to_string(),
        allow_hyphen_values = true
    )]
    frequency: String,

    /// How long to sound the tone, in seconds
    #[arg(
        default_value_t = beep::DEFAULT_DURATION.as_secs().to_string(),
        allow_hyphen_values = true
    )]
    duration: String,

    /// Exit with the byte count of the final write rather than 0 or 1.
    #[arg(long)]
    byte_count_status: bool,

    /// Provide more detailed logging.
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Opts {
    fn tone(&self) -> Tone {
        Tone::from_args(Some(&self.frequency), Some(&self.duration))
    }
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

fn cmd(opts: &Opts) -> Result<u8> {
    let tone = opts.tone();
    let report = beep::beep(&opts.device, &tone, |phase, res| {
        if phase == Phase::On {
            println!(
                "Open {} with SND_TONE {} for {} seconds",
                opts.device.display(),
                tone.frequency,
                tone.duration.as_secs()
            );
        }
        print_write(phase, res);
    })?;
    Ok(exit_status(&report, opts.byte_count_status))
}

// 0 if both events were written in full, else 1, unless the byte count of
// the final write is requested.
fn exit_status(report: &Report, byte_count_status: bool) -> u8 {
    if byte_count_status {
        report.byte_count_status()
    } else if report.is_complete() {
        0
    } else {
        1
    }
}

fn print_write(phase: Phase, res: &std::io::Result<usize>) {
    match res {
        Ok(n) => println!("ret = {n}"),
        Err(e) => {
            println!("ret = -1");
            eprintln!("{phase} failed: {e}");
        }
    }
}
