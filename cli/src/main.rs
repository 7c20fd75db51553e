mod cli;

use crate::cli::{Cli, LevelFilter, SubCommands};
use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use xonar_usb::switcher::OutputSwitch;

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    // Logs go to stderr, keeping stdout clean for the `get` answer.
    CombinedLogger::init(vec![TermLogger::new(
        match args.log_level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        },
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
    .context("Could not configure the logger")?;

    let switch = OutputSwitch::start();

    let result = match &args.command {
        SubCommands::Get => {
            println!("{}", switch.read_output());
            Ok(())
        }
        SubCommands::Set { value } => switch
            .write_output(value)
            .context("Could not switch the output"),
    };

    switch.stop();
    result
}
