//! # Hello World Pro
//!
//! Asks for your name and says hello.
//!
//! Log verbosity is set with `RUST_LOG` (default: warn), logs go to stderr.

use std::io;
use std::process;

use anyhow::{Context, Result};
use env_logger::{Builder, Env};
use log::{error, info};

fn logger_init() {
    let env = Env::default().filter_or("RUST_LOG", "warn");
    Builder::from_env(env).init();
}

fn run_greeter() -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let greeting = hello_world_pro::run(stdin, stdout).context("Greeter failed!")?;
    info!("Done: {greeting:?}");
    Ok(())
}

fn main() {
    logger_init();
    match run_greeter() {
        Ok(_) => (),
        Err(err_msg) => {
            error!("Error: {err_msg:#}");
            process::exit(1);
        }
    }
}
