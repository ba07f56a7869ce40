// src/main.rs
extern crate anyhow;
extern crate statusbar_rs;

use anyhow::{Context, Result};
use statusbar_rs::core::config::Config;
use statusbar_rs::core::sampler::Sampler;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the status line, so diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let config = Config::load().context("Loading application configuration")?;
    // Open every sensor up front; failures here end the process
    let mut sampler = Sampler::new(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    sampler.run(&mut out)
}
