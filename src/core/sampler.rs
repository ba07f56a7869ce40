// src/core/sampler.rs
//
// The fixed-rate sampling loop. Each tick reads the clock first, polls every
// item, and writes one line only if something changed.

use super::config::Config;
use super::item_manager::ItemManager;
use super::items::clock::ClockItem;
use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct Sampler {
    clock: ClockItem,
    items: ItemManager,
    tick: Duration,
    line: String,
    // A change was seen on a tick whose output had to be skipped
    dirty: bool,
}

impl Sampler {
    // Open every sensor. Any failure here is fatal.
    pub fn new(config: &Config) -> Result<Self> {
        let items = ItemManager::load(config).context("Opening sensors")?;
        let clock = ClockItem::new(&config.modules.clock);
        Ok(Self::with_items(clock, items, config.tick_interval()))
    }

    pub fn with_items(clock: ClockItem, items: ItemManager, tick: Duration) -> Self {
        Sampler {
            clock,
            items,
            tick,
            line: String::with_capacity(160),
            dirty: false,
        }
    }

    // Runs until the process is killed or a fatal error occurs.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        info!(tick = ?self.tick, items = self.items.items().len(), "Sampling");
        let mut work_started: Option<Instant> = None;
        loop {
            // Sleep off whatever the previous tick didn't use
            if let Some(started) = work_started {
                thread::sleep(sleep_for(started.elapsed(), self.tick));
            }
            work_started = Some(Instant::now());
            self.step(out)?;
        }
    }

    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<bool> {
        self.step_at(&Local::now(), out)
    }

    // One tick at a given wall-clock time. Returns whether a line was written.
    pub fn step_at<Tz, W>(&mut self, now: &DateTime<Tz>, out: &mut W) -> Result<bool>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
        W: Write,
    {
        let tick = self.clock.observe(now);
        let summary = self.items.poll_all(&tick).context("Polling sensors")?;

        let changed = self.dirty || tick.second_passed || summary.changed;
        if summary.failed {
            // Retry next tick without losing the change
            self.dirty = changed;
            return Ok(false);
        }
        self.dirty = false;
        if !changed {
            return Ok(false);
        }

        self.line.clear();
        self.items.render(&mut self.line);
        if !self.line.is_empty() {
            self.line.push_str(" | ");
        }
        self.clock.render(&mut self.line);
        debug!(line = %self.line, "Status changed");

        writeln!(out, "{}", self.line).context("Writing status line")?;
        out.flush().context("Flushing status line")?;
        Ok(true)
    }
}

// What is left of `tick` after `elapsed` of work; zero once work overruns it.
fn sleep_for(elapsed: Duration, tick: Duration) -> Duration {
    tick - elapsed.min(tick)
}
