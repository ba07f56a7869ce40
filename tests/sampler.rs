// tests/sampler.rs

mod common;

use chrono::{DateTime, TimeZone, Utc};
use common::{FakeMixer, Fixture};
use statusbar_rs::core::error::SensorError;
use statusbar_rs::core::item::Item;
use statusbar_rs::core::item_manager::ItemManager;
use statusbar_rs::core::items::battery::BatteryItem;
use statusbar_rs::core::items::brightness::BrightnessItem;
use statusbar_rs::core::items::clock::ClockItem;
use statusbar_rs::core::items::cpu::CpuItem;
use statusbar_rs::core::items::mem::MemItem;
use statusbar_rs::core::items::sound::{Playback, SoundItem};
use statusbar_rs::core::items::temp::TempItem;
use statusbar_rs::core::sampler::Sampler;
use std::time::Duration;

fn at(s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 9, 10, 0, s).unwrap()
}

fn sampler(fx: &Fixture) -> Sampler {
    let items = ItemManager::load(&fx.config).unwrap();
    let clock = ClockItem::new(&fx.config.modules.clock);
    Sampler::with_items(clock, items, Duration::from_millis(1))
}

fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn first_tick_always_emits() {
    let fx = Fixture::new();
    let mut s = sampler(&fx);
    let mut out = Vec::new();
    assert!(s.step_at(&at(0), &mut out).unwrap());
    assert_eq!(
        lines(&out),
        ["power: 100% discharging | cpu: 0% | temp: 48C | ram: 25% | swap: 0% | brightness: 50% | date: 10:00:00"]
    );
}

#[test]
fn identical_inputs_within_a_second_emit_nothing() {
    let fx = Fixture::new();
    let mut s = sampler(&fx);
    let mut out = Vec::new();
    s.step_at(&at(0), &mut out).unwrap();
    out.clear();

    assert!(!s.step_at(&at(0), &mut out).unwrap());
    assert!(!s.step_at(&at(0), &mut out).unwrap());
    assert!(out.is_empty());
}

#[test]
fn single_field_change_emits_one_line() {
    let fx = Fixture::new();
    let mut s = sampler(&fx);
    let mut out = Vec::new();
    s.step_at(&at(0), &mut out).unwrap();
    out.clear();

    fx.write("backlight/brightness", "255\n");
    assert!(s.step_at(&at(0), &mut out).unwrap());
    assert!(!s.step_at(&at(0), &mut out).unwrap());

    let got = lines(&out);
    assert_eq!(got.len(), 1);
    assert!(got[0].contains("brightness: 100%"));
}

#[test]
fn new_second_emits_even_without_sensor_changes() {
    let fx = Fixture::new();
    let mut s = sampler(&fx);
    let mut out = Vec::new();
    s.step_at(&at(0), &mut out).unwrap();
    out.clear();

    assert!(s.step_at(&at(1), &mut out).unwrap());
    assert!(lines(&out)[0].ends_with("date: 10:00:01"));
}

#[test]
fn cpu_is_only_resampled_on_a_new_second() {
    let fx = Fixture::new();
    let mut s = sampler(&fx);
    let mut out = Vec::new();
    s.step_at(&at(0), &mut out).unwrap();
    out.clear();

    // Counters move within the same second: no recompute, no output
    fx.write("stat", "cpu  110 0 10 80 0 0 0 0 0 0\n");
    assert!(!s.step_at(&at(0), &mut out).unwrap());

    assert!(s.step_at(&at(1), &mut out).unwrap());
    assert!(lines(&out)[0].contains("cpu: 100%"));
}

#[test]
fn unrecognized_battery_status_is_fatal_and_silent() {
    let fx = Fixture::new();
    fx.write("BAT0/status", "X\n");
    let mut s = sampler(&fx);
    let mut out = Vec::new();

    let err = s.step_at(&at(0), &mut out).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SensorError>(),
        Some(SensorError::UnrecognizedBatteryStatus { .. })
    ));
    assert!(out.is_empty());
}

#[test]
fn transient_failure_defers_the_line() {
    let fx = Fixture::new();
    let mut s = sampler(&fx);
    let mut out = Vec::new();
    s.step_at(&at(0), &mut out).unwrap();
    out.clear();

    fx.write("backlight/brightness", "0\n");
    fx.write("meminfo", "MemTotal: oops\n");
    assert!(!s.step_at(&at(0), &mut out).unwrap());
    assert!(out.is_empty());

    // Recovered within the same second: the earlier change still goes out
    fx.write("meminfo", common::MEMINFO);
    assert!(s.step_at(&at(0), &mut out).unwrap());
    assert!(lines(&out)[0].contains("brightness: 0%"));
}

#[test]
fn full_field_set_with_sound() {
    let fx = Fixture::new();
    let modules = &fx.config.modules;
    let sound = SoundItem::with_backend(Box::new(FakeMixer {
        range: (0, 65536),
        playback: Playback {
            volume: 32768,
            enabled: true,
        },
    }));
    let items: Vec<Box<dyn Item>> = vec![
        Box::new(sound),
        Box::new(BatteryItem::new(&modules.battery).unwrap()),
        Box::new(CpuItem::new(&modules.cpu).unwrap()),
        Box::new(TempItem::new(&modules.temp).unwrap()),
        Box::new(MemItem::new(&modules.mem).unwrap()),
        Box::new(BrightnessItem::new(&modules.brightness).unwrap()),
    ];
    let clock = ClockItem::new(&modules.clock);
    let mut s = Sampler::with_items(clock, ItemManager::from_items(items), Duration::from_millis(1));

    let mut out = Vec::new();
    s.step_at(&at(5), &mut out).unwrap();
    assert_eq!(
        lines(&out),
        ["sound: 50% | power: 100% discharging | cpu: 0% | temp: 48C | ram: 25% | swap: 0% | brightness: 50% | date: 10:00:05"]
    );
}
