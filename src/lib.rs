// src/lib.rs
//! Samples system state and prints one status line whenever it changes.

pub mod core;
