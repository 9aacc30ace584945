//! pitchdeck - step-by-step pitch deck builder
//!
//! The wizard engine (step sequencing, draft merging, gating and progress)
//! and the deck exporter are usable without the terminal front end.

// Allow dead code in the library - the terminal front end only lives in main.rs
#![allow(dead_code)]

pub mod config;
pub mod export;
pub mod wizard;
