//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use itemlist_core::ContainerLayout;
use itemlist_types::{ListEntry, SectionId};

/// Minimal entry: identity, a display position and a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: u32,
    pub payload: String,
}

impl ListEntry for Row {
    type Id = u32;
    type Key = u32;

    fn stable_id(&self) -> u32 {
        self.id
    }

    fn section(&self) -> SectionId {
        SectionId::new(0)
    }

    fn sort_key(&self) -> u32 {
        self.id
    }
}

pub fn row(id: u32, payload: &str) -> Row {
    Row {
        id,
        payload: payload.to_string(),
    }
}

pub fn rows(ids: &[u32]) -> Vec<Row> {
    ids.iter().map(|&id| row(id, "same")).collect()
}

/// Deterministic pseudo-random permutations of subsets, so property checks
/// cover many shapes without an extra dependency.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }

    /// Random subset of `0..universe`, shuffled.
    pub fn ids(&mut self, universe: u32) -> Vec<u32> {
        let mut ids: Vec<u32> = (0..universe).filter(|_| self.below(3) != 0).collect();
        for i in (1..ids.len()).rev() {
            let j = self.below(i as u64 + 1) as usize;
            ids.swap(i, j);
        }
        ids
    }
}

pub fn layout() -> ContainerLayout {
    ContainerLayout {
        width: 80,
        height: 24,
        top_inset: 2,
    }
}

pub fn itemlist_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_itemlist"))
}

/// Run the binary with `HOME` pointed at `home` so no user config leaks in.
pub fn run_itemlist(home: &Path, args: &[&str]) -> Output {
    Command::new(itemlist_bin())
        .args(args)
        .env("HOME", home)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run itemlist")
}
