//! # Build Context
//!
//! The mutable per-run state the interpreter threads through command
//! execution: which solids each command currently owns, and which command
//! each name points at. Every pipeline run owns a fresh context - there is
//! no process-wide state.

use crate::solid::{Scene, Solid};
use std::collections::{BTreeMap, HashMap};

/// Ordered mapping from command index to that command's currently-live
/// solids, plus the name map.
///
/// A command may own zero, one or several solids; its list shrinks as later
/// combinations consume outputs. A name is unique at any instant; rebinding
/// a name overwrites the prior entry.
#[derive(Debug, Default)]
pub struct BuildContext {
    outputs: BTreeMap<usize, Vec<Solid>>,
    names: HashMap<String, usize>,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a command's outputs and bind the first solid's name, if any.
    pub fn insert(&mut self, index: usize, solids: Vec<Solid>) {
        if solids.is_empty() {
            return;
        }
        if let Some(name) = solids[0].name.clone() {
            self.names.insert(name, index);
        }
        self.outputs.entry(index).or_default().extend(solids);
    }

    /// The command index a name currently points at.
    pub fn named_index(&self, name: &str) -> Option<usize> {
        let index = *self.names.get(name)?;
        // A name always denotes the first live solid of its command
        self.outputs.get(&index).filter(|v| !v.is_empty())?;
        Some(index)
    }

    /// The named solid itself.
    pub fn named_solid_mut(&mut self, name: &str) -> Option<&mut Solid> {
        let index = self.named_index(name)?;
        self.outputs.get_mut(&index)?.first_mut()
    }

    /// First live solid of a command.
    pub fn first_solid(&self, index: usize) -> Option<&Solid> {
        self.outputs.get(&index)?.first()
    }

    /// Number of live solids a command currently owns.
    pub fn output_len(&self, index: usize) -> usize {
        self.outputs.get(&index).map_or(0, Vec::len)
    }

    /// Nearest command index before `before` with live output - the tool
    /// for a standalone combination, independent of kind.
    pub fn latest_live_before(&self, before: usize) -> Option<usize> {
        self.outputs
            .range(..before)
            .rev()
            .find(|(_, solids)| !solids.is_empty())
            .map(|(index, _)| *index)
    }

    /// True if a command has live output (used by kind lookback).
    pub fn has_live(&self, index: usize) -> bool {
        self.output_len(index) > 0
    }

    /// Remove and return the most recent solid of a command's list.
    pub fn take_last(&mut self, index: usize) -> Option<Solid> {
        let solid = self.outputs.get_mut(&index)?.pop()?;
        if let Some(name) = &solid.name {
            self.names.remove(name);
        }
        Some(solid)
    }

    /// Return a previously taken solid to its command's list.
    pub fn push_back(&mut self, index: usize, solid: Solid) {
        if let Some(name) = solid.name.clone() {
            self.names.insert(name, index);
        }
        self.outputs.entry(index).or_default().push(solid);
    }

    /// Replace a command's first solid with a combination result, rebinding
    /// the result's name.
    pub fn replace_first(&mut self, index: usize, solid: Solid) {
        if let Some(name) = solid.name.clone() {
            self.names.insert(name, index);
        }
        let list = self.outputs.entry(index).or_default();
        if list.is_empty() {
            list.push(solid);
        } else {
            list[0] = solid;
        }
    }

    /// Flatten the context into the final scene, command order preserved.
    pub fn into_scene(self) -> Scene {
        Scene {
            solids: self.outputs.into_values().flatten().collect(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
