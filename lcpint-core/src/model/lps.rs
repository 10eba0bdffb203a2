//! Ordered core sequence produced for one input at one deepen level

use alloc::vec::Vec;

use crate::model::Core;

/// Parse structure: cores in textual order at a given refinement level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lps {
    /// Refinement iterations applied so far (0 = base structure)
    level: u32,
    cores: Vec<Core>,
}

impl Lps {
    /// Create a base-level structure
    pub fn new(cores: Vec<Core>) -> Self {
        Self { level: 0, cores }
    }

    /// Refinement iterations applied so far
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Cores in order
    pub fn cores(&self) -> &[Core] {
        &self.cores
    }

    /// Number of cores
    pub fn len(&self) -> usize {
        self.cores.len()
    }

    /// Check if no cores remain
    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }

    /// Replace the cores with the next refinement level
    ///
    /// The previous level's cores are dropped.
    pub fn advance(&mut self, cores: Vec<Core>) {
        self.cores = cores;
        self.level += 1;
    }

    /// Drop all cores and record `level` as reached
    ///
    /// An empty structure stays empty under refinement.
    pub fn advance_to(&mut self, level: u32) {
        self.cores.clear();
        self.level = self.level.max(level);
    }
}

impl<'a> IntoIterator for &'a Lps {
    type Item = &'a Core;
    type IntoIter = core::slice::Iter<'a, Core>;

    fn into_iter(self) -> Self::IntoIter {
        self.cores.iter()
    }
}
