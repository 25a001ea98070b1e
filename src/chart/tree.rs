//! Tree navigation over the state hierarchy.
//!
//! These are the lookups an interpreter needs to compute which states to exit
//! and enter when a transition fires. All of them are pure walks over the
//! parent and children maps.

use super::Statechart;
use crate::error::Result;
use std::collections::VecDeque;

impl Statechart {
    /// Ancestors of the given state, from its parent up to the root.
    pub fn ancestors_for(&self, name: &str) -> Result<Vec<&str>> {
        let mut ancestors = Vec::new();
        let mut parent = self.parent_for(name)?;
        while let Some(current) = parent {
            ancestors.push(current);
            parent = self.parent_for(current)?;
        }
        Ok(ancestors)
    }

    /// Descendants of the given state in breadth-first order, excluding the
    /// state itself.
    pub fn descendants_for(&self, name: &str) -> Result<Vec<&str>> {
        let mut descendants = Vec::new();
        let mut pending = VecDeque::from([self.children_for(name)?]);
        while let Some(children) = pending.pop_front() {
            for child in children {
                descendants.push(child.as_str());
                pending.push_back(self.children_for(child)?);
            }
        }
        Ok(descendants)
    }

    /// Depth of the given state. The root has depth 1.
    pub fn depth_for(&self, name: &str) -> Result<usize> {
        Ok(self.ancestors_for(name)?.len() + 1)
    }

    /// Deepest state that is an ancestor of both given states.
    ///
    /// Scans the ancestors of `first` from the closest one and returns the
    /// first that is also an ancestor of `second`. Returns `None` when the
    /// only common scope is above the root.
    pub fn least_common_ancestor(&self, first: &str, second: &str) -> Result<Option<&str>> {
        let first_ancestors = self.ancestors_for(first)?;
        let second_ancestors = self.ancestors_for(second)?;
        Ok(first_ancestors
            .into_iter()
            .find(|ancestor| second_ancestors.contains(ancestor)))
    }

    /// Keep the states of `names` that have no descendant in `names`.
    ///
    /// The result follows the order of `names`.
    pub fn leaf_for<'a, S: AsRef<str>>(&self, names: &'a [S]) -> Result<Vec<&'a str>> {
        for name in names {
            self.state_for(name.as_ref())?;
        }

        let mut leaves = Vec::new();
        for name in names {
            let descendants = self.descendants_for(name.as_ref())?;
            let has_descendant = names
                .iter()
                .any(|other| descendants.contains(&other.as_ref()));
            if !has_descendant {
                leaves.push(name.as_ref());
            }
        }
        Ok(leaves)
    }
}
