//! Ordered load collection
//!
//! Loads keep the order they were added in. Editing a load replaces it at the
//! same index under the same id, so nothing is ever reordered by an edit.
//! Names are unique across the collection and tracked in a name index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Load;
use crate::beam::Beam;
use crate::errors::{BeamError, BeamResult};
use crate::format::round_significant;

/// Stable identifier of a load within a [`LoadSet`]
pub type LoadId = Uuid;

/// Ordered `(id, load)` pairs with a name uniqueness index.
///
/// Serializes as a plain JSON array of loads. Ids are session-local and are
/// regenerated when a set is deserialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Load>", into = "Vec<Load>")]
pub struct LoadSet {
    ids: Vec<LoadId>,
    loads: Vec<Load>,
    names: HashMap<String, LoadId>,
}

impl LoadSet {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a load at the end; rejects a name that is already taken
    pub fn add(&mut self, load: Load) -> BeamResult<LoadId> {
        if self.names.contains_key(&load.name) {
            return Err(BeamError::duplicate_name(&load.name));
        }
        let id = Uuid::new_v4();
        self.names.insert(load.name.clone(), id);
        self.ids.push(id);
        self.loads.push(load);
        Ok(id)
    }

    /// Replace the load with `id` in place, keeping its index and id
    pub fn replace(&mut self, id: LoadId, load: Load) -> BeamResult<()> {
        let index = self.index_of(id)?;
        if let Some(owner) = self.names.get(&load.name) {
            if *owner != id {
                return Err(BeamError::duplicate_name(&load.name));
            }
        }
        self.names.remove(&self.loads[index].name);
        self.names.insert(load.name.clone(), id);
        self.loads[index] = load;
        Ok(())
    }

    /// Remove the load with `id`, returning it
    pub fn remove(&mut self, id: LoadId) -> BeamResult<Load> {
        let index = self.index_of(id)?;
        self.ids.remove(index);
        let load = self.loads.remove(index);
        self.names.remove(&load.name);
        Ok(load)
    }

    /// Get a load by id
    pub fn get(&self, id: LoadId) -> Option<&Load> {
        self.position(id).map(|index| &self.loads[index])
    }

    /// Look up a load id by name
    pub fn id_by_name(&self, name: &str) -> Option<LoadId> {
        self.names.get(name).copied()
    }

    /// Index of a load in collection order
    pub fn position(&self, id: LoadId) -> Option<usize> {
        self.ids.iter().position(|candidate| *candidate == id)
    }

    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Iterate `(id, load)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (LoadId, &Load)> {
        self.ids.iter().copied().zip(self.loads.iter())
    }

    /// Ordered snapshot handed to the engine
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// First name of the form "Load N" that is not in use
    pub fn free_name(&self) -> String {
        (1..)
            .map(|i| format!("Load {}", i))
            .find(|name| !self.names.contains_key(name))
            .unwrap_or_default()
    }

    /// Move a load by `displacement`, keeping it on the beam.
    ///
    /// The new location is rounded to 6 significant digits to shed floating
    /// point trails, then clamped to `[0, length - extent]`. Returns the new
    /// location.
    pub fn nudge(&mut self, id: LoadId, displacement: f64, beam: &Beam) -> BeamResult<f64> {
        let index = self.index_of(id)?;
        let load = &mut self.loads[index];
        let target = round_significant(load.location + displacement, 6);
        load.location = target.max(0.0).min(beam.length - load.extent());
        log::trace!("moved {} to {}", load.name, load.location);
        Ok(load.location)
    }

    /// Validate every load against the beam
    pub fn validate(&self, beam: &Beam) -> BeamResult<()> {
        self.loads.iter().try_for_each(|load| load.validate(beam))
    }

    fn index_of(&self, id: LoadId) -> BeamResult<usize> {
        self.position(id).ok_or_else(|| BeamError::load_not_found(id))
    }
}

impl TryFrom<Vec<Load>> for LoadSet {
    type Error = BeamError;

    fn try_from(loads: Vec<Load>) -> Result<Self, Self::Error> {
        let mut set = LoadSet::new();
        for load in loads {
            set.add(load)?;
        }
        Ok(set)
    }
}

impl From<LoadSet> for Vec<Load> {
    fn from(set: LoadSet) -> Self {
        set.loads
    }
}
