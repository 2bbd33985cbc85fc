use crate::*;

use std::{
    collections::HashSet,
    sync::Arc,
};

/// An unordered set of entities, keyed by identity.
#[derive(Debug)]
pub struct EntitySet<T>
{
    entities: HashSet<EntityRef<T>>,
}

impl<T> EntitySet<T>
{
    pub fn new() -> Self
    {
        Self { entities: HashSet::new() }
    }

    /// Returns false if `entity` was already present
    pub fn add(&mut self, entity: &Arc<T>) -> bool
    {
        self.entities.insert(EntityRef::from(entity))
    }

    /// Returns false if `entity` was not present
    pub fn remove(&mut self, entity: &Arc<T>) -> bool
    {
        self.entities.remove(&EntityRef::from(entity))
    }

    pub fn contains(&self, entity: &Arc<T>) -> bool
    {
        self.entities.contains(&EntityRef::from(entity))
    }

    /// Some element of the set, or `None` if it is empty.
    ///
    /// Which element is returned is unspecified and may differ between calls
    /// after any mutation.
    pub fn first(&self) -> Option<Arc<T>>
    {
        self.entities.iter().next().map(|e| Arc::clone(e.arc()))
    }

    pub fn len(&self) -> usize
    {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>>
    {
        self.entities.iter().map(EntityRef::arc)
    }
}

impl<T> Default for EntitySet<T>
{
    fn default() -> Self
    {
        Self::new()
    }
}
