use crate::*;

use std::{
    collections::HashMap,
    sync::Arc,
};

/// An entity that can be indexed by name.
pub trait Named
{
    /// The name under which this entity is currently registered, or `None` if
    /// it has not been given one yet.
    fn registry_key(&self) -> Option<String>;
}

/// A bijection from names to entities.
///
/// At most one entity is bound to any name. Names are compared exactly, with no
/// case folding. The backing map is never exposed, so [`add`](Self::add) and
/// [`remove`](Self::remove) are the only ways to mutate it.
#[derive(Debug)]
pub struct NameRegistry<T>
{
    entries: HashMap<String, Arc<T>>,
}

impl<T: Named> NameRegistry<T>
{
    pub fn new() -> Self
    {
        Self { entries: HashMap::new() }
    }

    /// Bind `entity` under its current name.
    ///
    /// Fails with `MissingKey` if the entity has no name, or `DuplicateName` if
    /// the name is already bound (to this or any other entity).
    pub fn add(&mut self, entity: Arc<T>) -> RegistryResult<()>
    {
        let name = match entity.registry_key() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(RegistryError::MissingKey)
        };

        if self.entries.contains_key(&name)
        {
            tracing::debug!(%name, "rejected duplicate registration");
            return Err(RegistryError::DuplicateName(name));
        }

        self.entries.insert(name, entity);
        Ok(())
    }

    /// Unbind the name currently carried by `entity`.
    ///
    /// Fails with `IdentityMismatch` unless the entity bound under that name is
    /// this very instance. A stale handle to a renamed or replaced entity can
    /// therefore never unbind somebody else's name.
    pub fn remove(&mut self, entity: &Arc<T>) -> RegistryResult<()>
    {
        let name = entity.registry_key().unwrap_or_default();

        match self.entries.get(&name)
        {
            Some(existing) if Arc::ptr_eq(existing, entity) => {
                self.entries.remove(&name);
                Ok(())
            }
            _ => {
                tracing::debug!(%name, "rejected removal of unbound entity");
                Err(RegistryError::IdentityMismatch(name))
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<T>>
    {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool
    {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// Iterate over the registered entities, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>>
    {
        self.entries.values()
    }
}

impl<T: Named> Default for NameRegistry<T>
{
    fn default() -> Self
    {
        Self::new()
    }
}
