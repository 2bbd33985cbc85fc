use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    sync::Arc,
};

/// A shared entity compared and hashed by identity rather than by value.
pub struct EntityRef<T>(Arc<T>);

impl<T> EntityRef<T>
{
    pub fn new(entity: Arc<T>) -> Self
    {
        Self(entity)
    }

    /// Does this refer to the same entity as `other`?
    pub fn is(&self, other: &Arc<T>) -> bool
    {
        Arc::ptr_eq(&self.0, other)
    }

    pub fn arc(&self) -> &Arc<T>
    {
        &self.0
    }

    pub fn into_inner(self) -> Arc<T>
    {
        self.0
    }
}

impl<T> Clone for EntityRef<T>
{
    fn clone(&self) -> Self
    {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for EntityRef<T>
{
    fn eq(&self, other: &Self) -> bool
    {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for EntityRef<T> { }

impl<T> Hash for EntityRef<T>
{
    fn hash<H: Hasher>(&self, state: &mut H)
    {
        std::ptr::hash(Arc::as_ptr(&self.0), state)
    }
}

impl<T> Deref for EntityRef<T>
{
    type Target = T;

    fn deref(&self) -> &T
    {
        &self.0
    }
}

impl<T> From<Arc<T>> for EntityRef<T>
{
    fn from(entity: Arc<T>) -> Self
    {
        Self(entity)
    }
}

impl<T> From<&Arc<T>> for EntityRef<T>
{
    fn from(entity: &Arc<T>) -> Self
    {
        Self(Arc::clone(entity))
    }
}

impl<T: fmt::Debug> fmt::Debug for EntityRef<T>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_tuple("EntityRef").field(&self.0).finish()
    }
}
