//! Invariant-preserving collections for named protocol entities.
//!
//! Every collection here is a plain in-memory structure with no internal
//! synchronisation. The owner (usually the server's state, held behind a single
//! lock) serialises all mutation.
//!
//! Entities are stored as `Arc<T>`, and identity means pointer identity: two
//! distinct `Arc`s holding equal values are different entities.
//!
//! - [`NameRegistry`] maps names to entities, rejecting duplicates and refusing
//!   to unbind a name on behalf of an entity that no longer owns it.
//! - [`MembershipSet`] tracks which entities belong to a relation, with a
//!   [`MembershipFlags`] set for each.
//! - [`EntitySet`] is an unordered set of entities.

mod error;
pub use error::*;

mod entity_ref;
pub use entity_ref::*;

mod registry;
pub use registry::*;

mod membership;
pub use membership::*;

mod entity_set;
pub use entity_set::*;

mod mask;
pub use mask::*;
