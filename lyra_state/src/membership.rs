use crate::*;

use bitflags::bitflags;
use std::{
    collections::HashMap,
    sync::Arc,
};

bitflags! {
    /// Per-member flags within a single relation, such as one channel's member list.
    ///
    /// The collections in this crate attach no meaning to them.
    #[derive(Default)]
    pub struct MembershipFlags: u8
    {
        const CREATOR  = 0x01;
        const OPERATOR = 0x02;
        const VOICE    = 0x04;
    }
}

impl MembershipFlags
{
    /// Map a channel mode letter onto the corresponding flag
    pub fn from_mode_char(c: char) -> Option<Self>
    {
        match c {
            'O' => Some(Self::CREATOR),
            'o' => Some(Self::OPERATOR),
            'v' => Some(Self::VOICE),
            _ => None
        }
    }
}

/// The members of a relation, each with its own flag set.
///
/// Presence in the set is the sole definition of membership.
#[derive(Debug)]
pub struct MembershipSet<T>
{
    members: HashMap<EntityRef<T>, MembershipFlags>,
}

impl<T> MembershipSet<T>
{
    pub fn new() -> Self
    {
        Self { members: HashMap::new() }
    }

    /// Add a member with an empty flag set.
    ///
    /// Re-adding an existing member discards its flags.
    pub fn add(&mut self, member: &Arc<T>)
    {
        self.members.insert(EntityRef::from(member), MembershipFlags::empty());
    }

    pub fn remove(&mut self, member: &Arc<T>)
    {
        self.members.remove(&EntityRef::from(member));
    }

    pub fn has(&self, member: &Arc<T>) -> bool
    {
        self.members.contains_key(&EntityRef::from(member))
    }

    /// Whether `member` is present and carries every flag in `flag`
    pub fn has_flag(&self, member: &Arc<T>, flag: MembershipFlags) -> bool
    {
        self.flags(member).map_or(false, |flags| flags.contains(flag))
    }

    pub fn flags(&self, member: &Arc<T>) -> Option<MembershipFlags>
    {
        self.members.get(&EntityRef::from(member)).copied()
    }

    /// Set `flag` on an existing member. Returns false if `member` is not present.
    pub fn set_flag(&mut self, member: &Arc<T>, flag: MembershipFlags) -> bool
    {
        match self.members.get_mut(&EntityRef::from(member)) {
            Some(flags) => { flags.insert(flag); true }
            None => false
        }
    }

    /// Clear `flag` on an existing member. Returns false if `member` is not present.
    pub fn clear_flag(&mut self, member: &Arc<T>, flag: MembershipFlags) -> bool
    {
        match self.members.get_mut(&EntityRef::from(member)) {
            Some(flags) => { flags.remove(flag); true }
            None => false
        }
    }

    pub fn len(&self) -> usize
    {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<T>, MembershipFlags)>
    {
        self.members.iter().map(|(member, flags)| (member.arc(), *flags))
    }
}

impl<T> Default for MembershipSet<T>
{
    fn default() -> Self
    {
        Self::new()
    }
}
