use crate::*;

use std::{fmt, sync::Arc};

/// Length of `names` joined with single spaces.
///
/// An empty batch has length zero.
pub fn joined_len<T: AsRef<str>>(names: &[T]) -> usize
{
    let separators = names.len().saturating_sub(1);
    names.iter().map(|n| n.as_ref().len()).sum::<usize>() + separators
}

/// Split `nicks` into consecutive batches, each of which fits in a line of
/// `max_len` bytes once added to a fixed prefix of `base_len` bytes.
///
/// A window `[from, to)` is grown one name at a time. When a window of more than
/// one name would overflow, everything but its last name is emitted as a batch
/// and the overflowing name starts the next window. A name too long to fit even
/// on its own is still emitted, alone.
pub fn pack_names<T: AsRef<str>>(nicks: &[T], base_len: usize, max_len: usize) -> Vec<&[T]>
{
    let too_long = |names: &[T]| base_len + joined_len(names) > max_len;

    let mut batches = Vec::new();
    let (mut from, mut to) = (0, 1);

    while to <= nicks.len()
    {
        if from < to - 1 && too_long(&nicks[from..to])
        {
            batches.push(&nicks[from..to - 1]);
            from = to - 1;
        }
        else
        {
            to += 1;
        }
    }

    if from < nicks.len()
    {
        batches.push(&nicks[from..]);
    }

    batches
}

/// The member list of a channel.
///
/// Holds only a reference to the channel; the member list is read each time the
/// reply is formatted.
#[derive(Clone)]
pub struct NamesReply
{
    channel: Arc<dyn ChannelView>,
}

impl NamesReply
{
    pub fn new(channel: Arc<dyn ChannelView>) -> Self
    {
        Self { channel }
    }

    pub fn source(&self) -> Origin
    {
        Origin::of(&*self.channel)
    }

    /// Render the channel's current members as `353` lines of at most
    /// `max_len` bytes each, followed by a `366` line.
    pub fn format(&self, viewer: &(impl Identifier + ?Sized), max_len: usize) -> Vec<String>
    {
        let server = self.channel.server();
        let name = self.channel.name();
        let nicks = self.channel.nicks();

        let base_len = numeric::name_reply(&server, &name, "").format(viewer).len();

        let mut lines: Vec<String> = pack_names(&nicks, base_len, max_len)
            .into_iter()
            .map(|batch| {
                if batch.len() == 1 && base_len + joined_len(batch) > max_len
                {
                    tracing::debug!(channel = %name, nick = %batch[0], "nickname alone exceeds reply length");
                }
                numeric::name_reply(&server, &name, &batch.join(" ")).format(viewer)
            })
            .collect();

        lines.push(numeric::end_of_names(&server, &name).format(viewer));
        lines
    }
}

impl fmt::Display for NamesReply
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "NamesReply(channel={}, names={:?})", self.channel.name(), self.channel.nicks())
    }
}

impl fmt::Debug for NamesReply
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("NamesReply").field("channel", &self.channel.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_length() {
        assert_eq!(joined_len(&["alice"]), 5);
        assert_eq!(joined_len(&["alice", "bob"]), 9);
        assert_eq!(joined_len(&["a", "b", "c", "d"]), 7);
        assert_eq!(joined_len::<&str>(&[]), 0);
    }

    #[test]
    fn pack_empty() {
        assert!(pack_names::<&str>(&[], 10, 20).is_empty());
    }

    #[test]
    fn pack_single() {
        assert_eq!(pack_names(&["alice"], 10, 20), vec![&["alice"][..]]);
    }

    #[test]
    fn pack_measures_final_name() {
        // prefix 10 + "alice bob carol" (15) = 25; adding " dave" makes 30
        let nicks = ["alice", "bob", "carol", "dave"];
        assert_eq!(pack_names(&nicks, 10, 25), vec![&nicks[0..3], &nicks[3..4]]);
        assert_eq!(pack_names(&nicks, 10, 29), vec![&nicks[0..3], &nicks[3..4]]);
        assert_eq!(pack_names(&nicks, 10, 30), vec![&nicks[..]]);
    }

    #[test]
    fn pack_bound_is_inclusive() {
        let nicks = ["ab", "cd"];
        assert_eq!(pack_names(&nicks, 0, 5), vec![&nicks[..]]);
        assert_eq!(pack_names(&nicks, 0, 4), vec![&nicks[0..1], &nicks[1..2]]);
    }

    #[test]
    fn pack_oversized_names_alone() {
        let nicks = ["a", "waytoolongnickname", "b", "c"];
        let batches = pack_names(&nicks, 5, 10);
        assert_eq!(batches, vec![&nicks[0..1], &nicks[1..2], &nicks[2..4]]);
    }

    #[test]
    fn pack_everything_oversized() {
        let nicks = ["aaaa", "bbbb", "cccc"];
        let batches = pack_names(&nicks, 10, 5);
        assert_eq!(batches, vec![&nicks[0..1], &nicks[1..2], &nicks[2..3]]);
    }
}
