use crate::*;

use serde::{Deserialize, Serialize};

/// Protocol ceiling on a wire line, including the terminating CR LF
pub const MAX_LINE_LEN: usize = 512;

/// Longest reply line that fits within [`MAX_LINE_LEN`] once terminated
pub const MAX_REPLY_LEN: usize = MAX_LINE_LEN - 2;

fn default_max_reply_len() -> usize { MAX_REPLY_LEN }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig
{
    /// Upper bound, inclusive, on the length of a formatted line before its
    /// terminator is added
    #[serde(default = "default_max_reply_len")]
    pub max_reply_len: usize,
}

impl Default for EncoderConfig
{
    fn default() -> Self
    {
        Self { max_reply_len: MAX_REPLY_LEN }
    }
}

/// Turns [`Reply`] values into wire lines for a given viewer.
#[derive(Debug, Clone, Default)]
pub struct ReplyEncoder
{
    config: EncoderConfig,
}

impl ReplyEncoder
{
    pub fn new(config: EncoderConfig) -> Self
    {
        Self { config }
    }

    pub fn max_reply_len(&self) -> usize
    {
        self.config.max_reply_len
    }

    /// Format `reply` as seen by `viewer`.
    ///
    /// Returns at least one line. Lines carry no terminator.
    pub fn format(&self, reply: &Reply, viewer: &(impl Identifier + ?Sized)) -> Vec<String>
    {
        reply.format_lines(viewer, self.config.max_reply_len)
    }
}
