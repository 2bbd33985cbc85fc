use serde::{Deserialize, Serialize};

/// Default capacity of both the outbound and inbound line queues
pub const DEFAULT_QUEUE_LEN: usize = 16;

/// Default limit on an inbound line, terminator included
pub const DEFAULT_MAX_LINE_LEN: usize = 512;

fn default_queue_len() -> usize { DEFAULT_QUEUE_LEN }

fn default_max_line_len() -> usize { DEFAULT_MAX_LINE_LEN }

/// Per-connection transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig
{
    /// Number of outbound lines that may be pending before `write` waits
    #[serde(default = "default_queue_len")]
    pub send_queue_len: usize,
    /// Number of inbound lines buffered ahead of the consumer
    #[serde(default = "default_queue_len")]
    pub receive_queue_len: usize,
    /// Longest inbound line accepted, in bytes including its terminator. A
    /// longer line ends the connection.
    #[serde(default = "default_max_line_len")]
    pub max_line_len: usize,
    /// Log every line sent and received, at debug level
    #[serde(default)]
    pub log_traffic: bool,
}

impl Default for TransportConfig
{
    fn default() -> Self
    {
        Self {
            send_queue_len: DEFAULT_QUEUE_LEN,
            receive_queue_len: DEFAULT_QUEUE_LEN,
            max_line_len: DEFAULT_MAX_LINE_LEN,
            log_traffic: false,
        }
    }
}
