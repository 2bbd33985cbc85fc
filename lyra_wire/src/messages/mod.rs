use crate::*;
use lyra_macros::define_messages;

pub mod message;
pub mod numeric;
