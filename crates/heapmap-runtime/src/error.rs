use thiserror::Error;

use crate::table::SlotKey;

pub type Result<T> = std::result::Result<T, SlotError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error(transparent)]
    Segment(#[from] heapmap_core::Error),

    #[error("slot at {address:#x} is being removed and cannot take a new snapshot")]
    SlotRemoving { address: u64 },

    #[error("no slot for heap {} at {:#x}", .0.heap, .0.address)]
    UnknownSlot(SlotKey),
}
