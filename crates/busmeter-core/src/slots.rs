//! Request sequencing for the photo inputs.
//!
//! A compression cannot be cancelled once started. If the user picks a new
//! photo for a slot while the previous one is still compressing, both calls
//! finish and the older result must not overwrite the newer one. Each
//! request takes a ticket; only the latest ticket for a slot is current.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// The photo inputs on the vehicle manager screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSlot {
    /// Odometer at departure.
    Departure,
    /// Odometer on return.
    Return,
    /// Fuel meter at fill-up.
    Fuel,
}

impl PhotoSlot {
    pub const ALL: [PhotoSlot; 3] = [PhotoSlot::Departure, PhotoSlot::Return, PhotoSlot::Fuel];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "departure" => Some(PhotoSlot::Departure),
            "return" => Some(PhotoSlot::Return),
            "fuel" => Some(PhotoSlot::Fuel),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PhotoSlot::Departure => "departure",
            PhotoSlot::Return => "return",
            PhotoSlot::Fuel => "fuel",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Identifies one compression request for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    slot: PhotoSlot,
    seq: u64,
}

impl Ticket {
    pub fn slot(&self) -> PhotoSlot {
        self.slot
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Hands out per-slot tickets and tells stale completions apart.
#[derive(Debug, Default)]
pub struct SlotTracker {
    latest: [AtomicU64; 3],
}

impl SlotTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `slot`. Any earlier ticket for the slot becomes
    /// stale. Sequence numbers start at 1.
    pub fn begin(&self, slot: PhotoSlot) -> Ticket {
        let seq = self.latest[slot.index()].fetch_add(1, Ordering::AcqRel) + 1;
        Ticket { slot, seq }
    }

    /// Sequence number of the most recent ticket for `slot`, or 0 if none
    /// has been issued.
    pub fn latest(&self, slot: PhotoSlot) -> u64 {
        self.latest[slot.index()].load(Ordering::Acquire)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest(ticket.slot) == ticket.seq
    }

    /// Keep `value` only if `ticket` is still the latest for its slot.
    pub fn complete<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::debug!(
                slot = ticket.slot.name(),
                seq = ticket.seq,
                "discarding stale photo result"
            );
            None
        }
    }
}
