// Seat counter of a single showtime.
//
// Purpose
// - Track how many seats are still free; nothing about who holds them.
//
// Invariants
// - 0 <= available <= capacity after every operation.
// - Sold out exactly when available is 0. The flag is derived, never stored.
// - Deserialized counters are checked against the first invariant.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CAPACITY: u32 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{available} seats available exceeds capacity {capacity}")]
pub struct SeatCounterError {
    pub capacity: u32,
    pub available: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSeatCounter")]
pub struct SeatCounter {
    capacity: u32,
    available: u32,
}

#[derive(Deserialize)]
struct RawSeatCounter {
    capacity: u32,
    available: u32,
}

impl TryFrom<RawSeatCounter> for SeatCounter {
    type Error = SeatCounterError;

    fn try_from(raw: RawSeatCounter) -> Result<Self, Self::Error> {
        if raw.available > raw.capacity {
            return Err(SeatCounterError {
                capacity: raw.capacity,
                available: raw.available,
            });
        }
        Ok(Self {
            capacity: raw.capacity,
            available: raw.available,
        })
    }
}

impl Default for SeatCounter {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl SeatCounter {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            available: capacity,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn reserved(&self) -> u32 {
        self.capacity - self.available
    }

    pub fn is_sold_out(&self) -> bool {
        self.available == 0
    }

    /// Takes `seats` seats. Returns false and changes nothing when the request is
    /// zero or larger than what is left.
    pub fn reserve(&mut self, seats: u32) -> bool {
        if seats == 0 || seats > self.available {
            return false;
        }
        self.available -= seats;
        true
    }

    /// Gives `seats` seats back. Releasing more than was reserved stops at full capacity.
    pub fn cancel(&mut self, seats: u32) {
        if seats == 0 {
            return;
        }
        self.available = self.available.saturating_add(seats).min(self.capacity);
    }

    /// Changes the capacity, keeping the reserved seats when they still fit.
    pub fn resize(&mut self, capacity: u32) {
        let reserved = self.reserved().min(capacity);
        self.capacity = capacity;
        self.available = capacity - reserved;
    }
}
