// Position list arena bookkeeping
//
// The list only tracks its length; callers move the stored entries.

use tideswap_math::MarketError;

use crate::types::PositionList;

impl PositionList {
    /// Reserve the next free index.
    pub fn push(&mut self) -> u32 {
        let index = self.head;
        self.head += 1;
        index
    }

    /// Shrink the list by one for removing `index`.
    ///
    /// Returns the index of the last entry, which must be moved into the freed
    /// slot, or `None` when `index` already was the last entry.
    pub fn swap_remove(&mut self, index: u32) -> Result<Option<u32>, MarketError> {
        if index >= self.head {
            return Err(MarketError::PositionNotFound);
        }
        self.head -= 1;
        if index == self.head {
            Ok(None)
        } else {
            Ok(Some(self.head))
        }
    }

    pub fn contains(&self, index: u32) -> bool {
        index < self.head
    }
}
