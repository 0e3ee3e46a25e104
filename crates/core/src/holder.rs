//! Holder module - one-slot store behind an open/closed gate
//!
//! Used for the "hold piece" mechanic: the game loop closes the gate after a
//! hold and reopens it once the next piece locks.

use log::warn;

use crate::error::{PytrominoError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holder<T> {
    item: Option<T>,
    accepts_store: bool,
}

impl<T> Holder<T> {
    /// Empty and open
    pub fn new() -> Self {
        Self {
            item: None,
            accepts_store: true,
        }
    }

    /// Store `item`, dropping whatever was held before.
    ///
    /// Fails with [`PytrominoError::HolderClosed`] while the gate is closed.
    pub fn store(&mut self, item: T) -> Result<()> {
        self.replace(item).map(drop)
    }

    /// Store `item` and hand back the previous occupant
    pub fn replace(&mut self, item: T) -> Result<Option<T>> {
        if !self.accepts_store {
            warn!("store attempted on a closed holder");
            return Err(PytrominoError::HolderClosed);
        }
        Ok(self.item.replace(item))
    }

    pub fn open(&mut self) {
        self.accepts_store = true;
    }

    pub fn close(&mut self) {
        self.accepts_store = false;
    }

    /// Current item, regardless of the gate
    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.accepts_store
    }
}

impl<T> Default for Holder<T> {
    fn default() -> Self {
        Self::new()
    }
}
