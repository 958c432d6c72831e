//! Sparse, unbounded tape memory.
//!
//! Only cells that have been written occupy memory. Reading an address that
//! was never written yields zero. Addresses may be negative.

use std::collections::HashMap;

use num_bigint::BigInt;
use num_traits::Zero;

/// A tape cell. Arbitrary precision: incrementing never wraps.
pub type Cell = BigInt;

/// A tape address. Pointer movement wraps at the `i64` limits.
pub type Address = i64;

/// The VM's memory: a map from address to cell value, zero by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tape {
    cells: HashMap<Address, Cell>,
}

impl Tape {
    /// Create an empty tape. Every address reads as zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value at `address`, or zero if it was never written.
    pub fn read(&self, address: Address) -> Cell {
        match self.cells.get(&address) {
            Some(value) => value.clone(),
            None => Cell::zero(),
        }
    }

    /// True if the cell at `address` holds zero. Avoids cloning the value.
    pub fn is_zero(&self, address: Address) -> bool {
        self.cells.get(&address).map_or(true, Zero::is_zero)
    }

    /// Set the cell at `address`, creating it if absent.
    pub fn write(&mut self, address: Address, value: Cell) {
        self.cells.insert(address, value);
    }

    /// Number of distinct addresses ever written.
    pub fn touched(&self) -> usize {
        self.cells.len()
    }

    /// All written cells, ordered by address.
    pub fn snapshot(&self) -> Vec<(Address, Cell)> {
        let mut cells: Vec<(Address, Cell)> = self
            .cells
            .iter()
            .map(|(&address, value)| (address, value.clone()))
            .collect();
        cells.sort_by_key(|(address, _)| *address);
        cells
    }
}
