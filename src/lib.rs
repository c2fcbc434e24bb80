#[macro_use] extern crate log;

pub mod heap;
pub mod heapsort;

pub use crate::heap::{Heap, HeapOrder, KeyOrder, NaturalOrder};

use quick_error::quick_error;

/// Which end of the ordering sits at the root of a heap.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Min,
    Max,
}

impl Default for Direction {
    fn default() -> Direction {
        Direction::Min
    }
}

quick_error! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Error {
        Empty {
            display("Empty heap")
        }
    }
}
