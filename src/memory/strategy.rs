//! Composition strategies.

use std::fmt;

/// How a size class is laid over a buffer of `count` bytes.
///
/// `size` below is the engine's size class, the number of bytes one
/// [`block`](super::Bcmp::block) call compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Exactly `size` bytes from offset 0.
    Block,
    /// The last `size` bytes, `[count - size, count)`.
    Tail,
    /// The first and the last `size` bytes, overlapping when `count < 2 * size`.
    HeadTail,
    /// Consecutive blocks from offset 0, then the tail.
    LoopAndTail,
}

impl Strategy {
    /// All strategies, in the order above.
    pub const ALL: [Strategy; 4] = [
        Strategy::Block,
        Strategy::Tail,
        Strategy::HeadTail,
        Strategy::LoopAndTail,
    ];

    /// Whether this strategy compares exactly `[0, count)` with `size`-byte
    /// reads: every byte is covered and no read leaves the buffer.
    pub const fn supports(self, size: usize, count: usize) -> bool {
        if size == 0 {
            return false;
        }
        match self {
            Strategy::Block => count == size,
            // A tail alone only covers the buffer when it is the whole buffer
            Strategy::Tail => count == size,
            Strategy::HeadTail => size <= count && count <= 2 * size,
            Strategy::LoopAndTail => count >= size,
        }
    }

    /// Snake-case name, as printed.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Block => "block",
            Strategy::Tail => "tail",
            Strategy::HeadTail => "head_tail",
            Strategy::LoopAndTail => "loop_and_tail",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
