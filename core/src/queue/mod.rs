//! Bounded ring buffers that maintain a running aggregate.

mod reducer;
mod ring;

pub use reducer::{Additive, FnReducer, Reducer, Xor};
pub use ring::{FloatQueue, RingAccumulator};
