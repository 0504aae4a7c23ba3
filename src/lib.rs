//! Endless Hymn: a perpetual chant of stanzas in archaic and alien registers.
//!
//! Composes four-line stanzas and single-line choruses from fixed word
//! pools, and drives an endless paced display loop that stops cleanly on
//! interrupt.

pub mod core;
pub mod schema;
