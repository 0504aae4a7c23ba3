pub mod composer;
pub mod display;
pub mod hymn;
pub mod random;
pub mod verse;
