pub mod lexicon;
pub mod verse;
