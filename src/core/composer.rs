/// Token composition: uniform picks, noun endings, glyph clusters, and hero names.

use thiserror::Error;

use crate::core::random::RandomSource;
use crate::schema::lexicon::AlienRegister;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("cannot choose from an empty pool")]
    EmptyPool,
}

/// Grammatical-looking endings appended by [`decorate_with_ending`].
pub const ENDINGS: &[&str] = &["ος", "ης", "ον", "ᾱ", "ᾶ", "ας"];

/// Joins a hero's title to their sound.
pub const HERO_SEPARATOR: char = '·';

/// Pick one entry uniformly.
pub fn choose_one<'p, T, R>(pool: &'p [T], rng: &mut R) -> Result<&'p T, ComposeError>
where
    R: RandomSource + ?Sized,
{
    if pool.is_empty() {
        return Err(ComposeError::EmptyPool);
    }
    Ok(&pool[rng.below(pool.len())])
}

/// Append one random ending. The token itself is never inspected.
pub fn decorate_with_ending<R: RandomSource + ?Sized>(token: &str, rng: &mut R) -> String {
    let ending = ENDINGS[rng.below(ENDINGS.len())];
    format!("{}{}", token, ending)
}

/// Concatenate `count` independently drawn glyphs. Zero draws nothing.
pub fn glyph_cluster<R: RandomSource + ?Sized>(
    count: usize,
    glyphs: &[char],
    rng: &mut R,
) -> Result<String, ComposeError> {
    (0..count)
        .map(|_| choose_one(glyphs, &mut *rng).copied())
        .collect()
}

/// Build a compound name: a title and a sound joined by [`HERO_SEPARATOR`].
///
/// The sound is drawn before the title.
pub fn compose_hero<R: RandomSource + ?Sized>(
    alien: &AlienRegister,
    rng: &mut R,
) -> Result<String, ComposeError> {
    let sound = choose_one(&alien.sounds, rng)?;
    let title = choose_one(&alien.titles, rng)?;
    Ok(format!("{}{}{}", title, HERO_SEPARATOR, sound))
}
