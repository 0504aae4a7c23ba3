/// Stanza and chorus generation.

use tracing::trace;

use crate::core::composer::{
    choose_one, compose_hero, decorate_with_ending, glyph_cluster, ComposeError,
};
use crate::core::random::{RandomSource, StdRandom};
use crate::schema::lexicon::{Lexicon, LexiconError};
use crate::schema::verse::{Chorus, Stanza};

/// Glyph clusters inside a stanza are between these lengths, inclusive.
const STANZA_GLYPHS_MIN: usize = 1;
const STANZA_GLYPHS_MAX: usize = 3;

/// Chorus clusters are `CHORUS_GLYPHS_BASE + cycle % CHORUS_GLYPHS_PERIOD` long.
const CHORUS_GLYPHS_BASE: u64 = 2;
const CHORUS_GLYPHS_PERIOD: u64 = 3;

/// Generate one stanza.
///
/// A `seed` reseeds `rng` itself before any draw, so every later draw from
/// the same source is reproducible too. Pass a fresh source to keep the
/// seed local to one call.
pub fn generate_stanza<R: RandomSource + ?Sized>(
    lexicon: &Lexicon,
    rng: &mut R,
    seed: Option<u64>,
) -> Result<Stanza, ComposeError> {
    if let Some(seed) = seed {
        trace!(seed, "reseeding random source");
        rng.reseed(seed);
    }

    let archaic = lexicon.archaic();
    let alien = lexicon.alien();

    let hero = compose_hero(alien, rng)?;
    let noun = choose_one(&archaic.nouns, rng)?;
    let verb = choose_one(&archaic.verbs, rng)?;
    let adjective = choose_one(&archaic.adjectives, rng)?;
    let count = rng.between(STANZA_GLYPHS_MIN, STANZA_GLYPHS_MAX);
    let glyphs = glyph_cluster(count, &alien.glyphs, rng)?;
    let breath = choose_one(&alien.sounds, rng)?;
    let refrain = choose_one(lexicon.refrains(), rng)?;

    let invocation = format!(
        "Ὦ {}, ὁ τῆς {} φύλαξ {}",
        hero,
        decorate_with_ending(noun, rng),
        glyphs
    );
    let action = format!("— {} ἐπὶ τὸν {}· {}·{}", verb, adjective, breath, glyphs);
    let clause = format!(
        "καὶ ἔσχατον σημεῖον: «{}{}»",
        glyphs,
        choose_one(&archaic.nouns, rng)?
    );

    Ok(Stanza {
        invocation,
        action,
        clause,
        refrain: refrain.clone(),
    })
}

/// Number of glyphs in the chorus of a given cycle.
pub fn chorus_glyph_count(cycle: u64) -> usize {
    (CHORUS_GLYPHS_BASE + cycle % CHORUS_GLYPHS_PERIOD) as usize
}

/// Generate the chorus for `cycle`. Draws fresh glyphs on every call.
pub fn generate_chorus<R: RandomSource + ?Sized>(
    cycle: u64,
    lexicon: &Lexicon,
    rng: &mut R,
) -> Result<Chorus, ComposeError> {
    let alien = lexicon.alien();
    let glyphs = glyph_cluster(chorus_glyph_count(cycle), &alien.glyphs, rng)?;
    let chant = choose_one(&alien.sounds, rng)?.clone();
    Ok(Chorus {
        cycle,
        glyphs,
        chant,
    })
}

/// A validated lexicon paired with the random source that drives it.
pub struct Hymnal<R: RandomSource = StdRandom> {
    lexicon: Lexicon,
    rng: R,
}

impl<R: RandomSource> Hymnal<R> {
    /// Fails with [`LexiconError::EmptyPool`] if any pool is empty.
    pub fn new(lexicon: Lexicon, rng: R) -> Result<Self, LexiconError> {
        lexicon.validate()?;
        Ok(Self { lexicon, rng })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    pub fn stanza(&mut self, seed: Option<u64>) -> Result<Stanza, ComposeError> {
        generate_stanza(&self.lexicon, &mut self.rng, seed)
    }

    pub fn chorus(&mut self, cycle: u64) -> Result<Chorus, ComposeError> {
        generate_chorus(cycle, &self.lexicon, &mut self.rng)
    }
}
