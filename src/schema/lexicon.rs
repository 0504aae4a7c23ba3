/// Word pools for the two registers: the built-in lexicon, RON loading, and linting.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("lexicon pool '{0}' is empty")]
    EmptyPool(Pool),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

const ARCHAIC_NOUNS: &[&str] = &[
    "ἄστηρ", "χρόνος", "λόγος", "ψυχή", "πόλις", "ὕδωρ", "πνεῦμα", "νύξ", "θάλασσα", "νους",
];

const ARCHAIC_ADJECTIVES: &[&str] = &[
    "ἀρχαῖος",
    "βαθύς",
    "ἁγνός",
    "σκοτεινός",
    "ἀέναος",
    "ἄφθαρτος",
    "ἑρμηνευτικός",
    "μακραίωνος",
];

const ARCHAIC_VERBS: &[&str] = &[
    "ἀνέτειλε",
    "ἐπιφάνη",
    "ὑποκρύπτει",
    "ἀναβοά",
    "ὁδηγεῖ",
    "συλλαμβάνει",
    "ὑφαίνει",
];

const ALIEN_GLYPHS: &[char] = &['⟟', '⨳', '⩚', '⋮', 'ꖎ', '𐑂', '᚛', '᚜', '⚯', '✶'];

const ALIEN_SOUNDS: &[&str] = &["k'thox", "zrā", "q'ul", "ɸa-š", "x'rul", "ŋa'th", "s'vex"];

const ALIEN_TITLES: &[&str] = &["Σαυρ-Ὃ", "Χαρ–Μ'α", "Ωλ-Ξι", "Θ'υλ-πᾶ", "Νοξ·Ḡ"];

const REFRAINS: &[&str] = &[
    "ἔτι καὶ ἔτι — ⟟⟟⟟",
    "Ὡς ἀεί — 𐑂𐑂",
    "Ἀέναος ὕμνος· k'thox…",
    "Πάλιν· q'ul q'ul q'ul",
];

/// Pools with fewer entries than this get a lint warning.
const MIN_RECOMMENDED_ENTRIES: usize = 3;

/// One of the seven lexical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pool {
    Nouns,
    Adjectives,
    Verbs,
    Glyphs,
    Sounds,
    Titles,
    Refrains,
}

impl Pool {
    pub const ALL: [Pool; 7] = [
        Pool::Nouns,
        Pool::Adjectives,
        Pool::Verbs,
        Pool::Glyphs,
        Pool::Sounds,
        Pool::Titles,
        Pool::Refrains,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pool::Nouns => "archaic.nouns",
            Pool::Adjectives => "archaic.adjectives",
            Pool::Verbs => "archaic.verbs",
            Pool::Glyphs => "alien.glyphs",
            Pool::Sounds => "alien.sounds",
            Pool::Titles => "alien.titles",
            Pool::Refrains => "refrains",
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The archaic register: nouns, adjectives, and verbs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchaicRegister {
    pub nouns: Vec<String>,
    pub adjectives: Vec<String>,
    pub verbs: Vec<String>,
}

/// The alien register: glyph characters, phonetic fragments, and honorifics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlienRegister {
    pub glyphs: Vec<char>,
    pub sounds: Vec<String>,
    pub titles: Vec<String>,
}

/// The complete set of word pools a hymn draws from.
///
/// A lexicon is read-only once built. Emptiness is not rejected here; it
/// is checked by [`Lexicon::validate`] when a generator takes ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    archaic: ArchaicRegister,
    alien: AlienRegister,
    refrains: Vec<String>,
}

/// Findings from [`Lexicon::lint`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

fn owned(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|s| s.to_string()).collect()
}

impl Lexicon {
    pub fn new(archaic: ArchaicRegister, alien: AlienRegister, refrains: Vec<String>) -> Self {
        Self {
            archaic,
            alien,
            refrains,
        }
    }

    /// The built-in lexicon.
    pub fn hymn() -> Self {
        Self {
            archaic: ArchaicRegister {
                nouns: owned(ARCHAIC_NOUNS),
                adjectives: owned(ARCHAIC_ADJECTIVES),
                verbs: owned(ARCHAIC_VERBS),
            },
            alien: AlienRegister {
                glyphs: ALIEN_GLYPHS.to_vec(),
                sounds: owned(ALIEN_SOUNDS),
                titles: owned(ALIEN_TITLES),
            },
            refrains: owned(REFRAINS),
        }
    }

    /// Load a lexicon from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Lexicon, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        let lexicon = Self::parse_ron(&contents)?;
        debug!(path = %path.display(), "loaded lexicon");
        Ok(lexicon)
    }

    /// Parse a lexicon from a RON string.
    pub fn parse_ron(input: &str) -> Result<Lexicon, LexiconError> {
        Ok(ron::from_str(input)?)
    }

    pub fn archaic(&self) -> &ArchaicRegister {
        &self.archaic
    }

    pub fn alien(&self) -> &AlienRegister {
        &self.alien
    }

    pub fn refrains(&self) -> &[String] {
        &self.refrains
    }

    /// Number of entries in a pool.
    pub fn len(&self, pool: Pool) -> usize {
        match pool {
            Pool::Nouns => self.archaic.nouns.len(),
            Pool::Adjectives => self.archaic.adjectives.len(),
            Pool::Verbs => self.archaic.verbs.len(),
            Pool::Glyphs => self.alien.glyphs.len(),
            Pool::Sounds => self.alien.sounds.len(),
            Pool::Titles => self.alien.titles.len(),
            Pool::Refrains => self.refrains.len(),
        }
    }

    /// Check that every pool has at least one entry.
    pub fn validate(&self) -> Result<(), LexiconError> {
        match Pool::ALL.into_iter().find(|&pool| self.len(pool) == 0) {
            Some(pool) => Err(LexiconError::EmptyPool(pool)),
            None => Ok(()),
        }
    }

    /// Report empty pools and blank entries as errors, and thin pools and
    /// duplicate entries as warnings.
    pub fn lint(&self) -> LintReport {
        let mut report = LintReport::default();

        for pool in Pool::ALL {
            let entries = self.entries(pool);

            if entries.is_empty() {
                report.errors.push(format!("Pool '{}' is empty", pool));
                continue;
            }
            if entries.len() < MIN_RECOMMENDED_ENTRIES {
                report.warnings.push(format!(
                    "Pool '{}' has only {} entries (minimum {} recommended)",
                    pool,
                    entries.len(),
                    MIN_RECOMMENDED_ENTRIES
                ));
            }

            let mut seen = FxHashSet::default();
            for (i, entry) in entries.iter().enumerate() {
                if entry.trim().is_empty() {
                    report
                        .errors
                        .push(format!("Pool '{}' entry {} is blank", pool, i));
                } else if !seen.insert(entry.as_ref()) {
                    report
                        .warnings
                        .push(format!("Pool '{}' repeats entry '{}'", pool, entry));
                }
            }
        }

        report
    }

    /// A pool's entries as text. Only glyphs are converted.
    fn entries(&self, pool: Pool) -> Vec<Cow<'_, str>> {
        match pool {
            Pool::Nouns => borrowed(&self.archaic.nouns),
            Pool::Adjectives => borrowed(&self.archaic.adjectives),
            Pool::Verbs => borrowed(&self.archaic.verbs),
            Pool::Glyphs => self
                .alien
                .glyphs
                .iter()
                .map(|g| Cow::Owned(g.to_string()))
                .collect(),
            Pool::Sounds => borrowed(&self.alien.sounds),
            Pool::Titles => borrowed(&self.alien.titles),
            Pool::Refrains => borrowed(&self.refrains),
        }
    }
}

fn borrowed(pool: &[String]) -> Vec<Cow<'_, str>> {
    pool.iter().map(|s| Cow::Borrowed(s.as_str())).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::hymn()
    }
}
