//! WASM bindings for endless-hymn, powering the in-browser hymn page.
//!
//! The page owns the timing (it schedules lines with `setTimeout`), so this
//! side only composes: one call per cycle, returned as JSON.

use wasm_bindgen::prelude::*;

use endless_hymn::core::hymn::{CycleCounter, FAREWELL, HEADING};
use endless_hymn::core::random::StdRandom;
use endless_hymn::core::verse::Hymnal;
use endless_hymn::schema::lexicon::Lexicon;

// ---------------------------------------------------------------------------
// Embedded lexicon, the same file the CLI can load with --lexicon
// ---------------------------------------------------------------------------
const HYMN_LEXICON: &str = include_str!("../../lexicons/hymn.ron");

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct CycleOutput {
    cycle: u64,
    stanza: Vec<String>,
    chorus: String,
}

/// One browser-side hymn: a seeded hymnal and its cycle counter.
#[wasm_bindgen]
pub struct HymnDemo {
    hymnal: Hymnal<StdRandom>,
    counter: CycleCounter,
}

#[wasm_bindgen]
impl HymnDemo {
    /// Create a hymn whose every draw follows from `seed`.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<HymnDemo, JsError> {
        let lexicon = Lexicon::parse_ron(HYMN_LEXICON)
            .map_err(|e| JsError::new(&format!("Lexicon parse error: {e}")))?;
        let hymnal = Hymnal::new(lexicon, StdRandom::seeded(seed))
            .map_err(|e| JsError::new(&format!("Lexicon error: {e}")))?;
        Ok(HymnDemo {
            hymnal,
            counter: CycleCounter::new(),
        })
    }

    /// Compose the next cycle. Returns JSON:
    /// ```json
    /// { "cycle": 1, "stanza": ["…", "…", "…", "…"], "chorus": "…" }
    /// ```
    pub fn next_cycle(&mut self) -> Result<String, JsError> {
        let cycle = self.counter.advance();
        let stanza = self
            .hymnal
            .stanza(None)
            .map_err(|e| JsError::new(&format!("Stanza error: {e}")))?;
        let chorus = self
            .hymnal
            .chorus(cycle)
            .map_err(|e| JsError::new(&format!("Chorus error: {e}")))?;

        let output = CycleOutput {
            cycle,
            stanza: stanza.lines().iter().map(|l| l.to_string()).collect(),
            chorus: chorus.to_string(),
        };
        serde_json::to_string(&output)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// A single stanza as newline-separated text. Does not advance the cycle.
    pub fn stanza(&mut self) -> Result<String, JsError> {
        self.hymnal
            .stanza(None)
            .map(|s| s.to_string())
            .map_err(|e| JsError::new(&format!("Stanza error: {e}")))
    }

    /// The chorus line for an arbitrary cycle index.
    pub fn chorus(&mut self, cycle: u64) -> Result<String, JsError> {
        self.hymnal
            .chorus(cycle)
            .map(|c| c.to_string())
            .map_err(|e| JsError::new(&format!("Chorus error: {e}")))
    }

    /// Index of the last composed cycle.
    pub fn cycle(&self) -> u64 {
        self.counter.current()
    }

    /// Restart from a new seed and cycle 1.
    pub fn reset(&mut self, seed: u64) {
        self.hymnal.reseed(seed);
        self.counter = CycleCounter::new();
    }

    pub fn heading() -> String {
        HEADING.to_string()
    }

    pub fn farewell() -> String {
        FAREWELL.to_string()
    }
}
