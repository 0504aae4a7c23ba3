use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed opening of every chorus line.
pub const CHORUS_LEAD_IN: &str = "Χορός τῶν ὕλων —";

/// One generated four-line unit of the hymn.
///
/// Lines are stored in display order: invocation, action, enigmatic
/// clause, refrain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stanza {
    pub invocation: String,
    pub action: String,
    pub clause: String,
    pub refrain: String,
}

impl Stanza {
    pub fn lines(&self) -> [&str; 4] {
        [&self.invocation, &self.action, &self.clause, &self.refrain]
    }
}

impl fmt::Display for Stanza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// A single chorus line for one cycle of the hymn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chorus {
    pub cycle: u64,
    pub glyphs: String,
    pub chant: String,
}

impl fmt::Display for Chorus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", CHORUS_LEAD_IN, self.glyphs, self.chant)
    }
}
