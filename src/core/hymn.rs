/// The hymn loop: heading, endless stanza/chorus cycles, farewell.
///
/// Built via `Hymn::builder()`. Runs as a three-state machine
/// (`Starting -> Running -> Stopped`) against any [`LineSink`]; the only way
/// out of `Running` is an interrupt reported by a sink pause.

use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::composer::ComposeError;
use crate::core::display::{display, Flow, LineSink};
use crate::core::random::{RandomSource, StdRandom};
use crate::core::verse::Hymnal;
use crate::schema::lexicon::{Lexicon, LexiconError};

#[derive(Debug, Error)]
pub enum HymnError {
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
    #[error("composition error: {0}")]
    Compose(#[from] ComposeError),
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

pub const HEADING: &str = "ὝΜΝΟΣ — The Endless Hymn (press Ctrl+C to exit)";
pub const FAREWELL: &str = "Ἀνάπαυλα — the hymn pauses. Farewell, wanderer.";

const SEPARATOR_CHAR: char = '─';
const SEPARATOR_WIDTH: usize = 36;

/// Lifecycle of a hymn run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HymnState {
    Starting,
    Running,
    Stopped,
}

/// Strictly increasing cycle index. The first cycle is 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleCounter(u64);

impl CycleCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next cycle and return its index.
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Index of the last started cycle, 0 before the first.
    pub fn current(&self) -> u64 {
        self.0
    }
}

/// Timing of a hymn run.
#[derive(Debug, Clone, PartialEq)]
pub struct HymnConfig {
    /// Pause after the heading.
    pub heading_pause: Duration,
    /// Pause after every stanza and chorus line.
    pub line_delay: Duration,
    /// Bounds of the uniformly drawn pause between cycles.
    pub cycle_pause: (Duration, Duration),
}

impl Default for HymnConfig {
    fn default() -> Self {
        Self {
            heading_pause: Duration::from_millis(800),
            line_delay: Duration::from_millis(500),
            cycle_pause: (Duration::from_millis(800), Duration::from_millis(2200)),
        }
    }
}

/// The loop controller.
pub struct Hymn<R: RandomSource = StdRandom> {
    hymnal: Hymnal<R>,
    config: HymnConfig,
    counter: CycleCounter,
    state: HymnState,
}

/// Builder for constructing a `Hymn`.
pub struct HymnBuilder {
    lexicon: Option<Lexicon>,
    seed: Option<u64>,
    config: HymnConfig,
}

impl Hymn {
    pub fn builder() -> HymnBuilder {
        HymnBuilder {
            lexicon: None,
            seed: None,
            config: HymnConfig::default(),
        }
    }
}

impl HymnBuilder {
    /// Word pools to draw from. Defaults to [`Lexicon::hymn`].
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Reseed the random source once, before the first draw.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn line_delay(mut self, delay: Duration) -> Self {
        self.config.line_delay = delay;
        self
    }

    pub fn heading_pause(mut self, pause: Duration) -> Self {
        self.config.heading_pause = pause;
        self
    }

    /// Bounds of the pause between cycles. Reversed bounds are swapped.
    pub fn cycle_pause(mut self, low: Duration, high: Duration) -> Self {
        self.config.cycle_pause = (low.min(high), low.max(high));
        self
    }

    /// Build with an entropy-seeded `StdRandom`.
    pub fn build(self) -> Result<Hymn<StdRandom>, HymnError> {
        self.build_with(StdRandom::from_entropy())
    }

    /// Build around a caller-supplied random source.
    pub fn build_with<R: RandomSource>(self, mut rng: R) -> Result<Hymn<R>, HymnError> {
        if let Some(seed) = self.seed {
            rng.reseed(seed);
        }
        let lexicon = self.lexicon.unwrap_or_default();
        let hymnal = Hymnal::new(lexicon, rng)?;
        Ok(Hymn {
            hymnal,
            config: self.config,
            counter: CycleCounter::new(),
            state: HymnState::Starting,
        })
    }
}

impl<R: RandomSource> Hymn<R> {
    pub fn state(&self) -> HymnState {
        self.state
    }

    /// Index of the last started cycle.
    pub fn cycle(&self) -> u64 {
        self.counter.current()
    }

    pub fn config(&self) -> &HymnConfig {
        &self.config
    }

    /// Run until a sink pause reports an interrupt, then say farewell.
    ///
    /// Returns immediately if the hymn has already stopped.
    pub fn run<S: LineSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), HymnError> {
        if self.state == HymnState::Stopped {
            return Ok(());
        }

        info!(
            line_delay_ms = self.config.line_delay.as_millis() as u64,
            "hymn starting"
        );
        if self.start(sink)? == Flow::Continue {
            self.state = HymnState::Running;
            while self.cycle_once(sink)? == Flow::Continue {}
        }
        self.stop(sink)
    }

    fn start<S: LineSink + ?Sized>(&mut self, sink: &mut S) -> Result<Flow, HymnError> {
        sink.write_line(HEADING)?;
        sink.write_line("")?;
        Ok(sink.pause(self.config.heading_pause))
    }

    /// One full cycle: stanza, separator, chorus, spacing, rest.
    fn cycle_once<S: LineSink + ?Sized>(&mut self, sink: &mut S) -> Result<Flow, HymnError> {
        let cycle = self.counter.advance();
        let stanza = self.hymnal.stanza(None)?;
        let chorus = self.hymnal.chorus(cycle)?;
        debug!(cycle, chorus_glyphs = chorus.glyphs.chars().count(), "cycle composed");

        let delay = self.config.line_delay;
        if display(sink, &stanza.to_string(), delay)? == Flow::Stop {
            return Ok(Flow::Stop);
        }
        let rule: String = std::iter::repeat(SEPARATOR_CHAR)
            .take(SEPARATOR_WIDTH)
            .collect();
        for line in ["", rule.as_str(), ""] {
            sink.write_line(line)?;
        }
        if display(sink, &chorus.to_string(), delay)? == Flow::Stop {
            return Ok(Flow::Stop);
        }
        sink.write_line("")?;
        sink.write_line("")?;

        let rest = self.draw_cycle_pause();
        debug!(cycle, rest_ms = rest.as_millis() as u64, "resting");
        Ok(sink.pause(rest))
    }

    fn draw_cycle_pause(&mut self) -> Duration {
        let (low, high) = self.config.cycle_pause;
        let fraction = self.hymnal.rng_mut().unit();
        low + (high - low).mul_f64(fraction)
    }

    fn stop<S: LineSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), HymnError> {
        self.state = HymnState::Stopped;
        sink.write_line("")?;
        sink.write_line("")?;
        sink.write_line(FAREWELL)?;
        info!(cycles = self.counter.current(), "hymn stopped");
        Ok(())
    }
}
