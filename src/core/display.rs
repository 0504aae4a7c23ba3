/// Display driver: paced line-by-line output with cooperative cancellation.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Whether the caller should keep going after a suspension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Shared cancellation token. Raised once by the interrupt handler and
/// observed at every pause.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Where hymn lines go: write a line, optionally wait.
pub trait LineSink {
    /// Write one line and flush it.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Suspend for `duration`. Returns [`Flow::Stop`] if interrupted.
    fn pause(&mut self, duration: Duration) -> Flow;
}

/// Write `text` one line at a time, pausing `delay` after each line.
///
/// A zero delay never pauses. Returns early with [`Flow::Stop`] as soon as
/// a pause is interrupted; the remaining lines are not written.
pub fn display<S: LineSink + ?Sized>(
    sink: &mut S,
    text: &str,
    delay: Duration,
) -> io::Result<Flow> {
    for line in text.lines() {
        sink.write_line(line)?;
        if !delay.is_zero() && sink.pause(delay) == Flow::Stop {
            return Ok(Flow::Stop);
        }
    }
    Ok(Flow::Continue)
}

/// Longest single sleep inside [`ConsoleSink::pause`].
const PAUSE_SLICE: Duration = Duration::from_millis(50);

/// Sink writing to a real stream, typically stdout.
pub struct ConsoleSink<W: Write> {
    out: W,
    stop: StopFlag,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, stop: StopFlag) -> Self {
        Self { out, stop }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LineSink for ConsoleSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }

    fn pause(&mut self, duration: Duration) -> Flow {
        let deadline = Instant::now() + duration;
        loop {
            if self.stop.is_raised() {
                return Flow::Stop;
            }
            let now = Instant::now();
            if now >= deadline {
                return Flow::Continue;
            }
            std::thread::sleep(PAUSE_SLICE.min(deadline - now));
        }
    }
}

/// In-memory sink that never sleeps. Records every line and pause, and
/// can simulate an interrupt arriving during a given pause.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub lines: Vec<String>,
    pub pauses: Vec<Duration>,
    interrupt_at: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report an interrupt on the `n`th pause (1-based) and every one after.
    pub fn interrupt_on_pause(n: usize) -> Self {
        Self {
            interrupt_at: Some(n),
            ..Self::default()
        }
    }
}

impl LineSink for RecordingSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> Flow {
        self.pauses.push(duration);
        match self.interrupt_at {
            Some(n) if self.pauses.len() >= n => Flow::Stop,
            _ => Flow::Continue,
        }
    }
}
