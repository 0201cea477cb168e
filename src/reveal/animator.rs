//! Segment-by-segment reveal of a completed response

use crate::reveal::segment::segments;
use std::time::{Duration, Instant};

/// Lifecycle of a reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Created, nothing shown yet
    NotStarted,
    /// Segments are being appended
    Running,
    /// Every segment is displayed
    Complete,
}

impl std::fmt::Display for RevealPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RevealPhase::NotStarted => write!(f, "NotStarted"),
            RevealPhase::Running => write!(f, "Running"),
            RevealPhase::Complete => write!(f, "Complete"),
        }
    }
}

/// Typewriter reveal of one response text.
///
/// The animator appends one segment per tick. Ticks are one-shot: the next
/// deadline is set from the moment the previous segment was appended, so a
/// late frame delays the rest of the sequence instead of bursting several
/// segments at once.
///
/// `displayed` always equals the concatenation of `segments[..cursor]`.
///
/// # Example
/// ```
/// use genai::reveal::RevealAnimator;
///
/// let mut animator = RevealAnimator::new("Hello world", 1, std::time::Duration::from_millis(50));
/// while !animator.is_complete() {
///     animator.tick();
/// }
/// assert_eq!(animator.displayed(), "Hello world");
/// ```
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    generation: u64,
    source: String,
    segments: Vec<String>,
    cursor: usize,
    displayed: String,
    interval: Duration,
    next_tick: Option<Instant>,
    phase: RevealPhase,
}

impl RevealAnimator {
    /// Create an animator for `source`, tagged with the submission generation
    /// it belongs to.
    ///
    /// An empty source is complete right away.
    pub fn new(source: impl Into<String>, generation: u64, interval: Duration) -> Self {
        let source = source.into();
        let segments: Vec<String> = segments(&source).into_iter().map(str::to_string).collect();
        let phase = if segments.is_empty() {
            RevealPhase::Complete
        } else {
            RevealPhase::NotStarted
        };

        Self {
            generation,
            displayed: String::with_capacity(source.len()),
            source,
            segments,
            cursor: 0,
            interval,
            next_tick: None,
            phase,
        }
    }

    /// Begin the sequence; the first segment is due immediately
    pub fn start(&mut self, now: Instant) {
        if self.phase == RevealPhase::NotStarted {
            self.phase = RevealPhase::Running;
            self.next_tick = Some(now);
        }
    }

    /// Append the next segment regardless of timing.
    ///
    /// Returns the appended segment, or `None` once complete.
    pub fn tick(&mut self) -> Option<&str> {
        if self.phase == RevealPhase::Complete {
            return None;
        }
        self.phase = RevealPhase::Running;

        let index = self.cursor;
        self.displayed.push_str(&self.segments[index]);
        self.cursor += 1;

        if self.cursor == self.segments.len() {
            self.phase = RevealPhase::Complete;
            self.next_tick = None;
        }

        Some(&self.segments[index])
    }

    /// Advance by at most one segment if the current tick is due.
    ///
    /// Starts the sequence on first use. Returns true when a segment was
    /// appended.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.start(now);

        match self.next_tick {
            Some(due) if now >= due => {
                self.tick();
                if !self.is_complete() {
                    self.next_tick = Some(now + self.interval);
                }
                true
            }
            _ => false,
        }
    }

    /// Time left until the next segment is due, `None` once complete
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            RevealPhase::Complete => None,
            RevealPhase::NotStarted => Some(Duration::ZERO),
            RevealPhase::Running => Some(
                self.next_tick
                    .map(|due| due.saturating_duration_since(now))
                    .unwrap_or(Duration::ZERO),
            ),
        }
    }

    /// Text revealed so far
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Full text being revealed
    pub fn source(&self) -> &str {
        &self.source
    }

    /// All segments of the source text
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments displayed
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Submission generation this reveal belongs to
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current phase
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Check if every segment is displayed
    pub fn is_complete(&self) -> bool {
        self.phase == RevealPhase::Complete
    }

    /// Fraction of segments displayed (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.segments.is_empty() {
            return 1.0;
        }
        self.cursor as f32 / self.segments.len() as f32
    }
}
