//! Looping character typewriter for placeholder and error lines

use std::time::{Duration, Instant};

/// Hold time once a line is fully typed
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Typing,
    Holding,
    Deleting,
}

/// Types each line character by character, holds it, deletes it, then
/// moves to the next line, forever.
#[derive(Debug, Clone)]
pub struct CyclingTypewriter {
    lines: Vec<String>,
    line: usize,
    visible_chars: usize,
    stage: Stage,
    type_delay: Duration,
    delete_delay: Duration,
    pause: Duration,
    next_step: Option<Instant>,
}

impl CyclingTypewriter {
    /// Create a typewriter over `lines` typing one character per `type_delay`.
    ///
    /// Deletion runs at twice the typing speed.
    pub fn new<I, S>(lines: I, type_delay: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            line: 0,
            visible_chars: 0,
            stage: Stage::Typing,
            type_delay,
            delete_delay: type_delay / 2,
            pause: DEFAULT_PAUSE,
            next_step: None,
        }
    }

    /// Override the hold time between typing and deleting
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Advance one step if due. Returns true when the visible text changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.lines.is_empty() {
            return false;
        }

        let due = *self.next_step.get_or_insert(now);
        if now < due {
            return false;
        }

        let line_len = self.lines[self.line].chars().count();
        let (changed, delay) = match self.stage {
            Stage::Typing if self.visible_chars < line_len => {
                self.visible_chars += 1;
                if self.visible_chars == line_len {
                    self.stage = Stage::Holding;
                    (true, self.pause)
                } else {
                    (true, self.type_delay)
                }
            }
            Stage::Typing | Stage::Holding => {
                self.stage = Stage::Deleting;
                (false, Duration::ZERO)
            }
            Stage::Deleting if self.visible_chars > 0 => {
                self.visible_chars -= 1;
                (true, self.delete_delay)
            }
            Stage::Deleting => {
                self.line = (self.line + 1) % self.lines.len();
                self.stage = Stage::Typing;
                (false, self.type_delay)
            }
        };

        self.next_step = Some(now + delay);
        changed
    }

    /// Current prefix of the active line
    pub fn visible(&self) -> &str {
        let Some(line) = self.lines.get(self.line) else {
            return "";
        };
        let end = line
            .char_indices()
            .nth(self.visible_chars)
            .map(|(index, _)| index)
            .unwrap_or(line.len());
        &line[..end]
    }

    /// Index of the line being typed or deleted
    pub fn line_index(&self) -> usize {
        self.line
    }

    /// Time left until the next step, `None` without lines
    pub fn time_until_next_step(&self, now: Instant) -> Option<Duration> {
        if self.lines.is_empty() {
            return None;
        }
        Some(
            self.next_step
                .map(|due| due.saturating_duration_since(now))
                .unwrap_or(Duration::ZERO),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(40);

    /// Poll at every deadline until `steps` polls have run
    fn run(tw: &mut CyclingTypewriter, now: &mut Instant, steps: usize) {
        for _ in 0..steps {
            tw.poll(*now);
            *now += tw.time_until_next_step(*now).unwrap_or_default();
        }
    }

    #[test]
    fn test_types_one_char_per_step() {
        let mut now = Instant::now();
        let mut tw = CyclingTypewriter::new(["abc"], DELAY);
        assert_eq!(tw.visible(), "");

        assert!(tw.poll(now));
        assert_eq!(tw.visible(), "a");

        // Not yet due
        assert!(!tw.poll(now + Duration::from_millis(10)));
        assert_eq!(tw.visible(), "a");

        now += DELAY;
        assert!(tw.poll(now));
        assert_eq!(tw.visible(), "ab");
    }

    #[test]
    fn test_holds_then_deletes() {
        let mut now = Instant::now();
        let mut tw = CyclingTypewriter::new(["ab"], DELAY).with_pause(Duration::from_millis(100));

        run(&mut tw, &mut now, 2);
        assert_eq!(tw.visible(), "ab");
        assert_eq!(tw.time_until_next_step(now), Some(Duration::ZERO));

        // Hold ends, deletion starts
        run(&mut tw, &mut now, 2);
        assert_eq!(tw.visible(), "a");
    }

    #[test]
    fn test_cycles_to_next_line_and_wraps() {
        let mut now = Instant::now();
        let mut tw = CyclingTypewriter::new(["ab", "cd"], DELAY);

        // type 2, hold, delete 2, advance
        run(&mut tw, &mut now, 6);
        assert_eq!(tw.line_index(), 1);
        assert_eq!(tw.visible(), "");

        run(&mut tw, &mut now, 1);
        assert_eq!(tw.visible(), "c");

        run(&mut tw, &mut now, 6);
        assert_eq!(tw.line_index(), 0);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut now = Instant::now();
        let mut tw = CyclingTypewriter::new(["héllo"], DELAY);
        run(&mut tw, &mut now, 2);
        assert_eq!(tw.visible(), "hé");
    }

    #[test]
    fn test_no_lines() {
        let mut tw = CyclingTypewriter::new(Vec::<String>::new(), DELAY);
        assert!(!tw.poll(Instant::now()));
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.time_until_next_step(Instant::now()), None);
    }
}
