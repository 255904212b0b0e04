//! Per-room interview timer snapshot.
//!
//! The server never counts down. It keeps the last snapshot pushed by a
//! client so that late joiners can seed their local countdown from it.

/// Timer state of a room. Durations are in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    /// No timer has been started in this room yet.
    #[default]
    Unset,
    /// Reset to a duration, not counting down.
    Ready { duration: u64 },
    Running { duration: u64, remaining_time: u64 },
    Paused { duration: u64, remaining_time: u64 },
}

/// A client-issued timer control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTransition {
    Start { duration: u64 },
    Pause { remaining_time: u64 },
    Resume { remaining_time: u64 },
    Reset { duration: u64 },
}

/// The part of the timer a late joiner needs to resume its local countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub duration: u64,
    pub remaining_time: u64,
    pub running: bool,
}

impl TimerState {
    /// Apply a transition and return the resulting state.
    ///
    /// Every transition is accepted from every state: clients are the
    /// authority and the server only records what they report.
    pub fn apply(self, transition: TimerTransition) -> TimerState {
        match transition {
            TimerTransition::Start { duration } => TimerState::Running {
                duration,
                remaining_time: duration,
            },
            TimerTransition::Pause { remaining_time } => TimerState::Paused {
                duration: self.duration().unwrap_or(remaining_time),
                remaining_time,
            },
            TimerTransition::Resume { remaining_time } => TimerState::Running {
                duration: self.duration().unwrap_or(remaining_time),
                remaining_time,
            },
            TimerTransition::Reset { duration } => TimerState::Ready { duration },
        }
    }

    pub fn duration(&self) -> Option<u64> {
        match self {
            TimerState::Unset => None,
            TimerState::Ready { duration }
            | TimerState::Running { duration, .. }
            | TimerState::Paused { duration, .. } => Some(*duration),
        }
    }

    pub fn remaining_time(&self) -> Option<u64> {
        match self {
            TimerState::Unset => None,
            TimerState::Ready { duration } => Some(*duration),
            TimerState::Running { remaining_time, .. }
            | TimerState::Paused { remaining_time, .. } => Some(*remaining_time),
        }
    }

    pub fn snapshot(&self) -> Option<TimerSnapshot> {
        let duration = self.duration()?;
        let remaining_time = self.remaining_time()?;
        Some(TimerSnapshot {
            duration,
            remaining_time,
            running: matches!(self, TimerState::Running { .. }),
        })
    }
}
