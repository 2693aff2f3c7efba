//! Clock implementations

use chrono::{Local, NaiveDate};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use crate::traits::Clock;

/// Reads the local system date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

/// Hands out a scripted list of dates, one per call
///
/// Once the script runs out the last date keeps being returned. Useful for
/// replaying a dated scenario deterministically.
#[derive(Debug)]
pub struct SequenceClock {
    state: Mutex<(VecDeque<NaiveDate>, NaiveDate)>,
}

impl SequenceClock {
    /// Create a clock from `dates`; `fallback` is used if `dates` is empty
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>, fallback: NaiveDate) -> Self {
        Self {
            state: Mutex::new((dates.into_iter().collect(), fallback)),
        }
    }
}

impl Clock for SequenceClock {
    fn today(&self) -> NaiveDate {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let (remaining, last) = &mut *state;
        if let Some(next) = remaining.pop_front() {
            *last = next;
        }
        *last
    }
}
