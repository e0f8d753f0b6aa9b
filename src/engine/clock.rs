use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};
use std::cell::Cell;
use std::fmt;

/// Local wall-clock instant at which a transaction was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub const fn new(at: NaiveDateTime) -> Self {
        Timestamp(at)
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d/%m/%Y %H:%M:%S"))
    }
}

/// Source of the current time for accounts.
pub trait Clock: fmt::Debug {
    fn now(&self) -> Timestamp;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp(Local::now().naive_local())
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    current: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        FixedClock {
            current: Cell::new(at),
        }
    }

    pub fn advance(&self, by: TimeDelta) {
        self.current.set(self.current.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.current.get())
    }
}
