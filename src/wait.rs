//! Polling a model until its status satisfies a condition.
//!
//! ```no_run
//! use mooring::juju::Juju;
//! use mooring::predicates::{Apps, all_active, any_error};
//! use mooring::wait::Waiter;
//!
//! let juju = Juju::new().model("dev");
//! let status = Waiter::new(&juju)
//!     .error(|s| any_error(s, &Apps::All))
//!     .until(|s| all_active(s, &Apps::only(["mysql"])))?;
//! # Ok::<(), mooring::wait::WaitError>(())
//! ```

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::juju::JujuError;
use crate::model::Status;

/// Where status snapshots come from.
pub trait StatusSource {
    fn fetch_status(&self) -> Result<Status, JujuError>;
}

/// Monotonic time, injectable so waits can be tested without sleeping.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Timing knobs for [`Waiter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Pause between fetches.
    pub delay: Duration,

    /// Give up once this much time has passed since the wait began.
    pub timeout: Duration,

    /// Consecutive ready snapshots required before returning.
    /// Zero is treated as one.
    pub successes: u32,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
            timeout: Duration::from_secs(180),
            successes: 3,
        }
    }
}

/// Why a wait ended without the condition being met.
#[derive(Debug, thiserror::Error)]
pub enum WaitError {
    #[error("error condition met")]
    Errored { status: Box<Status> },

    #[error("timed out after {}s", .timeout.as_secs_f64())]
    TimedOut {
        timeout: Duration,
        /// The last snapshot fetched before the deadline, if any.
        status: Option<Box<Status>>,
    },

    #[error(transparent)]
    Fetch(#[from] JujuError),
}

impl WaitError {
    /// The last snapshot seen before the wait failed.
    pub fn status(&self) -> Option<&Status> {
        match self {
            Self::Errored { status } => Some(&**status),
            Self::TimedOut { status, .. } => status.as_deref(),
            Self::Fetch(_) => None,
        }
    }
}

type Predicate<'a> = Box<dyn Fn(&Status) -> bool + 'a>;
type ChangeHook<'a> = Box<dyn FnMut(&Status) + 'a>;

/// A configured wait on a [`StatusSource`].
///
/// Finish with [`Waiter::until`], which polls until the ready condition has
/// held for `successes` fetches in a row, the error condition holds once,
/// or the timeout passes.
pub struct Waiter<'a, S: ?Sized> {
    source: &'a S,
    error: Option<Predicate<'a>>,
    on_change: Option<ChangeHook<'a>>,
    options: WaitOptions,
    clock: &'a dyn Clock,
}

impl<'a, S: StatusSource + ?Sized> Waiter<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            error: None,
            on_change: None,
            options: WaitOptions::default(),
            clock: &SystemClock,
        }
    }

    /// Fail as soon as a fetched snapshot satisfies `error`.
    #[must_use]
    pub fn error(mut self, error: impl Fn(&Status) -> bool + 'a) -> Self {
        self.error = Some(Box::new(error));
        self
    }

    #[must_use]
    pub fn options(mut self, options: WaitOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Called with each snapshot that differs from the one before it.
    #[must_use]
    pub fn on_change(mut self, hook: impl FnMut(&Status) + 'a) -> Self {
        self.on_change = Some(Box::new(hook));
        self
    }

    /// Poll until `ready` holds for enough consecutive snapshots.
    pub fn until(mut self, ready: impl Fn(&Status) -> bool) -> Result<Status, WaitError> {
        let WaitOptions {
            delay,
            timeout,
            successes,
        } = self.options;
        let successes = successes.max(1);

        let start = self.clock.now();
        let mut streak = 0;
        let mut previous: Option<Status> = None;

        while self.clock.now().duration_since(start) < timeout {
            let status = self.source.fetch_status()?;
            if self.clock.now().duration_since(start) >= timeout {
                break;
            }

            if previous.as_ref() != Some(&status) {
                info!(model = %status.model.name, "status changed");
                if let Some(hook) = self.on_change.as_mut() {
                    hook(&status);
                }
            }

            if self.error.as_ref().is_some_and(|error| error(&status)) {
                info!(model = %status.model.name, "error condition met");
                return Err(WaitError::Errored {
                    status: Box::new(status),
                });
            }

            if ready(&status) {
                streak += 1;
                debug!(streak, successes, "ready");
                if streak >= successes {
                    let elapsed = self.clock.now().duration_since(start);
                    info!(elapsed_secs = elapsed.as_secs_f64(), "wait succeeded");
                    return Ok(status);
                }
            } else {
                streak = 0;
            }

            previous = Some(status);
            self.clock.sleep(delay);
        }

        info!(timeout_secs = timeout.as_secs_f64(), "wait timed out");
        Err(WaitError::TimedOut {
            timeout,
            status: previous.map(Box::new),
        })
    }
}
