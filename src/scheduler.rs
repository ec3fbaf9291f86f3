use std::mem::take;
use std::time::Duration;

/// An opaque token returned by a scheduling call, used later to cancel
/// that specific scheduled task.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TimerHandle(u64);

/// The deferred execution primitive of the host environment. A scheduler
/// only manages registrations: the host decides when a registration fires
/// and dispatches the firing to the element which owns the handle.
pub trait Scheduler {
    /// Registers a repeating task with a fixed nominal period.
    fn set_interval(&mut self, period: Duration) -> TimerHandle;

    /// Registers a task to run once on the next rendering cycle.
    fn request_frame(&mut self) -> TimerHandle;

    /// Cancels a registration. Once this call returns the handle never
    /// fires again.
    fn cancel(&mut self, handle: TimerHandle);
}

struct Interval {
    handle: TimerHandle,
    period: Duration,
    accrued: Duration,
}

/// Scheduler driven by the host rendering loop, every [TickScheduler::tick]
/// represents one rendering cycle.
#[derive(Default)]
pub struct TickScheduler {
    sequence: u64,
    intervals: Vec<Interval>,
    frames: Vec<TimerHandle>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances time by one rendering cycle and collects firings in
    /// registration order.
    ///
    /// Interval registrations fire once per accrued period with no
    /// alignment to the rendering cadence, a slow cycle produces a burst
    /// of firings. Frame registrations fire exactly once and are consumed.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<TimerHandle> {
        let mut firings = vec![];
        for interval in self.intervals.iter_mut() {
            if interval.period.is_zero() {
                continue;
            }
            interval.accrued += elapsed;
            while interval.accrued >= interval.period {
                interval.accrued -= interval.period;
                firings.push(interval.handle);
            }
        }
        firings.extend(take(&mut self.frames));
        firings
    }

    fn next_handle(&mut self) -> TimerHandle {
        self.sequence += 1;
        TimerHandle(self.sequence)
    }
}

impl Scheduler for TickScheduler {
    fn set_interval(&mut self, period: Duration) -> TimerHandle {
        let handle = self.next_handle();
        self.intervals.push(Interval {
            handle,
            period,
            accrued: Duration::ZERO,
        });
        handle
    }

    fn request_frame(&mut self) -> TimerHandle {
        let handle = self.next_handle();
        self.frames.push(handle);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.intervals.retain(|interval| interval.handle != handle);
        self.frames.retain(|frame| *frame != handle);
    }
}
