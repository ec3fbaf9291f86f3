use std::time::Duration;

use crate::element::Element;
use crate::scheduler::{Scheduler, TimerHandle};

/// Nominal period of the interval driven variant. Approximates a 60 Hz
/// cadence without any alignment to the actual display refresh.
pub const INTERVAL_PERIOD: Duration = Duration::from_millis(16);

/// The horizontal offset wraps after this many steps.
pub const TRACK_LENGTH: u32 = 500;

/// Declarative animation bound to an element by the style system,
/// merely paused and resumed here.
#[derive(Clone)]
pub struct Animator {
    /// The animation name, empty when no animation is bound.
    pub name: String,
    /// The play state, true is "running" and false is "paused".
    pub running: bool,
}

impl Default for Animator {
    fn default() -> Self {
        Self {
            name: String::new(),
            running: true,
        }
    }
}

impl Animator {
    pub fn is_declared(&self) -> bool {
        !self.name.is_empty()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Stopped,
    Running(Driver),
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Stopped
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Driver {
    Interval,
    Frame,
}

/// Manual driver state owned by the element. The handle is present
/// exactly while the phase is running, at most one scheduled task per
/// element at any time.
#[derive(Default)]
pub struct AnimationState {
    pub(crate) phase: Phase,
    pub(crate) handle: Option<TimerHandle>,
    pub(crate) counter: u32,
}

/// Flips a declarative animation between playing and paused. When no
/// animation is bound the write is inert, not a failure.
pub fn toggle_declarative_animation(element: &mut Element) {
    element.animator.running = !element.animator.running;
}

/// Starts or stops an animation driven by a fixed rate repeating task
/// decoupled from the rendering cadence. Under a slow host loop the task
/// fires in bursts and keeps running while nothing is rendered, which is
/// the weakness this variant demonstrates.
pub fn toggle_interval_animation(element: &mut Element, scheduler: &mut dyn Scheduler) {
    match element.animation.handle.take() {
        Some(handle) => {
            scheduler.cancel(handle);
            element.animation.phase = Phase::Stopped;
        }
        None => {
            element.animation.counter = 0;
            element.animation.phase = Phase::Running(Driver::Interval);
            element.animation.handle = Some(scheduler.set_interval(INTERVAL_PERIOD));
        }
    }
}

/// Starts or stops an animation synchronized to the rendering cadence.
/// Each step requests the next frame only after the previous one fired,
/// so the loop self throttles to one step per rendering cycle.
pub fn toggle_frame_animation(element: &mut Element, scheduler: &mut dyn Scheduler) {
    match element.animation.handle.take() {
        Some(handle) => {
            scheduler.cancel(handle);
            element.animation.phase = Phase::Stopped;
        }
        None => {
            element.animation.counter = 0;
            element.animation.phase = Phase::Running(Driver::Frame);
            element.animation.handle = Some(scheduler.request_frame());
        }
    }
}

/// Routes a scheduler firing to the element which owns the handle.
/// Firings of handles the element does not own are ignored, a task
/// cancelled between scheduling and dispatch has no effect.
pub fn fire(element: &mut Element, handle: TimerHandle, scheduler: &mut dyn Scheduler) {
    if element.animation.handle != Some(handle) {
        return;
    }
    match element.animation.phase {
        Phase::Running(Driver::Interval) => step(element),
        Phase::Running(Driver::Frame) => {
            step(element);
            element.animation.handle = Some(scheduler.request_frame());
        }
        Phase::Stopped => {}
    }
}

fn step(element: &mut Element) {
    element.animation.counter = (element.animation.counter + 1) % TRACK_LENGTH;
    element.set_translate_x(element.animation.counter as f32);
}
