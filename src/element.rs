use crate::animation::{AnimationState, Animator, Phase};
use crate::scheduler::TimerHandle;

/// A drawable node of a slide. Element holds the appearance and
/// animation state of one rectangle, whichever graphics engine ends up
/// drawing it.
pub struct Element {
    pub tag: String,
    pub size: [f32; 2],
    pub transforms: Vec<TransformFunction>,
    pub animator: Animator,
    pub(crate) animation: AnimationState,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            size: [0.0, 0.0],
            transforms: vec![],
            animator: Animator::default(),
            animation: AnimationState::default(),
        }
    }

    /// Replaces the element translation with a horizontal offset in pixels.
    pub fn set_translate_x(&mut self, x: f32) {
        self.transforms = vec![TransformFunction::translate(Length::px(x), Length::zero())];
    }

    /// The current horizontal offset of the element in pixels.
    pub fn translate_x(&self) -> f32 {
        self.transforms
            .iter()
            .map(|transform| match *transform {
                TransformFunction::Translate { x, .. } => x.resolve(self.size[0]),
            })
            .next()
            .unwrap_or(0.0)
    }

    /// The handle of the active scheduled task, absent while stopped.
    pub fn timer(&self) -> Option<TimerHandle> {
        self.animation.handle
    }

    pub fn phase(&self) -> Phase {
        self.animation.phase
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Length {
    Number(f32),
    Percent(f32),
}

impl Length {
    #[inline(always)]
    pub fn resolve(&self, base: f32) -> f32 {
        match *self {
            Length::Number(value) => value,
            Length::Percent(value) => value * base,
        }
    }

    pub fn px(value: f32) -> Self {
        Self::Number(value)
    }

    pub fn percent(value: f32) -> Self {
        Self::Percent(value)
    }

    pub fn zero() -> Self {
        Self::Number(0.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TransformFunction {
    Translate { x: Length, y: Length },
}

impl TransformFunction {
    pub fn translate(x: Length, y: Length) -> Self {
        Self::Translate { x, y }
    }
}
