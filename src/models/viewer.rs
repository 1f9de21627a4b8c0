//! Card viewer state: which card is on top of the stack and which side each card shows.
//!
//! Times are milliseconds on any monotonic clock the caller chooses; the viewer
//! only compares them with each other.

/// Length of one flip animation.
pub const FLIP_DURATION_MS: f64 = 500.0;
/// Delay before the edit control fades in fully after a flip settles.
pub const EDIT_FADE_IN_MS: f64 = 300.0;
/// Number of cards drawn in the visible stack.
pub const STACK_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

impl Face {
    fn rotation(self) -> f32 {
        match self {
            Face::Front => 0.0,
            Face::Back => 180.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct FlipAnimation {
    from: f32,
    to: f32,
    started_at: f64,
}

/// Flip state of one card: the logical face plus the rotation driving the visual.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipState {
    face: Face,
    animation: Option<FlipAnimation>,
    settled_at: Option<f64>,
}

impl Default for FlipState {
    fn default() -> Self {
        Self {
            face: Face::Front,
            animation: None,
            settled_at: None,
        }
    }
}

impl FlipState {
    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.animation
            .is_some_and(|a| now - a.started_at < FLIP_DURATION_MS)
    }

    /// Starts flipping to the other face. Ignored while a flip is running.
    pub fn tap(&mut self, now: f64) -> bool {
        if self.is_animating(now) {
            return false;
        }
        let from = self.rotation(now);
        self.face = match self.face {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        };
        self.animation = Some(FlipAnimation {
            from,
            to: self.face.rotation(),
            started_at: now,
        });
        self.settled_at = Some(now + FLIP_DURATION_MS);
        true
    }

    /// Rotation in degrees, 0 for the front and 180 for the back.
    pub fn rotation(&self, now: f64) -> f32 {
        let Some(anim) = self.animation else {
            return self.face.rotation();
        };
        let t = ((now - anim.started_at) / FLIP_DURATION_MS).clamp(0.0, 1.0) as f32;
        anim.from + (anim.to - anim.from) * ease_in_out_quad(t)
    }

    /// Opacity of the edit control, 0 until the card settles on its back.
    pub fn edit_opacity(&self, now: f64) -> f32 {
        if self.face != Face::Back || self.is_animating(now) {
            return 0.0;
        }
        match self.settled_at {
            Some(settled) => ((now - settled) / EDIT_FADE_IN_MS).clamp(0.0, 1.0) as f32,
            None => 1.0,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cursor over the deck plus one flip state per card.
#[derive(Clone, Debug, Default)]
pub struct CardViewer {
    cursor: usize,
    flips: Vec<FlipState>,
}

impl CardViewer {
    pub fn new(len: usize) -> Self {
        let mut viewer = Self::default();
        viewer.sync_len(len);
        viewer
    }

    /// Follows the deck length. New cards start on their front.
    pub fn sync_len(&mut self, len: usize) {
        self.flips.resize_with(len, FlipState::default);
        if self.cursor >= len {
            self.cursor = 0;
        }
    }

    pub fn len(&self) -> usize {
        self.flips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flips.is_empty()
    }

    /// Index of the top card, `None` for an empty deck.
    pub fn cursor(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.cursor)
    }

    pub fn flip(&self, index: usize) -> Option<&FlipState> {
        self.flips.get(index)
    }

    pub fn face(&self, index: usize) -> Option<Face> {
        self.flips.get(index).map(FlipState::face)
    }

    pub fn tap(&mut self, index: usize, now: f64) -> bool {
        self.flips.get_mut(index).is_some_and(|f| f.tap(now))
    }

    /// Top card was dismissed: advance the cursor with wrap-around and show
    /// the new top card's front.
    pub fn swipe_away(&mut self) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.cursor = (self.cursor + 1) % len;
        self.flips[self.cursor].reset();
        Some(self.cursor)
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.flips.iter().any(|f| f.is_animating(now))
    }

    /// The edit control is shown on the top card once it has settled on its back.
    pub fn edit_affordance_visible(&self, index: usize, now: f64) -> bool {
        self.cursor() == Some(index)
            && self
                .flips
                .get(index)
                .is_some_and(|f| f.face() == Face::Back && !f.is_animating(now))
    }

    /// Indices of the visible stack, top card first, wrapping around the deck.
    pub fn stack(&self) -> Vec<usize> {
        let len = self.len();
        (0..STACK_SIZE.min(len))
            .map(|offset| (self.cursor + offset) % len)
            .collect()
    }
}
