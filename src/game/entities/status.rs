// Entity status labels
//
// The status selects which animation sequence plays. Its name matches the
// on-disk animation folder for that state.

use glam::Vec2;

/// Direction the entity faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Up,
    /// Every entity starts facing downwards
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Facing for a movement direction; the dominant axis wins
    ///
    /// Returns `None` for the zero vector (no movement, keep facing).
    pub fn from_direction(direction: Vec2) -> Option<Self> {
        if direction == Vec2::ZERO {
            return None;
        }
        Some(if direction.x.abs() > direction.y.abs() {
            if direction.x > 0.0 {
                Self::Right
            } else {
                Self::Left
            }
        } else if direction.y > 0.0 {
            // y grows downward in screen space
            Self::Down
        } else {
            Self::Up
        })
    }
}

/// What the entity is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    #[default]
    Idle,
    Move,
    Attack,
}

/// Animation status: a facing plus an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Status {
    pub facing: Facing,
    pub action: Action,
}

impl Status {
    pub const fn new(facing: Facing, action: Action) -> Self {
        Self { facing, action }
    }

    /// The animation label for this status (`"down_idle"`, `"left_attack"`, ...)
    ///
    /// Movement has the bare facing name; idle and attack carry a suffix.
    pub fn name(&self) -> &'static str {
        match (self.facing, self.action) {
            (Facing::Up, Action::Idle) => "up_idle",
            (Facing::Up, Action::Move) => "up",
            (Facing::Up, Action::Attack) => "up_attack",
            (Facing::Down, Action::Idle) => "down_idle",
            (Facing::Down, Action::Move) => "down",
            (Facing::Down, Action::Attack) => "down_attack",
            (Facing::Left, Action::Idle) => "left_idle",
            (Facing::Left, Action::Move) => "left",
            (Facing::Left, Action::Attack) => "left_attack",
            (Facing::Right, Action::Idle) => "right_idle",
            (Facing::Right, Action::Move) => "right",
            (Facing::Right, Action::Attack) => "right_attack",
        }
    }
}
