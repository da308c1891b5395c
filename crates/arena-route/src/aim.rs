use arena_core::math::{flat, heading, wrap_angle};
use arena_core::ArenaConfig;
use glam::Vec3;

/// Angular cone of acceptable shot directions on the ground plane, e.g. between the two posts
/// as seen from the ball. Headings are measured from `+x`; the cone is the shorter arc between
/// its two edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimCone {
    pub right: f32,
    pub left: f32,
}

/// How far behind the ball (as a share of the car's distance to it) to line up.
const LINE_UP_SHARE: f32 = 0.5;
const LINE_UP_MAX: f32 = 1500.0;
const ARENA_MARGIN: f32 = 100.0;

impl AimCone {
    pub fn new(right: f32, left: f32) -> Self {
        Self { right, left }
    }

    pub fn from_directions(right: Vec3, left: Vec3) -> Self {
        Self::new(heading(right), heading(left))
    }

    /// Cone from `from` toward the two goal posts of the goal centred at `goal`.
    pub fn toward_goal(from: Vec3, goal: Vec3, goal_half_width: f32) -> Self {
        let right_post = goal + Vec3::new(goal_half_width, 0.0, 0.0);
        let left_post = goal - Vec3::new(goal_half_width, 0.0, 0.0);
        Self::from_directions(right_post - from, left_post - from)
    }

    fn span(&self) -> f32 {
        wrap_angle(self.left - self.right)
    }

    pub fn contains_direction(&self, direction: Vec3) -> bool {
        let d = flat(direction);
        if d.length_squared() <= f32::EPSILON {
            return false;
        }
        let span = self.span();
        let off = wrap_angle(heading(d) - self.right);
        if span >= 0.0 {
            (0.0..=span).contains(&off)
        } else {
            (span..=0.0).contains(&off)
        }
    }

    pub fn center_direction(&self) -> Vec3 {
        let h = self.right + self.span() * 0.5;
        Vec3::new(h.cos(), h.sin(), 0.0)
    }

    /// Where to drive to shoot `ball` through the cone from `car`.
    ///
    /// Inside the cone the answer is the ball itself. Otherwise it is a point behind the ball
    /// along the nearer cone edge, or `None` when that point would be outside the arena.
    pub fn goto_point(&self, car: Vec3, ball: Vec3, arena: &ArenaConfig) -> Option<Vec3> {
        let car_to_ball = flat(ball - car);
        if self.contains_direction(car_to_ball) {
            return Some(flat(ball));
        }

        let h = heading(car_to_ball);
        let edge = if wrap_angle(h - self.right).abs() <= wrap_angle(h - self.left).abs() {
            self.right
        } else {
            self.left
        };
        let dir = Vec3::new(edge.cos(), edge.sin(), 0.0);
        let back = (car_to_ball.length() * LINE_UP_SHARE).min(LINE_UP_MAX);
        let goto = flat(ball) - dir * back;

        arena.contains(goto, ARENA_MARGIN).then_some(goto)
    }
}
