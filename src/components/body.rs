//! Collidable body: a rectangle with velocity and per-axis collision resolution.
//!
//! [`Body`] is the physical part of every actor. Movement is resolved one
//! axis at a time against a static obstacle set: first horizontally, then
//! vertically from the horizontally-resolved position. Landing on an obstacle
//! zeroes vertical velocity and opens a short jump window tracked by
//! `grounded_timer` (coyote time).
//!
//! All values are integer pixels per tick; the game runs on a fixed timestep
//! so there is no delta-time scaling here.
//!
//! # Example
//! ```
//! use starhop::components::body::Body;
//! use starhop::components::rect::Rect;
//!
//! let floor = [Rect::new(0, 20, 100, 10)];
//! let mut body = Body::new(Rect::new(0, 0, 10, 10));
//! for _ in 0..30 {
//!     body.gravity();
//!     body.move_resolved(body.vx, body.vy, &floor);
//! }
//! assert_eq!(body.rect.bottom(), 20);
//! assert!(body.is_grounded());
//! ```

use super::rect::Rect;

/// Downward acceleration added to `vy` by [`Body::gravity`], in pixels per tick².
pub const GRAVITY: i32 = 1;
/// Upward impulse subtracted from `vy` by a successful [`Body::jump`].
pub const JUMP_VELOCITY: i32 = 10;
/// Ticks a body counts as grounded after its last floor contact.
pub const GROUNDED_TICKS: u32 = 2;

/// Rectangle plus motion state.
///
/// # Fields
/// - `rect` - current extent in render-target pixels
/// - `vx`, `vy` - velocity in pixels per tick
/// - `spawn_point` - top-left restored by [`Body::respawn`]
/// - `grounded_timer` - ticks left in the jump window; zero means airborne
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub rect: Rect,
    pub vx: i32,
    pub vy: i32,
    pub spawn_point: (i32, i32),
    pub grounded_timer: u32,
}

impl Body {
    /// Create a body at rest. The rectangle's top-left becomes the spawn point.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vx: 0,
            vy: 0,
            spawn_point: (rect.x, rect.y),
            grounded_timer: 0,
        }
    }

    /// True while the jump window is open.
    pub fn is_grounded(&self) -> bool {
        self.grounded_timer > 0
    }

    /// Move by `(dx, dy)` in one discrete step per axis.
    ///
    /// The horizontal pass runs first: the body jumps straight to its
    /// destination and every obstacle it then intersects pushes it back
    /// against the edge it came from. The vertical pass does the same from
    /// the horizontally resolved position. Landing sets `vy = 0` and refreshes
    /// the grounded timer, bumping a ceiling only sets `vy = 0`.
    ///
    /// Obstacles the destination does not touch are ignored, so a step wider
    /// than a wall passes through it. A zero step on an axis resolves nothing
    /// on that axis.
    pub fn move_resolved(&mut self, dx: i32, dy: i32, obstacles: &[Rect]) {
        self.grounded_timer = self.grounded_timer.saturating_sub(1);

        let mut dest = self.rect.translated(dx, 0);
        if dx != 0 {
            for obstacle in obstacles {
                if !dest.intersects(obstacle) {
                    continue;
                }
                if dx > 0 {
                    dest.set_right(obstacle.left());
                } else {
                    dest.set_left(obstacle.right());
                }
            }
        }

        dest = dest.translated(0, dy);
        if dy != 0 {
            for obstacle in obstacles {
                if !dest.intersects(obstacle) {
                    continue;
                }
                if dy > 0 {
                    dest.set_bottom(obstacle.top());
                    self.vy = 0;
                    self.grounded_timer = GROUNDED_TICKS;
                } else {
                    dest.set_top(obstacle.bottom());
                    self.vy = 0;
                }
            }
        }

        self.rect = dest;
    }

    /// Resolve the body's own velocity against `obstacles`.
    pub fn update_position(&mut self, obstacles: &[Rect]) {
        self.move_resolved(self.vx, self.vy, obstacles);
    }

    /// Move without any collision checks.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.rect = self.rect.translated(dx, dy);
    }

    /// Apply one tick of gravity.
    pub fn gravity(&mut self) {
        self.vy += GRAVITY;
    }

    /// Jump if the grounded window is open. Returns whether the impulse was applied.
    pub fn jump(&mut self) -> bool {
        if self.is_grounded() {
            self.vy -= JUMP_VELOCITY;
            true
        } else {
            false
        }
    }

    pub fn set_vx(&mut self, vx: i32) {
        self.vx = vx;
    }

    /// Return to the spawn point at rest and airborne.
    pub fn respawn(&mut self) {
        self.rect.x = self.spawn_point.0;
        self.rect.y = self.spawn_point.1;
        self.vx = 0;
        self.vy = 0;
        self.grounded_timer = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: i32, y: i32) -> Body {
        Body::new(Rect::new(x, y, 10, 10))
    }

    #[test]
    fn test_new_body_is_at_rest() {
        let body = body_at(3, 4);
        assert_eq!(body.vx, 0);
        assert_eq!(body.vy, 0);
        assert_eq!(body.spawn_point, (3, 4));
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_free_move_without_obstacles() {
        let mut body = body_at(0, 0);
        body.move_resolved(7, -3, &[]);
        assert_eq!(body.rect, Rect::new(7, -3, 10, 10));
    }

    #[test]
    fn test_blocked_immediately_by_adjacent_wall() {
        let mut body = body_at(0, 0);
        let wall = Rect::new(10, 0, 10, 10);
        body.move_resolved(15, 0, &[wall]);
        assert_eq!(body.rect, Rect::new(0, 0, 10, 10));
    }

    #[test]
    fn test_step_clearing_a_wall_passes_through() {
        let mut body = body_at(0, 0);
        body.move_resolved(20, 0, &[Rect::new(10, 0, 10, 10)]);
        assert_eq!(body.rect, Rect::new(20, 0, 10, 10));

        let mut body = body_at(0, 0);
        body.move_resolved(20, 0, &[Rect::new(15, 0, 2, 10)]);
        assert_eq!(body.rect.x, 20);
    }

    #[test]
    fn test_right_move_stops_flush_against_wall() {
        let mut body = body_at(0, 0);
        let wall = Rect::new(15, -5, 10, 30);
        body.move_resolved(8, 0, &[wall]);
        assert_eq!(body.rect.right(), 15);
    }

    #[test]
    fn test_every_intersecting_wall_clamps_in_turn() {
        let mut body = body_at(0, 0);
        let far = Rect::new(22, 0, 10, 10);
        let near = Rect::new(18, 0, 10, 10);
        body.move_resolved(15, 0, &[far, near]);
        assert_eq!(body.rect.right(), 18);
    }

    #[test]
    fn test_left_move_stops_flush_against_wall() {
        let mut body = body_at(20, 0);
        let wall = Rect::new(0, 0, 15, 10);
        body.move_resolved(-10, 0, &[wall]);
        assert_eq!(body.rect.left(), 15);
    }

    #[test]
    fn test_wall_outside_vertical_span_does_not_block() {
        let mut body = body_at(0, 0);
        let low_wall = Rect::new(12, 10, 10, 10);
        body.move_resolved(5, 0, &[low_wall]);
        assert_eq!(body.rect.x, 5);
    }

    #[test]
    fn test_landing_zeroes_vy_and_grounds() {
        let mut body = body_at(0, 0);
        body.vy = 7;
        let floor = Rect::new(-50, 15, 100, 10);
        body.move_resolved(0, 7, &[floor]);
        assert_eq!(body.rect.bottom(), 15);
        assert_eq!(body.vy, 0);
        assert_eq!(body.grounded_timer, GROUNDED_TICKS);
    }

    #[test]
    fn test_ceiling_bump_zeroes_vy_without_grounding() {
        let mut body = body_at(0, 20);
        body.vy = -10;
        let ceiling = Rect::new(-50, 0, 100, 15);
        body.move_resolved(0, -10, &[ceiling]);
        assert_eq!(body.rect.top(), 15);
        assert_eq!(body.vy, 0);
        assert_eq!(body.grounded_timer, 0);
    }

    #[test]
    fn test_embedded_body_is_lifted_onto_floor() {
        let mut body = body_at(0, 5);
        body.vy = 1;
        let floor = Rect::new(0, 10, 100, 10);
        body.move_resolved(0, 1, &[floor]);
        assert_eq!(body.rect, Rect::new(0, 0, 10, 10));
        assert_eq!(body.vy, 0);
        assert_eq!(body.grounded_timer, GROUNDED_TICKS);
    }

    #[test]
    fn test_zero_step_leaves_axis_unresolved() {
        let mut body = body_at(0, 5);
        let floor = Rect::new(0, 10, 100, 10);
        body.move_resolved(0, 0, &[floor]);
        assert_eq!(body.rect, Rect::new(0, 5, 10, 10));
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_grounded_timer_counts_down_in_air() {
        let mut body = body_at(0, 0);
        body.grounded_timer = GROUNDED_TICKS;
        body.move_resolved(0, 1, &[]);
        assert_eq!(body.grounded_timer, 1);
        body.move_resolved(0, 1, &[]);
        assert_eq!(body.grounded_timer, 0);
        body.move_resolved(0, 1, &[]);
        assert_eq!(body.grounded_timer, 0);
    }

    #[test]
    fn test_resting_on_floor_stays_grounded() {
        let floor = [Rect::new(0, 10, 100, 10)];
        let mut body = body_at(0, 0);
        for _ in 0..5 {
            body.gravity();
            body.update_position(&floor);
            assert!(body.is_grounded());
            assert_eq!(body.rect.bottom(), 10);
        }
    }

    #[test]
    fn test_slide_along_floor_after_horizontal_pass() {
        let floor = [Rect::new(0, 10, 100, 10)];
        let mut body = body_at(0, 0);
        body.move_resolved(5, 1, &floor);
        assert_eq!(body.rect, Rect::new(5, 0, 10, 10));
        assert!(body.is_grounded());
    }

    #[test]
    fn test_jump_requires_grounded_window() {
        let mut body = body_at(0, 0);
        body.vy = 3;
        assert!(!body.jump());
        assert_eq!(body.vy, 3);

        body.grounded_timer = 1;
        assert!(body.jump());
        assert_eq!(body.vy, 3 - JUMP_VELOCITY);
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut body = body_at(0, 0);
        body.gravity();
        body.gravity();
        assert_eq!(body.vy, 2 * GRAVITY);
    }

    #[test]
    fn test_translate_ignores_obstacles() {
        let mut body = body_at(0, 0);
        body.translate(4, -2);
        assert_eq!(body.rect, Rect::new(4, -2, 10, 10));
    }

    #[test]
    fn test_respawn_restores_spawn_and_clears_motion() {
        let mut body = body_at(20, 30);
        body.move_resolved(50, 50, &[]);
        body.vx = 5;
        body.vy = -4;
        body.grounded_timer = 2;
        body.respawn();
        assert_eq!(body.rect, Rect::new(20, 30, 10, 10));
        assert_eq!((body.vx, body.vy, body.grounded_timer), (0, 0, 0));
    }
}
