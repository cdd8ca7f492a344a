//! Actors: a body, a closed set of animation tracks and derived state.
//!
//! An [`Actor`] is parameterised by its state enum `S`. Every variant of `S`
//! owns exactly one [`AnimationTrack`] inside a [`TrackSet`], which can only
//! be built by supplying a track for each variant. Looking up the active
//! track therefore cannot fail at runtime.
//!
//! State is recomputed every tick from the body ([`ActorState::derive`]).
//! Entering a new state restarts that state's animation; staying in the same
//! state advances it.
//!
//! # Related
//! - [`crate::components::player::HeroState`]
//! - [`crate::components::walker::WalkerState`]
//! - [`crate::components::fireball::FireballState`]

use std::fmt;
use std::marker::PhantomData;

use bevy_ecs::prelude::Component;

use super::animation::{AnimationTrack, Frame};
use super::body::Body;
use super::fireball::{Fireball, FireballState};
use super::rect::Rect;
use crate::resources::prototypes::Prototype;

/// Ticks an actor must wait between two projectile throws.
pub const THROW_COOLDOWN: u32 = 5;

/// Horizontal facing of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Unit direction along x: `-1` for left, `1` for right.
    pub fn sign(self) -> i32 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Closed set of behavioural states for one kind of actor.
///
/// `ALL` must list every variant exactly once, in `slot()` order.
pub trait ActorState: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    const ALL: &'static [Self];

    /// Dense index of this variant into [`Self::ALL`].
    fn slot(self) -> usize;

    /// Key of this state's animation in the
    /// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
    fn animation_key(self) -> &'static str;

    /// State an actor starts in.
    fn initial() -> Self;

    /// State implied by the body after it has moved this tick.
    fn derive(body: &Body) -> Self;
}

/// One animation track per state variant.
#[derive(Debug, Clone)]
pub struct TrackSet<S: ActorState> {
    tracks: Vec<AnimationTrack>,
    _state: PhantomData<S>,
}

impl<S: ActorState> TrackSet<S> {
    /// Build the set by asking `make` for the track of every variant.
    pub fn try_from_fn<E>(mut make: impl FnMut(S) -> Result<AnimationTrack, E>) -> Result<Self, E> {
        let mut tracks = Vec::with_capacity(S::ALL.len());
        for (slot, state) in S::ALL.iter().enumerate() {
            debug_assert_eq!(state.slot(), slot, "{state:?} is listed out of slot order");
            tracks.push(make(*state)?);
        }
        Ok(Self {
            tracks,
            _state: PhantomData,
        })
    }

    pub fn get(&self, state: S) -> &AnimationTrack {
        &self.tracks[state.slot()]
    }

    pub fn get_mut(&mut self, state: S) -> &mut AnimationTrack {
        &mut self.tracks[state.slot()]
    }

    /// Retime every track in the set.
    pub fn set_shared_duration(&mut self, duration: u32) {
        for track in &mut self.tracks {
            track.set_shared_duration(duration);
        }
    }

    /// Size of the first frame of the initial state's track.
    pub fn frame_size(&self) -> (i32, i32) {
        let frame = self.get(S::initial()).current_frame();
        (frame.width, frame.height)
    }
}

/// A body with animation and behavioural state.
#[derive(Component, Debug, Clone)]
pub struct Actor<S: ActorState> {
    pub body: Body,
    tracks: TrackSet<S>,
    state: S,
    facing: Facing,
    cooldown: u32,
}

impl<S: ActorState> Actor<S> {
    pub fn new(body: Body, tracks: TrackSet<S>, facing: Facing) -> Self {
        Self {
            body,
            tracks,
            state: S::initial(),
            facing,
            cooldown: 0,
        }
    }

    pub fn state(&self) -> S {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn rect(&self) -> Rect {
        self.body.rect
    }

    pub fn track(&self) -> &AnimationTrack {
        self.tracks.get(self.state)
    }

    /// Frame to draw this tick.
    pub fn current_frame(&self) -> &Frame {
        self.track().current_frame()
    }

    /// Retime all of this actor's animations.
    pub fn set_shared_duration(&mut self, duration: u32) {
        self.tracks.set_shared_duration(duration);
    }

    /// Derive state and facing from the body and step the animation.
    ///
    /// Call once per tick after the body has moved.
    pub fn update_state(&mut self) {
        let previous = self.state;
        self.state = S::derive(&self.body);

        if self.body.vx > 0 {
            self.facing = Facing::Right;
        } else if self.body.vx < 0 {
            self.facing = Facing::Left;
        }

        if self.state != previous {
            self.tracks.get_mut(self.state).reset();
        } else {
            self.tracks.get_mut(self.state).advance();
        }

        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Spawn a fireball at the leading edge if the throw cooldown has expired.
    ///
    /// On success the cooldown restarts at [`THROW_COOLDOWN`]. While cooling
    /// down this returns `None` and changes nothing.
    pub fn throw_projectile(
        &mut self,
        prototype: &Prototype<FireballState>,
    ) -> Option<(Actor<FireballState>, Fireball)> {
        if self.cooldown > 0 {
            return None;
        }
        self.cooldown = THROW_COOLDOWN;

        let rect = self.body.rect;
        let (width, _) = prototype.size();
        let x = match self.facing {
            Facing::Right => rect.right(),
            Facing::Left => rect.left() - width,
        };
        Some(Fireball::launch(prototype, x, rect.center_y(), self.facing))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::components::player::HeroState;

    fn hero_tracks() -> TrackSet<HeroState> {
        TrackSet::try_from_fn(|state: HeroState| {
            let frames: Arc<[Frame]> = vec![
                Frame::new(format!("{}_0", state.animation_key()), 10, 20, 1),
                Frame::new(format!("{}_1", state.animation_key()), 10, 20, 1),
            ]
            .into();
            AnimationTrack::new(frames).ok_or(())
        })
        .unwrap()
    }

    fn hero() -> Actor<HeroState> {
        Actor::new(Body::new(Rect::new(0, 0, 10, 20)), hero_tracks(), Facing::Right)
    }

    fn fireball_prototype() -> Prototype<FireballState> {
        let tracks = TrackSet::try_from_fn(|_| {
            AnimationTrack::new(vec![Frame::new("fireball", 6, 4, 1)].into()).ok_or(())
        })
        .unwrap();
        Prototype::new(tracks)
    }

    #[test]
    fn test_facing_sign_and_reverse() {
        assert_eq!(Facing::Left.sign(), -1);
        assert_eq!(Facing::Right.sign(), 1);
        assert_eq!(Facing::Left.reversed(), Facing::Right);
    }

    #[test]
    fn test_track_set_builds_every_state() {
        let tracks = hero_tracks();
        for state in HeroState::ALL {
            let key = tracks.get(*state).current_frame().tex_key.clone();
            assert!(key.starts_with(state.animation_key()));
        }
    }

    #[test]
    fn test_track_set_propagates_errors() {
        let result = TrackSet::try_from_fn(|state: HeroState| {
            if state == HeroState::Run {
                Err("missing")
            } else {
                AnimationTrack::new(vec![Frame::new("x", 1, 1, 1)].into()).ok_or("empty")
            }
        });
        assert_eq!(result.err(), Some("missing"));
    }

    #[test]
    fn test_airborne_is_jump_regardless_of_vx() {
        let mut actor = hero();
        actor.body.vx = 5;
        actor.update_state();
        assert_eq!(actor.state(), HeroState::Jump);
        actor.body.vx = 0;
        actor.update_state();
        assert_eq!(actor.state(), HeroState::Jump);
    }

    #[test]
    fn test_grounded_idle_and_run() {
        let mut actor = hero();
        actor.body.grounded_timer = 2;
        actor.update_state();
        assert_eq!(actor.state(), HeroState::Idle);
        actor.body.vx = -5;
        actor.update_state();
        assert_eq!(actor.state(), HeroState::Run);
    }

    #[test]
    fn test_facing_follows_vx_and_holds_at_zero() {
        let mut actor = hero();
        actor.body.vx = -1;
        actor.update_state();
        assert_eq!(actor.facing(), Facing::Left);
        actor.body.vx = 0;
        actor.update_state();
        assert_eq!(actor.facing(), Facing::Left);
        actor.body.vx = 3;
        actor.update_state();
        assert_eq!(actor.facing(), Facing::Right);
    }

    #[test]
    fn test_state_change_resets_and_same_state_advances() {
        let mut actor = hero();
        assert_eq!(actor.state(), HeroState::Idle);
        actor.body.grounded_timer = 2;

        // Still idle: the idle track advances.
        actor.update_state();
        assert_eq!(actor.state(), HeroState::Idle);
        assert_eq!(actor.track().index(), 1);

        // Entering run restarts the run track at its first frame.
        actor.body.vx = 5;
        actor.update_state();
        assert_eq!(actor.state(), HeroState::Run);
        assert_eq!(actor.track().index(), 0);

        actor.update_state();
        assert_eq!(actor.track().index(), 1);
    }

    #[test]
    fn test_throw_is_gated_by_cooldown() {
        let proto = fireball_prototype();
        let mut actor = hero();
        assert!(actor.throw_projectile(&proto).is_some());
        assert_eq!(actor.cooldown(), THROW_COOLDOWN);
        assert!(actor.throw_projectile(&proto).is_none());
        assert_eq!(actor.cooldown(), THROW_COOLDOWN);

        for _ in 0..THROW_COOLDOWN - 1 {
            actor.update_state();
            assert!(actor.throw_projectile(&proto).is_none());
        }
        actor.update_state();
        assert!(actor.throw_projectile(&proto).is_some());
    }

    #[test]
    fn test_throw_spawns_at_leading_edge() {
        let proto = fireball_prototype();
        let mut actor = hero();
        actor.body.rect = Rect::new(100, 40, 10, 20);

        let (ball, _) = actor.throw_projectile(&proto).unwrap();
        assert_eq!(ball.rect(), Rect::new(110, 50, 6, 4));
        assert_eq!(ball.facing(), Facing::Right);

        for _ in 0..THROW_COOLDOWN {
            actor.update_state();
        }
        actor.set_facing(Facing::Left);
        let (ball, _) = actor.throw_projectile(&proto).unwrap();
        assert_eq!(ball.rect(), Rect::new(94, 50, 6, 4));
        assert_eq!(ball.facing(), Facing::Left);
    }
}
