//! Ready-made actor templates.
//!
//! A [`Prototype`] holds a fully built [`TrackSet`] for one kind of actor.
//! Spawning clones the set, which only bumps the `Arc` counts of the shared
//! frame tables. Each new actor still gets its own playback cursors.

use bevy_ecs::prelude::Resource;

use crate::components::actor::{Actor, ActorState, Facing, TrackSet};
use crate::components::body::Body;
use crate::components::fireball::FireballState;
use crate::components::player::HeroState;
use crate::components::rect::Rect;
use crate::components::walker::WalkerState;

/// Template for spawning actors of state type `S`.
#[derive(Debug, Clone)]
pub struct Prototype<S: ActorState> {
    tracks: TrackSet<S>,
    width: i32,
    height: i32,
}

impl<S: ActorState> Prototype<S> {
    /// Body size is taken from the first frame of the initial state.
    pub fn new(tracks: TrackSet<S>) -> Self {
        let (width, height) = tracks.frame_size();
        Self {
            tracks,
            width,
            height,
        }
    }

    /// Width and height of spawned bodies.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Retime every animation of this kind of actor. Actors spawned afterwards
    /// share the retimed tables; already spawned ones keep theirs.
    pub fn set_shared_duration(&mut self, duration: u32) {
        self.tracks.set_shared_duration(duration);
    }

    /// New actor with its top-left at `(x, y)`, which also becomes its spawn point.
    pub fn spawn(&self, x: i32, y: i32, facing: Facing) -> Actor<S> {
        let body = Body::new(Rect::new(x, y, self.width, self.height));
        Actor::new(body, self.tracks.clone(), facing)
    }
}

/// Prototypes for every actor kind in the game.
#[derive(Resource, Debug, Clone)]
pub struct ActorPrototypes {
    pub hero: Prototype<HeroState>,
    pub walker: Prototype<WalkerState>,
    pub fireball: Prototype<FireballState>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animation::{AnimationTrack, Frame};

    fn walker_prototype() -> Prototype<WalkerState> {
        let tracks = TrackSet::try_from_fn(|_| {
            let frames = vec![Frame::new("w0", 12, 16, 1), Frame::new("w1", 12, 16, 1)];
            AnimationTrack::new(frames.into()).ok_or(())
        })
        .unwrap();
        Prototype::new(tracks)
    }

    #[test]
    fn test_size_comes_from_first_frame() {
        assert_eq!(walker_prototype().size(), (12, 16));
    }

    #[test]
    fn test_spawned_actors_share_frames_not_cursors() {
        let proto = walker_prototype();
        let mut a = proto.spawn(0, 0, Facing::Left);
        let b = proto.spawn(40, 8, Facing::Right);

        assert_eq!(b.rect(), Rect::new(40, 8, 12, 16));
        assert_eq!(b.body.spawn_point, (40, 8));
        assert!(a.track().shares_frames_with(b.track()));

        a.update_state();
        a.update_state();
        assert_eq!(a.track().index(), 0);
        a.update_state();
        assert_eq!(a.track().index(), 1);
        assert_eq!(b.track().index(), 0);
    }

    #[test]
    fn test_retimed_prototype_spawns_share_new_table() {
        let mut proto = walker_prototype();
        let before = proto.spawn(0, 0, Facing::Right);
        proto.set_shared_duration(10);
        let a = proto.spawn(0, 0, Facing::Right);
        let b = proto.spawn(0, 0, Facing::Right);
        assert!(a.track().shares_frames_with(b.track()));
        assert!(!a.track().shares_frames_with(before.track()));
        assert_eq!(a.current_frame().duration, 10);
        assert_eq!(before.current_frame().duration, 1);
    }

    #[test]
    fn test_retiming_one_actor_leaves_others_alone() {
        let proto = walker_prototype();
        let mut slow = proto.spawn(0, 0, Facing::Right);
        let mut fast = proto.spawn(0, 0, Facing::Right);
        slow.set_shared_duration(4);

        // First update after spawn keeps Walk, so both advance.
        slow.update_state();
        fast.update_state();
        assert_eq!(slow.track().index(), 0);
        assert_eq!(fast.track().index(), 1);
        assert!(!slow.track().shares_frames_with(fast.track()));
    }
}
