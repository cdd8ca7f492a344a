//! Rendering.
//!
//! Everything is drawn into the low-resolution [`RenderTarget`] in level
//! pixels, then the target is stretched over the window in one blit.
//! Draw order: blocks, stars, walkers, fireballs, hero, banner.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::actor::{Actor, ActorState, Facing};
use crate::components::fireball::FireballState;
use crate::components::player::{HeroState, Player};
use crate::components::rect::Rect;
use crate::components::walker::WalkerState;
use crate::resources::gamestate::GameState;
use crate::resources::level::{Block, LevelGeometry};
use crate::resources::rendertarget::RenderTarget;
use crate::resources::texturestore::TextureStore;

const BACKGROUND: Color = Color::WHITE;
const BANNER_COLOUR: Color = Color::BLACK;
const BANNER_FONT_SIZE: i32 = 20;
const BANNER_Y: i32 = 100;

/// Source and destination rectangles for drawing a `width` x `height` frame at `rect`.
///
/// Left-facing frames use a negative source width, which mirrors them.
pub fn sprite_rects(width: i32, height: i32, rect: Rect, facing: Facing) -> (Rectangle, Rectangle) {
    let src_width = match facing {
        Facing::Right => width as f32,
        Facing::Left => -(width as f32),
    };
    let src = Rectangle::new(0.0, 0.0, src_width, height as f32);
    let dest = Rectangle::new(rect.x as f32, rect.y as f32, width as f32, height as f32);
    (src, dest)
}

fn draw_block<D: RaylibDraw>(d: &mut D, textures: &TextureStore, block: &Block) {
    if let Some(tex) = textures.get(&block.tex_key) {
        let src = Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32);
        let dest = Rectangle::new(
            block.rect.x as f32,
            block.rect.y as f32,
            block.rect.w as f32,
            block.rect.h as f32,
        );
        d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }
}

fn draw_actor<D: RaylibDraw, S: ActorState>(d: &mut D, textures: &TextureStore, actor: &Actor<S>) {
    let frame = actor.current_frame();
    if let Some(tex) = textures.get(&frame.tex_key) {
        let (src, dest) = sprite_rects(frame.width, frame.height, actor.rect(), actor.facing());
        d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }
}

/// Draw the world into the render target and present it.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    textures: Res<TextureStore>,
    level: Res<LevelGeometry>,
    state: Res<GameState>,
    walkers: Query<&Actor<WalkerState>>,
    fireballs: Query<&Actor<FireballState>>,
    hero: Query<&Actor<HeroState>, With<Player>>,
) {
    let (window_w, window_h) = (rl.get_screen_width(), rl.get_screen_height());
    let banner = state
        .banner()
        .map(|text| (text, raylib::core::text::measure_text(text, BANNER_FONT_SIZE)));
    let src = target.source_rect();
    let dest = target.dest_rect(window_w, window_h);
    let half_width = target.game_width as i32 / 2;

    let mut d = rl.begin_drawing(&th);
    {
        let mut t = d.begin_texture_mode(&th, &mut target.texture);
        t.clear_background(BACKGROUND);

        for block in level.blocks.iter().chain(level.stars.iter()) {
            draw_block(&mut t, &textures, block);
        }
        for walker in walkers.iter() {
            draw_actor(&mut t, &textures, walker);
        }
        for fireball in fireballs.iter() {
            draw_actor(&mut t, &textures, fireball);
        }
        for hero in hero.iter() {
            draw_actor(&mut t, &textures, hero);
        }

        if let Some((text, text_width)) = banner {
            t.draw_text(
                text,
                half_width - text_width / 2,
                BANNER_Y,
                BANNER_FONT_SIZE,
                BANNER_COLOUR,
            );
        }
    }

    d.clear_background(Color::BLACK);
    d.draw_texture_pro(
        target.texture.texture(),
        src,
        dest,
        Vector2::zero(),
        0.0,
        Color::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_facing_source_is_unflipped() {
        let (src, dest) = sprite_rects(12, 20, Rect::new(5, 7, 12, 20), Facing::Right);
        assert_eq!(src.width, 12.0);
        assert_eq!(src.height, 20.0);
        assert_eq!((dest.x, dest.y, dest.width), (5.0, 7.0, 12.0));
    }

    #[test]
    fn test_left_facing_source_is_mirrored() {
        let (src, dest) = sprite_rects(12, 20, Rect::new(5, 7, 12, 20), Facing::Left);
        assert_eq!(src.width, -12.0);
        assert_eq!(dest.width, 12.0);
    }
}
