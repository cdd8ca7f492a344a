//! Render target resource for fixed-resolution rendering.
//!
//! The whole game is drawn into a texture at the low render resolution, which
//! is then scaled to fit the window, keeping its aspect ratio. Gameplay never
//! sees window pixels.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Back-buffer at the game's internal resolution.
///
/// This is a NonSend resource because `RenderTexture2D` owns GPU resources
/// that must stay on the main thread.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
}

impl RenderTarget {
    /// Create the render target with nearest-neighbour filtering.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        // Point filtering keeps the upscaled pixels sharp.
        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }

        Ok(Self {
            texture,
            game_width: width,
            game_height: height,
        })
    }

    /// Source rectangle for drawing this texture.
    ///
    /// The height is negative to undo OpenGL's flipped texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }

    /// Destination rectangle for the current window size.
    pub fn dest_rect(&self, window_width: i32, window_height: i32) -> Rectangle {
        letterbox(
            self.game_width,
            self.game_height,
            window_width as u32,
            window_height as u32,
        )
    }
}

/// Largest rectangle with the game's aspect ratio that fits the window,
/// centred. The uncovered bars are left to the window's clear colour.
pub fn letterbox(
    game_width: u32,
    game_height: u32,
    window_width: u32,
    window_height: u32,
) -> Rectangle {
    let game_w = game_width as f32;
    let game_h = game_height as f32;
    let window_w = window_width as f32;
    let window_h = window_height as f32;

    if window_w / window_h > game_w / game_h {
        // Wider than the game: bars on the sides
        let scaled_w = game_w * window_h / game_h;
        Rectangle {
            x: (window_w - scaled_w) / 2.0,
            y: 0.0,
            width: scaled_w,
            height: window_h,
        }
    } else {
        let scaled_h = game_h * window_w / game_w;
        Rectangle {
            x: 0.0,
            y: (window_h - scaled_h) / 2.0,
            width: window_w,
            height: scaled_h,
        }
    }
}
