//! Rendering boundary
//!
//! The simulation never touches pixels. Each frame it hands the host a
//! `RenderFrame`: geometry plus a semantic tag per entity, the HUD readout
//! and an optional overlay.

pub mod frame;

pub use frame::{Hud, Overlay, RenderFrame, Sprite, SpriteTag};

/// Something that draws a finished frame
pub trait Renderer {
    fn draw(&mut self, frame: &RenderFrame);
}

/// Headless renderer that logs HUD changes instead of drawing
#[derive(Debug, Default)]
pub struct HudLogRenderer {
    last: Option<Hud>,
}

impl Renderer for HudLogRenderer {
    fn draw(&mut self, frame: &RenderFrame) {
        if self.last.as_ref() != Some(&frame.hud) {
            log::info!(
                "score {} | lives {} | level {}",
                frame.hud.score,
                frame.hud.lives,
                frame.hud.level
            );
            self.last = Some(frame.hud.clone());
        }
    }
}

/// Renderer that ignores every frame
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &RenderFrame) {}
}
