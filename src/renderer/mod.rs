//! Canvas 2D sprite renderer
//!
//! Draws the tiled board, then every enemy, then the player, each at its
//! current pixel position. Pure read of the simulation state; draw order is
//! the z-order.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::assets::{AssetStore, ROW_TILES};
use crate::consts::*;
use crate::sim::{GameState, SpriteId};

pub struct Renderer {
    context: CanvasRenderingContext2d,
}

impl Renderer {
    /// Grab the 2d context from a canvas element
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { context })
    }

    /// Draw one full frame
    pub fn draw(&self, state: &GameState, assets: &AssetStore) {
        self.clear();
        self.draw_board(assets);
        for enemy in &state.enemies {
            self.draw_sprite(assets, enemy.sprite, enemy.pos.x, enemy.pos.y);
        }
        self.draw_sprite(assets, state.player.sprite, state.player.pos.x, state.player.pos.y);
    }

    fn clear(&self) {
        self.context
            .clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
    }

    /// The board tiles carry no sprite offset; rows stack at their raw pitch
    fn draw_board(&self, assets: &AssetStore) {
        for (row, tile) in ROW_TILES.iter().enumerate() {
            let Some(image) = assets.get(tile) else {
                continue;
            };
            for col in 0..NUM_COLS {
                let x = f64::from(col as f32 * TILE_WIDTH);
                let y = f64::from(row as f32 * TILE_HEIGHT);
                if let Err(err) = self
                    .context
                    .draw_image_with_html_image_element(image, x, y)
                {
                    log::warn!("draw_image failed for {tile}: {err:?}");
                }
            }
        }
    }

    fn draw_sprite(&self, assets: &AssetStore, sprite: SpriteId, x: f32, y: f32) {
        let Some(image) = assets.sprite(sprite) else {
            log::warn!("Missing sprite image: {}", sprite.as_str());
            return;
        };
        if let Err(err) =
            self.context
                .draw_image_with_html_image_element(image, f64::from(x), f64::from(y))
        {
            log::warn!("draw_image failed for {}: {err:?}", sprite.as_str());
        }
    }
}
