//! Sprite image loading
//!
//! Resolves the string sprite identifiers held by the simulation to loaded
//! `HtmlImageElement`s. Loading happens once at startup; lookups during the
//! render loop are infallible map hits.

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::sim::SpriteId;

/// Board tile art per row, top to bottom
pub const ROW_TILES: [&str; 6] = [
    "images/water-block.png",
    "images/stone-block.png",
    "images/stone-block.png",
    "images/stone-block.png",
    "images/grass-block.png",
    "images/grass-block.png",
];

/// All sprite identifiers the game can ask for
fn all_paths() -> Vec<&'static str> {
    let mut paths = vec![
        SpriteId::PlayerIdle.as_str(),
        SpriteId::PlayerDefeated.as_str(),
        SpriteId::PlayerVictory.as_str(),
        SpriteId::Enemy.as_str(),
    ];
    for tile in ROW_TILES {
        if !paths.contains(&tile) {
            paths.push(tile);
        }
    }
    paths
}

/// Loaded image store keyed by sprite identifier string
pub struct AssetStore {
    images: HashMap<String, HtmlImageElement>,
}

impl AssetStore {
    /// Load every game image up front. Fails if any image cannot be decoded.
    pub async fn load() -> Result<Self, JsValue> {
        let mut images = HashMap::new();
        for path in all_paths() {
            let image = load_image(path).await?;
            images.insert(path.to_string(), image);
        }
        log::info!("Loaded {} images", images.len());
        Ok(Self { images })
    }

    pub fn get(&self, id: &str) -> Option<&HtmlImageElement> {
        self.images.get(id)
    }

    pub fn sprite(&self, id: SpriteId) -> Option<&HtmlImageElement> {
        self.get(id.as_str())
    }
}

/// Load and decode a single image from a path/url
async fn load_image(source: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(source);
    // decode() resolves once the image is ready to draw, or rejects
    JsFuture::from(image.decode()).await.map_err(|err| {
        log::error!("Failed to load image {source}: {err:?}");
        err
    })?;
    Ok(image)
}
