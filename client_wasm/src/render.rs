//! Canvas 2D scene drawing

use game_core::Aabb;
use glam::Vec2;

pub const PLAYER_COLOR: &str = "#4CAF50";
pub const OPPONENT_COLOR: &str = "#F44336";
pub const BALL_COLOR: &str = "#FFF";
pub const NET_COLOR: &str = "#888";

pub const NET_WIDTH: f32 = 2.0;
pub const NET_DASH: f32 = 20.0;
pub const NET_SPACING: f32 = 30.0;

/// Dashes of the center net, top to bottom
pub fn net_dashes(arena: Aabb) -> impl Iterator<Item = Aabb> {
    let x = arena.center().x - NET_WIDTH / 2.0;
    let top = arena.min.y;
    let count = (arena.size().y / NET_SPACING).ceil() as usize;

    (0..count).map(move |i| {
        Aabb::from_pos_size(
            Vec2::new(x, top + i as f32 * NET_SPACING),
            Vec2::new(NET_WIDTH, NET_DASH),
        )
    })
}

#[cfg(target_arch = "wasm32")]
pub use canvas::Renderer;

#[cfg(target_arch = "wasm32")]
mod canvas {
    use super::*;
    use game_core::Scene;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    pub struct Renderer {
        ctx: CanvasRenderingContext2d,
    }

    impl Renderer {
        pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
            let ctx = canvas
                .get_context("2d")?
                .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|e| JsValue::from_str(&format!("Unexpected 2d context: {:?}", e)))?;
            Ok(Self { ctx })
        }

        pub fn draw(&self, scene: &Scene) {
            let arena = scene.arena;
            self.ctx.clear_rect(
                arena.min.x as f64,
                arena.min.y as f64,
                arena.size().x as f64,
                arena.size().y as f64,
            );

            for dash in net_dashes(arena) {
                self.fill(NET_COLOR, &dash);
            }

            self.fill(PLAYER_COLOR, &scene.player);
            self.fill(OPPONENT_COLOR, &scene.opponent);
            self.fill(BALL_COLOR, &scene.ball);
        }

        fn fill(&self, color: &str, rect: &Aabb) {
            let size = rect.size();
            self.ctx.set_fill_style_str(color);
            self.ctx.fill_rect(
                rect.min.x as f64,
                rect.min.y as f64,
                size.x as f64,
                size.y as f64,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::GameMap;

    #[test]
    fn test_net_covers_arena_height() {
        let arena = GameMap::default().bounds();
        let dashes: Vec<Aabb> = net_dashes(arena).collect();

        assert_eq!(dashes.len(), 17);
        assert_eq!(dashes[0].min, Vec2::new(399.0, 0.0));
        assert_eq!(dashes[16].min.y, 480.0);
        for dash in &dashes {
            assert_eq!(dash.size(), Vec2::new(2.0, 20.0));
        }
    }

    #[test]
    fn test_net_is_centered() {
        let arena = Aabb::new(Vec2::ZERO, Vec2::new(400.0, 90.0));
        let dashes: Vec<Aabb> = net_dashes(arena).collect();

        assert_eq!(dashes.len(), 3);
        assert!(dashes.iter().all(|d| d.center().x == 200.0));
    }
}
