// File: crates/chart-core/src/context.rs
// Summary: Render context owned by the caller and passed to every drawing function.

use crate::scene::Scene;
use crate::theme::Theme;
use crate::types::Frame;

pub struct RenderContext {
    pub frame: Frame,
    pub theme: Theme,
    pub scene: Scene,
}

impl RenderContext {
    pub fn new(frame: Frame, theme: Theme) -> Self {
        let scene = Scene::new(&frame, theme.background);
        Self { frame, theme, scene }
    }

    pub fn plot_width(&self) -> f32 {
        self.frame.plot_width()
    }

    pub fn plot_height(&self) -> f32 {
        self.frame.plot_height()
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }
}
