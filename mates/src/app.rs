//! Application host
//!
//! Owns the navigator and the single active scene.  Scene swaps happen
//! synchronously on the UI thread once the frame's UI code has finished;
//! the replaced scene is dropped, taking all of its state with it.

use egui::{ColorImage, Context};
use matecore::{Navigator, RepaintController, Scene, SceneId};

use crate::scenes::{PrimaryScene, SecondaryScene};

pub struct MatesApp {
    navigator: Navigator,
    scene: Box<dyn Scene>,
    /// Decoded landing image, kept so re-entering the primary scene can
    /// rebuild its texture.
    portada: ColorImage,
    repaint: RepaintController,
}

impl MatesApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, portada: ColorImage) -> Self {
        Self {
            navigator: Navigator::new(SceneId::Primary),
            scene: Box::new(PrimaryScene::new(portada.clone())),
            portada,
            repaint: RepaintController::new(),
        }
    }

    /// Construct a fresh scene for `id`.
    fn build_scene(&self, id: SceneId) -> Box<dyn Scene> {
        match id {
            SceneId::Primary => Box::new(PrimaryScene::new(self.portada.clone())),
            SceneId::Secondary => Box::new(SecondaryScene::new()),
        }
    }
}

impl eframe::App for MatesApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame();

        self.scene.ui(ctx, &mut self.navigator);

        if let Some(next) = self.navigator.take_pending() {
            self.scene = self.build_scene(next);
            // The new scene has not painted yet.
            self.repaint.mark_needs_repaint();
        }

        self.repaint.end_frame(ctx);
    }
}
