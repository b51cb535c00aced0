//! Primary scene — landing screen
//!
//! Shows the bundled image scaled to the window, a status label with the
//! current container size, and the button that switches to the
//! arithmetic scene.  The container size is read fresh every frame, so
//! resizes take effect immediately with no debouncing.

use egui::load::SizedTexture;
use egui::{ColorImage, Context, TextureHandle, TextureOptions, Vec2};
use matecore::{Navigator, Scene, SceneId};

/// Fixed margin kept between the image and the container edge.
const IMAGE_MARGIN: f32 = 40.0;

pub struct PrimaryScene {
    /// Decoded source pixels; uploaded as a texture on the first frame.
    source: ColorImage,
    texture: Option<TextureHandle>,
}

impl PrimaryScene {
    pub fn new(source: ColorImage) -> Self {
        Self {
            source,
            texture: None,
        }
    }
}

impl Scene for PrimaryScene {
    fn id(&self) -> SceneId {
        SceneId::Primary
    }

    fn ui(&mut self, ctx: &Context, nav: &mut Navigator) {
        let source = &self.source;
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture("portada", source.clone(), TextureOptions::LINEAR)
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let container = ui.available_size();

            ui.vertical_centered(|ui| {
                ui.label(status_text(container.x, container.y));
                ui.add_space(4.0);

                // Height-only constraint; width follows the aspect ratio.
                let size = fitted_size(texture.size_vec2(), container.y)
                    .unwrap_or_else(|| texture.size_vec2());
                ui.image(SizedTexture::new(texture.id(), size));

                ui.add_space(8.0);
                if ui.button("Ir a operaciones").clicked() {
                    nav.request(SceneId::Secondary);
                }
            });
        });
    }
}

/// Status line reporting the container dimensions.
fn status_text(width: f32, height: f32) -> String {
    format!(
        "Tamaño de ventana: {}-{}",
        width.round() as i32,
        height.round() as i32
    )
}

/// Rendered image size for a container of the given height.
///
/// The image is drawn `IMAGE_MARGIN` shorter than the container, aspect
/// ratio preserved.  A non-positive container height yields `None` and
/// the image keeps its natural size.
fn fitted_size(image_size: Vec2, container_height: f32) -> Option<Vec2> {
    if container_height <= 0.0 {
        return None;
    }
    let height = (container_height - IMAGE_MARGIN).max(0.0);
    let width = height * image_size.x / image_size.y;
    Some(Vec2::new(width, height))
}
