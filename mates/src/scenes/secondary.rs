//! Secondary scene — integer arithmetic
//!
//! Two operand fields, an operator dropdown, and a result label.  The
//! result recomputes on every keystroke, on operator changes, and on
//! Enter in either field; every failure mode displays `"NaN"`.

use egui::{Context, Key, RichText};
use matecore::{Navigator, Scene, SceneId};

use crate::calc::{self, Operator};

pub struct SecondaryScene {
    /// Raw operand text; reparsed on every recompute.
    input_a: String,
    input_b: String,
    operator: Operator,
    /// Result display; empty until the first qualifying change.
    result: String,
}

impl SecondaryScene {
    pub fn new() -> Self {
        Self {
            input_a: String::new(),
            input_b: String::new(),
            operator: Operator::default(),
            result: String::new(),
        }
    }

    fn recompute(&mut self) {
        self.result = calc::compute_display(&self.input_a, &self.input_b, self.operator);
    }
}

impl Scene for SecondaryScene {
    fn id(&self) -> SceneId {
        SceneId::Secondary
    }

    fn ui(&mut self, ctx: &Context, _nav: &mut Navigator) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Operaciones");
            ui.add_space(8.0);

            let mut changed = false;

            let (resp_a, resp_b) = ui
                .horizontal(|ui| {
                    let resp_a = ui.add(
                        egui::TextEdit::singleline(&mut self.input_a)
                            .desired_width(72.0)
                            .hint_text("operando 1"),
                    );

                    let before = self.operator;
                    egui::ComboBox::from_id_source("operador")
                        .selected_text(self.operator.symbol())
                        .width(48.0)
                        .show_ui(ui, |ui| {
                            for op in Operator::ALL {
                                ui.selectable_value(&mut self.operator, op, op.symbol());
                            }
                        });
                    changed |= self.operator != before;

                    let resp_b = ui.add(
                        egui::TextEdit::singleline(&mut self.input_b)
                            .desired_width(72.0)
                            .hint_text("operando 2"),
                    );

                    ui.label("=");
                    ui.label(RichText::new(&self.result).strong());

                    (resp_a, resp_b)
                })
                .inner;

            changed |= resp_a.changed() || resp_b.changed();

            // Enter in either field counts as explicit submission.
            let enter = ui.input(|i| i.key_pressed(Key::Enter));
            let submitted = enter && (resp_a.lost_focus() || resp_b.lost_focus());

            if changed || submitted {
                self.recompute();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_scene_defaults() {
        let scene = SecondaryScene::new();
        assert!(scene.input_a.is_empty());
        assert!(scene.input_b.is_empty());
        assert_eq!(scene.operator, Operator::Add);
        // Nothing shown until the first edit.
        assert_eq!(scene.result, "");
    }

    #[test]
    fn recompute_with_empty_operands_is_nan() {
        let mut scene = SecondaryScene::new();
        scene.recompute();
        assert_eq!(scene.result, "NaN");
    }

    #[test]
    fn recompute_uses_current_operator() {
        let mut scene = SecondaryScene::new();
        scene.input_a = "6".to_string();
        scene.input_b = "3".to_string();
        scene.operator = Operator::Divide;
        scene.recompute();
        assert_eq!(scene.result, "2");

        scene.input_b = "0".to_string();
        scene.recompute();
        assert_eq!(scene.result, "NaN");
    }
}
