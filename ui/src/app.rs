use bon::Builder;

use crate::{state::State, widgets};

/// Widest the generator card grows, in logical pixels.
const CARD_MAX_WIDTH: f32 = 448.0;

#[derive(Builder, Default)]
pub struct CodeGenApp {
    #[builder(default)]
    pub state: State,
}

impl eframe::App for CodeGenApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(CARD_MAX_WIDTH);
                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::same(24))
                    .show(ui, |ui| {
                        widgets::code_generator(ui, &mut self.state);
                    });
            });
        });
    }
}
