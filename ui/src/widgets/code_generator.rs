//! The code generator widget.
//!
//! Lays out the mode tabs, the input for the active mode, the symbol preview,
//! the inline error and the download button. Every user interaction and
//! every measured container resize is turned into a [`GeneratorEvent`] and
//! dispatched to the generator, which re-renders synchronously.

use codegen_business::{GeneratorEvent, Mode};
use egui::{Button, Frame, Image, Response, Stroke, TextEdit, Ui, Vec2};

use crate::state::State;
use crate::utils::colors::{COLOR_BORDER, COLOR_RED};

/// Vertical gap between the sections of the widget.
const SECTION_SPACING: f32 = 12.0;

pub fn code_generator(ui: &mut Ui, state: &mut State) -> Response {
    ui.vertical(|ui| {
        ui.vertical_centered(|ui| ui.heading("Code Generator"));
        ui.add_space(SECTION_SPACING);

        mode_tabs(ui, state);
        ui.add_space(SECTION_SPACING);

        value_input(ui, state);
        ui.add_space(SECTION_SPACING);

        preview(ui, state);
        error_message(ui, state);
        ui.add_space(SECTION_SPACING);

        download_button(ui, state)
    })
    .inner
}

fn mode_tabs(ui: &mut Ui, state: &mut State) {
    let active = state.generator.mode();
    ui.horizontal(|ui| {
        for mode in Mode::ALL {
            let clicked = ui
                .selectable_label(active == mode, mode.tab_label())
                .clicked();
            if clicked && active != mode {
                state.generator.dispatch(GeneratorEvent::ModeSelected(mode));
            }
        }
    });
}

fn value_input(ui: &mut Ui, state: &mut State) {
    let mode = state.generator.mode();
    let config = state.generator.config();
    let (label, hint) = match mode {
        Mode::Qr => ("Enter URL or text", config.qr_default.clone()),
        Mode::Barcode => (
            "Enter barcode value (min 3 characters)",
            config.barcode_default.clone(),
        ),
    };

    ui.label(label);
    let mut value = state.generator.inputs().value(mode).to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut value)
            .id_salt(mode)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );

    if response.changed() {
        let event = match mode {
            Mode::Qr => GeneratorEvent::QrValueChanged(value),
            Mode::Barcode => GeneratorEvent::BarcodeValueChanged(value),
        };
        state.generator.dispatch(event);
    }
}

fn preview(ui: &mut Ui, state: &mut State) {
    if let Some(width) = state.resize.observe(ui.available_width()) {
        state
            .generator
            .dispatch(GeneratorEvent::ContainerResized(width));
    }

    let Some(snapshot) = state.generator.snapshot() else {
        return;
    };
    let texture = state.preview.sync(ui.ctx(), snapshot);
    let size = Vec2::from(snapshot.display_size);

    ui.vertical_centered(|ui| {
        Frame::NONE
            .stroke(Stroke::new(1.0, COLOR_BORDER))
            .corner_radius(8)
            .show(ui, |ui| {
                ui.add(Image::new(&texture).fit_to_exact_size(size));
            });
    });
}

fn error_message(ui: &mut Ui, state: &State) {
    if let Some(err) = state.generator.error() {
        ui.add_space(SECTION_SPACING);
        ui.colored_label(COLOR_RED, err.to_string());
    }
}

fn download_button(ui: &mut Ui, state: &State) -> Response {
    let mode = state.generator.mode();
    let download = state.generator.export();

    let button =
        Button::new(mode.download_label()).min_size(Vec2::new(ui.available_width(), 0.0));
    let response = ui.add_enabled(download.is_some(), button);

    if response.clicked()
        && let Some(download) = download
        && let Err(err) = state.download.download(&download)
    {
        log::error!("Failed to save {}: {err:#}", download.file_name);
    }
    response
}

#[cfg(test)]
mod code_generator_widget_test {
    use codegen_business::{GeneratorEvent, Mode, RenderStatus};
    use egui::accesskit::Role;
    use kittest::{NodeT as _, Queryable};

    use crate::test_utils::TestCtx;

    #[test]
    fn test_default_qr_is_rendered_on_first_frames() {
        let mut ctx = TestCtx::new(|ui, state| {
            super::code_generator(ui, state);
        });
        ctx.settle();

        let harness = ctx.harness_mut();
        assert!(harness.query_by_label("Code Generator").is_some());
        assert!(harness.query_by_label("Enter URL or text").is_some());
        assert!(harness.query_by_label("Download QR Code").is_some());

        let state = harness.state();
        assert_eq!(state.generator.status(), RenderStatus::Valid);
        assert_eq!(
            state.preview.revision(),
            state.generator.snapshot().map(|s| s.revision),
            "preview texture should show the latest snapshot"
        );
        assert_eq!(
            state.generator.snapshot().map(|s| s.display_size),
            Some([300.0, 300.0])
        );
    }

    #[test]
    fn test_barcode_tab_switches_mode() {
        let mut ctx = TestCtx::new(|ui, state| {
            super::code_generator(ui, state);
        });
        ctx.settle();

        ctx.harness_mut().get_by_label("Barcode").click();
        ctx.settle();

        let harness = ctx.harness_mut();
        assert_eq!(harness.state().generator.mode(), Mode::Barcode);
        assert!(
            harness
                .query_by_label("Enter barcode value (min 3 characters)")
                .is_some()
        );
        assert!(harness.query_by_label("Download Barcode").is_some());
        assert_eq!(harness.state().generator.qr_value(), "https://example.com");
    }

    #[test]
    fn test_download_click_saves_active_mode() {
        let mut ctx = TestCtx::new(|ui, state| {
            super::code_generator(ui, state);
        });
        ctx.settle();

        ctx.harness_mut().get_by_label("Download QR Code").click();
        ctx.settle();

        assert_eq!(ctx.downloads(), vec!["qrcode.png"]);
    }

    #[test]
    fn test_short_barcode_shows_error_and_blocks_download() {
        let mut ctx = TestCtx::new(|ui, state| {
            super::code_generator(ui, state);
        });
        ctx.settle();

        {
            let state = ctx.harness_mut().state_mut();
            state
                .generator
                .dispatch(GeneratorEvent::ModeSelected(Mode::Barcode));
            state
                .generator
                .dispatch(GeneratorEvent::BarcodeValueChanged("12".to_owned()));
        }
        ctx.settle();

        let harness = ctx.harness_mut();
        assert!(
            harness
                .query_by_label("Barcode value must be at least 3 characters long")
                .is_some(),
            "validation error should be shown inline"
        );

        harness.get_by_label("Download Barcode").click();
        ctx.settle();
        assert!(
            ctx.downloads().is_empty(),
            "disabled download button must not save anything"
        );
    }

    fn press_backspace(ctx: &mut TestCtx<'_>, times: usize) {
        for _ in 0..times {
            ctx.harness_mut().key_press(egui::Key::Backspace);
        }
        ctx.settle();
    }

    fn focus_value_input(ctx: &mut TestCtx<'_>) {
        ctx.harness_mut().get_by_role(Role::TextInput).focus();
        ctx.settle();
    }

    #[test]
    fn test_typing_rerenders_qr_code() {
        let mut ctx = TestCtx::new(|ui, state| {
            super::code_generator(ui, state);
        });
        ctx.settle();
        let revision = ctx
            .harness_mut()
            .state()
            .generator
            .snapshot()
            .map(|s| s.revision);

        focus_value_input(&mut ctx);
        ctx.harness_mut()
            .get_by_role(Role::TextInput)
            .type_text("/docs");
        ctx.settle();

        let generator = &ctx.harness_mut().state().generator;
        assert_eq!(generator.qr_value(), "https://example.com/docs");
        assert_eq!(generator.barcode_value(), "1234567890");
        assert_eq!(generator.status(), RenderStatus::Valid);
        assert_ne!(
            generator.snapshot().map(|s| s.revision),
            revision,
            "typing should produce a new render"
        );
    }

    #[test]
    fn test_clearing_qr_text_still_renders() {
        let mut ctx = TestCtx::new(|ui, state| {
            super::code_generator(ui, state);
        });
        ctx.settle();

        focus_value_input(&mut ctx);
        press_backspace(&mut ctx, "https://example.com".len());

        let generator = &ctx.harness_mut().state().generator;
        assert_eq!(generator.qr_value(), "");
        assert_eq!(generator.status(), RenderStatus::Valid);
        assert!(generator.error().is_none());
    }

    #[test]
    fn test_typing_short_barcode_shows_error_until_fixed() {
        let mut ctx = TestCtx::new(|ui, state| {
            super::code_generator(ui, state);
        });
        ctx.settle();
        ctx.harness_mut().get_by_label("Barcode").click();
        ctx.settle();

        focus_value_input(&mut ctx);
        press_backspace(&mut ctx, "34567890".len());

        {
            let harness = ctx.harness_mut();
            assert_eq!(harness.state().generator.barcode_value(), "12");
            assert!(
                harness
                    .query_by_label("Barcode value must be at least 3 characters long")
                    .is_some()
            );
            harness.get_by_label("Download Barcode").click();
        }
        ctx.settle();
        assert!(ctx.downloads().is_empty());

        focus_value_input(&mut ctx);
        ctx.harness_mut()
            .get_by_role(Role::TextInput)
            .type_text("3");
        ctx.settle();

        let harness = ctx.harness_mut();
        assert_eq!(harness.state().generator.barcode_value(), "123");
        assert!(
            harness
                .query_by_label("Barcode value must be at least 3 characters long")
                .is_none()
        );
        harness.get_by_label("Download Barcode").click();
        ctx.settle();
        assert_eq!(ctx.downloads(), vec!["barcode.png"]);
    }

    #[test]
    fn test_each_mode_keeps_its_own_field() {
        let mut ctx = TestCtx::new(|ui, state| {
            super::code_generator(ui, state);
        });
        ctx.settle();
        ctx.harness_mut().get_by_label("Barcode").click();
        ctx.settle();

        focus_value_input(&mut ctx);
        ctx.harness_mut()
            .get_by_role(Role::TextInput)
            .type_text("-X");
        ctx.settle();
        assert_eq!(
            ctx.harness_mut().state().generator.qr_value(),
            "https://example.com"
        );

        ctx.harness_mut().get_by_label("QR Code").click();
        ctx.settle();
        focus_value_input(&mut ctx);
        ctx.harness_mut()
            .get_by_role(Role::TextInput)
            .type_text("/a");
        ctx.settle();

        let generator = &ctx.harness_mut().state().generator;
        assert_eq!(generator.mode(), Mode::Qr);
        assert_eq!(generator.qr_value(), "https://example.com/a");
        assert_eq!(generator.barcode_value(), "1234567890-X");
        assert_eq!(generator.status(), RenderStatus::Valid);
    }
}
