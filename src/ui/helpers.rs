// src/ui/helpers.rs
use crate::runner::Feedback;
use egui::{Color32, RichText, Ui};

pub const ERROR_RED: Color32 = Color32::from_rgb(220, 38, 38);
pub const OK_GREEN: Color32 = Color32::from_rgb(22, 163, 74);

/// Fondo de un resultado según sea correcto o no.
pub fn result_fill(ui: &Ui, is_correct: bool) -> Color32 {
    let dark = ui.visuals().dark_mode;
    match (is_correct, dark) {
        (true, false) => Color32::from_rgb(220, 252, 231),
        (false, false) => Color32::from_rgb(254, 226, 226),
        (true, true) => Color32::from_rgb(20, 83, 45),
        (false, true) => Color32::from_rgb(127, 29, 29),
    }
}

/// Campo de texto con su etiqueta de error debajo (solo si `invalid`).
pub fn labeled_input(ui: &mut Ui, label: &str, value: &mut String, invalid: bool, error: &str) {
    ui.label(label);
    let mut edit = egui::TextEdit::singleline(value).desired_width(f32::INFINITY);
    if invalid {
        edit = edit.text_color(ERROR_RED);
    }
    ui.add(edit);
    if invalid {
        ui.label(RichText::new(error).color(ERROR_RED).small());
    }
    ui.add_space(6.0);
}

pub fn required_badge(ui: &mut Ui) {
    ui.label(RichText::new("*Required").color(ERROR_RED).small());
}

pub fn feedback_label(ui: &mut Ui, feedback: Feedback) {
    let Some(text) = feedback.message() else {
        return;
    };
    let color = if feedback.is_warning() { ERROR_RED } else { OK_GREEN };
    ui.label(RichText::new(text).color(color));
}
