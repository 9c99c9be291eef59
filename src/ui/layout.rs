use crate::QuizApp;
use crate::view_models::saved_count_label;
use egui::{Align2, Button, CentralPanel, Color32, Context, Frame, ScrollArea, Ui};
use std::time::Duration;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if let Some(runner) = &app.runner {
                ui.strong(runner.title.as_str());
                ui.separator();
            }
            ui.label(format!("👤 {}", app.greeting()));
        });
    });
}

/// Barra inferior: cuántos cuestionarios hay guardados y el selector de tema.
pub fn bottom_panel(app: &QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(saved_count_label(app.quizzes.len()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::widgets::global_theme_preference_switch(ui);
            });
        });
    });
}

/// Panel con scroll vertical, centrado horizontalmente y con ancho máximo.
pub fn scroll_panel(ctx: &Context, id: &str, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .id_salt(id)
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                let side = ((ui.available_width() - w) / 2.0).max(0.0);
                ui.horizontal(|ui| {
                    ui.add_space(side);
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(egui::Margin::symmetric(16, 16))
                        .show(ui, |ui| {
                            ui.set_width((w - 32.0).max(0.0));
                            ui.vertical(|ui| inner(ui));
                        });
                });
            });
    });
}

/// Tarjeta de un bloque (pregunta, resultado…), con borde de color opcional.
pub fn card(ui: &mut Ui, accent: Option<Color32>, fill: Option<Color32>, inner: impl FnOnce(&mut Ui)) {
    let stroke_color = accent.unwrap_or(ui.visuals().widgets.noninteractive.bg_stroke.color);
    Frame::group(ui.style())
        .stroke(egui::Stroke::new(if accent.is_some() { 2.0 } else { 1.0 }, stroke_color))
        .fill(fill.unwrap_or(ui.visuals().extreme_bg_color))
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui);
        });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}

/// Avisos temporales en la esquina superior derecha. Pide repintado para el
/// momento en que caduca el siguiente, así desaparecen sin interacción.
pub fn notice_overlay(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    let active = app.notices.active(now);
    if active.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("notice_overlay"))
        .anchor(Align2::RIGHT_TOP, [-16.0, 48.0])
        .show(ctx, |ui| {
            for notice in active {
                Frame::popup(ui.style())
                    .fill(Color32::from_rgb(185, 28, 28))
                    .show(ui, |ui| {
                        ui.colored_label(Color32::WHITE, notice.text.as_str());
                    });
                ui.add_space(6.0);
            }
        });

    if let Some(secs) = app.notices.next_expiry_in(now) {
        ctx.request_repaint_after(Duration::from_secs_f64(secs));
    }
}

/// Alerta modal: bloquea la acción hasta que se acepta.
pub fn alert_window(app: &mut QuizApp, ctx: &Context) {
    let Some(text) = app.alert.clone() else {
        return;
    };
    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(text);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                app.dismiss_alert();
            }
        });
}
