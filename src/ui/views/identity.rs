use crate::QuizApp;
use crate::ui::helpers::labeled_input;
use crate::ui::layout::{card, scroll_panel, two_button_row};
use egui::{Button, Context, RichText};

pub fn ui_identity(app: &mut QuizApp, ctx: &Context) {
    scroll_panel(ctx, "identity_scroll", 560.0, |ui| {
        let panel_width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.heading("📝 Quiz Studio");
        });
        ui.add_space(12.0);

        let errors = app.identity_errors;
        labeled_input(
            ui,
            "First name",
            &mut app.identity.first_name,
            errors.first_name,
            "Please enter a valid first name (letters only).",
        );
        labeled_input(
            ui,
            "Last name",
            &mut app.identity.last_name,
            errors.last_name,
            "Please enter a valid last name (letters only).",
        );
        labeled_input(
            ui,
            "Email",
            &mut app.identity.email,
            errors.email,
            "Please enter a valid email address.",
        );

        ui.add_space(8.0);
        let (empezar, crear) = two_button_row(ui, panel_width, "▶ Start Quiz", "✏ Create a Quiz");
        if empezar {
            app.empezar_quiz(None);
        }
        if crear {
            app.abrir_creador();
        }

        ui.add_space(18.0);
        ui.separator();
        ui.heading("Your Quizzes");
        ui.add_space(6.0);

        let rows = app.quiz_rows();
        if rows.is_empty() {
            ui.label(RichText::new("No saved quizzes yet.").italics());
        }
        for row in rows {
            ui.push_id(row.idx, |ui| {
                card(ui, None, None, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&row.title).strong());
                            ui.label(RichText::new(row.created_label()).small().weak());
                            ui.label(RichText::new(format!("{} questions", row.question_count)).small().weak());
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.add(Button::new("Delete")).clicked() {
                                app.pedir_borrado(row.idx);
                            }
                            if ui.add(Button::new("Start")).clicked() {
                                app.empezar_quiz(Some(row.idx));
                            }
                        });
                    });
                });
            });
            ui.add_space(6.0);
        }
    });
}
