use crate::QuizApp;
use crate::ui::helpers::result_fill;
use crate::ui::layout::{card, scroll_panel};
use egui::{Button, Context, RichText};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(view) = app.results_view() else {
        // sin resultado no hay nada que enseñar
        app.probar_otro_quiz();
        return;
    };

    scroll_panel(ctx, "results_scroll", 680.0, |ui| {
        let panel_width = ui.available_width();

        ui.heading("Quiz Results");
        ui.add_space(6.0);
        ui.label(RichText::new(&view.score_line).size(18.0));
        ui.add_space(12.0);

        for row in &view.rows {
            ui.push_id(row.number, |ui| {
                let fill = result_fill(ui, row.is_correct);
                card(ui, None, Some(fill), |ui| {
                    ui.label(RichText::new(format!("{}. {}", row.number, row.question)).strong());
                    ui.label(format!("Your answer: {}", row.user_answer));
                    ui.label(format!("Correct answer: {}", row.correct_answer));
                });
            });
            ui.add_space(6.0);
        }

        ui.add_space(12.0);
        if ui
            .add_sized([panel_width, 40.0], Button::new("Try Another Quiz"))
            .clicked()
        {
            app.probar_otro_quiz();
        }
    });
}
