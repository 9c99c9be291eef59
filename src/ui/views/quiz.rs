use crate::QuizApp;
use crate::runner::{AnswerInput, QuestionBlock};
use crate::ui::helpers::{ERROR_RED, feedback_label, required_badge};
use crate::ui::layout::{card, scroll_panel};
use egui::{Button, Context, RichText, TextEdit, Ui};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    scroll_panel(ctx, "quiz_scroll", 680.0, |ui| {
        let panel_width = ui.available_width();
        let Some(runner) = app.runner.as_mut() else {
            return;
        };

        ui.vertical_centered(|ui| {
            ui.heading(runner.title.as_str());
            ui.label(format!("Welcome, {}!", app.identity.display_name()));
        });
        ui.add_space(12.0);

        let mut changed = Vec::new();
        for block in &mut runner.blocks {
            ui.push_id(block.id, |ui| {
                let accent = block.feedback.is_warning().then_some(ERROR_RED);
                card(ui, accent, None, |ui| {
                    if question_block(ui, block) {
                        changed.push(block.id);
                    }
                });
            });
            ui.add_space(8.0);
        }
        for id in changed {
            runner.record_change(id);
        }

        ui.add_space(8.0);
        let submit = ui.add_sized([panel_width, 40.0], Button::new("Submit Quiz"));
        if submit.clicked() {
            app.enviar_quiz(now);
        }
    });
}

/// Pinta una pregunta; devuelve `true` si el usuario cambió la respuesta.
fn question_block(ui: &mut Ui, block: &mut QuestionBlock) -> bool {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(format!("{}. {}", block.number(), block.text)).strong());
        if block.required && block.can_be_answered() {
            required_badge(ui);
        }
    });
    ui.add_space(4.0);

    let mut changed = false;
    match &mut block.input {
        AnswerInput::Text(text) => {
            let edit = TextEdit::multiline(text)
                .hint_text("Your answer")
                .desired_rows(3)
                .desired_width(f32::INFINITY);
            changed = ui.add(edit).changed();
        }
        AnswerInput::Single(selected) => {
            for (i, option) in block.options.iter().enumerate() {
                if ui.radio(*selected == Some(i), option.as_str()).clicked() {
                    *selected = Some(i);
                    changed = true;
                }
            }
        }
        AnswerInput::Multi(checked) => {
            for (state, option) in checked.iter_mut().zip(&block.options) {
                changed |= ui.checkbox(state, option.as_str()).changed();
            }
        }
    }

    feedback_label(ui, block.feedback);
    changed
}
