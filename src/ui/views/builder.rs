use crate::QuizApp;
use crate::authoring::QuestionEditor;
use crate::model::AnswerType;
use crate::ui::helpers::ERROR_RED;
use crate::ui::layout::{card, scroll_panel, two_button_row};
use egui::{ComboBox, Context, RichText, TextEdit, Ui};

/// Acciones que cambian la colección de bloques; se aplican tras pintar.
enum BlockAction {
    AddOption(u64),
    RemoveOption(u64, u64),
    RemoveQuestion(u64),
}

pub fn ui_builder(app: &mut QuizApp, ctx: &Context) {
    scroll_panel(ctx, "builder_scroll", 680.0, |ui| {
        let panel_width = ui.available_width();

        ui.heading("✏ Create a Quiz");
        ui.add_space(10.0);
        ui.add(
            TextEdit::singleline(&mut app.builder.title)
                .hint_text("Quiz Title")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(10.0);

        let mut actions = Vec::new();
        for (pos, block) in app.builder.blocks.iter_mut().enumerate() {
            ui.push_id(block.id, |ui| {
                card(ui, None, None, |ui| {
                    ui.label(RichText::new(format!("Question {}", pos + 1)).strong());
                    question_editor(ui, block, &mut actions);
                });
            });
            ui.add_space(8.0);
        }

        for action in actions {
            match action {
                BlockAction::AddOption(block) => {
                    app.builder.add_option(block);
                }
                BlockAction::RemoveOption(block, option) => {
                    app.builder.remove_option(block, option);
                }
                BlockAction::RemoveQuestion(block) => {
                    app.builder.remove_question(block);
                }
            }
        }

        if ui.button("+ Add Question").clicked() {
            app.builder.add_question();
        }
        ui.add_space(12.0);

        let (guardar, volver) = two_button_row(ui, panel_width, "💾 Save Quiz", "🔙 Back");
        if guardar && app.guardar_quiz() {
            app.cerrar_creador();
        }
        if volver {
            app.cerrar_creador();
        }
    });
}

fn question_editor(ui: &mut Ui, block: &mut QuestionEditor, actions: &mut Vec<BlockAction>) {
    let block_id = block.id;
    ui.add(
        TextEdit::singleline(&mut block.question_text)
            .hint_text("Question Text")
            .desired_width(f32::INFINITY),
    );

    let mut answer_type = block.answer_type;
    ComboBox::from_id_salt("answer_type")
        .selected_text(answer_type.label())
        .show_ui(ui, |ui| {
            for kind in AnswerType::ALL {
                ui.selectable_value(&mut answer_type, kind, kind.label());
            }
        });
    if answer_type != block.answer_type {
        block.set_answer_type(answer_type);
    }

    if block.shows_options() {
        ui.add_space(4.0);
        for option in &mut block.options {
            ui.push_id(option.id, |ui| {
                ui.horizontal(|ui| {
                    ui.add(TextEdit::singleline(&mut option.text).hint_text("Option"));
                    if ui.button("Remove").clicked() {
                        actions.push(BlockAction::RemoveOption(block_id, option.id));
                    }
                });
            });
        }
        if ui.button("+ Add Option").clicked() {
            actions.push(BlockAction::AddOption(block_id));
        }

        ui.add_space(4.0);
        ui.label("Correct Answer:");
        let choices = block.correct_answer_choices();
        if choices.is_empty() {
            ui.label(RichText::new("Add some options first.").weak());
        }
        ui.horizontal_wrapped(|ui| {
            for choice in choices {
                let selected = block.is_correct(choice.option_id);
                let label = format!("{}. {}", choice.value + 1, choice.label);
                let clicked = ui
                    .push_id(choice.value, |ui| match block.answer_type {
                        AnswerType::MultiChoice => {
                            let mut checked = selected;
                            ui.checkbox(&mut checked, label).changed()
                        }
                        _ => ui.radio(selected, label).clicked(),
                    })
                    .inner;
                if clicked {
                    block.select_correct(choice.option_id);
                }
            }
        });
    } else {
        ui.add(
            TextEdit::singleline(&mut block.expected_text)
                .hint_text("Expected answer (optional)")
                .desired_width(f32::INFINITY),
        );
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.checkbox(&mut block.required, "Required");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let remove = egui::Button::new(RichText::new("Remove Question").color(ERROR_RED));
            if ui.add(remove).clicked() {
                actions.push(BlockAction::RemoveQuestion(block_id));
            }
        });
    });
}
