use super::*;
use chrono::Utc;

impl QuizApp {
    pub fn refrescar_quizzes(&mut self) {
        self.quizzes = self.store.list();
    }

    /// Guarda el borrador del creador. Los errores se muestran como alerta y
    /// el borrador se conserva.
    pub fn guardar_quiz(&mut self) -> bool {
        match self.builder.save(&mut self.store, Utc::now()) {
            Ok(quizzes) => {
                self.quizzes = quizzes;
                true
            }
            Err(err) => {
                log::warn!("no se guardó el cuestionario: {err}");
                self.alert = Some(err.to_string());
                false
            }
        }
    }

    pub fn pedir_borrado(&mut self, idx: usize) {
        self.confirm_delete = Some(idx);
    }

    pub fn cancelar_borrado(&mut self) {
        self.confirm_delete = None;
    }

    pub fn confirmar_borrado(&mut self) {
        let Some(idx) = self.confirm_delete.take() else {
            return;
        };
        match self.store.remove_at(idx) {
            Ok(quizzes) => self.quizzes = quizzes,
            Err(err) => {
                log::warn!("no se pudo borrar el cuestionario {idx}: {err}");
                self.alert = Some(err.to_string());
                self.refrescar_quizzes();
            }
        }
    }

    pub fn borrar_confirmacion_pendiente(&mut self, ctx: &egui::Context) {
        let Some(idx) = self.confirm_delete else {
            return;
        };
        let title = self
            .quizzes
            .get(idx)
            .map(|q| q.quiz_title.clone())
            .unwrap_or_default();

        egui::Window::new("Delete quiz")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Are you sure you want to delete this quiz?");
                if !title.is_empty() {
                    ui.label(egui::RichText::new(&title).strong());
                }
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        self.confirmar_borrado();
                    }
                    if ui.button("Cancel").clicked() {
                        self.cancelar_borrado();
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::app;
    use crate::model::AnswerType;

    fn draft(app: &mut crate::app::QuizApp, title: &str) {
        app.builder.title = title.into();
        let q = app.builder.add_question();
        let block = app.builder.block_mut(q).unwrap();
        block.question_text = "Capital of France?".into();
        block.set_answer_type(AnswerType::Text);
        block.expected_text = "Paris".into();
    }

    #[test]
    fn save_updates_list_and_clears_draft() {
        let mut app = app(true);
        draft(&mut app, "Geography");
        assert!(app.guardar_quiz());
        assert_eq!(app.quizzes.len(), 1);
        assert!(app.builder.blocks.is_empty());
        assert_eq!(app.quiz_rows()[0].title, "Geography");
    }

    #[test]
    fn blank_title_alerts_and_keeps_draft() {
        let mut app = app(true);
        draft(&mut app, "  ");
        assert!(!app.guardar_quiz());
        assert_eq!(app.alert.as_deref(), Some("Please enter a quiz title"));
        assert_eq!(app.builder.blocks.len(), 1);
        assert!(app.store.is_empty());
    }

    #[test]
    fn delete_needs_confirmation() {
        let mut app = app(true);
        for title in ["A", "B", "C"] {
            draft(&mut app, title);
            app.guardar_quiz();
        }

        app.pedir_borrado(1);
        assert_eq!(app.quizzes.len(), 3);
        app.cancelar_borrado();
        app.confirmar_borrado();
        assert_eq!(app.store.len(), 3);

        app.pedir_borrado(1);
        app.confirmar_borrado();
        let titles: Vec<_> = app.quizzes.iter().map(|q| q.quiz_title.as_str()).collect();
        assert_eq!(titles, ["A", "C"]);
        assert_eq!(app.confirm_delete, None);
    }

    #[test]
    fn stored_quiz_starts_with_its_own_questions() {
        let mut app = app(false);
        draft(&mut app, "Geography");
        app.guardar_quiz();
        assert!(app.empezar_quiz(Some(0)));
        let runner = app.runner.as_ref().unwrap();
        assert_eq!(runner.title, "Geography");
        assert_eq!(runner.blocks[0].text, "Capital of France?");
        assert!(!app.empezar_quiz(Some(7)));
    }
}
