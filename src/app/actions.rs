use super::*;
use crate::grading::grade;
use crate::validation::check_submission;

pub const IDENTITY_ALERT: &str = "Please correct the highlighted errors.";

impl QuizApp {
    /// Valida la identidad y arranca el cuestionario de ejemplo (`None`) o
    /// uno guardado. Devuelve `true` si se entró al cuestionario.
    pub fn empezar_quiz(&mut self, quiz_idx: Option<usize>) -> bool {
        match self.identity.validate() {
            Ok(()) => self.identity_errors = IdentityErrors::default(),
            Err(errors) => {
                self.identity_errors = errors;
                if self.config.strict_identity {
                    self.alert = Some(IDENTITY_ALERT.to_owned());
                    return false;
                }
                // modo relajado: se marcan los campos pero se deja pasar
                log::debug!("identidad con errores, se continúa en modo relajado");
            }
        }

        if let Some(idx) = quiz_idx.filter(|idx| *idx >= self.quizzes.len()) {
            log::warn!("no existe el cuestionario {idx}");
            self.refrescar_quizzes();
            return false;
        }

        let runner = QuizRunner::load(quiz_idx.and_then(|idx| self.quizzes.get(idx)));
        log::info!("{} empieza '{}'", self.greeting(), runner.title);
        self.runner = Some(runner);
        self.result = None;
        self.notices = Notices::default();
        self.state = AppState::Quiz;
        true
    }

    /// Envío único: si la validación falla se apila un aviso; si pasa se
    /// corrige y se pasa a resultados.
    pub fn enviar_quiz(&mut self, now: f64) {
        if self.result.is_some() {
            return;
        }
        let Some(runner) = self.runner.as_mut() else {
            return;
        };

        match check_submission(runner) {
            Ok(()) => {
                let result = grade(runner);
                log::info!(
                    "'{}' corregido: {}/{}",
                    runner.title,
                    result.correct_answers,
                    result.total_questions
                );
                self.result = Some(result);
                self.state = AppState::Results;
            }
            Err(rejection) => {
                log::debug!("envío rechazado: {rejection:?}");
                self.notices.push_rejection(&rejection, now);
            }
        }
    }

    /// Descarta la sesión y vuelve al formulario. Los guardados no se tocan.
    pub fn probar_otro_quiz(&mut self) {
        self.runner = None;
        self.result = None;
        self.notices = Notices::default();
        self.state = AppState::Identity;
        self.refrescar_quizzes();
    }

    pub fn abrir_creador(&mut self) {
        self.state = AppState::Builder;
    }

    pub fn cerrar_creador(&mut self) {
        self.state = AppState::Identity;
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::app;
    use crate::model::AppState;
    use crate::notices::NoticeKind;

    fn fill_identity(app: &mut crate::app::QuizApp) {
        app.identity.first_name = "Grace".into();
        app.identity.last_name = "Hopper".into();
        app.identity.email = "grace@navy.mil".into();
    }

    #[test]
    fn strict_mode_blocks_bad_identity() {
        let mut app = app(true);
        app.identity.first_name = "Gr4ce".into();
        assert!(!app.empezar_quiz(None));
        assert_eq!(app.state, AppState::Identity);
        assert_eq!(app.alert.as_deref(), Some("Please correct the highlighted errors."));
        assert!(app.identity_errors.first_name);
        assert!(app.runner.is_none());
    }

    #[test]
    fn relaxed_mode_flags_but_enters() {
        let mut app = app(false);
        app.identity.email = "nope".into();
        assert!(app.empezar_quiz(None));
        assert_eq!(app.state, AppState::Quiz);
        assert!(app.identity_errors.email);
        assert_eq!(app.alert, None);
    }

    #[test]
    fn valid_identity_loads_default_quiz_and_greets() {
        let mut app = app(true);
        fill_identity(&mut app);
        assert!(app.empezar_quiz(None));
        assert_eq!(app.greeting(), "Grace Hopper");
        let runner = app.runner.as_ref().unwrap();
        assert_eq!(runner.title, "Sample Quiz");
        assert_eq!(runner.blocks.len(), 5);
    }

    #[test]
    fn rejected_submit_stacks_notices_and_stays() {
        let mut app = app(true);
        fill_identity(&mut app);
        app.empezar_quiz(None);
        app.enviar_quiz(1.0);
        app.enviar_quiz(2.0);
        assert_eq!(app.state, AppState::Quiz);
        assert!(app.result.is_none());
        let active = app.notices.active(2.5);
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].kind, NoticeKind::RequiredMissing);
    }

    #[test]
    fn accepted_submit_grades_once() {
        let mut app = app(true);
        fill_identity(&mut app);
        app.empezar_quiz(None);
        let runner = app.runner.as_mut().unwrap();
        runner.select_option(0, 1);
        runner.set_checked(1, 0, true);
        runner.set_checked(1, 1, true);

        app.enviar_quiz(0.0);
        assert_eq!(app.state, AppState::Results);
        let view = app.results_view().unwrap();
        assert_eq!(view.score_line, "Score: 2 out of 5 (40%)");

        // un segundo envío no vuelve a corregir
        app.runner.as_mut().unwrap().select_option(3, 0);
        app.enviar_quiz(1.0);
        assert_eq!(app.result.as_ref().unwrap().correct_answers, 2);
    }

    #[test]
    fn try_another_quiz_returns_to_form() {
        let mut app = app(true);
        fill_identity(&mut app);
        app.empezar_quiz(None);
        app.probar_otro_quiz();
        assert_eq!(app.state, AppState::Identity);
        assert!(app.runner.is_none());
        assert!(app.result.is_none());
        assert_eq!(app.identity.first_name, "Grace");
    }
}
