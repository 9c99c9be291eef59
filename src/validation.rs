// src/validation.rs

use crate::runner::{Feedback, QuestionId, QuizRunner};

/// Mínimo de preguntas respondidas para poder enviar.
pub const MIN_ANSWERED: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionRejection {
    #[error("Please answer all required questions before submitting.")]
    RequiredUnanswered { missing: Vec<QuestionId> },
    #[error("Please answer at least two questions before submitting.")]
    TooFewAnswered { answered: usize },
}

/// Resultado del repaso de los bloques, en orden de pantalla.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub answered: Vec<QuestionId>,
    pub missing_required: Vec<QuestionId>,
}

impl ValidationReport {
    pub fn verdict(&self) -> Result<(), SubmissionRejection> {
        if !self.missing_required.is_empty() {
            return Err(SubmissionRejection::RequiredUnanswered {
                missing: self.missing_required.clone(),
            });
        }
        if self.answered.len() < MIN_ANSWERED {
            return Err(SubmissionRejection::TooFewAnswered {
                answered: self.answered.len(),
            });
        }
        Ok(())
    }
}

pub fn inspect(runner: &QuizRunner) -> ValidationReport {
    let mut report = ValidationReport::default();
    for block in &runner.blocks {
        if block.is_answered() {
            report.answered.push(block.id);
        } else if block.required && block.can_be_answered() {
            report.missing_required.push(block.id);
        }
    }
    report
}

/// Revisa el envío y refresca el feedback de cada bloque. Solo si devuelve
/// `Ok` se puede corregir.
pub fn check_submission(runner: &mut QuizRunner) -> Result<(), SubmissionRejection> {
    let report = inspect(runner);
    for block in &mut runner.blocks {
        block.feedback = if report.answered.contains(&block.id) {
            Feedback::Answered
        } else if report.missing_required.contains(&block.id) {
            Feedback::RequiredMissing
        } else {
            Feedback::Hidden
        };
    }
    report.verdict()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerType, Quiz, QuizQuestion};
    use chrono::Utc;

    #[test]
    fn required_unanswered_blocks_even_with_enough_answers() {
        let mut runner = QuizRunner::load(None);
        // Q1 obligatoria respondida, Q2 obligatoria sin responder
        runner.select_option(0, 1);
        runner.set_text(2, "stuff falls");
        runner.select_option(3, 0);
        let err = check_submission(&mut runner).unwrap_err();
        assert_eq!(err, SubmissionRejection::RequiredUnanswered { missing: vec![1] });
        assert_eq!(runner.blocks[1].feedback, Feedback::RequiredMissing);
        assert_eq!(runner.blocks[0].feedback, Feedback::Answered);
        assert_eq!(runner.blocks[4].feedback, Feedback::Hidden);
    }

    #[test]
    fn too_few_answers_blocks_even_when_required_are_done() {
        let mut runner = QuizRunner::load(None);
        for block in &mut runner.blocks {
            block.required = false;
        }
        runner.blocks[0].required = true;
        runner.select_option(0, 1);
        let err = check_submission(&mut runner).unwrap_err();
        assert_eq!(err, SubmissionRejection::TooFewAnswered { answered: 1 });
        assert_eq!(
            err.to_string(),
            "Please answer at least two questions before submitting."
        );
    }

    #[test]
    fn answering_clears_required_highlight() {
        let mut runner = QuizRunner::load(None);
        assert!(check_submission(&mut runner).is_err());
        assert_eq!(runner.blocks[1].feedback, Feedback::RequiredMissing);

        runner.set_checked(1, 0, true);
        assert_eq!(runner.blocks[1].feedback, Feedback::Recorded);
        assert!(!runner.blocks[1].feedback.is_warning());
    }

    #[test]
    fn required_choice_without_options_does_not_block() {
        let quiz = Quiz {
            quiz_title: "Unfinished".into(),
            questions: vec![
                QuizQuestion {
                    question_text: "Pick one".into(),
                    answer_type: AnswerType::SingleChoice,
                    answer_options: None,
                    correct_answer: None,
                    required: true,
                },
                QuizQuestion {
                    question_text: "Why?".into(),
                    answer_type: AnswerType::Text,
                    answer_options: None,
                    correct_answer: None,
                    required: false,
                },
                QuizQuestion {
                    question_text: "And then?".into(),
                    answer_type: AnswerType::Text,
                    answer_options: None,
                    correct_answer: None,
                    required: false,
                },
            ],
            created_date: Utc::now(),
        };
        let mut runner = QuizRunner::load(Some(&quiz));
        assert!(!runner.blocks[0].can_be_answered());
        runner.set_text(1, "because");
        runner.set_text(2, "done");
        assert!(check_submission(&mut runner).is_ok());
        assert_eq!(runner.blocks[0].feedback, Feedback::Hidden);
    }

    #[test]
    fn required_check_comes_first() {
        let mut runner = QuizRunner::load(None);
        let err = check_submission(&mut runner).unwrap_err();
        assert!(matches!(err, SubmissionRejection::RequiredUnanswered { .. }));
    }

    #[test]
    fn both_required_answered_is_enough() {
        let mut runner = QuizRunner::load(None);
        runner.select_option(0, 1);
        runner.set_checked(1, 0, true);
        assert!(check_submission(&mut runner).is_ok());
        assert_eq!(inspect(&runner).answered, vec![0, 1]);
    }
}
