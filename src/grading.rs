// src/grading.rs

use crate::model::{AnswerType, AnswerValue, QuestionResult, QuizResult};
use crate::runner::{QuestionBlock, QuizRunner};

/// Corrige el estado actual del cuestionario. No modifica nada: dos llamadas
/// seguidas sobre el mismo estado dan el mismo resultado.
pub fn grade(runner: &QuizRunner) -> QuizResult {
    let question_results: Vec<QuestionResult> = runner
        .blocks
        .iter()
        .map(|block| {
            let entry = runner.grading().entry(block.id);
            let answer_type = entry.map(|e| e.answer_type).unwrap_or_default();
            let correct = entry.and_then(|e| e.correct_answer.as_ref());
            grade_block(block, answer_type, correct)
        })
        .collect();

    QuizResult {
        total_questions: question_results.len(),
        correct_answers: question_results.iter().filter(|r| r.is_correct).count(),
        question_results,
    }
}

fn grade_block(
    block: &QuestionBlock,
    answer_type: AnswerType,
    correct: Option<&AnswerValue>,
) -> QuestionResult {
    let user_answer = block.user_answer();
    let (is_correct, correct_answer) = match answer_type {
        AnswerType::SingleChoice => {
            let expected = correct.map(AnswerValue::as_scalar).unwrap_or("");
            // sin selección nunca es correcta
            let ok = block.is_answered() && user_answer.as_scalar() == expected;
            (ok, AnswerValue::One(expected.to_owned()))
        }
        AnswerType::MultiChoice => {
            let expected = correct.map(AnswerValue::to_list).unwrap_or_default();
            let selected = user_answer.to_list();
            let ok = selected.len() == expected.len()
                && selected.iter().all(|value| expected.contains(value));
            (ok, AnswerValue::Many(expected))
        }
        AnswerType::Text => match correct {
            Some(value) => {
                let expected = value.as_scalar();
                let ok = contains_ignore_case(user_answer.as_scalar(), expected);
                (ok, AnswerValue::One(expected.to_owned()))
            }
            None => (false, AnswerValue::One(String::new())),
        },
    };

    QuestionResult {
        question: block.text.clone(),
        user_answer,
        correct_answer,
        is_correct,
    }
}

/// Corrección indulgente: basta con que la respuesta contenga la esperada.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Quiz, QuizQuestion};
    use chrono::Utc;

    fn text_quiz(correct: Option<&str>) -> QuizRunner {
        let quiz = Quiz {
            quiz_title: "Physics".into(),
            questions: vec![QuizQuestion {
                question_text: "What keeps us on the ground?".into(),
                answer_type: AnswerType::Text,
                answer_options: None,
                correct_answer: correct.map(|c| AnswerValue::One(c.into())),
                required: false,
            }],
            created_date: Utc::now(),
        };
        QuizRunner::load(Some(&quiz))
    }

    #[test]
    fn default_quiz_end_to_end_scores_two_of_five() {
        let mut runner = QuizRunner::load(None);
        runner.select_option(0, 1); // "4"
        runner.set_checked(1, 0, true); // "2"
        runner.set_checked(1, 1, true); // "3"
        assert!(crate::validation::check_submission(&mut runner).is_ok());

        let result = grade(&runner);
        assert_eq!(result.total_questions, 5);
        assert_eq!(result.correct_answers, 2);
        assert!(result.question_results[0].is_correct);
        assert!(result.question_results[1].is_correct);
        assert!(!result.question_results[3].is_correct);
        assert_eq!(result.percent(), 40);
    }

    #[test]
    fn grading_twice_gives_the_same_result() {
        let mut runner = QuizRunner::load(None);
        runner.select_option(0, 0);
        runner.set_text(2, "Apples fall down");
        assert_eq!(grade(&runner), grade(&runner));
    }

    #[test]
    fn multi_choice_ignores_selection_order() {
        let mut forward = QuizRunner::load(None);
        forward.set_checked(1, 0, true);
        forward.set_checked(1, 1, true);
        let mut backward = QuizRunner::load(None);
        backward.set_checked(1, 1, true);
        backward.set_checked(1, 0, true);
        assert!(grade(&forward).question_results[1].is_correct);
        assert!(grade(&backward).question_results[1].is_correct);
    }

    #[test]
    fn multi_choice_needs_exact_set() {
        let mut runner = QuizRunner::load(None);
        runner.set_checked(1, 0, true);
        runner.set_checked(1, 1, true);
        runner.set_checked(1, 2, true);
        let result = &grade(&runner).question_results[1];
        assert!(!result.is_correct);
        assert_eq!(
            result.user_answer,
            AnswerValue::Many(vec!["2".into(), "3".into(), "4".into()])
        );
    }

    #[test]
    fn text_is_case_insensitive_containment() {
        let mut runner = text_quiz(Some("Gravity"));
        runner.set_text(0, "well... gravity is a force that pulls");
        assert!(grade(&runner).question_results[0].is_correct);

        runner.set_text(0, "magnets");
        assert!(!grade(&runner).question_results[0].is_correct);
    }

    #[test]
    fn text_without_correct_answer_is_always_wrong() {
        let mut runner = text_quiz(None);
        runner.set_text(0, "anything at all");
        let result = &grade(&runner).question_results[0];
        assert!(!result.is_correct);
        assert_eq!(result.correct_answer, AnswerValue::One(String::new()));
    }

    #[test]
    fn absent_correct_answer_on_choice_questions() {
        let choice = |answer_type| QuizQuestion {
            question_text: "Pick".into(),
            answer_type,
            answer_options: Some(vec!["a".into(), "b".into()]),
            correct_answer: None,
            required: false,
        };
        let quiz = Quiz {
            quiz_title: "Ungraded".into(),
            questions: vec![choice(AnswerType::SingleChoice), choice(AnswerType::MultiChoice)],
            created_date: Utc::now(),
        };
        let mut runner = QuizRunner::load(Some(&quiz));
        runner.select_option(0, 0);

        let result = grade(&runner);
        // opción única: se compara contra ""
        assert!(!result.question_results[0].is_correct);
        assert_eq!(result.question_results[0].correct_answer, AnswerValue::One(String::new()));
        // multiopción: lista vacía, así que sin marcar es correcta
        assert!(result.question_results[1].is_correct);
        assert_eq!(result.question_results[1].correct_answer, AnswerValue::Many(vec![]));
    }

    #[test]
    fn unanswered_single_choice_reports_empty_answer() {
        let runner = QuizRunner::load(None);
        let result = &grade(&runner).question_results[3];
        assert_eq!(result.user_answer, AnswerValue::One(String::new()));
        assert_eq!(result.correct_answer, AnswerValue::One("7".into()));
        assert!(!result.is_correct);
    }

    #[test]
    fn results_keep_display_order() {
        let runner = QuizRunner::load(None);
        let questions: Vec<_> = grade(&runner)
            .question_results
            .into_iter()
            .map(|r| r.question)
            .collect();
        assert_eq!(questions[0], "What is 2+2?");
        assert_eq!(questions[4], "How far is the moon from the sun?");
    }
}
