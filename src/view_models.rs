// src/view_models.rs

use crate::model::{Quiz, QuizResult};

#[derive(Clone, Debug, PartialEq)]
pub struct QuizListRow {
    pub idx: usize,
    pub title: String,
    pub created: String,
    pub question_count: usize,
}

impl QuizListRow {
    pub fn from_quiz(idx: usize, quiz: &Quiz) -> Self {
        Self {
            idx,
            title: quiz.quiz_title.clone(),
            created: quiz.created_date.format("%d/%m/%Y").to_string(),
            question_count: quiz.questions.len(),
        }
    }

    pub fn created_label(&self) -> String {
        format!("Created: {}", self.created)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub number: usize,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsView {
    pub score_line: String,
    pub rows: Vec<ResultRow>,
}

impl ResultsView {
    pub fn from_result(result: &QuizResult) -> Self {
        let score_line = format!(
            "Score: {} out of {} ({}%)",
            result.correct_answers,
            result.total_questions,
            result.percent()
        );
        let rows = result
            .question_results
            .iter()
            .enumerate()
            .map(|(i, r)| ResultRow {
                number: i + 1,
                question: r.question.clone(),
                user_answer: r.user_answer.display(),
                correct_answer: r.correct_answer.display(),
                is_correct: r.is_correct,
            })
            .collect();
        Self { score_line, rows }
    }
}

/// Texto de la barra de estado.
pub fn saved_count_label(count: usize) -> String {
    match count {
        0 => "No saved quizzes".to_owned(),
        1 => "1 saved quiz".to_owned(),
        n => format!("{n} saved quizzes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerValue, QuestionResult};
    use chrono::{TimeZone, Utc};

    #[test]
    fn results_view_formats_score_and_lists() {
        let result = QuizResult {
            total_questions: 2,
            correct_answers: 1,
            question_results: vec![
                QuestionResult {
                    question: "Select prime numbers".into(),
                    user_answer: AnswerValue::Many(vec!["2".into(), "3".into()]),
                    correct_answer: AnswerValue::Many(vec!["2".into(), "3".into()]),
                    is_correct: true,
                },
                QuestionResult {
                    question: "What is 5+2?".into(),
                    user_answer: AnswerValue::One("5".into()),
                    correct_answer: AnswerValue::One("7".into()),
                    is_correct: false,
                },
            ],
        };
        let view = ResultsView::from_result(&result);
        assert_eq!(view.score_line, "Score: 1 out of 2 (50%)");
        assert_eq!(view.rows[0].user_answer, "2, 3");
        assert_eq!(view.rows[1].number, 2);
        assert!(!view.rows[1].is_correct);
    }

    #[test]
    fn list_row_shows_creation_day() {
        let quiz = Quiz {
            quiz_title: "History".into(),
            questions: vec![],
            created_date: Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap(),
        };
        let row = QuizListRow::from_quiz(4, &quiz);
        assert_eq!(row.created_label(), "Created: 09/03/2024");
        assert_eq!(row.idx, 4);
    }

    #[test]
    fn saved_count_is_pluralized() {
        assert_eq!(saved_count_label(0), "No saved quizzes");
        assert_eq!(saved_count_label(1), "1 saved quiz");
        assert_eq!(saved_count_label(3), "3 saved quizzes");
    }
}
