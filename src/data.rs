// src/data.rs

use crate::model::QuizQuestion;

pub const DEFAULT_QUIZ_TITLE: &str = "Sample Quiz";

/// Carga las preguntas del cuestionario por defecto desde el YAML embebido
pub fn read_default_questions() -> Vec<QuizQuestion> {
    let file_content = include_str!("data/default_quiz.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el cuestionario por defecto")
}
