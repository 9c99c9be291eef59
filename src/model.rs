use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tipo de respuesta de una pregunta. Los nombres serializados son los del
/// formato guardado (`text`, `radio`, `checkbox`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnswerType {
    #[default]
    Text,
    #[serde(rename = "radio")]
    SingleChoice,
    #[serde(rename = "checkbox")]
    MultiChoice,
}

impl AnswerType {
    pub const ALL: [AnswerType; 3] = [
        AnswerType::Text,
        AnswerType::SingleChoice,
        AnswerType::MultiChoice,
    ];

    pub fn is_choice(self) -> bool {
        matches!(self, AnswerType::SingleChoice | AnswerType::MultiChoice)
    }

    pub fn label(self) -> &'static str {
        match self {
            AnswerType::Text => "Text Answer",
            AnswerType::SingleChoice => "Single Choice",
            AnswerType::MultiChoice => "Multiple Choice",
        }
    }
}

/// Valor de respuesta: escalar para texto/opción única, lista para multiopción.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AnswerValue {
    One(String),
    Many(Vec<String>),
}

impl AnswerValue {
    /// Forma escalar (una lista se queda con su primer elemento).
    pub fn as_scalar(&self) -> &str {
        match self {
            AnswerValue::One(s) => s,
            AnswerValue::Many(items) => items.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// Forma de lista (un escalar se convierte en lista de un elemento).
    pub fn to_list(&self) -> Vec<String> {
        match self {
            AnswerValue::One(s) => vec![s.clone()],
            AnswerValue::Many(items) => items.clone(),
        }
    }

    /// Texto para mostrar en resultados; las listas se unen con ", ".
    pub fn display(&self) -> String {
        match self {
            AnswerValue::One(s) => s.clone(),
            AnswerValue::Many(items) => items.join(", "),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question_text: String,
    pub answer_type: AnswerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<AnswerValue>,
    #[serde(default)]
    pub required: bool,
}

impl QuizQuestion {
    pub fn options(&self) -> &[String] {
        self.answer_options.as_deref().unwrap_or(&[])
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub quiz_title: String,
    pub questions: Vec<QuizQuestion>,
    pub created_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question: String,
    pub user_answer: AnswerValue,
    pub correct_answer: AnswerValue,
    pub is_correct: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub question_results: Vec<QuestionResult>,
}

impl QuizResult {
    /// Porcentaje redondeado; 0 si no hay preguntas.
    pub fn percent(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        (self.correct_answers as f64 / self.total_questions as f64 * 100.0).round() as u32
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Identity,
    Builder,
    Quiz,
    Results,
}
