// src/runner.rs

use crate::data::{DEFAULT_QUIZ_TITLE, read_default_questions};
use crate::model::{AnswerType, AnswerValue, Quiz, QuizQuestion};
use std::collections::HashMap;

/// Posición de la pregunta en pantalla (0-based).
pub type QuestionId = usize;

/// Estado vivo de la respuesta de un bloque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerInput {
    Text(String),
    Single(Option<usize>),
    Multi(Vec<bool>),
}

/// Zona de feedback de cada bloque (oculta hasta que hay algo que decir).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    Hidden,
    Recorded,
    Answered,
    RequiredMissing,
}

impl Feedback {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Feedback::Hidden => None,
            Feedback::Recorded => Some("✓ Answer recorded"),
            Feedback::Answered => Some("✓ Question answered"),
            Feedback::RequiredMissing => Some("⚠ This question is required"),
        }
    }

    pub fn is_warning(self) -> bool {
        self == Feedback::RequiredMissing
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBlock {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub required: bool,
    pub input: AnswerInput,
    pub feedback: Feedback,
}

impl QuestionBlock {
    /// Número "humano" (1, 2, 3…)
    pub fn number(&self) -> usize {
        self.id + 1
    }

    pub fn is_answered(&self) -> bool {
        match &self.input {
            AnswerInput::Text(text) => !text.trim().is_empty(),
            AnswerInput::Single(selected) => selected.is_some(),
            AnswerInput::Multi(checked) => checked.iter().any(|c| *c),
        }
    }

    /// Una pregunta de opciones sin opciones no admite respuesta.
    pub fn can_be_answered(&self) -> bool {
        !matches!(self.input, AnswerInput::Single(_) | AnswerInput::Multi(_)) || !self.options.is_empty()
    }

    /// Respuesta del usuario tal como se compara y se muestra.
    pub fn user_answer(&self) -> AnswerValue {
        match &self.input {
            AnswerInput::Text(text) => AnswerValue::One(text.clone()),
            AnswerInput::Single(selected) => AnswerValue::One(
                selected
                    .and_then(|i| self.options.get(i))
                    .cloned()
                    .unwrap_or_default(),
            ),
            AnswerInput::Multi(checked) => AnswerValue::Many(
                self.options
                    .iter()
                    .zip(checked)
                    .filter(|(_, c)| **c)
                    .map(|(o, _)| o.clone())
                    .collect(),
            ),
        }
    }
}

/// Lo necesario para corregir una pregunta.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingEntry {
    pub answer_type: AnswerType,
    pub correct_answer: Option<AnswerValue>,
}

impl GradingEntry {
    fn from_question(q: &QuizQuestion) -> Self {
        // la forma de la respuesta correcta sigue al tipo de pregunta
        let correct_answer = q.correct_answer.as_ref().map(|c| match q.answer_type {
            AnswerType::MultiChoice => AnswerValue::Many(c.to_list()),
            _ => AnswerValue::One(c.as_scalar().to_owned()),
        });
        Self {
            answer_type: q.answer_type,
            correct_answer,
        }
    }
}

/// Metadatos de corrección por pregunta, separados del estado de la vista.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradingContext {
    entries: HashMap<QuestionId, GradingEntry>,
}

impl GradingContext {
    pub fn entry(&self, id: QuestionId) -> Option<&GradingEntry> {
        self.entries.get(&id)
    }
}

/// Sesión de un cuestionario en curso.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizRunner {
    pub title: String,
    pub blocks: Vec<QuestionBlock>,
    grading: GradingContext,
}

impl QuizRunner {
    /// Sin cuestionario se usa el de ejemplo.
    pub fn load(quiz: Option<&Quiz>) -> Self {
        let (title, questions) = match quiz {
            Some(q) => (q.quiz_title.clone(), q.questions.clone()),
            None => (DEFAULT_QUIZ_TITLE.to_owned(), read_default_questions()),
        };

        let mut blocks = Vec::with_capacity(questions.len());
        let mut entries = HashMap::with_capacity(questions.len());
        for (id, q) in questions.iter().enumerate() {
            let options = q.options().to_vec();
            let input = match q.answer_type {
                AnswerType::Text => AnswerInput::Text(String::new()),
                AnswerType::SingleChoice => AnswerInput::Single(None),
                AnswerType::MultiChoice => AnswerInput::Multi(vec![false; options.len()]),
            };
            blocks.push(QuestionBlock {
                id,
                text: q.question_text.clone(),
                options,
                required: q.required,
                input,
                feedback: Feedback::Hidden,
            });
            entries.insert(id, GradingEntry::from_question(q));
        }

        log::debug!("cuestionario '{title}' cargado con {} preguntas", blocks.len());
        Self {
            title,
            blocks,
            grading: GradingContext { entries },
        }
    }

    pub fn grading(&self) -> &GradingContext {
        &self.grading
    }

    /// Cualquier cambio en el bloque muestra el acuse "respuesta registrada".
    pub fn record_change(&mut self, id: QuestionId) {
        if let Some(block) = self.blocks.get_mut(id) {
            block.feedback = Feedback::Recorded;
        }
    }

    pub fn set_text(&mut self, id: QuestionId, text: &str) {
        if let Some(AnswerInput::Text(current)) = self.blocks.get_mut(id).map(|b| &mut b.input) {
            *current = text.to_owned();
            self.record_change(id);
        }
    }

    pub fn select_option(&mut self, id: QuestionId, option: usize) {
        let Some(block) = self.blocks.get_mut(id) else {
            return;
        };
        if option >= block.options.len() {
            return;
        }
        if let AnswerInput::Single(selected) = &mut block.input {
            *selected = Some(option);
            self.record_change(id);
        }
    }

    pub fn set_checked(&mut self, id: QuestionId, option: usize, checked: bool) {
        if let Some(AnswerInput::Multi(states)) = self.blocks.get_mut(id).map(|b| &mut b.input) {
            if let Some(state) = states.get_mut(option) {
                *state = checked;
                self.record_change(id);
            }
        }
    }
}
