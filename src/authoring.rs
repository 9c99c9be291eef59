// src/authoring.rs

use crate::model::{AnswerType, AnswerValue, Quiz, QuizQuestion};
use crate::store::{QuizStore, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Please enter a quiz title")]
    BlankTitle,
    #[error("Please add at least one question")]
    NoQuestions,
    #[error("Could not save the quiz: {0}")]
    Store(#[from] StoreError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OptionField {
    pub id: u64,
    pub text: String,
}

/// Opción elegible como respuesta correcta. `value` es la posición entre las
/// opciones no vacías.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerChoice {
    pub value: usize,
    pub option_id: u64,
    pub label: String,
}

/// Bloque editable de una pregunta.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuestionEditor {
    pub id: u64,
    pub question_text: String,
    pub answer_type: AnswerType,
    /// Se conservan aunque el tipo cambie a texto (quedan ocultas).
    pub options: Vec<OptionField>,
    pub correct_option_ids: BTreeSet<u64>,
    /// Palabra clave esperada para preguntas de texto.
    pub expected_text: String,
    pub required: bool,
}

impl QuestionEditor {
    fn new(id: u64) -> Self {
        Self {
            id,
            question_text: String::new(),
            answer_type: AnswerType::Text,
            options: Vec::new(),
            correct_option_ids: BTreeSet::new(),
            expected_text: String::new(),
            required: false,
        }
    }

    pub fn shows_options(&self) -> bool {
        self.answer_type.is_choice()
    }

    /// Opciones no vacías, en orden de pantalla.
    pub fn correct_answer_choices(&self) -> Vec<AnswerChoice> {
        self.options
            .iter()
            .filter(|o| !o.text.trim().is_empty())
            .enumerate()
            .map(|(value, o)| AnswerChoice {
                value,
                option_id: o.id,
                label: o.text.clone(),
            })
            .collect()
    }

    pub fn is_correct(&self, option_id: u64) -> bool {
        self.correct_option_ids.contains(&option_id)
    }

    /// Opción única: reemplaza la selección. Multiopción: alterna.
    pub fn select_correct(&mut self, option_id: u64) {
        match self.answer_type {
            AnswerType::MultiChoice => {
                if !self.correct_option_ids.remove(&option_id) {
                    self.correct_option_ids.insert(option_id);
                }
            }
            _ => {
                self.correct_option_ids.clear();
                self.correct_option_ids.insert(option_id);
            }
        }
    }

    pub fn set_answer_type(&mut self, answer_type: AnswerType) {
        self.answer_type = answer_type;
        // una pregunta de opción única no puede tener varias correctas
        if answer_type == AnswerType::SingleChoice && self.correct_option_ids.len() > 1 {
            let first = self
                .correct_answer_choices()
                .into_iter()
                .map(|c| c.option_id)
                .find(|id| self.correct_option_ids.contains(id));
            self.correct_option_ids = first.into_iter().collect();
        }
    }

    fn correct_answer(&self) -> Option<AnswerValue> {
        match self.answer_type {
            AnswerType::Text => {
                let expected = self.expected_text.trim();
                (!expected.is_empty()).then(|| AnswerValue::One(expected.to_owned()))
            }
            AnswerType::SingleChoice => self
                .correct_answer_choices()
                .into_iter()
                .find(|c| self.is_correct(c.option_id))
                .map(|c| AnswerValue::One(c.label)),
            AnswerType::MultiChoice => {
                let labels: Vec<String> = self
                    .correct_answer_choices()
                    .into_iter()
                    .filter(|c| self.is_correct(c.option_id))
                    .map(|c| c.label)
                    .collect();
                (!labels.is_empty()).then_some(AnswerValue::Many(labels))
            }
        }
    }

    pub fn to_question(&self) -> QuizQuestion {
        let options: Vec<String> = self
            .correct_answer_choices()
            .into_iter()
            .map(|c| c.label)
            .collect();
        QuizQuestion {
            question_text: self.question_text.clone(),
            answer_type: self.answer_type,
            answer_options: (self.shows_options() && !options.is_empty()).then_some(options),
            correct_answer: self.correct_answer(),
            required: self.required,
        }
    }
}

/// Panel de creación: título más bloques de pregunta.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct QuizBuilder {
    pub title: String,
    pub blocks: Vec<QuestionEditor>,
    next_id: u64,
}

impl QuizBuilder {
    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn add_question(&mut self) -> u64 {
        let id = self.fresh_id();
        self.blocks.push(QuestionEditor::new(id));
        id
    }

    pub fn remove_question(&mut self, block_id: u64) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.id != block_id);
        self.blocks.len() != before
    }

    pub fn block(&self, block_id: u64) -> Option<&QuestionEditor> {
        self.blocks.iter().find(|b| b.id == block_id)
    }

    pub fn block_mut(&mut self, block_id: u64) -> Option<&mut QuestionEditor> {
        self.blocks.iter_mut().find(|b| b.id == block_id)
    }

    pub fn add_option(&mut self, block_id: u64) -> Option<u64> {
        let id = self.fresh_id();
        let block = self.block_mut(block_id)?;
        block.options.push(OptionField {
            id,
            text: String::new(),
        });
        Some(id)
    }

    pub fn remove_option(&mut self, block_id: u64, option_id: u64) -> bool {
        let Some(block) = self.block_mut(block_id) else {
            return false;
        };
        let before = block.options.len();
        block.options.retain(|o| o.id != option_id);
        block.correct_option_ids.remove(&option_id);
        block.options.len() != before
    }

    pub fn build(&self, created_date: DateTime<Utc>) -> Result<Quiz, SaveError> {
        if self.title.trim().is_empty() {
            return Err(SaveError::BlankTitle);
        }
        if self.blocks.is_empty() {
            return Err(SaveError::NoQuestions);
        }
        Ok(Quiz {
            quiz_title: self.title.clone(),
            questions: self.blocks.iter().map(QuestionEditor::to_question).collect(),
            created_date,
        })
    }

    /// Construye, guarda y deja el panel vacío. Devuelve la lista guardada.
    pub fn save(&mut self, store: &mut QuizStore, now: DateTime<Utc>) -> Result<Vec<Quiz>, SaveError> {
        let quiz = self.build(now)?;
        let title = quiz.quiz_title.clone();
        let quizzes = store.append(quiz)?;
        log::info!("cuestionario '{title}' guardado ({} en total)", quizzes.len());
        self.reset();
        Ok(quizzes)
    }

    pub fn reset(&mut self) {
        self.title.clear();
        self.blocks.clear();
    }
}
