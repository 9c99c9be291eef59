use crate::authoring::QuizBuilder;
use crate::config::AppConfig;
use crate::identity::{Identity, IdentityErrors};
use crate::model::{AppState, Quiz, QuizResult};
use crate::notices::Notices;
use crate::runner::QuizRunner;
use crate::store::{QuizStore, platform_storage};
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod library;

// Re-export de view models
pub use crate::view_models::{QuizListRow, ResultsView};

/// Estado de la aplicación. Solo el formulario de identidad y el borrador del
/// creador sobreviven entre sesiones; el resto es de la sesión en curso.
#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuizApp {
    pub identity: Identity,
    pub builder: QuizBuilder,
    #[serde(skip)]
    pub config: AppConfig,
    #[serde(skip)]
    pub identity_errors: IdentityErrors,
    #[serde(skip)]
    pub store: QuizStore,
    #[serde(skip)]
    pub quizzes: Vec<Quiz>, // espejo de la lista guardada
    #[serde(skip)]
    pub runner: Option<QuizRunner>,
    #[serde(skip)]
    pub result: Option<QuizResult>,
    #[serde(skip)]
    pub notices: Notices,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub alert: Option<String>,
    #[serde(skip)]
    pub confirm_delete: Option<usize>,
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load();
        let store = QuizStore::new(platform_storage(&config));

        // recupera identidad y borrador de la sesión anterior
        let mut app: QuizApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.attach(config, store);
        app
    }

    /// App sin estado previo sobre un almacén concreto.
    pub fn with_store(config: AppConfig, store: QuizStore) -> Self {
        let mut app = Self::default();
        app.attach(config, store);
        app
    }

    fn attach(&mut self, config: AppConfig, store: QuizStore) {
        log::info!(
            "iniciando (identidad estricta: {})",
            if config.strict_identity { "sí" } else { "no" }
        );
        self.config = config;
        self.store = store;
        self.refrescar_quizzes();
    }

    /// Saludo de la cabecera del cuestionario.
    pub fn greeting(&self) -> String {
        self.identity.display_name()
    }

    pub fn quiz_rows(&self) -> Vec<QuizListRow> {
        self.quizzes
            .iter()
            .enumerate()
            .map(|(idx, quiz)| QuizListRow::from_quiz(idx, quiz))
            .collect()
    }

    pub fn results_view(&self) -> Option<ResultsView> {
        self.result.as_ref().map(ResultsView::from_result)
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
