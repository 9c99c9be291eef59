mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{alert_window, bottom_panel, notice_overlay, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // cabecera con saludo solo durante el cuestionario y los resultados
        if matches!(self.state, AppState::Quiz | AppState::Results) {
            top_panel(self, ctx);
        }

        bottom_panel(self, ctx);

        match self.state {
            AppState::Identity => views::identity::ui_identity(self, ctx),
            AppState::Builder => views::builder::ui_builder(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
        }

        notice_overlay(self, ctx);

        if self.confirm_delete.is_some() {
            self.borrar_confirmacion_pendiente(ctx);
        }
        if self.alert.is_some() {
            alert_window(self, ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
