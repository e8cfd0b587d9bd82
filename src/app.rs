// src/app.rs
//
// Automatismes QCM — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppQcm (pour main.rs: use crate::app::AppQcm;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppQcm;`
pub use etat::AppQcm;

use eframe::egui;

impl eframe::App for AppQcm {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = masquer les réponses affichées (la correction reste).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.masquer_reponses();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
