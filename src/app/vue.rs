// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Barre de parcours : un bouton par thème + bac blanc
// - Actions : nouvelle série, corriger, afficher les réponses
// - Une carte par question : énoncé, mini-graphe éventuel, choix radio,
//   retour après correction
//
// Le mini-graphe est peint avec egui (même fenêtre que le SVG du noyau).

use eframe::egui;

use super::etat::{AppQcm, Parcours, NOMBRE_MAX};
use crate::noyau::correction::{revelation, Statut};
use crate::noyau::generateurs::Theme;
use crate::noyau::graphe::{DroiteAffine, HAUTEUR, LARGEUR, X_MAX, X_MIN, Y_MAX, Y_MIN};

const BLEU_DROITE: egui::Color32 = egui::Color32::from_rgb(0x25, 0x63, 0xeb);
const VERT_JUSTE: egui::Color32 = egui::Color32::from_rgb(0x16, 0xa3, 0x4a);

impl AppQcm {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Automatismes QCM");
                ui.add_space(6.0);

                self.ui_parcours(ui);
                ui.add_space(6.0);
                self.ui_actions(ui);

                if !self.erreur.is_empty() {
                    ui.add_space(6.0);
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_questions(ui);
            });
    }

    fn ui_parcours(&mut self, ui: &mut egui::Ui) {
        let mut choix = self.parcours;
        ui.horizontal_wrapped(|ui| {
            for theme in Theme::TOUS {
                let p = Parcours::Theme(theme);
                ui.selectable_value(&mut choix, p, p.titre());
            }
            ui.separator();
            ui.selectable_value(&mut choix, Parcours::BacBlanc, Parcours::BacBlanc.titre());
        });
        self.changer_parcours(choix);
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            if ui.button("Nouvelle série").clicked() {
                self.nouvelle_serie();
            }

            let serie = !self.questions.is_empty();
            if ui.add_enabled(serie, egui::Button::new("Corriger")).clicked() {
                self.corriger();
            }
            if ui
                .add_enabled(serie, egui::Button::new("Afficher les réponses"))
                .clicked()
            {
                self.afficher_reponses();
            }

            ui.separator();

            // Le bac blanc a une taille fixe.
            let libre = matches!(self.parcours, Parcours::Theme(_));
            ui.add_enabled_ui(libre, |ui| {
                ui.label("Questions :");
                let mut n = self.nombre as u32;
                let resp = ui.add(
                    egui::DragValue::new(&mut n)
                        .speed(1)
                        .range(1..=NOMBRE_MAX as u32),
                );
                if resp.changed() {
                    self.set_nombre(n as usize);
                }
            });
        });

        ui.add_space(6.0);

        let total = self.questions.len().max(1);
        let repondues = self.nombre_repondues();
        ui.add(
            egui::ProgressBar::new(repondues as f32 / total as f32)
                .text(format!("{repondues}/{} réponses", self.questions.len())),
        );

        if let Some(bilan) = self.bilan {
            ui.add_space(4.0);
            ui.label(egui::RichText::new(bilan.message()).strong());
        }
    }

    fn ui_questions(&mut self, ui: &mut egui::Ui) {
        for i in 0..self.questions.len() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.push_id(i, |ui| self.carte(ui, i));
            });
            ui.add_space(6.0);
        }
    }

    fn carte(&mut self, ui: &mut egui::Ui, i: usize) {
        let q = &self.questions[i];
        ui.label(egui::RichText::new(format!("Question {}", i + 1)).strong());
        ui.label(q.enonce());

        if let Some(droite) = q.droite() {
            dessiner_droite(ui, droite);
        }

        let mut choisi = self.reponses[i];
        for (j, texte) in q.choix().iter().enumerate() {
            ui.radio_value(&mut choisi, Some(j), texte.as_str());
        }

        if let Some(verdict) = self.verdicts.get(i) {
            let couleur = match verdict.statut {
                Statut::Juste => VERT_JUSTE,
                Statut::Fausse => ui.visuals().error_fg_color,
                Statut::NonRepondue => ui.visuals().weak_text_color(),
            };
            ui.colored_label(couleur, verdict.message());
        }
        if self.reponses_visibles {
            ui.label(egui::RichText::new(revelation(q)).italics());
        }

        if let Some(j) = choisi {
            if choisi != self.reponses[i] {
                self.choisir(i, j);
            }
        }
    }
}

/* ------------------------ Mini-graphe ------------------------ */

fn dessiner_droite(ui: &mut egui::Ui, droite: DroiteAffine) {
    let taille = egui::vec2(LARGEUR as f32, HAUTEUR as f32);
    let (reponse, painter) = ui.allocate_painter(taille, egui::Sense::hover());
    let rect = reponse.rect;

    let vers_ecran = |x: f64, y: f64| {
        egui::pos2(
            rect.left() + ((x - X_MIN as f64) / (X_MAX - X_MIN) as f64) as f32 * rect.width(),
            rect.top() + ((Y_MAX as f64 - y) / (Y_MAX - Y_MIN) as f64) as f32 * rect.height(),
        )
    };

    let grille = egui::Stroke::new(0.5, ui.visuals().weak_text_color());
    for x in X_MIN..=X_MAX {
        let x = x as f64;
        painter.line_segment([vers_ecran(x, Y_MIN as f64), vers_ecran(x, Y_MAX as f64)], grille);
    }
    for y in (Y_MIN..=Y_MAX).step_by(2) {
        let y = y as f64;
        painter.line_segment([vers_ecran(X_MIN as f64, y), vers_ecran(X_MAX as f64, y)], grille);
    }

    let axes = egui::Stroke::new(1.0, ui.visuals().text_color());
    painter.line_segment([vers_ecran(X_MIN as f64, 0.0), vers_ecran(X_MAX as f64, 0.0)], axes);
    painter.line_segment([vers_ecran(0.0, Y_MIN as f64), vers_ecran(0.0, Y_MAX as f64)], axes);

    if let Some(((x1, y1), (x2, y2))) = droite.segment_visible() {
        painter.line_segment(
            [vers_ecran(x1, y1), vers_ecran(x2, y2)],
            egui::Stroke::new(2.0, BLEU_DROITE),
        );
    }
}
