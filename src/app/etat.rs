//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir la série en cours (questions, réponses, verdicts, erreur)
//! et offrir les actions des boutons (nouvelle série, corriger, afficher
//! les réponses) sans logique d’affichage.
//!
//! Contrats :
//! - Toute génération passe par le noyau (construire_serie / construire_bac_blanc).
//! - Une nouvelle série remplace l’état précédent en bloc.
//! - Bornes sur le nombre de questions.

use crate::noyau::alea::{Alea, AleaRand};
use crate::noyau::correction::{evaluer_reponses, Bilan, Verdict};
use crate::noyau::serie::NOMBRE_QUESTIONS_DEFAUT;
use crate::noyau::{construire_bac_blanc, construire_serie, ErreurSerie, Question, Theme};

/// Garde-fou : nombre de questions par série.
pub const NOMBRE_MAX: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parcours {
    Theme(Theme),
    BacBlanc,
}

impl Parcours {
    pub fn titre(self) -> &'static str {
        match self {
            Parcours::Theme(t) => t.titre(),
            Parcours::BacBlanc => "Bac blanc",
        }
    }
}

pub struct AppQcm {
    // --- choix de l’élève ---
    pub parcours: Parcours,
    pub nombre: usize,

    // --- série en cours ---
    pub questions: Vec<Question>,
    pub reponses: Vec<Option<usize>>,

    // --- correction (vide tant que “Corriger” n’a pas été cliqué) ---
    pub verdicts: Vec<Verdict>,
    pub bilan: Option<Bilan>,
    pub reponses_visibles: bool,

    pub erreur: String,

    alea: Box<dyn Alea>,
}

impl Default for AppQcm {
    fn default() -> Self {
        Self::avec_alea(Box::new(AleaRand::systeme()))
    }
}

impl AppQcm {
    /// État initial : première série du thème calcul déjà tirée.
    pub fn avec_alea(alea: Box<dyn Alea>) -> Self {
        let mut app = Self {
            parcours: Parcours::Theme(Theme::Calcul),
            nombre: NOMBRE_QUESTIONS_DEFAUT,
            questions: Vec::new(),
            reponses: Vec::new(),
            verdicts: Vec::new(),
            bilan: None,
            reponses_visibles: false,
            erreur: String::new(),
            alea,
        };
        app.nouvelle_serie();
        app
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn nouvelle_serie(&mut self) {
        let serie: Result<Vec<Question>, ErreurSerie> = match self.parcours {
            Parcours::Theme(theme) => construire_serie(theme.cle(), self.nombre, &mut *self.alea),
            Parcours::BacBlanc => construire_bac_blanc(&mut *self.alea),
        };

        self.verdicts.clear();
        self.bilan = None;
        self.reponses_visibles = false;

        match serie {
            Ok(questions) => {
                self.erreur.clear();
                self.reponses = vec![None; questions.len()];
                self.questions = questions;
            }
            Err(e) => {
                log::error!("{e}");
                self.erreur = e.to_string();
                self.questions.clear();
                self.reponses.clear();
            }
        }
    }

    pub fn changer_parcours(&mut self, parcours: Parcours) {
        if self.parcours != parcours {
            self.parcours = parcours;
            self.nouvelle_serie();
        }
    }

    pub fn set_nombre(&mut self, nombre: usize) {
        self.nombre = nombre.clamp(1, NOMBRE_MAX);
    }

    /// Ignore les indices hors bornes (question ou choix).
    pub fn choisir(&mut self, question: usize, choix: usize) {
        let valide = self
            .questions
            .get(question)
            .is_some_and(|q| choix < q.choix().len());
        if valide {
            self.reponses[question] = Some(choix);
        }
    }

    pub fn corriger(&mut self) {
        self.verdicts = evaluer_reponses(&self.questions, &self.reponses);
        let bilan = Bilan::depuis(&self.verdicts);
        log::debug!("correction : {}/{}", bilan.score, bilan.total);
        self.bilan = Some(bilan);
    }

    pub fn afficher_reponses(&mut self) {
        self.reponses_visibles = true;
    }

    pub fn masquer_reponses(&mut self) {
        self.reponses_visibles = false;
    }

    pub fn nombre_repondues(&self) -> usize {
        self.reponses.iter().filter(|r| r.is_some()).count()
    }
}
