// src/noyau/serie.rs
//
// Assemblage d’une série : tirage des générateurs d’une banque,
// validation de chaque question, re-génération bornée.
//
// Tirage :
// - réserve = banque mélangée, re-remplie quand elle est vide
// - jamais deux fois de suite le même générateur (banque >= 2)
//   => la tête est échangée avec la prochaine entrée différente

use std::collections::VecDeque;

use thiserror::Error;

use super::alea::Alea;
use super::generateurs::{Generateur, Theme};
use super::question::Question;
use super::validation::{valider, QuestionInvalide};

pub const NOMBRE_QUESTIONS_DEFAUT: usize = 10;
pub const TENTATIVES_MAX: usize = 10;

/// Bac blanc : nombre de générateurs distincts tirés par banque.
pub const PAR_THEME_BAC_BLANC: usize = 2;

#[derive(Debug, Error)]
pub enum ErreurSerie {
    #[error("« {generateur} » : aucune question valide après {tentatives} tentatives ({derniere})")]
    GenerationImpossible {
        generateur: &'static str,
        tentatives: usize,
        #[source]
        derniere: QuestionInvalide,
    },
}

/* ------------------------ Tirage ------------------------ */

#[derive(Clone, Debug)]
pub struct Tirage {
    banque: &'static [Generateur],
    reserve: VecDeque<Generateur>,
    dernier: Option<Generateur>,
}

impl Tirage {
    pub fn new(banque: &'static [Generateur]) -> Self {
        Self {
            banque,
            reserve: VecDeque::new(),
            dernier: None,
        }
    }

    /// Prochain générateur (None seulement si la banque est vide).
    pub fn suivant(&mut self, alea: &mut dyn Alea) -> Option<Generateur> {
        if self.banque.is_empty() {
            return None;
        }
        if self.reserve.is_empty() {
            self.remplir(alea);
        }

        if self.banque.len() > 1 && self.reserve.front().copied() == self.dernier {
            let mut autre = self.position_differente();
            if autre.is_none() {
                self.remplir(alea);
                autre = self.position_differente();
            }
            if let Some(i) = autre {
                self.reserve.swap(0, i);
            }
        }

        let g = self.reserve.pop_front()?;
        self.dernier = Some(g);
        Some(g)
    }

    fn remplir(&mut self, alea: &mut dyn Alea) {
        self.reserve.extend(alea.melanger(self.banque));
    }

    fn position_differente(&self) -> Option<usize> {
        self.reserve.iter().position(|g| Some(*g) != self.dernier)
    }
}

/* ------------------------ Génération validée ------------------------ */

/// Appelle `produire` jusqu’à obtenir une question valide,
/// au plus `tentatives` fois (au moins une).
pub fn generer_valide(
    nom: &'static str,
    mut produire: impl FnMut(&mut dyn Alea) -> Question,
    alea: &mut dyn Alea,
    tentatives: usize,
) -> Result<Question, ErreurSerie> {
    let tentatives = tentatives.max(1);
    let mut derniere = None;

    for essai in 1..=tentatives {
        let q = produire(alea);
        match valider(&q) {
            Ok(()) => return Ok(q),
            Err(e) => {
                log::warn!("{nom} : question rejetée (essai {essai}/{tentatives}) : {e}");
                derniere = Some(e);
            }
        }
    }

    let derniere = derniere.unwrap_or(QuestionInvalide::TropPeuDeChoix(0));
    log::error!("{nom} : abandon après {tentatives} tentatives");
    Err(ErreurSerie::GenerationImpossible {
        generateur: nom,
        tentatives,
        derniere,
    })
}

/* ------------------------ Assembleur ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReglagesSerie {
    pub nombre: usize,
    pub tentatives_max: usize,
}

impl Default for ReglagesSerie {
    fn default() -> Self {
        Self {
            nombre: NOMBRE_QUESTIONS_DEFAUT,
            tentatives_max: TENTATIVES_MAX,
        }
    }
}

/// Résultat d’un assemblage : questions + générateur d’origine de chacune.
#[derive(Clone, Debug)]
pub struct SessionGeneration {
    pub questions: Vec<Question>,
    pub origines: Vec<Generateur>,
}

impl SessionGeneration {
    /// Noms des générateurs tirés, dans l’ordre (journaux).
    pub fn resume(&self) -> String {
        self.origines
            .iter()
            .map(|g| g.nom())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Assembleur {
    reglages: ReglagesSerie,
}

impl Assembleur {
    pub fn new(reglages: ReglagesSerie) -> Self {
        Self { reglages }
    }

    pub fn serie(&self, theme: Theme, alea: &mut dyn Alea) -> Result<SessionGeneration, ErreurSerie> {
        let mut tirage = Tirage::new(theme.banque());
        let mut questions = Vec::with_capacity(self.reglages.nombre);
        let mut origines = Vec::with_capacity(self.reglages.nombre);

        for _ in 0..self.reglages.nombre {
            let Some(g) = tirage.suivant(alea) else {
                break;
            };
            questions.push(self.question(g, alea)?);
            origines.push(g);
        }

        log::debug!(
            "série « {} » : {} questions",
            theme.cle(),
            questions.len()
        );
        Ok(SessionGeneration {
            questions,
            origines,
        })
    }

    /// Bac blanc : PAR_THEME_BAC_BLANC générateurs distincts par banque,
    /// l’ensemble mélangé.
    pub fn bac_blanc(&self, alea: &mut dyn Alea) -> Result<SessionGeneration, ErreurSerie> {
        let mut tirees: Vec<(Question, Generateur)> = Vec::new();

        for theme in Theme::TOUS {
            let choisis = alea.melanger(theme.banque());
            for &g in choisis.iter().take(PAR_THEME_BAC_BLANC) {
                tirees.push((self.question(g, alea)?, g));
            }
        }

        let tirees = alea.melanger(&tirees);
        log::debug!("bac blanc : {} questions", tirees.len());
        let (questions, origines) = tirees.into_iter().unzip();
        Ok(SessionGeneration {
            questions,
            origines,
        })
    }

    fn question(&self, g: Generateur, alea: &mut dyn Alea) -> Result<Question, ErreurSerie> {
        generer_valide(g.nom(), |a| g.generer(a), alea, self.reglages.tentatives_max)
    }
}

/* ------------------------ Points d’entrée ------------------------ */

/// Série de `nombre` questions du thème `cle` (clé inconnue => calcul).
pub fn construire_serie(
    cle: &str,
    nombre: usize,
    alea: &mut dyn Alea,
) -> Result<Vec<Question>, ErreurSerie> {
    let assembleur = Assembleur::new(ReglagesSerie {
        nombre,
        ..ReglagesSerie::default()
    });
    let session = assembleur.serie(Theme::depuis_cle(cle), alea)?;
    log::debug!("générateurs : {}", session.resume());
    Ok(session.questions)
}

/// Bac blanc : PAR_THEME_BAC_BLANC questions par thème, mélangées.
pub fn construire_bac_blanc(alea: &mut dyn Alea) -> Result<Vec<Question>, ErreurSerie> {
    let session = Assembleur::default().bac_blanc(alea)?;
    log::debug!("générateurs : {}", session.resume());
    Ok(session.questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::alea::AleaRand;
    use crate::noyau::choix::JeuChoix;
    use std::cell::Cell;

    #[test]
    fn jamais_deux_fois_de_suite() {
        let alea: &mut dyn Alea = &mut AleaRand::graine(5);
        for theme in Theme::TOUS {
            let mut tirage = Tirage::new(theme.banque());
            let mut precedent = None;
            for _ in 0..300 {
                let g = tirage.suivant(alea);
                assert!(g.is_some());
                assert_ne!(g, precedent, "{theme:?}");
                precedent = g;
            }
        }
    }

    #[test]
    fn chaque_cycle_couvre_la_banque() {
        let alea: &mut dyn Alea = &mut AleaRand::graine(9);
        let banque = Theme::Statistiques.banque();
        let mut tirage = Tirage::new(banque);
        let mut vus: Vec<Generateur> = (0..banque.len())
            .filter_map(|_| tirage.suivant(alea))
            .collect();
        vus.sort_by_key(|g| g.nom());
        let mut attendus = banque.to_vec();
        attendus.sort_by_key(|g| g.nom());
        assert_eq!(vus, attendus);
    }

    #[test]
    fn banque_a_un_seul_element() {
        static SEUL: [Generateur; 1] = [Generateur::Recette];
        let alea: &mut dyn Alea = &mut AleaRand::graine(1);
        let mut tirage = Tirage::new(&SEUL);
        for _ in 0..5 {
            assert_eq!(tirage.suivant(alea), Some(Generateur::Recette));
        }
    }

    #[test]
    fn banque_vide() {
        let alea: &mut dyn Alea = &mut AleaRand::graine(1);
        let mut tirage = Tirage::new(&[]);
        assert_eq!(tirage.suivant(alea), None);
    }

    #[test]
    fn budget_de_tentatives_epuise() {
        let alea: &mut dyn Alea = &mut AleaRand::graine(2);
        let appels = Cell::new(0);
        let produire = |_: &mut dyn Alea| {
            appels.set(appels.get() + 1);
            Question::brute("?", &["1", "1"], 0, "1")
        };

        let err = generer_valide("cassé", produire, alea, TENTATIVES_MAX).unwrap_err();
        assert_eq!(appels.get(), TENTATIVES_MAX);
        match err {
            ErreurSerie::GenerationImpossible {
                generateur,
                tentatives,
                derniere,
            } => {
                assert_eq!(generateur, "cassé");
                assert_eq!(tentatives, TENTATIVES_MAX);
                assert_eq!(derniere, QuestionInvalide::ChoixDuplique("1".to_string()));
            }
        }
    }

    #[test]
    fn reussite_apres_un_rejet() {
        let alea: &mut dyn Alea = &mut AleaRand::graine(2);
        let appels = Cell::new(0);
        let produire = |_: &mut dyn Alea| {
            appels.set(appels.get() + 1);
            if appels.get() == 1 {
                Question::brute("?", &["1"], 0, "1")
            } else {
                let jeu = JeuChoix {
                    choix: vec!["1".to_string(), "2".to_string()],
                    indice_correct: 1,
                };
                Question::new("?", jeu, "2", "")
            }
        };

        let q = generer_valide("instable", produire, alea, 3).unwrap();
        assert_eq!(appels.get(), 2);
        assert_eq!(q.attendu(), "2");
    }

    #[test]
    fn serie_du_nombre_demande() {
        let alea: &mut dyn Alea = &mut AleaRand::graine(21);
        let questions = construire_serie("evolutions", 15, alea).unwrap();
        assert_eq!(questions.len(), 15);
        assert!(construire_serie("calcul", 0, alea).unwrap().is_empty());
    }

    #[test]
    fn cle_inconnue_donne_calcul() {
        let alea: &mut dyn Alea = &mut AleaRand::graine(4);
        let session = Assembleur::default()
            .serie(Theme::depuis_cle("géométrie"), alea)
            .unwrap();
        assert!(session
            .origines
            .iter()
            .all(|g| Theme::Calcul.banque().contains(g)));
    }

    #[test]
    fn bac_blanc_deux_par_theme() {
        let alea: &mut dyn Alea = &mut AleaRand::graine(8);
        let session = Assembleur::default().bac_blanc(alea).unwrap();
        assert_eq!(session.questions.len(), 6 * PAR_THEME_BAC_BLANC);
        assert_eq!(session.origines.len(), session.questions.len());

        for theme in Theme::TOUS {
            let du_theme: Vec<_> = session
                .origines
                .iter()
                .filter(|g| theme.banque().contains(g))
                .collect();
            assert_eq!(du_theme.len(), PAR_THEME_BAC_BLANC, "{theme:?}");
            assert_ne!(du_theme[0], du_theme[1]);
        }
    }

    #[test]
    fn bac_blanc_par_le_point_d_entree() {
        let alea: &mut dyn Alea = &mut AleaRand::graine(13);
        let questions = construire_bac_blanc(alea).unwrap();
        assert_eq!(questions.len(), Theme::TOUS.len() * PAR_THEME_BAC_BLANC);
        assert!(questions.iter().all(|q| valider(q).is_ok()));
    }

    #[test]
    fn resume_des_origines() {
        let session = SessionGeneration {
            questions: Vec::new(),
            origines: vec![Generateur::Recette, Generateur::Mediane],
        };
        assert_eq!(session.resume(), "recette, mediane");
    }
}
