// src/noyau/choix.rs
//
// Construction d’un jeu de choix : la bonne réponse + distracteurs distincts,
// mélangés, avec l’indice de la bonne réponse.

use super::alea::Alea;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JeuChoix {
    pub choix: Vec<String>,
    pub indice_correct: usize,
}

/// - retire les faux égaux à `correct` ;
/// - déduplique (premier gardé) ;
/// - place `correct` en tête, mélange, retrouve son indice.
///
/// Ne complète JAMAIS : c’est au générateur de fournir assez de distracteurs.
pub fn construire_choix(alea: &mut dyn Alea, correct: &str, faux: &[String]) -> JeuChoix {
    let mut uniques: Vec<String> = vec![correct.to_string()];
    for f in faux {
        if !uniques.iter().any(|u| u == f) {
            uniques.push(f.clone());
        }
    }

    let choix = alea.melanger(&uniques);
    let indice_correct = choix.iter().position(|c| c == correct).unwrap_or(0);

    JeuChoix {
        choix,
        indice_correct,
    }
}
