// src/noyau/validation.rs
//
// Contrôle structurel d’une Question avant de la livrer.

use thiserror::Error;

use super::question::Question;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuestionInvalide {
    #[error("moins de deux choix ({0})")]
    TropPeuDeChoix(usize),

    #[error("indice correct {indice} hors bornes (0..{total})")]
    IndiceHorsBornes { indice: usize, total: usize },

    #[error("choix dupliqué : « {0} »")]
    ChoixDuplique(String),

    #[error("réponse incohérente : « {trouve} » au lieu de « {attendu} »")]
    ReponseIncoherente { trouve: String, attendu: String },
}

pub fn valider(question: &Question) -> Result<(), QuestionInvalide> {
    let choix = question.choix();

    if choix.len() < 2 {
        return Err(QuestionInvalide::TropPeuDeChoix(choix.len()));
    }

    let indice = question.indice_correct();
    let Some(trouve) = question.reponse_correcte() else {
        return Err(QuestionInvalide::IndiceHorsBornes {
            indice,
            total: choix.len(),
        });
    };

    for (i, c) in choix.iter().enumerate() {
        if choix[..i].contains(c) {
            return Err(QuestionInvalide::ChoixDuplique(c.clone()));
        }
    }

    if trouve != question.attendu() {
        return Err(QuestionInvalide::ReponseIncoherente {
            trouve: trouve.to_string(),
            attendu: question.attendu().to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_correcte_acceptee() {
        let q = Question::brute("1 + 1 ?", &["3", "2", "4"], 1, "2");
        assert_eq!(valider(&q), Ok(()));
    }

    #[test]
    fn un_seul_choix_refuse() {
        let q = Question::brute("?", &["2"], 0, "2");
        assert_eq!(valider(&q), Err(QuestionInvalide::TropPeuDeChoix(1)));
    }

    #[test]
    fn indice_hors_bornes_refuse() {
        let q = Question::brute("?", &["1", "2"], 2, "2");
        assert_eq!(
            valider(&q),
            Err(QuestionInvalide::IndiceHorsBornes {
                indice: 2,
                total: 2
            })
        );
    }

    #[test]
    fn doublon_refuse() {
        let q = Question::brute("?", &["1", "2", "1"], 1, "2");
        assert_eq!(
            valider(&q),
            Err(QuestionInvalide::ChoixDuplique("1".to_string()))
        );
    }

    #[test]
    fn mauvais_indice_refuse() {
        let q = Question::brute("?", &["1", "2", "3"], 0, "2");
        assert!(matches!(
            valider(&q),
            Err(QuestionInvalide::ReponseIncoherente { .. })
        ));
    }
}
