// src/noyau/question.rs
//
// Question : objet-valeur immuable consommé par le rendu.
// Sérialisation = contrat de données (statement, statementMarkup, choices,
// correctIndex, explanation). La réponse attendue et la droite tracée
// restent hors contrat.

use serde::Serialize;

use super::choix::JeuChoix;
use super::graphe::DroiteAffine;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Question {
    #[serde(rename = "statement")]
    enonce: String,

    #[serde(rename = "statementMarkup", skip_serializing_if = "Option::is_none")]
    enonce_riche: Option<String>,

    #[serde(rename = "choices")]
    choix: Vec<String>,

    #[serde(rename = "correctIndex")]
    indice_correct: usize,

    #[serde(rename = "explanation")]
    explication: String,

    #[serde(skip)]
    attendu: String,

    #[serde(skip)]
    droite: Option<DroiteAffine>,
}

impl Question {
    /// `attendu` : texte exact de la bonne réponse (contrôlé par la validation).
    pub fn new(
        enonce: impl Into<String>,
        jeu: JeuChoix,
        attendu: impl Into<String>,
        explication: impl Into<String>,
    ) -> Self {
        Self {
            enonce: enonce.into(),
            enonce_riche: None,
            choix: jeu.choix,
            indice_correct: jeu.indice_correct,
            explication: explication.into(),
            attendu: attendu.into(),
            droite: None,
        }
    }

    /// Construction brute (tests de validation : questions volontairement fausses).
    #[cfg(test)]
    pub(crate) fn brute(
        enonce: &str,
        choix: &[&str],
        indice_correct: usize,
        attendu: &str,
    ) -> Self {
        Self {
            enonce: enonce.to_string(),
            enonce_riche: None,
            choix: choix.iter().map(|c| c.to_string()).collect(),
            indice_correct,
            explication: String::new(),
            attendu: attendu.to_string(),
            droite: None,
        }
    }

    /// Variante graphique : l’énoncé riche embarque le SVG de la droite.
    pub fn avec_droite(mut self, droite: DroiteAffine) -> Self {
        self.enonce_riche = Some(format!(
            "<p>{}</p><div class=\"graph-wrap\">{}</div>",
            self.enonce,
            droite.svg()
        ));
        self.droite = Some(droite);
        self
    }

    /* ------------------------ Accès ------------------------ */

    pub fn enonce(&self) -> &str {
        &self.enonce
    }

    pub fn enonce_riche(&self) -> Option<&str> {
        self.enonce_riche.as_deref()
    }

    pub fn choix(&self) -> &[String] {
        &self.choix
    }

    pub fn indice_correct(&self) -> usize {
        self.indice_correct
    }

    pub fn explication(&self) -> &str {
        &self.explication
    }

    pub fn attendu(&self) -> &str {
        &self.attendu
    }

    pub fn droite(&self) -> Option<DroiteAffine> {
        self.droite
    }

    /// Texte du choix désigné comme correct (None si l’indice est invalide).
    pub fn reponse_correcte(&self) -> Option<&str> {
        self.choix.get(self.indice_correct).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exemple() -> Question {
        let jeu = JeuChoix {
            choix: vec!["3".to_string(), "2".to_string()],
            indice_correct: 1,
        };
        Question::new("1 + 1 ?", jeu, "2", "1 + 1 = 2.")
    }

    #[test]
    fn contrat_serialise() {
        let json = serde_json::to_value(exemple()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "statement": "1 + 1 ?",
                "choices": ["3", "2"],
                "correctIndex": 1,
                "explanation": "1 + 1 = 2."
            })
        );
    }

    #[test]
    fn enonce_riche_avec_droite() {
        let q = exemple().avec_droite(DroiteAffine::new(1, 0));
        let riche = q.enonce_riche().unwrap();
        assert!(riche.starts_with("<p>1 + 1 ?</p><div class=\"graph-wrap\"><svg"));
        assert_eq!(q.droite(), Some(DroiteAffine::new(1, 0)));

        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["statementMarkup"], serde_json::Value::String(riche.to_string()));
        assert_eq!(json["correctIndex"], 1);
    }
}
