// src/noyau/correction.rs
//
// Correction d’une série : verdict par question, bilan, messages.

use super::question::Question;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statut {
    NonRepondue,
    Juste,
    Fausse,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub statut: Statut,
    pub choisi: Option<usize>,
    pub correct: String,
    pub explication: String,
}

impl Verdict {
    pub fn evaluer(question: &Question, choisi: Option<usize>) -> Self {
        let statut = match choisi {
            None => Statut::NonRepondue,
            Some(i) if i == question.indice_correct() => Statut::Juste,
            Some(_) => Statut::Fausse,
        };
        Self {
            statut,
            choisi,
            correct: question.reponse_correcte().unwrap_or_default().to_string(),
            explication: question.explication().to_string(),
        }
    }

    pub fn est_juste(&self) -> bool {
        self.statut == Statut::Juste
    }

    pub fn message(&self) -> String {
        match self.statut {
            Statut::NonRepondue => "Choisis une réponse.".to_string(),
            Statut::Juste => format!("Bonne réponse ! {}", self.explication),
            Statut::Fausse => format!(
                "Réponse attendue : {}. {}",
                self.correct, self.explication
            ),
        }
    }
}

/// Une réponse absente (tableau trop court) compte comme non répondue.
pub fn evaluer_reponses(questions: &[Question], reponses: &[Option<usize>]) -> Vec<Verdict> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| Verdict::evaluer(q, reponses.get(i).copied().flatten()))
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub score: usize,
    pub total: usize,
    pub repondues: usize,
}

impl Bilan {
    pub fn depuis(verdicts: &[Verdict]) -> Self {
        Self {
            score: verdicts.iter().filter(|v| v.est_juste()).count(),
            total: verdicts.len(),
            repondues: verdicts
                .iter()
                .filter(|v| v.statut != Statut::NonRepondue)
                .count(),
        }
    }

    pub fn message(&self) -> String {
        format!(
            "Score : {}/{}. {}",
            self.score,
            self.total,
            message_motivation(self.score, self.total)
        )
    }
}

pub fn message_motivation(score: usize, total: usize) -> &'static str {
    // ratio comparé en entiers : score/total >= 7/10 <=> 10 score >= 7 total
    if total > 0 && score == total {
        "Impeccable, tu maîtrises tout !"
    } else if total > 0 && 10 * score >= 7 * total {
        "Très solide, peaufine les derniers détails."
    } else if total > 0 && 2 * score >= total {
        "Pas mal ! Identifie les erreurs pour progresser."
    } else {
        "On reprend calmement, relis les explications avant de retenter."
    }
}

/// Texte affiché par “afficher les réponses”.
pub fn revelation(question: &Question) -> String {
    format!(
        "Réponse : {}. {}",
        question.reponse_correcte().unwrap_or_default(),
        question.explication()
    )
}
