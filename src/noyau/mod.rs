//! Noyau QCM : génération de questions à choix multiples
//!
//! Organisation interne :
//! - alea.rs         : source aléatoire injectable (rand / graine / script)
//! - nombres.rs      : pgcd, fractions, arrondis exacts (Rational64)
//! - format.rs       : affichage français (virgule, %, signes, x², ax + b)
//! - choix.rs        : jeu de choix mélangé + indice correct
//! - question.rs     : objet-valeur Question (contrat sérialisé)
//! - graphe.rs       : droite affine des lectures graphiques (SVG / segment)
//! - generateurs/    : six banques thématiques
//! - validation.rs   : contrôle structurel d’une Question
//! - serie.rs        : assemblage (tirage sans répétition, re-génération)
//! - correction.rs   : verdicts, bilan, messages

pub mod alea;
pub mod choix;
pub mod correction;
pub mod format;
pub mod generateurs;
pub mod graphe;
pub mod nombres;
pub mod question;
pub mod serie;
pub mod validation;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_scenarios;

// API publique minimale
pub use generateurs::Theme;
pub use question::Question;
pub use serie::{construire_bac_blanc, construire_serie, ErreurSerie};
