//! Tests de propriétés (campagne) : balayage seedé de tous les générateurs.
//!
//! Pour chaque générateur de chaque banque, sur plusieurs graines :
//! - la question passe la validation (choix distincts, indice cohérent)
//! - 4 choix (3 pour la comparaison de décimaux : trois symboles possibles)
//! - énoncé et explication non vides, gabarits interpolés
//! - même graine => même question
//!
//! Budget temps global pour ne pas geler la CI.

use std::time::{Duration, Instant};

use super::alea::{Alea, AleaRand};
use super::generateurs::{Generateur, Theme};
use super::nombres::simplifier_fraction;
use super::serie::{construire_serie, Assembleur, ReglagesSerie};
use super::validation::valider;

const TIRAGES_PAR_GENERATEUR: u64 = 150;

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn tous_les_generateurs() -> impl Iterator<Item = Generateur> {
    Theme::TOUS.into_iter().flat_map(|t| t.banque().iter().copied())
}

/* ------------------------ Générateurs ------------------------ */

#[test]
fn prop_questions_valides_partout() {
    let start = Instant::now();
    for g in tous_les_generateurs() {
        for graine in 0..TIRAGES_PAR_GENERATEUR {
            let alea: &mut dyn Alea = &mut AleaRand::graine(graine);
            let q = g.generer(alea);

            if let Err(e) = valider(&q) {
                panic!("{} (graine {graine}) : {e}\n{q:?}", g.nom());
            }

            let attendu = if g == Generateur::ComparaisonDecimaux { 3 } else { 4 };
            assert_eq!(q.choix().len(), attendu, "{} : {:?}", g.nom(), q.choix());
            assert!(!q.enonce().is_empty(), "{}", g.nom());
            assert!(!q.explication().is_empty(), "{}", g.nom());
            assert!(q.choix().iter().all(|c| !c.trim().is_empty()), "{}", g.nom());
        }
        budget(start, Duration::from_secs(30));
    }
}

#[test]
fn prop_gabarits_interpoles() {
    for g in tous_les_generateurs() {
        for graine in 0..20 {
            let alea: &mut dyn Alea = &mut AleaRand::graine(graine);
            let q = g.generer(alea);
            let textes = q
                .choix()
                .iter()
                .map(String::as_str)
                .chain([q.enonce(), q.explication()]);
            for t in textes {
                assert!(!t.contains('{') && !t.contains('}'), "{} : {t:?}", g.nom());
                assert!(!t.contains("-0 %"), "{} : {t:?}", g.nom());
            }
        }
    }
}

#[test]
fn prop_meme_graine_meme_question() {
    for g in tous_les_generateurs() {
        let a: &mut dyn Alea = &mut AleaRand::graine(42);
        let b: &mut dyn Alea = &mut AleaRand::graine(42);
        assert_eq!(g.generer(a), g.generer(b), "{}", g.nom());
    }
}

#[test]
fn prop_graphiques_avec_droite() {
    use Generateur::*;
    let graphiques = [
        LectureImage,
        LectureZero,
        SigneGraphique,
        EquationReduiteGraphique,
        ResolutionGraphique,
    ];
    for g in graphiques {
        for graine in 0..30 {
            let alea: &mut dyn Alea = &mut AleaRand::graine(graine);
            let q = g.generer(alea);
            let droite = q.droite().unwrap_or_else(|| panic!("{} sans droite", g.nom()));
            assert!(droite.segment_visible().is_some(), "{}", g.nom());
            let riche = q.enonce_riche().unwrap_or_default();
            assert!(riche.starts_with("<p>") && riche.contains("<svg"), "{}", g.nom());
        }
    }
}

/* ------------------------ Assemblage ------------------------ */

#[test]
fn prop_series_sans_repetition_immediate() {
    let start = Instant::now();
    let assembleur = Assembleur::new(ReglagesSerie {
        nombre: 12,
        ..ReglagesSerie::default()
    });
    for theme in Theme::TOUS {
        for graine in 0..20 {
            let alea: &mut dyn Alea = &mut AleaRand::graine(graine);
            let session = assembleur
                .serie(theme, alea)
                .unwrap_or_else(|e| panic!("{theme:?} graine {graine} : {e}"));
            assert_eq!(session.questions.len(), 12);
            for q in &session.questions {
                assert_eq!(valider(q), Ok(()));
            }
            for paire in session.origines.windows(2) {
                assert_ne!(paire[0], paire[1], "{theme:?} graine {graine}");
            }
        }
        budget(start, Duration::from_secs(20));
    }
}

#[test]
fn prop_cle_inconnue_repli_calcul() {
    let alea: &mut dyn Alea = &mut AleaRand::graine(3);
    let questions = construire_serie("inconnu", 4, alea).unwrap_or_default();
    assert_eq!(questions.len(), 4);
}

/* ------------------------ Numérique ------------------------ */

#[test]
fn prop_simplification_idempotente() {
    for n in -30..=30 {
        for d in (-12..=12).filter(|d| *d != 0) {
            let f = simplifier_fraction(n, d);
            assert!(f.denominateur > 0);
            assert_eq!(simplifier_fraction(f.numerateur, f.denominateur), f);
            assert_eq!(f.valeur(), super::nombres::rat(n, d));
        }
    }
}

#[test]
fn prop_melange_permutation() {
    let alea: &mut dyn Alea = &mut AleaRand::graine(77);
    let base: Vec<i64> = (0..9).collect();
    for _ in 0..200 {
        let mut m = alea.melanger(&base);
        m.sort_unstable();
        assert_eq!(m, base);
    }
}
