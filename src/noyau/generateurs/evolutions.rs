// src/noyau/generateurs/evolutions.rs
//
// Banque “évolutions” : coefficients multiplicateurs, taux successifs,
// taux réciproque, indices.
//
// Un taux t (en %) est toujours manipulé sous forme exacte :
// coefficient = 1 + t/100 (Rationnel), arrondi au dernier moment.

use crate::noyau::alea::Alea;
use crate::noyau::format::{decimal, decimal_court, egal_ou_environ, nombre, taux_signe};
use crate::noyau::nombres::{arrondi, arrondi_div, entier, rat, Rationnel};
use crate::noyau::question::Question;

use super::{completer, question};

/* ------------------------ Formules ------------------------ */

pub fn coefficient(taux: i64) -> Rationnel {
    rat(100 + taux, 100)
}

/// Taux global (en %) de plusieurs évolutions successives.
pub fn taux_global(taux: &[i64]) -> Rationnel {
    let produit = taux
        .iter()
        .fold(entier(1), |acc, &t| acc * coefficient(t));
    (produit - entier(1)) * entier(100)
}

/// Taux (en %) qui annule une évolution de t % : (1/(1+t/100) - 1) × 100.
pub fn taux_reciproque(taux: i64) -> Rationnel {
    rat(-100 * taux, 100 + taux)
}

/// "augmente de 10 %" / "diminue de 5 %"
fn variation(taux: i64) -> String {
    if taux < 0 {
        format!("diminue de {} %", -taux)
    } else {
        format!("augmente de {taux} %")
    }
}

/* ------------------------ Générateurs ------------------------ */

pub fn additif_multiplicatif(alea: &mut dyn Alea) -> Question {
    let taux = alea.entier(5, 40);
    let hausse = alea.pile_ou_face();
    let signe = if hausse { taux } else { -taux };
    let multiplier = |r: Rationnel| format!("Multiplier par {}", decimal(r, 2));

    let correct = multiplier(coefficient(signe));
    let mut faux = vec![
        if hausse {
            format!("Ajouter {taux}")
        } else {
            format!("Retrancher {taux}")
        },
        multiplier(rat(taux, 100)),
        multiplier(coefficient(-signe)),
    ];
    completer(&correct, &mut faux, |d| multiplier(coefficient(signe + d)));

    let verbe = if hausse { "Augmenter" } else { "Diminuer" };
    let explication = format!(
        "{verbe} de {taux} % revient à multiplier par 1 {} {taux}/100 = {}.",
        if hausse { '+' } else { '-' },
        decimal(coefficient(signe), 2)
    );
    let enonce = format!("{verbe} une quantité de {taux} % revient à :");
    question(alea, enonce, correct, faux, explication)
}

pub fn valeur_finale(alea: &mut dyn Alea) -> Question {
    let initiale = alea.entier(120, 900);
    let taux = alea.entier(5, 35);
    let hausse = alea.pile_ou_face();
    let signe = if hausse { taux } else { -taux };

    let finale = arrondi(entier(initiale) * coefficient(signe));
    let exact = (initiale * (100 + signe)) % 100 == 0;
    let ecart = arrondi_div(initiale * taux, 100);

    let correct = nombre(finale);
    let mut faux = vec![
        nombre(initiale + signe),                              // taux ajouté comme un nombre
        nombre(arrondi(entier(initiale) * coefficient(-signe))), // sens inversé
        nombre(ecart),                                         // variation seule
    ];
    completer(&correct, &mut faux, |d| nombre(finale + d));

    let egal = if exact { "=" } else { "≈" };
    let explication = format!(
        "Valeur finale = {initiale} × {} {egal} {finale}.",
        decimal_court(coefficient(signe), 2)
    );
    let enonce = if exact {
        format!("Une quantité de {initiale} {}. Quelle est sa nouvelle valeur ?", variation(signe))
    } else {
        format!(
            "Une quantité de {initiale} {}. Quelle est sa nouvelle valeur (arrondie à l’unité) ?",
            variation(signe)
        )
    };
    question(alea, enonce, correct, faux, explication)
}

pub fn valeur_initiale_hausse(alea: &mut dyn Alea) -> Question {
    let taux = 5 * alea.entier(1, 6);
    let initiale = 20 * alea.entier(8, 35);
    // initiale multiple de 20 et taux multiple de 5 : finale entière
    let finale = initiale * (100 + taux) / 100;
    let euros = |v: i64| format!("{} €", nombre(v));

    let correct = euros(initiale);
    let mut faux = vec![
        euros(arrondi_div(finale * (100 - taux), 100)), // baisse appliquée à la valeur finale
        euros(finale - taux),
        euros(finale),
    ];
    completer(&correct, &mut faux, |d| euros(initiale + 10 * d));

    let explication = format!(
        "Prix initial = {finale} / {} = {initiale} €.",
        decimal_court(coefficient(taux), 2)
    );
    let enonce = format!(
        "Après une hausse de {taux} %, un article coûte {} €. Quel était son prix initial ?",
        nombre(finale)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn valeur_initiale_baisse(alea: &mut dyn Alea) -> Question {
    let taux = 5 * alea.entier(1, 6);
    let initiale = 20 * alea.entier(10, 40);
    let finale = initiale * (100 - taux) / 100;
    let euros = |v: i64| format!("{} €", nombre(v));

    let correct = euros(initiale);
    let mut faux = vec![
        euros(arrondi_div(finale * (100 + taux), 100)), // hausse appliquée à la valeur finale
        euros(finale + taux),
        euros(finale),
    ];
    completer(&correct, &mut faux, |d| euros(initiale + 10 * d));

    let explication = format!(
        "Prix initial = {finale} / {} = {initiale} €.",
        decimal_court(coefficient(-taux), 2)
    );
    let enonce = format!(
        "Après une baisse de {taux} %, un article coûte {} €. Quel était son prix initial ?",
        nombre(finale)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn taux_successifs(alea: &mut dyn Alea) -> Question {
    let a = alea.entier_non_nul(-20, 30);
    let b = alea.entier_non_nul(-20, 30);
    let global = taux_global(&[a, b]);
    let taux = arrondi(global);

    let correct = taux_signe(entier(taux), 0);
    let mut faux = vec![
        taux_signe(entier(a + b), 0),             // taux additionnés
        taux_signe(rat(a * b, 100), 0),          // produit des taux
        taux_signe(entier(-taux), 0),            // signe
    ];
    completer(&correct, &mut faux, |d| taux_signe(entier(taux + d), 0));

    let coef = coefficient(a) * coefficient(b);
    let explication = format!(
        "Coefficient global : {} × {} = {}, soit un taux de {correct}.",
        decimal_court(coefficient(a), 2),
        decimal_court(coefficient(b), 2),
        decimal_court(coef, 4)
    );
    let enonce = format!(
        "Un prix subit une évolution de {} puis de {}. Quel est le taux d’évolution global (arrondi à l’unité) ?",
        taux_signe(entier(a), 0),
        taux_signe(entier(b), 0)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn taux_reciproque_question(alea: &mut dyn Alea) -> Question {
    let taux = alea.entier(5, 35);
    let hausse = alea.pile_ou_face();
    let signe = if hausse { taux } else { -taux };
    let reciproque = taux_reciproque(signe);

    let correct = taux_signe(reciproque, 1);
    let mut faux = vec![
        taux_signe(entier(-signe), 0), // opposé
        taux_signe(entier(signe), 0),
        taux_signe(reciproque / entier(2), 1),
    ];
    completer(&correct, &mut faux, |d| {
        taux_signe(reciproque + entier(d), 1)
    });

    let coef = coefficient(signe);
    let inverse = entier(1) / coef;
    let explication = format!(
        "Coefficient réciproque : 1 / {} {} {}, soit un taux de {correct}.",
        decimal_court(coef, 2),
        egal_ou_environ(inverse, 4),
        decimal_court(inverse, 4)
    );
    let enonce = format!(
        "Un prix subit une {} de {taux} %. Quelle évolution permet de revenir au prix initial (arrondir à 0,1 %) ?",
        if hausse { "hausse" } else { "baisse" }
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn taux_depuis_valeurs(alea: &mut dyn Alea) -> Question {
    let depart = alea.entier(80, 220);
    let arrivee = loop {
        let v = alea.entier(80, 220);
        if v != depart {
            break v;
        }
    };
    let ecart = arrivee - depart;
    let taux = rat(ecart * 100, depart);

    let correct = taux_signe(taux, 1);
    let mut faux = vec![
        taux_signe(entier(ecart), 0),         // écart pris pour un taux
        taux_signe(rat(ecart * 100, arrivee), 1), // mauvaise base
        taux_signe(-taux, 1),
    ];
    completer(&correct, &mut faux, |d| taux_signe(taux + entier(d), 1));

    let explication = format!(
        "Taux = ({arrivee} - {depart}) / {depart} × 100 {} {correct}.",
        egal_ou_environ(taux, 1)
    );
    let enonce = format!(
        "Une grandeur passe de {depart} à {arrivee}. Quel est son taux d’évolution (arrondi à 0,1 %) ?"
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn variations_multiples(alea: &mut dyn Alea) -> Question {
    let taux = [
        alea.entier_non_nul(-15, 20),
        alea.entier_non_nul(-15, 20),
        alea.entier_non_nul(-15, 20),
    ];
    let global = taux_global(&taux);
    let somme: i64 = taux.iter().sum();
    let plus_grand = taux.iter().copied().max().unwrap_or(0);

    let correct = taux_signe(global, 1);
    let mut faux = vec![
        taux_signe(entier(somme), 1),
        taux_signe(taux_global(&taux[..2]), 1), // dernière évolution oubliée
        taux_signe(entier(plus_grand), 1),
    ];
    completer(&correct, &mut faux, |d| taux_signe(global + entier(d), 1));

    let coefs: Vec<String> = taux
        .iter()
        .map(|&t| decimal_court(coefficient(t), 2))
        .collect();
    let explication = format!(
        "Coefficient global : {} = {}, soit {correct}.",
        coefs.join(" × "),
        decimal_court(global / entier(100) + entier(1), 6)
    );
    let enonce = format!(
        "Un indice évolue successivement de {}, {} puis {}. Quel est le taux global (arrondi à 0,1 %) ?",
        taux_signe(entier(taux[0]), 0),
        taux_signe(entier(taux[1]), 0),
        taux_signe(entier(taux[2]), 0)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn valeur_apres_deux_variations(alea: &mut dyn Alea) -> Question {
    let initiale = alea.entier(200, 600);
    let a = alea.entier_non_nul(-20, 20);
    let b = alea.entier_non_nul(-20, 20);
    let valeur = entier(initiale) * coefficient(a) * coefficient(b);
    let euros = |r: Rationnel| format!("{} €", decimal(r, 2));

    let correct = euros(valeur);
    let mut faux = vec![
        euros(entier(initiale) * coefficient(a + b)), // taux additionnés
        euros(entier(initiale) * coefficient(a)),     // seconde évolution oubliée
        euros(entier(initiale + a + b)),
    ];
    completer(&correct, &mut faux, |d| euros(valeur + entier(d)));

    let explication = format!(
        "{initiale} × {} × {} {} {correct}.",
        decimal_court(coefficient(a), 2),
        decimal_court(coefficient(b), 2),
        egal_ou_environ(valeur, 2)
    );
    let enonce = format!(
        "Un prix de {initiale} € {} puis {}. Quel est le nouveau prix (au centime) ?",
        variation(a),
        variation(b)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn indice_base_100(alea: &mut dyn Alea) -> Question {
    let annee_base = alea.entier(2018, 2022);
    let annee = annee_base + alea.entier(1, 3);
    let base = alea.entier(120, 480);
    let courant = loop {
        let t = alea.entier(-20, 30);
        let v = arrondi_div(base * (100 + t), 100);
        if v != base {
            break v;
        }
    };
    let indice = arrondi_div(courant * 100, base);

    let correct = nombre(indice);
    let mut faux = vec![
        nombre(courant),
        nombre(arrondi_div(base * 100, courant)), // rapport inversé
        nombre(courant - base),
    ];
    completer(&correct, &mut faux, |d| nombre(indice + d));

    let explication = format!(
        "Indice = {courant} / {base} × 100 {} {indice}.",
        egal_ou_environ(rat(courant * 100, base), 0)
    );
    let enonce = format!(
        "Un article coûtait {base} € en {annee_base} et {courant} € en {annee}. Quel est son indice en {annee}, base 100 en {annee_base} (arrondi à l’unité) ?"
    );
    question(alea, enonce, correct, faux, explication)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taux_global_hausse_puis_baisse() {
        assert_eq!(taux_global(&[10, -10]), entier(-1));
        assert_eq!(taux_global(&[20, 20]), entier(44));
        assert_eq!(taux_global(&[]), entier(0));
    }

    #[test]
    fn taux_reciproque_exact() {
        // +25 % est annulé par -20 %
        assert_eq!(taux_reciproque(25), entier(-20));
        assert_eq!(taux_signe(taux_reciproque(10), 1), "-9,1 %");
        assert_eq!(taux_signe(taux_reciproque(-20), 1), "+25 %");
    }

    #[test]
    fn valeurs_initiales_entieres() {
        use crate::noyau::alea::AleaRand;
        let alea: &mut dyn Alea = &mut AleaRand::graine(7);
        for _ in 0..200 {
            let q = valeur_initiale_hausse(alea);
            assert!(q.attendu().ends_with(" €"));
            assert!(!q.attendu().contains(','), "{}", q.attendu());
        }
    }

    #[test]
    fn taux_reciproque_recalcule() {
        use crate::noyau::alea::AleaScript;
        // hausse (1) de 25 %
        let alea: &mut dyn Alea = &mut AleaScript::new(&[25, 1]);
        let q = taux_reciproque_question(alea);
        let attendu = taux_signe(taux_reciproque(25), 1);
        assert_eq!(attendu, "-20 %");
        assert_eq!(q.reponse_correcte(), Some(attendu.as_str()));
        assert_eq!(
            q.explication(),
            "Coefficient réciproque : 1 / 1,25 = 0,8, soit un taux de -20 %."
        );

        // baisse (0) de 20 %
        let alea: &mut dyn Alea = &mut AleaScript::new(&[20, 0]);
        let q = taux_reciproque_question(alea);
        assert!(q.enonce().starts_with("Un prix subit une baisse de 20 %"), "{}", q.enonce());
        assert_eq!(q.reponse_correcte(), Some(taux_signe(taux_reciproque(-20), 1).as_str()));
        assert_eq!(q.reponse_correcte(), Some("+25 %"));
    }

    #[test]
    fn prix_au_centime() {
        use crate::noyau::alea::AleaScript;
        // 300 € : +10 % puis +5 % = 346,5 €
        let alea: &mut dyn Alea = &mut AleaScript::new(&[300, 10, 5]);
        let q = valeur_apres_deux_variations(alea);
        assert_eq!(q.reponse_correcte(), Some("346,50 €"));
        assert_eq!(q.explication(), "300 × 1,1 × 1,05 = 346,50 €.");

        // 333 × 1,07 × 1,03 = 366,9993
        let alea: &mut dyn Alea = &mut AleaScript::new(&[333, 7, 3]);
        let q = valeur_apres_deux_variations(alea);
        assert_eq!(q.reponse_correcte(), Some("367,00 €"));
        assert!(q.explication().ends_with("≈ 367,00 €."), "{}", q.explication());
    }

    #[test]
    fn variation_en_toutes_lettres() {
        assert_eq!(variation(12), "augmente de 12 %");
        assert_eq!(variation(-5), "diminue de 5 %");
    }
}
