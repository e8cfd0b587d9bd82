// src/noyau/generateurs/statistiques.rs
//
// Banque “statistiques” : moyenne, médiane, quartiles, diagrammes.
// Conventions : médiane de 5 valeurs triées = 3e ; Q1/Q3 de 8 valeurs
// triées = 3e/6e valeur.

use crate::noyau::alea::Alea;
use crate::noyau::format::{decimal, decimal_court, egal_ou_environ, nombre, pourcentage};
use crate::noyau::nombres::{entier, rat, Rationnel};
use crate::noyau::question::Question;

use super::{completer, question};

/* ------------------------ Formules ------------------------ */

/// Médiane exacte (moyenne des deux valeurs centrales si effectif pair).
pub fn mediane(valeurs: &[i64]) -> Rationnel {
    let mut triees = valeurs.to_vec();
    triees.sort_unstable();
    let n = triees.len();
    match n {
        0 => entier(0),
        _ if n % 2 == 1 => entier(triees[n / 2]),
        _ => rat(triees[n / 2 - 1] + triees[n / 2], 2),
    }
}

/// (Q1, Q3) d’une série de 8 valeurs : 3e et 6e valeurs triées.
pub fn quartiles(valeurs: &[i64; 8]) -> (i64, i64) {
    let mut triees = *valeurs;
    triees.sort_unstable();
    (triees[2], triees[5])
}

fn liste(valeurs: &[i64]) -> String {
    valeurs
        .iter()
        .map(|v| nombre(*v))
        .collect::<Vec<_>>()
        .join(" ; ")
}

fn serie_de_huit(alea: &mut dyn Alea) -> [i64; 8] {
    let mut valeurs = [0; 8];
    for v in valeurs.iter_mut() {
        *v = alea.entier(5, 25);
    }
    valeurs
}

/* ------------------------ Générateurs ------------------------ */

pub fn moyenne_ponderee(alea: &mut dyn Alea) -> Question {
    let notes = [alea.entier(8, 18), alea.entier(8, 18), alea.entier(8, 18)];
    let coefs = [alea.entier(1, 4), alea.entier(1, 4), alea.entier(1, 4)];
    let somme_ponderee: i64 = notes.iter().zip(&coefs).map(|(n, c)| n * c).sum();
    let somme_coefs: i64 = coefs.iter().sum();
    let moyenne = rat(somme_ponderee, somme_coefs);

    let correct = decimal_court(moyenne, 2);
    let mut faux = vec![
        decimal_court(rat(notes.iter().sum(), 3), 2), // coefficients ignorés
        nombre(somme_ponderee),                       // division oubliée
        nombre(notes[1]),
    ];
    completer(&correct, &mut faux, |d| decimal_court(moyenne + rat(d, 2), 2));

    let produits: Vec<String> = notes
        .iter()
        .zip(&coefs)
        .map(|(n, c)| format!("{n} × {c}"))
        .collect();
    let explication = format!(
        "Moyenne = ({}) / {somme_coefs} = {somme_ponderee} / {somme_coefs} {} {correct}.",
        produits.join(" + "),
        egal_ou_environ(moyenne, 2)
    );
    let enonce = format!(
        "Un élève obtient {} (coef. {}), {} (coef. {}) et {} (coef. {}). Quelle est sa moyenne (arrondie au centième) ?",
        notes[0], coefs[0], notes[1], coefs[1], notes[2], coefs[2]
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn moyenne_simple(alea: &mut dyn Alea) -> Question {
    let (n1, n2) = (alea.entier(2, 6), alea.entier(2, 6));
    let v1 = alea.entier(5, 15);
    let v2 = loop {
        let v = alea.entier(10, 25);
        if v != v1 {
            break v;
        }
    };
    let somme = n1 * v1 + n2 * v2;
    let effectif = n1 + n2;
    let moyenne = rat(somme, effectif);

    let correct = decimal_court(moyenne, 1);
    let mut faux = vec![
        decimal_court(rat(v1 + v2, 2), 1), // effectifs ignorés
        nombre(somme),                     // division oubliée
        nombre(v2),
    ];
    completer(&correct, &mut faux, |d| decimal_court(moyenne + rat(d, 2), 1));

    let explication = format!(
        "Moyenne = ({n1} × {v1} + {n2} × {v2}) / {effectif} = {somme} / {effectif} {} {correct}.",
        egal_ou_environ(moyenne, 1)
    );
    let enonce = format!(
        "On relève {n1} notes égales à {v1} et {n2} notes égales à {v2}. Quelle est la moyenne (arrondie au dixième) ?"
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn mediane_question(alea: &mut dyn Alea) -> Question {
    let mut triees: Vec<i64> = (0..5).map(|i| alea.entier(10 + 2 * i, 18 + 2 * i)).collect();
    triees.sort_unstable();
    let affichees = alea.melanger(&triees);
    let med = triees[2];
    let somme: i64 = triees.iter().sum();

    let correct = nombre(med);
    let mut faux = vec![
        decimal_court(rat(somme, 5), 1),                 // moyenne
        nombre(affichees[2]),                            // série non triée
        decimal_court(rat(triees[0] + triees[4], 2), 1), // milieu de l’étendue
    ];
    completer(&correct, &mut faux, |d| nombre(med + d));

    let explication = format!(
        "Série triée : {}. La 3e valeur sur 5 est la médiane : {med}.",
        liste(&triees)
    );
    let enonce = format!("Quelle est la médiane de la série : {} ?", liste(&affichees));
    question(alea, enonce, correct, faux, explication)
}

pub fn quartile(alea: &mut dyn Alea) -> Question {
    let valeurs = serie_de_huit(alea);
    let (q1, q3) = quartiles(&valeurs);
    let premier = alea.pile_ou_face();
    let (nom, q, autre, rang) = if premier {
        ("premier quartile Q1", q1, q3, "3e")
    } else {
        ("troisième quartile Q3", q3, q1, "6e")
    };

    let correct = nombre(q);
    let mut faux = vec![
        decimal_court(mediane(&valeurs), 1),
        nombre(autre),
        nombre(if premier { valeurs[2] } else { valeurs[5] }), // série non triée
    ];
    completer(&correct, &mut faux, |d| nombre(q + d));

    let mut triees = valeurs;
    triees.sort_unstable();
    let explication = format!(
        "Série triée : {}. Le {nom} est la {rang} valeur : {q}.",
        liste(&triees)
    );
    let enonce = format!(
        "Quel est le {nom} de la série : {} ?",
        liste(&valeurs)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn ecart_interquartile(alea: &mut dyn Alea) -> Question {
    let valeurs = serie_de_huit(alea);
    let (q1, q3) = quartiles(&valeurs);
    let ecart = q3 - q1;
    let (min, max) = (
        valeurs.iter().copied().min().unwrap_or(0),
        valeurs.iter().copied().max().unwrap_or(0),
    );

    let correct = nombre(ecart);
    let mut faux = vec![
        nombre(max - min), // étendue
        nombre(q3 + q1),
        nombre(q3),
    ];
    completer(&correct, &mut faux, |d| nombre(ecart + d));

    let mut triees = valeurs;
    triees.sort_unstable();
    let explication = format!(
        "Série triée : {}. Q1 = {q1}, Q3 = {q3}, donc Q3 - Q1 = {ecart}.",
        liste(&triees)
    );
    let enonce = format!(
        "Quel est l’écart interquartile de la série : {} ?",
        liste(&valeurs)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn diagramme_batons(alea: &mut dyn Alea) -> Question {
    let base = alea.entier(5, 14);
    let effectifs = loop {
        let e = [
            alea.entier(2, 12),
            alea.entier(2, 12),
            alea.entier(2, 12),
            alea.entier(2, 12),
        ];
        let max = e.iter().copied().max().unwrap_or(0);
        if e.iter().filter(|&&v| v == max).count() == 1 {
            break e;
        }
    };
    let rang_max = (0..4).max_by_key(|&i| effectifs[i]).unwrap_or(0);
    let rang_min = (0..4).min_by_key(|&i| effectifs[i]).unwrap_or(0);
    let mode = base + rang_max as i64;

    let correct = nombre(mode);
    let mut faux = vec![
        nombre(base + rang_min as i64),
        nombre(effectifs[rang_max]), // effectif lu à la place de la valeur
        "Aucune, les effectifs sont égaux".to_string(),
    ];
    completer(&correct, &mut faux, |d| nombre(mode + d));

    let barres: Vec<String> = effectifs
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{} : {e}", base + i as i64))
        .collect();
    let explication = format!(
        "Le bâton le plus haut correspond à la valeur {mode} (effectif {}).",
        effectifs[rang_max]
    );
    let enonce = format!(
        "Un diagramme en bâtons donne les effectifs suivants (valeur : effectif) : {}. Quelle valeur est la plus fréquente ?",
        barres.join(" ; ")
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn frequence_classe(alea: &mut dyn Alea) -> Question {
    let effectifs = [
        alea.entier(2, 15),
        alea.entier(2, 15),
        alea.entier(2, 15),
        alea.entier(2, 15),
    ];
    let total: i64 = effectifs.iter().sum();
    let i = alea.entier(0, 3) as usize;
    let n = effectifs[i];
    let frequence = rat(n, total);
    let classe = |i: usize| format!("[{} ; {}[", 5 * i, 5 * (i + 1));

    let correct = decimal(frequence, 2);
    let mut faux = vec![
        nombre(n),                         // effectif
        decimal(rat(n, total - n), 2),     // mauvais total
        decimal(rat(n, 100), 2),
    ];
    completer(&correct, &mut faux, |d| decimal(frequence + rat(d, 100), 2));

    let classes: Vec<String> = effectifs
        .iter()
        .enumerate()
        .map(|(j, e)| format!("{} : {e}", classe(j)))
        .collect();
    let explication = format!(
        "Fréquence = {n} / {total} {} {correct}.",
        egal_ou_environ(frequence, 2)
    );
    let enonce = format!(
        "Effectifs par classe : {}. Quelle est la fréquence de la classe {} (arrondie au centième) ?",
        classes.join(" ; "),
        classe(i)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn diagramme_circulaire(alea: &mut dyn Alea) -> Question {
    let angle = *alea.element(&[60, 90, 120, 150, 180]);
    let part = rat(angle * 100, 360);

    let correct = pourcentage(part, 1);
    let mut faux = vec![
        format!("{angle} %"),
        pourcentage(rat(angle * 100, 180), 1), // demi-disque pris pour le tout
        pourcentage(rat(angle, 10), 1),
    ];
    completer(&correct, &mut faux, |d| pourcentage(part + entier(5 * d), 1));

    let explication = format!(
        "Un tour complet vaut 360° : {angle} / 360 × 100 {} {correct}.",
        egal_ou_environ(part, 1)
    );
    let enonce = format!(
        "Dans un diagramme circulaire, un secteur a un angle de {angle}°. Quel pourcentage de l’effectif représente-t-il (au dixième) ?"
    );
    question(alea, enonce, correct, faux, explication)
}

/* ------------------------ Boîtes, nuages, séries chronologiques ------------------------ */

pub fn lecture_boite(alea: &mut dyn Alea) -> Question {
    let q1 = alea.entier(20, 40);
    let med = q1 + alea.entier(2, 10);
    let q3 = med + alea.entier(2, 10);
    let min = q1 - alea.entier(3, 12);
    let max = q3 + alea.entier(3, 12);
    let ecart = q3 - q1;

    let correct = nombre(ecart);
    let mut faux = vec![
        nombre(max - min), // étendue
        nombre(med),
        nombre(q3 - med),  // demi-boîte
    ];
    completer(&correct, &mut faux, |d| nombre(ecart + d));

    let explication = format!("Écart interquartile = Q3 - Q1 = {q3} - {q1} = {ecart}.");
    let enonce = format!(
        "Une boîte à moustaches indique : minimum {min}, Q1 = {q1}, médiane {med}, Q3 = {q3}, maximum {max}. Quel est l’écart interquartile ?"
    );
    question(alea, enonce, correct, faux, explication)
}

/// Deux boîtes : comparer les médianes ou les dispersions.
pub fn comparaison_boites(alea: &mut dyn Alea) -> Question {
    let med_a = alea.entier(10, 15);
    let med_b = med_a + alea.entier_non_nul(-2, 3);
    let ei_a = alea.entier(6, 12);
    let ei_b = ei_a + alea.entier_non_nul(-3, 5);
    let boite = |nom: &str, med: i64, ei: i64| {
        let q1 = med - ei / 2;
        format!("{nom} (Q1 = {q1}, Me = {med}, Q3 = {})", q1 + ei)
    };
    let (haute, basse) = if med_a > med_b { ("A", "B") } else { ("B", "A") };
    let (large, etroite) = if ei_a > ei_b { ("A", "B") } else { ("B", "A") };

    let (correct, faux, explication) = if alea.pile_ou_face() {
        (
            format!("La série {haute} a la plus grande médiane."),
            vec![
                format!("La série {basse} a la plus grande médiane."),
                "Les deux séries ont la même médiane.".to_string(),
                "On ne peut rien comparer sans les valeurs.".to_string(),
            ],
            format!("On compare les traits centraux : Me = {med_a} pour A, {med_b} pour B."),
        )
    } else {
        (
            format!("La série {large} est la plus dispersée."),
            vec![
                format!("La série {etroite} est la plus dispersée."),
                "Les deux séries ont la même dispersion.".to_string(),
                "On ne peut rien comparer sans les valeurs.".to_string(),
            ],
            format!(
                "On compare les largeurs des boîtes : Q3 - Q1 = {ei_a} pour A, {ei_b} pour B."
            ),
        )
    };

    let enonce = format!(
        "Deux boîtes à moustaches résument les séries {} et {}. Quelle affirmation est vraie ?",
        boite("A", med_a, ei_a),
        boite("B", med_b, ei_b)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn tendance_nuage(alea: &mut dyn Alea) -> Question {
    let croissante = alea.pile_ou_face();
    let pas = if croissante { 3 } else { -3 };
    let depart = alea.entier(15, 25);
    // bruit ±1 sur un pas de 3 : la série reste strictement monotone
    let points: Vec<(i64, i64)> = (1..=5)
        .map(|x| (x, depart + pas * x + alea.entier(-1, 1)))
        .collect();

    const MONTE: &str = "Lorsque x augmente, y augmente.";
    const DESCEND: &str = "Lorsque x augmente, y diminue.";
    let (correct, oppose) = if croissante { (MONTE, DESCEND) } else { (DESCEND, MONTE) };
    let faux = vec![
        oppose.to_string(),
        "Les valeurs de y sont constantes.".to_string(),
        "Il n’y a aucun lien entre x et y.".to_string(),
    ];

    let (premier, dernier) = (points[0].1, points[4].1);
    let explication = format!(
        "De x = 1 à x = 5, y passe de {premier} à {dernier} : tendance {}.",
        if croissante { "croissante" } else { "décroissante" }
    );
    let liste: Vec<String> = points.iter().map(|(x, y)| format!("({x} ; {y})")).collect();
    let enonce = format!(
        "Un nuage de points contient {}. Que peut-on dire ?",
        liste.join(", ")
    );
    question(alea, enonce, correct.to_string(), faux, explication)
}

pub fn serie_chronologique(alea: &mut dyn Alea) -> Question {
    let annee = alea.entier(2018, 2022);
    let (v0, v1, v2) = loop {
        let v0 = alea.entier(40, 120);
        let v1 = v0 + alea.entier(-15, 25);
        let v2 = v1 + alea.entier(-10, 30);
        if v2 != v0 {
            break (v0, v1, v2);
        }
    };
    let hausse = v2 > v0;

    const AUGMENTE: &str = "La grandeur augmente globalement.";
    const DIMINUE: &str = "La grandeur diminue globalement.";
    let (correct, oppose) = if hausse { (AUGMENTE, DIMINUE) } else { (DIMINUE, AUGMENTE) };
    let faux = vec![
        oppose.to_string(),
        "La grandeur reste constante.".to_string(),
        "Impossible à dire sans calcul exact.".to_string(),
    ];

    let explication = format!(
        "De {v0} en {annee} à {v2} en {}, l’évolution globale est de {:+} : {}.",
        annee + 2,
        v2 - v0,
        if hausse { "hausse" } else { "baisse" }
    );
    let enonce = format!(
        "Une courbe chronologique passe par ({annee} ; {v0}), ({} ; {v1}) et ({} ; {v2}). Que peut-on dire de l’évolution ?",
        annee + 1,
        annee + 2
    );
    question(alea, enonce, correct.to_string(), faux, explication)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mediane_impaire_et_paire() {
        assert_eq!(mediane(&[14, 10, 18, 12, 16]), entier(14));
        assert_eq!(mediane(&[4, 1, 3, 2]), rat(5, 2));
        assert_eq!(mediane(&[]), entier(0));
    }

    #[test]
    fn quartiles_troisieme_et_sixieme() {
        let serie = [20, 5, 12, 8, 25, 15, 10, 18];
        // triée : 5 8 10 12 15 18 20 25
        assert_eq!(quartiles(&serie), (10, 18));
    }

    #[test]
    fn diagramme_circulaire_quart() {
        use crate::noyau::alea::AleaScript;
        // angle = 90° (indice 1)
        let alea: &mut dyn Alea = &mut AleaScript::new(&[1]);
        let q = diagramme_circulaire(alea);
        assert_eq!(q.attendu(), "25 %");
        assert_eq!(
            q.explication(),
            "Un tour complet vaut 360° : 90 / 360 × 100 = 25 %."
        );
    }

    #[test]
    fn moyenne_ponderee_recalculee() {
        use crate::noyau::alea::AleaScript;
        // notes 12, 15, 9 ; coefficients 2, 1, 3
        let alea: &mut dyn Alea = &mut AleaScript::new(&[12, 15, 9, 2, 1, 3]);
        let q = moyenne_ponderee(alea);
        let attendu = decimal_court(rat(12 * 2 + 15 + 9 * 3, 6), 2);
        assert_eq!(attendu, "11");
        assert_eq!(q.reponse_correcte(), Some(attendu.as_str()));
        assert!(q.explication().ends_with("66 / 6 = 11."), "{}", q.explication());

        // 40 / 3 n’est pas décimal
        let alea: &mut dyn Alea = &mut AleaScript::new(&[10, 13, 17, 1, 1, 1]);
        let q = moyenne_ponderee(alea);
        assert_eq!(q.reponse_correcte(), Some("13,33"));
        assert!(q.explication().ends_with("40 / 3 ≈ 13,33."), "{}", q.explication());
    }

    #[test]
    fn mediane_recalculee() {
        use crate::noyau::alea::AleaScript;
        let valeurs = [15, 12, 20, 17, 25];
        let alea: &mut dyn Alea = &mut AleaScript::new(&valeurs);
        let q = mediane_question(alea);
        let attendu = decimal_court(mediane(&valeurs), 1);
        assert_eq!(attendu, "17");
        assert_eq!(q.reponse_correcte(), Some(attendu.as_str()));
    }

    #[test]
    fn quartiles_recalcules() {
        use crate::noyau::alea::AleaScript;
        let serie = [20, 5, 12, 8, 25, 15, 10, 18];
        let (q1, q3) = quartiles(&serie);

        let mut script = serie.to_vec();
        script.push(1); // Q1
        let alea: &mut dyn Alea = &mut AleaScript::new(&script);
        let q = quartile(alea);
        assert!(q.enonce().contains("premier quartile Q1"), "{}", q.enonce());
        assert_eq!(q.reponse_correcte(), Some(nombre(q1).as_str()));

        script[8] = 0; // Q3
        let alea: &mut dyn Alea = &mut AleaScript::new(&script);
        let q = quartile(alea);
        assert_eq!(q.reponse_correcte(), Some(nombre(q3).as_str()));
        assert_eq!((q1, q3), (10, 18));
    }

    #[test]
    fn moyenne_simple_au_dixieme() {
        use crate::noyau::alea::AleaScript;
        // 3 notes de 8, 4 notes de 15 : 84 / 7 = 12
        let alea: &mut dyn Alea = &mut AleaScript::new(&[3, 4, 8, 15]);
        let q = moyenne_simple(alea);
        assert_eq!(q.reponse_correcte(), Some("12"));
        assert!(q.explication().ends_with("84 / 7 = 12."), "{}", q.explication());
    }

    #[test]
    fn boite_ecart_interquartile() {
        use crate::noyau::alea::AleaScript;
        // Q1 = 30, Me = 35, Q3 = 42, min = 25, max = 50
        let alea: &mut dyn Alea = &mut AleaScript::new(&[30, 5, 7, 5, 8]);
        let q = lecture_boite(alea);
        assert_eq!(q.reponse_correcte(), Some("12"));
        assert!(q.choix().iter().any(|c| c == "25"), "{:?}", q.choix()); // étendue
    }

    #[test]
    fn nuage_decroissant() {
        use crate::noyau::alea::AleaRand;
        let alea: &mut dyn Alea = &mut AleaRand::graine(6);
        for _ in 0..50 {
            let q = tendance_nuage(alea);
            let attendu = if q.explication().contains("décroissante") {
                "Lorsque x augmente, y diminue."
            } else {
                "Lorsque x augmente, y augmente."
            };
            assert_eq!(q.reponse_correcte(), Some(attendu));
        }
    }
}
