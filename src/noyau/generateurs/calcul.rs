// src/noyau/generateurs/calcul.rs
//
// Banque “calcul” : équations, fractions, puissances, conversions, identités.

use crate::noyau::alea::Alea;
use std::cmp::Ordering;

use crate::noyau::format::{
    affine, decimal_court, egal_ou_environ, entre_parentheses, exposant, fraction, nombre,
    second_degre, signe, trinome,
};
use crate::noyau::nombres::{arrondi_div, entier, rat, simplifier_fraction, Fraction, Rationnel};
use crate::noyau::question::Question;

use super::{completer, decalage, question};

/* ------------------------ Formules ------------------------ */

/// ax + b = c  =>  x = (c - b)/a  (a ≠ 0)
pub fn solution_lineaire(a: i64, b: i64, c: i64) -> Rationnel {
    rat(c - b, a)
}

/// n1/q1 + n2/q2 = (n1 q2 + n2 q1)/(q1 q2), simplifiée.
pub fn somme_de_fractions(n1: i64, q1: i64, n2: i64, q2: i64) -> Fraction {
    simplifier_fraction(n1 * q2 + n2 * q1, q1 * q2)
}

fn puissance_dix(e: i32) -> Rationnel {
    let p = 10i64.pow(e.unsigned_abs());
    if e >= 0 {
        entier(p)
    } else {
        rat(1, p)
    }
}

/* ------------------------ Équations ------------------------ */

pub fn equation_lineaire(alea: &mut dyn Alea) -> Question {
    let a = alea.entier(2, 9);
    let x = alea.entier(-5, 5);
    let b = alea.entier(-10, 10);
    let c = a * x + b;

    let correct = nombre(x);
    let mut faux = vec![
        decimal_court(rat(c, a), 2), // b oublié
        nombre(-x),                  // erreur de signe
        nombre(c - b),               // division oubliée
    ];
    completer(&correct, &mut faux, |d| nombre(x + d));

    let explication = format!(
        "On isole x : {a}x = {c} {} = {}, puis x = ({c} - {})/{a} = {x}.",
        signe(-b),
        c - b,
        entre_parentheses(b)
    );
    let enonce = format!("Résoudre {} = {c}.", affine(a, b));
    question(alea, enonce, correct, faux, explication)
}

pub fn equation_produit_nul(alea: &mut dyn Alea) -> Question {
    let a = alea.entier_non_nul(-6, 6);
    let b = loop {
        let b = alea.entier_non_nul(-6, 6);
        if b != a && b != -a {
            break b;
        }
    };

    let solutions = |u: i64, v: i64| format!("x = {u} ou x = {v}");
    let correct = solutions(a, b);
    let mut faux = vec![solutions(-a, -b), format!("x = {a}"), solutions(a, -b)];
    completer(&correct, &mut faux, |d| solutions(a + d, b + d));

    let enonce = format!("Résoudre (x {})(x {}) = 0.", signe(-a), signe(-b));
    let explication = format!(
        "Un produit est nul si l’un de ses facteurs est nul : x {} = 0 ou x {} = 0, donc {correct}.",
        signe(-a),
        signe(-b)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn equation_carre(alea: &mut dyn Alea) -> Question {
    let v = alea.entier(2, 9);
    let k = v * v;
    let negatif = alea.entier(1, 5) == 1;
    let paire = |u: i64| format!("x = -{u} ou x = {u}");

    if negatif {
        let correct = "Pas de solution".to_string();
        let faux = vec![paire(v), format!("x = -{v}"), format!("x = {v}")];
        let explication = format!("Un carré est toujours positif : x² = -{k} n’a pas de solution réelle.");
        return question(alea, format!("Résoudre x² = -{k}."), correct, faux, explication);
    }

    let correct = paire(v);
    let mut faux = vec![format!("x = {v}"), paire(k), "Pas de solution".to_string()];
    completer(&correct, &mut faux, |d| paire((v + d).abs()));

    let explication = format!("x² = {k} ⇔ x = √{k} ou x = -√{k}, soit x = {v} ou x = -{v}.");
    question(alea, format!("Résoudre x² = {k}."), correct, faux, explication)
}

pub fn equation_quotient(alea: &mut dyn Alea) -> Question {
    let b = alea.entier(2, 6);
    let x = alea.entier(2, 9);
    let a = b * x;

    let correct = format!("x = {x}");
    let mut faux = vec![
        format!("x = {}", a * b),
        format!("x = {}", fraction(rat(b, a))),
        format!("x = {}", a - b),
    ];
    completer(&correct, &mut faux, |d| format!("x = {}", x + d));

    let explication = format!("{a}/x = {b} ⇔ {b}x = {a} ⇔ x = {a}/{b} = {x}.");
    question(alea, format!("Résoudre {a}/x = {b} (x ≠ 0)."), correct, faux, explication)
}

pub fn inequation_premier_degre(alea: &mut dyn Alea) -> Question {
    let a = alea.entier_non_nul(-6, 6);
    let b = alea.entier(-8, 8);
    let c = alea.entier(-6, 10);
    let (sens, oppose) = if alea.pile_ou_face() { ('<', '>') } else { ('>', '<') };

    let borne = solution_lineaire(a, b, c);
    let (sens_final, autre) = if a < 0 { (oppose, sens) } else { (sens, oppose) };
    let solution = |s: char, r: Rationnel| format!("x {s} {}", fraction(r));

    let correct = solution(sens_final, borne);
    let mut faux = vec![
        solution(autre, borne),            // sens non inversé / inversé à tort
        solution(sens_final, -borne),      // erreur de signe
        solution(sens_final, rat(c + b, a)), // b transposé sans changer de signe
    ];
    completer(&correct, &mut faux, |d| solution(sens_final, borne + entier(d)));

    let note = if a < 0 {
        " (nombre négatif : on change le sens de l’inégalité)"
    } else {
        ""
    };
    let explication = format!(
        "{a}x {sens} {c} {}, soit {a}x {sens} {}. On divise par {a}{note} : {correct}.",
        signe(-b),
        c - b
    );
    let enonce = format!("Résoudre {} {sens} {c}.", affine(a, b));
    question(alea, enonce, correct, faux, explication)
}

/* ------------------------ Fractions ------------------------ */

pub fn somme_fractions(alea: &mut dyn Alea) -> Question {
    let q1 = alea.entier(2, 9);
    let q2 = alea.entier(2, 9);
    let n1 = alea.entier(1, q1 - 1);
    let n2 = alea.entier(1, q2 - 1);
    let num = n1 * q2 + n2 * q1;
    let den = q1 * q2;
    let somme = somme_de_fractions(n1, q1, n2, q2).valeur();

    let correct = fraction(somme);
    let mut faux = vec![
        format!("{num}/{den}"),            // non simplifiée
        fraction(rat(n1 + n2, q1 + q2)),   // numérateurs et dénominateurs ajoutés
        fraction(rat(n1 * n2, q1 * q2)),   // produit au lieu de somme
    ];
    completer(&correct, &mut faux, |d| fraction(somme + rat(d, den)));

    let explication = format!(
        "Dénominateur commun {den} : {n1}×{q2} + {n2}×{q1} = {num}, donc {n1}/{q1} + {n2}/{q2} = {num}/{den} = {correct}."
    );
    let enonce = format!("Calculer {n1}/{q1} + {n2}/{q2} (résultat sous forme irréductible).");
    question(alea, enonce, correct, faux, explication)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OperationFraction {
    Difference,
    Produit,
    Quotient,
}

pub fn operations_fractions(alea: &mut dyn Alea) -> Question {
    use OperationFraction::*;

    let q1 = alea.entier(2, 9);
    let q2 = alea.entier(2, 9);
    let n1 = alea.entier(1, q1 - 1);
    let n2 = alea.entier(1, q2 - 1);
    let op = *alea.element(&[Difference, Produit, Quotient]);

    // (symbole, numérateur brut, dénominateur brut, résultat de l’opération confondue)
    let (symbole, num, den, confusion) = match op {
        Difference => ("-", n1 * q2 - n2 * q1, q1 * q2, rat(n1 * q2 + n2 * q1, q1 * q2)),
        Produit => ("×", n1 * n2, q1 * q2, rat(n1 * q2, q1 * n2)),
        Quotient => ("÷", n1 * q2, q1 * n2, rat(n1 * n2, q1 * q2)),
    };
    let resultat = rat(num, den);
    let correct = fraction(resultat);

    let mut faux = Vec::new();
    if num != 0 {
        faux.push(format!("{num}/{den}")); // non simplifiée
        faux.push(fraction(resultat.recip())); // inverse
    }
    faux.push(fraction(confusion));
    let pas = *resultat.denom();
    completer(&correct, &mut faux, |d| fraction(resultat + rat(d, pas)));

    let brut = format!("{num}/{den}");
    let etape = if brut == correct {
        correct.clone()
    } else {
        format!("{brut} = {correct}")
    };
    let explication = match op {
        Difference => format!(
            "Même dénominateur {den} : ({n1}×{q2} - {n2}×{q1})/{den} = {etape}."
        ),
        Produit => format!("On multiplie numérateurs et dénominateurs : {etape}."),
        Quotient => format!(
            "Diviser revient à multiplier par l’inverse : {n1}/{q1} × {q2}/{n2} = {etape}."
        ),
    };
    let enonce = format!(
        "Calculer {n1}/{q1} {symbole} {n2}/{q2} (résultat sous forme irréductible)."
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn decimal_vers_fraction(alea: &mut dyn Alea) -> Question {
    const DENOMINATEURS: [i64; 6] = [4, 5, 8, 10, 20, 25];
    let den = *alea.element(&DENOMINATEURS);
    let num = alea.entier(1, den - 1);
    let valeur = rat(num, den);

    let texte = decimal_court(valeur, 3);
    let chiffres = texte.split_once(',').map_or(0, |(_, f)| f.len()) as u32;
    let mantisse = (valeur * entier(10i64.pow(chiffres))).to_integer();

    let correct = fraction(valeur);
    let mut faux = vec![
        format!("{num}/{den}"),                                  // non simplifiée
        format!("{mantisse}/{}", 10i64.pow(chiffres + 1)),        // mauvaise puissance de 10
        fraction(valeur.recip()),                                 // inverse
    ];
    let pas = *valeur.denom();
    completer(&correct, &mut faux, |d| fraction(valeur + rat(d, pas)));

    let explication = format!(
        "{texte} = {mantisse}/{} = {correct} après simplification.",
        10i64.pow(chiffres)
    );
    let enonce = format!("Écrire {texte} sous forme de fraction irréductible.");
    question(alea, enonce, correct, faux, explication)
}

pub fn pourcentage_vers_decimal(alea: &mut dyn Alea) -> Question {
    let p = alea.entier(5, 95);

    let correct = decimal_court(rat(p, 100), 2);
    let mut faux = vec![
        nombre(p),
        decimal_court(rat(p, 10), 1),
        decimal_court(rat(p, 1000), 3),
    ];
    completer(&correct, &mut faux, |d| decimal_court(rat(p + d, 100), 2));

    let explication = format!("{p} % = {p}/100 = {correct}.");
    let enonce = format!("Quelle écriture décimale correspond à {p} % ?");
    question(alea, enonce, correct, faux, explication)
}

/* ------------------------ Calcul numérique ------------------------ */

pub fn regle_puissances(alea: &mut dyn Alea) -> Question {
    const BASES: [i64; 5] = [2, 3, 4, 5, 10];
    let base = *alea.element(&BASES);
    let m = alea.entier(2, 5);
    let n = alea.entier(2, 5);
    let b = base.to_string();

    let correct = exposant(&b, m + n);
    let mut faux = vec![
        exposant(&b, m * n),                         // exposants multipliés
        exposant(&(base * base).to_string(), m + n), // bases multipliées
        exposant(&b, m + n - 1),
    ];
    completer(&correct, &mut faux, |d| exposant(&b, m + n + d));

    let explication = format!(
        "Même base : on additionne les exposants, {m} + {n} = {}, d’où {correct}.",
        m + n
    );
    let enonce = format!("Simplifier {} × {}.", exposant(&b, m), exposant(&b, n));
    question(alea, enonce, correct, faux, explication)
}

pub fn calcul_mental(alea: &mut dyn Alea) -> Question {
    let a = alea.entier(20, 80);
    let b = alea.entier(5, 30);
    let addition = alea.pile_ou_face();
    let (symbole, resultat, autre) = if addition {
        ('+', a + b, a - b)
    } else {
        ('-', a - b, a + b)
    };

    let correct = nombre(resultat);
    let mut faux = vec![nombre(autre), nombre(resultat + 10), nombre(resultat - 10)];
    completer(&correct, &mut faux, |d| nombre(resultat + d));

    let (dizaines, unites) = (b - b % 10, b % 10);
    let explication = if dizaines > 0 && unites > 0 {
        format!("{a} {symbole} {b} = {a} {symbole} {dizaines} {symbole} {unites} = {resultat}.")
    } else {
        format!("{a} {symbole} {b} = {resultat}.")
    };
    let enonce = format!("Calculer mentalement {a} {symbole} {b}.");
    question(alea, enonce, correct, faux, explication)
}

pub fn comparaison_decimaux(alea: &mut dyn Alea) -> Question {
    let a = rat(alea.entier(-20, 40), 2);
    let b = rat(alea.entier(-20, 40), 2);
    let (ta, tb) = (decimal_court(a, 1), decimal_court(b, 1));

    let symbole = match a.cmp(&b) {
        std::cmp::Ordering::Greater => ">",
        std::cmp::Ordering::Less => "<",
        std::cmp::Ordering::Equal => "=",
    };
    let correct = format!("{ta} {symbole} {tb}");
    let faux: Vec<String> = [">", "<", "="]
        .into_iter()
        .map(|s| format!("{ta} {s} {tb}"))
        .filter(|c| *c != correct)
        .collect();

    let explication = format!("On compare les deux décimaux : {correct}.");
    question(alea, "Quelle comparaison est exacte ?".to_string(), correct, faux, explication)
}

pub fn ordre_de_grandeur(alea: &mut dyn Alea) -> Question {
    let a = alea.entier(12, 98);
    let b = alea.entier(12, 98);
    let (ra, rb) = (arrondi_div(a, 10) * 10, arrondi_div(b, 10) * 10);
    let estimation = ra * rb;

    let correct = nombre(estimation);
    let mut faux = vec![
        nombre(estimation * 10),
        nombre(estimation / 10),
        nombre(ra + rb), // somme au lieu du produit
    ];
    completer(&correct, &mut faux, |d| nombre(estimation + 100 * d));

    let explication = format!(
        "{a} ≈ {ra} et {b} ≈ {rb}, donc {a} × {b} ≈ {ra} × {rb} = {correct} (valeur exacte : {}).",
        nombre(a * b)
    );
    let enonce = format!("Donner un ordre de grandeur de {a} × {b}.");
    question(alea, enonce, correct, faux, explication)
}

/* ------------------------ Conversions ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grandeur {
    Longueur,
    Aire,
    Volume,
    Masse,
    Contenance,
}

impl Grandeur {
    /// (unité, exposant de 10 par rapport à l’unité pivot)
    fn unites(self) -> &'static [(&'static str, i32)] {
        match self {
            Grandeur::Longueur => &[("km", 3), ("m", 0), ("dm", -1), ("cm", -2), ("mm", -3)],
            Grandeur::Aire => &[("m²", 0), ("dm²", -2), ("cm²", -4)],
            Grandeur::Volume => &[("m³", 0), ("dm³", -3), ("cm³", -6)],
            Grandeur::Masse => &[("t", 3), ("kg", 0), ("g", -3), ("mg", -6)],
            Grandeur::Contenance => &[("L", 0), ("dL", -1), ("cL", -2), ("mL", -3)],
        }
    }

    /// Facteur (en puissance de 10) entre deux unités voisines.
    fn pas(self) -> i32 {
        match self {
            Grandeur::Longueur | Grandeur::Contenance => 1,
            Grandeur::Aire => 2,
            Grandeur::Volume | Grandeur::Masse => 3,
        }
    }

    fn plage(self) -> (i64, i64) {
        match self {
            Grandeur::Longueur => (2, 200),
            Grandeur::Aire => (1, 25),
            Grandeur::Volume => (2, 40),
            Grandeur::Masse => (2, 500),
            Grandeur::Contenance => (5, 150),
        }
    }

    fn remarque(self) -> &'static str {
        match self {
            Grandeur::Longueur | Grandeur::Contenance => "",
            Grandeur::Aire => " (aires : facteur 100 entre deux unités voisines)",
            Grandeur::Volume => " (volumes : facteur 1000 entre deux unités voisines)",
            Grandeur::Masse => " (le kilogramme sert d’unité pivot)",
        }
    }
}

pub fn conversion(alea: &mut dyn Alea, grandeur: Grandeur) -> Question {
    let unites = grandeur.unites();
    let (depart, e_depart) = *alea.element(unites);
    let (arrivee, e_arrivee) = loop {
        let u = *alea.element(unites);
        if u.0 != depart {
            break u;
        }
    };
    let (min, max) = grandeur.plage();
    let valeur = alea.entier(min, max);

    let facteur = puissance_dix(e_depart - e_arrivee);
    let converti = entier(valeur) * facteur;
    let texte = |r: Rationnel| format!("{} {arrivee}", decimal_court(r, 15));

    let pas = grandeur.pas();
    let correct = texte(converti);
    let mut faux = vec![
        texte(converti * puissance_dix(pas)),
        texte(converti * puissance_dix(-pas)),
        format!("{valeur} {arrivee}"), // conversion oubliée
    ];
    completer(&correct, &mut faux, |d| texte(entier(valeur + d) * facteur));

    let explication = format!(
        "1 {depart} = {} {arrivee}{}, donc {valeur} {depart} = {correct}.",
        decimal_court(facteur, 15),
        grandeur.remarque()
    );
    let enonce = format!("Convertir {valeur} {depart} en {arrivee}.");
    question(alea, enonce, correct, faux, explication)
}

pub fn conversion_duree(alea: &mut dyn Alea) -> Question {
    const UNITES: [(&str, i64); 3] = [("h", 3600), ("min", 60), ("s", 1)];
    let (depart, s_depart) = *alea.element(&UNITES);
    let (arrivee, s_arrivee) = loop {
        let u = *alea.element(&UNITES);
        if u.0 != depart {
            break u;
        }
    };

    // vers une unité plus grande : valeur multiple du rapport => résultat entier
    let (valeur, converti) = if s_depart < s_arrivee {
        let k = alea.entier(1, 12);
        (k * (s_arrivee / s_depart), k)
    } else {
        let v = alea.entier(1, 180);
        (v, v * (s_depart / s_arrivee))
    };

    let texte = |r: Rationnel| format!("{} {arrivee}", decimal_court(r, 2));
    let correct = texte(entier(converti));
    let mut faux = vec![
        texte(entier(converti * 60)),
        texte(rat(converti, 60)),
        format!("{valeur} {arrivee}"),
    ];
    completer(&correct, &mut faux, |d| texte(entier(converti + d)));

    let equivalence = if s_depart > s_arrivee {
        format!("1 {depart} = {} {arrivee}", s_depart / s_arrivee)
    } else {
        format!("1 {arrivee} = {} {depart}", s_arrivee / s_depart)
    };
    let explication = format!("{equivalence}, donc {valeur} {depart} = {correct}.");
    let enonce = format!("Convertir {valeur} {depart} en {arrivee}.");
    question(alea, enonce, correct, faux, explication)
}

/// km/h <-> m/s : 1 m/s = 3,6 km/h.
pub fn conversion_vitesse(alea: &mut dyn Alea) -> Question {
    let vers_ms = alea.pile_ou_face();
    // km/h multiple de 9 : résultat en m/s au dixième près, exact
    let (valeur, depart, arrivee, converti, inverse) = if vers_ms {
        let v = 9 * alea.entier(4, 13);
        (v, "km/h", "m/s", rat(10 * v, 36), rat(36 * v, 10))
    } else {
        let v = alea.entier(2, 40);
        (v, "m/s", "km/h", rat(36 * v, 10), rat(10 * v, 36))
    };
    let texte = |r: Rationnel| format!("{} {arrivee}", decimal_court(r, 2));

    let correct = texte(converti);
    let mut faux = vec![
        texte(inverse), // 3,6 appliqué dans le mauvais sens
        texte(converti * entier(10)),
        format!("{valeur} {arrivee}"),
    ];
    completer(&correct, &mut faux, |d| texte(converti + entier(d)));

    let operation = if vers_ms {
        "on divise par 3,6"
    } else {
        "on multiplie par 3,6"
    };
    let explication = format!(
        "1 m/s = 3600 m/h = 3,6 km/h : {operation}, donc {valeur} {depart} = {correct}."
    );
    let enonce = format!("Convertir {valeur} {depart} en {arrivee}.");
    question(alea, enonce, correct, faux, explication)
}

/* ------------------------ Calcul littéral ------------------------ */

pub fn identites_remarquables(alea: &mut dyn Alea) -> Question {
    let a = alea.entier(2, 9);
    let carre = a * a;

    let (expression, b, c, faux, regle) = match alea.entier(0, 2) {
        0 => (
            format!("(x + {a})²"),
            2 * a,
            carre,
            vec![trinome(0, carre), trinome(a, carre), trinome(2 * a, -carre)],
            "(a + b)² = a² + 2ab + b²",
        ),
        1 => (
            format!("(x - {a})²"),
            -2 * a,
            carre,
            vec![trinome(0, -carre), trinome(-a, carre), trinome(-2 * a, -carre)],
            "(a - b)² = a² - 2ab + b²",
        ),
        _ => (
            format!("(x + {a})(x - {a})"),
            0,
            -carre,
            vec![trinome(0, carre), trinome(-2 * a, carre), trinome(2 * a, -carre)],
            "(a + b)(a - b) = a² - b²",
        ),
    };

    let correct = trinome(b, c);
    let mut faux = faux;
    completer(&correct, &mut faux, |d| trinome(b + d, c));

    let explication = format!("{regle} avec a = x et b = {a} : {expression} = {correct}.");
    let enonce = format!("Développer {expression}.");
    question(alea, enonce, correct, faux, explication)
}

fn facteur(racine: i64) -> String {
    if racine == 0 {
        "x".to_string()
    } else {
        format!("(x {})", signe(-racine))
    }
}

/// (x - u)(x - v), facteur “x” en tête s’il existe.
fn forme_factorisee(u: i64, v: i64) -> String {
    let (u, v) = if v == 0 { (v, u) } else { (u, v) };
    format!("{}{}", facteur(u), facteur(v))
}

pub fn factorisation_trinome(alea: &mut dyn Alea) -> Question {
    let p1 = alea.entier_non_nul(-5, 5);
    let p2 = alea.entier_non_nul(-5, 5);
    let (r1, r2) = (p1.min(p2), p1.max(p2));
    let (somme, produit) = (r1 + r2, r1 * r2);

    // une paire de racines définit le trinôme par (somme, produit) :
    // on écarte toute paire équivalente à la bonne.
    let candidats = [(-r1, -r2), (r1, -r2), (-r1, r2)]
        .into_iter()
        .chain((1..=20).map(|k| (r1 + decalage(k), r2)));
    let mut paires: Vec<(i64, i64)> = Vec::new();
    for (u, v) in candidats {
        if paires.len() == 3 {
            break;
        }
        let paire = (u.min(v), u.max(v));
        if (u + v, u * v) == (somme, produit) || paires.contains(&paire) {
            continue;
        }
        paires.push(paire);
    }

    let correct = forme_factorisee(r1, r2);
    let faux = paires
        .into_iter()
        .map(|(u, v)| forme_factorisee(u, v))
        .collect();

    let explication = format!(
        "On cherche deux nombres de somme {somme} et de produit {produit} : {r1} et {r2}, d’où {correct}."
    );
    let enonce = format!("Factoriser {}.", trinome(-somme, produit));
    question(alea, enonce, correct, faux, explication)
}

pub fn facteur_commun(alea: &mut dyn Alea) -> Question {
    let a = alea.entier(2, 8);
    let b = alea.entier(2, 8);
    let carre = alea.pile_ou_face();

    let (expression, correct, mut faux, explication) = if carre {
        let correct = format!("x({})", affine(a, b));
        let explication = format!(
            "x est commun aux deux termes : {} = x × {a}x + x × {b} = {correct}.",
            second_degre(a, b, 0)
        );
        (
            second_degre(a, b, 0),
            correct,
            vec![
                format!("{}x", a + b),
                affine(a, b), // x oublié
                format!("x²({})", affine(a, b)),
            ],
            explication,
        )
    } else {
        let correct = format!("{}x", a + b);
        let explication = format!(
            "x est commun aux deux termes : {a}x + {b}x = ({a} + {b})x = {correct}."
        );
        (
            format!("{a}x + {b}x"),
            correct,
            vec![
                format!("{}x²", a + b),
                format!("{}x", a * b), // coefficients multipliés
                nombre(a + b),
            ],
            explication,
        )
    };
    completer(&correct, &mut faux, |d| format!("{}x", a + b + d));

    let enonce = format!("Factoriser {expression}.");
    question(alea, enonce, correct, faux, explication)
}

/// Signe devant une parenthèse, opposé, inverse.
pub fn regles_de_signe(alea: &mut dyn Alea) -> Question {
    let a = alea.entier(2, 9);

    let (enonce, correct, faux, explication) = match alea.entier(0, 3) {
        0 => (
            format!("Développer -(x + {a})."),
            affine(-1, -a),
            vec![affine(1, -a), affine(-1, a), affine(1, a)],
            "Un signe - devant une parenthèse change le signe de chaque terme.",
        ),
        1 => (
            format!("Développer -(x - {a})."),
            affine(-1, a),
            vec![affine(-1, -a), affine(1, -a), affine(1, a)],
            "Un signe - devant une parenthèse change le signe de chaque terme.",
        ),
        2 => (
            format!("Calculer (-1) × {a}x."),
            affine(-a, 0),
            vec![affine(a, 0), affine(-1, a), nombre(-a)],
            "Multiplier par -1 donne l’opposé.",
        ),
        _ => (
            format!("Quel est l’inverse de {a} ?"),
            format!("1/{a}"),
            vec![format!("-1/{a}"), nombre(-a), nombre(a * a)],
            "L’inverse d’un nombre non nul est le nombre dont le produit avec lui vaut 1.",
        ),
    };

    let explication = format!("{explication} Réponse : {correct}.");
    question(alea, enonce, correct, faux, explication)
}

/// Reconnaître a² + 2ab + b², a² - 2ab + b² ou a² - b².
pub fn factorisation_identites(alea: &mut dyn Alea) -> Question {
    let a = alea.entier(2, 8);
    let b = alea.entier(1, 4);
    let carre = |c: i64| format!("({})²", affine(b, c));
    let produit = |c: i64| format!("({})({})", affine(b, -c), affine(b, c));

    let (expression, correct, faux, regle) = match alea.entier(0, 2) {
        0 => (
            second_degre(b * b, 2 * a * b, a * a),
            carre(a),
            vec![carre(-a), produit(a), carre(2 * a)],
            "a² + 2ab + b² = (a + b)²",
        ),
        1 => (
            second_degre(b * b, -2 * a * b, a * a),
            carre(-a),
            vec![carre(a), produit(a), carre(-2 * a)],
            "a² - 2ab + b² = (a - b)²",
        ),
        _ => (
            second_degre(b * b, 0, -a * a),
            produit(a),
            vec![carre(-a), carre(a), produit(a * a)],
            "a² - b² = (a - b)(a + b)",
        ),
    };

    let explication = format!("{regle} : {expression} = {correct}.");
    let enonce = format!("Factoriser {expression}.");
    question(alea, enonce, correct, faux, explication)
}

pub fn isoler_variable(alea: &mut dyn Alea) -> Question {
    const FORMULES: [(&str, &str, [&str; 3]); 4] = [
        (
            "Dans la formule d = v × t, isoler v.",
            "v = d / t",
            ["v = d × t", "v = t / d", "v = d - t"],
        ),
        (
            "Dans la formule P = 2(L + l), exprimer L en fonction de P et l.",
            "L = P/2 - l",
            ["L = P - l", "L = 2P - l", "L = P/(2l)"],
        ),
        (
            "Dans la formule U = R × I, isoler R.",
            "R = U / I",
            ["R = U × I", "R = I / U", "R = U - I"],
        ),
        (
            "Dans la formule A = πr², exprimer r (r > 0).",
            "r = √(A/π)",
            ["r = A/π", "r = √A/π", "r = (A/π)²"],
        ),
    ];
    let (enonce, correct, faux) = *alea.element(&FORMULES);

    let explication = format!("On applique la même opération aux deux membres pour isoler la variable : {correct}.");
    question(
        alea,
        enonce.to_string(),
        correct.to_string(),
        faux.iter().map(|f| f.to_string()).collect(),
        explication,
    )
}

pub fn aire_triangle(alea: &mut dyn Alea) -> Question {
    let base = alea.entier(6, 20);
    let hauteur = alea.entier(4, 12);
    let aire = rat(base * hauteur, 2);
    let texte = |r: Rationnel| format!("{} cm²", decimal_court(r, 1));

    let correct = texte(aire);
    let mut faux = vec![
        texte(entier(base * hauteur)),   // division par 2 oubliée
        texte(rat(base + hauteur, 2)),
        texte(entier(base + hauteur)),
    ];
    completer(&correct, &mut faux, |d| texte(aire + entier(d)));

    let explication = format!("A = (b × h)/2 = ({base} × {hauteur})/2 = {correct}.");
    let enonce = format!(
        "Calculer l’aire d’un triangle de base {base} cm et de hauteur {hauteur} cm."
    );
    question(alea, enonce, correct, faux, explication)
}

/* ------------------------ Comparaisons, vraisemblance ------------------------ */

/// Comparer deux différences (demi-entiers) ou deux quotients.
pub fn comparaison_calculs(alea: &mut dyn Alea) -> Question {
    let (gauche, droite, vg, vd) = if alea.pile_ou_face() {
        let (a1, b1) = (rat(alea.entier(20, 90), 2), rat(alea.entier(5, 40), 2));
        let (a2, b2) = (rat(alea.entier(10, 80), 2), rat(alea.entier(5, 35), 2));
        (
            format!("{} - {}", decimal_court(a1, 1), decimal_court(b1, 1)),
            format!("{} - {}", decimal_court(a2, 1), decimal_court(b2, 1)),
            a1 - b1,
            a2 - b2,
        )
    } else {
        let (n1, d1) = (alea.entier(8, 24), alea.entier(2, 8));
        let (n2, d2) = (alea.entier(8, 24), alea.entier(2, 8));
        (
            format!("{n1} ÷ {d1}"),
            format!("{n2} ÷ {d2}"),
            rat(n1, d1),
            rat(n2, d2),
        )
    };
    let relation = |symbole: &str| format!("{gauche} {symbole} {droite}");
    let symbole = match vg.cmp(&vd) {
        Ordering::Greater => ">",
        Ordering::Less => "<",
        Ordering::Equal => "=",
    };

    let correct = relation(symbole);
    let faux = [">", "<", "="]
        .into_iter()
        .filter(|s| *s != symbole)
        .map(relation)
        .chain(["On ne peut pas conclure sans calculatrice".to_string()])
        .collect();

    let explication = format!(
        "{gauche} {} {} et {droite} {} {}, donc {correct}.",
        egal_ou_environ(vg, 2),
        decimal_court(vg, 2),
        egal_ou_environ(vd, 2),
        decimal_court(vd, 2)
    );
    let enonce = "Comparer les deux calculs suivants.".to_string();
    question(alea, enonce, correct, faux, explication)
}

pub fn vraisemblance(alea: &mut dyn Alea) -> Question {
    const COHERENT: &str = "Oui, le résultat est cohérent.";
    const INVRAISEMBLABLE: &str = "Non, le résultat est invraisemblable.";

    let vitesse = alea.entier(20, 130);
    let duree = alea.entier(1, 5);
    let distance = vitesse * duree;
    let plausible = alea.pile_ou_face();
    // erreur d’un facteur 10 dans un sens ou dans l’autre
    let annoncee = if plausible {
        entier(vitesse)
    } else {
        entier(vitesse) * *alea.element(&[rat(1, 10), entier(10)])
    };

    let (correct, faux) = if plausible {
        (
            COHERENT,
            [
                INVRAISEMBLABLE,
                "Impossible à vérifier.",
                "Non, il faut multiplier la distance par la durée.",
            ],
        )
    } else {
        (
            INVRAISEMBLABLE,
            [
                COHERENT,
                "Impossible à vérifier.",
                "Oui, une vitesse moyenne peut prendre n’importe quelle valeur.",
            ],
        )
    };

    let annoncee = decimal_court(annoncee, 1);
    let explication = if plausible {
        format!("Vitesse moyenne = {distance} / {duree} = {vitesse} km/h : la valeur annoncée est cohérente.")
    } else {
        format!("Vitesse moyenne = {distance} / {duree} = {vitesse} km/h, et non {annoncee} km/h.")
    };
    let enonce = format!(
        "Pour un trajet de {distance} km parcouru en {duree} h, un élève annonce une vitesse moyenne de {annoncee} km/h. Ce résultat est-il plausible ?"
    );
    question(
        alea,
        enonce,
        correct.to_string(),
        faux.iter().map(|f| f.to_string()).collect(),
        explication,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::alea::AleaRand;
    use crate::noyau::validation::valider;

    #[test]
    fn solution_lineaire_exacte() {
        assert_eq!(solution_lineaire(3, -1, 5), entier(2));
        assert_eq!(solution_lineaire(4, 1, 2), rat(1, 4));
    }

    #[test]
    fn somme_de_fractions_simplifiee() {
        let f = somme_de_fractions(1, 4, 1, 4);
        assert_eq!((f.numerateur, f.denominateur), (1, 2));
        let g = somme_de_fractions(2, 3, 1, 6);
        assert_eq!((g.numerateur, g.denominateur), (5, 6));
    }

    #[test]
    fn puissances_de_dix() {
        assert_eq!(puissance_dix(3), entier(1000));
        assert_eq!(puissance_dix(-2), rat(1, 100));
        assert_eq!(puissance_dix(0), entier(1));
    }

    #[test]
    fn forme_factorisee_lisible() {
        assert_eq!(forme_factorisee(2, -3), "(x - 2)(x + 3)");
        assert_eq!(forme_factorisee(4, 0), "x(x - 4)");
    }

    #[test]
    fn factorisation_sans_distracteur_equivalent() {
        let alea: &mut dyn Alea = &mut AleaRand::graine(11);
        for _ in 0..300 {
            let q = factorisation_trinome(alea);
            assert_eq!(q.choix().len(), 4, "{:?}", q.choix());
            assert_eq!(valider(&q), Ok(()));
        }
    }

    #[test]
    fn conversions_toujours_valides() {
        let alea: &mut dyn Alea = &mut AleaRand::graine(12);
        for g in [
            Grandeur::Longueur,
            Grandeur::Aire,
            Grandeur::Volume,
            Grandeur::Masse,
            Grandeur::Contenance,
        ] {
            for _ in 0..100 {
                let q = conversion(alea, g);
                assert_eq!(valider(&q), Ok(()));
                assert!(q.choix().iter().all(|c| !c.starts_with("0 ")), "{:?}", q.choix());
            }
        }
        for _ in 0..100 {
            let q = conversion_duree(alea);
            assert_eq!(valider(&q), Ok(()));
            assert_eq!(q.choix().len(), 4);
        }
    }

    #[test]
    fn equation_carre_negative_sans_solution() {
        use crate::noyau::alea::AleaScript;
        // v = 3, branche négative (1)
        let alea: &mut dyn Alea = &mut AleaScript::new(&[3, 1]);
        let q = equation_carre(alea);
        assert_eq!(q.enonce(), "Résoudre x² = -9.");
        assert_eq!(q.attendu(), "Pas de solution");
    }

    #[test]
    fn somme_fractions_recalculee() {
        use crate::noyau::alea::AleaScript;
        // q1 = 4, q2 = 6, n1 = 1, n2 = 5
        let alea: &mut dyn Alea = &mut AleaScript::new(&[4, 6, 1, 5]);
        let q = somme_fractions(alea);

        let somme = somme_de_fractions(1, 4, 5, 6);
        assert_eq!((somme.numerateur, somme.denominateur), (13, 12));
        let attendu = fraction(somme.valeur());
        assert_eq!(q.enonce(), "Calculer 1/4 + 5/6 (résultat sous forme irréductible).");
        assert_eq!(q.reponse_correcte(), Some(attendu.as_str()));
        assert!(q.choix().iter().any(|c| c == "26/24"), "{:?}", q.choix());
    }

    #[test]
    fn vitesse_km_h_vers_m_s() {
        use crate::noyau::alea::AleaScript;
        // vers m/s (1), 9 × 8 = 72 km/h
        let alea: &mut dyn Alea = &mut AleaScript::new(&[1, 8]);
        let q = conversion_vitesse(alea);
        assert_eq!(q.enonce(), "Convertir 72 km/h en m/s.");
        assert_eq!(q.reponse_correcte(), Some("20 m/s"));
        assert!(q.choix().iter().any(|c| c == "259,2 m/s"), "{:?}", q.choix());
    }

    #[test]
    fn facteur_commun_avec_carre() {
        use crate::noyau::alea::AleaScript;
        // a = 3, b = 5, avec x² (1)
        let alea: &mut dyn Alea = &mut AleaScript::new(&[3, 5, 1]);
        let q = facteur_commun(alea);
        assert_eq!(q.enonce(), "Factoriser 3x² + 5x.");
        assert_eq!(q.reponse_correcte(), Some("x(3x + 5)"));
    }

    #[test]
    fn facteur_commun_coefficients_egaux() {
        use crate::noyau::alea::AleaScript;
        // 2x + 2x : le produit des coefficients vaut aussi 4
        let alea: &mut dyn Alea = &mut AleaScript::new(&[2, 2, 0]);
        let q = facteur_commun(alea);
        assert_eq!(q.reponse_correcte(), Some("4x"));
        assert_eq!(q.choix().len(), 4);
        assert_eq!(valider(&q), Ok(()));
    }

    #[test]
    fn identites_a_factoriser() {
        use crate::noyau::alea::AleaScript;
        // a = 3, b = 2, différence de carrés (2)
        let alea: &mut dyn Alea = &mut AleaScript::new(&[3, 2, 2]);
        let q = factorisation_identites(alea);
        assert_eq!(q.enonce(), "Factoriser 4x² - 9.");
        assert_eq!(q.reponse_correcte(), Some("(2x - 3)(2x + 3)"));
    }

    #[test]
    fn comparaison_de_quotients() {
        use crate::noyau::alea::AleaScript;
        // quotients (0) : 12 ÷ 4 = 3 et 10 ÷ 4 = 2,5
        let alea: &mut dyn Alea = &mut AleaScript::new(&[0, 12, 4, 10, 4]);
        let q = comparaison_calculs(alea);
        assert_eq!(q.reponse_correcte(), Some("12 ÷ 4 > 10 ÷ 4"));
        assert_eq!(
            q.explication(),
            "12 ÷ 4 = 3 et 10 ÷ 4 = 2,5, donc 12 ÷ 4 > 10 ÷ 4."
        );
    }
}
