// src/noyau/generateurs/fonctions.rs
//
// Banque “fonctions” : fonctions affines, second degré, lectures graphiques.
// Les lectures graphiques tracent une DroiteAffine dont les points utiles
// tombent sur la grille (re-tirage sinon).

use crate::noyau::alea::Alea;
use crate::noyau::format::{affine, entre_parentheses, fraction, nombre, second_degre, signe};
use crate::noyau::graphe::DroiteAffine;
use crate::noyau::nombres::{entier, rat};
use crate::noyau::question::Question;

use super::{completer, question};

/// Droite lisible en x (pente non nulle, petite ordonnée à l’origine).
fn droite_lisible(alea: &mut dyn Alea) -> (DroiteAffine, i64) {
    loop {
        let droite = DroiteAffine::new(alea.entier_non_nul(-3, 3), alea.entier(-4, 4));
        let x = alea.entier(-3, 3);
        if droite.lisible_en(x) {
            return (droite, x);
        }
    }
}

/// Droite coupant l’axe des abscisses en un entier visible.
fn droite_a_racine_entiere(alea: &mut dyn Alea) -> (DroiteAffine, i64) {
    loop {
        let pente = alea.entier_non_nul(-3, 3);
        let racine = alea.entier(-3, 3);
        let droite = DroiteAffine::new(pente, -pente * racine);
        if droite.lisible_en(0) {
            return (droite, racine);
        }
    }
}

/// Paramètres (a, alpha, beta) de f(x) = a(x - alpha)² + beta.
fn forme_canonique(alea: &mut dyn Alea) -> (i64, i64, i64) {
    let a = *alea.element(&[-2, -1, 1, 2]);
    (a, alea.entier(-3, 3), alea.entier(-5, 5))
}

fn developpee(a: i64, alpha: i64, beta: i64) -> String {
    second_degre(a, -2 * a * alpha, a * alpha * alpha + beta)
}

fn intervalle_droite(borne: &str) -> String {
    format!("[{borne} ; +∞[")
}

fn intervalle_gauche(borne: &str) -> String {
    format!("]-∞ ; {borne}]")
}

/* ------------------------ Calcul ------------------------ */

pub fn image_affine(alea: &mut dyn Alea) -> Question {
    let a = alea.entier_non_nul(-5, 6);
    let b = alea.entier(-8, 8);
    let x = alea.entier(-4, 4);
    let image = a * x + b;

    let correct = nombre(image);
    let mut faux = vec![
        nombre(a + b + x),
        nombre(a * (x + 1) + b),
        nombre(a * x - b), // signe de b
    ];
    completer(&correct, &mut faux, |d| nombre(image + d));

    let explication = format!(
        "f({x}) = {a} × {} {} = {image}.",
        entre_parentheses(x),
        signe(b)
    );
    let enonce = format!("Soit f(x) = {}. Calculer f({x}).", affine(a, b));
    question(alea, enonce, correct, faux, explication)
}

pub fn coefficient_directeur(alea: &mut dyn Alea) -> Question {
    let x1 = alea.entier(-4, 3);
    let x2 = x1 + alea.entier(1, 4);
    let y1 = alea.entier(-6, 6);
    let y2 = alea.entier(-6, 6);
    let (dx, dy) = (x2 - x1, y2 - y1);
    let pente = rat(dy, dx);

    let correct = fraction(pente);
    let mut faux = vec![
        nombre(dy), // division oubliée
        if dy != 0 {
            fraction(rat(dx, dy)) // quotient inversé
        } else {
            nombre(dx)
        },
        fraction(-pente),
    ];
    completer(&correct, &mut faux, |d| fraction(pente + entier(d)));

    let explication = format!(
        "m = (yB - yA) / (xB - xA) = ({y2} - {}) / ({x2} - {}) = {correct}.",
        entre_parentheses(y1),
        entre_parentheses(x1)
    );
    let enonce = format!(
        "Quel est le coefficient directeur de la droite passant par A({x1} ; {y1}) et B({x2} ; {y2}) ?"
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn sens_variation(alea: &mut dyn Alea) -> Question {
    let a = alea.entier_non_nul(-4, 4);
    let b = alea.entier(-5, 5);

    let (correct, autre, signe_a) = if a > 0 {
        ("Croissante", "Décroissante", "positif")
    } else {
        ("Décroissante", "Croissante", "négatif")
    };
    let faux = vec![
        autre.to_string(),
        "Constante".to_string(),
        "Ni croissante ni décroissante".to_string(),
    ];

    let explication = format!(
        "Le coefficient directeur {a} est {signe_a}, donc f est {} sur ℝ.",
        correct.to_lowercase()
    );
    let enonce = format!(
        "La fonction f définie sur ℝ par f(x) = {} est :",
        affine(a, b)
    );
    question(alea, enonce, correct.to_string(), faux, explication)
}

pub fn tableau_variations(alea: &mut dyn Alea) -> Question {
    let (a, alpha, beta) = forme_canonique(alea);
    let (nature, oppose) = if a > 0 {
        ("minimum", "maximum")
    } else {
        ("maximum", "minimum")
    };
    let extremum = |n: &str, valeur: i64, en: i64| format!("Un {n} égal à {valeur} atteint en x = {en}");

    let correct = extremum(nature, beta, alpha);
    let mut faux = vec![
        extremum(oppose, beta, alpha),
        extremum(nature, alpha, beta), // coordonnées échangées
        extremum(nature, beta, -alpha),
    ];
    completer(&correct, &mut faux, |d| extremum(nature, beta + d, alpha));

    let explication = format!(
        "f(x) = {a}(x {})² {} : le sommet est ({alpha} ; {beta}) et a = {a} est {}, d’où un {nature}.",
        signe(-alpha),
        signe(beta),
        if a > 0 { "positif" } else { "négatif" }
    );
    let enonce = format!(
        "Dans le tableau de variations de f(x) = {}, quel extremum apparaît ?",
        developpee(a, alpha, beta)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn signe_derivee(alea: &mut dyn Alea) -> Question {
    let (a, alpha, beta) = forme_canonique(alea);
    let sommet = nombre(alpha);

    let (correct, inverse) = if a > 0 {
        (intervalle_droite(&sommet), intervalle_gauche(&sommet))
    } else {
        (intervalle_gauche(&sommet), intervalle_droite(&sommet))
    };
    let decale = |v: i64| {
        if a > 0 {
            intervalle_droite(&nombre(v))
        } else {
            intervalle_gauche(&nombre(v))
        }
    };
    let mut faux = vec![inverse, decale(-alpha), "ℝ".to_string()];
    completer(&correct, &mut faux, |d| decale(alpha + d));

    let explication = format!(
        "f′(x) = {} s’annule en x = {alpha} et a le signe de {} à droite de {alpha}.",
        affine(2 * a, -2 * a * alpha),
        2 * a
    );
    let enonce = format!(
        "Soit f(x) = {}. Sur quel intervalle f′(x) est-elle positive ou nulle ?",
        developpee(a, alpha, beta)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn antecedent(alea: &mut dyn Alea) -> Question {
    let a = alea.entier(1, 5);
    let b = alea.entier(-5, 5);
    let x = alea.entier(-4, 6);
    let y = a * x + b;

    let correct = nombre(x);
    let mut faux = vec![
        nombre(a * y + b),            // image au lieu de l’antécédent
        fraction(rat(y + b, a)),      // signe de b
        fraction(rat(y, a) - entier(b)),
    ];
    completer(&correct, &mut faux, |d| nombre(x + d));

    let explication = format!(
        "On résout {} = {y} : {a}x = {y} {} = {}, donc x = {x}.",
        affine(a, b),
        signe(-b),
        y - b
    );
    let enonce = format!(
        "Soit f(x) = {}. Quel est l’antécédent de {y} par f ?",
        affine(a, b)
    );
    question(alea, enonce, correct, faux, explication)
}

/* ------------------------ Lectures graphiques ------------------------ */

pub fn lecture_image(alea: &mut dyn Alea) -> Question {
    let (droite, x) = droite_lisible(alea);
    let image = droite.valeur(x);

    let correct = nombre(image);
    let mut faux = vec![
        nombre(image + droite.pente), // décalage d’un carreau
        nombre(droite.ordonnee),
        nombre(droite.valeur(-x)),
    ];
    completer(&correct, &mut faux, |d| nombre(image + d));

    let explication = format!(
        "Le point de la droite d’abscisse {x} a pour ordonnée {image}, donc f({x}) = {image}."
    );
    let enonce = format!("Par lecture graphique, quelle est l’image de {x} par la fonction f représentée ?");
    question(alea, enonce, correct, faux, explication).avec_droite(droite)
}

pub fn lecture_zero(alea: &mut dyn Alea) -> Question {
    let (droite, racine) = droite_a_racine_entiere(alea);

    let correct = nombre(racine);
    let mut faux = vec![
        nombre(droite.ordonnee), // ordonnée à l’origine lue à la place
        nombre(-racine),
        nombre(droite.pente),
    ];
    completer(&correct, &mut faux, |d| nombre(racine + d));

    let explication = format!(
        "La droite coupe l’axe des abscisses au point ({racine} ; 0), donc f({racine}) = 0."
    );
    let enonce = "Par lecture graphique, pour quelle valeur de x la fonction f représentée s’annule-t-elle ?".to_string();
    question(alea, enonce, correct, faux, explication).avec_droite(droite)
}

pub fn signe_graphique(alea: &mut dyn Alea) -> Question {
    let (droite, racine) = droite_a_racine_entiere(alea);
    let positif_a_droite = |borne: i64| format!("]{} ; +∞[", nombre(borne));
    let positif_a_gauche = |borne: i64| format!("]-∞ ; {}[", nombre(borne));
    let croissante = droite.pente > 0;
    let intervalle = |borne: i64| {
        if croissante {
            positif_a_droite(borne)
        } else {
            positif_a_gauche(borne)
        }
    };

    let correct = intervalle(racine);
    let mut faux = vec![
        if croissante {
            positif_a_gauche(racine)
        } else {
            positif_a_droite(racine)
        },
        intervalle(droite.ordonnee),
        "ℝ".to_string(),
    ];
    completer(&correct, &mut faux, |d| intervalle(racine + d));

    let explication = format!(
        "La droite est {} et coupe l’axe des abscisses en x = {racine} : elle est au-dessus de l’axe sur {correct}.",
        if croissante { "croissante" } else { "décroissante" }
    );
    let enonce = "D’après le graphique, sur quel intervalle f(x) est-elle strictement positive ?".to_string();
    question(alea, enonce, correct, faux, explication).avec_droite(droite)
}

pub fn equation_reduite_graphique(alea: &mut dyn Alea) -> Question {
    let (droite, _) = droite_lisible(alea);
    let (a, b) = (droite.pente, droite.ordonnee);
    let equation = |a: i64, b: i64| format!("y = {}", affine(a, b));

    let correct = equation(a, b);
    let mut faux = vec![
        equation(a, -b),
        equation(-a, b),
        equation(b, a), // pente et ordonnée échangées
    ];
    completer(&correct, &mut faux, |d| equation(a, b + d));

    let pas = if a > 0 {
        format!("monte de {a}")
    } else {
        format!("descend de {}", -a)
    };
    let explication = format!(
        "La droite coupe l’axe des ordonnées en {b} et {pas} quand x augmente de 1 : {correct}."
    );
    let enonce = "Quelle est l’équation réduite de la droite représentée ?".to_string();
    question(alea, enonce, correct, faux, explication).avec_droite(droite)
}

pub fn resolution_graphique(alea: &mut dyn Alea) -> Question {
    let (droite, x0) = droite_lisible(alea);
    let k = droite.valeur(x0);
    let inequation = alea.pile_ou_face();

    let (enonce, correct, mut faux, relation): (String, String, Vec<String>, &str) = if inequation {
        // f(x) < k : à gauche de x0 si f croissante
        let (rel, inverse) = if droite.pente > 0 { ("<", ">") } else { (">", "<") };
        (
            format!("Par lecture graphique, résoudre f(x) < {k}."),
            format!("x {rel} {x0}"),
            vec![
                format!("x {inverse} {x0}"),
                format!("x < {k}"),
                format!("x > {k}"),
            ],
            rel,
        )
    } else {
        (
            format!("Par lecture graphique, résoudre f(x) = {k}."),
            format!("x = {x0}"),
            vec![
                format!("x = {k}"),
                format!("x = {}", -x0),
                format!("x = {}", droite.ordonnee),
            ],
            "=",
        )
    };
    completer(&correct, &mut faux, |d| format!("x {relation} {}", x0 + d));

    let explication = format!(
        "La droite passe par le point ({x0} ; {k}) : la solution est {correct}."
    );
    question(alea, enonce, correct, faux, explication).avec_droite(droite)
}

/* ------------------------ Équations et courbes ------------------------ */

pub fn equation_point_pente(alea: &mut dyn Alea) -> Question {
    let m = alea.entier_non_nul(-4, 4);
    let x0 = alea.entier_non_nul(-4, 4);
    let y0 = alea.entier(-6, 6);
    let b = y0 - m * x0;
    let equation = |a: i64, b: i64| format!("y = {}", affine(a, b));

    let correct = equation(m, b);
    let mut faux = vec![
        equation(b, m),          // coefficients échangés
        equation(m, y0),         // y0 pris pour l’ordonnée à l’origine
        equation(m, y0 + m * x0), // erreur de signe
    ];
    completer(&correct, &mut faux, |d| equation(m, b + d));

    let explication = format!(
        "y = {m}(x {}) {} = {}.",
        signe(-x0),
        signe(y0),
        affine(m, b)
    );
    let enonce = format!(
        "Quelle est l’équation réduite de la droite de coefficient directeur {m} passant par A({x0} ; {y0}) ?"
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn point_parabole(alea: &mut dyn Alea) -> Question {
    let a = alea.entier_non_nul(-2, 2);
    let b = alea.entier(-4, 4);
    let c = alea.entier(-4, 4);
    let x = alea.entier(-3, 3);
    let fx = a * x * x + b * x + c;
    let appartient = alea.pile_ou_face();
    let y = if appartient {
        fx
    } else {
        fx + alea.entier_non_nul(-3, 3)
    };

    let (correct, autre) = if appartient { ("Oui", "Non") } else { ("Non", "Oui") };
    let faux = vec![
        autre.to_string(),
        "On ne peut pas savoir".to_string(),
        "Seulement si x > 0".to_string(),
    ];

    let explication = format!(
        "f({x}) = {fx} {} {y}, donc le point {} à la courbe.",
        if appartient { "=" } else { "≠" },
        if appartient { "appartient" } else { "n’appartient pas" }
    );
    let enonce = format!(
        "Le point A({x} ; {y}) appartient-il à la courbe de f(x) = {} ?",
        second_degre(a, b, c)
    );
    question(alea, enonce, correct.to_string(), faux, explication)
}

pub fn signe_affine(alea: &mut dyn Alea) -> Question {
    let a = alea.entier_non_nul(-5, 5);
    let b = alea.entier(-9, 9);
    let racine = rat(-b, a);
    let intervalle = |r: String| {
        if a > 0 {
            intervalle_droite(&r)
        } else {
            intervalle_gauche(&r)
        }
    };

    let correct = intervalle(fraction(racine));
    let mut faux = vec![
        if a > 0 {
            intervalle_gauche(&fraction(racine))
        } else {
            intervalle_droite(&fraction(racine))
        },
        intervalle(fraction(-racine)), // signe de la racine
        intervalle(nombre(-b)),        // division par a oubliée
    ];
    completer(&correct, &mut faux, |d| intervalle(fraction(racine + entier(d))));

    let explication = format!(
        "{} = 0 pour x = {}. Comme a = {a} est {}, f(x) ≥ 0 sur {correct}.",
        affine(a, b),
        fraction(racine),
        if a > 0 { "positif" } else { "négatif" }
    );
    let enonce = format!(
        "Sur quel intervalle f(x) = {} est-elle positive ou nulle ?",
        affine(a, b)
    );
    question(alea, enonce, correct, faux, explication)
}

/// Signe de f(x) = a(x - r2)(x - r1), racines r1 < 0 < r2.
pub fn signe_produit(alea: &mut dyn Alea) -> Question {
    let a = alea.entier_non_nul(-4, 4);
    let r2 = alea.entier(1, 6);
    let r1 = alea.entier(-6, -1);
    let interieur = |u: i64, v: i64| format!("[{u} ; {v}]");
    let exterieur = |u: i64, v: i64| format!("]-∞ ; {u}] ∪ [{v} ; +∞[");
    let ensemble = |u: i64, v: i64| {
        if a > 0 {
            exterieur(u, v)
        } else {
            interieur(u, v)
        }
    };

    let correct = ensemble(r1, r2);
    let mut faux = vec![
        if a > 0 { interieur(r1, r2) } else { exterieur(r1, r2) },
        ensemble(-r2, -r1), // racines lues avec le mauvais signe
        "ℝ".to_string(),
    ];
    completer(&correct, &mut faux, |d| ensemble(r1, r2 + d));

    let prefixe = match a {
        1 => String::new(),
        -1 => "-".to_string(),
        _ => nombre(a),
    };
    let expression = format!("{prefixe}(x {})(x {})", signe(-r2), signe(-r1));
    let explication = format!(
        "f s’annule en {r1} et {r2}. Le produit est du signe de a = {a} à l’extérieur des racines et du signe contraire entre elles : f(x) ≥ 0 sur {correct}."
    );
    let enonce = format!("Sur quel ensemble f(x) = {expression} est-elle positive ou nulle ?");
    question(alea, enonce, correct, faux, explication)
}

/// Deux points pour tracer une droite.
pub fn tracer_droite(alea: &mut dyn Alea) -> Question {
    let point = |x: i64, y: i64| format!("({x} ; {y})");
    let m = alea.entier_non_nul(-3, 3);

    if alea.pile_ou_face() {
        let b = alea.entier(-4, 4);
        let placer = |p: String, q: String| format!("Placer {p} et {q} puis tracer la droite.");

        let correct = placer(point(0, b), point(1, m + b));
        let faux = vec![
            placer(point(m, 0), point(b, 1)),
            format!("Tracer la droite horizontale d’équation y = {b}."),
            placer(point(0, m), point(1, b)), // pente et ordonnée échangées
        ];

        let explication = format!(
            "L’ordonnée à l’origine donne {}, le coefficient directeur donne le second point {}.",
            point(0, b),
            point(1, m + b)
        );
        let enonce = format!("Comment tracer la droite d’équation y = {} ?", affine(m, b));
        question(alea, enonce, correct, faux, explication)
    } else {
        let x0 = alea.entier(-3, 3);
        let y0 = alea.entier(-4, 4);

        let correct = point(x0 + 1, y0 + m);
        let mut faux = vec![
            point(x0 + 1, y0 - m),
            point(x0, y0 + m),
            point(x0 + m, y0 + 1), // rôles de x et y échangés
        ];
        completer(&correct, &mut faux, |d| point(x0 + 1, y0 + m + d));

        let explication = format!(
            "Quand x augmente de 1, y varie de {m} : on passe de {} à {correct}.",
            point(x0, y0)
        );
        let enonce = format!(
            "Pour tracer la droite passant par {} de coefficient directeur {m}, quel second point peut-on utiliser ?",
            point(x0, y0)
        );
        question(alea, enonce, correct, faux, explication)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Nature {
    Lineaire,
    Affine,
    SecondDegre,
    Constante,
}

impl Nature {
    const TOUTES: [Nature; 4] = [
        Nature::Lineaire,
        Nature::Affine,
        Nature::SecondDegre,
        Nature::Constante,
    ];

    fn libelle(self) -> &'static str {
        match self {
            Nature::Lineaire => "Linéaire",
            Nature::Affine => "Affine non linéaire",
            Nature::SecondDegre => "Du second degré",
            Nature::Constante => "Constante",
        }
    }
}

pub fn nature_fonction(alea: &mut dyn Alea) -> Question {
    let nature = *alea.element(&Nature::TOUTES);
    let a = alea.entier_non_nul(-5, 5);
    let b = alea.entier_non_nul(-9, 9);

    let (expression, raison) = match nature {
        Nature::Lineaire => (affine(a, 0), format!("de la forme ax avec a = {a}")),
        Nature::Affine => (affine(a, b), format!("de la forme ax + b avec a = {a} et b = {b}")),
        Nature::SecondDegre => (
            second_degre(a, b, 0),
            format!("le terme en x² a pour coefficient {a}"),
        ),
        Nature::Constante => (nombre(b), "aucun terme ne dépend de x".to_string()),
    };

    let correct = nature.libelle().to_string();
    let faux = Nature::TOUTES
        .iter()
        .filter(|n| **n != nature)
        .map(|n| n.libelle().to_string())
        .collect();

    let explication = format!("f(x) = {expression} : {raison}.");
    let enonce = format!("Quelle est la nature de la fonction f(x) = {expression} ?");
    question(alea, enonce, correct, faux, explication)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::alea::{AleaRand, AleaScript};

    #[test]
    fn lectures_graphiques_dans_la_fenetre() {
        let alea: &mut dyn Alea = &mut AleaRand::graine(11);
        for _ in 0..200 {
            let (droite, x) = droite_lisible(alea);
            assert!(droite.lisible_en(x));
            let (droite, r) = droite_a_racine_entiere(alea);
            assert_eq!(droite.valeur(r), 0);
            assert!(droite.lisible_en(r));
        }
    }

    #[test]
    fn lecture_image_porte_la_droite() {
        let alea: &mut dyn Alea = &mut AleaRand::graine(3);
        let q = lecture_image(alea);
        let droite = q.droite().expect("droite tracée");
        assert!(q.enonce_riche().is_some_and(|s| s.contains("<svg")));
        assert!(droite.segment_visible().is_some());
    }

    #[test]
    fn forme_developpee() {
        // 1(x - 2)² + 3 = x² - 4x + 7
        assert_eq!(developpee(1, 2, 3), "x² - 4x + 7");
        assert_eq!(developpee(-2, 0, 5), "-2x² + 5");
    }

    #[test]
    fn image_scriptee() {
        // a = 2, b = -3, x = 4
        let alea: &mut dyn Alea = &mut AleaScript::new(&[2, -3, 4]);
        let q = image_affine(alea);
        assert_eq!(q.enonce(), "Soit f(x) = 2x - 3. Calculer f(4).");
        assert_eq!(q.attendu(), "5");
        assert_eq!(q.explication(), "f(4) = 2 × 4 - 3 = 5.");
    }

    #[test]
    fn pente_negative_descend() {
        // pente -2, ordonnée 1, x = 0
        let alea: &mut dyn Alea = &mut AleaScript::new(&[-2, 1, 0]);
        let q = equation_reduite_graphique(alea);
        assert_eq!(q.reponse_correcte(), Some("y = -2x + 1"));
        assert_eq!(
            q.explication(),
            "La droite coupe l’axe des ordonnées en 1 et descend de 2 quand x augmente de 1 : y = -2x + 1."
        );
    }
    #[test]
    fn produit_positif_hors_des_racines() {
        // a = 2, racines 3 et -2
        let alea: &mut dyn Alea = &mut AleaScript::new(&[2, 3, -2]);
        let q = signe_produit(alea);
        assert_eq!(
            q.enonce(),
            "Sur quel ensemble f(x) = 2(x - 3)(x + 2) est-elle positive ou nulle ?"
        );
        assert_eq!(q.reponse_correcte(), Some("]-∞ ; -2] ∪ [3 ; +∞["));
        assert!(q.choix().iter().any(|c| c == "[-2 ; 3]"), "{:?}", q.choix());
    }
}
