// src/noyau/generateurs/proportions.rs
//
// Banque “proportions” : pourcentages, prix unitaires, proportionnalité.

use crate::noyau::alea::Alea;
use crate::noyau::format::{decimal, decimal_court, egal_ou_environ, fraction, nombre, pourcentage};
use crate::noyau::nombres::{arrondi_div, entier, rat};
use crate::noyau::question::Question;

use super::{completer, question};

/// t % de base, arrondi à l’unité (demi vers le haut).
pub fn pourcentage_de(taux: i64, base: i64) -> i64 {
    arrondi_div(taux * base, 100)
}

pub fn pourcentage_valeur(alea: &mut dyn Alea) -> Question {
    let base = alea.entier(80, 350);
    let taux = alea.entier(5, 40);
    let resultat = pourcentage_de(taux, base);
    let exact = (taux * base) % 100 == 0;

    let correct = nombre(resultat);
    let mut faux = vec![
        nombre(arrondi_div(base, taux)),               // division par le taux
        nombre(arrondi_div(base * (100 + taux), 100)), // valeur augmentée
        nombre(arrondi_div(taux * base, 10)),          // mauvaise puissance de 10
    ];
    completer(&correct, &mut faux, |d| nombre(resultat + d));

    let egal = if exact { "=" } else { "≈" };
    let explication = format!("{taux} % de {base} = {base} × {taux}/100 {egal} {resultat}.");
    let enonce = if exact {
        format!("Combien vaut {taux} % de {base} ?")
    } else {
        format!("Combien vaut {taux} % de {base} ? (arrondir à l’unité)")
    };
    question(alea, enonce, correct, faux, explication)
}

pub fn prix_unitaire(alea: &mut dyn Alea) -> Question {
    let quantite = alea.entier(3, 8);
    let prix = alea.entier(6, 20);
    let total = quantite * prix;
    let euros = |t: String| format!("{t} €");

    let correct = euros(nombre(prix));
    let mut faux = vec![
        euros(nombre(total)),
        euros(decimal_court(rat(total, quantite + 1), 2)),
        euros(nombre(total - quantite)),
    ];
    completer(&correct, &mut faux, |d| euros(nombre(prix + d)));

    let explication = format!("Prix unitaire = {total} / {quantite} = {prix} €.");
    let enonce = format!("{quantite} articles coûtent {total} €. Quel est le prix d’un article ?");
    question(alea, enonce, correct, faux, explication)
}

pub fn recette(alea: &mut dyn Alea) -> Question {
    let personnes = alea.entier(2, 6);
    let par_personne = alea.entier(40, 100);
    let quantite = par_personne * personnes;
    let cible = personnes + alea.entier(2, 4);
    let resultat = par_personne * cible;
    let grammes = |v: i64| format!("{} g", nombre(v));

    let correct = grammes(resultat);
    let mut faux = vec![
        grammes(quantite + (cible - personnes)), // raisonnement additif
        grammes(quantite),
        grammes(quantite * cible),
    ];
    completer(&correct, &mut faux, |d| grammes(resultat + 10 * d));

    let explication = format!(
        "Quantité par personne = {quantite} / {personnes} = {par_personne} g, puis {par_personne} × {cible} = {correct}."
    );
    let enonce = format!(
        "Une recette pour {personnes} personnes nécessite {quantite} g de farine. Combien en faut-il pour {cible} personnes ?"
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn coefficient_multiplicateur(alea: &mut dyn Alea) -> Question {
    let taux = alea.entier(3, 25);
    let hausse = alea.pile_ou_face();
    let (coef, autre) = if hausse {
        (rat(100 + taux, 100), rat(100 - taux, 100))
    } else {
        (rat(100 - taux, 100), rat(100 + taux, 100))
    };

    let correct = decimal(coef, 2);
    let mut faux = vec![
        decimal(rat(taux, 100), 2),
        decimal(autre, 2),
        decimal_court(coef * entier(10), 1),
    ];
    completer(&correct, &mut faux, |d| decimal(coef + rat(d, 100), 2));

    let (mot, signe) = if hausse { ("hausse", '+') } else { ("baisse", '-') };
    let explication = format!(
        "Une {mot} de {taux} % correspond au coefficient 1 {signe} {taux}/100 = {correct}."
    );
    let enonce = format!(
        "Quel est le coefficient multiplicateur associé à une {mot} de {taux} % ?"
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn proportion_pourcentage(alea: &mut dyn Alea) -> Question {
    let total = alea.entier(40, 90);
    let partie = alea.entier(5, total - 8);
    let proportion = rat(partie * 100, total);

    let correct = pourcentage(proportion, 1);
    let mut faux = vec![
        format!("{partie} %"),
        format!("{} %", decimal_court(rat(partie, total), 2)), // ×100 oublié
        pourcentage(rat((total - partie) * 100, total), 1),   // complémentaire
    ];
    completer(&correct, &mut faux, |d| pourcentage(proportion + entier(d), 1));

    let explication = format!(
        "Proportion = {partie}/{total} = {} {} {correct}.",
        fraction(rat(partie, total)),
        egal_ou_environ(proportion, 1)
    );
    let enonce = format!(
        "{partie} élèves sur {total} choisissent l’option maths. Exprimer cette proportion en pourcentage (au dixième)."
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn total_depuis_partie(alea: &mut dyn Alea) -> Question {
    let taux = 5 * alea.entier(2, 12);
    let total = 20 * alea.entier(2, 15);
    let partie = total * taux / 100;

    let correct = nombre(total);
    let mut faux = vec![
        nombre(pourcentage_de(taux, partie)), // pourcentage de la partie
        nombre(partie * taux),                // /100 oublié
        nombre(arrondi_div(partie * (100 + taux), 100)),
    ];
    completer(&correct, &mut faux, |d| nombre(total + 10 * d));

    let explication = format!("Total = {partie} / ({taux}/100) = {partie} × 100 / {taux} = {total}.");
    let enonce = format!("{partie} représente {taux} % d’un montant. Quel est ce montant ?");
    question(alea, enonce, correct, faux, explication)
}

pub fn tableau_proportionnalite(alea: &mut dyn Alea) -> Question {
    let x1 = alea.entier(2, 8);
    let coef = alea.entier(2, 9);
    let y1 = x1 * coef;
    let x2 = loop {
        let x = alea.entier(5, 12);
        if x != x1 {
            break x;
        }
    };
    let y2 = x2 * coef;

    let correct = nombre(y2);
    let mut faux = vec![
        nombre(x2 + y1 - x1), // même écart au lieu du même rapport
        nombre(y1 + x2),
        nombre(x2 * y1),
    ];
    completer(&correct, &mut faux, |d| nombre(y2 + d));

    let explication = format!(
        "Coefficient de proportionnalité : {y1} / {x1} = {coef}, donc {x2} × {coef} = {y2}."
    );
    let enonce = format!(
        "Dans un tableau de proportionnalité, {x1} correspond à {y1}. Quelle valeur correspond à {x2} ?"
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn comparaison_melanges(alea: &mut dyn Alea) -> Question {
    let sirop_a = alea.entier(1, 4);
    let eau_a = alea.entier(2, 6);
    let (sirop_b, eau_b) = loop {
        let s = sirop_a + alea.entier(1, 3);
        let e = eau_a + alea.entier(1, 3);
        // mêmes concentrations : question sans réponse
        if s * eau_a != sirop_a * e {
            break (s, e);
        }
    };
    let (ra, rb) = (rat(sirop_a, eau_a), rat(sirop_b, eau_b));

    let (plus, moins) = if ra > rb {
        ("Mélange A", "Mélange B")
    } else {
        ("Mélange B", "Mélange A")
    };
    let correct = plus.to_string();
    let faux = vec![
        moins.to_string(),
        "Les deux mélanges sont identiques".to_string(),
        "On ne peut pas comparer".to_string(),
    ];

    let explication = format!(
        "Sirop par volume d’eau : A = {sirop_a}/{eau_a} {} {}, B = {sirop_b}/{eau_b} {} {}, donc {correct}.",
        egal_ou_environ(ra, 2),
        decimal_court(ra, 2),
        egal_ou_environ(rb, 2),
        decimal_court(rb, 2)
    );
    let enonce = format!(
        "Le mélange A contient {sirop_a} volumes de sirop pour {eau_a} d’eau, le mélange B {sirop_b} volumes de sirop pour {eau_b} d’eau. Lequel est le plus sucré ?"
    );
    question(alea, enonce, correct, faux, explication)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pourcentage_de_exact_et_arrondi() {
        assert_eq!(pourcentage_de(25, 200), 50);
        assert_eq!(pourcentage_de(15, 90), 14); // 13,5 -> 14
        assert_eq!(pourcentage_de(7, 110), 8); // 7,7 -> 8
    }

    #[test]
    fn total_depuis_partie_exact() {
        use crate::noyau::alea::AleaScript;
        // taux = 5×5 = 25 %, total = 20×4 = 80, partie = 20
        let alea: &mut dyn Alea = &mut AleaScript::new(&[5, 4]);
        let q = total_depuis_partie(alea);
        assert_eq!(q.enonce(), "20 représente 25 % d’un montant. Quel est ce montant ?");
        assert_eq!(q.attendu(), "80");
    }

    #[test]
    fn melanges_signe_exact_ou_approche() {
        use crate::noyau::alea::AleaScript;
        // A = 1/4, B = 2/6
        let alea: &mut dyn Alea = &mut AleaScript::new(&[1, 4, 1, 2]);
        let q = comparaison_melanges(alea);
        assert_eq!(q.reponse_correcte(), Some("Mélange B"));
        assert_eq!(
            q.explication(),
            "Sirop par volume d’eau : A = 1/4 = 0,25, B = 2/6 ≈ 0,33, donc Mélange B."
        );
    }
}
