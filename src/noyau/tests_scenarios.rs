//! Scénarios littéraux (campagne) : tirages imposés via AleaScript,
//! textes attendus au caractère près.

use super::alea::{Alea, AleaScript};
use super::choix::construire_choix;
use super::generateurs::{calcul, evolutions, probabilites, proportions};
use super::nombres::{simplifier_fraction, Fraction};
use super::validation::valider;

#[test]
fn scenario_equation_lineaire() {
    // a = 3, x = 2, b = -1 => 3x - 1 = 5
    let alea: &mut dyn Alea = &mut AleaScript::new(&[3, 2, -1]);
    let q = calcul::equation_lineaire(alea);

    assert_eq!(q.enonce(), "Résoudre 3x - 1 = 5.");
    assert_eq!(q.reponse_correcte(), Some("2"));
    assert!(
        q.explication().contains("(5 - (-1))/3 = 2"),
        "{}",
        q.explication()
    );
    assert_eq!(valider(&q), Ok(()));
}

#[test]
fn scenario_simplification() {
    assert_eq!(
        simplifier_fraction(6, 8),
        Fraction {
            numerateur: 3,
            denominateur: 4
        }
    );
}

#[test]
fn scenario_pourcentage_d_une_valeur() {
    let alea: &mut dyn Alea = &mut AleaScript::new(&[200, 25]);
    let q = proportions::pourcentage_valeur(alea);

    assert_eq!(q.enonce(), "Combien vaut 25 % de 200 ?");
    assert_eq!(q.reponse_correcte(), Some("50"));
    assert_eq!(valider(&q), Ok(()));
}

#[test]
fn scenario_taux_successifs() {
    // +10 % puis -10 %
    let alea: &mut dyn Alea = &mut AleaScript::new(&[10, -10]);
    let q = evolutions::taux_successifs(alea);

    assert!(q.enonce().contains("+10 % puis de -10 %"), "{}", q.enonce());
    assert!(q.explication().contains("1,1 × 0,9 = 0,99"), "{}", q.explication());
    assert_eq!(q.reponse_correcte(), Some("-1 %"));
    assert_eq!(valider(&q), Ok(()));
}

#[test]
fn scenario_loi_binomiale() {
    // n = 4, k = 2, p = 5/10
    let alea: &mut dyn Alea = &mut AleaScript::new(&[4, 2, 5]);
    let q = probabilites::loi_binomiale(alea);

    assert_eq!(
        q.enonce(),
        "Soit X ~ B(4 ; 0,5). Calculer P(X = 2) (arrondir au millième)."
    );
    assert_eq!(q.reponse_correcte(), Some("0,375"));
    assert!(q.explication().contains("6 × 0,25 × 0,25"), "{}", q.explication());
    assert_eq!(valider(&q), Ok(()));
}

#[test]
fn scenario_jeu_de_choix() {
    let alea: &mut dyn Alea = &mut AleaScript::new(&[]);
    let faux: Vec<String> = ["7", "3", "9", "11"].iter().map(|s| s.to_string()).collect();
    let jeu = construire_choix(alea, "7", &faux);

    assert_eq!(jeu.choix.len(), 4);
    assert_eq!(jeu.choix.iter().filter(|c| *c == "7").count(), 1);
    assert_eq!(jeu.choix[jeu.indice_correct], "7");

    let mut tries = jeu.choix.clone();
    tries.sort();
    assert_eq!(tries, vec!["11", "3", "7", "9"]);
}
