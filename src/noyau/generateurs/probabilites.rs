// src/noyau/generateurs/probabilites.rs
//
// Banque “probabilités” : tirages, arbres, conditionnelles, loi binomiale.
// Les probabilités sont des rationnels exacts (dixièmes ou fractions),
// arrondies seulement à l’affichage.

use num_traits::One;

use crate::noyau::alea::Alea;
use crate::noyau::format::{
    decimal, decimal_court, egal_ou_environ, exposant, fraction, nombre, probabilite,
};
use crate::noyau::nombres::{coefficient_binomial, entier, est_nul, puissance, rat, Rationnel};
use crate::noyau::question::Question;

use super::{completer, question};

/* ------------------------ Formules ------------------------ */

/// P(X = k) pour X ~ B(n, p) : C(n, k) p^k (1 - p)^(n - k).
pub fn probabilite_binomiale(n: u64, k: u64, p: Rationnel) -> Rationnel {
    if k > n {
        return entier(0);
    }
    let c = coefficient_binomial(n, k) as i64;
    entier(c) * puissance(p, k as u32) * puissance(Rationnel::one() - p, (n - k) as u32)
}

/// Formule de Bayes : P_B(A). None si P(B) = 0.
pub fn bayes(pa: Rationnel, pba: Rationnel, pbna: Rationnel) -> Option<Rationnel> {
    let numerateur = pa * pba;
    let pb = numerateur + (Rationnel::one() - pa) * pbna;
    if est_nul(pb) {
        None
    } else {
        Some(numerateur / pb)
    }
}

/// Probabilité en dixièmes : "0,3".
fn dixiemes(alea: &mut dyn Alea, min: i64, max: i64) -> Rationnel {
    rat(alea.entier(min, max), 10)
}

fn court(p: Rationnel) -> String {
    decimal_court(p, 4)
}

/* ------------------------ Générateurs ------------------------ */

pub fn tirage_sac(alea: &mut dyn Alea) -> Question {
    let rouges = alea.entier(2, 8);
    let bleues = alea.entier(2, 8);
    let total = rouges + bleues;
    let p = rat(rouges, total);

    let correct = fraction(p);
    let mut faux = vec![
        fraction(rat(bleues, total)),
        fraction(rat(rouges - 1, total - 1)), // tirage sans la boule
        fraction(rat(rouges, bleues)),        // rapport rouges/bleues
    ];
    completer(&correct, &mut faux, |d| fraction(rat(rouges + d, total)));

    let explication = format!(
        "{rouges} issues favorables sur {total} équiprobables : P = {rouges}/{total} = {correct}."
    );
    let enonce = format!(
        "Un sac contient {rouges} boules rouges et {bleues} boules bleues. On tire une boule au hasard. Quelle est la probabilité qu’elle soit rouge ?"
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn evenement_contraire(alea: &mut dyn Alea) -> Question {
    let p = rat(alea.entier(10, 70), 100);
    let contraire = Rationnel::one() - p;

    let correct = decimal(contraire, 2);
    let mut faux = vec![
        decimal(p, 2),
        decimal(Rationnel::one() + p, 2),
        decimal(rat(1, 2), 2),
    ];
    completer(&correct, &mut faux, |d| decimal(contraire + rat(d, 100), 2));

    let explication = format!(
        "P(Ā) = 1 - P(A) = 1 - {} = {correct}.",
        decimal(p, 2)
    );
    let enonce = format!(
        "On sait que P(A) = {}. Calculer P(Ā).",
        decimal(p, 2)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn evenements_independants(alea: &mut dyn Alea) -> Question {
    let pa = dixiemes(alea, 1, 9);
    let pb = dixiemes(alea, 1, 9);
    let inter = pa * pb;

    let correct = court(inter);
    let mut faux = vec![
        court(pa + pb), // somme au lieu du produit
        court(pa),
        court(pb),
    ];
    completer(&correct, &mut faux, |d| court(inter + rat(d, 100)));

    let explication = format!(
        "Indépendance : P(A ∩ B) = P(A) × P(B) = {} × {} = {correct}.",
        court(pa),
        court(pb)
    );
    let enonce = format!(
        "A et B sont indépendants, P(A) = {} et P(B) = {}. Calculer P(A ∩ B).",
        court(pa),
        court(pb)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn arbre_pondere(alea: &mut dyn Alea) -> Question {
    let pa = dixiemes(alea, 2, 8);
    let pba = dixiemes(alea, 1, 9);
    let pbna = dixiemes(alea, 1, 9);
    let pb = pa * pba + (Rationnel::one() - pa) * pbna;

    let correct = court(pb);
    let mut faux = vec![
        court(pa * pba), // une seule branche
        court(pba + pbna),
        court(pba),
    ];
    completer(&correct, &mut faux, |d| court(pb + rat(d, 100)));

    let explication = format!(
        "Probabilités totales : P(B) = {} × {} + {} × {} = {correct}.",
        court(pa),
        court(pba),
        court(Rationnel::one() - pa),
        court(pbna)
    );
    let enonce = format!(
        "Dans un arbre pondéré, P(A) = {}, P_A(B) = {} et P_Ā(B) = {}. Calculer P(B).",
        court(pa),
        court(pba),
        court(pbna)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn conditionnelle_tableau(alea: &mut dyn Alea) -> Question {
    let filles_option = alea.entier(5, 30);
    let filles_sans = alea.entier(5, 30);
    let garcons_option = alea.entier(5, 30);
    let garcons_sans = alea.entier(5, 30);
    let filles = filles_option + filles_sans;
    let total = filles + garcons_option + garcons_sans;
    let p = rat(filles_option, filles);

    let correct = probabilite(p, 2);
    let mut faux = vec![
        probabilite(rat(filles_option, total), 2), // probabilité de l’intersection
        probabilite(rat(filles_option, filles_option + garcons_option), 2), // conditionnement inversé
        probabilite(rat(filles, total), 2),
    ];
    completer(&correct, &mut faux, |d| probabilite(p + rat(d, 100), 2));

    let explication = format!(
        "On se restreint aux {filles} filles : P = {filles_option} / {filles} {} {correct}.",
        egal_ou_environ(p, 2)
    );
    let enonce = format!(
        "Dans un lycée, {filles_option} filles suivent l’option et {filles_sans} ne la suivent pas ; {garcons_option} garçons la suivent et {garcons_sans} ne la suivent pas. On choisit une fille au hasard : quelle est la probabilité qu’elle suive l’option (arrondie au centième) ?"
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn de_equilibre(alea: &mut dyn Alea) -> Question {
    let faces = *alea.element(&[4, 6, 8, 12]);
    let minimum = alea.entier(2, faces);
    let favorables = faces - minimum + 1;
    let p = rat(favorables, faces);

    let correct = fraction(p);
    let mut faux = Vec::new();
    if p.denom() != &faces {
        // non simplifiée : refusée quand la forme irréductible est demandée
        faux.push(format!("{favorables}/{faces}"));
    }
    faux.push(fraction(rat(faces - minimum, faces))); // borne exclue
    faux.push(fraction(rat(1, faces)));
    faux.push(fraction(rat(minimum, faces)));
    completer(&correct, &mut faux, |d| fraction(rat(favorables + d, faces)));

    let explication = format!(
        "Issues favorables : de {minimum} à {faces}, soit {favorables} sur {faces}. P = {favorables}/{faces} = {correct}."
    );
    let enonce = format!(
        "On lance un dé équilibré à {faces} faces numérotées de 1 à {faces}. Quelle est la probabilité d’obtenir au moins {minimum} (fraction irréductible) ?"
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn face_de(alea: &mut dyn Alea) -> Question {
    let faces = *alea.element(&[4, 6, 8, 12]);
    let face = alea.entier(1, faces);
    let p = rat(1, faces);

    let correct = fraction(p);
    let mut faux = vec![
        fraction(rat(1, faces - 1)),
        fraction(rat(face, faces)),                // la valeur prise pour le nombre d’issues
        fraction(rat(faces - face + 1, faces)),    // « au moins » au lieu de « exactement »
    ];
    completer(&correct, &mut faux, |d| fraction(rat(1 + d.abs(), faces)));

    let explication = format!(
        "{faces} issues équiprobables dont une seule favorable : P = 1/{faces}."
    );
    let enonce = format!(
        "On lance un dé équilibré à {faces} faces numérotées de 1 à {faces}. Quelle est la probabilité d’obtenir exactement {face} ?"
    );
    question(alea, enonce, correct, faux, explication)
}

/// Événement réunion d’issues : somme de leurs probabilités.
pub fn evenement_par_somme(alea: &mut dyn Alea) -> Question {
    const ISSUES: [&str; 4] = ["A", "B", "C", "D"];
    let mut probas = [entier(0); 4];
    for p in probas.iter_mut().take(3) {
        *p = dixiemes(alea, 1, 3);
    }
    // au plus 0,9 distribué : D garde au moins 0,1
    probas[3] = Rationnel::one() - probas[0] - probas[1] - probas[2];

    let i = alea.entier(0, 2) as usize;
    let j = alea.entier(i as i64 + 1, 3) as usize;
    let p = probas[i] + probas[j];

    let correct = court(p);
    let mut faux = vec![
        court(probas[i]),
        court(Rationnel::one() - p), // contraire
        court(probas[i] * probas[j]),
    ];
    completer(&correct, &mut faux, |d| court(p + rat(d, 10)));

    let liste: Vec<String> = ISSUES
        .iter()
        .zip(&probas)
        .map(|(nom, p)| format!("P({nom}) = {}", court(*p)))
        .collect();
    let (x, y) = (ISSUES[i], ISSUES[j]);
    let explication = format!(
        "Issues distinctes : P({x} ou {y}) = P({x}) + P({y}) = {} + {} = {correct}.",
        court(probas[i]),
        court(probas[j])
    );
    let enonce = format!(
        "Une expérience a quatre issues : {}. Quelle est la probabilité de l’événement « {x} ou {y} » ?",
        liste.join(", ")
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn bayes_question(alea: &mut dyn Alea) -> Question {
    let (pa, pba, pbna, p) = loop {
        let pa = dixiemes(alea, 2, 9);
        let pba = dixiemes(alea, 2, 9);
        let pbna = dixiemes(alea, 2, 9);
        if let Some(p) = bayes(pa, pba, pbna) {
            break (pa, pba, pbna, p);
        }
    };
    let pb = pa * pba + (Rationnel::one() - pa) * pbna;

    let correct = probabilite(p, 2);
    let mut faux = vec![
        probabilite(pba, 2),      // P_A(B) confondue avec P_B(A)
        probabilite(pa * pba, 2), // division oubliée
        probabilite(pb, 2),
    ];
    completer(&correct, &mut faux, |d| probabilite(p + rat(d, 100), 2));

    let explication = format!(
        "P(B) = {} × {} + {} × {} = {}, puis P_B(A) = {} / {} {} {correct}.",
        court(pa),
        court(pba),
        court(Rationnel::one() - pa),
        court(pbna),
        court(pb),
        court(pa * pba),
        court(pb),
        egal_ou_environ(p, 2)
    );
    let enonce = format!(
        "P(A) = {}, P_A(B) = {} et P_Ā(B) = {}. Calculer P_B(A) (arrondir au centième).",
        court(pa),
        court(pba),
        court(pbna)
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn loi_binomiale(alea: &mut dyn Alea) -> Question {
    let n = alea.entier(3, 6);
    let k = alea.entier(1, n - 1);
    let p = dixiemes(alea, 2, 8);
    let q = Rationnel::one() - p;
    let (nu, ku) = (n as u64, k as u64);
    let resultat = probabilite_binomiale(nu, ku, p);
    let c = coefficient_binomial(nu, ku) as i64;

    let correct = probabilite(resultat, 3);
    let mut faux = vec![
        probabilite(puissance(p, k as u32) * puissance(q, (n - k) as u32), 3), // C(n, k) oublié
        probabilite(entier(c) * puissance(p, k as u32), 3),
        probabilite(puissance(p, k as u32), 3),
    ];
    completer(&correct, &mut faux, |d| probabilite(resultat + rat(d, 1000), 3));

    let ps = court(p);
    let qs = court(q);
    let explication = format!(
        "P(X = {k}) = C({n}, {k}) × {} × {} = {c} × {} × {} {} {correct}.",
        exposant(&ps, k),
        exposant(&qs, n - k),
        decimal_court(puissance(p, k as u32), 6),
        decimal_court(puissance(q, (n - k) as u32), 6),
        egal_ou_environ(resultat, 3)
    );
    let enonce = format!(
        "Soit X ~ B({n} ; {ps}). Calculer P(X = {k}) (arrondir au millième)."
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn bornes_probabilite(alea: &mut dyn Alea) -> Question {
    let p = rat(alea.entier(1, 99), 100);

    let correct = decimal_court(p, 2);
    let faux = vec![
        "-0,2".to_string(),
        "1,5".to_string(),
        nombre(alea.entier(2, 9)),
    ];

    let explication = format!(
        "Une probabilité est toujours comprise entre 0 et 1 : seule {correct} convient."
    );
    let enonce = "Laquelle de ces valeurs peut être une probabilité ?".to_string();
    question(alea, enonce, correct, faux, explication)
}

pub fn reunion_issues(alea: &mut dyn Alea) -> Question {
    let seuil = alea.entier(1, 4);
    let dans_a = |f: i64| f <= seuil;
    let dans_b = |f: i64| f % 2 == 0;
    let reunion = (1..=6).filter(|&f| dans_a(f) || dans_b(f)).count() as i64;
    let inter = (1..=6).filter(|&f| dans_a(f) && dans_b(f)).count() as i64;

    let correct = fraction(rat(reunion, 6));
    let mut faux = vec![
        fraction(rat(seuil + 3, 6)), // intersection comptée deux fois
        fraction(rat(inter, 6)),
        fraction(rat(seuil, 6) * rat(1, 2)),
    ];
    completer(&correct, &mut faux, |d| fraction(rat(reunion + d, 6)));

    let explication = format!(
        "P(A ∪ B) = P(A) + P(B) - P(A ∩ B) = {seuil}/6 + 3/6 - {inter}/6 = {correct}."
    );
    let enonce = format!(
        "On lance un dé équilibré à 6 faces. A : « obtenir au plus {seuil} », B : « obtenir un nombre pair ». Calculer P(A ∪ B)."
    );
    question(alea, enonce, correct, faux, explication)
}

pub fn relation_intersection(alea: &mut dyn Alea) -> Question {
    let reunion = alea.pile_ou_face();

    let (enonce, correct, faux, explication) = if reunion {
        (
            "Pour deux événements A et B quelconques, quelle égalité est toujours vraie ?",
            "P(A ∪ B) = P(A) + P(B) - P(A ∩ B)",
            [
                "P(A ∪ B) = P(A) + P(B)",
                "P(A ∪ B) = P(A) × P(B)",
                "P(A ∪ B) = P(A) + P(B) + P(A ∩ B)",
            ],
            "L’intersection est comptée deux fois dans P(A) + P(B) : on la retire une fois.",
        )
    } else {
        (
            "Pour deux événements A et B avec P(A) ≠ 0, quelle égalité est toujours vraie ?",
            "P(A ∩ B) = P(A) × P_A(B)",
            [
                "P(A ∩ B) = P(A) × P(B)",
                "P(A ∩ B) = P(A) + P_A(B)",
                "P(A ∩ B) = P_A(B) / P(A)",
            ],
            "Par définition, P_A(B) = P(A ∩ B) / P(A). Le produit P(A) × P(B) ne vaut que pour des événements indépendants.",
        )
    };

    question(
        alea,
        enonce.to_string(),
        correct.to_string(),
        faux.iter().map(|f| f.to_string()).collect(),
        explication.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomiale_n4_k2_demi() {
        let p = probabilite_binomiale(4, 2, rat(1, 2));
        assert_eq!(p, rat(3, 8));
        assert_eq!(probabilite(p, 3), "0,375");
        assert_eq!(probabilite_binomiale(3, 5, rat(1, 2)), entier(0));
    }

    #[test]
    fn binomiale_somme_a_un() {
        let p = rat(3, 10);
        let total = (0..=5).fold(entier(0), |acc, k| acc + probabilite_binomiale(5, k, p));
        assert_eq!(total, entier(1));
    }

    #[test]
    fn bayes_classique() {
        // P(A) = 1/2, P_A(B) = 3/5, P_Ā(B) = 1/5 => 3/4
        assert_eq!(bayes(rat(1, 2), rat(3, 5), rat(1, 5)), Some(rat(3, 4)));
        assert_eq!(bayes(rat(1, 2), entier(0), entier(0)), None);
    }

    #[test]
    fn de_non_simplifie_en_distracteur() {
        use crate::noyau::alea::AleaScript;
        // 6 faces (indice 1), au moins 3 : 4/6 = 2/3
        let alea: &mut dyn Alea = &mut AleaScript::new(&[1, 3]);
        let q = de_equilibre(alea);
        assert_eq!(q.attendu(), "2/3");
        assert!(q.choix().iter().any(|c| c == "4/6"));
    }

    #[test]
    fn bayes_recalcule() {
        use crate::noyau::alea::AleaScript;
        // P(A) = 0,5, P_A(B) = 0,6, P_Ā(B) = 0,2
        let alea: &mut dyn Alea = &mut AleaScript::new(&[5, 6, 2]);
        let q = bayes_question(alea);

        let attendu = bayes(rat(5, 10), rat(6, 10), rat(2, 10)).map(|p| probabilite(p, 2));
        assert_eq!(attendu.as_deref(), Some("0,75"));
        assert_eq!(q.reponse_correcte(), attendu.as_deref());
        assert_eq!(
            q.explication(),
            "P(B) = 0,5 × 0,6 + 0,5 × 0,2 = 0,4, puis P_B(A) = 0,3 / 0,4 = 0,75."
        );
    }

    #[test]
    fn face_unique_d_un_de() {
        use crate::noyau::alea::AleaScript;
        // 8 faces (indice 2), face 3
        let alea: &mut dyn Alea = &mut AleaScript::new(&[2, 3]);
        let q = face_de(alea);
        assert_eq!(q.reponse_correcte(), Some("1/8"));
        assert!(q.choix().iter().any(|c| c == "3/8"), "{:?}", q.choix());
    }

    #[test]
    fn reunion_d_issues_par_somme() {
        use crate::noyau::alea::AleaScript;
        // A = 0,1 ; B = 0,2 ; C = 0,3 ; D = 0,4 ; événement « A ou C »
        let alea: &mut dyn Alea = &mut AleaScript::new(&[1, 2, 3, 0, 2]);
        let q = evenement_par_somme(alea);
        assert!(q.enonce().contains("P(D) = 0,4"), "{}", q.enonce());
        assert!(q.enonce().contains("« A ou C »"), "{}", q.enonce());
        assert_eq!(q.reponse_correcte(), Some("0,4"));
    }
}
