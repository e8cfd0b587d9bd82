// src/noyau/nombres.rs
//
// Helpers numériques exacts (entiers + rationnels i64), sans flottants.

use num_rational::Rational64;
use num_traits::{One, Zero};

/// Rationnel exact utilisé par tous les générateurs.
pub type Rationnel = Rational64;

/// n/d (d ≠ 0).
pub fn rat(n: i64, d: i64) -> Rationnel {
    Rationnel::new(n, d)
}

pub fn entier(n: i64) -> Rationnel {
    Rationnel::from_integer(n)
}

/* ------------------------ PGCD / fractions ------------------------ */

/// PGCD positif. Convention : pgcd(0, 0) = 1 (évite la division par zéro).
pub fn pgcd(a: i64, b: i64) -> i64 {
    let (mut x, mut y) = (a.abs(), b.abs());
    while y != 0 {
        let t = x % y;
        x = y;
        y = t;
    }
    if x == 0 {
        1
    } else {
        x
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
    pub numerateur: i64,
    pub denominateur: i64,
}

/// Divise par le PGCD puis rend le dénominateur positif.
/// `denominateur == 0` : résultat non défini (à éviter côté appelant).
pub fn simplifier_fraction(numerateur: i64, denominateur: i64) -> Fraction {
    let d = pgcd(numerateur, denominateur);
    let (mut n, mut q) = (numerateur / d, denominateur / d);
    if q < 0 {
        n = -n;
        q = -q;
    }
    Fraction {
        numerateur: n,
        denominateur: q,
    }
}

impl Fraction {
    pub fn valeur(self) -> Rationnel {
        rat(self.numerateur, self.denominateur)
    }
}

/* ------------------------ Arrondis (demi vers +∞) ------------------------ */

/// Arrondi à l’entier le plus proche, demi vers +∞ (même politique partout).
pub fn arrondi(r: Rationnel) -> i64 {
    (r + rat(1, 2)).floor().to_integer()
}

/// Arrondi de n/d à l’entier (d > 0), sans passer par un rationnel.
pub fn arrondi_div(n: i64, d: i64) -> i64 {
    (2 * n + d).div_euclid(2 * d)
}

/* ------------------------ Combinatoire ------------------------ */

/// C(n, k), formule multiplicative (exacte à chaque étape).
pub fn coefficient_binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut c: u64 = 1;
    for i in 1..=k {
        c = c * (n - k + i) / i;
    }
    c
}

/// r^e (e entier naturel).
pub fn puissance(r: Rationnel, e: u32) -> Rationnel {
    let mut p = Rationnel::one();
    for _ in 0..e {
        p *= r;
    }
    p
}

pub fn est_nul(r: Rationnel) -> bool {
    r.is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pgcd_cas_de_base() {
        assert_eq!(pgcd(12, 18), 6);
        assert_eq!(pgcd(-12, 18), 6);
        assert_eq!(pgcd(7, 0), 7);
        assert_eq!(pgcd(0, 0), 1);
    }

    #[test]
    fn simplifier_6_8() {
        assert_eq!(
            simplifier_fraction(6, 8),
            Fraction {
                numerateur: 3,
                denominateur: 4
            }
        );
    }

    #[test]
    fn simplifier_normalise_le_signe() {
        let f = simplifier_fraction(4, -6);
        assert_eq!((f.numerateur, f.denominateur), (-2, 3));
        let g = simplifier_fraction(-4, -6);
        assert_eq!((g.numerateur, g.denominateur), (2, 3));
        let z = simplifier_fraction(0, -5);
        assert_eq!((z.numerateur, z.denominateur), (0, 1));
    }

    #[test]
    fn simplifier_idempotent() {
        for n in -30..=30 {
            for d in (-12..=12).filter(|d| *d != 0) {
                let f = simplifier_fraction(n, d);
                assert_eq!(simplifier_fraction(f.numerateur, f.denominateur), f);
                assert!(f.denominateur > 0);
            }
        }
    }

    #[test]
    fn arrondi_demi_vers_le_haut() {
        assert_eq!(arrondi(rat(5, 2)), 3);
        assert_eq!(arrondi(rat(-5, 2)), -2);
        assert_eq!(arrondi(rat(-1, 1)), -1);
        assert_eq!(arrondi_div(5, 2), 3);
        assert_eq!(arrondi_div(-5, 2), -2);
        assert_eq!(arrondi_div(5000, 100), 50);
        assert_eq!(arrondi_div(-149, 100), -1);
    }

    #[test]
    fn binomial() {
        assert_eq!(coefficient_binomial(4, 2), 6);
        assert_eq!(coefficient_binomial(6, 3), 20);
        assert_eq!(coefficient_binomial(5, 0), 1);
        assert_eq!(coefficient_binomial(3, 4), 0);
    }

    #[test]
    fn puissance_rationnelle() {
        assert_eq!(puissance(rat(1, 2), 3), rat(1, 8));
        assert_eq!(puissance(rat(3, 10), 0), entier(1));
    }
}
