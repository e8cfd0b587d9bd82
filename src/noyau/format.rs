// src/noyau/format.rs
//
// Mise en forme “à la française” des nombres produits par les générateurs.
// Une seule règle d’arrondi (demi vers +∞) pour tout le noyau.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

use super::nombres::Rationnel;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

fn vers_big(r: Rationnel) -> BigRational {
    BigRational::new(BigInt::from(*r.numer()), BigInt::from(*r.denom()))
}

/// r -> entier “scalé” = floor(r * 10^digits + 1/2)
fn rational_scaled_arrondi(r: &BigRational, digits: usize) -> BigInt {
    let demi = BigRational::new(BigInt::one(), BigInt::from(2));
    let x = r * BigRational::from_integer(pow10(digits)) + demi;
    x.floor().to_integer()
}

/// Groupe les milliers par une espace quand la partie entière a 5 chiffres ou plus.
fn grouper_milliers(chiffres: &str) -> String {
    let n = chiffres.len();
    if n < 5 {
        return chiffres.to_string();
    }
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal, virgule décimale.
/// Zéro n’est jamais signé (pas de “-0,0”).
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = grouper_milliers(&(&scaled / &scale).to_str_radix(10));
    let frac_part = &scaled % &scale;
    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    format!("{signe}{int_part},{frac}")
}

/* ------------------------ API décimale ------------------------ */

/// Arrondi à `decimales` chiffres (demi vers +∞), nombre de décimales FIXE.
/// decimal(3/8, 3) = "0,375" ; decimal(1/2, 0) = "1".
pub fn decimal(r: Rationnel, decimales: usize) -> String {
    let scaled = rational_scaled_arrondi(&vers_big(r), decimales);
    scaled_to_decimal(scaled, decimales)
}

/// Comme `decimal`, au plus `max` décimales, zéros finaux retirés.
/// decimal_court(99/100, 4) = "0,99" ; decimal_court(2, 3) = "2".
pub fn decimal_court(r: Rationnel, max: usize) -> String {
    let mut s = decimal(r, max);
    if s.contains(',') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with(',') {
            s.pop();
        }
    }
    s
}

/// Entier avec groupement des milliers.
pub fn nombre(n: i64) -> String {
    scaled_to_decimal(BigInt::from(n), 0)
}

pub fn probabilite(p: Rationnel, decimales: usize) -> String {
    decimal_court(p, decimales)
}

/// "12,5 %"
pub fn pourcentage(r: Rationnel, decimales: usize) -> String {
    format!("{} %", decimal_court(r, decimales))
}

pub fn pourcentage_entier(n: i64) -> String {
    format!("{} %", nombre(n))
}

/// Taux d’évolution signé : "+10 %", "-1 %", "0 %".
pub fn taux_signe(t: Rationnel, decimales: usize) -> String {
    let s = decimal_court(t, decimales);
    if s.starts_with('-') || s == "0" {
        format!("{s} %")
    } else {
        format!("+{s} %")
    }
}

/// "=" si `r` s’écrit exactement avec `decimales` chiffres, "≈" sinon.
pub fn egal_ou_environ(r: Rationnel, decimales: usize) -> &'static str {
    let x = vers_big(r) * BigRational::from_integer(pow10(decimales));
    if x.is_integer() {
        "="
    } else {
        "≈"
    }
}

/* ------------------------ Signes, puissances, fractions ------------------------ */

/// "+ 3" / "- 3" (terme dans une somme).
pub fn signe(v: i64) -> String {
    if v < 0 {
        format!("- {}", nombre(-v))
    } else {
        format!("+ {}", nombre(v))
    }
}

/// Entier, entre parenthèses s’il est négatif : "(-1)".
pub fn entre_parentheses(v: i64) -> String {
    if v < 0 {
        format!("({})", nombre(v))
    } else {
        nombre(v)
    }
}

/// base², base³, sinon base^e.
pub fn exposant(base: &str, e: i64) -> String {
    match e {
        1 => base.to_string(),
        2 => format!("{base}²"),
        3 => format!("{base}³"),
        _ => format!("{base}^{e}"),
    }
}

/// Rationnel exact : "n" si entier, sinon "n/d" (forme irréductible).
pub fn fraction(r: Rationnel) -> String {
    if r.is_integer() {
        nombre(r.to_integer())
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}

/* ------------------------ Expressions ------------------------ */

/// Coefficient devant une variable : 1 -> "", -1 -> "-", sinon le nombre.
fn coefficient(a: i64) -> String {
    match a {
        1 => String::new(),
        -1 => "-".to_string(),
        _ => nombre(a),
    }
}

/// "ax + b" avec les simplifications usuelles (x, -x, 3x - 2, 5, 0).
pub fn affine(a: i64, b: i64) -> String {
    if a == 0 {
        return nombre(b);
    }
    let terme = format!("{}x", coefficient(a));
    if b == 0 {
        terme
    } else {
        format!("{terme} {}", signe(b))
    }
}

/// "x² + bx + c"
pub fn trinome(b: i64, c: i64) -> String {
    second_degre(1, b, c)
}

/// "ax² + bx + c" (a ≠ 0)
pub fn second_degre(a: i64, b: i64, c: i64) -> String {
    let mut s = format!("{}x²", coefficient(a));
    match b {
        0 => {}
        1 => s.push_str(" + x"),
        -1 => s.push_str(" - x"),
        _ => s.push_str(&format!(" {}x", signe(b))),
    }
    if c != 0 {
        s.push_str(&format!(" {}", signe(c)));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::nombres::{entier, rat};

    #[test]
    fn decimal_virgule_et_arrondi() {
        assert_eq!(decimal(rat(3, 8), 3), "0,375");
        assert_eq!(decimal(rat(3, 8), 2), "0,38");
        assert_eq!(decimal(rat(5, 2), 0), "3");
        assert_eq!(decimal(rat(-5, 2), 0), "-2");
        assert_eq!(decimal(rat(1, 3), 4), "0,3333");
        assert_eq!(decimal(entier(2), 2), "2,00");
    }

    #[test]
    fn decimal_jamais_moins_zero() {
        assert_eq!(decimal(rat(-1, 25), 1), "0,0");
        assert_eq!(decimal_court(rat(-1, 25), 1), "0");
        assert_eq!(decimal(rat(-1, 3), 0), "0");
    }

    #[test]
    fn decimal_court_retire_les_zeros() {
        assert_eq!(decimal_court(rat(99, 100), 4), "0,99");
        assert_eq!(decimal_court(entier(2), 3), "2");
        assert_eq!(decimal_court(rat(-909, 100), 1), "-9,1");
    }

    #[test]
    fn groupement_des_milliers() {
        assert_eq!(nombre(1234), "1234");
        assert_eq!(nombre(12345), "12 345");
        assert_eq!(nombre(-1234567), "-1 234 567");
        assert_eq!(decimal(rat(246913, 2), 1), "123 456,5");
    }

    #[test]
    fn pourcentages_et_taux() {
        assert_eq!(pourcentage(rat(25, 2), 1), "12,5 %");
        assert_eq!(pourcentage_entier(40), "40 %");
        assert_eq!(taux_signe(entier(10), 0), "+10 %");
        assert_eq!(taux_signe(entier(-1), 0), "-1 %");
        assert_eq!(taux_signe(entier(0), 1), "0 %");
        assert_eq!(taux_signe(rat(-100, 11), 1), "-9,1 %");
    }

    #[test]
    fn egal_seulement_si_exact() {
        assert_eq!(egal_ou_environ(rat(1, 4), 2), "=");
        assert_eq!(egal_ou_environ(entier(25), 1), "=");
        assert_eq!(egal_ou_environ(rat(1, 3), 2), "≈");
        assert_eq!(egal_ou_environ(rat(1, 8), 2), "≈");
    }

    #[test]
    fn signes_et_puissances() {
        assert_eq!(signe(3), "+ 3");
        assert_eq!(signe(-3), "- 3");
        assert_eq!(entre_parentheses(-1), "(-1)");
        assert_eq!(entre_parentheses(4), "4");
        assert_eq!(exposant("x", 2), "x²");
        assert_eq!(exposant("2", 3), "2³");
        assert_eq!(exposant("a", 7), "a^7");
    }

    #[test]
    fn fractions() {
        assert_eq!(fraction(rat(6, 8)), "3/4");
        assert_eq!(fraction(rat(4, -6)), "-2/3");
        assert_eq!(fraction(entier(5)), "5");
    }

    #[test]
    fn expressions_affines_et_trinomes() {
        assert_eq!(affine(3, -1), "3x - 1");
        assert_eq!(affine(1, 0), "x");
        assert_eq!(affine(-1, 4), "-x + 4");
        assert_eq!(affine(0, 5), "5");
        assert_eq!(trinome(-5, 6), "x² - 5x + 6");
        assert_eq!(trinome(1, 0), "x² + x");
        assert_eq!(trinome(0, -9), "x² - 9");
        assert_eq!(second_degre(2, 0, 1), "2x² + 1");
        assert_eq!(second_degre(-1, 3, 0), "-x² + 3x");
    }
}
