// src/noyau/alea.rs
//
// Source aléatoire injectable.
// - Alea       : capacité minimale (entier uniforme, bornes incluses)
// - AleaRand   : adaptateur rand (thread RNG en prod, StdRng seedé en test)
// - AleaScript : valeurs imposées (tests de scénarios)
//
// Les générateurs ne voient que `&mut dyn Alea` : aucun état global.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

pub trait Alea {
    /// Entier uniforme dans [min, max], bornes INCLUSES.
    /// Si max <= min : renvoie min.
    fn entier(&mut self, min: i64, max: i64) -> i64;
}

/* ------------------------ Helpers (sur toute source) ------------------------ */

impl dyn Alea + '_ {
    pub fn pile_ou_face(&mut self) -> bool {
        self.entier(0, 1) == 1
    }

    /// Élément uniforme d’une liste NON vide.
    pub fn element<'a, T>(&mut self, liste: &'a [T]) -> &'a T {
        let i = self.entier(0, liste.len() as i64 - 1);
        &liste[i as usize]
    }

    /// Entier non nul dans [min, max] (la plage doit contenir au moins un non nul).
    pub fn entier_non_nul(&mut self, min: i64, max: i64) -> i64 {
        loop {
            let v = self.entier(min, max);
            if v != 0 {
                return v;
            }
        }
    }

    /// Fisher-Yates sur une COPIE : l’entrée n’est jamais modifiée.
    pub fn melanger<T: Clone>(&mut self, liste: &[T]) -> Vec<T> {
        let mut copie = liste.to_vec();
        for i in (1..copie.len()).rev() {
            let j = self.entier(0, i as i64) as usize;
            copie.swap(i, j);
        }
        copie
    }
}

/* ------------------------ Adaptateur rand ------------------------ */

#[derive(Clone, Debug)]
pub struct AleaRand<R: Rng> {
    rng: R,
}

impl AleaRand<ThreadRng> {
    /// Source “réelle” (RNG de thread, entropie système).
    pub fn systeme() -> Self {
        Self { rng: rand::rng() }
    }
}

impl AleaRand<StdRng> {
    /// Source reproductible (même graine => mêmes tirages).
    pub fn graine(graine: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(graine),
        }
    }
}

impl<R: Rng> Alea for AleaRand<R> {
    fn entier(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/* ------------------------ Source scriptée (tests) ------------------------ */

/// Rejoue des valeurs imposées, ramenées dans [min, max].
/// Une fois la liste épuisée : parcours cyclique min, min+1, … (jamais bloquant
/// pour les générateurs qui re-tirent jusqu’à obtenir des valeurs distinctes).
#[cfg(test)]
pub struct AleaScript {
    valeurs: std::collections::VecDeque<i64>,
    apres: i64,
}

#[cfg(test)]
impl AleaScript {
    pub fn new(valeurs: &[i64]) -> Self {
        Self {
            valeurs: valeurs.iter().copied().collect(),
            apres: 0,
        }
    }
}

#[cfg(test)]
impl Alea for AleaScript {
    fn entier(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        match self.valeurs.pop_front() {
            Some(v) => v.clamp(min, max),
            None => {
                let v = min + self.apres.rem_euclid(max - min + 1);
                self.apres += 1;
                v
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Alea, AleaRand, AleaScript};

    #[test]
    fn entier_bornes_incluses() {
        let mut alea = AleaRand::graine(1);
        let mut vu_min = false;
        let mut vu_max = false;
        for _ in 0..2000 {
            let v = alea.entier(-2, 2);
            assert!((-2..=2).contains(&v), "hors bornes: {v}");
            vu_min |= v == -2;
            vu_max |= v == 2;
        }
        assert!(vu_min && vu_max, "les deux bornes doivent sortir");
    }

    #[test]
    fn entier_plage_degeneree() {
        let mut alea = AleaRand::graine(2);
        assert_eq!(alea.entier(5, 5), 5);
        assert_eq!(alea.entier(7, 3), 7);
    }

    #[test]
    fn melanger_est_une_permutation() {
        let source: Vec<i64> = (0..20).collect();
        let alea: &mut dyn Alea = &mut AleaRand::graine(3);
        for _ in 0..50 {
            let mut m = alea.melanger(&source);
            m.sort();
            assert_eq!(m, source);
        }
    }

    #[test]
    fn melanger_ne_modifie_pas_l_entree() {
        let source = vec!["a", "b", "c", "d"];
        let alea: &mut dyn Alea = &mut AleaRand::graine(4);
        let _ = alea.melanger(&source);
        assert_eq!(source, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn meme_graine_memes_tirages() {
        let mut a = AleaRand::graine(42);
        let mut b = AleaRand::graine(42);
        for _ in 0..100 {
            assert_eq!(a.entier(0, 1000), b.entier(0, 1000));
        }
    }

    #[test]
    fn script_rejoue_puis_cycle() {
        let mut s = AleaScript::new(&[3, 50, -9]);
        assert_eq!(s.entier(0, 10), 3);
        assert_eq!(s.entier(0, 10), 10); // ramené dans la plage
        assert_eq!(s.entier(-5, 5), -5);
        // épuisé : min, min+1, …
        assert_eq!(s.entier(1, 6), 1);
        assert_eq!(s.entier(1, 6), 2);
        assert_eq!(s.entier(1, 6), 3);
    }

    #[test]
    fn entier_non_nul_evite_zero() {
        let alea: &mut dyn Alea = &mut AleaScript::new(&[0, 0, 4]);
        assert_eq!(alea.entier_non_nul(-5, 5), 4);
    }
}
