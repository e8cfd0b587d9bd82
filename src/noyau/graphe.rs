// src/noyau/graphe.rs
//
// Mini-graphe des questions de lecture graphique : une droite y = ax + b
// tracée dans la fenêtre x ∈ [-4, 4], y ∈ [-8, 8].
// Deux sorties : balisage SVG (contrat Question) et segment brut (peintre egui).

pub const X_MIN: i64 = -4;
pub const X_MAX: i64 = 4;
pub const Y_MIN: i64 = -8;
pub const Y_MAX: i64 = 8;

pub const LARGEUR: f64 = 180.0;
pub const HAUTEUR: f64 = 110.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DroiteAffine {
    pub pente: i64,
    pub ordonnee: i64,
}

impl DroiteAffine {
    pub fn new(pente: i64, ordonnee: i64) -> Self {
        Self { pente, ordonnee }
    }

    pub fn valeur(&self, x: i64) -> i64 {
        self.pente * x + self.ordonnee
    }

    /// Vrai si le point (x, f(x)) est lisible dans la fenêtre.
    pub fn lisible_en(&self, x: i64) -> bool {
        (X_MIN..=X_MAX).contains(&x) && (Y_MIN..=Y_MAX).contains(&self.valeur(x))
    }

    /// Portion de la droite visible dans la fenêtre (coordonnées mathématiques).
    /// None si la droite ne traverse pas la fenêtre.
    pub fn segment_visible(&self) -> Option<((f64, f64), (f64, f64))> {
        let (a, b) = (self.pente as f64, self.ordonnee as f64);
        let (mut lo, mut hi) = (X_MIN as f64, X_MAX as f64);

        if self.pente == 0 {
            if !(Y_MIN as f64..=Y_MAX as f64).contains(&b) {
                return None;
            }
        } else {
            let x1 = (Y_MIN as f64 - b) / a;
            let x2 = (Y_MAX as f64 - b) / a;
            lo = lo.max(x1.min(x2));
            hi = hi.min(x1.max(x2));
            if lo > hi {
                return None;
            }
        }
        Some(((lo, a * lo + b), (hi, a * hi + b)))
    }

    /// Coordonnées mathématiques -> pixels SVG (origine en haut à gauche).
    fn vers_pixels(x: f64, y: f64) -> (f64, f64) {
        let px = (x - X_MIN as f64) / (X_MAX - X_MIN) as f64 * LARGEUR;
        let py = (Y_MAX as f64 - y) / (Y_MAX - Y_MIN) as f64 * HAUTEUR;
        (px, py)
    }

    /// Balisage SVG autonome (axes, graduations, droite).
    pub fn svg(&self) -> String {
        let mut s = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{LARGEUR}\" height=\"{HAUTEUR}\" \
             viewBox=\"0 0 {LARGEUR} {HAUTEUR}\" class=\"mini-graph\">"
        );

        // graduations verticales (une par unité en x)
        for x in X_MIN..=X_MAX {
            let (px, _) = Self::vers_pixels(x as f64, 0.0);
            s.push_str(&format!(
                "<line x1=\"{px:.1}\" y1=\"0\" x2=\"{px:.1}\" y2=\"{HAUTEUR}\" stroke=\"#e5e7eb\" stroke-width=\"1\"/>"
            ));
        }

        // axes
        let (ox, oy) = Self::vers_pixels(0.0, 0.0);
        s.push_str(&format!(
            "<line x1=\"0\" y1=\"{oy:.1}\" x2=\"{LARGEUR}\" y2=\"{oy:.1}\" stroke=\"#6b7280\" stroke-width=\"1.5\"/>"
        ));
        s.push_str(&format!(
            "<line x1=\"{ox:.1}\" y1=\"0\" x2=\"{ox:.1}\" y2=\"{HAUTEUR}\" stroke=\"#6b7280\" stroke-width=\"1.5\"/>"
        ));

        if let Some(((x1, y1), (x2, y2))) = self.segment_visible() {
            let (p1x, p1y) = Self::vers_pixels(x1, y1);
            let (p2x, p2y) = Self::vers_pixels(x2, y2);
            s.push_str(&format!(
                "<line x1=\"{p1x:.1}\" y1=\"{p1y:.1}\" x2=\"{p2x:.1}\" y2=\"{p2y:.1}\" stroke=\"#2563eb\" stroke-width=\"2.5\"/>"
            ));
        }

        s.push_str("</svg>");
        s
    }
}
