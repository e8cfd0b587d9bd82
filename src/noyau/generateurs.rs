// src/noyau/generateurs.rs
//
// Générateurs de questions, regroupés en six banques thématiques.
// Chaque générateur : fn(&mut dyn Alea) -> Question, sans état.
//
// Forme commune :
// 1) tirage des paramètres (plages “propres”, re-tirage si dégénéré)
// 2) réponse exacte (entiers / rationnels, jamais de flottants)
// 3) distracteurs issus de modèles d’erreur, complétés par décalages
// 4) jeu de choix + explication avec les mêmes nombres

pub mod calcul;
pub mod evolutions;
pub mod fonctions;
pub mod probabilites;
pub mod proportions;
pub mod statistiques;

use super::alea::Alea;
use super::choix::construire_choix;
use super::question::Question;

/// Nombre de distracteurs visé (=> 4 choix).
pub const NOMBRE_DISTRACTEURS: usize = 3;

/* ------------------------ Briques communes ------------------------ */

/// Assemble la Question : choix mélangés, attendu = `correct`.
pub(crate) fn question(
    alea: &mut dyn Alea,
    enonce: String,
    correct: String,
    faux: Vec<String>,
    explication: String,
) -> Question {
    let jeu = construire_choix(alea, &correct, &faux);
    Question::new(enonce, jeu, correct, explication)
}

/// 1, -1, 2, -2, 3, … (k >= 1)
pub(crate) fn decalage(k: i64) -> i64 {
    if k % 2 == 1 {
        (k + 1) / 2
    } else {
        -(k / 2)
    }
}

/// Retire doublons et collisions avec `correct`, puis complète jusqu’à
/// NOMBRE_DISTRACTEURS avec `modele(decalage(k))`.
pub(crate) fn completer(correct: &str, faux: &mut Vec<String>, modele: impl Fn(i64) -> String) {
    let mut uniques: Vec<String> = Vec::with_capacity(NOMBRE_DISTRACTEURS);
    for f in faux.drain(..) {
        if f != correct && !uniques.contains(&f) {
            uniques.push(f);
        }
    }

    let mut k = 1;
    while uniques.len() < NOMBRE_DISTRACTEURS && k <= 64 {
        let candidat = modele(decalage(k));
        if candidat != correct && !uniques.contains(&candidat) {
            uniques.push(candidat);
        }
        k += 1;
    }

    uniques.truncate(NOMBRE_DISTRACTEURS);
    *faux = uniques;
}

/* ------------------------ Thèmes ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Calcul,
    Proportions,
    Evolutions,
    Fonctions,
    Statistiques,
    Probabilites,
}

impl Theme {
    pub const TOUS: [Theme; 6] = [
        Theme::Calcul,
        Theme::Proportions,
        Theme::Evolutions,
        Theme::Fonctions,
        Theme::Statistiques,
        Theme::Probabilites,
    ];

    /// Clé tolérante (casse, accents, espaces). None si inconnue.
    pub fn reconnaitre(cle: &str) -> Option<Theme> {
        let normalisee: String = cle
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'é' | 'è' | 'ê' | 'ë' => 'e',
                'à' | 'â' => 'a',
                'î' | 'ï' => 'i',
                'ô' => 'o',
                'ù' | 'û' => 'u',
                _ => c,
            })
            .collect();

        Theme::TOUS.into_iter().find(|t| t.cle() == normalisee)
    }

    /// Clé inconnue (ou vide) => calcul.
    pub fn depuis_cle(cle: &str) -> Theme {
        Theme::reconnaitre(cle).unwrap_or_else(|| {
            log::debug!("thème inconnu « {cle} », repli sur calcul");
            Theme::Calcul
        })
    }

    pub fn cle(self) -> &'static str {
        match self {
            Theme::Calcul => "calcul",
            Theme::Proportions => "proportions",
            Theme::Evolutions => "evolutions",
            Theme::Fonctions => "fonctions",
            Theme::Statistiques => "statistiques",
            Theme::Probabilites => "probabilites",
        }
    }

    pub fn titre(self) -> &'static str {
        match self {
            Theme::Calcul => "Calcul",
            Theme::Proportions => "Proportions",
            Theme::Evolutions => "Évolutions",
            Theme::Fonctions => "Fonctions",
            Theme::Statistiques => "Statistiques",
            Theme::Probabilites => "Probabilités",
        }
    }

    /// Banque ordonnée du thème.
    pub fn banque(self) -> &'static [Generateur] {
        use Generateur::*;
        match self {
            Theme::Calcul => &[
                EquationLineaire,
                SommeFractions,
                OperationsFractions,
                ReglePuissances,
                CalculMental,
                ComparaisonDecimaux,
                DecimalVersFraction,
                PourcentageVersDecimal,
                OrdreDeGrandeur,
                ConversionLongueurs,
                ConversionAires,
                ConversionVolumes,
                ConversionMasses,
                ConversionContenances,
                ConversionDurees,
                ConversionVitesses,
                EquationProduitNul,
                EquationCarre,
                EquationQuotient,
                IdentitesRemarquables,
                FactorisationTrinome,
                InequationPremierDegre,
                FacteurCommun,
                ReglesDeSigne,
                FactorisationIdentites,
                IsolerVariable,
                AireTriangle,
                ComparaisonCalculs,
                Vraisemblance,
            ],
            Theme::Proportions => &[
                PourcentageValeur,
                PrixUnitaire,
                Recette,
                CoefficientMultiplicateur,
                ProportionPourcentage,
                TotalDepuisPartie,
                TableauProportionnalite,
                ComparaisonMelanges,
            ],
            Theme::Evolutions => &[
                AdditifMultiplicatif,
                ValeurFinale,
                ValeurInitialeHausse,
                TauxSuccessifs,
                TauxReciproque,
                TauxDepuisValeurs,
                VariationsMultiples,
                ValeurApresDeuxVariations,
                ValeurInitialeBaisse,
                IndiceBase100,
            ],
            Theme::Fonctions => &[
                ImageAffine,
                CoefficientDirecteur,
                SensVariation,
                TableauVariations,
                SigneDerivee,
                Antecedent,
                LectureImage,
                LectureZero,
                SigneGraphique,
                EquationReduiteGraphique,
                ResolutionGraphique,
                EquationPointPente,
                PointParabole,
                SigneAffine,
                SigneProduit,
                TracerDroite,
                NatureFonction,
            ],
            Theme::Statistiques => &[
                MoyenneSimple,
                MoyennePonderee,
                Mediane,
                Quartile,
                EcartInterquartile,
                LectureBoite,
                ComparaisonBoites,
                DiagrammeBatons,
                FrequenceClasse,
                DiagrammeCirculaire,
                TendanceNuage,
                SerieChronologique,
            ],
            Theme::Probabilites => &[
                TirageSac,
                EvenementContraire,
                EvenementsIndependants,
                ArbrePondere,
                ConditionnelleTableau,
                DeEquilibre,
                FaceDe,
                EvenementParSomme,
                Bayes,
                LoiBinomiale,
                BornesProbabilite,
                ReunionIssues,
                RelationIntersection,
            ],
        }
    }
}

/* ------------------------ Générateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Generateur {
    // calcul
    EquationLineaire,
    SommeFractions,
    OperationsFractions,
    ReglePuissances,
    CalculMental,
    ComparaisonDecimaux,
    DecimalVersFraction,
    PourcentageVersDecimal,
    OrdreDeGrandeur,
    ConversionLongueurs,
    ConversionAires,
    ConversionVolumes,
    ConversionMasses,
    ConversionContenances,
    ConversionDurees,
    ConversionVitesses,
    EquationProduitNul,
    EquationCarre,
    EquationQuotient,
    IdentitesRemarquables,
    FactorisationTrinome,
    InequationPremierDegre,
    FacteurCommun,
    ReglesDeSigne,
    FactorisationIdentites,
    IsolerVariable,
    AireTriangle,
    ComparaisonCalculs,
    Vraisemblance,
    // proportions
    PourcentageValeur,
    PrixUnitaire,
    Recette,
    CoefficientMultiplicateur,
    ProportionPourcentage,
    TotalDepuisPartie,
    TableauProportionnalite,
    ComparaisonMelanges,
    // évolutions
    AdditifMultiplicatif,
    ValeurFinale,
    ValeurInitialeHausse,
    TauxSuccessifs,
    TauxReciproque,
    TauxDepuisValeurs,
    VariationsMultiples,
    ValeurApresDeuxVariations,
    ValeurInitialeBaisse,
    IndiceBase100,
    // fonctions
    ImageAffine,
    CoefficientDirecteur,
    SensVariation,
    TableauVariations,
    SigneDerivee,
    Antecedent,
    LectureImage,
    LectureZero,
    SigneGraphique,
    EquationReduiteGraphique,
    ResolutionGraphique,
    EquationPointPente,
    PointParabole,
    SigneAffine,
    SigneProduit,
    TracerDroite,
    NatureFonction,
    // statistiques
    MoyenneSimple,
    MoyennePonderee,
    Mediane,
    Quartile,
    EcartInterquartile,
    LectureBoite,
    ComparaisonBoites,
    DiagrammeBatons,
    FrequenceClasse,
    DiagrammeCirculaire,
    TendanceNuage,
    SerieChronologique,
    // probabilités
    TirageSac,
    EvenementContraire,
    EvenementsIndependants,
    ArbrePondere,
    ConditionnelleTableau,
    DeEquilibre,
    FaceDe,
    EvenementParSomme,
    Bayes,
    LoiBinomiale,
    BornesProbabilite,
    ReunionIssues,
    RelationIntersection,
}

impl Generateur {
    pub fn generer(self, alea: &mut dyn Alea) -> Question {
        use calcul::Grandeur;
        use Generateur::*;
        match self {
            EquationLineaire => calcul::equation_lineaire(alea),
            SommeFractions => calcul::somme_fractions(alea),
            OperationsFractions => calcul::operations_fractions(alea),
            ReglePuissances => calcul::regle_puissances(alea),
            CalculMental => calcul::calcul_mental(alea),
            ComparaisonDecimaux => calcul::comparaison_decimaux(alea),
            DecimalVersFraction => calcul::decimal_vers_fraction(alea),
            PourcentageVersDecimal => calcul::pourcentage_vers_decimal(alea),
            OrdreDeGrandeur => calcul::ordre_de_grandeur(alea),
            ConversionLongueurs => calcul::conversion(alea, Grandeur::Longueur),
            ConversionAires => calcul::conversion(alea, Grandeur::Aire),
            ConversionVolumes => calcul::conversion(alea, Grandeur::Volume),
            ConversionMasses => calcul::conversion(alea, Grandeur::Masse),
            ConversionContenances => calcul::conversion(alea, Grandeur::Contenance),
            ConversionDurees => calcul::conversion_duree(alea),
            ConversionVitesses => calcul::conversion_vitesse(alea),
            EquationProduitNul => calcul::equation_produit_nul(alea),
            EquationCarre => calcul::equation_carre(alea),
            EquationQuotient => calcul::equation_quotient(alea),
            IdentitesRemarquables => calcul::identites_remarquables(alea),
            FactorisationTrinome => calcul::factorisation_trinome(alea),
            InequationPremierDegre => calcul::inequation_premier_degre(alea),
            FacteurCommun => calcul::facteur_commun(alea),
            ReglesDeSigne => calcul::regles_de_signe(alea),
            FactorisationIdentites => calcul::factorisation_identites(alea),
            IsolerVariable => calcul::isoler_variable(alea),
            AireTriangle => calcul::aire_triangle(alea),
            ComparaisonCalculs => calcul::comparaison_calculs(alea),
            Vraisemblance => calcul::vraisemblance(alea),

            PourcentageValeur => proportions::pourcentage_valeur(alea),
            PrixUnitaire => proportions::prix_unitaire(alea),
            Recette => proportions::recette(alea),
            CoefficientMultiplicateur => proportions::coefficient_multiplicateur(alea),
            ProportionPourcentage => proportions::proportion_pourcentage(alea),
            TotalDepuisPartie => proportions::total_depuis_partie(alea),
            TableauProportionnalite => proportions::tableau_proportionnalite(alea),
            ComparaisonMelanges => proportions::comparaison_melanges(alea),

            AdditifMultiplicatif => evolutions::additif_multiplicatif(alea),
            ValeurFinale => evolutions::valeur_finale(alea),
            ValeurInitialeHausse => evolutions::valeur_initiale_hausse(alea),
            TauxSuccessifs => evolutions::taux_successifs(alea),
            TauxReciproque => evolutions::taux_reciproque_question(alea),
            TauxDepuisValeurs => evolutions::taux_depuis_valeurs(alea),
            VariationsMultiples => evolutions::variations_multiples(alea),
            ValeurApresDeuxVariations => evolutions::valeur_apres_deux_variations(alea),
            ValeurInitialeBaisse => evolutions::valeur_initiale_baisse(alea),
            IndiceBase100 => evolutions::indice_base_100(alea),

            ImageAffine => fonctions::image_affine(alea),
            CoefficientDirecteur => fonctions::coefficient_directeur(alea),
            SensVariation => fonctions::sens_variation(alea),
            TableauVariations => fonctions::tableau_variations(alea),
            SigneDerivee => fonctions::signe_derivee(alea),
            Antecedent => fonctions::antecedent(alea),
            LectureImage => fonctions::lecture_image(alea),
            LectureZero => fonctions::lecture_zero(alea),
            SigneGraphique => fonctions::signe_graphique(alea),
            EquationReduiteGraphique => fonctions::equation_reduite_graphique(alea),
            ResolutionGraphique => fonctions::resolution_graphique(alea),
            EquationPointPente => fonctions::equation_point_pente(alea),
            PointParabole => fonctions::point_parabole(alea),
            SigneAffine => fonctions::signe_affine(alea),
            SigneProduit => fonctions::signe_produit(alea),
            TracerDroite => fonctions::tracer_droite(alea),
            NatureFonction => fonctions::nature_fonction(alea),

            MoyenneSimple => statistiques::moyenne_simple(alea),
            MoyennePonderee => statistiques::moyenne_ponderee(alea),
            Mediane => statistiques::mediane_question(alea),
            Quartile => statistiques::quartile(alea),
            EcartInterquartile => statistiques::ecart_interquartile(alea),
            LectureBoite => statistiques::lecture_boite(alea),
            ComparaisonBoites => statistiques::comparaison_boites(alea),
            DiagrammeBatons => statistiques::diagramme_batons(alea),
            FrequenceClasse => statistiques::frequence_classe(alea),
            DiagrammeCirculaire => statistiques::diagramme_circulaire(alea),
            TendanceNuage => statistiques::tendance_nuage(alea),
            SerieChronologique => statistiques::serie_chronologique(alea),

            TirageSac => probabilites::tirage_sac(alea),
            EvenementContraire => probabilites::evenement_contraire(alea),
            EvenementsIndependants => probabilites::evenements_independants(alea),
            ArbrePondere => probabilites::arbre_pondere(alea),
            ConditionnelleTableau => probabilites::conditionnelle_tableau(alea),
            DeEquilibre => probabilites::de_equilibre(alea),
            FaceDe => probabilites::face_de(alea),
            EvenementParSomme => probabilites::evenement_par_somme(alea),
            Bayes => probabilites::bayes_question(alea),
            LoiBinomiale => probabilites::loi_binomiale(alea),
            BornesProbabilite => probabilites::bornes_probabilite(alea),
            ReunionIssues => probabilites::reunion_issues(alea),
            RelationIntersection => probabilites::relation_intersection(alea),
        }
    }

    /// Identifiant stable (journaux, erreurs).
    pub fn nom(self) -> &'static str {
        use Generateur::*;
        match self {
            EquationLineaire => "equation_lineaire",
            SommeFractions => "somme_fractions",
            OperationsFractions => "operations_fractions",
            ReglePuissances => "regle_puissances",
            CalculMental => "calcul_mental",
            ComparaisonDecimaux => "comparaison_decimaux",
            DecimalVersFraction => "decimal_vers_fraction",
            PourcentageVersDecimal => "pourcentage_vers_decimal",
            OrdreDeGrandeur => "ordre_de_grandeur",
            ConversionLongueurs => "conversion_longueurs",
            ConversionAires => "conversion_aires",
            ConversionVolumes => "conversion_volumes",
            ConversionMasses => "conversion_masses",
            ConversionContenances => "conversion_contenances",
            ConversionDurees => "conversion_durees",
            ConversionVitesses => "conversion_vitesses",
            EquationProduitNul => "equation_produit_nul",
            EquationCarre => "equation_carre",
            EquationQuotient => "equation_quotient",
            IdentitesRemarquables => "identites_remarquables",
            FactorisationTrinome => "factorisation_trinome",
            InequationPremierDegre => "inequation_premier_degre",
            FacteurCommun => "facteur_commun",
            ReglesDeSigne => "regles_de_signe",
            FactorisationIdentites => "factorisation_identites",
            IsolerVariable => "isoler_variable",
            AireTriangle => "aire_triangle",
            ComparaisonCalculs => "comparaison_calculs",
            Vraisemblance => "vraisemblance",
            PourcentageValeur => "pourcentage_valeur",
            PrixUnitaire => "prix_unitaire",
            Recette => "recette",
            CoefficientMultiplicateur => "coefficient_multiplicateur",
            ProportionPourcentage => "proportion_pourcentage",
            TotalDepuisPartie => "total_depuis_partie",
            TableauProportionnalite => "tableau_proportionnalite",
            ComparaisonMelanges => "comparaison_melanges",
            AdditifMultiplicatif => "additif_multiplicatif",
            ValeurFinale => "valeur_finale",
            ValeurInitialeHausse => "valeur_initiale_hausse",
            TauxSuccessifs => "taux_successifs",
            TauxReciproque => "taux_reciproque",
            TauxDepuisValeurs => "taux_depuis_valeurs",
            VariationsMultiples => "variations_multiples",
            ValeurApresDeuxVariations => "valeur_apres_deux_variations",
            ValeurInitialeBaisse => "valeur_initiale_baisse",
            IndiceBase100 => "indice_base_100",
            ImageAffine => "image_affine",
            CoefficientDirecteur => "coefficient_directeur",
            SensVariation => "sens_variation",
            TableauVariations => "tableau_variations",
            SigneDerivee => "signe_derivee",
            Antecedent => "antecedent",
            LectureImage => "lecture_image",
            LectureZero => "lecture_zero",
            SigneGraphique => "signe_graphique",
            EquationReduiteGraphique => "equation_reduite_graphique",
            ResolutionGraphique => "resolution_graphique",
            EquationPointPente => "equation_point_pente",
            PointParabole => "point_parabole",
            SigneAffine => "signe_affine",
            SigneProduit => "signe_produit",
            TracerDroite => "tracer_droite",
            NatureFonction => "nature_fonction",
            MoyenneSimple => "moyenne_simple",
            MoyennePonderee => "moyenne_ponderee",
            Mediane => "mediane",
            Quartile => "quartile",
            EcartInterquartile => "ecart_interquartile",
            LectureBoite => "lecture_boite",
            ComparaisonBoites => "comparaison_boites",
            DiagrammeBatons => "diagramme_batons",
            FrequenceClasse => "frequence_classe",
            DiagrammeCirculaire => "diagramme_circulaire",
            TendanceNuage => "tendance_nuage",
            SerieChronologique => "serie_chronologique",
            TirageSac => "tirage_sac",
            EvenementContraire => "evenement_contraire",
            EvenementsIndependants => "evenements_independants",
            ArbrePondere => "arbre_pondere",
            ConditionnelleTableau => "conditionnelle_tableau",
            DeEquilibre => "de_equilibre",
            FaceDe => "face_de",
            EvenementParSomme => "evenement_par_somme",
            Bayes => "bayes",
            LoiBinomiale => "loi_binomiale",
            BornesProbabilite => "bornes_probabilite",
            ReunionIssues => "reunion_issues",
            RelationIntersection => "relation_intersection",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn decalages_alternes() {
        let v: Vec<i64> = (1..=6).map(decalage).collect();
        assert_eq!(v, vec![1, -1, 2, -2, 3, -3]);
    }

    #[test]
    fn completer_retire_collisions_et_complete() {
        let mut faux = vec!["5".to_string(), "5".to_string(), "4".to_string()];
        completer("4", &mut faux, |d| format!("{}", 4 + d));
        assert_eq!(faux, vec!["5", "3", "6"]);
    }

    #[test]
    fn completer_tronque_a_trois() {
        let mut faux: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        completer("z", &mut faux, |d| d.to_string());
        assert_eq!(faux, vec!["a", "b", "c"]);
    }

    #[test]
    fn cles_tolerantes() {
        assert_eq!(Theme::depuis_cle("Évolutions"), Theme::Evolutions);
        assert_eq!(Theme::depuis_cle(" probabilités "), Theme::Probabilites);
        assert_eq!(Theme::depuis_cle("STATISTIQUES"), Theme::Statistiques);
        assert_eq!(Theme::depuis_cle("géométrie"), Theme::Calcul);
        assert_eq!(Theme::depuis_cle(""), Theme::Calcul);
        assert_eq!(Theme::reconnaitre("inconnu"), None);
    }

    #[test]
    fn banques_non_vides_et_noms_uniques() {
        let mut noms = HashSet::new();
        for theme in Theme::TOUS {
            assert!(theme.banque().len() >= 2, "{:?}", theme);
            for g in theme.banque() {
                assert!(noms.insert(g.nom()), "nom dupliqué : {}", g.nom());
            }
        }
        assert!(noms.len() >= 40);
    }
}
