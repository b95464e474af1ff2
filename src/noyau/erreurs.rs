// src/noyau/erreurs.rs
//
// Erreurs typées du moteur. Deux familles :
// - ErreurJetons : échec lexical, fatal pour l'appel entier ; `calc`
//   la traduit en "Evaluation error" (le détail reste interne).
// - ErreurEval   : échecs de la machine à pile ; leur Display est
//   EXACTEMENT la chaîne de diagnostic attendue par l'appelant.

use thiserror::Error;

/// Échec de tokenisation : un mot n'est ni mot-clé, ni constante,
/// ni littéral numérique.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurJetons {
    #[error("sous-chaîne inconnue: {0:?}")]
    MotInconnu(String),
}

/// Échecs de l'évaluateur postfixe. Les chaînes sont figées : c'est
/// le contrat externe, ne pas les reformuler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Opérateur sans opérande (pile vide au dépilement).
    #[error("Syntax error")]
    Syntaxe,

    /// Parenthèse non consommée qui a survécu jusqu'à la RPN.
    #[error("Parsing error: Unexpected parenthesis in RPN")]
    ParentheseResiduelle,

    /// Opérateur refusé par le dispatch arithmétique. Défensif :
    /// inatteignable tant que l'arité et le dispatch sont d'accord.
    #[error("Parsing error: Invalid token")]
    JetonInvalide,

    /// Pile de valeurs vide après consommation de toute la RPN.
    #[error("Runtime error")]
    ResultatVide,
}
