//! Aides côté source d'entrée.
//!
//! Deux règles héritées du dialogue d'origine, utilisables par
//! n'importe quelle source de saisie (champ de texte, REPL...) :
//! - un filtre de caractères sûrs appliqué AVANT d'appeler le moteur
//! - la règle d'activation du bouton Calculer (champ non vide)
//!
//! Le moteur lui-même ne suppose JAMAIS que le filtre a tourné : une
//! saisie hors jeu de caractères échoue simplement au niveau lexical.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Chaînes ne contenant que des caractères sûrs pour une saisie :
    /// chiffres, lettres minuscules, espaces et ( ) / * + -.
    static ref CARACTERES_SURS: Regex = Regex::new(
        r"^[0-9a-z\+\-/\(\)\* ]*$"
    ).unwrap();
}

/// Vrai si la chaîne ne contient que des caractères sûrs.
/// La chaîne vide est acceptée (champ vide = saisie en cours).
pub fn saisie_valide(s: &str) -> bool {
    CARACTERES_SURS.is_match(s)
}

/// Règle d'activation : on ne peut lancer le calcul que sur un champ
/// non vide.
pub fn peut_calculer(s: &str) -> bool {
    !s.is_empty()
}
