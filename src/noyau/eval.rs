//! Noyau — évaluation postfixe + pipeline complet
//!
//! chaîne -> tokenize -> RPN -> machine à pile -> chaîne résultat
//!
//! Le pipeline est strictement linéaire et sans état : seules les
//! tables lexicales (immuables) sont partagées entre appels.

use tracing::{debug, trace};

use super::erreurs::{ErreurEval, ErreurJetons};
use super::jetons::{tokenize, Jeton, Op};
use super::rpn::convertir;
use super::tables::PI;

/// Diagnostic externe d'un échec lexical. Le mot fautif n'est pas
/// remonté à l'appelant : contrat historique du moteur.
const DIAG_ERREUR_LEXICALE: &str = "Evaluation error";

/// Évalue une suite RPN avec une pile de valeurs.
///
/// Ordre des opérandes : premier dépilé = opérande DROIT `a`, second
/// dépilé = opérande GAUCHE `b` ; un binaire calcule `b OP a`, ce qui
/// préserve l'ordre textuel de la soustraction et de la division.
///
/// Échecs :
/// - dépilement à vide -> Syntaxe
/// - parenthèse non consommée -> ParentheseResiduelle
/// - opérateur hors dispatch -> JetonInvalide (défensif)
/// - pile vide à la fin -> ResultatVide
pub fn evaluer(rpn: &[Jeton]) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::new();

    for &jeton in rpn {
        let op = match jeton {
            Jeton::Nombre(v) => {
                pile.push(v);
                continue;
            }
            Jeton::Op(op) => op,
        };

        if !op.est_operateur() {
            return Err(ErreurEval::ParentheseResiduelle);
        }

        // Tout opérateur a au moins un opérande.
        let a = pile.pop().ok_or(ErreurEval::Syntaxe)?;
        let valeur = if op.est_binaire() {
            let b = pile.pop().ok_or(ErreurEval::Syntaxe)?;
            applique_binaire(op, b, a).ok_or(ErreurEval::JetonInvalide)?
        } else {
            applique_unaire(op, a).ok_or(ErreurEval::JetonInvalide)?
        };
        pile.push(valeur);
    }

    // Le sommet porte la réponse ; pile vide = rien à répondre.
    pile.last().copied().ok_or(ErreurEval::ResultatVide)
}

/// Arithmétique binaire : `b OP a`. None si l'opérateur n'est pas
/// binaire (le dispatch et l'arité seraient alors en désaccord).
fn applique_binaire(op: Op, b: f64, a: f64) -> Option<f64> {
    match op {
        Op::Plus => Some(b + a),
        Op::Moins => Some(b - a),
        Op::Fois => Some(b * a),
        Op::Divise => Some(b / a),
        _ => None,
    }
}

/// Arithmétique unaire. Trig en radians ; degs/rads convertissent
/// radians <-> degrés. None si l'opérateur n'est pas unaire.
fn applique_unaire(op: Op, a: f64) -> Option<f64> {
    match op {
        Op::MoinsUnaire => Some(-a),
        Op::Sin => Some(a.sin()),
        Op::Cos => Some(a.cos()),
        Op::Tan => Some(a.tan()),
        Op::Asin => Some(a.asin()),
        Op::Acos => Some(a.acos()),
        Op::Atan => Some(a.atan()),
        Op::VersDegres => Some(180.0 * a / PI),
        Op::VersRadians => Some(PI * a / 180.0),
        Op::Sqrt => Some(a.sqrt()),
        Op::Exp => Some(a.exp()),
        _ => None,
    }
}

/// API publique : évalue une expression et retourne toujours une chaîne.
///
/// - succès : forme décimale du résultat (Display de f64)
/// - échec lexical : "Evaluation error" (uniforme, mot fautif perdu)
/// - échec d'évaluation : la chaîne de diagnostic figée de l'erreur
///
/// Aucun chemin ne panique : l'appelant peut réafficher et repartir.
pub fn calc(expression: &str) -> String {
    let jetons = match tokenize(expression) {
        Ok(jetons) => jetons,
        Err(ErreurJetons::MotInconnu(mot)) => {
            debug!(mot = mot.as_str(), "échec lexical");
            return DIAG_ERREUR_LEXICALE.to_string();
        }
    };

    let rpn = convertir(&jetons);

    match evaluer(&rpn) {
        Ok(valeur) => {
            trace!(expression, valeur, "évaluation réussie");
            valeur.to_string()
        }
        Err(e) => {
            debug!(expression, erreur = %e, "échec d'évaluation");
            e.to_string()
        }
    }
}
