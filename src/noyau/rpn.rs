// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfix).
//
// Règles :
// - '(' empilé sans aucune comparaison de priorité
// - ')' dépile vers la sortie jusqu'au '(' correspondant (jeté sans
//   être émis) ; une ')' orpheline sur pile vide est ignorée, jamais
//   de dépilement sur pile vide
// - tout autre opérateur T : dépiler tant que le sommet est un
//   opérateur (pas une parenthèse) et que le test de priorité tient,
//   puis empiler T
// - nombre : sortie directe
//
// Test de priorité (plus petit = lie plus fort) :
// - T binaire : dépiler si priorite(T) >= priorite(sommet)
//   (le >= rend les binaires de même priorité associatifs à gauche)
// - T unaire/fonction : dépiler seulement si priorite(T) > priorite(sommet)
//   (avec >= , "--6" se convertirait en [6, MoinsUnaire] : une seule
//   négation au lieu de deux)
//
// La conversion n'échoue JAMAIS : un parenthésage mal formé traverse
// telle quelle et sera signalé (ou toléré) par l'évaluateur.

use tracing::trace;

use super::jetons::{Jeton, Op};

/// Convertit une suite de jetons infixe en RPN (notation polonaise
/// inversée). Total : tout Vec<Jeton> a une image, même mal parenthésé.
///
/// Exemple :
///   jetons: [2, Plus, 3, Fois, 4]
///   rpn:    [2, 3, 4, Fois, Plus]
pub fn convertir(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut pile: Vec<Op> = Vec::new();

    for &jeton in jetons {
        let op = match jeton {
            Jeton::Nombre(_) => {
                out.push(jeton);
                continue;
            }
            Jeton::Op(op) => op,
        };

        match op {
            Op::ParGauche => pile.push(op),

            Op::ParDroite => {
                // Dépile jusqu'au '(' correspondant ou jusqu'à la pile
                // vide ; le while let garantit zéro dépilement à vide.
                while let Some(sommet) = pile.pop() {
                    if sommet == Op::ParGauche {
                        break;
                    }
                    out.push(Jeton::Op(sommet));
                }
            }

            autre => {
                while let Some(&sommet) = pile.last() {
                    if !sommet.est_operateur() {
                        break;
                    }
                    let depiler = if autre.est_binaire() {
                        autre.priorite() >= sommet.priorite()
                    } else {
                        autre.priorite() > sommet.priorite()
                    };
                    if !depiler {
                        break;
                    }
                    out.push(Jeton::Op(pile.pop().unwrap()));
                }
                pile.push(autre);
            }
        }
    }

    // Vide le reste de la pile, sommet d'abord. Un '(' non fermé passe
    // en sortie et sera rejeté par l'évaluateur.
    while let Some(op) = pile.pop() {
        out.push(Jeton::Op(op));
    }

    trace!(entree = jetons.len(), sortie = out.len(), "conversion RPN");
    out
}
