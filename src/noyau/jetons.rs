// src/noyau/jetons.rs

use tracing::trace;

use super::erreurs::ErreurJetons;
use super::tables::{CONSTANTES, MOTS_CLES, OPERATEURS_SIMPLES};

/// Tous les opérateurs du moteur, parenthèses incluses.
///
/// Deux axes de classement :
/// - arité : binaire (`+ - * /`), unaire (tout le reste sauf parenthèses),
///   non-opérateur (les deux parenthèses) ;
/// - priorité : entier, PLUS PETIT = lie PLUS FORT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
    ParGauche,
    ParDroite,
    MoinsUnaire,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    VersDegres,
    VersRadians,
    Sqrt,
    Exp,
}

impl Op {
    /// Priorité : unaires et fonctions = 1, `* /` = 2, `+ -` = 3.
    pub fn priorite(self) -> u8 {
        match self {
            Op::MoinsUnaire
            | Op::Sin
            | Op::Cos
            | Op::Tan
            | Op::Asin
            | Op::Acos
            | Op::Atan
            | Op::VersDegres
            | Op::VersRadians
            | Op::Sqrt
            | Op::Exp => 1,
            Op::Fois | Op::Divise => 2,
            Op::Plus | Op::Moins => 3,
            // Les parenthèses ne participent jamais aux comparaisons :
            // rpn.rs les écarte avant d'appeler priorite().
            Op::ParGauche | Op::ParDroite => u8::MAX,
        }
    }

    /// Vrai pour les quatre opérateurs à deux opérandes.
    pub fn est_binaire(self) -> bool {
        matches!(self, Op::Plus | Op::Moins | Op::Fois | Op::Divise)
    }

    /// Vrai pour tout sauf les parenthèses.
    pub fn est_operateur(self) -> bool {
        !matches!(self, Op::ParGauche | Op::ParDroite)
    }
}

/// Élément d'expression : l'unique type qui traverse les trois phases
/// (jetons → RPN → évaluation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Op(Op),
}

/// Tokenize une chaîne en jetons.
///
/// Supporte :
/// - littéraux flottants décimaux (ex: 12, 3.5)
/// - opérateurs + - * / et parenthèses ( )
/// - moins unaire, désambiguïsé ici même (voir ci-dessous)
/// - fonctions nommées : sin cos tan asin acos atan degs rads sqrt exp
/// - constantes nommées : pi e sixtyfive
/// - espaces intérieurs arbitraires (ignorés)
///
/// Un `-` devient MoinsUnaire quand il ouvre l'entrée ou suit un
/// opérateur/fonction autre que `)`. Le drapeau `moins_unaire` porte
/// cette règle : vrai après tout opérateur/fonction/`(`, faux après
/// `)` ou après un nombre/constante ; les espaces ne le touchent pas.
///
/// Échec : `MotInconnu` si un mot n'est ni mot-clé, ni constante, ni
/// littéral numérique. L'appel entier échoue, aucun résultat partiel.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurJetons> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    // Vrai en début d'entrée : "-5" commence par un moins unaire.
    let mut moins_unaire = true;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs à un caractère
        if let Some(&op) = OPERATEURS_SIMPLES.get(&c) {
            let emis = if c == '-' && moins_unaire {
                Op::MoinsUnaire
            } else {
                op
            };
            out.push(Jeton::Op(emis));
            moins_unaire = c != ')';
            i += 1;
            continue;
        }

        // Mot nu : plage maximale sans espace ni opérateur simple
        let debut = i;
        while i < chars.len()
            && !chars[i].is_whitespace()
            && !OPERATEURS_SIMPLES.contains_key(&chars[i])
        {
            i += 1;
        }
        let mot: String = chars[debut..i].iter().collect();

        // Résolution : mot-clé → constante → littéral numérique
        if let Some(&op) = MOTS_CLES.get(mot.as_str()) {
            out.push(Jeton::Op(op));
            moins_unaire = true;
        } else if let Some(&valeur) = CONSTANTES.get(mot.as_str()) {
            out.push(Jeton::Nombre(valeur));
            moins_unaire = false;
        } else if let Ok(valeur) = mot.parse::<f64>() {
            out.push(Jeton::Nombre(valeur));
            moins_unaire = false;
        } else {
            return Err(ErreurJetons::MotInconnu(mot));
        }
    }

    trace!(entree = s, jetons = out.len(), "tokenisation terminée");
    Ok(out)
}
