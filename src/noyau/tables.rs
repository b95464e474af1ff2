// src/noyau/tables.rs
//
// Tables lexicales : trois maps immuables, construites une seule fois
// au premier accès, lues ensuite sans verrou (lazy_static).
//
// Invariant : aucune clé n'est partagée entre les trois tables.
// Ordre de résolution d'un mot nu (voir jetons.rs) :
//   mot-clé multi-caractères → constante → littéral numérique.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::jetons::Op;

/// π avec les décimales portées par le moteur d'origine.
pub const PI: f64 = 3.141592653589793238463;
/// Constante d'Euler.
pub const E: f64 = 2.718281828459045;
/// Constante de démonstration héritée du moteur d'origine.
pub const SIXTYFIVE: f64 = 65.0;

lazy_static! {
    /// Opérateurs à un caractère (le `-` est désambiguïsé par le tokenizer).
    pub static ref OPERATEURS_SIMPLES: HashMap<char, Op> = {
        let mut m = HashMap::new();
        m.insert('+', Op::Plus);
        m.insert('-', Op::Moins);
        m.insert('*', Op::Fois);
        m.insert('/', Op::Divise);
        m.insert('(', Op::ParGauche);
        m.insert(')', Op::ParDroite);
        m
    };

    /// Fonctions unaires nommées (mots-clés multi-caractères, minuscules).
    pub static ref MOTS_CLES: HashMap<&'static str, Op> = {
        let mut m = HashMap::new();
        m.insert("sin", Op::Sin);
        m.insert("cos", Op::Cos);
        m.insert("tan", Op::Tan);
        m.insert("asin", Op::Asin);
        m.insert("acos", Op::Acos);
        m.insert("atan", Op::Atan);
        m.insert("degs", Op::VersDegres);
        m.insert("rads", Op::VersRadians);
        m.insert("sqrt", Op::Sqrt);
        m.insert("exp", Op::Exp);
        m
    };

    /// Constantes nommées.
    pub static ref CONSTANTES: HashMap<&'static str, f64> = {
        let mut m = HashMap::new();
        m.insert("pi", PI);
        m.insert("e", E);
        m.insert("sixtyfive", SIXTYFIVE);
        m
    };
}
