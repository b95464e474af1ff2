//! Noyau du moteur d'expressions
//!
//! Organisation interne :
//! - tables.rs  : tables lexicales immuables (opérateurs, mots-clés, constantes)
//! - jetons.rs  : Op + Jeton + tokenisation (moins unaire résolu ici)
//! - rpn.rs     : shunting-yard, infixe -> postfix, total
//! - eval.rs    : machine à pile + pipeline `calc`
//! - erreurs.rs : erreurs typées (Display = diagnostics figés)
//!
//! Le pipeline complet : chaîne -> jetons -> RPN -> chaîne résultat.

pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod rpn;
pub mod tables;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::calc;
