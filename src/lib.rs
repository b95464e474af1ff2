//! Moteur d'expressions arithmétiques flottantes.
//!
//! Pipeline strictement linéaire, sans état entre appels :
//!
//! ```text
//! chaîne -> jetons -> RPN (shunting-yard) -> machine à pile -> chaîne
//! ```
//!
//! L'unique point d'entrée est [`calc`] : il retourne TOUJOURS une
//! chaîne, soit la forme décimale du résultat, soit un des cinq
//! diagnostics figés (voir `noyau::erreurs`). Les tables lexicales
//! sont construites une fois et lues sans verrou : des appels `calc`
//! concurrents depuis plusieurs threads sont sûrs.
//!
//! ```
//! use moteur_calc::calc;
//!
//! assert_eq!(calc("2+3*4"), "14");
//! assert_eq!(calc("-5+3"), "-2");
//! assert_eq!(calc("2+"), "Syntax error");
//! ```

pub mod noyau;
pub mod saisie;

pub use noyau::calc;
