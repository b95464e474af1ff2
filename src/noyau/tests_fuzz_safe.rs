//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler `calc` sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariant clé : `calc` retourne TOUJOURS une chaîne, jamais de
//!   panique, et toute sortie est soit un nombre, soit un des cinq
//!   diagnostics figés.

use std::time::{Duration, Instant};

use super::calc;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(depart: Instant, max: Duration) {
    if depart.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

const DIAGNOSTICS: &[&str] = &[
    "Syntax error",
    "Runtime error",
    "Parsing error: Unexpected parenthesis in RPN",
    "Parsing error: Invalid token",
    "Evaluation error",
];

fn sortie_admissible(sortie: &str) -> bool {
    DIAGNOSTICS.contains(&sortie) || sortie.parse::<f64>().is_ok()
}

// Soupe de caractères tirée du jeu accepté par le filtre de saisie,
// plus quelques intrus pour exercer le chemin lexical.
fn gen_soupe(rng: &mut Rng, longueur: usize) -> String {
    // Chiffres doublés : sans ce biais, presque aucune soupe ne
    // parvient jusqu'à un résultat numérique.
    const ALPHABET: &[u8] = b"00112233445566778899+-*/() .sincoatedgrqxpfoo";
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_jamais_de_panique_et_sorties_admissibles() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut nombres = 0usize;
    let mut erreurs = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let longueur = 1 + rng.pick(24) as usize;
        let expr = gen_soupe(&mut rng, longueur);

        let sortie = calc(&expr);
        assert!(
            sortie_admissible(&sortie),
            "sortie hors contrat pour {expr:?}: {sortie:?}"
        );

        if sortie.parse::<f64>().is_ok() {
            nombres += 1;
        } else {
            erreurs += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne balaye rien.
    assert!(erreurs > 10, "trop peu d'erreurs vues: {erreurs}");
    assert!(nombres > 5, "trop peu de nombres vus: {nombres}");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // Même seed => mêmes expressions => mêmes sorties.
    let mut rng_a = Rng::new(0xBADC0DE_u64);
    let mut rng_b = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let a = gen_soupe(&mut rng_a, 16);
        let b = gen_soupe(&mut rng_b, 16);
        assert_eq!(a, b);
        assert_eq!(calc(&a), calc(&b));
    }
}

#[test]
fn fuzz_safe_parentheses_desequilibrees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xFEED_u64);

    // Parenthésage arbitraire autour d'un noyau valide : jamais de
    // panique, sorties toujours dans le contrat.
    for _ in 0..200 {
        budget(t0, max);

        let ouvrantes = "(".repeat(rng.pick(6) as usize);
        let fermantes = ")".repeat(rng.pick(6) as usize);
        let expr = format!("{ouvrantes}2+3{fermantes}");

        let sortie = calc(&expr);
        assert!(
            sortie_admissible(&sortie),
            "sortie hors contrat pour {expr:?}: {sortie:?}"
        );
    }
}
