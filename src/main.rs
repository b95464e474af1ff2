// src/main.rs
//
// Binaire de démonstration : la paire source d'entrée / afficheur la
// plus simple possible autour du moteur.
// - `moteur_calc "2+3*4"` : évalue l'argument et sort
// - sans argument : REPL ligne à ligne sur stdin
//
// La sortie du moteur est affichée TELLE QUELLE (résultat ou
// diagnostic) ; le filtre de saisie tourne ici, côté source d'entrée,
// jamais dans le moteur.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use moteur_calc::saisie::{peut_calculer, saisie_valide};
use moteur_calc::calc;

/// Moteur d'expressions arithmétiques flottantes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression à évaluer ; sans elle, lance un REPL sur stdin.
    expression: Option<String>,

    /// Désactive le filtre de caractères sûrs côté saisie.
    #[arg(long)]
    sans_filtre: bool,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Some(expression) = args.expression {
        println!("{}", evalue_une_ligne(&expression, args.sans_filtre));
        return Ok(());
    }

    // REPL : une expression par ligne, réponse immédiate.
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut ligne = String::new();
        if stdin.lock().read_line(&mut ligne)? == 0 {
            break; // fin d'entrée
        }
        let ligne = ligne.trim_end_matches(['\n', '\r']);

        if !peut_calculer(ligne) {
            continue;
        }
        println!("{}", evalue_une_ligne(ligne, args.sans_filtre));
    }

    Ok(())
}

fn evalue_une_ligne(ligne: &str, sans_filtre: bool) -> String {
    if !sans_filtre && !saisie_valide(ligne) {
        return "saisie refusée: caractères hors jeu".to_string();
    }
    calc(ligne)
}
