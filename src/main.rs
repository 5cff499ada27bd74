use std::env;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use namecheck::{InMemoryTargetStore, Verifier, VerifierConfig};

/// Reference pairs run when no arguments are given.
const SCENARIOS: &[(&str, &str, &str)] = &[
    ("exact", "Ahmed Al-Rashid", "Ahmed Al-Rashid"),
    ("punctuation", "Ahmed Al-Rashid", "Ahmed Al Rashid"),
    ("unrelated", "Ahmed Al-Rashid", "John Smith"),
    ("nickname", "William Smith", "Bill Smith"),
    ("reversed", "Ahmed Rashid", "Rashid Ahmed"),
    ("compound", "Abdul Rahman", "Abdulrahman"),
];

fn main() -> Result<()> {
    let config = match env::var("NAMECHECK_CONFIG") {
        Ok(path) => VerifierConfig::from_file(&path)
            .with_context(|| format!("loading verifier config from {path}"))?,
        Err(_) => VerifierConfig::default(),
    };
    let verifier = Verifier::new(Arc::new(InMemoryTargetStore::new()), &config)?;

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => run_scenarios(&verifier),
        [target, candidate] => {
            let report = verifier.explain(target, candidate);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        _ => bail!("usage: namecheck [<target> <candidate>]"),
    }
}

fn run_scenarios(verifier: &Verifier) -> Result<()> {
    println!("{:<12} {:<18} {:<18} {:<6} {:>6}  reason", "scenario", "target", "candidate", "match", "conf");
    for (label, target, candidate) in SCENARIOS {
        let result = verifier.verify_pair(target, candidate);
        println!(
            "{:<12} {:<18} {:<18} {:<6} {:>6.3}  {}",
            label, target, candidate, result.is_match, result.confidence, result.reason
        );
    }
    Ok(())
}
