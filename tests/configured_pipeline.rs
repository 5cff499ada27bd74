use std::io::Write;
use std::sync::Arc;
use std::thread;

use namecheck::{ConfigLoadError, InMemoryTargetStore, TargetStore, Verifier, VerifierConfig};
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(yaml.as_bytes()).expect("write yaml");
    file
}

#[test]
fn yaml_file_drives_the_pipeline() {
    let file = write_config(
        r#"
version: "1.0"
name: "regional"
normalize:
  prefix_map:
    al: al
    el: al
tokenize:
  compound_prefixes: [abdul, al]
matcher:
  nickname_groups:
    margaret: [peggy, maggie]
"#,
    );

    let cfg = VerifierConfig::from_file(file.path()).unwrap();
    let verifier = Verifier::new(Arc::new(InMemoryTargetStore::new()), &cfg).unwrap();

    // `el` is folded onto `al` before compounding
    let report = verifier.explain("Khalid El Amin", "Khalid Al-Amin");
    assert_eq!(report.target_tokens, vec!["khalid", "alamin"]);
    assert_eq!(report.candidate_tokens, vec!["khalid", "alamin"]);
    assert!(report.result.is_match);

    // only the configured groups are known
    let peggy = verifier.explain("Margaret", "Peggy");
    assert_eq!(peggy.metrics.nickname_match, 1.0);
    let bill = verifier.explain("William", "Bill");
    assert_eq!(bill.metrics.nickname_match, 0.0);
}

#[test]
fn invalid_yaml_file_is_reported() {
    let file = write_config("version: \"1.0\"\nscoring:\n  edit_weight: -1.0\n");
    let err = VerifierConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Validation(msg) if msg.contains("edit_weight")));
}

#[test]
fn verifier_is_shareable_across_threads() {
    let store = Arc::new(InMemoryTargetStore::with_target("Ahmed Al-Rashid"));
    let verifier = Arc::new(Verifier::new(store.clone(), &VerifierConfig::default()).unwrap());

    let baseline = verifier.verify("Ahmed Al Rashid").unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let verifier = Arc::clone(&verifier);
            thread::spawn(move || {
                (0..50)
                    .map(|_| verifier.verify("Ahmed Al Rashid").unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(result, baseline);
        }
    }
    assert_eq!(store.get_target().as_deref(), Some("Ahmed Al-Rashid"));
}
