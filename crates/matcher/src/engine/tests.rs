use super::*;

use canonical::{Normalizer, Tokenizer};

fn tokens(raw: &str) -> Vec<String> {
    let normalizer = Normalizer::default();
    let tokenizer = Tokenizer::default();
    tokenizer.tokenize(&normalizer.normalize(raw))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assert_in_unit_range(m: &MatchMetrics) {
    for value in [
        m.token_similarity,
        m.edit_distance,
        m.phonetic_match,
        m.nickname_match,
    ] {
        assert!((0.0..=1.0).contains(&value), "metric out of range: {m:?}");
    }
}

#[test]
fn identical_sequences_score_maximum() {
    let matcher = Matcher::default();
    let t = tokens("Ahmed Al-Rashid");
    let m = matcher.compute_similarity(&t, &t);

    assert!(approx(m.token_similarity, 1.0));
    assert!(approx(m.nickname_match, 1.0));
    assert!(approx(m.phonetic_match, 1.0));
    assert!(m.order_preserved);
    // cross-product average includes the mismatched pairs
    assert!(m.edit_distance < 1.0);
}

#[test]
fn single_token_identity_has_full_edit_similarity() {
    let matcher = Matcher::default();
    let m = matcher.compute_similarity(&["abdulrahman"], &["abdulrahman"]);
    assert!(approx(m.edit_distance, 1.0));
}

#[test]
fn empty_side_degenerates_to_zero() {
    let matcher = Matcher::default();
    let empty: Vec<String> = Vec::new();
    let full = tokens("William Smith");

    for (t, c) in [(&empty, &full), (&full, &empty), (&empty, &empty)] {
        let m = matcher.compute_similarity(t, c);
        assert_eq!(m, MatchMetrics::empty());
        assert!(!m.order_preserved);
    }
}

#[test]
fn nickname_pair_counts_in_both_directions() {
    let matcher = Matcher::default();
    let william = tokens("William Smith");
    let bill = tokens("Bill Smith");

    let forward = matcher.compute_similarity(&william, &bill);
    let backward = matcher.compute_similarity(&bill, &william);

    assert!(approx(forward.nickname_match, 1.0));
    assert!(approx(backward.nickname_match, 1.0));
    assert!(approx(forward.token_similarity, 0.5));
    assert!(!forward.order_preserved);
}

#[test]
fn reversed_tokens_keep_set_metrics_but_lose_order() {
    let matcher = Matcher::default();
    let m = matcher.compute_similarity(&["ahmed", "rashid"], &["rashid", "ahmed"]);

    assert!(approx(m.token_similarity, 1.0));
    assert!(approx(m.nickname_match, 1.0));
    assert!(approx(m.phonetic_match, 1.0));
    assert!(!m.order_preserved);
}

#[test]
fn token_similarity_divides_by_longer_sequence() {
    let matcher = Matcher::default();
    let m = matcher.compute_similarity(&["john", "smith"], &["john", "paul", "smith"]);
    assert!(approx(m.token_similarity, 2.0 / 3.0));
    assert!(!m.order_preserved);
}

#[test]
fn candidate_token_can_satisfy_several_targets() {
    let matcher = Matcher::default();
    let m = matcher.compute_similarity(&["smith", "smith"], &["smith", "jones"]);
    assert!(approx(m.token_similarity, 1.0));
}

#[test]
fn phonetic_match_divides_by_target_length() {
    let matcher = Matcher::default();
    let m = matcher.compute_similarity(&["smyth"], &["john", "smith", "jones"]);
    assert!(approx(m.phonetic_match, 1.0));
    assert!(approx(m.token_similarity, 0.0));
}

#[test]
fn edit_similarity_averages_every_pair() {
    let matcher = Matcher::default();
    let m = matcher.compute_similarity(&["ab"], &["ab", "xy"]);
    // (1.0 + 0.0) / 2
    assert!(approx(m.edit_distance, 0.5));
}

#[test]
fn unrelated_names_score_low() {
    let matcher = Matcher::default();
    let m = matcher.compute_similarity(&tokens("Ahmed Al-Rashid"), &tokens("John Smith"));

    assert!(approx(m.token_similarity, 0.0));
    assert!(approx(m.nickname_match, 0.0));
    assert!(approx(m.phonetic_match, 0.0));
    assert!(m.edit_distance < 0.3);
    assert!(!m.order_preserved);
}

#[test]
fn metrics_stay_in_unit_range() {
    let matcher = Matcher::default();
    let names = [
        "Ahmed Al-Rashid",
        "John Smith",
        "Bill Smith",
        "William Smith",
        "Abdul Rahman",
        "Mary-Jane O'Neil Watson",
        "J",
        "1234 5678",
    ];
    for a in names {
        for b in names {
            let m = matcher.compute_similarity(&tokens(a), &tokens(b));
            assert_in_unit_range(&m);
        }
    }
}

#[test]
fn shared_table_is_reused() {
    let first = Matcher::default();
    let second = Matcher::with_nicknames(Arc::clone(first.nicknames()));
    assert!(Arc::ptr_eq(first.nicknames(), second.nicknames()));
}

#[test]
fn custom_nickname_groups() {
    let mut cfg = MatcherConfig::default();
    cfg.nickname_groups
        .insert("margaret".into(), vec!["peggy".into(), "maggie".into()]);
    let matcher = Matcher::new(&cfg).unwrap();
    let m = matcher.compute_similarity(&["peggy"], &["margaret"]);
    assert!(approx(m.nickname_match, 1.0));
}

#[test]
fn invalid_nickname_config_rejected() {
    let mut cfg = MatcherConfig::default();
    cfg.nickname_groups.insert("".into(), vec!["x".into()]);
    assert!(Matcher::new(&cfg).is_err());
}
