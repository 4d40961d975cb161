use numero_grid::{
    calculate_name_numerology, compute_score, name_report, reduce_to_single_digit,
    NumerologyResult, NumerologySystem, CHALDEAN, PYTHAGOREAN,
};

#[test]
fn test_names_without_ascii_letters_score_zero() {
    for name in ["", " ", "0123456789", "-_.,;:!?", "Ωμέγα", "Мария", "さくら", "🙂🙂"] {
        assert_eq!(
            calculate_name_numerology(name),
            NumerologyResult {
                pythagorean: 0,
                chaldean: 0
            },
            "name {:?}",
            name
        );
    }
}

#[test]
fn test_lowercase_letters_map_like_uppercase() {
    for system in NumerologySystem::ALL {
        let mapping = system.mapping();
        for upper in 'A'..='Z' {
            let lower = upper.to_ascii_lowercase();
            assert_eq!(
                compute_score(&upper.to_string(), mapping),
                compute_score(&lower.to_string(), mapping),
                "{} {}",
                system,
                upper
            );
        }
    }
}

#[test]
fn test_reduction_examples() {
    assert_eq!(reduce_to_single_digit(11), 11);
    assert_eq!(reduce_to_single_digit(22), 22);
    assert_eq!(reduce_to_single_digit(33), 33);
    assert_eq!(reduce_to_single_digit(38), 11);
    assert_eq!(reduce_to_single_digit(10), 1);
}

#[test]
fn test_reduction_idempotent_over_name_totals() {
    let names = ["Ada Lovelace", "Grace Hopper", "Alan Mathison Turing", "Bob", "A"];
    for name in names {
        for mapping in [&PYTHAGOREAN, &CHALDEAN] {
            let once = reduce_to_single_digit(compute_score(name, mapping));
            assert_eq!(reduce_to_single_digit(once), once);
        }
    }
}

#[test]
fn test_end_to_end_single_letter() {
    let report = name_report("A");
    assert_eq!(report.pythagorean.total, 1);
    assert_eq!(report.pythagorean.reduced, 1);
    assert_eq!(report.chaldean.total, 1);
    assert_eq!(report.chaldean.reduced, 1);
}

#[test]
fn test_end_to_end_bob() {
    let report = name_report("Bob");
    assert_eq!(report.pythagorean.total, 10);
    assert_eq!(report.pythagorean.reduced, 1);
    assert_eq!(report.chaldean.total, 11);
    assert_eq!(report.chaldean.reduced, 11);
    assert_eq!(report.score(NumerologySystem::Chaldean).reduced, 11);
}

#[test]
fn test_punctuation_and_spaces_do_not_change_score() {
    assert_eq!(
        calculate_name_numerology("Mary-Jane O'Neil"),
        calculate_name_numerology("MaryJaneONeil")
    );
}

#[test]
fn test_name_report_serializes_totals_and_reduced_values() {
    let json = serde_json::to_value(name_report("Bob")).unwrap();
    assert_eq!(json["name"], "Bob");
    assert_eq!(json["pythagorean"]["total"], 10);
    assert_eq!(json["pythagorean"]["reduced"], 1);
    assert_eq!(json["chaldean"]["reduced"], 11);
}
