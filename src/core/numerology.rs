use crate::domain::model::{
    LetterMapping, NameReport, NumerologyResult, NumerologySystem, SystemScore, MASTER_NUMBERS,
};

/// Sums the mapped value of every ASCII letter in `name`. Everything else is ignored.
pub fn compute_score(name: &str, mapping: &LetterMapping) -> u64 {
    name.chars()
        .filter_map(|c| mapping.value_of(c))
        .map(u64::from)
        .sum()
}

fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit sum down to a single digit, stopping early on 11, 22 or 33.
pub fn reduce_to_single_digit(n: u64) -> u64 {
    let mut n = n;
    while n >= 10 && !MASTER_NUMBERS.contains(&n) {
        n = digit_sum(n);
    }
    n
}

pub fn score_with(name: &str, system: NumerologySystem) -> SystemScore {
    let total = compute_score(name, system.mapping());
    SystemScore {
        total,
        reduced: reduce_to_single_digit(total),
    }
}

/// Both systems, raw totals included.
pub fn name_report(name: &str) -> NameReport {
    let report = NameReport {
        name: name.to_string(),
        pythagorean: score_with(name, NumerologySystem::Pythagorean),
        chaldean: score_with(name, NumerologySystem::Chaldean),
    };
    tracing::debug!(
        "Numerology for {:?}: pythagorean {} -> {}, chaldean {} -> {}",
        name,
        report.pythagorean.total,
        report.pythagorean.reduced,
        report.chaldean.total,
        report.chaldean.reduced
    );
    report
}

pub fn calculate_name_numerology(name: &str) -> NumerologyResult {
    name_report(name).result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CHALDEAN, PYTHAGOREAN};

    #[test]
    fn test_compute_score_skips_non_letters() {
        assert_eq!(compute_score("", &PYTHAGOREAN), 0);
        assert_eq!(compute_score("123 !?", &PYTHAGOREAN), 0);
        assert_eq!(compute_score("Ёжик", &CHALDEAN), 0);
        assert_eq!(compute_score("a-b c", &PYTHAGOREAN), 1 + 2 + 3);
        assert_eq!(compute_score("José", &PYTHAGOREAN), 1 + 6 + 1);
    }

    #[test]
    fn test_compute_score_full_alphabet() {
        let alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        assert_eq!(compute_score(alphabet, &PYTHAGOREAN), 45 + 45 + 36);
        assert_eq!(
            compute_score(alphabet, &CHALDEAN),
            CHALDEAN.values.iter().map(|&v| u64::from(v)).sum::<u64>()
        );
    }

    #[test]
    fn test_reduce_single_digits_unchanged() {
        for n in 0..10 {
            assert_eq!(reduce_to_single_digit(n), n);
        }
    }

    #[test]
    fn test_reduce_master_numbers() {
        assert_eq!(reduce_to_single_digit(11), 11);
        assert_eq!(reduce_to_single_digit(22), 22);
        assert_eq!(reduce_to_single_digit(33), 33);
    }

    #[test]
    fn test_reduce_stops_on_master_number_mid_reduction() {
        // 3 + 8 = 11
        assert_eq!(reduce_to_single_digit(38), 11);
        // 9 + 9 + 4 = 22
        assert_eq!(reduce_to_single_digit(994), 22);
        // 9 + 9 + 9 + 6 = 33
        assert_eq!(reduce_to_single_digit(9996), 33);
        // 2 + 9 = 11 after the first pass of 9 + 9 + 9 + 2 = 29
        assert_eq!(reduce_to_single_digit(9992), 11);
    }

    #[test]
    fn test_reduce_regular_values() {
        assert_eq!(reduce_to_single_digit(10), 1);
        assert_eq!(reduce_to_single_digit(44), 8);
        assert_eq!(reduce_to_single_digit(99), 9);
        assert_eq!(reduce_to_single_digit(12345), 6);
        assert_eq!(reduce_to_single_digit(u64::MAX), 6);
    }

    #[test]
    fn test_reduce_is_idempotent() {
        for n in 0..5000 {
            let once = reduce_to_single_digit(n);
            assert_eq!(reduce_to_single_digit(once), once, "n = {}", n);
            assert!(once < 10 || MASTER_NUMBERS.contains(&once));
        }
    }

    #[test]
    fn test_single_letter_name() {
        let report = name_report("A");
        assert_eq!(report.pythagorean, SystemScore { total: 1, reduced: 1 });
        assert_eq!(report.chaldean, SystemScore { total: 1, reduced: 1 });
    }

    #[test]
    fn test_bob_keeps_chaldean_master_number() {
        let report = name_report("Bob");
        assert_eq!(report.pythagorean, SystemScore { total: 10, reduced: 1 });
        assert_eq!(report.chaldean, SystemScore { total: 11, reduced: 11 });
        assert!(report.chaldean.is_master_number());
        assert_eq!(
            calculate_name_numerology("Bob"),
            NumerologyResult {
                pythagorean: 1,
                chaldean: 11
            }
        );
    }

    #[test]
    fn test_letterless_name_scores_zero() {
        for name in ["", "   ", "42", "!!!", "李小龙"] {
            assert_eq!(
                calculate_name_numerology(name),
                NumerologyResult {
                    pythagorean: 0,
                    chaldean: 0
                }
            );
        }
    }

    #[test]
    fn test_case_does_not_change_result() {
        assert_eq!(
            calculate_name_numerology("Ada Lovelace"),
            calculate_name_numerology("ADA LOVELACE")
        );
    }
}
