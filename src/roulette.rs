//! Decision roulette: parse a comma-separated option string and pick one
//! entry uniformly at random.

use rand::RngExt;

/// Split a raw option string on commas, trimming whitespace and discarding
/// blank entries.
#[must_use]
pub fn parse_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Pick one option uniformly at random from a raw comma-separated string.
///
/// Returns `None` when no non-blank options remain after parsing, so the
/// caller can prompt for input.
#[must_use]
pub fn pick(raw: &str) -> Option<String> {
    let mut items = parse_options(raw);
    if items.is_empty() {
        return None;
    }

    let index = rand::rng().random_range(0..items.len());
    Some(items.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("짜장면, 짬뽕, 볶음밥", vec!["짜장면", "짬뽕", "볶음밥"])]
    #[case("a,b,c", vec!["a", "b", "c"])]
    #[case("  spaced  ,  out  ", vec!["spaced", "out"])]
    #[case("one", vec!["one"])]
    #[case("trailing,", vec!["trailing"])]
    #[case(",,middle,,", vec!["middle"])]
    fn test_parse_options(#[case] raw: &str, #[case] expected: Vec<&str>) {
        assert_eq!(parse_options(raw), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case(",  ,")]
    #[case(",,,")]
    fn test_pick_empty_input(#[case] raw: &str) {
        assert!(pick(raw).is_none());
    }

    #[test]
    fn test_pick_returns_trimmed_member() {
        for _ in 0..50 {
            let choice = pick("  짜장면 , 짬뽕 ,볶음밥  ").unwrap();
            assert_eq!(choice, choice.trim());
            assert!(["짜장면", "짬뽕", "볶음밥"].contains(&choice.as_str()));
        }
    }

    #[test]
    fn test_pick_single_option() {
        assert_eq!(pick("돈까스").as_deref(), Some("돈까스"));
    }

    // Statistical: with 300 draws over 3 options the chance of never seeing
    // one of them is (2/3)^300, vanishingly small.
    #[test]
    fn test_pick_covers_all_options_over_repeated_calls() {
        let mut seen = HashSet::new();
        for _ in 0..300 {
            seen.insert(pick("짜장면, 짬뽕, 볶음밥").unwrap());
            if seen.len() == 3 {
                break;
            }
        }
        assert_eq!(seen.len(), 3);
    }
}
