//! Ordering that compares embedded digit runs numerically.
//!
//! `bible/Joh/3/9` sorts before `bible/Joh/3/10`, and `1Joh` before `2Joh`.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Consume a run of ASCII digits.
fn take_number(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
}

/// Compare two digit runs by value without parsing (no overflow).
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Natural ordering; ties fall back to plain string order so it stays total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let ord = cmp_digits(&take_number(&mut left), &take_number(&mut right));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                left.next();
                right.next();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn digits_compare_by_value() {
        assert_eq!(natural_cmp("bible/Joh/3/9", "bible/Joh/3/10"), Ordering::Less);
        assert_eq!(natural_cmp("bible/Joh/10/1", "bible/Joh/9/30"), Ordering::Greater);
        assert_eq!(natural_cmp("a2", "a2"), Ordering::Equal);
    }

    #[test]
    fn prefixes_sort_first() {
        assert_eq!(natural_cmp("bible/Kol", "bible/Kol/1/1"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_are_a_tiebreak_only() {
        assert_eq!(natural_cmp("v007", "v7"), "v007".cmp("v7"));
        assert_eq!(natural_cmp("v007", "v8"), Ordering::Less);
    }

    #[test]
    fn sorting_is_deterministic() {
        let mut tags = vec!["x/10", "x/2", "x/1", "y", "x/02"];
        tags.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(tags, vec!["x/1", "x/02", "x/2", "x/10", "y"]);
    }
}
