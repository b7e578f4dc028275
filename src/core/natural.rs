//! Numeric-aware string comparison ("9" < "10" < "11") that ignores case and accents.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> impl Iterator<Item = Chunk<'_>> {
    let mut rest = s;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_digit = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != is_digit)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(end);
        rest = tail;
        Some(if is_digit {
            Chunk::Digits(head)
        } else {
            Chunk::Text(head)
        })
    })
}

// 以長度比較去除前導零後的數字，避免大數溢位
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

// 分解後去掉附加符號，"é" 與 "e" 視為相同
fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn compare_text(a: &str, b: &str) -> Ordering {
    fold(a).cmp(fold(b))
}

/// Leading zeros are ignored, so "001" and "1" compare equal and a stable
/// sort keeps their input order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);
    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => compare_digits(x, y),
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => compare_text(x, y),
            // 數字排在文字前面
            (Some(Chunk::Digits(_)), Some(Chunk::Text(_))) => Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Digits(_))) => Ordering::Greater,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(natural_cmp("9", "10"), Ordering::Less);
        assert_eq!(natural_cmp("10", "11"), Ordering::Less);
        assert_eq!(natural_cmp("100", "99"), Ordering::Greater);
        assert_eq!(natural_cmp("002", "10"), Ordering::Less);
    }

    #[test]
    fn test_leading_zeros_are_equal() {
        assert_eq!(natural_cmp("001", "1"), Ordering::Equal);
        assert_eq!(natural_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(natural_cmp("TG05", "tg5"), Ordering::Equal);
        assert_eq!(natural_cmp("a", "B"), Ordering::Less);
    }

    #[test]
    fn test_accents_are_ignored() {
        assert_eq!(natural_cmp("é", "e"), Ordering::Equal);
        assert_eq!(natural_cmp("Étoile 2", "etoile 10"), Ordering::Less);
        assert_eq!(natural_cmp("ça", "cb"), Ordering::Less);
    }

    #[test]
    fn test_mixed_ids() {
        assert_eq!(natural_cmp("SV2", "SV10"), Ordering::Less);
        assert_eq!(natural_cmp("1a", "1b"), Ordering::Less);
        assert_eq!(natural_cmp("5", "TG01"), Ordering::Less);
        assert_eq!(natural_cmp("", "1"), Ordering::Less);
    }

    #[test]
    fn test_huge_numbers_do_not_overflow() {
        let big = "123456789012345678901234567890";
        let bigger = "123456789012345678901234567891";
        assert_eq!(natural_cmp(big, bigger), Ordering::Less);
    }
}
