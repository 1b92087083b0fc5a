//! Levenshtein edit distance.

/// Minimum number of single-character insertions, deletions and
/// substitutions (unit cost each) to turn `a` into `b`.
///
/// No case folding is applied here; callers normalize case before calling.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Two rolling rows instead of the full cost table.
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        curr[0] = i + 1;

        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_distances() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abate", ""), 5);
        assert_eq!(levenshtein_distance("", "abate"), 5);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
        assert_eq!(levenshtein_distance("cat", "bat"), 1);
    }

    #[test]
    fn identity() {
        for w in ["", "a", "abandon", "ABANDON", "sitting"] {
            assert_eq!(levenshtein_distance(w, w), 0);
        }
    }

    #[test]
    fn symmetry() {
        let pairs = [("cat", "kat"), ("abandon", "abash"), ("", "dog"), ("flaw", "lawn")];
        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test]
    fn triangle_inequality() {
        let words = ["cat", "kat", "bat", "abandon", "abash", "", "dog"];
        for a in words {
            for b in words {
                for c in words {
                    let ab = levenshtein_distance(a, b);
                    let ac = levenshtein_distance(a, c);
                    let cb = levenshtein_distance(c, b);
                    assert!(ab <= ac + cb, "d({a},{b}) > d({a},{c}) + d({c},{b})");
                }
            }
        }
    }
}
