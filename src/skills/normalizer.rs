// src/skills/normalizer.rs
//! Token cleanup shared by the matcher and the aggregator.

/// Keep only ASCII letters, `-` and `/`. Case is left as the caller gave it.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '-' || *c == '/')
        .collect()
}

/// Lower-case a candidate skill and normalize it word by word, keeping a
/// single space between the words that survive.
pub fn normalize_phrase(skill: &str) -> String {
    skill
        .to_lowercase()
        .split_whitespace()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("docker."), "docker");
        assert_eq!(normalize("(kubernetes)"), "kubernetes");
        assert_eq!(normalize("ci/cd"), "ci/cd");
        assert_eq!(normalize("front-end"), "front-end");
        assert_eq!(normalize("c++"), "c");
        assert_eq!(normalize("123"), "");
    }

    #[test]
    fn test_normalize_keeps_case() {
        assert_eq!(normalize("Rust!"), "Rust");
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        assert_eq!(normalize("café"), "caf");
        assert_eq!(normalize("machine learning"), "machinelearning");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "",
            "Go,",
            "node.js",
            "ci/cd",
            "  spaced out  ",
            "Ünïcödé-mix/42",
            "--//--",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "input: {:?}", sample);
        }
    }

    #[test]
    fn test_normalize_phrase() {
        assert_eq!(normalize_phrase("Machine  Learning"), "machine learning");
        assert_eq!(normalize_phrase("Go"), "go");
        assert_eq!(normalize_phrase("C# / .NET"), "c / net");
        assert_eq!(normalize_phrase("   "), "");
    }
}
