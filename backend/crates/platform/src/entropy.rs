//! Password Entropy Estimation
//!
//! Estimates how unpredictable a password is, in bits. The estimate is used as
//! a strength gate at registration time.
//!
//! [`CharsetEntropyEstimator`] computes `effective_length * log2(charset_base)`:
//! - `charset_base` is the size of the union of character classes present in
//!   the password (plus one per character outside every known class)
//! - `effective_length` discounts runs of one repeated character and
//!   ascending keyboard/alphabet/digit sequences after their second character

use std::collections::HashSet;

// ============================================================================
// Character classes
// ============================================================================

const REPLACE_CHARS: &str = "!@$&*";
const SEPARATOR_CHARS: &str = "_-., ";
const OTHER_SPECIAL_CHARS: &str = "\"#%'()+/:;<=>?[\\]^{|}~";
const LOWER_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGIT_CHARS: &str = "0123456789";

/// Sequences whose third and later consecutive characters add no entropy
const SEQUENCES: &[&str] = &[
    "0123456789",
    "qwertyuiop",
    "asdfghjkl",
    "zxcvbnm",
    "abcdefghijklmnopqrstuvwxyz",
];

// ============================================================================
// Estimator interface
// ============================================================================

/// エントロピー推定結果
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyEstimate {
    /// 推定エントロピー（ビット）
    pub bits: f64,
    /// 閾値未満の場合にユーザーへ提示する改善ヒント
    pub hint: String,
}

/// パスワードのエントロピー推定器
///
/// 登録ユースケースから共有されるため `Send + Sync` を要求します。
pub trait EntropyEstimator: Send + Sync {
    /// パスワードのエントロピーを推定
    fn estimate(&self, password: &str) -> EntropyEstimate;
}

/// Character-class based estimator
///
/// ## Examples
/// ```rust
/// use platform::entropy::{CharsetEntropyEstimator, EntropyEstimator};
///
/// let estimate = CharsetEntropyEstimator.estimate("password");
/// assert!(estimate.bits < 60.0);
/// assert!(estimate.hint.starts_with("insecure password, try"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CharsetEntropyEstimator;

impl EntropyEstimator for CharsetEntropyEstimator {
    fn estimate(&self, password: &str) -> EntropyEstimate {
        let classes = CharClasses::scan(password);
        let base = classes.base();
        let length = effective_length(password);

        let bits = if base == 0 || length == 0 {
            0.0
        } else {
            length as f64 * (base as f64).log2()
        };

        EntropyEstimate {
            bits,
            hint: classes.hint(),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

#[derive(Debug, Default)]
struct CharClasses {
    replace: bool,
    separator: bool,
    other_special: bool,
    lower: bool,
    upper: bool,
    digit: bool,
    unknown: usize,
}

impl CharClasses {
    fn scan(password: &str) -> Self {
        let mut classes = Self::default();
        let distinct: HashSet<char> = password.chars().collect();

        for c in distinct {
            if REPLACE_CHARS.contains(c) {
                classes.replace = true;
            } else if SEPARATOR_CHARS.contains(c) {
                classes.separator = true;
            } else if OTHER_SPECIAL_CHARS.contains(c) {
                classes.other_special = true;
            } else if LOWER_CHARS.contains(c) {
                classes.lower = true;
            } else if UPPER_CHARS.contains(c) {
                classes.upper = true;
            } else if DIGIT_CHARS.contains(c) {
                classes.digit = true;
            } else {
                classes.unknown += 1;
            }
        }

        classes
    }

    fn base(&self) -> usize {
        let mut base = self.unknown;
        if self.replace {
            base += REPLACE_CHARS.len();
        }
        if self.separator {
            base += SEPARATOR_CHARS.len();
        }
        if self.other_special {
            base += OTHER_SPECIAL_CHARS.len();
        }
        if self.lower {
            base += LOWER_CHARS.len();
        }
        if self.upper {
            base += UPPER_CHARS.len();
        }
        if self.digit {
            base += DIGIT_CHARS.len();
        }
        base
    }

    fn hint(&self) -> String {
        let mut missing = Vec::new();
        if !self.replace && !self.separator && !self.other_special {
            missing.push("including more special characters");
        }
        if !self.lower {
            missing.push("using lowercase letters");
        }
        if !self.upper {
            missing.push("using uppercase letters");
        }
        if !self.digit {
            missing.push("using numbers");
        }

        if missing.is_empty() {
            "insecure password, try using a longer password".to_string()
        } else {
            format!(
                "insecure password, try {} or using a longer password",
                missing.join(", ")
            )
        }
    }
}

/// 連続・反復を割り引いた長さ（文字数）
fn effective_length(password: &str) -> usize {
    let chars: Vec<char> = password.to_lowercase().chars().collect();

    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            if i < 2 {
                return true;
            }
            let (prev2, prev) = (chars[i - 2], chars[i - 1]);
            let repeated = prev2 == c && prev == c;
            !(repeated || continues_sequence(prev2, prev, c))
        })
        .count()
}

fn continues_sequence(a: char, b: char, c: char) -> bool {
    SEQUENCES.iter().any(|seq| {
        match (seq.find(a), seq.find(b), seq.find(c)) {
            (Some(i), Some(j), Some(k)) => j == i + 1 && k == j + 1,
            _ => false,
        }
    })
}
