//! Hebrew day-of-month numerals.
//!
//! Letter values with a gershayim (U+05F4) before the final letter, and the
//! traditional substitutions ט״ו for 15 and ט״ז for 16 (the literal forms
//! would spell a divine name).

const ONES: [&str; 10] = ["", "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט"];
const TENS: [&str; 4] = ["", "י", "כ", "ל"];

/// Format a day-of-month (1–30) as a Hebrew numeral.
///
/// Single letters are returned bare (`"א"`), multi-letter numerals carry a
/// gershayim before the last letter (`"י״ד"`). Out-of-range values fall
/// back to decimal digits.
pub fn hebrew_numeral(n: u32) -> String {
    if n == 15 {
        return "ט״ו".to_string();
    }
    if n == 16 {
        return "ט״ז".to_string();
    }

    let tens = (n / 10) as usize;
    let ones = (n % 10) as usize;
    if n == 0 || tens >= TENS.len() {
        return n.to_string();
    }

    let letters: Vec<char> = TENS[tens].chars().chain(ONES[ones].chars()).collect();
    match letters.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            let mut out: String = rest.iter().collect();
            out.push('״');
            out.push(*last);
            out
        }
        Some((last, _)) => last.to_string(),
        None => n.to_string(),
    }
}
