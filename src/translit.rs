//! Script transliteration
//!
//! Three concerns: reverse transliteration of romanized Slavic payment text
//! back to Cyrillic (a preprocessing heuristic — correctness is judged on
//! downstream canonicalization, not phonetic fidelity), and the forward
//! Cyrillic→Latin and Arabic→Latin maps used for index-time variants.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::language::Lang;

/// Romanized payment-context indicators. Absent all of them, the input is
/// returned unchanged.
const ROMAN_SIGNALS: &[&str] = &[
    "oplata", "platezh", "perevod", "perekaz", "vid", "ot", "dlya", "na imya", "na imia",
];

/// Indicators that pick Ukrainian as the target script.
const UK_SIGNALS: &[&str] = &["vid", "perekaz", "platizh"];

/// Whole-word payment phrases replaced before per-token transliteration.
static SPECIALS: &[(&str, &str)] = &[
    ("oplata", "оплата"),
    ("platezh", "платеж"),
    ("perevod", "перевод"),
    ("perekaz", "переказ"),
    ("vid", "від"),
    ("ot", "от"),
    ("dlya", "для"),
    ("na imya", "на имя"),
    ("na imia", "на імʼя"),
];

/// Ordered digraph substitutions shared by both targets. Longest first so
/// `shch` wins over `sch` and `sh`.
static DIGRAPHS_COMMON: &[(&str, &str)] = &[
    ("shch", "щ"),
    ("sch", "щ"),
    ("dzh", "дж"),
    ("dz", "дз"),
    ("cz", "ч"),
    ("sz", "ш"),
    ("rz", "ж"),
    ("yo", "ё"),
    ("jo", "ё"),
    ("zh", "ж"),
    ("kh", "х"),
    ("ch", "ч"),
    ("sh", "ш"),
    ("yu", "ю"),
    ("ju", "ю"),
    ("ya", "я"),
    ("ja", "я"),
    ("ts", "ц"),
];

static DIGRAPHS_UK: &[(&str, &str)] = &[("ye", "є"), ("yi", "ї"), ("ii", "ії")];
static DIGRAPHS_RU: &[(&str, &str)] = &[("ye", "е")];

/// Single-letter fallback map.
fn single_letter(ch: char) -> Option<&'static str> {
    Some(match ch {
        'a' => "а",
        'b' => "б",
        'v' => "в",
        'g' => "г",
        'd' => "д",
        'e' => "е",
        'z' => "з",
        'i' => "и",
        'y' => "ы",
        'j' => "й",
        'k' => "к",
        'l' => "л",
        'm' => "м",
        'n' => "н",
        'o' => "о",
        'p' => "п",
        'r' => "р",
        's' => "с",
        't' => "т",
        'u' => "у",
        'f' => "ф",
        'h' => "х",
        'c' => "к",
        'q' => "к",
        'x' => "кс",
        'w' => "в",
        _ => return None,
    })
}

static ASCII_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\-]+$").expect("valid regex"));

pub fn contains_cyrillic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0400}'..='\u{04FF}').contains(&c))
}

pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

/// Detect romanized Slavic payment text and map it back to Cyrillic.
///
/// Returns the input unchanged when no indicator token is present.
pub fn reverse_transliterate(text: &str) -> String {
    let lower = text.to_lowercase();
    if !ROMAN_SIGNALS.iter().any(|sig| lower.contains(sig)) {
        return text.to_string();
    }
    let target = if UK_SIGNALS.iter().any(|sig| lower.contains(sig)) {
        Lang::Uk
    } else {
        Lang::Ru
    };

    let mut out_tokens = Vec::new();
    for token in text.split_whitespace() {
        if ASCII_WORD.is_match(token) {
            let key = token.to_lowercase();
            if let Some((_, repl)) = SPECIALS.iter().find(|(k, _)| *k == key) {
                out_tokens.push((*repl).to_string());
            } else {
                out_tokens.push(transliterate_token(token, target));
            }
        } else {
            out_tokens.push(token.to_string());
        }
    }
    out_tokens.join(" ")
}

/// One ASCII token → Cyrillic, digraphs first, preserving leading-letter case.
fn transliterate_token(token: &str, target: Lang) -> String {
    let leading_upper = token.chars().next().is_some_and(|c| c.is_uppercase());
    let mut s = token.to_lowercase();

    let extra = if target == Lang::Uk {
        DIGRAPHS_UK
    } else {
        DIGRAPHS_RU
    };
    for (from, to) in DIGRAPHS_COMMON.iter().chain(extra) {
        if s.contains(from) {
            s = s.replace(from, to);
        }
    }

    let mut result = String::with_capacity(s.len() * 2);
    for ch in s.chars() {
        match single_letter(ch) {
            Some(cy) => result.push_str(cy),
            None => result.push(ch),
        }
    }

    if leading_upper {
        let mut chars = result.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => result,
        }
    } else {
        result
    }
}

/// Forward Cyrillic→Latin transliteration for cross-script index variants.
pub fn cyrillic_to_latin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let lower = ch.to_lowercase().next().unwrap_or(ch);
        let mapped: &str = match lower {
            'а' => "a",
            'б' => "b",
            'в' => "v",
            'г' => "h",
            'ґ' => "g",
            'д' => "d",
            'е' => "e",
            'є' => "ie",
            'ё' => "yo",
            'ж' => "zh",
            'з' => "z",
            'и' => "y",
            'і' => "i",
            'ї' => "i",
            'й' => "i",
            'к' => "k",
            'л' => "l",
            'м' => "m",
            'н' => "n",
            'о' => "o",
            'п' => "p",
            'р' => "r",
            'с' => "s",
            'т' => "t",
            'у' => "u",
            'ф' => "f",
            'х' => "kh",
            'ц' => "ts",
            'ч' => "ch",
            'ш' => "sh",
            'щ' => "shch",
            'ъ' => "",
            'ы' => "y",
            'ь' => "",
            'э' => "e",
            'ю' => "iu",
            'я' => "ia",
            'ʼ' | '\'' => "",
            _ => {
                out.push(ch);
                continue;
            }
        };
        if ch.is_uppercase() {
            let mut chars = mapped.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push_str(mapped);
        }
    }
    out
}

/// Simple Arabic→Latin map for index-time variants (weight 0.7).
pub fn arabic_to_latin(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            'ا' | 'أ' => "a",
            'إ' => "i",
            'آ' => "aa",
            'ب' => "b",
            'ت' => "t",
            'ث' => "th",
            'ج' => "j",
            'ح' => "h",
            'خ' => "kh",
            'د' => "d",
            'ذ' => "dh",
            'ر' => "r",
            'ز' => "z",
            'س' => "s",
            'ش' => "sh",
            'ص' => "s",
            'ض' => "d",
            'ط' => "t",
            'ظ' => "z",
            'ع' => "a",
            'غ' => "gh",
            'ف' => "f",
            'ق' => "q",
            'ك' => "k",
            'ل' => "l",
            'م' => "m",
            'ن' => "n",
            'ه' => "h",
            'و' => "w",
            'ؤ' => "u",
            'ي' => "y",
            'ئ' => "i",
            'ى' => "a",
            'ة' => "a",
            _ => {
                return ch.to_string();
            }
        }
        .to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_indicators_passthrough() {
        assert_eq!(reverse_transliterate("John Smith"), "John Smith");
        assert_eq!(
            reverse_transliterate("Петро Порошенко"),
            "Петро Порошенко"
        );
    }

    #[test]
    fn test_ukrainian_target_chosen_by_vid() {
        let out = reverse_transliterate("Oplata vid Petro Poroshenko");
        assert_eq!(out, "оплата від Петро Порошенко");
    }

    #[test]
    fn test_russian_target_chosen_by_ot() {
        let out = reverse_transliterate("Platezh ot Petra");
        assert!(out.starts_with("платеж от"));
        assert!(contains_cyrillic(&out));
    }

    #[test]
    fn test_digraphs_apply_before_singles() {
        let out = reverse_transliterate("perevod ot Shchuka");
        assert!(out.contains("Щука"), "got: {out}");
    }

    #[test]
    fn test_leading_case_preserved() {
        let out = reverse_transliterate("Oplata vid Serhii");
        assert!(out.contains("Серхії") || out.contains("Сергії") || out.contains("Серії"),
            "leading capital must survive: {out}");
    }

    #[test]
    fn test_mixed_script_tokens_untouched() {
        let out = reverse_transliterate("oplata vid Петро123");
        assert!(out.contains("Петро123"));
    }

    #[test]
    fn test_cyrillic_to_latin_roundtrip_shape() {
        assert_eq!(cyrillic_to_latin("Петро Порошенко"), "Petro Poroshenko");
        assert_eq!(cyrillic_to_latin("Сергій"), "Serhii");
        assert_eq!(cyrillic_to_latin("Щука"), "Shchuka");
    }

    #[test]
    fn test_arabic_to_latin() {
        let out = arabic_to_latin("محمد");
        assert_eq!(out, "mhmd");
    }

    #[test]
    fn test_contains_helpers() {
        assert!(contains_cyrillic("abc д"));
        assert!(!contains_cyrillic("abc"));
        assert!(contains_arabic("محمد"));
        assert!(!contains_arabic("Петро"));
    }
}
