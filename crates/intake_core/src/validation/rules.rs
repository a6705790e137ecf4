//! Fixed field format rules.
//!
//! Every pattern is anchored and must match the whole value. Digit and
//! whitespace classes are spelled out as ASCII sets; Unicode digits or
//! spaces are rejected.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII letters, Latin-1 range U+00C0..=U+00FF, ASCII whitespace.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zÀ-ÿ \t\n\x0B\x0C\r]+$").expect("valid name regex")
});
static CPF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$").expect("valid cpf regex")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\([0-9]{2}\)[0-9]{5}-[0-9]{4}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});
// Day 01-31 and month 01-12 only; calendar validity is not checked here.
static BIRTH_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/[0-9]{4}$")
        .expect("valid birth date regex")
});

/// One or more letters (accented Latin included) or whitespace.
pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

/// `DDD.DDD.DDD-DD`.
pub fn is_valid_cpf(value: &str) -> bool {
    CPF_RE.is_match(value)
}

/// `(DD)DDDDD-DDDD`.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// `local@domain.tld` with a TLD of two or more letters.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// `dd/mm/yyyy`.
pub fn is_valid_birth_date(value: &str) -> bool {
    BIRTH_DATE_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_birth_date, is_valid_cpf, is_valid_email, is_valid_name, is_valid_phone};

    #[test]
    fn name_accepts_accented_letters_and_spaces() {
        assert!(is_valid_name("João da Conceição"));
        assert!(is_valid_name("Ana\tSilva"));
        assert!(!is_valid_name("Ana 2"));
        assert!(!is_valid_name("Ana-Silva"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn name_rejects_non_ascii_whitespace_and_letters_outside_latin1() {
        assert!(!is_valid_name("Ana\u{00A0}Silva"));
        assert!(!is_valid_name("Łukasz"));
    }

    #[test]
    fn cpf_requires_exact_punctuation() {
        assert!(is_valid_cpf("123.456.789-09"));
        assert!(!is_valid_cpf("12345678909"));
        assert!(!is_valid_cpf("123.456.789-0"));
        assert!(!is_valid_cpf(" 123.456.789-09"));
        assert!(!is_valid_cpf("123.456.789-09\n"));
    }

    #[test]
    fn cpf_rejects_non_ascii_digits() {
        assert!(!is_valid_cpf("١٢٣.456.789-09"));
    }

    #[test]
    fn phone_requires_area_code_and_nine_digits() {
        assert!(is_valid_phone("(11)91234-5678"));
        assert!(!is_valid_phone("(11) 91234-5678"));
        assert!(!is_valid_phone("(11)1234-5678"));
        assert!(!is_valid_phone("11912345678"));
    }

    #[test]
    fn email_requires_alpha_tld() {
        assert!(is_valid_email("ana@x.com"));
        assert!(is_valid_email("ana.silva+clinic@mail.example.br"));
        assert!(!is_valid_email("ana@x.c"));
        assert!(!is_valid_email("ana@x.c0m"));
        assert!(!is_valid_email("ana.x.com"));
        assert!(!is_valid_email("ana@@x.com"));
    }

    #[test]
    fn birth_date_checks_ranges_but_not_calendar() {
        assert!(is_valid_birth_date("15/05/1990"));
        assert!(is_valid_birth_date("31/02/2024"));
        assert!(!is_valid_birth_date("32/01/2024"));
        assert!(!is_valid_birth_date("00/01/2024"));
        assert!(!is_valid_birth_date("15/13/1990"));
        assert!(!is_valid_birth_date("1/5/1990"));
        assert!(!is_valid_birth_date("1990-05-15"));
    }
}
