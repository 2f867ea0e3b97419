//! src/query/format.rs
//! ============================================================================
//! # Display Formatting: Currency, Category Slugs and Fixed UI Copy
//!
//! Pure helpers for the presentation layer. Currency follows the pt-BR / BRL
//! convention (`R$` prefix, `.` thousands, `,` decimals); copy strings are the
//! fixed Portuguese display texts.

use unicode_normalization::UnicodeNormalization;

use crate::model::listing::ALL_CATEGORIES;

const CURRENCY_PREFIX: &str = "R$\u{a0}";

/// Formats an amount as Brazilian reais, e.g. `R$ 1.234,50`.
///
/// Rounds the exact decimal value of `amount` to cents, half away from zero,
/// so `1.115` (stored as `1.11499…`) gives `1,11`. The separator after `R$` is
/// a no-break space. Non-finite amounts render as zero.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = to_cents_string(amount.abs());
    let (units, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    format!("{sign}{CURRENCY_PREFIX}{grouped},{fraction}")
}

/// `abs` as `units.cc`, rounded on its exact binary value.
///
/// `{:.2}` already rounds the exact value but settles exact ties to even.
/// A cent tie is representable only when `abs * 8` is an odd integer
/// (`x.125`, `x.375`, ...); those are printed with three decimals, cut and
/// bumped up one cent.
fn to_cents_string(abs: f64) -> String {
    let eighths = abs * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths % 2.0 == 1.0;
    if !is_tie {
        return format!("{abs:.2}");
    }

    let mut fixed = format!("{abs:.3}");
    fixed.pop();
    increment_last_digit(&mut fixed);
    fixed
}

/// Adds one unit in the last place of a plain decimal string, carrying left.
fn increment_last_digit(number: &mut String) {
    let mut digits: Vec<u8> = std::mem::take(number).into_bytes();
    let mut carry = true;
    for byte in digits.iter_mut().rev() {
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                carry = false;
                break;
            }
        }
    }
    if carry {
        digits.insert(0, b'1');
    }
    *number = String::from_utf8(digits).unwrap_or_default();
}

/// Lowercase, strip diacritics, keep only `[a-z0-9]`.
///
/// Used for category-specific styling keys only.
pub fn slugify(category: &str) -> String {
    category
        .to_lowercase()
        .nfd()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Search bar placeholder for the active category.
pub fn search_placeholder(category: &str) -> String {
    if category == ALL_CATEGORIES {
        "Busque por serviço...".to_string()
    } else {
        format!("Busque em {category}...")
    }
}

/// Headline shown when a query has no results.
pub fn empty_state_message(search_text: &str, category: &str) -> String {
    let filtered = category != ALL_CATEGORIES;
    match (search_text.is_empty(), filtered) {
        (false, true) => {
            format!("Nenhum serviço encontrado para \"{search_text}\" em {category}")
        }
        (false, false) => format!("Nenhum serviço encontrado para \"{search_text}\""),
        (true, true) => format!("Nenhum serviço encontrado na categoria {category}"),
        (true, false) => "Nenhum serviço encontrado".to_string(),
    }
}

pub fn empty_state_suggestion(search_text: &str) -> &'static str {
    if search_text.is_empty() {
        "Tente selecionar uma categoria diferente ou ajustar seus filtros."
    } else {
        "Tente buscar por outros termos ou navegue pelas categorias disponíveis."
    }
}

pub const EMPTY_STATE_TIPS: [&str; 3] = [
    "Verifique a ortografia dos termos de busca",
    "Use termos mais genéricos",
    "Explore diferentes categorias",
];

/// Results counter, e.g. `Exibindo 3 serviços`.
pub fn results_label(count: usize) -> String {
    if count == 1 {
        "Exibindo 1 serviço".to_string()
    } else {
        format!("Exibindo {count} serviços")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_matches_pt_br_convention() {
        assert_eq!(format_currency(0.0), "R$\u{a0}0,00");
        assert_eq!(format_currency(150.0), "R$\u{a0}150,00");
        assert_eq!(format_currency(1234.5), "R$\u{a0}1.234,50");
        assert_eq!(format_currency(1_000_000.0), "R$\u{a0}1.000.000,00");
        assert_eq!(format_currency(25.999), "R$\u{a0}26,00");
    }

    #[test]
    fn currency_rounds_the_stored_decimal_value() {
        // None of these is an exact tie; the stored value decides.
        assert_eq!(format_currency(1.115), "R$\u{a0}1,11");
        assert_eq!(format_currency(2.675), "R$\u{a0}2,67");
        assert_eq!(format_currency(0.005), "R$\u{a0}0,01");
        assert_eq!(format_currency(9.995), "R$\u{a0}9,99");
        assert_eq!(format_currency(-2.675), "-R$\u{a0}2,67");
    }

    #[test]
    fn exact_half_cents_round_up() {
        assert_eq!(format_currency(0.125), "R$\u{a0}0,13");
        assert_eq!(format_currency(0.375), "R$\u{a0}0,38");
        assert_eq!(format_currency(999.875), "R$\u{a0}999,88");
        assert_eq!(format_currency(-1.625), "-R$\u{a0}1,63");
    }

    #[test]
    fn increment_carries_through_the_point() {
        let mut n = "9.99".to_string();
        increment_last_digit(&mut n);
        assert_eq!(n, "10.00");

        let mut n = "0.12".to_string();
        increment_last_digit(&mut n);
        assert_eq!(n, "0.13");
    }

    #[test]
    fn currency_edge_inputs_never_fail() {
        assert_eq!(format_currency(-10.0), "-R$\u{a0}10,00");
        assert_eq!(format_currency(-0.001), "R$\u{a0}0,00");
        assert_eq!(format_currency(f64::NAN), "R$\u{a0}0,00");
        assert_eq!(format_currency(f64::INFINITY), "R$\u{a0}0,00");
    }

    #[test]
    fn slugify_strips_accents_and_symbols() {
        assert_eq!(slugify("Beleza & Bem-estar"), "belezabemestar");
        assert_eq!(slugify("Reparos & Manutenção"), "reparosmanutencao");
        assert_eq!(slugify("Água Verde 24h"), "aguaverde24h");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slugify_is_idempotent_and_ascii() {
        for input in ["Eventos & Fotografia", "ÇÃO 123 ☃", "Straße", "  Pets  ", "Ünïcödé-42"] {
            let slug = slugify(input);
            assert_eq!(slugify(&slug), slug);
            assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn copy_depends_on_filters() {
        assert_eq!(search_placeholder(ALL_CATEGORIES), "Busque por serviço...");
        assert_eq!(search_placeholder("Pets"), "Busque em Pets...");

        assert_eq!(
            empty_state_message("gato", "Pets"),
            "Nenhum serviço encontrado para \"gato\" em Pets"
        );
        assert_eq!(empty_state_message("gato", ALL_CATEGORIES), "Nenhum serviço encontrado para \"gato\"");
        assert_eq!(empty_state_message("", "Pets"), "Nenhum serviço encontrado na categoria Pets");
        assert_eq!(empty_state_message("", ALL_CATEGORIES), "Nenhum serviço encontrado");
        assert!(empty_state_suggestion("gato").starts_with("Tente buscar"));

        assert_eq!(results_label(1), "Exibindo 1 serviço");
        assert_eq!(results_label(0), "Exibindo 0 serviços");
    }
}
