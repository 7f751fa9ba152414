use chrono::NaiveDate;

/// Strips every non-digit character.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats an 11-digit CPF as `000.000.000-00`.
///
/// Any other digit count is returned unmasked (digits only), so the
/// backend never receives stray punctuation.
pub fn format_cpf(input: &str) -> String {
    let digits = digits_only(input);
    if digits.len() != 11 {
        return digits;
    }
    format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    )
}

/// Formats a 10/11-digit Brazilian phone number as `(00) 0000-0000` /
/// `(00) 00000-0000`.
pub fn format_phone(input: &str) -> String {
    let digits = digits_only(input);
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        _ => digits,
    }
}

/// Formats an 8-digit CEP as `00000-000`.
pub fn format_cep(input: &str) -> String {
    let digits = digits_only(input);
    if digits.len() != 8 {
        return digits;
    }
    format!("{}-{}", &digits[..5], &digits[5..])
}

pub fn is_valid_cpf(input: &str) -> bool {
    digits_only(input).len() == 11
}

pub fn is_valid_phone(input: &str) -> bool {
    matches!(digits_only(input).len(), 10 | 11)
}

/// Minimal email shape check: one `@`, non-empty local part, a dot in
/// the domain away from its edges.
pub fn is_valid_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.len() < 3 || input.contains(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Display format for dates (`dd/mm/yyyy`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parses the value of an HTML date input (`yyyy-mm-dd`).
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("529.982.247-25"), "52998224725");
        assert_eq!(digits_only("(11) 98765-4321"), "11987654321");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
        // Wrong length falls back to bare digits
        assert_eq!(format_cpf("1234"), "1234");
    }

    #[test]
    fn test_format_cpf_masked_and_raw_agree() {
        // formatCpf(digitsOnly(x)) == formatCpf(x) for valid 11-digit inputs
        for input in ["52998224725", "529.982.247-25", "529982247-25"] {
            assert_eq!(format_cpf(&digits_only(input)), format_cpf(input));
        }
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("1132654321"), "(11) 3265-4321");
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("123"), "123");
    }

    #[test]
    fn test_format_cep() {
        assert_eq!(format_cep("01310100"), "01310-100");
        assert_eq!(format_cep("01310-100"), "01310-100");
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ana@example.org"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("@example.org"));
        assert!(!is_valid_email("ana example@org.com"));
        assert!(!is_valid_email("ana@.org"));
    }

    #[test]
    fn test_date_round_trip() {
        let date = parse_input_date("2024-03-05").unwrap();
        assert_eq!(format_date(date), "05/03/2024");
        assert!(parse_input_date("05/03/2024").is_none());
    }
}
