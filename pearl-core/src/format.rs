//! Display helpers shared by the UI and the CLI.

use chrono::NaiveDate;

/// Group digits in thousands: `25000` -> `"25,000"`.
pub fn grouped(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"25,000/μL"`.
pub fn platelets(count: u32) -> String {
    format!("{}/μL", grouped(count))
}

/// Lab values are either counts (grouped) or decimals kept as authored.
pub fn lab_value(value: f64) -> String {
    if value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX) {
        grouped(value as u32)
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

pub fn date(value: NaiveDate) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// Avatar letters: the first character of each word, `"Sarah Johnson"` -> `"SJ"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(25_000), "25,000");
        assert_eq!(grouped(1_500_000), "1,500,000");
        assert_eq!(platelets(85_000), "85,000/μL");
    }

    #[test]
    fn lab_values_keep_decimals() {
        assert_eq!(lab_value(10.2), "10.2");
        assert_eq!(lab_value(45_000.0), "45,000");
    }

    #[test]
    fn dates_are_human_readable() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(date(day), "Jan 5, 2024");
    }

    #[test]
    fn initials_take_each_word() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("  maria   rodriguez "), "MR");
        assert_eq!(initials(""), "");
    }
}
