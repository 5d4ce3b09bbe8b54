//! Price display formatting.

/// Dot-grouped VND amount with the currency suffix: 12_000_000 ->
/// "12.000.000đ". `None` means the price is on request.
pub fn format_vnd(amount: Option<i64>) -> String {
    match amount {
        None => "Liên hệ".to_string(),
        Some(v) => format!("{}đ", group_thousands(v)),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut reversed = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push('.');
        }
        reversed.push(c);
    }
    let number: String = reversed.chars().rev().collect();
    if value < 0 {
        format!("-{number}")
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_vnd(Some(12_000_000)), "12.000.000đ");
        assert_eq!(format_vnd(Some(7_500_000)), "7.500.000đ");
        assert_eq!(format_vnd(Some(950)), "950đ");
        assert_eq!(format_vnd(Some(0)), "0đ");
    }

    #[test]
    fn missing_price_reads_as_contact() {
        assert_eq!(format_vnd(None), "Liên hệ");
    }
}
