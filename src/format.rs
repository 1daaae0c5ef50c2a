/// Format a euro amount for display: whole amounts without decimals
/// (`€25`), anything else with two (`€25.50`), thousands grouped with commas.
pub fn format_price(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("{}€{}", sign, whole),
        frac => format!("{}€{}.{:02}", sign, whole, frac),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amounts() {
        assert_eq!(format_price(0.0), "€0");
        assert_eq!(format_price(25.0), "€25");
        assert_eq!(format_price(100.0), "€100");
    }

    #[test]
    fn test_fractional_amounts() {
        assert_eq!(format_price(25.5), "€25.50");
        assert_eq!(format_price(18.99), "€18.99");
        assert_eq!(format_price(0.1 + 0.2), "€0.30");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_price(1234.5), "€1,234.50");
        assert_eq!(format_price(1_000_000.0), "€1,000,000");
        assert_eq!(format_price(999.0), "€999");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_price(-5.25), "-€5.25");
        assert_eq!(format_price(-0.001), "€0");
    }
}
