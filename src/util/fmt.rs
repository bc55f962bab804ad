use std::fmt::{self, Display, Formatter};

/// Displays an integer with `,` separating each group of three digits.
pub struct Grouped(pub i64);

impl Display for Grouped {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        if self.0 < 0 {
            write!(f, "-")?;
        }

        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                write!(f, ",")?;
            }
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Grouped;

    #[test]
    fn test_grouping() {
        assert_eq!(Grouped(0).to_string(), "0");
        assert_eq!(Grouped(999).to_string(), "999");
        assert_eq!(Grouped(1000).to_string(), "1,000");
        assert_eq!(
            Grouped(1234567).to_string(), "1,234,567",
            "Groups should be counted from the least significant digit."
        );
        assert_eq!(Grouped(-12345).to_string(), "-12,345");
        assert_eq!(Grouped(i64::MIN).to_string(), "-9,223,372,036,854,775,808");
    }
}
