//! Minimum-version comparison policies.

use std::cmp::Ordering;

/// Version ordering strategy for dependency validation.
///
/// `Loose` reproduces the historical comparison these manifests were
/// written against: values that parse as plain numbers compare
/// numerically (`"2.10"` reads as the number 2.1 and sorts below
/// `"2.9"`), anything else compares byte-wise. `Numeric` compares dotted
/// segments as integers and orders multi-digit segments correctly. The
/// policy is chosen explicitly at validator construction; there is no
/// silent switch between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    #[default]
    Loose,
    Numeric,
}

impl VersionPolicy {
    /// Compares two version strings under this policy.
    pub fn compare(self, left: &str, right: &str) -> Ordering {
        match self {
            Self::Loose => loose_compare(left, right),
            Self::Numeric => numeric_compare(left, right),
        }
    }

    /// Returns whether `declared` meets `minimum` under this policy.
    pub fn satisfies(self, declared: &str, minimum: &str) -> bool {
        self.compare(declared, minimum) != Ordering::Less
    }
}

fn loose_compare(left: &str, right: &str) -> Ordering {
    let left = left.trim();
    let right = right.trim();
    match (left.parse::<f64>(), right.parse::<f64>()) {
        (Ok(a), Ok(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => left.cmp(right),
    }
}

fn numeric_compare(left: &str, right: &str) -> Ordering {
    let left_segments: Vec<&str> = left.trim().split('.').collect();
    let right_segments: Vec<&str> = right.trim().split('.').collect();
    let count = left_segments.len().max(right_segments.len());
    for index in 0..count {
        // Absent segments count as zero, so "2" == "2.0".
        let l = left_segments.get(index).copied().unwrap_or("0");
        let r = right_segments.get(index).copied().unwrap_or("0");
        let ordering = match (l.parse::<u64>(), r.parse::<u64>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            _ => l.cmp(r),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::VersionPolicy;
    use std::cmp::Ordering;

    #[test]
    fn loose_compares_plain_numbers_numerically() {
        assert_eq!(VersionPolicy::Loose.compare("2", "10"), Ordering::Less);
        assert_eq!(VersionPolicy::Loose.compare("1.5", "1.5"), Ordering::Equal);
        assert!(VersionPolicy::Loose.satisfies("10", "2"));
    }

    #[test]
    fn loose_falls_back_to_byte_order_for_dotted_triplets() {
        assert_eq!(
            VersionPolicy::Loose.compare("1.5.0", "2.0.0"),
            Ordering::Less
        );
        assert!(!VersionPolicy::Loose.satisfies("1.5.0", "2.0.0"));
    }

    #[test]
    fn loose_misorders_multi_digit_segments() {
        // Documented legacy behavior: "2.10" parses as 2.1, below 2.9.
        assert_eq!(VersionPolicy::Loose.compare("2.10", "2.9"), Ordering::Less);
        assert!(!VersionPolicy::Loose.satisfies("2.10", "2.9"));
    }

    #[test]
    fn numeric_orders_multi_digit_segments_correctly() {
        assert_eq!(
            VersionPolicy::Numeric.compare("2.10", "2.9"),
            Ordering::Greater
        );
        assert!(VersionPolicy::Numeric.satisfies("2.10", "2.9"));
    }

    #[test]
    fn numeric_treats_absent_segments_as_zero() {
        assert_eq!(VersionPolicy::Numeric.compare("2", "2.0"), Ordering::Equal);
        assert_eq!(
            VersionPolicy::Numeric.compare("2", "2.0.1"),
            Ordering::Less
        );
    }

    #[test]
    fn numeric_falls_back_to_byte_order_for_non_numeric_segments() {
        assert_eq!(
            VersionPolicy::Numeric.compare("1.beta", "1.alpha"),
            Ordering::Greater
        );
    }

    #[test]
    fn default_policy_is_loose() {
        assert_eq!(VersionPolicy::default(), VersionPolicy::Loose);
    }
}
