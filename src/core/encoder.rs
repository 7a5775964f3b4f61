/// A fixed mapping from category labels to integer codes.
///
/// Unknown labels never fail: they fall back to `default`.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable {
    pub name: &'static str,
    pub entries: &'static [(&'static str, u8)],
    pub default: u8,
}

impl CategoryTable {
    pub fn encode(&self, raw: &str) -> u8 {
        match self.lookup(raw) {
            Some(code) => code,
            None => {
                tracing::debug!(
                    "Unknown {} value {:?}, using default code {}",
                    self.name,
                    raw,
                    self.default
                );
                self.default
            }
        }
    }

    pub fn lookup(&self, raw: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(label, _)| *label == raw)
            .map(|(_, code)| *code)
    }
}

pub const FUEL_TYPE: CategoryTable = CategoryTable {
    name: "fuel_type",
    entries: &[("Petrol", 0), ("Diesel", 1), ("CNG", 2)],
    default: 0,
};

pub const SELLER_TYPE: CategoryTable = CategoryTable {
    name: "seller_type",
    entries: &[("Dealer", 0), ("Trustmark Dealer", 1), ("Individual", 2)],
    default: 2,
};

pub const TRANSMISSION: CategoryTable = CategoryTable {
    name: "transmission",
    entries: &[("Manual", 0), ("Automatic", 1)],
    default: 0,
};

// 第三手以上都歸為 2
pub const OWNER: CategoryTable = CategoryTable {
    name: "owner",
    entries: &[
        ("First Owner", 0),
        ("Second Owner", 1),
        ("Third Owner", 2),
        ("Fourth Owner", 2),
        ("Fourth & Above Owner", 2),
    ],
    default: 0,
};

pub const YES_NO: CategoryTable = CategoryTable {
    name: "yes_no",
    entries: &[("No", 0), ("Yes", 1)],
    default: 0,
};

pub const SERVICE_HISTORY: CategoryTable = CategoryTable {
    name: "service_history",
    entries: &[("Incomplete", 0), ("Partial", 1), ("Complete", 2)],
    default: 2,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(FUEL_TYPE.encode("Petrol"), 0);
        assert_eq!(FUEL_TYPE.encode("Diesel"), 1);
        assert_eq!(FUEL_TYPE.encode("CNG"), 2);

        assert_eq!(SELLER_TYPE.encode("Dealer"), 0);
        assert_eq!(SELLER_TYPE.encode("Trustmark Dealer"), 1);
        assert_eq!(SELLER_TYPE.encode("Individual"), 2);

        assert_eq!(TRANSMISSION.encode("Manual"), 0);
        assert_eq!(TRANSMISSION.encode("Automatic"), 1);

        assert_eq!(OWNER.encode("First Owner"), 0);
        assert_eq!(OWNER.encode("Second Owner"), 1);
        assert_eq!(OWNER.encode("Third Owner"), 2);
        assert_eq!(OWNER.encode("Fourth Owner"), 2);
        assert_eq!(OWNER.encode("Fourth & Above Owner"), 2);

        assert_eq!(YES_NO.encode("No"), 0);
        assert_eq!(YES_NO.encode("Yes"), 1);

        assert_eq!(SERVICE_HISTORY.encode("Incomplete"), 0);
        assert_eq!(SERVICE_HISTORY.encode("Partial"), 1);
        assert_eq!(SERVICE_HISTORY.encode("Complete"), 2);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_default() {
        assert_eq!(FUEL_TYPE.encode("Unknown"), 0);
        assert_eq!(FUEL_TYPE.encode("Electric"), 0);
        assert_eq!(SELLER_TYPE.encode("Broker"), 2);
        assert_eq!(TRANSMISSION.encode("CVT"), 0);
        assert_eq!(OWNER.encode("Fifth Owner"), 0);
        assert_eq!(YES_NO.encode("Maybe"), 0);
        assert_eq!(SERVICE_HISTORY.encode("None"), 2);
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(FUEL_TYPE.lookup("diesel"), None);
        assert_eq!(FUEL_TYPE.lookup(" Diesel"), None);
        assert_eq!(OWNER.lookup("First"), None);
        assert_eq!(YES_NO.lookup(""), None);

        assert_eq!(FUEL_TYPE.encode("diesel"), FUEL_TYPE.default);
    }
}
