// 🏦 Bank Directory - static reference data
// Fixed list of correspondent banks offered by the creation form. Read-only:
// there are no mutation operations, the five entries are the whole universe.

use serde::{Deserialize, Serialize};

// ============================================================================
// DIRECTORY ENTRY
// ============================================================================

/// One bank in the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDirectoryEntry {
    /// Display name shown in the dropdown
    pub name: String,

    /// BIC / SWIFT address
    pub bic: String,

    /// Logo reference (placeholder asset path)
    pub logo: String,
}

// ============================================================================
// BANK DIRECTORY
// ============================================================================

/// Read-only directory of the known sender banks
pub struct BankDirectory {
    entries: Vec<BankDirectoryEntry>,
}

impl BankDirectory {
    pub fn new() -> Self {
        let entry = |name: &str, bic: &str| BankDirectoryEntry {
            name: name.to_string(),
            bic: bic.to_string(),
            logo: "/placeholder.svg?height=40&width=40".to_string(),
        };

        BankDirectory {
            entries: vec![
                entry("Deutsche Bank", "DEUTDEFF"),
                entry("Barclays", "BARCGB22"),
                entry("HSBC", "HSBCGB2L"),
                entry("JP Morgan Chase", "CHASUS33"),
                entry("UBS", "UBSWCHZH80A"),
            ],
        }
    }

    pub fn all(&self) -> &[BankDirectoryEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Find a bank by its display name
    pub fn find_by_name(&self, name: &str) -> Option<&BankDirectoryEntry> {
        self.entries.iter().find(|bank| bank.name == name)
    }

    /// Find a bank by its BIC
    pub fn find_by_bic(&self, bic: &str) -> Option<&BankDirectoryEntry> {
        self.entries.iter().find(|bank| bank.bic == bic)
    }

    /// BIC for a display name (what the message template interpolates)
    pub fn bic_for(&self, name: &str) -> Option<&str> {
        self.find_by_name(name).map(|bank| bank.bic.as_str())
    }
}

impl Default for BankDirectory {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_has_five_banks() {
        let directory = BankDirectory::new();
        assert_eq!(directory.count(), 5);

        let names: Vec<&str> = directory.all().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Deutsche Bank", "Barclays", "HSBC", "JP Morgan Chase", "UBS"]
        );
    }

    #[test]
    fn test_find_by_name() {
        let directory = BankDirectory::new();

        let deutsche = directory.find_by_name("Deutsche Bank").unwrap();
        assert_eq!(deutsche.bic, "DEUTDEFF");

        assert!(directory.find_by_name("Chase").is_none());
        assert!(directory.find_by_name("deutsche bank").is_none()); // exact match only
    }

    #[test]
    fn test_find_by_bic() {
        let directory = BankDirectory::new();

        let ubs = directory.find_by_bic("UBSWCHZH80A").unwrap();
        assert_eq!(ubs.name, "UBS");

        assert!(directory.find_by_bic("BOFAUS3NXXX").is_none());
    }

    #[test]
    fn test_bic_for() {
        let directory = BankDirectory::new();

        assert_eq!(directory.bic_for("Barclays"), Some("BARCGB22"));
        assert_eq!(directory.bic_for("HSBC"), Some("HSBCGB2L"));
        assert_eq!(directory.bic_for("Monzo"), None);
    }

    #[test]
    fn test_entries_carry_placeholder_logo() {
        let directory = BankDirectory::new();
        for bank in directory.all() {
            assert!(bank.logo.starts_with("/placeholder.svg"));
        }
    }
}
