/// Taxonomy identifier types used throughout Veritax
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Taxonomy ID - newtype pattern for type safety.
///
/// NCBI taxids are numeric in practice, but the dump files and every API
/// around them treat the id as an opaque token, so we keep it as a string
/// and never parse it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonId(String);

impl TaxonId {
    /// The root of the entire taxonomy, its own parent
    pub const ROOT: &'static str = "1";
    /// The "Viruses" node, root of the viral subtree
    pub const VIRUSES: &'static str = "10239";

    /// Create a new TaxonId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the root taxon ("1")
    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    /// Check if this is the Viruses node ("10239")
    pub fn is_viruses(&self) -> bool {
        self.0 == Self::VIRUSES
    }
}

impl fmt::Display for TaxonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaxonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TaxonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// Lets `HashMap<TaxonId, _>` be queried with a plain `&str`
impl Borrow<str> for TaxonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert!(TaxonId::new("1").is_root());
        assert!(!TaxonId::new("1").is_viruses());
        assert!(TaxonId::new("10239").is_viruses());
        assert!(!TaxonId::new("10239").is_root());
    }

    #[test]
    fn test_borrow_lookup() {
        use std::collections::HashMap;

        let mut map: HashMap<TaxonId, &str> = HashMap::new();
        map.insert(TaxonId::new("562"), "Escherichia coli");
        assert_eq!(map.get("562"), Some(&"Escherichia coli"));
        assert_eq!(map.get("563"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TaxonId::new("10239").to_string(), "10239");
    }
}
