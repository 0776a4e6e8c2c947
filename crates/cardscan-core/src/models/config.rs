//! Configuration structures for the parsing pipeline.

use serde::{Deserialize, Serialize};

use crate::models::statement::Bank;
use crate::pdf::TableStrategy;
use crate::statement::classifier::{builtin_rules, ClassifierRule};

/// Main configuration for the cardscan pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardscanConfig {
    /// PDF reading configuration.
    pub pdf: PdfConfig,

    /// Bank classification configuration.
    pub classifier: ClassifierConfig,
}

/// PDF reading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Table recovery strategy applied to page text.
    pub table_strategy: TableStrategy,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            table_strategy: TableStrategy::Lattice,
        }
    }
}

/// Bank classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Ordered detection rules; first match wins. An empty list selects
    /// the built-in rule set.
    pub rules: Vec<ClassifierRule>,

    /// Pages inspected for bank markers. Later pages carry footers and
    /// reward-program boilerplate that cause false positives.
    pub pages: usize,

    /// Variant assumed when a statement mentions ICICI Bank but carries no
    /// sub-product marker. An approximation, not a guarantee; kept as data
    /// so unseen statement variants can be redirected without a rebuild.
    pub icici_default: Bank,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            pages: 2,
            icici_default: Bank::IciciCoral,
        }
    }
}

impl ClassifierConfig {
    /// The rule list in effect: the configured rules, or the built-in set
    /// with the configured ICICI fallback plugged in.
    pub fn effective_rules(&self) -> Vec<ClassifierRule> {
        if self.rules.is_empty() {
            builtin_rules(self.icici_default)
        } else {
            self.rules.clone()
        }
    }
}

impl CardscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CardscanConfig::default();
        assert_eq!(config.pdf.table_strategy, TableStrategy::Lattice);
        assert_eq!(config.classifier.pages, 2);
        assert_eq!(config.classifier.icici_default, Bank::IciciCoral);
        assert!(config.classifier.rules.is_empty());
        assert!(!config.classifier.effective_rules().is_empty());
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = CardscanConfig::default();
        config.classifier.icici_default = Bank::IciciAmazon;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: CardscanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.classifier.icici_default, Bank::IciciAmazon);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: CardscanConfig =
            serde_json::from_str(r#"{"classifier": {"pages": 1}}"#).unwrap();
        assert_eq!(parsed.classifier.pages, 1);
        assert_eq!(parsed.pdf.table_strategy, TableStrategy::Lattice);
    }
}
