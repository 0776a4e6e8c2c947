//! Bank detection over the opening pages of a statement.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::config::ClassifierConfig;
use crate::models::statement::Bank;
use crate::pdf::Document;

/// One ordered detection rule.
///
/// A rule matches when at least one `issuer` keyword appears in the
/// inspected text and, when `markers` is non-empty, at least one marker
/// appears as well. Keywords are matched as lowercase substrings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierRule {
    /// Layout selected when this rule matches.
    pub bank: Bank,

    /// Issuer keywords; at least one must appear.
    pub issuer: Vec<String>,

    /// Product-level disambiguators; empty means none required.
    #[serde(default)]
    pub markers: Vec<String>,
}

impl ClassifierRule {
    fn new(bank: Bank, issuer: &[&str], markers: &[&str]) -> Self {
        Self {
            bank,
            issuer: issuer.iter().map(|s| s.to_string()).collect(),
            markers: markers.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn matches(&self, text: &str) -> bool {
        self.issuer.iter().any(|k| text.contains(k.as_str()))
            && (self.markers.is_empty() || self.markers.iter().any(|k| text.contains(k.as_str())))
    }
}

/// Built-in detection rules, in precedence order.
///
/// Statement headers are inconsistent across card sub-products of one
/// issuer, so some rules carry product literals (masked card prefixes,
/// known contact strings) to tell sibling products apart. Brittle by
/// construction: a statement lacking these exact markers falls through to
/// the next rule or goes unclassified.
pub fn builtin_rules(icici_default: Bank) -> Vec<ClassifierRule> {
    vec![
        ClassifierRule::new(
            Bank::Axis,
            &["axis bank", "axisbank"],
            &[
                "my zone credit card",
                "ambika shekhawat",
                "axis edge",
                "45145700",
            ],
        ),
        ClassifierRule::new(
            Bank::IciciAmazon,
            &["icici bank"],
            &["amazon pay", "amazonpaycc@icicibank.com"],
        ),
        ClassifierRule::new(Bank::IciciCoral, &["icici bank"], &["coral", "4375"]),
        // ICICI statement with no sub-product marker: assume the
        // configured default variant.
        ClassifierRule::new(icici_default, &["icici bank"], &[]),
        ClassifierRule::new(Bank::Hdfc, &["hdfc bank"], &[]),
        ClassifierRule::new(Bank::Idfc, &["idfc first"], &[]),
    ]
}

/// Keyword-rule statement classifier. First matching rule wins.
pub struct Classifier {
    rules: Vec<ClassifierRule>,
    pages: usize,
}

impl Classifier {
    /// Build a classifier from an explicit rule list, inspecting the
    /// default two pages.
    pub fn new(rules: Vec<ClassifierRule>) -> Self {
        Self { rules, pages: 2 }
    }

    /// Set how many opening pages to inspect.
    pub fn with_pages(mut self, pages: usize) -> Self {
        self.pages = pages.max(1);
        self
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            rules: config.effective_rules(),
            pages: config.pages.max(1),
        }
    }

    /// Detect the issuing bank.
    ///
    /// Only the opening pages are inspected: cost stays bounded and the
    /// footers of later pages cannot produce false positives.
    pub fn classify(&self, doc: &Document) -> Option<Bank> {
        let mut text = String::new();
        for page in doc.pages.iter().take(self.pages) {
            text.push_str(&page.text.to_lowercase());
            text.push('\n');
        }

        for rule in &self.rules {
            if rule.matches(&text) {
                debug!(bank = %rule.bank, "classifier rule matched");
                return Some(rule.bank);
            }
        }

        debug!("no classifier rule matched");
        None
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }
}
