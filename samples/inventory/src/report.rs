//! Summary report of a reconciliation run.

use std::fmt;

use lambars_can::control::Can;

use crate::reconcile::{Finding, Outcome, Reconciled};

/// Outcomes of a run, grouped by shape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// SKUs found nowhere.
    pub discontinued: Vec<String>,
    /// SKUs that cannot be sold, with the findings that block them.
    pub blocked: Vec<(String, Vec<Finding>)>,
    /// SKUs that reconciled without findings.
    pub clean: Vec<Reconciled>,
    /// SKUs that can be sold but need attention.
    pub flagged: Vec<(Reconciled, Vec<Finding>)>,
}

impl Summary {
    /// Files one outcome under its shape.
    pub fn record(&mut self, sku: String, outcome: Outcome) {
        match outcome {
            Can::None => self.discontinued.push(sku),
            Can::Left(findings) => self.blocked.push((sku, findings)),
            Can::Right(reconciled) => self.clean.push(reconciled),
            Can::Both(findings, reconciled) => self.flagged.push((reconciled, findings)),
        }
    }

    /// Total number of findings across blocked and flagged SKUs.
    pub fn finding_count(&self) -> usize {
        self.blocked
            .iter()
            .map(|(_, findings)| findings.len())
            .chain(self.flagged.iter().map(|(_, findings)| findings.len()))
            .sum()
    }

    /// Units that can be sold right now.
    pub fn sellable_units(&self) -> u64 {
        self.clean
            .iter()
            .chain(self.flagged.iter().map(|(reconciled, _)| reconciled))
            .map(|reconciled| u64::from(reconciled.sellable))
            .sum()
    }

    /// Value of the sellable units, in cents.
    pub fn sellable_value_cents(&self) -> u64 {
        self.clean
            .iter()
            .chain(self.flagged.iter().map(|(reconciled, _)| reconciled))
            .map(|reconciled| u64::from(reconciled.sellable).saturating_mul(reconciled.price_cents))
            .fold(0, u64::saturating_add)
    }
}

impl FromIterator<(String, Outcome)> for Summary {
    fn from_iter<I: IntoIterator<Item = (String, Outcome)>>(iter: I) -> Self {
        let mut summary = Self::default();
        for (sku, outcome) in iter {
            summary.record(sku, outcome);
        }
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "Inventory reconciliation")?;
        writeln!(
            formatter,
            "  clean: {}, flagged: {}, blocked: {}, discontinued: {}",
            self.clean.len(),
            self.flagged.len(),
            self.blocked.len(),
            self.discontinued.len()
        )?;
        writeln!(
            formatter,
            "  sellable units: {} (value {}.{:02})",
            self.sellable_units(),
            self.sellable_value_cents() / 100,
            self.sellable_value_cents() % 100
        )?;

        for (reconciled, findings) in &self.flagged {
            writeln!(formatter, "  flagged {}:", reconciled.sku)?;
            for finding in findings {
                writeln!(formatter, "    - {finding}")?;
            }
        }
        for (sku, findings) in &self.blocked {
            writeln!(formatter, "  blocked {sku}:")?;
            for finding in findings {
                writeln!(formatter, "    - {finding}")?;
            }
        }
        if !self.discontinued.is_empty() {
            writeln!(formatter, "  discontinued: {}", self.discontinued.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reconciled(sku: &str, sellable: u32, price_cents: u64) -> Reconciled {
        Reconciled {
            sku: sku.to_string(),
            sellable,
            price_cents,
        }
    }

    #[rstest]
    fn record_files_each_shape_separately() {
        let summary: Summary = vec![
            ("A".to_string(), Can::None),
            ("B".to_string(), Can::Left(vec![Finding::Unpriced { sku: "B".to_string() }])),
            ("C".to_string(), Can::Right(reconciled("C", 2, 150))),
            (
                "D".to_string(),
                Can::Both(
                    vec![Finding::Oversold {
                        sku: "D".to_string(),
                        advertised: 9,
                        on_hand: 1,
                    }],
                    reconciled("D", 1, 1000),
                ),
            ),
        ]
        .into_iter()
        .collect();

        assert_eq!(summary.discontinued, vec!["A".to_string()]);
        assert_eq!(summary.blocked.len(), 1);
        assert_eq!(summary.clean, vec![reconciled("C", 2, 150)]);
        assert_eq!(summary.flagged.len(), 1);
        assert_eq!(summary.finding_count(), 2);
        assert_eq!(summary.sellable_units(), 3);
        assert_eq!(summary.sellable_value_cents(), 1300);
    }

    #[rstest]
    fn empty_summary_renders_zero_counts() {
        let rendered = Summary::default().to_string();
        assert!(rendered.contains("clean: 0, flagged: 0, blocked: 0, discontinued: 0"));
        assert!(rendered.contains("sellable units: 0 (value 0.00)"));
        assert_eq!(rendered.lines().count(), 3);
    }
}
