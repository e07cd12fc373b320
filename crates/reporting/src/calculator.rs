//! Aggregate performance metrics over campaign activity data.

use pulse_core::dataset::{CampaignDataset, CLICKS, CONVERSIONS, IMPRESSIONS, SPEND};
use pulse_core::error::{PulseError, PulseResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Bundled metric values plus raw column totals for one dataset.
///
/// Produced fresh on each call to [`MetricsCalculator::get_all_metrics`];
/// it has no identity or lifecycle beyond that call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Click-through rate, percent of impressions.
    pub ctr_pct: f64,
    /// Average cost per click.
    pub cpc: f64,
    /// Average cost per conversion (infinite when nothing converted).
    pub cpa: f64,
    /// Conversion rate, percent of clicks.
    pub conversion_rate_pct: f64,
    /// Revenue per unit of spend (0.0 when no revenue was supplied).
    pub roas: f64,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_spend: f64,
    pub total_conversions: u64,
}

impl MetricsReport {
    /// Flatten into an ordered name -> value mapping for export layers
    /// that want a uniform numeric series.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("ctr_pct", self.ctr_pct),
            ("cpc", self.cpc),
            ("cpa", self.cpa),
            ("conversion_rate_pct", self.conversion_rate_pct),
            ("roas", self.roas),
            ("total_impressions", self.total_impressions as f64),
            ("total_clicks", self.total_clicks as f64),
            ("total_spend", self.total_spend),
            ("total_conversions", self.total_conversions as f64),
        ])
    }

    /// Pretty JSON rendering of the report. Non-finite values (an
    /// infinite CPA) serialize as `null`.
    pub fn to_json(&self) -> PulseResult<String> {
        serde_json::to_string_pretty(self).map_err(PulseError::from)
    }
}

// ---------------------------------------------------------------------------
// MetricsCalculator
// ---------------------------------------------------------------------------

/// Computes derived performance ratios over a borrowed, read-only
/// dataset.
///
/// Construction validates that all required columns are present; every
/// query method after that is a pure, total function of the dataset's
/// contents. Degenerate denominators resolve to in-band sentinel values
/// rather than errors; see the individual methods for the per-metric
/// policy.
pub struct MetricsCalculator<'a> {
    data: &'a CampaignDataset,
}

impl<'a> MetricsCalculator<'a> {
    /// Wrap a dataset, rejecting it up front when any required column
    /// is missing.
    pub fn new(data: &'a CampaignDataset) -> PulseResult<Self> {
        let missing = data.missing_required();
        if !missing.is_empty() {
            return Err(PulseError::MissingColumns { missing });
        }

        debug!(rows = data.row_count(), "metrics calculator ready");
        Ok(Self { data })
    }

    /// Click-through rate: `clicks / impressions * 100`.
    /// Returns 0 when no impressions were recorded.
    pub fn calculate_ctr(&self) -> f64 {
        let total_impressions = self.data.sum(IMPRESSIONS);
        if total_impressions == 0.0 {
            return 0.0;
        }
        self.data.sum(CLICKS) / total_impressions * 100.0
    }

    /// Cost per click: `spend / clicks`.
    /// Returns 0 when no clicks were recorded.
    pub fn calculate_cpc(&self) -> f64 {
        let total_clicks = self.data.sum(CLICKS);
        if total_clicks == 0.0 {
            return 0.0;
        }
        self.data.sum(SPEND) / total_clicks
    }

    /// Cost per acquisition: `spend / conversions`.
    ///
    /// Returns positive infinity when nothing converted: spend with no
    /// conversions has no finite per-conversion cost. This sentinel is
    /// deliberately distinct from the 0 returned by the other ratios.
    pub fn calculate_cpa(&self) -> f64 {
        let total_conversions = self.data.sum(CONVERSIONS);
        if total_conversions == 0.0 {
            return f64::INFINITY;
        }
        self.data.sum(SPEND) / total_conversions
    }

    /// Conversion rate: `conversions / clicks * 100`.
    /// Returns 0 when no clicks were recorded.
    pub fn calculate_conversion_rate(&self) -> f64 {
        let total_clicks = self.data.sum(CLICKS);
        if total_clicks == 0.0 {
            return 0.0;
        }
        self.data.sum(CONVERSIONS) / total_clicks * 100.0
    }

    /// Return on ad spend: `revenue / spend`. Revenue is supplied by
    /// the caller; the dataset carries no revenue column.
    /// Returns 0 when there was no spend.
    pub fn calculate_roas(&self, revenue: f64) -> f64 {
        let total_spend = self.data.sum(SPEND);
        if total_spend == 0.0 {
            return 0.0;
        }
        revenue / total_spend
    }

    /// Cost per mille: `spend / impressions * 1000`.
    /// Returns 0 when no impressions were recorded.
    pub fn calculate_cpm(&self) -> f64 {
        let total_impressions = self.data.sum(IMPRESSIONS);
        if total_impressions == 0.0 {
            return 0.0;
        }
        self.data.sum(SPEND) / total_impressions * 1000.0
    }

    /// Bundle every metric plus the raw totals into one report, with
    /// derived ratios rounded to two decimals.
    ///
    /// ROAS is reported as the literal 0 whenever `revenue <= 0`, even
    /// though a ratio would be computable: an un-supplied revenue must
    /// not read as a real zero-revenue ROAS.
    pub fn get_all_metrics(&self, revenue: f64) -> MetricsReport {
        let roas = if revenue > 0.0 {
            round2(self.calculate_roas(revenue))
        } else {
            0.0
        };

        MetricsReport {
            ctr_pct: round2(self.calculate_ctr()),
            cpc: round2(self.calculate_cpc()),
            cpa: round2(self.calculate_cpa()),
            conversion_rate_pct: round2(self.calculate_conversion_rate()),
            roas,
            total_impressions: self.data.sum(IMPRESSIONS) as u64,
            total_clicks: self.data.sum(CLICKS) as u64,
            total_spend: round2(self.data.sum(SPEND)),
            total_conversions: self.data.sum(CONVERSIONS) as u64,
        }
    }
}

/// Round to two decimal places. Infinity passes through unchanged.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
