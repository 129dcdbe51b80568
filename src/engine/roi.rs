//! ROI model: savings, payback, and cumulative cash flow vs. a baseline.

use crate::engine::CostBreakdown;
use serde::{Deserialize, Serialize};

/// ROI of choosing a candidate vendor over a baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// Percentage return relative to the candidate's own TCO.
    ///
    /// `None` when the candidate's grand total is zero (a legitimate case
    /// for a zero-cost status-quo baseline), an expected business
    /// condition, not an error.
    pub roi_percentage: Option<f64>,
    /// Months until cumulative savings offset the candidate's initial
    /// investment; `None` when payback is not reached within the horizon.
    pub payback_months: Option<u32>,
    /// Annual run-rate savings vs. the baseline (may be negative)
    pub annual_savings: f64,
    /// The candidate's initial investment
    pub total_investment: f64,
    /// Cumulative cash flow, month 0 through month `years * 12`.
    ///
    /// Month 0 is the negative initial investment; the final element's sign
    /// says whether the horizon ended in the black.
    pub cumulative_cash_flow: Vec<f64>,
}

impl RoiResult {
    /// Whether payback was achieved within the horizon.
    #[must_use]
    pub const fn pays_back(&self) -> bool {
        self.payback_months.is_some()
    }
}

/// Computes ROI between two cost breakdowns.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoiModel;

impl RoiModel {
    /// Compute ROI of `candidate` relative to `baseline` over `years`.
    ///
    /// Both breakdowns are expected to come from the same organization
    /// config; this function is pure arithmetic over their totals.
    #[must_use]
    pub fn roi(
        &self,
        baseline: &CostBreakdown,
        candidate: &CostBreakdown,
        years: u32,
    ) -> RoiResult {
        let annual_savings = baseline.annual.total - candidate.annual.total;
        let total_investment = candidate.initial.total;

        let roi_percentage = if candidate.grand_total == 0.0 {
            None
        } else {
            Some((baseline.grand_total - candidate.grand_total) / candidate.grand_total * 100.0)
        };

        let months = years * 12;
        let monthly_savings = annual_savings / 12.0;

        // Smallest month where cumulative savings cover the initial
        // investment; never extrapolated past the horizon.
        let payback_months = if total_investment <= 0.0 {
            Some(0)
        } else if monthly_savings <= 0.0 {
            None
        } else {
            let m = (total_investment / monthly_savings).ceil() as u32;
            (m <= months).then_some(m)
        };

        // Month-by-month net position vs. continuing the baseline run-rate.
        let monthly_delta = monthly_savings - candidate.annual.total / 12.0;
        let mut cumulative_cash_flow = Vec::with_capacity(months as usize + 1);
        let mut cumulative = -total_investment;
        cumulative_cash_flow.push(cumulative);
        for _ in 0..months {
            cumulative += monthly_delta;
            cumulative_cash_flow.push(cumulative);
        }

        RoiResult {
            roi_percentage,
            payback_months,
            annual_savings,
            total_investment,
            cumulative_cash_flow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AnnualCosts, HiddenCosts, InitialCosts};
    use crate::model::VendorId;

    fn breakdown(id: &str, initial: f64, annual: f64, years: u32) -> CostBreakdown {
        let y = f64::from(years);
        CostBreakdown {
            vendor: VendorId::new(id),
            years,
            initial: InitialCosts {
                licenses: initial,
                total: initial,
                ..Default::default()
            },
            annual: AnnualCosts {
                subscription: annual,
                total: annual,
                ..Default::default()
            },
            hidden: HiddenCosts::default(),
            grand_total: initial + annual * y,
            per_device_month_cost: 0.0,
        }
    }

    #[test]
    fn test_roi_percentage_example() {
        // A at 600k vs baseline B at 1.2M over 3 years => 100%
        let baseline = breakdown("b", 0.0, 400_000.0, 3);
        let candidate = breakdown("a", 0.0, 200_000.0, 3);
        let roi = RoiModel.roi(&baseline, &candidate, 3);
        assert_eq!(roi.roi_percentage, Some(100.0));
    }

    #[test]
    fn test_zero_cost_candidate_yields_sentinel_not_crash() {
        let baseline = breakdown("b", 0.0, 100_000.0, 3);
        let candidate = breakdown("a", 0.0, 0.0, 3);
        let roi = RoiModel.roi(&baseline, &candidate, 3);
        assert_eq!(roi.roi_percentage, None);
    }

    #[test]
    fn test_payback_month() {
        // 120k investment, 5k/month savings => month 24
        let baseline = breakdown("b", 0.0, 160_000.0, 3);
        let candidate = breakdown("a", 120_000.0, 100_000.0, 3);
        let roi = RoiModel.roi(&baseline, &candidate, 3);
        assert_eq!(roi.annual_savings, 60_000.0);
        assert_eq!(roi.payback_months, Some(24));
    }

    #[test]
    fn test_no_payback_within_horizon() {
        // 120k investment, 5k/month savings, 1-year horizon: month 24 > 12
        let baseline = breakdown("b", 0.0, 160_000.0, 1);
        let candidate = breakdown("a", 120_000.0, 100_000.0, 1);
        let roi = RoiModel.roi(&baseline, &candidate, 1);
        assert_eq!(roi.payback_months, None, "no extrapolation past horizon");
    }

    #[test]
    fn test_payback_monotonic_in_years() {
        let mut last: Option<u32> = None;
        for years in 1..=10 {
            let baseline = breakdown("b", 0.0, 160_000.0, years);
            let candidate = breakdown("a", 120_000.0, 100_000.0, years);
            let roi = RoiModel.roi(&baseline, &candidate, years);
            if let (Some(prev), Some(cur)) = (last, roi.payback_months) {
                assert!(cur <= prev, "payback never increases with the horizon");
            }
            if roi.payback_months.is_some() {
                last = roi.payback_months;
            }
        }
        assert_eq!(last, Some(24));
    }

    #[test]
    fn test_cash_flow_series_shape() {
        let baseline = breakdown("b", 0.0, 160_000.0, 3);
        let candidate = breakdown("a", 120_000.0, 100_000.0, 3);
        let roi = RoiModel.roi(&baseline, &candidate, 3);
        assert_eq!(roi.cumulative_cash_flow.len(), 3 * 12 + 1);
        assert_eq!(roi.cumulative_cash_flow[0], -120_000.0);
        // monthly delta = 60k/12 - 100k/12
        let delta = 60_000.0 / 12.0 - 100_000.0 / 12.0;
        assert!((roi.cumulative_cash_flow[1] - (-120_000.0 + delta)).abs() < 1e-9);
    }

    #[test]
    fn test_negative_savings_reports_no_payback() {
        let baseline = breakdown("b", 0.0, 100_000.0, 3);
        let candidate = breakdown("a", 50_000.0, 160_000.0, 3);
        let roi = RoiModel.roi(&baseline, &candidate, 3);
        assert!(roi.annual_savings < 0.0);
        assert_eq!(roi.payback_months, None);
        assert!(roi.roi_percentage.unwrap() < 0.0);
    }

    #[test]
    fn test_zero_investment_pays_back_immediately() {
        let baseline = breakdown("b", 0.0, 160_000.0, 3);
        let candidate = breakdown("a", 0.0, 100_000.0, 3);
        let roi = RoiModel.roi(&baseline, &candidate, 3);
        assert_eq!(roi.payback_months, Some(0));
    }
}
