use crate::models::{EnrichedHolding, PortfolioTotals, SectorSummary};

/// Sector used for holdings that carry no sector label.
const UNKNOWN_SECTOR: &str = "Other";

/// Group enriched holdings by sector, preserving first-seen sector order.
pub fn summarize_sectors(stocks: &[EnrichedHolding]) -> Vec<SectorSummary> {
    let mut summaries: Vec<SectorSummary> = Vec::new();

    for stock in stocks {
        let sector = if stock.sector.trim().is_empty() {
            UNKNOWN_SECTOR
        } else {
            stock.sector.as_str()
        };

        let idx = match summaries.iter().position(|s| s.sector == sector) {
            Some(idx) => idx,
            None => {
                summaries.push(SectorSummary::empty(sector.to_string()));
                summaries.len() - 1
            }
        };

        let summary = &mut summaries[idx];
        summary.stock_count += 1;
        summary.total_investment += stock.investment;
        summary.total_present_value += stock.present_value;
        summary.total_gain_loss += stock.gain_loss;
    }

    for summary in &mut summaries {
        summary.total_gain_loss_percentage =
            percentage(summary.total_gain_loss, summary.total_investment);
    }

    summaries
}

/// Portfolio-wide sums over all holdings. Computed directly rather than by
/// summing the sector summaries; the two must agree, and tests hold them to
/// that.
pub fn portfolio_totals(stocks: &[EnrichedHolding]) -> PortfolioTotals {
    let investment: f64 = stocks.iter().map(|s| s.investment).sum();
    let present_value: f64 = stocks.iter().map(|s| s.present_value).sum();
    let gain_loss = present_value - investment;

    PortfolioTotals {
        investment,
        present_value,
        gain_loss,
        gain_loss_percentage: percentage(gain_loss, investment),
    }
}

fn percentage(gain_loss: f64, investment: f64) -> f64 {
    if investment > 0.0 {
        gain_loss / investment * 100.0
    } else {
        0.0
    }
}
