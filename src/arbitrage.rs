// =============================================================================
// arbitrage.rs — SAME QUESTION, TWO PRICES
// =============================================================================
//
// When a post's top two markets sit on different venues and their yes prices
// disagree by more than five cents, there's a spread to trade: buy yes where
// it's cheap, sell where it's dear. Round-trip fees eat two cents of that, so
// the profit figure is the spread minus the fee, and it can be thin.
//
// Only markets that carry both a platform and a yes price take part. Missing
// data never produces a spread.
// =============================================================================

use serde::Serialize;

use crate::models::{Market, MarketMatch, Platform};

/// Yes-price gap above which two venues disagree enough to trade.
pub const ARBITRAGE_PRICE_GAP: f64 = 0.05;

/// Round-trip trading fee, one cent per side.
pub const ROUND_TRIP_FEE: f64 = 0.02;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArbitrageSpread {
    pub buy_platform: Platform,
    pub buy_market_id: String,
    pub buy_price: f64,
    pub sell_platform: Platform,
    pub sell_market_id: String,
    pub sell_price: f64,
    pub spread: f64,
    /// Spread after fees. Can be small but never negative while the gap
    /// exceeds the fee.
    pub profit_after_fees: f64,
    pub recommendation: String,
}

/// Spread between two markets on different venues, or `None` when they share
/// a venue, lack a price or platform, or sit within `ARBITRAGE_PRICE_GAP`.
pub fn detect_spread(a: &Market, b: &Market) -> Option<ArbitrageSpread> {
    let (pa, pb) = (a.platform?, b.platform?);
    let (ya, yb) = (a.yes_price?, b.yes_price?);
    if pa == pb {
        return None;
    }

    let spread = (ya - yb).abs();
    if spread <= ARBITRAGE_PRICE_GAP {
        return None;
    }

    let ((buy, buy_platform, buy_price), (sell, sell_platform, sell_price)) = if ya < yb {
        ((a, pa, ya), (b, pb, yb))
    } else {
        ((b, pb, yb), (a, pa, ya))
    };

    Some(ArbitrageSpread {
        recommendation: format!(
            "Buy {} at {:.1}%, sell {} at {:.1}%",
            buy_platform.to_string().to_uppercase(),
            buy_price * 100.0,
            sell_platform.to_string().to_uppercase(),
            sell_price * 100.0,
        ),
        buy_platform,
        buy_market_id: buy.id.clone(),
        buy_price,
        sell_platform,
        sell_market_id: sell.id.clone(),
        sell_price,
        spread,
        profit_after_fees: spread - ROUND_TRIP_FEE,
    })
}

/// Spread between the top two ranked matches, if any.
pub fn top_pair_spread(matches: &[MarketMatch]) -> Option<ArbitrageSpread> {
    let [first, second, ..] = matches else {
        return None;
    };
    detect_spread(&first.market, &second.market)
}
