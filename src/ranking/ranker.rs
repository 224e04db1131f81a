use metrics::counter;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::RankError;
use crate::models::{RankedBalance, WalletBalance};
use crate::providers::PriceSource;

use super::classifier::{classify, UNRECOGNIZED_PRIORITY};

/// Filter and order balances by chain priority.
///
/// A balance survives the filter only if its chain is in the ranking table
/// and its amount is non-positive. Retained balances are ordered by
/// priority, descending; equal priorities keep their input order (the sort
/// is stable). Ranking an already-ranked list is a no-op.
pub fn rank(balances: &[WalletBalance]) -> Vec<WalletBalance> {
    let mut retained: Vec<WalletBalance> = balances
        .iter()
        .filter(|b| classify(&b.chain) != UNRECOGNIZED_PRIORITY && b.amount <= Decimal::ZERO)
        .cloned()
        .collect();

    retained.sort_by(|lhs, rhs| classify(&rhs.chain).cmp(&classify(&lhs.chain)));

    counter!("rank_passes_total").increment(1);
    counter!("balances_dropped_total").increment((balances.len() - retained.len()) as u64);

    retained
}

/// Derive priced display rows for a slice of balances.
///
/// Fails fast on the first currency the price source cannot answer for;
/// a partial result is never returned.
pub fn value_balances(
    balances: &[WalletBalance],
    prices: &impl PriceSource,
) -> Result<Vec<RankedBalance>, RankError> {
    balances
        .iter()
        .map(|b| {
            let price = match prices.price(&b.currency) {
                Some(price) => price,
                None => {
                    counter!("price_lookups_failed_total").increment(1);
                    return Err(RankError::MissingPrice(b.currency.clone()));
                }
            };

            Ok(RankedBalance {
                currency: b.currency.clone(),
                chain: b.chain.clone(),
                priority: classify(&b.chain),
                amount: b.amount,
                formatted: format_amount(b.amount),
                value: b.amount * price,
            })
        })
        .collect()
}

/// Render an amount with zero decimal places.
fn format_amount(amount: Decimal) -> String {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
