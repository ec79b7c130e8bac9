//! Integration tests for the pure routing and shaping helpers

use crypto_intel::core::market::truncate_search;
use crypto_intel::models::{Enrichment, MarketsParams, TokenSummary, UnavailableReason};
use crypto_intel::utils::json::first_item;
use crypto_intel::{classify, Intent};
use serde_json::json;

#[test]
fn test_any_0x_query_of_contract_length_is_lookup() {
    for len in [42usize, 66] {
        for filler in ['0', 'f', 'g', 'z', '-'] {
            let query = format!("0x{}", filler.to_string().repeat(len - 2));
            assert!(
                matches!(classify(&query), Intent::ContractLookup { .. }),
                "len {} filler {:?} should be a contract lookup",
                len,
                filler
            );
        }
    }
}

#[test]
fn test_uppercase_prefix_is_lowered_first() {
    let query = format!("0X{}", "AB".repeat(20));
    assert_eq!(
        classify(&query),
        Intent::ContractLookup {
            address: format!("0x{}", "ab".repeat(20))
        }
    );
}

#[test]
fn test_other_lengths_are_market_queries() {
    for len in [2usize, 41, 43, 65, 67] {
        let query = format!("0x{}", "1".repeat(len - 2));
        assert!(
            matches!(classify(&query), Intent::MarketQuery { .. }),
            "len {} should not be a contract lookup",
            len
        );
    }
}

#[test]
fn test_residual_uses_last_occurrence_of_first_phrase() {
    assert_eq!(
        classify("price of price of bitcoin"),
        Intent::MarketQuery { name: "bitcoin".to_string() }
    );
    assert_eq!(
        classify("chart of the chart of ETH"),
        Intent::MarketQuery { name: "eth".to_string() }
    );
}

#[test]
fn test_first_item_contract() {
    assert_eq!(first_item(Some(&json!([]))), None);
    assert_eq!(first_item(None), None);
    assert_eq!(first_item(Some(&json!(["a", "b"]))), Some(json!("a")));
}

#[test]
fn test_search_truncation_preserves_order() {
    let upstream = json!({"coins": (0..15).map(|i| json!({"id": i})).collect::<Vec<_>>()});
    let result = truncate_search(&upstream);
    assert_eq!(result.coins.len(), 10);
    for (i, coin) in result.coins.iter().enumerate() {
        assert_eq!(coin["id"], json!(i));
    }
}

#[test]
fn test_zero_is_not_missing() {
    let supply: Enrichment<String> = Enrichment::Available("0".to_string());
    assert_eq!(supply.into_option().as_deref(), Some("0"));

    let missing: Enrichment<String> = Enrichment::Unavailable(UnavailableReason::MissingApiKey);
    assert_eq!(missing.into_option(), None);

    let summary = TokenSummary::from_coingecko(&json!({"market_data": {"current_price": {"usd": 0}}}));
    assert_eq!(summary.price_usd, Some(0.0));
}

#[test]
fn test_markets_defaults() {
    let params: MarketsParams = serde_json::from_value(json!({})).unwrap();
    assert_eq!(params, MarketsParams::default());
    assert_eq!(params.vs_currency, "usd");
    assert_eq!(params.per_page, 10);
    assert_eq!(params.page, 1);
    assert!(params.sparkline);
}
