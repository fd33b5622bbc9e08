/// Splits exchange symbols such as `BTCUSDT` into base and quote assets.
pub struct TradingPair;

impl TradingPair {
    // Finds the trading quote at the end of the pair name and returns it.
    pub fn get_quote(text: &str) -> Option<&str> {
        static PAIR_QUOTES: &[&str] = &["USDT", "USDC", "FDUSD", "BTC", "ETH"];
        PAIR_QUOTES
            .iter()
            .find(|&&ext| text.ends_with(ext) && text.len() > ext.len())
            .copied()
    }

    pub fn get_base_and_quote(text: &str) -> Option<(&str, &str)> {
        let quote = Self::get_quote(text)?;
        let base = text.strip_suffix(quote)?;
        Some((base, quote))
    }

    /// Human form used in chart titles: `BTCUSDT` -> `BTC/USDT`.
    /// Unknown quotes are shown unchanged.
    pub fn display_name(symbol: &str) -> String {
        match Self::get_base_and_quote(symbol) {
            Some((base, quote)) => format!("{}/{}", base, quote),
            None => symbol.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_splits_known_quotes() {
        assert_eq!(TradingPair::display_name("BTCUSDT"), "BTC/USDT");
        assert_eq!(TradingPair::display_name("ETHBTC"), "ETH/BTC");
        assert_eq!(TradingPair::display_name("WEIRD"), "WEIRD");
        assert_eq!(TradingPair::display_name("USDT"), "USDT");
    }
}
