use serde::Serialize;

/// A named investment option whose average annual return feeds the ETF
/// simulator. Seed data today; the lookup is the only coupling point if a
/// live data source ever replaces the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub name: &'static str,
    pub symbol: &'static str,
    pub average_annual_return: f64,
    pub description: &'static str,
}

pub const INSTRUMENTS: [Instrument; 5] = [
    Instrument {
        name: "S&P 500 ETF",
        symbol: "SPY",
        average_annual_return: 0.10,
        description: "500 US large-cap companies",
    },
    Instrument {
        name: "Nasdaq ETF",
        symbol: "QQQ",
        average_annual_return: 0.12,
        description: "Nasdaq-100 technology stocks",
    },
    Instrument {
        name: "Global Equity ETF",
        symbol: "VTI",
        average_annual_return: 0.08,
        description: "Globally diversified equities",
    },
    Instrument {
        name: "Emerging Markets ETF",
        symbol: "VWO",
        average_annual_return: 0.07,
        description: "Emerging market equities",
    },
    Instrument {
        name: "Real Estate ETF",
        symbol: "VNQ",
        average_annual_return: 0.09,
        description: "Real estate investment trusts",
    },
];

pub fn find_instrument(symbol: &str) -> Option<&'static Instrument> {
    INSTRUMENTS.iter().find(|i| i.symbol == symbol)
}
