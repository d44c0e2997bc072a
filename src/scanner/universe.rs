//! Built-in large-cap scan universe.

/// A reference entry in the scan universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniverseEntry {
    /// Ticker symbol.
    pub symbol: &'static str,
    /// Company name.
    pub name: &'static str,
    /// Reference sector.
    pub sector: &'static str,
}

const fn entry(
    symbol: &'static str,
    name: &'static str,
    sector: &'static str,
) -> UniverseEntry {
    UniverseEntry {
        symbol,
        name,
        sector,
    }
}

/// Large-cap companies scanned by default.
pub const UNIVERSE: &[UniverseEntry] = &[
    entry("AAPL", "Apple Inc.", "Technology"),
    entry("MSFT", "Microsoft Corporation", "Technology"),
    entry("GOOGL", "Alphabet Inc.", "Technology"),
    entry("AMZN", "Amazon.com Inc.", "Consumer Cyclical"),
    entry("NVDA", "NVIDIA Corporation", "Technology"),
    entry("META", "Meta Platforms Inc.", "Technology"),
    entry("BRK.B", "Berkshire Hathaway Inc.", "Financial Services"),
    entry("LLY", "Eli Lilly and Company", "Healthcare"),
    entry("TSLA", "Tesla Inc.", "Consumer Cyclical"),
    entry("UNH", "UnitedHealth Group Inc.", "Healthcare"),
    entry("JPM", "JPMorgan Chase & Co.", "Financial Services"),
    entry("V", "Visa Inc.", "Financial Services"),
    entry("JNJ", "Johnson & Johnson", "Healthcare"),
    entry("PG", "Procter & Gamble Co.", "Consumer Defensive"),
    entry("HD", "Home Depot Inc.", "Consumer Cyclical"),
    entry("MA", "Mastercard Inc.", "Financial Services"),
    entry("CVX", "Chevron Corporation", "Energy"),
    entry("ABBV", "AbbVie Inc.", "Healthcare"),
    entry("PFE", "Pfizer Inc.", "Healthcare"),
    entry("BAC", "Bank of America Corp.", "Financial Services"),
    entry("KO", "Coca-Cola Co.", "Consumer Defensive"),
    entry("PEP", "PepsiCo Inc.", "Consumer Defensive"),
    entry("AVGO", "Broadcom Inc.", "Technology"),
    entry("TMO", "Thermo Fisher Scientific Inc.", "Healthcare"),
    entry("COST", "Costco Wholesale Corp.", "Consumer Defensive"),
    entry("MRK", "Merck & Co. Inc.", "Healthcare"),
    entry("WMT", "Walmart Inc.", "Consumer Defensive"),
    entry("ABT", "Abbott Laboratories", "Healthcare"),
    entry("ACN", "Accenture plc", "Technology"),
    entry("CRM", "Salesforce Inc.", "Technology"),
    entry("DHR", "Danaher Corporation", "Healthcare"),
    entry("VZ", "Verizon Communications Inc.", "Communication Services"),
    entry("ADBE", "Adobe Inc.", "Technology"),
    entry("NFLX", "Netflix Inc.", "Communication Services"),
    entry("NKE", "Nike Inc.", "Consumer Cyclical"),
    entry("PM", "Philip Morris International", "Consumer Defensive"),
    entry("TXN", "Texas Instruments Inc.", "Technology"),
    entry("INTC", "Intel Corporation", "Technology"),
    entry("QCOM", "QUALCOMM Inc.", "Technology"),
    entry("HON", "Honeywell International Inc.", "Industrials"),
    entry("IBM", "International Business Machines Corp.", "Technology"),
    entry("UNP", "Union Pacific Corporation", "Industrials"),
    entry("CAT", "Caterpillar Inc.", "Industrials"),
    entry("GS", "Goldman Sachs Group Inc.", "Financial Services"),
    entry("AMAT", "Applied Materials Inc.", "Technology"),
    entry("MS", "Morgan Stanley", "Financial Services"),
    entry("SPGI", "S&P Global Inc.", "Financial Services"),
    entry("RTX", "Raytheon Technologies Corp.", "Industrials"),
    entry("ISRG", "Intuitive Surgical Inc.", "Healthcare"),
    entry("PLD", "Prologis Inc.", "Real Estate"),
    entry("LMT", "Lockheed Martin Corporation", "Industrials"),
    entry("BMY", "Bristol-Myers Squibb Co.", "Healthcare"),
    entry("T", "AT&T Inc.", "Communication Services"),
    entry("DE", "Deere & Company", "Industrials"),
    entry("AXP", "American Express Co.", "Financial Services"),
    entry("GILD", "Gilead Sciences Inc.", "Healthcare"),
    entry("AMGN", "Amgen Inc.", "Healthcare"),
    entry("ADI", "Analog Devices Inc.", "Technology"),
    entry("C", "Citigroup Inc.", "Financial Services"),
    entry("MDLZ", "Mondelez International Inc.", "Consumer Defensive"),
    entry("GE", "General Electric Company", "Industrials"),
    entry("TJX", "TJX Companies Inc.", "Consumer Cyclical"),
    entry("SBUX", "Starbucks Corporation", "Consumer Cyclical"),
    entry("CMCSA", "Comcast Corporation", "Communication Services"),
    entry("TMUS", "T-Mobile US Inc.", "Communication Services"),
    entry("ADP", "Automatic Data Processing Inc.", "Technology"),
    entry("DUK", "Duke Energy Corporation", "Utilities"),
    entry("SO", "Southern Company", "Utilities"),
    entry("BDX", "Becton Dickinson and Company", "Healthcare"),
    entry("ITW", "Illinois Tool Works Inc.", "Industrials"),
    entry("CSCO", "Cisco Systems Inc.", "Technology"),
    entry("BLK", "BlackRock Inc.", "Financial Services"),
    entry("SCHW", "Charles Schwab Corporation", "Financial Services"),
    entry("CI", "Cigna Corporation", "Healthcare"),
    entry("USB", "U.S. Bancorp", "Financial Services"),
    entry("PNC", "PNC Financial Services Group Inc.", "Financial Services"),
    entry("TGT", "Target Corporation", "Consumer Cyclical"),
    entry("MO", "Altria Group Inc.", "Consumer Defensive"),
    entry("UPS", "United Parcel Service Inc.", "Industrials"),
    entry("LOW", "Lowe's Companies Inc.", "Consumer Cyclical"),
    entry("INTU", "Intuit Inc.", "Technology"),
    entry("CB", "Chubb Limited", "Financial Services"),
    entry("ICE", "Intercontinental Exchange Inc.", "Financial Services"),
    entry("CME", "CME Group Inc.", "Financial Services"),
    entry("ETN", "Eaton Corporation plc", "Industrials"),
    entry("AON", "Aon plc", "Financial Services"),
    entry("MMC", "Marsh & McLennan Companies Inc.", "Financial Services"),
    entry("REGN", "Regeneron Pharmaceuticals Inc.", "Healthcare"),
    entry("KLAC", "KLA Corporation", "Technology"),
    entry("CDNS", "Cadence Design Systems Inc.", "Technology"),
    entry("SNPS", "Synopsys Inc.", "Technology"),
    entry("MELI", "MercadoLibre Inc.", "Consumer Cyclical"),
    entry("PANW", "Palo Alto Networks Inc.", "Technology"),
    entry("FTNT", "Fortinet Inc.", "Technology"),
    entry("CRWD", "CrowdStrike Holdings Inc.", "Technology"),
    entry("ZS", "Zscaler Inc.", "Technology"),
    entry("OKTA", "Okta Inc.", "Technology"),
    entry("TEAM", "Atlassian Corporation plc", "Technology"),
    entry("SNOW", "Snowflake Inc.", "Technology"),
    entry("DDOG", "Datadog Inc.", "Technology"),
    entry("PLTR", "Palantir Technologies Inc.", "Technology"),
    entry("RBLX", "Roblox Corporation", "Communication Services"),
    entry("UBER", "Uber Technologies Inc.", "Technology"),
    entry("LYFT", "Lyft Inc.", "Technology"),
    entry("DASH", "DoorDash Inc.", "Consumer Cyclical"),
    entry("ABNB", "Airbnb Inc.", "Consumer Cyclical"),
    entry("COIN", "Coinbase Global Inc.", "Financial Services"),
    entry("HOOD", "Robinhood Markets Inc.", "Financial Services"),
    entry("RIVN", "Rivian Automotive Inc.", "Consumer Cyclical"),
    entry("LCID", "Lucid Group Inc.", "Consumer Cyclical"),
    entry("NIO", "NIO Inc.", "Consumer Cyclical"),
    entry("XPEV", "XPeng Inc.", "Consumer Cyclical"),
    entry("LI", "Li Auto Inc.", "Consumer Cyclical"),
];
