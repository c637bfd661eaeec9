//! Static holdings source.
//!
//! The portfolio sheet is baked in: 26 NSE-listed positions with their
//! purchase data and the last known price / P/E / EPS as fallbacks for when
//! live lookups degrade. There is no write path; the list is loaded once.

use crate::models::Holding;

/// Coarse sector classification from a stock's display name, used when a
/// holding arrives without a sector label.
pub fn sector_for_name(name: &str) -> &'static str {
    let name = name.to_lowercase();

    if ["bank", "finance", "insurance", "life"].iter().any(|kw| name.contains(kw)) {
        "Banking & Financial"
    } else if ["tech", "software", "it", "digital"].iter().any(|kw| name.contains(kw)) {
        "IT & Technology"
    } else if ["consumer", "fmcg", "retail"].iter().any(|kw| name.contains(kw)) {
        "Consumer & FMCG"
    } else if ["auto", "manufacturing", "power", "energy"].iter().any(|kw| name.contains(kw)) {
        "Auto & Manufacturing"
    } else {
        "Other"
    }
}

#[allow(clippy::too_many_arguments)]
fn holding(
    id: &str,
    name: &str,
    symbol: &str,
    sector: &str,
    purchase_price: f64,
    quantity: u32,
    portfolio_percentage: f64,
    nse_code: &str,
    bse_code: &str,
    fallback_price: f64,
    fallback_pe_ratio: f64,
    fallback_earnings: f64,
) -> Holding {
    let sector = if sector.trim().is_empty() { sector_for_name(name) } else { sector };
    Holding::new(
        id,
        name,
        symbol,
        sector,
        purchase_price,
        quantity,
        portfolio_percentage,
        nse_code,
        bse_code,
        fallback_price,
        fallback_pe_ratio,
        fallback_earnings,
    )
}

/// The immutable holdings list. Investment is derived inside `Holding::new`,
/// never read from the sheet.
pub fn load_holdings() -> Vec<Holding> {
    vec![
        holding("1", "HDFC Bank", "HDFCBANK.NS", "Banking & Financial", 1490.0, 50, 4.83, "HDFCBANK", "HDFCBANK", 1700.15, 18.69, 91.02),
        holding("2", "Bajaj Finance", "BAJFINANCE.NS", "Banking & Financial", 6466.0, 15, 6.29, "BAJFINANCE", "BAJFINANCE", 8419.6, 32.63, 257.8),
        holding("3", "ICICI Bank", "ICICIBANK.NS", "Banking & Financial", 780.0, 84, 4.25, "532174", "532174", 1427.0, 19.39, 73.6),
        holding("4", "Bajaj Housing", "BAJAJHLDNG.NS", "Banking & Financial", 130.0, 504, 4.25, "544252", "544252", 113.0, 127.7, 2.56),
        holding("5", "Savani Financials", "SAVANIFIN.NS", "Banking & Financial", 24.0, 1080, 1.68, "511577", "511577", 18.0, 0.0, -3.05),
        holding("6", "Affle India", "AFFLE.NS", "IT & Technology", 1151.0, 50, 3.73, "AFFLE", "AFFLE", 1959.0, 68.64, 28.54),
        holding("7", "LTI Mindtree", "LTIM.NS", "IT & Technology", 4775.0, 16, 4.95, "LTIM", "LTIM", 5111.0, 34.69, 145.92),
        holding("8", "KPIT Tech", "KPITTECH.NS", "IT & Technology", 672.0, 61, 2.66, "542651", "542651", 1209.0, 41.0, 29.5),
        holding("9", "Tata Tech", "TATATECH.NS", "IT & Technology", 1072.0, 63, 4.38, "544028", "544028", 664.0, 39.36, 16.86),
        holding("10", "BLS E-Services", "BLSE.NS", "IT & Technology", 232.0, 191, 2.87, "544107", "544107", 179.0, 29.39, 6.09),
        holding("11", "Tanla", "TANLA.NS", "IT & Technology", 1134.0, 45, 3.31, "532790", "532790", 609.0, 16.93, 49.08),
        holding("12", "Dmart", "DMART.NS", "Consumer & FMCG", 3777.0, 27, 6.61, "DMART", "DMART", 4348.0, 104.76, 41.5),
        holding("13", "Tata Consumer", "TATACONSUM.NS", "Consumer & FMCG", 845.0, 90, 4.93, "532540", "532540", 1048.0, 22.19, 136.19),
        holding("14", "Pidilite", "PIDILITIND.NS", "Consumer & FMCG", 2376.0, 36, 5.55, "500331", "500331", 3079.0, 71.95, 42.8),
        holding("15", "Tata Power", "TATAPOWER.NS", "Power & Energy", 224.0, 225, 3.27, "500400", "500400", 385.0, 30.35, 12.69),
        holding("16", "KPI Green", "KPIGREEN.NS", "Power & Energy", 875.0, 50, 2.84, "542323", "542323", 508.0, 27.97, 18.16),
        holding("17", "Suzlon", "SUZLON.NS", "Power & Energy", 44.0, 450, 1.28, "532667", "532667", 60.0, 39.25, 1.53),
        holding("18", "Gensol", "GENSOL.NS", "Power & Energy", 998.0, 45, 2.91, "542851", "542851", 42.0, 39.51, 5.57),
        holding("19", "Hariom Pipes", "HARIOMPIPE.NS", "Pipe Sector", 580.0, 60, 2.26, "543517", "543517", 484.0, 24.27, 19.93),
        holding("20", "Astral", "ASTRAL.NS", "Pipe Sector", 1517.0, 56, 5.51, "ASTRAL", "ASTRAL", 1279.0, 70.86, 18.05),
        holding("21", "Polycab", "POLYCAB.NS", "Pipe Sector", 2818.0, 28, 5.12, "542652", "542652", 6965.0, 47.45, 146.78),
        holding("22", "Clean Science", "CLEANSCIENCE.NS", "Others", 1610.0, 32, 3.34, "543318", "543318", 1187.0, 46.98, 25.27),
        holding("23", "Deepak Nitrite", "DEEPAKNTR.NS", "Others", 2248.0, 27, 3.94, "506401", "506401", 1832.0, 42.67, 39.09),
        holding("24", "Fine Organic", "FINEORG.NS", "Others", 4284.0, 16, 4.45, "541557", "541557", 4810.0, 42.67, 39.09),
        holding("25", "Gravita", "GRAVITA.NS", "Others", 2037.0, 8, 1.06, "533282", "533282", 1779.0, 42.67, 39.09),
        holding("26", "SBI Life", "SBILIFE.NS", "Others", 1197.0, 49, 3.80, "540719", "540719", 1839.0, 0.0, -4.73),
    ]
}
