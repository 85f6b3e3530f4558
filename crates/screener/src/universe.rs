/// All unordered 2-combinations of the ticker universe.
///
/// Pairs are emitted in standard combinations order: for indices
/// `i < j` in input order, `(tickers[i], tickers[j])`. No self-pairs,
/// no duplicates.
#[must_use]
pub fn unique_pairs(tickers: &[String]) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(tickers.len() * tickers.len().saturating_sub(1) / 2);
    for (i, a) in tickers.iter().enumerate() {
        for b in &tickers[i + 1..] {
            pairs.push((a.clone(), b.clone()));
        }
    }
    pairs
}
