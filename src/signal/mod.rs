use std::cmp::Ordering;

//flags the amount largest spreads in one matrix row
//
//pure per-row function: no other row influences the result. missing cells
//are never selected; when fewer than amount cells have data, all available
//cells are selected. the sort is stable, so ties resolve to the earlier
//column and the outcome is deterministic for a fixed column ordering
pub fn select_top_n(row: &[Option<f64>], amount: usize) -> Vec<bool> {
    let mut ranked: Vec<usize> = (0..row.len()).filter(|&col| row[col].is_some()).collect();

    ranked.sort_by(|&a, &b| {
        row[b]
            .partial_cmp(&row[a])
            .unwrap_or(Ordering::Equal)
    });

    let mut selected = vec![false; row.len()];
    for &col in ranked.iter().take(amount) {
        selected[col] = true;
    }
    selected
}

//symbols flagged by a signal row, in column order
pub fn selected_symbols<'a>(symbols: &[&'a str], signal: &[bool]) -> Vec<&'a str> {
    symbols
        .iter()
        .zip(signal.iter())
        .filter(|(_, &flag)| flag)
        .map(|(&symbol, _)| symbol)
        .collect()
}
