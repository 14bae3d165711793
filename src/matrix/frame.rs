use crate::data::Observation;
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::collections::BTreeSet;

//a dense date-by-symbol matrix
//
//rows are strictly ascending trading dates, columns are contract symbols
//in first-encountered order over the date-sorted observations, cells are
//missing when a contract was not quoted on a date
#[derive(Debug, Clone, PartialEq)]
pub struct DateFrame {
    dates: Vec<NaiveDate>,
    columns: IndexMap<String, usize>,
    rows: Vec<Vec<Option<f64>>>,
}

impl DateFrame {
    //pivots one field of the observations into a date-by-symbol matrix
    //duplicate (date, symbol) pairs resolve last-write-wins
    pub fn pivot<F>(observations: &[Observation], value: F) -> Self
    where
        F: Fn(&Observation) -> f64,
    {
        let mut sorted: Vec<&Observation> = observations.iter().collect();
        sorted.sort_by(|a, b| a.trading_date.cmp(&b.trading_date));

        let dates: Vec<NaiveDate> = sorted
            .iter()
            .map(|obs| obs.trading_date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut columns: IndexMap<String, usize> = IndexMap::new();
        for obs in &sorted {
            let next = columns.len();
            columns.entry(obs.symbol.clone()).or_insert(next);
        }

        let date_index: IndexMap<NaiveDate, usize> = dates
            .iter()
            .enumerate()
            .map(|(i, &date)| (date, i))
            .collect();

        let mut rows = vec![vec![None; columns.len()]; dates.len()];
        for obs in &sorted {
            let row = date_index[&obs.trading_date];
            let col = columns[&obs.symbol];
            rows[row][col] = Some(value(obs));
        }

        DateFrame {
            dates,
            columns,
            rows,
        }
    }

    //keeps rows 0, period, 2*period, ...
    pub fn sample_every(&self, period: usize) -> Self {
        let dates = self.dates.iter().copied().step_by(period).collect();
        let rows = self.rows.iter().cloned().step_by(period).collect();

        DateFrame {
            dates,
            columns: self.columns.clone(),
            rows,
        }
    }

    //multiplies every cell by a scalar
    pub fn scale(&self, factor: f64) -> Self {
        self.map_cells(|v| v * factor)
    }

    //negates every cell
    pub fn negate(&self) -> Self {
        self.map_cells(|v| -v)
    }

    fn map_cells<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.map(&f)).collect())
            .collect();

        DateFrame {
            dates: self.dates.clone(),
            columns: self.columns.clone(),
            rows,
        }
    }

    //percentage change between consecutive rows
    //the first row is defined as zero for every column; a change with a
    //missing endpoint stays missing
    pub fn pct_change(&self) -> Self {
        let mut rows: Vec<Vec<Option<f64>>> = Vec::with_capacity(self.rows.len());

        for (i, row) in self.rows.iter().enumerate() {
            if i == 0 {
                rows.push(vec![Some(0.0); self.columns.len()]);
                continue;
            }

            let changed = row
                .iter()
                .zip(self.rows[i - 1].iter())
                .map(|(curr, prev)| match (curr, prev) {
                    (Some(c), Some(p)) => Some((c - p) / p),
                    _ => None,
                })
                .collect();
            rows.push(changed);
        }

        DateFrame {
            dates: self.dates.clone(),
            columns: self.columns.clone(),
            rows,
        }
    }

    //replaces missing cells with a fixed value
    pub fn fill_missing(&self, fill: f64) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| Some(cell.unwrap_or(fill))).collect())
            .collect();

        DateFrame {
            dates: self.dates.clone(),
            columns: self.columns.clone(),
            rows,
        }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    //symbols in column order
    pub fn symbols(&self) -> Vec<&str> {
        self.columns.keys().map(|s| s.as_str()).collect()
    }

    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> &[Option<f64>] {
        &self.rows[index]
    }

    //cell lookup by row index and symbol name
    pub fn value_at(&self, row: usize, symbol: &str) -> Option<f64> {
        let col = *self.columns.get(symbol)?;
        self.rows.get(row)?.get(col).copied().flatten()
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
