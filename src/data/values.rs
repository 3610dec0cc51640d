/// How error values are produced on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Errors come from explicitly stored values (NaN until supplied).
    #[default]
    Explicit,
    /// Errors are `sqrt(|value|)`, recomputed on every read. Stored explicit
    /// values are kept untouched while this mode is active.
    SquareRoot,
}

/// Row-major `points x frames` matrix of values with a matching error matrix.
///
/// Callers validate indices; the grid itself only indexes.
#[derive(Debug, Clone)]
pub(crate) struct ValueGrid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
    errors: Vec<f64>,
    mode: ErrorMode,
}

impl ValueGrid {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        let len = rows * cols;
        Self {
            rows,
            cols,
            values: vec![0.0; len],
            errors: vec![f64::NAN; len],
            mode: ErrorMode::Explicit,
        }
    }

    pub(crate) const fn mode(&self) -> ErrorMode {
        self.mode
    }

    pub(crate) fn set_square_root(&mut self, enabled: bool) {
        self.mode = if enabled {
            ErrorMode::SquareRoot
        } else {
            ErrorMode::Explicit
        };
    }

    const fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> f64 {
        self.values[self.offset(row, col)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        let idx = self.offset(row, col);
        self.values[idx] = value;
    }

    pub(crate) fn row(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.values[start..start + self.cols]
    }

    /// Copy the leading `cols` entries of `values` into `row`.
    pub(crate) fn set_row(&mut self, row: usize, values: &[f64]) {
        let start = self.offset(row, 0);
        self.values[start..start + self.cols].copy_from_slice(&values[..self.cols]);
    }

    pub(crate) fn column(&self, col: usize) -> Vec<f64> {
        (0..self.rows).map(|row| self.get(row, col)).collect()
    }

    /// Copy the leading `rows` entries of `values` into `col`.
    pub(crate) fn set_column(&mut self, col: usize, values: &[f64]) {
        for (row, &value) in values.iter().take(self.rows).enumerate() {
            self.set(row, col, value);
        }
    }

    /// Copy consecutive whole rows, starting at `first_row`, from a flat
    /// row-major slice.
    pub(crate) fn set_rows_flat(&mut self, first_row: usize, values: &[f64]) {
        let start = self.offset(first_row, 0);
        self.values[start..start + values.len()].copy_from_slice(values);
    }

    pub(crate) fn fill(&mut self, value: f64) {
        self.values.fill(value);
    }

    pub(crate) fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn rows_to_vecs(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|row| self.row(row).to_vec()).collect()
    }

    fn derive_error(&self, idx: usize) -> f64 {
        match self.mode {
            ErrorMode::Explicit => self.errors[idx],
            ErrorMode::SquareRoot => self.values[idx].abs().sqrt(),
        }
    }

    pub(crate) fn error(&self, row: usize, col: usize) -> f64 {
        self.derive_error(self.offset(row, col))
    }

    pub(crate) fn error_row(&self, row: usize) -> Vec<f64> {
        (0..self.cols).map(|col| self.error(row, col)).collect()
    }

    pub(crate) fn error_column(&self, col: usize) -> Vec<f64> {
        (0..self.rows).map(|row| self.error(row, col)).collect()
    }

    pub(crate) fn errors_flat(&self) -> Vec<f64> {
        (0..self.errors.len()).map(|idx| self.derive_error(idx)).collect()
    }

    pub(crate) fn errors_to_vecs(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|row| self.error_row(row)).collect()
    }

    /// Forget the explicit errors of one row.
    pub(crate) fn clear_error_row(&mut self, row: usize) {
        let start = self.offset(row, 0);
        self.errors[start..start + self.cols].fill(f64::NAN);
    }

    /// Best-effort copy of a flat error slice; entries past the input stay NaN.
    ///
    /// Switches to [`ErrorMode::Explicit`] and returns whether the input
    /// length matched the grid exactly.
    pub(crate) fn set_errors_flat(&mut self, errors: &[f64]) -> bool {
        self.errors.fill(f64::NAN);
        let n = errors.len().min(self.errors.len());
        self.errors[..n].copy_from_slice(&errors[..n]);
        self.mode = ErrorMode::Explicit;
        errors.len() == self.errors.len()
    }

    /// Best-effort copy of per-row error slices, the 2-D form of
    /// [`ValueGrid::set_errors_flat`].
    pub(crate) fn set_errors_rows<R: AsRef<[f64]>>(&mut self, rows: &[R]) -> bool {
        self.errors.fill(f64::NAN);
        let mut exact = rows.len() == self.rows;
        for (row, input) in rows.iter().take(self.rows).enumerate() {
            let input = input.as_ref();
            exact &= input.len() == self.cols;
            let n = input.len().min(self.cols);
            let start = self.offset(row, 0);
            self.errors[start..start + n].copy_from_slice(&input[..n]);
        }
        self.mode = ErrorMode::Explicit;
        exact
    }
}

/// Smallest and largest non-NaN value, `None` when every value is NaN.
pub(crate) fn finite_range<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_errors_start_as_nan() {
        let grid = ValueGrid::new(2, 3);
        assert_eq!(grid.mode(), ErrorMode::Explicit);
        assert!(grid.errors_flat().iter().all(|e| e.is_nan()));
        assert_eq!(grid.as_slice(), &[0.0; 6]);
    }

    #[test]
    fn rows_and_columns_address_the_same_cells() {
        let mut grid = ValueGrid::new(2, 3);
        grid.set_row(1, &[1.0, 2.0, 3.0, 99.0]);
        grid.set_column(0, &[7.0, 8.0]);
        assert_eq!(grid.row(1), &[8.0, 2.0, 3.0]);
        assert_eq!(grid.column(0), vec![7.0, 8.0]);
        assert_eq!(grid.get(1, 2), 3.0);
        assert_eq!(grid.rows_to_vecs(), vec![vec![7.0, 0.0, 0.0], vec![8.0, 2.0, 3.0]]);
    }

    #[test]
    fn oversized_error_rows_are_truncated_and_flagged() {
        let mut grid = ValueGrid::new(2, 2);
        let exact = grid.set_errors_rows(&[vec![0.1, 0.2, 0.3], vec![0.4]]);
        assert!(!exact);
        assert_eq!(grid.error(0, 0), 0.1);
        assert_eq!(grid.error(0, 1), 0.2);
        assert_eq!(grid.error(1, 0), 0.4);
        assert!(grid.error(1, 1).is_nan());
    }

    #[test]
    fn finite_range_ignores_nan() {
        assert_eq!(finite_range([f64::NAN, 2.0, -1.0, 5.0]), Some((-1.0, 5.0)));
        assert_eq!(finite_range([f64::NAN]), None);
    }
}
