//! Reduction of a table to one statistic per column or per row.

use ndarray::{ArrayView1, ArrayView2};

use rayon::prelude::*;

use crate::error::{ReduceError, Result};
use crate::stats::{Median, Statistic};
use crate::table::Table;

use super::params::{Axis, IterStyle, ReducerParams};

/// Computes a statistic on each lane (column or row) of a table.
/// The result has one value per lane, in lane order, without names.
pub struct AxisReducer<S: Statistic = Median> {
    statistic: S,
    params: ReducerParams,
}

impl AxisReducer<Median> {
    /// a median reducer
    pub fn new(params: ReducerParams) -> Self {
        AxisReducer {
            statistic: Median,
            params,
        }
    }
}

impl<S: Statistic> AxisReducer<S> {
    pub fn with_statistic(statistic: S, params: ReducerParams) -> Self {
        AxisReducer { statistic, params }
    }

    pub fn get_params(&self) -> &ReducerParams {
        &self.params
    }

    /// Coerce table to reals and reduce it.
    /// Returns InvalidShape if the table has no row or no column, NonNumeric if a cell is not a real.
    pub fn reduce(&self, table: &Table) -> Result<Vec<f64>> {
        let (nrow, ncol) = table.dim();
        if nrow == 0 || ncol == 0 {
            log::error!("cannot reduce table of shape ({}, {})", nrow, ncol);
            return Err(ReduceError::InvalidShape { nrow, ncol });
        }
        let matrix = table.to_matrix()?;
        self.reduce_matrix(matrix.view())
    }

    /// reduce a (nrow, ncol) matrix
    pub fn reduce_matrix(&self, matrix: ArrayView2<f64>) -> Result<Vec<f64>> {
        let (nrow, ncol) = matrix.dim();
        if nrow == 0 || ncol == 0 {
            return Err(ReduceError::InvalidShape { nrow, ncol });
        }
        let axis = self.params.get_axis();
        log::debug!(
            "computing {} by {:?} on ({}, {}) with {:?}",
            self.statistic.name(),
            axis,
            nrow,
            ncol,
            self.params.get_style()
        );
        let reduced = match self.params.get_style() {
            IterStyle::Function => self.reduce_function(matrix, axis),
            IterStyle::Loop => self.reduce_loop(matrix, axis),
            IterStyle::Map => self.reduce_map(matrix, axis),
            IterStyle::Parallel => self.reduce_parallel(matrix, axis),
        };
        Ok(reduced)
    } // end of reduce_matrix

    // statistic of one lane. Lanes can be strided so we copy in a work vector
    fn lane_statistic(&self, lane: ArrayView1<f64>) -> f64 {
        let mut values = lane.to_vec();
        self.statistic.compute(&mut values)
    }

    // statistic of lane i
    fn lane_at(&self, matrix: ArrayView2<f64>, axis: Axis, i: usize) -> f64 {
        self.lane_statistic(matrix.index_axis(axis.output_axis(), i))
    }

    // the range iterator is ExactSize, collect allocates once
    fn reduce_function(&self, matrix: ArrayView2<f64>, axis: Axis) -> Vec<f64> {
        let nb_lanes = matrix.len_of(axis.output_axis());
        (0..nb_lanes)
            .map(|i| self.lane_at(matrix, axis, i))
            .collect()
    }

    #[allow(clippy::needless_range_loop)]
    fn reduce_loop(&self, matrix: ArrayView2<f64>, axis: Axis) -> Vec<f64> {
        let nb_lanes = matrix.len_of(axis.output_axis());
        let lane_len = matrix.len_of(axis.lane_axis());
        let mut reduced = vec![0.; nb_lanes];
        // one work buffer for all lanes
        let mut values = Vec::<f64>::with_capacity(lane_len);
        for i in 0..nb_lanes {
            values.clear();
            values.extend(matrix.index_axis(axis.output_axis(), i).iter());
            reduced[i] = self.statistic.compute(&mut values);
        }
        reduced
    }

    fn reduce_map(&self, matrix: ArrayView2<f64>, axis: Axis) -> Vec<f64> {
        matrix
            .map_axis(axis.lane_axis(), |lane| self.lane_statistic(lane))
            .to_vec()
    }

    // collect_into_vec keeps the exact capacity allocated here
    fn reduce_parallel(&self, matrix: ArrayView2<f64>, axis: Axis) -> Vec<f64> {
        let nb_lanes = matrix.len_of(axis.output_axis());
        let mut reduced = Vec::<f64>::with_capacity(nb_lanes);
        matrix
            .axis_iter(axis.output_axis())
            .into_par_iter()
            .map(|lane| self.lane_statistic(lane))
            .collect_into_vec(&mut reduced);
        reduced
    }
} // end of impl AxisReducer

/// Median of each column (by_row = false) or each row (by_row = true) of table.
pub fn reduce(table: &Table, by_row: bool) -> Result<Vec<f64>> {
    let params = ReducerParams::default().with_axis(Axis::from(by_row));
    AxisReducer::new(params).reduce(table)
}

//========================================================

#[cfg(test)]
mod tests {

    use super::*;

    use crate::stats::Mean;
    use crate::table::Column;

    use ndarray::{Array2, array};
    use rand::prelude::*;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const STYLES: [IterStyle; 4] = [
        IterStyle::Function,
        IterStyle::Loop,
        IterStyle::Map,
        IterStyle::Parallel,
    ];

    fn lesson_table() -> Table {
        Table::from_columns(vec![
            Column::new("a", vec![53_i64, 1, 51, 23, 28, 12, 87, 0, 47]),
            Column::new("d", vec![5_i64; 9]),
            Column::new("e", (1..=9).map(|i| i as f64).collect::<Vec<f64>>()),
        ])
        .unwrap()
    }

    // random table of ints and reals, dimension drawn in 1..20
    fn random_table(rng: &mut Xoshiro256PlusPlus) -> Table {
        let nrow: usize = rng.random_range(1..20);
        let ncol: usize = rng.random_range(1..20);
        let mut columns = Vec::<Column>::with_capacity(ncol);
        for j in 0..ncol {
            let name = format!("c{}", j);
            let column = if j % 2 == 0 {
                Column::new(&name, (0..nrow).map(|_| rng.random_range(-50..50)).collect::<Vec<i64>>())
            } else {
                Column::new(&name, (0..nrow).map(|_| rng.random::<f64>() * 100.).collect::<Vec<f64>>())
            };
            columns.push(column);
        }
        Table::from_columns(columns).unwrap()
    }

    #[test]
    fn lesson_medians() {
        log_init_test();
        let table = lesson_table();
        assert_eq!(reduce(&table, false).unwrap(), vec![28., 5., 5.]);
        let by_row = reduce(&table, true).unwrap();
        assert_eq!(by_row.len(), 9);
        // row 0 is [53, 5, 1]
        assert_eq!(by_row[0], 5.);
        // row 7 is [0, 5, 8]
        assert_eq!(by_row[7], 5.);
    }

    #[test]
    fn single_column() {
        log_init_test();
        let table = Table::from_columns(vec![Column::new("x", vec![1_i64, 2, 3, 4, 5])]).unwrap();
        assert_eq!(reduce(&table, false).unwrap(), vec![3.]);
        let table = Table::from_columns(vec![Column::new("x", vec![1_i64, 2, 3, 4])]).unwrap();
        assert_eq!(reduce(&table, false).unwrap(), vec![2.5]);
    }

    #[test]
    fn by_row_two_columns() {
        log_init_test();
        let table = Table::from_array(array![[1., 3.], [2., 4.]].view(), None).unwrap();
        for style in STYLES {
            let reducer = AxisReducer::new(ReducerParams::new(Axis::Row, style));
            assert_eq!(reducer.reduce(&table).unwrap(), vec![2., 3.], "style {:?}", style);
        }
    }

    #[test]
    fn empty_table() {
        log_init_test();
        let table = Table::new();
        assert_eq!(
            reduce(&table, false),
            Err(ReduceError::InvalidShape { nrow: 0, ncol: 0 })
        );
        // columns without rows
        let table = Table::from_columns(vec![Column::new("x", Vec::<f64>::new())]).unwrap();
        assert_eq!(
            reduce(&table, true),
            Err(ReduceError::InvalidShape { nrow: 0, ncol: 1 })
        );
        // rows without columns
        let table = Table::from_array(Array2::<f64>::zeros((3, 0)).view(), None).unwrap();
        assert_eq!(
            reduce(&table, false),
            Err(ReduceError::InvalidShape { nrow: 3, ncol: 0 })
        );
    }

    #[test]
    fn non_numeric() {
        log_init_test();
        let table = Table::from_columns(vec![
            Column::new("x", vec![1., 2.]),
            Column::new("y", vec!["1".to_string(), "b".to_string()]),
        ])
        .unwrap();
        for by_row in [false, true] {
            assert_eq!(
                reduce(&table, by_row),
                Err(ReduceError::NonNumeric {
                    column: "y".to_string(),
                    row: 1,
                    value: "b".to_string()
                })
            );
        }
    }

    #[test]
    fn lengths_symmetry_and_styles() {
        log_init_test();
        log::info!("in lengths_symmetry_and_styles");
        //
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(234567_u64);
        for _ in 0..50 {
            let table = random_table(&mut rng);
            let (nrow, ncol) = table.dim();
            let by_col = reduce(&table, false).unwrap();
            let by_row = reduce(&table, true).unwrap();
            assert_eq!(by_col.len(), ncol);
            assert_eq!(by_row.len(), nrow);
            // row reduction is column reduction of transposed table
            let transposed = table.transpose().unwrap();
            assert_eq!(by_row, reduce(&transposed, false).unwrap());
            assert_eq!(by_col, reduce(&transposed, true).unwrap());
            // all iteration styles agree
            for style in STYLES {
                let reducer = AxisReducer::new(ReducerParams::new(Axis::Row, style));
                assert_eq!(reducer.reduce(&table).unwrap(), by_row);
                let reducer = AxisReducer::new(ReducerParams::new(Axis::Column, style));
                assert_eq!(reducer.reduce(&table).unwrap(), by_col);
            }
        }
    } // end of lengths_symmetry_and_styles

    #[test]
    fn result_is_presized() {
        log_init_test();
        let table = lesson_table();
        for style in STYLES {
            for axis in [Axis::Column, Axis::Row] {
                let reduced = AxisReducer::new(ReducerParams::new(axis, style))
                    .reduce(&table)
                    .unwrap();
                assert_eq!(reduced.capacity(), reduced.len(), "{:?} {:?}", axis, style);
            }
        }
        // small lane counts, where a growing vector would round capacity up
        for nb_lanes in 1..6 {
            let matrix = Array2::<f64>::from_shape_fn((3, nb_lanes), |(i, j)| (i * j) as f64);
            let reducer = AxisReducer::new(ReducerParams::new(Axis::Column, IterStyle::Parallel));
            let reduced = reducer.reduce_matrix(matrix.view()).unwrap();
            assert_eq!(reduced.len(), nb_lanes);
            assert_eq!(reduced.capacity(), nb_lanes);
        }
    }

    #[test]
    fn idempotent() {
        log_init_test();
        let table = lesson_table();
        let first = reduce(&table, true).unwrap();
        let second = reduce(&table, true).unwrap();
        assert_eq!(first, second);
        assert_eq!(table, lesson_table());
    }

    #[test]
    fn other_statistic() {
        log_init_test();
        let table = lesson_table();
        let reducer = AxisReducer::with_statistic(Mean, ReducerParams::default());
        assert_eq!(reducer.reduce(&table).unwrap(), vec![302. / 9., 5., 5.]);
    }
} // end of mod tests
