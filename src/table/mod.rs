//! A table is an ordered sequence of named columns of equal length.
//! Columns can hold integers, reals or text, all are seen as reals when the table
//! is coerced to a matrix for reduction.

pub mod column;
pub mod io;

pub use column::{Column, ColumnData};

use ndarray::{Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{ReduceError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
    // common length of columns
    nrow: usize,
}

impl Table {
    /// an empty table, 0 row and 0 column
    pub fn new() -> Self {
        Table::default()
    }

    /// builds a table checking all columns have the same length and distinct names
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut table = Table::new();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    /// builds a table from a (nrow, ncol) matrix. Columns are named V1, V2 ... if names is None
    pub fn from_array(data: ArrayView2<f64>, names: Option<&[&str]>) -> Result<Self> {
        let (nrow, ncol) = data.dim();
        if let Some(names) = names {
            if names.len() != ncol {
                return Err(ReduceError::NameCount {
                    expected: ncol,
                    got: names.len(),
                });
            }
        }
        let mut columns = Vec::<Column>::with_capacity(ncol);
        for (j, col) in data.columns().into_iter().enumerate() {
            let name = match names {
                Some(names) => names[j].to_string(),
                None => default_name(j),
            };
            columns.push(Column::new(&name, col.to_vec()));
        }
        let mut table = Table::from_columns(columns)?;
        // keep nrow when there is no column
        table.nrow = nrow;
        Ok(table)
    }

    /// adds a column at the end of the table.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.get_column(column.get_name()).is_some() {
            return Err(ReduceError::DuplicateColumn(column.get_name().to_string()));
        }
        if self.columns.is_empty() {
            self.nrow = column.len();
        } else if column.len() != self.nrow {
            return Err(ReduceError::Ragged {
                column: column.get_name().to_string(),
                expected: self.nrow,
                got: column.len(),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    pub fn get_nrows(&self) -> usize {
        self.nrow
    }

    pub fn get_ncols(&self) -> usize {
        self.columns.len()
    }

    /// returns (nrow, ncol)
    pub fn dim(&self) -> (usize, usize) {
        (self.nrow, self.columns.len())
    }

    pub fn get_columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.get_name() == name)
    }

    pub fn get_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.get_name()).collect()
    }

    /// coerce table to a (nrow, ncol) matrix of reals.
    pub fn to_matrix(&self) -> Result<Array2<f64>> {
        let (nrow, ncol) = self.dim();
        let mut matrix = Array2::<f64>::zeros((nrow, ncol));
        // one buffer for all columns
        let mut values = Vec::<f64>::with_capacity(nrow);
        for (j, column) in self.columns.iter().enumerate() {
            values.clear();
            column.fill_real(&mut values)?;
            matrix.column_mut(j).assign(&ArrayView1::from(&values));
        }
        Ok(matrix)
    }

    /// returns the transposed table, row i becomes a real column named V{i+1}.
    pub fn transpose(&self) -> Result<Table> {
        let matrix = self.to_matrix()?;
        Table::from_array(matrix.t(), None)
    }
} // end of impl Table

// R style default column names
fn default_name(j: usize) -> String {
    format!("V{}", j + 1)
}

//========================================================
