//! a named column of a table

use serde::{Deserialize, Serialize};

use crate::error::{ReduceError, Result};

/// values stored in a column. Integers and reals are numeric, text is parsed when coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    Int(Vec<i64>),
    Real(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Real(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<i64>> for ColumnData {
    fn from(v: Vec<i64>) -> Self {
        ColumnData::Int(v)
    }
}

impl From<Vec<f64>> for ColumnData {
    fn from(v: Vec<f64>) -> Self {
        ColumnData::Real(v)
    }
}

impl From<Vec<String>> for ColumnData {
    fn from(v: Vec<String>) -> Self {
        ColumnData::Text(v)
    }
}

//====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new(name: &str, data: impl Into<ColumnData>) -> Self {
        Column {
            name: name.to_string(),
            data: data.into(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_data(&self) -> &ColumnData {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// returns values promoted to f64. Text cells must parse as a real number.
    pub fn to_real(&self) -> Result<Vec<f64>> {
        let mut values = Vec::<f64>::with_capacity(self.len());
        self.fill_real(&mut values)?;
        Ok(values)
    }

    /// appends values promoted to f64 to `values`
    pub(crate) fn fill_real(&self, values: &mut Vec<f64>) -> Result<()> {
        match &self.data {
            ColumnData::Int(v) => values.extend(v.iter().map(|x| *x as f64)),
            ColumnData::Real(v) => values.extend_from_slice(v),
            ColumnData::Text(v) => {
                for (row, cell) in v.iter().enumerate() {
                    let val = cell.trim().parse::<f64>().map_err(|_| {
                        log::debug!("column {} row {} : cannot parse {:?}", self.name, row, cell);
                        ReduceError::NonNumeric {
                            column: self.name.clone(),
                            row,
                            value: cell.clone(),
                        }
                    })?;
                    values.push(val);
                }
            }
        }
        Ok(())
    }
} // end of impl Column
