//! Table input/output.
//! - csv reading : first record gives column names. A column is typed Int if all its fields parse as i64,
//!   Real if they all parse as f64, Text otherwise.
//! - bincode dump and reload

use anyhow::anyhow;

use std::fs::OpenOptions;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use super::{Column, ColumnData, Table};

impl Table {
    /// reads a csv file with a header line
    pub fn from_csv(fname: &Path) -> anyhow::Result<Table> {
        let fileres = OpenOptions::new().read(true).open(fname);
        if fileres.is_err() {
            log::error!("from_csv could not open {:?}", fname.as_os_str());
            return Err(anyhow!("from_csv could not open file {}", fname.display()));
        }
        let bufreader = BufReader::new(fileres?);
        Table::from_csv_reader(bufreader)
    } // end of from_csv

    /// reads csv data with a header line from any reader
    pub fn from_csv_reader<R: Read>(reader: R) -> anyhow::Result<Table> {
        let mut rdr = csv::Reader::from_reader(reader);
        let names: Vec<String> = rdr.headers()?.iter().map(|s| s.trim().to_string()).collect();
        let nb_fields = names.len();
        // fields stored by column
        let mut fields: Vec<Vec<String>> = vec![Vec::new(); nb_fields];
        let mut num_record: usize = 0;
        for result in rdr.records() {
            let record = result?;
            num_record += 1;
            if record.len() != nb_fields {
                return Err(anyhow!(
                    "record {} has {} fields, expected {}",
                    num_record,
                    record.len(),
                    nb_fields
                ));
            }
            for (j, field) in record.iter().enumerate() {
                fields[j].push(field.trim().to_string());
            }
        }
        log::info!("csv : read {} records of {} fields", num_record, nb_fields);
        //
        let columns: Vec<Column> = names
            .iter()
            .zip(fields)
            .map(|(name, f)| Column::new(name, type_column(f)))
            .collect();
        let table = Table::from_columns(columns)?;
        Ok(table)
    } // end of from_csv_reader

    /// dump table in bincode format
    pub fn dump(&self, fname: &Path) -> anyhow::Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(fname)?;
        let bufw = BufWriter::new(file);
        bincode::serialize_into(bufw, self)?;
        log::debug!("table dumped in {}", fname.display());
        Ok(())
    }

    /// reload a table dumped by [Table::dump]
    pub fn reload(fname: &Path) -> anyhow::Result<Table> {
        let file = OpenOptions::new().read(true).open(fname)?;
        let table: Table = bincode::deserialize_from(BufReader::new(file))?;
        Ok(table)
    }
} // end of impl Table

// choose the narrowest type all fields fit in
fn type_column(fields: Vec<String>) -> ColumnData {
    if let Ok(ints) = fields.iter().map(|f| f.parse::<i64>()).collect::<Result<Vec<_>, _>>() {
        return ColumnData::Int(ints);
    }
    if let Ok(reals) = fields.iter().map(|f| f.parse::<f64>()).collect::<Result<Vec<_>, _>>() {
        return ColumnData::Real(reals);
    }
    ColumnData::Text(fields)
}

//========================================================
