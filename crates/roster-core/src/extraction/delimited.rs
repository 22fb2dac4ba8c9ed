use crate::error::RosterError;
use crate::model::NormalizedTable;
use crate::parsing::normalize::header_names;

/// Read a delimited text file into a table of strings.
///
/// The first record is the header. Records shorter than the header are
/// padded with empty cells; a record with more fields than the header is
/// rejected.
pub fn read_delimited(bytes: &[u8], delimiter: u8) -> Result<NormalizedTable, RosterError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(RosterError::Csv("no columns to parse from file".into()));
    }
    let columns = header_names(headers.iter());

    let mut table = NormalizedTable::new(columns);
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() > table.columns().len() {
            return Err(RosterError::Csv(format!(
                "expected {} fields in line {}, saw {}",
                table.columns().len(),
                i + 2,
                record.len()
            )));
        }
        table.push_row(record.iter().map(str::to_string).collect());
    }

    Ok(table)
}
