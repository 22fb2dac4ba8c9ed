use crate::model::NormalizedTable;

const COLUMNS: [&str; 6] = ["Roll No", "Name", "Father Name", "D.O.B", "Gender", "Section"];

const ROWS: [[&str; 6]; 4] = [
    ["1", "ALI", "Adnan", "9/6/2007", "Male", "F"],
    ["2", "SANA", "Usman", "15/3/2008", "Female", "A"],
    ["3", "AHMED", "Zubair", "22/11/2007", "Male", "B"],
    ["4", "FATIMA", "Kamran", "5/5/2009", "Female", "C"],
];

/// Example of the expected upload format. Shown to users as documentation;
/// uploads are never validated against it.
pub fn example_table() -> NormalizedTable {
    NormalizedTable::from_rows(
        COLUMNS.iter().map(|c| c.to_string()).collect(),
        ROWS.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}
