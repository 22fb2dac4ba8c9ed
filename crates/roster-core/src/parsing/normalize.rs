use crate::model::NormalizedTable;

/// Normalize a column name: trim surrounding whitespace, then title-case it.
///
/// "roll no", " ROLL NO " and "Roll No" all become "Roll No".
pub fn normalize_column_name(raw: &str) -> String {
    title_case(raw.trim())
}

/// Title-case a string word by word.
///
/// The first letter of every run of letters is upper-cased and the rest of
/// the run lower-cased. Anything that is not a letter (space, digit,
/// punctuation) ends the run, so "d.o.b" becomes "D.O.B" and "2nd" becomes
/// "2Nd".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Apply [`normalize_column_name`] to every column of the table.
pub fn normalize_columns(table: &mut NormalizedTable) {
    table.rename_columns(normalize_column_name);
}

/// Header cells read from a file, with blank headers replaced by
/// `Unnamed: N` (N is the zero-based column position).
pub fn header_names<I, S>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cells
        .into_iter()
        .enumerate()
        .map(|(i, cell)| {
            let name = cell.as_ref().trim();
            if name.is_empty() {
                format!("Unnamed: {i}")
            } else {
                name.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_basic() {
        assert_eq!(title_case("roll no"), "Roll No");
        assert_eq!(title_case("ROLL NO"), "Roll No");
        assert_eq!(title_case("father name"), "Father Name");
        assert_eq!(title_case("fAtHeR nAmE"), "Father Name");
    }

    #[test]
    fn test_title_case_punctuation_and_digits() {
        assert_eq!(title_case("d.o.b"), "D.O.B");
        assert_eq!(title_case("roll_no"), "Roll_No");
        assert_eq!(title_case("2nd section"), "2Nd Section");
        assert_eq!(title_case("o'neil"), "O'Neil");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_column_name("  gender \t"), "Gender");
        assert_eq!(normalize_column_name(""), "");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let names = ["roll no", " NAME ", "father name", "d.o.b", "Unnamed: 3", "ÉCOLE élève"];
        for name in names {
            let once = normalize_column_name(name);
            assert_eq!(normalize_column_name(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn test_header_names_fill_blanks() {
        let names = header_names(["roll no", " ", "name"]);
        assert_eq!(names, vec!["roll no", "Unnamed: 1", "name"]);
    }

    #[test]
    fn test_normalize_columns_on_table() {
        let mut table = NormalizedTable::new(vec!["roll no".into(), " GENDER".into()]);
        normalize_columns(&mut table);
        assert_eq!(table.columns(), ["Roll No", "Gender"]);
    }
}
