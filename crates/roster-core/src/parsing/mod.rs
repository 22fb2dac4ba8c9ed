pub mod normalize;

/// Split a line by gaps of 2+ whitespace characters, returning each segment
/// with the character column it starts at.
///
/// `pdftotext -layout` keeps table columns apart with runs of spaces while
/// words inside a cell are separated by a single space.
pub fn split_with_offsets(line: &str) -> Vec<(usize, &str)> {
    let mut segments = Vec::new();
    // (character column, byte offset) of the segment being read
    let mut start: Option<(usize, usize)> = None;
    let mut end = 0;
    let mut space_count = 0;

    for (col, (i, c)) in line.char_indices().enumerate() {
        if c.is_whitespace() {
            space_count += 1;
            if space_count == 2 {
                if let Some((start_col, s)) = start.take() {
                    segments.push((start_col, &line[s..end]));
                }
            }
        } else {
            if start.is_none() {
                start = Some((col, i));
            }
            space_count = 0;
            end = i + c.len_utf8();
        }
    }

    if let Some((start_col, s)) = start {
        segments.push((start_col, &line[s..end]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<&str> {
        split_with_offsets(line).into_iter().map(|(_, s)| s).collect()
    }

    #[test]
    fn test_split_with_offsets() {
        let segments = split_with_offsets("  1     ALI     Adnan     9/6/2007");
        assert_eq!(
            segments,
            vec![(2, "1"), (8, "ALI"), (16, "Adnan"), (26, "9/6/2007")]
        );
    }

    #[test]
    fn test_single_spaces_stay_inside_cell() {
        let segments = texts("Roll No   Father Name   Gender");
        assert_eq!(segments, vec!["Roll No", "Father Name", "Gender"]);
    }

    #[test]
    fn test_tabs_count_as_gap() {
        assert_eq!(texts("Name\t\tGender"), vec!["Name", "Gender"]);
    }

    #[test]
    fn test_offsets_are_character_columns() {
        let segments = split_with_offsets("Zoë   Müller    Male  ");
        assert_eq!(segments, vec![(0, "Zoë"), (6, "Müller"), (16, "Male")]);
    }

    #[test]
    fn test_blank_line() {
        assert!(split_with_offsets("     ").is_empty());
    }
}
