use roster_core::error::RosterError;
use roster_core::{search, IngestOptions, SearchColumn, SearchOutcome, SearchQuery};
use std::path::PathBuf;

use crate::output;

pub fn run(
    files: &[PathBuf],
    options: &IngestOptions,
    column: SearchColumn,
    term: Option<&str>,
    output_format: &str,
    show_schema: bool,
) -> Result<(), RosterError> {
    let report = super::upload(files, options);

    if show_schema && output_format != "json" {
        super::schema::print_example();
        println!();
    }

    // No term: nothing to search, nothing to say
    let Some(query) = term.and_then(|t| SearchQuery::new(column, t)) else {
        return Ok(());
    };

    match search(&report.combined, &query) {
        Ok(SearchOutcome::NoData) => {
            eprintln!("No data loaded - please upload files first");
        }
        Ok(SearchOutcome::NoMatches) => {
            eprintln!("No matching records found");
        }
        Ok(SearchOutcome::Found(result)) => match output_format {
            "json" => output::json::print(&result.table)?,
            _ => {
                println!("Found {} matching records:", result.count());
                print!("{}", output::table::format_table(&result.table, true));
            }
        },
        // Column lookups are reported, not fatal
        Err(e @ RosterError::ColumnNotFound(_)) => {
            eprintln!("{e}");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
