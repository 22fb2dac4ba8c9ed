use roster_core::error::RosterError;
use roster_core::example_table;

use crate::output;

pub fn run() -> Result<(), RosterError> {
    print_example();
    Ok(())
}

pub fn print_example() {
    println!("Expected data format:\n");
    print!("{}", output::table::format_table(&example_table(), false));
}
