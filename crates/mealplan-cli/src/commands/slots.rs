use anyhow::Result;

use crate::output::format::format_slots;
use crate::output::OutputFormat;

pub fn run(format: OutputFormat) -> Result<()> {
    print!("{}", format_slots(format));
    if matches!(format, OutputFormat::Json) {
        println!();
    }
    Ok(())
}
