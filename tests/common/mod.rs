use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_actions(path: &Path, rows: &[[&str; 4]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "amount", "currency", "purpose"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn generate_deposits(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "amount", "currency", "purpose"])?;
    wtr.write_record(["open", "", "", ""])?;
    for _ in 0..rows {
        wtr.write_record(["deposit", "1.0", "USD", ""])?;
    }

    wtr.flush()?;
    Ok(())
}
