use anyhow::Result;
use std::fs;
use std::path::Path;

#[allow(dead_code)]
pub fn create_test_csv(dir: &Path, filename: &str, content: &str) -> Result<()> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(())
}

/// Four-event sample dataset: P1 used twice by Alice and once by Bob,
/// P2 once by Alice with no distance covered.
#[allow(dead_code)]
pub const SAMPLE_CSV: &str = "\
license_plate,driver,start_odometer,end_odometer,fuel_cost,planned_days
P1,Alice,100,150,20,2
P1,Bob,150,200,30,1
P1,Alice,200,260,25,3
P2,Alice,0,0,10,1
";
