use fleet_usage::dataset::DatasetStore;
use tempfile::TempDir;

mod common;

#[tokio::test]
async fn test_import_replaces_dataset_wholesale() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().join("data");
    let store = DatasetStore::with_data_dir(data_dir);

    common::create_test_csv(temp_dir.path(), "first.csv", common::SAMPLE_CSV)?;
    common::create_test_csv(
        temp_dir.path(),
        "second.csv",
        "license_plate,driver,start_odometer,end_odometer,fuel_cost,planned_days\n\
         P9,Zoe,0,50,5,1\n",
    )?;

    store.import(&temp_dir.path().join("first.csv")).await?;
    assert_eq!(store.load().await?.len(), 4);

    // No merge: the second import fully supersedes the first
    store.import(&temp_dir.path().join("second.csv")).await?;
    let records = store.load().await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].license_plate.as_deref(), Some("P9"));

    Ok(())
}

#[tokio::test]
async fn test_failed_import_preserves_previous_dataset() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().join("data");
    let store = DatasetStore::with_data_dir(data_dir);

    common::create_test_csv(temp_dir.path(), "good.csv", common::SAMPLE_CSV)?;
    common::create_test_csv(
        temp_dir.path(),
        "bad.csv",
        "license_plate,driver,start_odometer,end_odometer,fuel_cost,planned_days\n\
         P1,Alice,not-a-number,150,20,2\n",
    )?;

    store.import(&temp_dir.path().join("good.csv")).await?;
    assert!(store.import(&temp_dir.path().join("bad.csv")).await.is_err());

    // The previously loaded dataset remains usable
    assert_eq!(store.load().await?.len(), 4);

    Ok(())
}

#[tokio::test]
async fn test_load_without_import_is_empty() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = DatasetStore::with_data_dir(temp_dir.path().join("data"));

    assert!(store.load().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_load_discovers_stray_csv() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().join("data");
    std::fs::create_dir_all(&data_dir)?;
    common::create_test_csv(&data_dir, "export-2025-01-01.csv", common::SAMPLE_CSV)?;

    let store = DatasetStore::with_data_dir(data_dir);
    assert_eq!(store.load().await?.len(), 4);

    Ok(())
}

#[tokio::test]
async fn test_import_normalizes_to_canonical_csv() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().join("data");
    let store = DatasetStore::with_data_dir(data_dir);

    // Extra columns and padding survive parsing but not normalization
    common::create_test_csv(
        temp_dir.path(),
        "messy.csv",
        "license_plate,driver,start_odometer,end_odometer,fuel_cost,planned_days,notes\n\
         P1 , Alice ,100,150,20,2,scratch on door\n",
    )?;

    let imported = store.import(&temp_dir.path().join("messy.csv")).await?;
    assert_eq!(imported[0].license_plate.as_deref(), Some("P1"));

    let stored = std::fs::read_to_string(store.dataset_path())?;
    assert!(stored.starts_with("license_plate,driver"));
    assert!(!stored.contains("notes"));

    Ok(())
}
