use fleet_usage::display::DisplayManager;
use fleet_usage::models::{EntitySummary, RawRecord};

fn test_rows() -> Vec<EntitySummary> {
    vec![
        EntitySummary {
            key: "P1".to_string(),
            total_cost: 75.0,
            total_distance: 110.0,
            trip_count: None,
            trip_days: None,
            cost_per_distance: 75.0 / 110.0,
            associate_label: "Alice".to_string(),
        },
        EntitySummary {
            key: "P2".to_string(),
            total_cost: 10.0,
            total_distance: 0.0,
            trip_count: None,
            trip_days: None,
            cost_per_distance: 10.0,
            associate_label: String::new(),
        },
    ]
}

#[test]
fn test_display_manager() {
    let display_manager = DisplayManager::new();
    let rows = test_rows();

    // Display methods must not panic in either output mode
    display_manager.display_vehicles(&rows, Some(5), true);
    display_manager.display_vehicles(&rows, Some(5), false);
    display_manager.display_drivers(&rows, None, true);
    display_manager.display_drivers(&rows, None, false);
}

#[test]
fn test_display_raw_handles_blank_cells() {
    let display_manager = DisplayManager::new();
    let records = vec![RawRecord {
        license_plate: None,
        driver: None,
        start_odometer: None,
        end_odometer: None,
        fuel_cost: None,
        planned_days: None,
    }];

    display_manager.display_raw(&records, None, true);
    display_manager.display_raw(&records, None, false);
}

#[test]
fn test_display_limit_truncates() {
    let display_manager = DisplayManager::new();
    let rows = test_rows();

    // Limit larger than the table and a zero limit are both fine
    display_manager.display_vehicles(&rows, Some(100), true);
    display_manager.display_vehicles(&rows, Some(0), true);
}
