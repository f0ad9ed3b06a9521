use super::*;

#[test]
fn zero_samples_map_to_first_cell() {
    let pos = position_from_unit(0.0, 0.0);
    assert_eq!((pos.grid_column, pos.grid_row), (Some(1), Some(1)));
}

#[test]
fn samples_near_one_map_to_last_cell() {
    let pos = position_from_unit(0.999_999, 0.999_999);
    assert_eq!((pos.grid_column, pos.grid_row), (Some(5), Some(3)));
}

#[test]
fn out_of_range_samples_are_clamped() {
    let pos = position_from_unit(1.0, f64::NAN);
    assert_eq!((pos.grid_column, pos.grid_row), (Some(5), Some(1)));
    let pos = position_from_unit(-3.0, 7.0);
    assert_eq!((pos.grid_column, pos.grid_row), (Some(1), Some(3)));
}

#[test]
fn every_cell_is_reachable() {
    let mut seen = std::collections::HashSet::new();
    for c in 0..GRID_COLUMNS {
        for r in 0..GRID_ROWS {
            let pos = position_from_unit(
                (f64::from(c) + 0.5) / f64::from(GRID_COLUMNS),
                (f64::from(r) + 0.5) / f64::from(GRID_ROWS),
            );
            seen.insert((pos.grid_column.unwrap(), pos.grid_row.unwrap()));
        }
    }
    assert_eq!(seen.len(), 15);
}

#[test]
fn random_position_is_in_range() {
    let pos = random_position();
    assert!((1..=GRID_COLUMNS).contains(&pos.grid_column.unwrap()));
    assert!((1..=GRID_ROWS).contains(&pos.grid_row.unwrap()));
}
