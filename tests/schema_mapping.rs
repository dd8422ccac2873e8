use allotment::schema::{
    ALLOCATION_FIELDS, AllocationRecord, STATION_FIELDS, clean_header, map_allocation_row, map_station_row,
};

fn allocation_row() -> Vec<Option<&'static str>> {
    vec![
        Some("OK"), Some("CDG"), Some("Feb"), Some("VN011"), Some("EU"), Some("SGNCDG"),
        Some("A350"), Some("D1"), Some("2"), Some("WB"), Some("1,500"), Some("3,000"),
        Some("1.85"), Some("2.10"), Some("6,300"),
    ]
}

#[test]
fn allocation_row_maps_positionally() {
    let record = map_allocation_row(&allocation_row());
    assert_eq!(record.sts.as_deref(), Some("OK"));
    assert_eq!(record.flight_no.as_deref(), Some("VN011"));
    assert_eq!(record.sector.as_deref(), Some("SGNCDG"));
    assert_eq!(record.day_of_week.as_deref(), Some("D1"));
    assert_eq!(record.aircraft_type.as_deref(), Some("WB"));
    assert_eq!(record.allocated_position, Some(2.0));
    assert_eq!(record.chargeable_weight_position, Some(1500.0));
    assert_eq!(record.total_chargeable_weight, Some(3000.0));
    assert_eq!(record.net_rate_usd, Some(1.85));
    assert_eq!(record.all_in_rate, Some(2.10));
    assert_eq!(record.revenue, Some(6300.0));
}

#[test]
fn serialized_allocation_has_exactly_the_schema_fields() {
    let record = map_allocation_row(&allocation_row());
    let json = serde_json::to_value(&record).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 15);
    for field in ALLOCATION_FIELDS.iter() {
        assert!(object.contains_key(field.name), "missing {}", field.name);
    }
    // numeric fields are numbers or null, never strings
    for name in ["allocatedPosition", "chargeableWeightPosition", "totalChargeableWeight", "netRateUsd", "allInRate", "revenue"] {
        assert!(object[name].is_number() || object[name].is_null(), "{name} is {:?}", object[name]);
    }
}

#[test]
fn extra_columns_are_dropped() {
    let mut row = allocation_row();
    row.push(Some("annotation"));
    row.push(Some("999"));
    assert_eq!(row.len(), 17);
    assert_eq!(map_allocation_row(&row), map_allocation_row(&allocation_row()));
}

#[test]
fn short_rows_are_padded_with_null() {
    let record = map_allocation_row(&[Some("OK"), Some("CDG"), Some("Jan")]);
    assert_eq!(record.month.as_deref(), Some("Jan"));
    assert_eq!(record.flight_no, None);
    assert_eq!(record.revenue, None);
}

#[test]
fn bad_numbers_become_null() {
    let mut row = allocation_row();
    row[8] = Some("TBA");
    row[14] = None;
    let record = map_allocation_row(&row);
    assert_eq!(record.allocated_position, None);
    assert_eq!(record.revenue, None);
    let json = serde_json::to_value(&record).unwrap();
    assert!(json["allocatedPosition"].is_null());
}

#[test]
fn station_row_has_four_fields() {
    let record = map_station_row(&[Some("EUROPE"), Some("SGNCDG"), Some("CDG"), None, Some("extra")]);
    assert_eq!(record.group.as_deref(), Some("EUROPE"));
    assert_eq!(record.station.as_deref(), Some("CDG"));
    assert_eq!(record.note, None);
    let json = serde_json::to_value(&record).unwrap();
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), STATION_FIELDS.len());
}

#[test]
fn headers_lose_padding_and_quotes() {
    assert_eq!(clean_header("  \"Group\" "), "Group");
    assert_eq!(clean_header("Sector"), "Sector");
    assert_eq!(clean_header("\"Ghi chú\""), "Ghi chú");
}

#[test]
fn records_round_trip_through_json_names() {
    let json = r#"{"sts":null,"dest":"CDG","month":"Feb","flightNo":"VN011","marketSegment":null,
        "sector":"SGNCDG","aircraft":null,"dayOfWeek":"D1","allocatedPosition":1.0,"aircraftType":null,
        "chargeableWeightPosition":null,"totalChargeableWeight":null,"netRateUsd":null,"allInRate":null,"revenue":10.0}"#;
    let record: AllocationRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.flight_no.as_deref(), Some("VN011"));
    assert_eq!(record.revenue, Some(10.0));
}
