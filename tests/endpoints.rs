use std::fs;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use allotment::loader::Sources;
use allotment::server::{allocation_data, base_path, reload, router, station_data};
use allotment::service::{LoadPlan, QueryService};
use allotment::settings::ServerSettings;
use allotment::store::Store;

const ALLOCATION_CSV: &str = "STS,DEST,Month,Flight No,Segment,Sector,A/C,Dow,Pos,AC type,CW,Total CW,Net,All in,Revenue\n\
OK,CDG,Feb,VN011,EU,SGNCDG,A350,D1,abc,WB,\"1,500\",\"3,000\",1.85,2.10,\"6,300\"\n";

fn service_for(dir: &std::path::Path) -> QueryService {
    let sources = Sources { allocation: dir.join("allocation.csv"), station: dir.join("station.csv") };
    QueryService::new(Arc::new(Store::new()), LoadPlan { sources, ..LoadPlan::default() })
}

#[tokio::test]
async fn endpoints_serve_empty_arrays_before_any_load() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_for(dir.path());
    let Json(allocations) = allocation_data(State(service.clone())).await;
    let Json(stations) = station_data(State(service)).await;
    assert_eq!(serde_json::to_string(&allocations).unwrap(), "[]");
    assert_eq!(serde_json::to_string(&stations).unwrap(), "[]");
}

#[tokio::test]
async fn reload_swaps_in_new_data() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("allocation.csv"), ALLOCATION_CSV).unwrap();
    let service = service_for(dir.path());

    let Json(report) = reload(State(service.clone())).await.expect("reload ok");
    assert_eq!(report.allocation.records, 1);
    assert!(report.station.error.is_some());

    let Json(allocations) = allocation_data(State(service.clone())).await;
    let json = serde_json::to_value(&*allocations).unwrap();
    assert_eq!(json[0]["flightNo"], "VN011");
    assert_eq!(json[0]["revenue"], 6300.0);
    assert!(json[0]["allocatedPosition"].is_null());

    let Json(stations) = station_data(State(service)).await;
    assert!(stations.is_empty());
}

#[test]
fn base_paths_are_normalized() {
    assert_eq!(base_path("/api"), "/api");
    assert_eq!(base_path("api/"), "/api");
    assert_eq!(base_path(""), "/");
    assert_eq!(base_path("/"), "/");
}

#[test]
fn routers_build_for_any_base_path() {
    let dir = tempfile::tempdir().unwrap();
    for base in ["/api", "/", "v1/data"] {
        let settings = ServerSettings {
            base_path: base.to_string(),
            allow_reload: true,
            cors_origins: vec!["*".to_string()],
            ..ServerSettings::default()
        };
        let _ = router(service_for(dir.path()), &settings);
    }
    let _ = router(service_for(dir.path()), &ServerSettings::default());
}
