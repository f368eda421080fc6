#![allow(dead_code)]

use seaports::{LatencyProfile, PortService, RecordStore, StaticSource};
use serde_json::{Value as JsonValue, json};
use std::sync::Arc;

/// A slice of the public dataset, in its published shape.
pub fn ports_document() -> JsonValue {
    json!({
        "NLRTM": {
            "name": "Rotterdam",
            "city": "Rotterdam",
            "country": "Netherlands",
            "alias": [],
            "regions": [],
            "coordinates": [4.47917, 51.9225],
            "province": "South Holland",
            "timezone": "Europe/Amsterdam",
            "unlocs": ["NLRTM"],
            "code": "42157"
        },
        "BEANR": {
            "name": "Antwerp",
            "country": "Belgium",
            "coordinates": [4.40026, 51.21989],
            "province": "Antwerp",
            "timezone": "Europe/Brussels",
            "unlocs": ["BEANR"],
            "code": "42305"
        },
        "DEHAM": {
            "name": "Hamburg",
            "country": "Germany",
            "continent": "Europe",
            "coordinates": [9.99368, 53.55108],
            "province": "Hamburg",
            "timezone": "Europe/Berlin",
            "unlocs": ["DEHAM"]
        },
        "SGSIN": {
            "name": "Singapore",
            "country": "Singapore",
            "continent": "Asia",
            "coordinates": [103.819836, 1.352083],
            "timezone": "Asia/Singapore",
            "unlocs": ["SGSIN"],
            "code": "55976"
        },
        "USNYC": {
            "name": "New York",
            "country": "United States",
            "continent": "North America",
            "coordinates": [-74.00597, 40.71278],
            "province": "New York",
            "timezone": "America/New_York",
            "unlocs": ["USNYC"],
            "code": "1001"
        },
        "NZAKL": {
            "name": "Auckland",
            "country": "New Zealand",
            "continent": "Oceania",
            "coordinates": [174.76333, -36.84846],
            "province": "Auckland",
            "timezone": "Pacific/Auckland",
            "unlocs": ["NZAKL"],
            "code": "61406"
        }
    })
}

pub fn source() -> Arc<StaticSource> {
    Arc::new(StaticSource::new(ports_document()))
}

/// Service over `source` that answers without simulated delay.
pub fn service_over(source: Arc<StaticSource>) -> PortService {
    PortService::new(Arc::new(RecordStore::new(source))).with_latency(LatencyProfile::none())
}

pub fn service() -> PortService {
    service_over(source())
}
