// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current position of a shipment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingStatus {
    pub id: String,
    pub src: String,
    pub dest: String,
    pub status: String,
    pub reached_at: String,
    pub updated_at: DateTime<Utc>,
}

struct Shipment {
    id: &'static str,
    src: &'static str,
    dest: &'static str,
    status: &'static str,
    reached_at: &'static str,
}

const SHIPMENTS: &[Shipment] = &[
    Shipment {
        id: "12345",
        src: "Bangalore",
        dest: "Mumbai",
        status: "In Progress",
        reached_at: "Bangalore Office",
    },
    Shipment {
        id: "23456",
        src: "Delhi",
        dest: "Chennai",
        status: "Out for Delivery",
        reached_at: "Chennai Hub",
    },
    Shipment {
        id: "34567",
        src: "Mumbai",
        dest: "Hyderabad",
        status: "Delivered",
        reached_at: "Hyderabad Office",
    },
];

/// Look a package up in the shipment table
pub fn lookup(package_id: &str) -> Option<TrackingStatus> {
    let package_id = package_id.trim();
    SHIPMENTS
        .iter()
        .find(|s| s.id == package_id)
        .map(|s| TrackingStatus {
            id: s.id.to_string(),
            src: s.src.to_string(),
            dest: s.dest.to_string(),
            status: s.status.to_string(),
            reached_at: s.reached_at.to_string(),
            updated_at: Utc::now(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_package() {
        let status = lookup("12345").unwrap();
        assert_eq!(status.src, "Bangalore");
        assert_eq!(status.dest, "Mumbai");
        assert_eq!(status.status, "In Progress");
        assert_eq!(status.reached_at, "Bangalore Office");
    }

    #[test]
    fn test_lookup_trims_id() {
        assert_eq!(lookup(" 23456 ").unwrap().id, "23456");
    }

    #[test]
    fn test_lookup_unknown_package() {
        assert!(lookup("99999").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_known_ids_resolve() {
        for shipment in SHIPMENTS {
            assert!(lookup(shipment.id).is_some(), "{} should be tracked", shipment.id);
        }
    }

    #[test]
    fn test_status_serializes_camel_case() {
        let value = serde_json::to_value(lookup("12345").unwrap()).unwrap();
        assert_eq!(value["reachedAt"], "Bangalore Office");
        assert!(value.get("updatedAt").is_some());
    }
}
