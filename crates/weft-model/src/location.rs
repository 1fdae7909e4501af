//! Drop-target addressing.

use crate::id::CellId;
use serde::{Deserialize, Serialize};

/// Address of one lane slot: position `index` inside lane `lane_index` of the
/// container cell `parent_id`.
///
/// Plain container drops ignore `index` and append to the lane's end;
/// sibling-relative drops use the anchor's own position instead. Both
/// behaviors are deliberate and distinct; see the mutation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneLocation {
    /// Id of the container cell owning the lane.
    pub parent_id: CellId,
    /// Lane position within the container's lane sequence.
    pub lane_index: usize,
    /// Slot position within the lane's cell list.
    #[serde(default)]
    pub index: usize,
}

impl LaneLocation {
    /// Address a lane without caring about the slot index.
    #[must_use]
    pub fn lane(parent_id: CellId, lane_index: usize) -> Self {
        Self {
            parent_id,
            lane_index,
            index: 0,
        }
    }
}

/// Which side of the anchor a positioned drop lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropSide {
    /// Insert at the anchor's index, pushing it down.
    Before,
    /// Insert right after the anchor.
    After,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_json_shape() {
        let location = LaneLocation {
            parent_id: CellId::new("grid-1"),
            lane_index: 1,
            index: 2,
        };
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "parentId": "grid-1", "laneIndex": 1, "index": 2 })
        );
    }

    #[test]
    fn index_defaults_to_zero() {
        let location: LaneLocation =
            serde_json::from_str(r#"{"parentId": "root", "laneIndex": 0}"#).unwrap();
        assert_eq!(location, LaneLocation::lane(CellId::new("root"), 0));
    }

    #[test]
    fn drop_side_wire_names() {
        assert_eq!(serde_json::to_string(&DropSide::Before).unwrap(), "\"before\"");
        assert_eq!(serde_json::to_string(&DropSide::After).unwrap(), "\"after\"");
    }
}
