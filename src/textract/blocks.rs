//! Conversion of SDK blocks back into Textract's JSON wire shape.
//!
//! The SDK types carry no serde support, so fields are copied one by one
//! using the service's PascalCase names. Absent fields are omitted.

use aws_sdk_textract::types::{Block, BoundingBox, Geometry, Point, Relationship};
use serde_json::{Map, Value, json};

fn insert_opt<T: Into<Value>>(map: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(v) = value {
        map.insert(key.to_string(), v.into());
    }
}

fn bounding_box_to_json(bbox: &BoundingBox) -> Value {
    json!({
        "Width": bbox.width(),
        "Height": bbox.height(),
        "Left": bbox.left(),
        "Top": bbox.top(),
    })
}

fn point_to_json(point: &Point) -> Value {
    json!({ "X": point.x(), "Y": point.y() })
}

fn geometry_to_json(geometry: &Geometry) -> Value {
    let mut map = Map::new();
    insert_opt(
        &mut map,
        "BoundingBox",
        geometry.bounding_box().map(bounding_box_to_json),
    );
    if !geometry.polygon().is_empty() {
        map.insert(
            "Polygon".to_string(),
            geometry.polygon().iter().map(point_to_json).collect(),
        );
    }
    Value::Object(map)
}

fn relationship_to_json(relationship: &Relationship) -> Value {
    let mut map = Map::new();
    insert_opt(
        &mut map,
        "Type",
        relationship.r#type().map(|t| t.as_str()),
    );
    map.insert("Ids".to_string(), json!(relationship.ids()));
    Value::Object(map)
}

/// Renders a block the way `DetectDocumentText` returns it over the wire.
#[must_use]
pub fn block_to_json(block: &Block) -> Value {
    let mut map = Map::new();
    insert_opt(&mut map, "BlockType", block.block_type().map(|t| t.as_str()));
    insert_opt(&mut map, "Confidence", block.confidence());
    insert_opt(&mut map, "Text", block.text());
    insert_opt(&mut map, "TextType", block.text_type().map(|t| t.as_str()));
    insert_opt(&mut map, "RowIndex", block.row_index());
    insert_opt(&mut map, "ColumnIndex", block.column_index());
    insert_opt(&mut map, "RowSpan", block.row_span());
    insert_opt(&mut map, "ColumnSpan", block.column_span());
    insert_opt(&mut map, "Geometry", block.geometry().map(geometry_to_json));
    insert_opt(&mut map, "Id", block.id());
    if !block.relationships().is_empty() {
        map.insert(
            "Relationships".to_string(),
            block.relationships().iter().map(relationship_to_json).collect(),
        );
    }
    if !block.entity_types().is_empty() {
        map.insert(
            "EntityTypes".to_string(),
            block.entity_types().iter().map(|e| e.as_str()).collect(),
        );
    }
    insert_opt(
        &mut map,
        "SelectionStatus",
        block.selection_status().map(|s| s.as_str()),
    );
    insert_opt(&mut map, "Page", block.page());
    Value::Object(map)
}
