//! Binder layout exports: JSON document, one CSV row per pocket, text preview.

use crate::domain::model::{BinderLayout, LayoutSummary, Page, SlotContent, Spread};
use crate::utils::error::{BinderError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;

/// Pockets per row in the text preview (3 rows of 4 for a 12-pocket page).
pub const GRID_COLUMNS: usize = 4;
const CELL_WIDTH: usize = 10;

#[derive(Debug, Serialize)]
struct BinderDocument<'a> {
    set_id: &'a str,
    generated_at: DateTime<Utc>,
    page_capacity: usize,
    summary: LayoutSummary,
    spreads: &'a [Spread],
}

pub fn to_json(set_id: &str, layout: &BinderLayout, generated_at: DateTime<Utc>) -> Result<String> {
    let document = BinderDocument {
        set_id,
        generated_at,
        page_capacity: layout.page_capacity,
        summary: layout.summary(),
        spreads: &layout.spreads,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn to_csv(layout: &BinderLayout) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "spread", "page", "slot", "key", "state", "item_id", "local_id", "finish", "image",
    ])?;

    for spread in &layout.spreads {
        for page in spread.pages() {
            for (slot_index, slot) in page.slots.iter().enumerate() {
                let (state, item_id, local_id, finish, image) = match &slot.content {
                    SlotContent::Empty => ("empty", "", "", "", ""),
                    SlotContent::Occupied {
                        item_id,
                        local_id,
                        finish,
                        image,
                    } => (
                        "occupied",
                        item_id.as_str(),
                        local_id.as_deref().unwrap_or_default(),
                        finish.label(),
                        image.as_deref().unwrap_or_default(),
                    ),
                };
                writer.write_record([
                    (spread.index + 1).to_string().as_str(),
                    page.number().to_string().as_str(),
                    (slot_index + 1).to_string().as_str(),
                    slot.key.as_str(),
                    state,
                    item_id,
                    local_id,
                    finish,
                    image,
                ])?;
            }
        }
    }

    let data = writer
        .into_inner()
        .map_err(|e| BinderError::IoError(e.into_error()))?;
    String::from_utf8(data).map_err(|e| BinderError::ProcessingError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

fn cell(content: &SlotContent) -> String {
    let label = match content {
        SlotContent::Empty => String::new(),
        SlotContent::Occupied {
            item_id,
            local_id,
            finish,
            image,
        } => {
            let name = local_id.as_deref().unwrap_or(item_id);
            // 沒有圖片的卡以 * 標示
            let marker = if image.is_some() { "" } else { "*" };
            format!("{} {}{}", name, finish.label(), marker)
        }
    };
    format!("[{:<width$}]", label, width = CELL_WIDTH)
}

fn write_page(out: &mut String, page: &Page) {
    let _ = writeln!(out, "Page {}", page.number());
    for row in page.slots.chunks(GRID_COLUMNS) {
        let cells: Vec<String> = row.iter().map(|slot| cell(&slot.content)).collect();
        let _ = writeln!(out, "  {}", cells.join(" "));
    }
}

/// Plain-text preview of every spread. A missing right page is printed as an
/// explicit placeholder, not as an empty grid.
pub fn to_text(set_id: &str, layout: &BinderLayout) -> String {
    let summary = layout.summary();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Binder {}: {} cards, {} pockets filled, {} pages, {} spreads",
        set_id, summary.cards, summary.occupied_slots, summary.pages, summary.spreads
    );

    for spread in &layout.spreads {
        out.push('\n');
        match &spread.right {
            Some(right) => {
                let _ = writeln!(out, "=== Pages {} - {} ===", spread.left.number(), right.number());
                write_page(&mut out, &spread.left);
                write_page(&mut out, right);
            }
            None => {
                let _ = writeln!(out, "=== Pages {} ===", spread.left.number());
                write_page(&mut out, &spread.left);
                let _ = writeln!(out, "Page {} (Empty)", spread.right_page_number());
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::{build_layout, LayoutOptions};
    use crate::domain::model::CardRecord;
    use crate::domain::ports::BinderItem;

    fn layout(count: usize) -> BinderLayout {
        let cards: Vec<CardRecord> = (1..=count)
            .map(|i| {
                CardRecord::new(format!("sv03-{:03}", i))
                    .with_local_id(format!("{:03}", i))
                    .with_rarity(if i <= 2 { "Commune" } else { "Double rare" })
                    .with_image_base(format!("https://assets.tcgdex.net/fr/sv/sv03/{:03}", i))
            })
            .collect();
        let resolver = |item: &dyn BinderItem| {
            if item.id() == "sv03-003" {
                None
            } else {
                item.image_url("low", "webp")
            }
        };
        build_layout(&cards, &LayoutOptions::default(), &resolver)
    }

    #[test]
    fn test_text_preview_marks_missing_right_page() {
        let text = to_text("sv03", &layout(4));

        assert!(text.starts_with("Binder sv03: 4 cards, 6 pockets filled, 1 pages, 1 spreads"));
        assert!(text.contains("=== Pages 1 ==="));
        assert!(text.contains("[001 N     ] [001 Rv    ] [002 N     ] [002 Rv    ]"));
        assert!(text.contains("[003 N*    ]"));
        assert!(text.contains("Page 2 (Empty)"));
    }

    #[test]
    fn test_text_preview_full_spread() {
        let text = to_text("sv03", &layout(22));

        assert!(text.contains("=== Pages 1 - 2 ==="));
        assert!(!text.contains("(Empty)"));
    }

    #[test]
    fn test_csv_has_one_row_per_pocket() {
        let csv = to_csv(&layout(4)).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "spread,page,slot,key,state,item_id,local_id,finish,image");
        assert_eq!(lines.len(), 1 + 12);
        assert_eq!(
            lines[2],
            "1,1,2,sv03-001#1,occupied,sv03-001,001,Rv,https://assets.tcgdex.net/fr/sv/sv03/001/low.webp"
        );
        assert_eq!(lines[12], "1,1,12,empty#p0s11,empty,,,,");
    }

    #[test]
    fn test_json_document_shape() {
        let generated_at = DateTime::parse_from_rfc3339("2026-10-19T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let json = to_json("sv03", &layout(4), generated_at).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["set_id"], "sv03");
        assert_eq!(value["summary"]["occupied_slots"], 6);
        assert_eq!(value["spreads"][0]["right"], serde_json::Value::Null);
        assert_eq!(value["spreads"][0]["left"]["slots"][0]["state"], "occupied");
        assert_eq!(value["spreads"][0]["left"]["slots"][0]["finish"], "normal");
        assert_eq!(value["spreads"][0]["left"]["slots"][11]["state"], "empty");
        assert_eq!(value["spreads"][0]["left"]["slots"][4]["image"], serde_json::Value::Null);
    }
}
