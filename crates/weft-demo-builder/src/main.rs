#![forbid(unsafe_code)]

//! Weft demo: a scripted editing session.
//!
//! Replays the command sequence a designer UI would emit while building a
//! small registration form (drops, positioned drags, configuration edits,
//! validation), then prints the resulting layout outline and the JSON export.
//!
//! ```sh
//! cargo run -p weft-demo-builder
//! ```

use weft::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = WidgetRegistry::builtin();
    let mut state = DesignerState::new();

    // Two-lane grid for the name/email row.
    let grid = registry.instantiate("grid")?;
    let grid_id = grid.id.clone();
    state = reduce(
        &state,
        Command::Add {
            drag_item: grid,
            location: LaneLocation::lane(state.root().id.clone(), 0),
        },
    )?;

    let mut name = registry.instantiate("input")?;
    name.label = Some("Full name".into());
    name.required = true;
    let name_id = name.id.clone();
    state = reduce(
        &state,
        Command::Add {
            drag_item: name,
            location: LaneLocation::lane(grid_id.clone(), 0),
        },
    )?;

    let mut email = registry.instantiate("input")?;
    email.label = Some("Email".into());
    email.required = true;
    state = reduce(
        &state,
        Command::Add {
            drag_item: email,
            location: LaneLocation::lane(grid_id.clone(), 1),
        },
    )?;

    // A dropdown below the grid, then drag it above via a positioned move.
    let mut country = registry.instantiate("select")?;
    country.label = Some("Country".into());
    country.options = vec![
        ChoiceOption::new("nl", "Netherlands"),
        ChoiceOption::new("de", "Germany"),
    ];
    let country_id = country.id.clone();
    state = reduce(
        &state,
        Command::Add {
            drag_item: country,
            location: LaneLocation::lane(state.root().id.clone(), 0),
        },
    )?;
    state = reduce(
        &state,
        Command::PositionedMove {
            id: country_id,
            drop_item_id: grid_id,
            side: DropSide::Before,
        },
    )?;

    // Fill one field, then validate: the untouched required input warns.
    state = reduce(
        &state,
        Command::SetValue {
            target: name_id,
            value: CellValue::text("Ada Lovelace"),
        },
    )?;
    let checked = reduce(&state, Command::Validate)?;

    println!("Layout:");
    print_outline(checked.root(), 0);

    println!("\nEntered values:");
    for (id, value) in collect_values(checked.root()) {
        println!("  {id} = {}", serde_json::to_string(&value)?);
    }

    println!("\nExport:");
    println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    Ok(())
}

fn print_outline(cell: &Cell, depth: usize) {
    let indent = "  ".repeat(depth);
    let label = cell.label.as_deref().unwrap_or("-");
    let warn = if cell.warnable { "  [!] " } else { "" };
    println!("{indent}{} <{}> {label}{warn}{}", cell.id, cell.kind, cell.warning);
    for (index, lane) in cell.lanes.iter().enumerate() {
        println!("{indent}  lane {index} (span {})", lane.span);
        for child in &lane.cells {
            print_outline(child, depth + 2);
        }
    }
}
