//! Activity listing commands.
//!
//! The registry lives only in memory, so these commands show the catalog
//! the server would start with.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use mergington_types::activity::Activity;

use crate::state::AppState;

/// Print every activity as a table, or as JSON with `--json`.
pub fn list_activities(state: &AppState, json: bool) -> Result<()> {
    let catalog = state.activity_service.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    if catalog.is_empty() {
        println!();
        println!("  {} No activities configured.", style("i").blue().bold());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Activity").fg(Color::White),
        Cell::new("Schedule").fg(Color::White),
        Cell::new("Enrolled").fg(Color::White),
        Cell::new("Spots Left").fg(Color::White),
    ]);

    for (name, activity) in catalog.iter() {
        let spots = activity.spots_left();
        let spots_cell = if spots == 0 {
            Cell::new("full").fg(Color::Red)
        } else {
            Cell::new(spots).fg(Color::Green)
        };

        table.add_row(vec![
            Cell::new(name).fg(Color::Cyan),
            Cell::new(&activity.schedule),
            Cell::new(format!(
                "{}/{}",
                activity.participants.len(),
                activity.max_participants
            )),
            spots_cell,
        ]);
    }

    println!();
    println!("{table}");
    println!();

    Ok(())
}

/// Print one activity with its roster.
pub fn show_activity(state: &AppState, name: &str, json: bool) -> Result<()> {
    let activity = state.activity_service.get(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&activity)?);
        return Ok(());
    }

    print_activity(name, &activity);
    Ok(())
}

fn print_activity(name: &str, activity: &Activity) {
    println!();
    println!("  {}", style(name).cyan().bold());
    println!("  {}", activity.description);
    println!();
    println!("  {} {}", style("Schedule:").dim(), activity.schedule);
    println!(
        "  {} {} spots left",
        style("Availability:").dim(),
        activity.spots_left()
    );
    println!();

    if activity.participants.is_empty() {
        println!("  No participants yet. Be the first to sign up!");
    } else {
        println!(
            "  {}",
            style(format!(
                "Current Participants ({}):",
                activity.participants.len()
            ))
            .dim()
        );
        for email in &activity.participants {
            println!("    • {email}");
        }
    }
    println!();
}
