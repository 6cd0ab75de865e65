//! Routes command - lists the route table in match order.

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use cih_tui::{Route, ViewRegistry};

#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Print as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RoutesArgs) -> Result<()> {
    let registry = ViewRegistry::standard();

    if args.json {
        println!("{}", serde_json::to_string_pretty(registry.routes())?);
    } else {
        println!("{}", routes_table(registry.routes()));
    }
    Ok(())
}

fn routes_table(routes: &[Route]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Pattern").fg(Color::Cyan),
        Cell::new("Page").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
    ]);

    for route in routes {
        table.add_row(vec![
            Cell::new(route.pattern.to_string()),
            Cell::new(route.page.name()),
            Cell::new(route.page.title()),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_routes_in_match_order() {
        let registry = ViewRegistry::standard();
        let rendered = routes_table(registry.routes()).to_string();

        let home = rendered.find("home").unwrap();
        let about = rendered.find("about").unwrap();
        let dashboard = rendered.find("dashboard").unwrap();
        let fallback = rendered.find("not_found").unwrap();
        assert!(home < about && about < dashboard && dashboard < fallback);
        assert!(rendered.contains("Not Found"));
    }

    #[test]
    fn json_output_tags_pattern_kind() {
        let registry = ViewRegistry::standard();
        let value = serde_json::to_value(registry.routes()).unwrap();

        assert_eq!(value[0]["pattern"]["kind"], "exact");
        assert_eq!(value[0]["pattern"]["path"], "/");
        assert_eq!(value[0]["page"], "home");
        assert_eq!(value[3]["pattern"]["kind"], "wildcard");
        assert_eq!(value[3]["page"], "not_found");
    }
}
