//! datasets command - list the built-in datasets

use super::CommandContext;
use anyhow::Result;
use colored::Colorize;
use planboard_core::Dataset;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let mut lines = Vec::new();
    for dataset in Dataset::ALL {
        let rows = dataset.load()?;
        lines.push(vec![
            dataset.name().to_string(),
            dataset.title().to_string(),
            rows.len().to_string(),
            dataset.status_field().to_string(),
            dataset.date_field().to_string(),
        ]);
    }

    let header = ["Name", "Title", "Rows", "Status field", "Date field"].map(String::from);
    for (i, line) in crate::utils::format_table(&header, &lines, ctx.color)
        .into_iter()
        .enumerate()
    {
        if i > 0 && ctx.color {
            // Dataset names are what `list` takes
            let (name, rest) = line.split_at(line.find(' ').unwrap_or(line.len()));
            println!("{}{}", name.blue().bold(), rest);
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
