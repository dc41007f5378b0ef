use colored::*;

use clientele_common::client::Client;
use clientele_common::config::Config;
use clientele_core::{ClientRepository, DuplicateGroups, DuplicateQuery, JsonFileRepository};

use crate::terminal::{colors, format, print};

type Detail = (String, ColoredString);

pub fn duplicates(cfg: &Config) -> anyhow::Result<()> {
    let repo = JsonFileRepository::new(&cfg.data_path);
    let clients: Vec<Client> = repo.load_all()?;
    let groups: DuplicateGroups = DuplicateQuery::new(&clients).execute()?;

    if cfg.json {
        return print::json(&groups);
    }

    print::header("Shared Emails", cfg.quiet);

    if groups.is_empty() {
        print::no_results("No duplicate emails found", cfg.quiet);
        return Ok(());
    }

    print_groups(&groups);
    print_summary(&groups, cfg);
    Ok(())
}

fn print_groups(groups: &DuplicateGroups) {
    for (idx, (email, members)) in groups.iter().enumerate() {
        print::tree_head(idx, email);
        let details: Vec<Detail> = members
            .iter()
            .map(|client| format::client_to_detail(client))
            .collect();
        print::as_tree_one_level(details);

        if idx + 1 != groups.len() {
            print::print("");
        }
    }
}

fn print_summary(groups: &DuplicateGroups, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let affected: usize = groups.values().map(Vec::len).sum();
    let emails: ColoredString = format!(
        "{} shared {}",
        groups.len(),
        format::plural(groups.len(), "email", "emails")
    )
    .bold()
    .yellow();
    let clients: ColoredString = format!("{affected} clients").bold().green();
    let output: ColoredString = format!("{emails} across {clients}").color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
}
