use colored::*;

use clientele_common::client::Client;
use clientele_common::config::Config;
use clientele_core::{ClientRepository, JsonFileRepository, SearchQuery};

use crate::terminal::{colors, format, print};

pub fn search(term: &str, cfg: &Config) -> anyhow::Result<()> {
    let repo = JsonFileRepository::new(&cfg.data_path);
    let clients: Vec<Client> = repo.load_all()?;
    let matches: Vec<&Client> = SearchQuery::new(&clients).execute(Some(term))?;

    if cfg.json {
        return print::json(&matches);
    }

    print::header("Search Results", cfg.quiet);

    if matches.is_empty() {
        print::no_results(&format!("No clients match '{}'", term.trim()), cfg.quiet);
        return Ok(());
    }

    for client in &matches {
        print::print(&format::client_line(client));
    }

    print_summary(matches.len(), clients.len(), term, cfg);
    Ok(())
}

fn print_summary(found: usize, total: usize, term: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let found_str: ColoredString =
        format!("{found} {}", format::plural(found, "client", "clients")).bold().green();
    let term_str: ColoredString = format!("'{}'", term.trim()).bold().yellow();
    let output: ColoredString =
        format!("{found_str} of {total} match {term_str}").color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
}
