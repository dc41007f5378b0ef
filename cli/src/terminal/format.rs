use clientele_common::client::Client;
use colored::*;

use crate::terminal::colors;

/// Colored rendition of [`Client`]'s `Display` form: `Client #<id>: <name> (<email>)`.
pub fn client_line(client: &Client) -> String {
    format!(
        "{} {}{} {} {}{}{}",
        "Client".color(colors::TEXT_DEFAULT),
        format!("#{}", client.id()).color(colors::CLIENT_ID),
        ":".color(colors::SEPARATOR),
        client.full_name().color(colors::PRIMARY),
        "(".color(colors::SEPARATOR),
        client.email().color(colors::EMAIL),
        ")".color(colors::SEPARATOR),
    )
}

/// Tree branch for a client inside a duplicate group.
pub fn client_to_detail(client: &Client) -> (String, ColoredString) {
    let value: ColoredString = format!("{} <{}>", client.full_name(), client.email())
        .color(colors::TEXT_DEFAULT);
    (format!("#{}", client.id()), value)
}

pub fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
