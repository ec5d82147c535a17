//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::items::compact_preview;

/// Widest preview shown in the items table.
const PREVIEW_CHARS: usize = 72;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Tell the user the vault holds nothing yet.
pub fn empty_vault() {
    info("No secrets in this vault yet.");
    tip("Run `passc add '<JSON>'` to add your first item.");
}

/// Print a table of items (#, Preview), newest first.
pub fn print_items_table(items: &[&str]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Item"]);

    for (index, item) in items.iter().enumerate() {
        table.add_row(vec![index.to_string(), compact_preview(item, PREVIEW_CHARS)]);
    }

    println!("{table}");
}
