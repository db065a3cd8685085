//! Console text for todo listings and confirmations.

use todo_core::{Listing, Priority, Todo, TodoStats};

const RULE_WIDTH: usize = 60;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn status_marker(todo: &Todo) -> &'static str {
    if todo.completed {
        "✓"
    } else {
        "○"
    }
}

fn priority_marker(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}

pub fn render_list(listing: &Listing<'_>) -> String {
    if listing.is_empty() {
        return "📭 No todos yet!".to_string();
    }

    let mut output = format!("\n{}\n📋 YOUR TODOS\n{}\n", rule(), rule());
    for todo in listing.items() {
        output.push_str(&format!(
            "{} [{}] {} {}\n",
            status_marker(todo),
            todo.id,
            todo.title,
            priority_marker(todo.priority)
        ));
    }
    output.push_str(&rule());
    output.push('\n');
    output
}

pub fn render_search(keyword: &str, listing: &Listing<'_>) -> String {
    if listing.is_empty() {
        return format!("🔍 No todos found with '{keyword}'");
    }

    let mut output = format!("\n🔍 Search results for '{keyword}':\n");
    for todo in listing.items() {
        output.push_str(&format!(
            "{} [{}] {}\n",
            status_marker(todo),
            todo.id,
            todo.title
        ));
    }
    output
}

pub fn render_stats(stats: &TodoStats) -> String {
    format!(
        "\n📊 STATS\n--------\nTotal: {}\nCompleted: {}\nPending: {}\n",
        stats.total, stats.completed, stats.pending
    )
}

pub fn render_menu() -> String {
    let mut output = format!("\n{}\n{:^60}\n{}\n", rule(), "🎯 TODO APP - MENU", rule());
    for line in [
        "1. View all todos",
        "2. Add new todo",
        "3. Mark as complete",
        "4. Delete todo",
        "5. Search todos",
        "6. View stats",
        "7. Exit",
    ] {
        output.push_str(line);
        output.push('\n');
    }
    output.push_str(&rule());
    output
}
