//! Interactive menu loop.
//!
//! # Responsibility
//! - Map numeric menu choices onto `MenuCommand` and dispatch to the service.
//! - Validate prompt input (ids, priorities) before the core is called.
//!
//! # Invariants
//! - Invalid ids never reach the service.
//! - Store failures on a mutation are reported and the loop keeps running.

use crate::render::{render_list, render_menu, render_search, render_stats};
use log::warn;
use std::io::{self, BufRead, Write};
use todo_core::{Priority, TodoId, TodoService, TodoServiceError, TodoStore};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    View,
    Add,
    Complete,
    Delete,
    Search,
    Stats,
    Exit,
}

impl MenuCommand {
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::View),
            "2" => Some(Self::Add),
            "3" => Some(Self::Complete),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Search),
            "6" => Some(Self::Stats),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Menu<'s, S: TodoStore, R, W> {
    service: &'s mut TodoService<S>,
    input: R,
    output: W,
}

impl<'s, S: TodoStore, R: BufRead, W: Write> Menu<'s, S, R, W> {
    pub fn new(service: &'s mut TodoService<S>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs until Exit is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", render_menu())?;
            let Some(choice) = self.prompt("\nEnter your choice (1-7): ")? else {
                return Ok(());
            };

            match MenuCommand::parse(&choice) {
                Some(MenuCommand::Exit) => {
                    writeln!(self.output, "👋 Goodbye!")?;
                    return Ok(());
                }
                Some(command) => {
                    if !self.dispatch(command)? {
                        return Ok(());
                    }
                }
                None => writeln!(self.output, "❌ Invalid choice!")?,
            }
        }
    }

    /// Returns `false` when input ended mid-command.
    fn dispatch(&mut self, command: MenuCommand) -> io::Result<bool> {
        match command {
            MenuCommand::View => self.show_list()?,
            MenuCommand::Add => {
                let Some(title) = self.prompt("Enter todo title: ")? else {
                    return Ok(false);
                };
                let Some(priority) = self.prompt("Priority (high/medium/low): ")? else {
                    return Ok(false);
                };
                let priority = Priority::from_input(&priority);
                match self.service.add_with_priority(title, priority) {
                    Ok(todo) => writeln!(self.output, "✅ Todo added: {}", todo.title)?,
                    Err(err) => self.report(&err)?,
                }
            }
            MenuCommand::Complete => {
                self.show_list()?;
                let Some(id) = self.prompt_id("Enter todo ID to mark complete: ")? else {
                    return Ok(false);
                };
                if let Some(id) = id {
                    match self.service.complete(id) {
                        Ok(todo) => {
                            writeln!(self.output, "✓ Marked as complete: {}", todo.title)?
                        }
                        Err(err) => self.report(&err)?,
                    }
                }
            }
            MenuCommand::Delete => {
                self.show_list()?;
                let Some(id) = self.prompt_id("Enter todo ID to delete: ")? else {
                    return Ok(false);
                };
                if let Some(id) = id {
                    match self.service.delete(id) {
                        Ok(todo) => writeln!(self.output, "🗑️  Deleted: {}", todo.title)?,
                        Err(err) => self.report(&err)?,
                    }
                }
            }
            MenuCommand::Search => {
                let Some(keyword) = self.prompt("Search keyword: ")? else {
                    return Ok(false);
                };
                let text = render_search(&keyword, &self.service.search(&keyword));
                writeln!(self.output, "{text}")?;
            }
            MenuCommand::Stats => {
                let text = render_stats(&self.service.stats());
                writeln!(self.output, "{text}")?;
            }
            MenuCommand::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn show_list(&mut self) -> io::Result<()> {
        let text = render_list(&self.service.list());
        writeln!(self.output, "{text}")
    }

    /// Prints `label` and reads one trimmed line; `None` on end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Outer `None` on end of input, inner `None` when the id was handled here.
    ///
    /// Negative integers are valid input but can never match, so they are
    /// reported as not found without reaching the service.
    fn prompt_id(&mut self, label: &str) -> io::Result<Option<Option<TodoId>>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        let Ok(number) = raw.parse::<i64>() else {
            writeln!(self.output, "❌ Invalid ID")?;
            return Ok(Some(None));
        };
        match TodoId::try_from(number) {
            Ok(id) => Ok(Some(Some(id))),
            Err(_) => {
                writeln!(self.output, "❌ Todo #{number} not found")?;
                Ok(Some(None))
            }
        }
    }

    fn report(&mut self, err: &TodoServiceError) -> io::Result<()> {
        match err {
            TodoServiceError::NotFound(id) => writeln!(self.output, "❌ Todo #{id} not found"),
            TodoServiceError::Store(store_err) => {
                warn!("event=menu_save_failed module=cli status=error error={store_err}");
                writeln!(self.output, "❌ Could not save todos: {store_err}")
            }
        }
    }
}
