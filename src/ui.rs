use std::fmt::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::client::{TaskApi, TaskClient};
use crate::task::Task;
use crate::view::{Controller, ViewState};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const STRIKE: &str = "\x1b[9m";
const BLUE: &str = "\x1b[38;5;75m";
const GREEN: &str = "\x1b[38;5;78m";
const RED: &str = "\x1b[38;5;203m";
const GRAY: &str = "\x1b[38;5;243m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Reload,
    /// 1-based position in the displayed list.
    Toggle(usize),
    Add(String),
    Nothing,
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed {
        "" => Input::Nothing,
        ":q" | ":quit" => Input::Quit,
        ":r" | ":reload" => Input::Reload,
        _ => match trimmed.parse::<usize>() {
            Ok(n) if n > 0 => Input::Toggle(n),
            _ => Input::Add(line.to_string()),
        },
    }
}

/// Interactive task view on the terminal.
pub async fn run(client: TaskClient) {
    let mut controller = Controller::new(client);

    print!("{CLEAR_SCREEN}{}", render(&controller.state));
    controller.load().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{CLEAR_SCREEN}{}", render(&controller.state));
        print!("{DIM}task title to add, number to toggle, :r reload, :q quit{RESET}\n> ");
        flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("{RED}failed to read input:{RESET} {e}");
                break;
            }
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::Reload => controller.load().await,
            Input::Toggle(n) => {
                let id = controller.state.tasks.get(n - 1).map(|t| t.id.clone());
                match id {
                    Some(id) => controller.toggle(&id).await,
                    None => controller.state.error = Some(format!("No task #{n}")),
                }
            }
            Input::Add(title) => {
                controller.state.input = title;
                print!("{DIM}Adding...{RESET}");
                flush();
                controller.add().await;
            }
            Input::Nothing => {}
        }
    }
}

fn flush() {
    use std::io::Write;
    let _ = std::io::stdout().flush();
}

fn render(state: &ViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{BOLD}{BLUE}Task Manager{RESET}");
    let _ = writeln!(out, "{DIM}─────────────────────────────────────────────────{RESET}");

    if let Some(error) = &state.error {
        let _ = writeln!(out, "{RED}{error}{RESET}");
    }

    if state.loading {
        let _ = writeln!(out, "Loading tasks...");
        return out;
    }

    if state.tasks.is_empty() {
        let _ = writeln!(out, "{DIM}no tasks yet{RESET}");
    }

    for (i, task) in state.tasks.iter().enumerate() {
        let _ = writeln!(out, "{}", render_task(i + 1, task));
    }
    out
}

fn render_task(position: usize, task: &Task) -> String {
    if task.completed {
        format!("  {DIM}{position:>2}.{RESET} {GREEN}[x]{RESET} {GRAY}{STRIKE}{}{RESET}", task.title)
    } else {
        format!("  {DIM}{position:>2}.{RESET} [ ] {}", task.title)
    }
}

fn plain_line(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    format!("[{mark}] {}  {}", task.id, task.title)
}

pub async fn list(client: &TaskClient) -> Result<(), crate::client::ClientError> {
    for task in client.list().await? {
        println!("{}", plain_line(&task));
    }
    Ok(())
}

pub async fn add(client: &TaskClient, title: &str) -> Result<(), crate::client::ClientError> {
    let task = client.create(title).await?;
    println!("{}", plain_line(&task));
    Ok(())
}

pub async fn toggle(client: &TaskClient, id: &str) -> Result<(), crate::client::ClientError> {
    let task = client.toggle(id).await?;
    println!("{}", plain_line(&task));
    Ok(())
}
