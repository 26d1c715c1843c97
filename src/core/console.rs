//! Operator-facing messages and the console that shows them.

use colored::Colorize;
use serde::Serialize;

pub const WELCOME: &str = "It's business time, UNION-style.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Message {
    Welcome,
    ManualInstall,
    Completion { site_url: String },
}

impl Message {
    /// Uncolored rendering, used for the JSON report.
    pub fn plain_text(&self) -> String {
        match self {
            Message::Welcome => WELCOME.to_string(),
            Message::ManualInstall => "After running npm install & bower install, inject your \
                 front end dependencies by running gulp."
                .to_string(),
            Message::Completion { site_url } => format!(
                "We're done here. If installation of Node modules and Bower ran successfully, \
                 make sure {} is set up in your virtual hosts and run gulp",
                site_url
            ),
        }
    }
}

pub trait Console {
    fn show(&mut self, message: &Message);
}

/// Writes colored messages to stderr; stdout carries the JSON response.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn show(&mut self, message: &Message) {
        eprintln!("{}", render(message));
    }
}

fn render(message: &Message) -> String {
    match message {
        Message::Welcome => speech_bubble(WELCOME),
        Message::ManualInstall => format!(
            "\nAfter running {}, inject your\nfront end dependencies by running {}.",
            "npm install & bower install".yellow().bold(),
            "gulp".yellow().bold()
        ),
        Message::Completion { site_url } => format!(
            "\n==========\n{}\n{}\n{}{}\n{}{}\n==========\n",
            "We're done here.".white().bold(),
            "If installation of Node modules and Bower ran successfully, make sure"
                .white()
                .bold(),
            site_url.cyan().bold(),
            " is set up in your virtual hosts".white().bold(),
            "and run ".white().bold(),
            "gulp".yellow().bold()
        ),
    }
}

fn speech_bubble(text: &str) -> String {
    let width = text.chars().count() + 2;
    let rule = "-".repeat(width);
    format!(
        "\n  .{rule}.\n  | {} |\n  '{rule}'\n     \\\n      (o_o)\n",
        text.bold(),
        rule = rule
    )
}
