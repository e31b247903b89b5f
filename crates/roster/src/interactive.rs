//! `roster ui`: interactive terminal client.
//!
//! Renders the list view after every action and captures input with
//! dialoguer prompts. Prompts block, so they run under `block_in_place`.

use std::sync::Arc;

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;
use roster_client::ui::{self, EditModal, EmployeeForm, Field, MessageAlert};
use roster_client::{ConfirmPrompt, EmployeeBook, HttpEmployeeApi};
use roster_core::{Employee, EmployeeDraft};
use roster_settings::LogFormat;
use tokio::task::block_in_place;
use tracing::warn;

const ACTIONS: [&str; 7] = [
    "Refresh",
    "Search by name",
    "Add employee",
    "Edit employee",
    "Delete employee",
    "Dismiss message",
    "Quit",
];

/// Delete confirmation through a dialoguer prompt.
struct TerminalConfirm;

impl ConfirmPrompt for TerminalConfirm {
    fn confirm(&self, question: &str) -> bool {
        let answer = block_in_place(|| {
            Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(question)
                .default(false)
                .interact()
        });
        answer.unwrap_or_else(|err| {
            warn!(error = %err, "confirmation prompt failed");
            false
        })
    }
}

/// Run the client loop until the user quits.
pub async fn run(api_url: &str) -> Result<()> {
    roster_logging::init_subscriber("warn", LogFormat::Compact);

    let book = EmployeeBook::new(Arc::new(HttpEmployeeApi::new(api_url)));
    let theme = ColorfulTheme::default();
    let mut form = EmployeeForm::new();
    let mut modal = EditModal::new();

    book.load().await;
    loop {
        draw(&book);
        let choice = block_in_place(|| {
            Select::with_theme(&theme)
                .with_prompt("Action")
                .items(ACTIONS.as_slice())
                .default(0)
                .interact()
        })?;

        match choice {
            0 => book.load().await,
            1 => {
                let current = book.state().search_term;
                let term = prompt_text(&theme, "Search by name", &current)?;
                book.set_search_term(term).await;
            }
            2 => add(&book, &theme, &mut form).await?,
            3 => {
                if let Some(employee) = pick(&book, &theme, "Edit which employee?")? {
                    modal.open(&employee);
                    edit(&book, &theme, &mut modal).await?;
                }
            }
            4 => {
                if let Some(employee) = pick(&book, &theme, "Delete which employee?")? {
                    let _ = book.remove(employee.id, &TerminalConfirm).await;
                }
            }
            5 => book.notifier().dismiss(),
            _ => break,
        }
    }
    Ok(())
}

fn draw(book: &EmployeeBook) {
    println!();
    let alert = MessageAlert::render(book.notice().as_ref());
    if !alert.is_empty() {
        println!("{alert}\n");
    }
    println!("{}", ui::render_page(&book.state()));
    println!();
}

fn prompt_text(theme: &ColorfulTheme, label: &str, initial: &str) -> Result<String> {
    let value = block_in_place(|| {
        Input::<String>::with_theme(theme)
            .with_prompt(label)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
    })?;
    Ok(value)
}

fn fill(theme: &ColorfulTheme, draft: &EmployeeDraft, labels: [&str; 3]) -> Result<Vec<(Field, String)>> {
    Field::ALL
        .into_iter()
        .zip(labels)
        .map(|(field, label)| -> Result<(Field, String)> {
            Ok((field, prompt_text(theme, label, field.get(draft))?))
        })
        .collect()
}

fn retry(theme: &ColorfulTheme) -> Result<bool> {
    Ok(block_in_place(|| {
        Confirm::with_theme(theme)
            .with_prompt("Try again?")
            .default(true)
            .interact()
    })?)
}

async fn add(book: &EmployeeBook, theme: &ColorfulTheme, form: &mut EmployeeForm) -> Result<()> {
    loop {
        println!("{}", form.render());
        for (field, value) in fill(theme, form.draft(), ["Name", "Email", "Position"])? {
            form.set(field, value);
        }
        let ok = book.add(form.draft()).await;
        form.submitted(ok);
        if ok {
            return Ok(());
        }
        println!("{}", MessageAlert::render(book.notice().as_ref()));
        if !retry(theme)? {
            return Ok(());
        }
    }
}

async fn edit(book: &EmployeeBook, theme: &ColorfulTheme, modal: &mut EditModal) -> Result<()> {
    while let Some(id) = modal.selected() {
        println!("{}", modal.render());
        for (field, value) in fill(theme, modal.draft(), ["Full Name", "Email Address", "Job Position"])? {
            modal.set(field, value);
        }
        let ok = book.edit(id, modal.draft()).await;
        modal.saved(ok);
        if !ok {
            println!("{}", MessageAlert::render(book.notice().as_ref()));
            if !retry(theme)? {
                modal.close();
            }
        }
    }
    Ok(())
}

fn pick(book: &EmployeeBook, theme: &ColorfulTheme, prompt: &str) -> Result<Option<Employee>> {
    let employees = book.state().employees;
    if employees.is_empty() {
        println!("{}", "No employees to choose from.".dimmed());
        return Ok(None);
    }
    let labels: Vec<String> = employees
        .iter()
        .map(|e| format!("#{} {} <{}> {}", e.id, e.name, e.email, e.position))
        .collect();
    let choice = block_in_place(|| {
        Select::with_theme(theme)
            .with_prompt(prompt)
            .items(labels.as_slice())
            .default(0)
            .interact_opt()
    })?;
    Ok(choice.and_then(|i| employees.get(i).cloned()))
}
