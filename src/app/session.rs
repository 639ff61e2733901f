use crate::app::menu::{self, MenuChoice};
use crate::core::QuoteEngine;
use crate::domain::{Applicant, Bracket};
use crate::utils::error::Result;
use crate::utils::validation;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::str::FromStr;

/// Interactive menu session over the quote engine.
pub struct MenuSession {
    engine: QuoteEngine,
}

impl MenuSession {
    pub fn new(engine: QuoteEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &QuoteEngine {
        &self.engine
    }

    pub fn run(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            println!("{}", menu::MENU);

            match rl.readline("Choose an option: ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    match MenuChoice::parse(line) {
                        Some(MenuChoice::Exit) => {
                            println!("Exiting...");
                            break;
                        }
                        Some(choice) => self.dispatch(choice, &mut rl)?,
                        None => {
                            tracing::warn!("Invalid menu choice: {}", line);
                            println!("Invalid choice.");
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Exiting...");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice, rl: &mut DefaultEditor) -> Result<()> {
        match choice {
            MenuChoice::AddBracket => self.add_bracket(rl),
            MenuChoice::RemoveBracket => self.remove_bracket(rl),
            MenuChoice::ListBrackets => {
                println!(
                    "{}",
                    menu::format_bracket_list(self.engine.brackets(), self.engine.currency())
                );
                Ok(())
            }
            MenuChoice::Quote => self.quote_applicant(rl),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add_bracket(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        let Some(min_age) = prompt_parsed::<u32>(rl, "Enter Min Age: ")? else {
            return Ok(());
        };
        let Some(max_age) = prompt_parsed::<u32>(rl, "Enter Max Age: ")? else {
            return Ok(());
        };
        let Some(rate) = prompt_parsed::<f64>(rl, "Enter Premium Rate: ")? else {
            return Ok(());
        };

        if let Err(e) = validation::validate_age_range("bracket", min_age, max_age)
            .and_then(|_| validation::validate_positive_rate("bracket", rate))
        {
            tracing::warn!("Rejected bracket: {}", e);
            println!("❌ {}", e);
            return Ok(());
        }

        self.engine.add_bracket(Bracket::new(min_age, max_age, rate));
        println!("✅ Bracket added.");
        Ok(())
    }

    fn remove_bracket(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        let Some(index) = prompt_parsed::<usize>(rl, "Enter index to remove: ")? else {
            return Ok(());
        };

        match self.engine.remove_bracket(index) {
            Ok(removed) => println!(
                "✅ Removed bracket [{}-{}].",
                removed.min_age, removed.max_age
            ),
            Err(e) => {
                tracing::warn!("Remove failed: {}", e);
                println!("❌ {}", e);
            }
        }
        Ok(())
    }

    fn quote_applicant(&mut self, rl: &mut DefaultEditor) -> Result<()> {
        let Some(id) = prompt_non_empty(rl, "Enter Applicant ID: ")? else {
            return Ok(());
        };
        let Some(age) = prompt_parsed::<u32>(rl, "Enter Age: ")? else {
            return Ok(());
        };
        let Some(vehicle_class) = prompt_non_empty(rl, "Enter Vehicle Class: ")? else {
            return Ok(());
        };

        let applicant = Applicant::new(id, age, vehicle_class);
        tracing::info!("Quoting applicant {} (age {})", applicant.id, applicant.age);

        for (tier, quote) in self.engine.quote_all(&applicant) {
            println!(
                "{}",
                menu::format_quote_line(tier, quote.as_ref(), self.engine.currency())
            );
        }
        Ok(())
    }
}

/// Prompts until the line parses as `T`. `Ok(None)` on Ctrl-C/Ctrl-D,
/// which aborts the current sub-flow back to the menu.
fn prompt_parsed<T: FromStr>(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<T>> {
    loop {
        match rl.readline(prompt) {
            Ok(line) => match line.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("Invalid number, try again."),
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Prompts until the line is non-empty. `Ok(None)` on Ctrl-C/Ctrl-D.
fn prompt_non_empty(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    println!("Value cannot be empty, try again.");
                } else {
                    return Ok(Some(line.to_string()));
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}
