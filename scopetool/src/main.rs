use std::fmt::{self, Display};
use std::fs;
use std::process::ExitCode;

use args::{Command, Input};
use color_eyre::eyre::{Context as _, Result, bail};
use scope_selector::{Context, Scope, Selector};
use similar::{ChangeTag, TextDiff};
use yansi::{Paint, Style};

mod args;

/// Prints a line diff of two dumps, numbering the lines of both sides.
fn print_diff(old: &str, new: &str) {
    struct Gutter(Option<usize>, usize);

    impl Display for Gutter {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self.0 {
                Some(idx) => write!(f, "{:>width$}", idx + 1, width = self.1),
                None => write!(f, "{:width$}", "", width = self.1),
            }
        }
    }

    let width = |text: &str| text.lines().count().max(1).ilog10() as usize + 1;
    let (old_width, new_width) = (width(old), width(new));

    for change in TextDiff::from_lines(old, new).iter_all_changes() {
        let (sign, style) = match change.tag() {
            ChangeTag::Equal => (' ', Style::new().dim()),
            ChangeTag::Delete => ('-', Style::new().red()),
            ChangeTag::Insert => ('+', Style::new().green()),
        };

        let line = format!(
            "{} {} |{sign}{}",
            Gutter(change.old_index(), old_width),
            Gutter(change.new_index(), new_width),
            change.value().trim_end_matches('\n'),
        );
        println!("{}", line.paint(style));
    }
}

/// Returns the selector text along with a name to mention in errors.
fn read_input(input: Input) -> Result<(String, String)> {
    match (input.expr, input.path) {
        (Some(expr), _) => Ok(("the expression".into(), expr)),

        (None, Some(path)) => {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("could not read `{}`", path.display()))?;

            log::debug!("read {} bytes from `{}`", contents.len(), path.display());

            Ok((format!("`{}`", path.display()), contents))
        }

        (None, None) => bail!("no selector was given"),
    }
}

fn parse_input(input: Input) -> Result<(String, Selector)> {
    let (name, contents) = read_input(input)?;
    let selector = Selector::parse(&contents).with_context(|| format!("could not parse {name}"))?;

    Ok((contents, selector))
}

fn print_ast(input: Input) -> Result<()> {
    let (_, selector) = parse_input(input)?;
    println!("{selector:#?}");

    Ok(())
}

fn ouroboros(input: Input, emit_diff: bool) -> Result<()> {
    let (contents, selector) = parse_input(input)?;
    let dump = selector.to_string();

    if !emit_diff {
        println!("{dump}");

        return Ok(());
    }

    print_diff(contents.trim_end(), &dump);

    Ok(())
}

fn check_idempotence(input: Input) -> Result<ExitCode> {
    let (_, first) = parse_input(input)?;
    let first_dump = first.to_string();
    let second = Selector::parse(&first_dump).context("could not parse the first dump")?;
    let second_dump = second.to_string();

    if first != second {
        println!("{}", "The ASTs differ!".bright_red());
        print_diff(&format!("{first:#?}"), &format!("{second:#?}"));

        return Ok(ExitCode::FAILURE);
    }

    if first_dump == second_dump {
        println!("{}", "The dumps are equal".bright_green());

        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "The dumps differ!".bright_red());
    print_diff(&first_dump, &second_dump);

    Ok(ExitCode::FAILURE)
}

fn match_scope(input: Input, scope: &str, left: Option<&str>) -> Result<ExitCode> {
    let (_, selector) = parse_input(input)?;
    let main: Scope = scope
        .parse()
        .with_context(|| format!("could not parse the scope `{scope}`"))?;
    let context = match left {
        Some(left) => {
            let left: Scope = left
                .parse()
                .with_context(|| format!("could not parse the left scope `{left}`"))?;

            Context::with_left(left, main)
        }

        None => Context::new(main),
    };

    if selector.matches(&context) {
        println!("{}", "matches".bright_green());

        Ok(ExitCode::SUCCESS)
    } else {
        println!("{}", "does not match".bright_red());

        Ok(ExitCode::FAILURE)
    }
}

fn main() -> ExitCode {
    if let Err(e) = color_eyre::install() {
        eprintln!("{e:?}");

        return ExitCode::FAILURE;
    }

    env_logger::init();

    let args = args::parse();

    match match args.command {
        Command::Ast { input } => print_ast(input).map(|_| ExitCode::SUCCESS),
        Command::Ouroboros { input, diff } => ouroboros(input, diff).map(|_| ExitCode::SUCCESS),
        Command::CheckIdempotence { input } => check_idempotence(input),
        Command::Match { input, scope, left } => match_scope(input, &scope, left.as_deref()),
    } {
        Ok(code) => code,

        Err(e) => {
            eprintln!("{e:?}");

            ExitCode::FAILURE
        }
    }
}
