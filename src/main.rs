use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use infix_calc::{Evaluation, Session};
use miette::{IntoDiagnostic, Report, WrapErr};

/// Evaluates infix arithmetic with variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File with one expression per line
    file: Option<PathBuf>,

    /// Evaluate a single expression
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Print the fully parenthesized form of each expression
    #[arg(long)]
    print_tree: bool,

    /// Trace progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn info(args: &Args, message: &str) {
    if args.verbose {
        eprintln!("[{}] [INFO] {}", Local::now().format("%H:%M:%S%.3f"), message);
    }
}

fn show(args: &Args, evaluation: &Evaluation) {
    if args.print_tree {
        println!("{} => {}", evaluation.canonical, evaluation.value);
    } else {
        println!("{}", evaluation.value);
    }
}

fn repl(args: &Args, session: &mut Session) -> miette::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().into_diagnostic()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).into_diagnostic()? == 0 {
            break;
        }

        match line.trim() {
            ":quit" | ":q" => break,
            ":vars" => {
                for (name, value) in session.store().sorted() {
                    println!("  {} = {}", name, value);
                }
            }
            ":reset" => {
                session.reset();
                info(args, "variables cleared");
            }
            input => match session.eval_line(input) {
                Ok(Some(evaluation)) => show(args, &evaluation),
                Ok(None) => {}
                Err(err) => eprintln!("{:?}", Report::new(err)),
            },
        }
    }

    info(args, "session ended");
    Ok(())
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    let mut session = Session::new();

    if let Some(expr) = &args.expr {
        info(&args, &format!("evaluating {expr:?}"));
        if let Some(evaluation) = session.eval_line(expr)? {
            show(&args, &evaluation);
        }
    } else if let Some(path) = &args.file {
        info(&args, &format!("reading {}", path.display()));
        let source = fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("reading {} failed", path.display()))?;
        let results = session.eval_source(&source)?;
        for evaluation in &results {
            show(&args, evaluation);
        }
        info(&args, &format!("{} expressions evaluated", results.len()));
    } else {
        info(&args, "starting interactive session");
        repl(&args, &mut session)?;
    }

    Ok(())
}
