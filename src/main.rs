use std::{fs, process, thread};

use clap::Parser;
use stackwalk::{
    init_tracing,
    interpreter::evaluator::core::{DEFAULT_MAX_CALL_DEPTH, Engine, STACK_BYTES_PER_CALL},
    run_with,
};

/// Upper bound accepted for `--max-depth`.
const MAX_DEPTH_LIMIT: usize = 4096;

/// Stack kept for the interpreter itself on top of the per-call reserve.
const BASE_STACK_BYTES: usize = 1024 * 1024;

/// stackwalk runs a small imperative script and prints its top-level
/// bindings.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stackwalk to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Maximum number of nested function calls (1 to 4096).
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH, value_parser = parse_depth)]
    max_depth: usize,

    contents: String,
}

fn parse_depth(s: &str) -> Result<usize, String> {
    let depth = s.parse::<usize>().map_err(|e| e.to_string())?;
    if (1..=MAX_DEPTH_LIMIT).contains(&depth) {
        Ok(depth)
    } else {
        Err(format!("must be between 1 and {MAX_DEPTH_LIMIT}"))
    }
}

/// Runs the script and prints the sorted root bindings. Returns the process
/// exit code.
fn execute(script: &str, max_depth: usize) -> i32 {
    let mut engine = Engine::new().with_max_call_depth(max_depth);
    if let Err(e) = run_with(script, &mut engine) {
        eprintln!("{e}");
        return 1;
    }

    let mut globals = engine.globals().iter().collect::<Vec<_>>();
    globals.sort_by(|a, b| a.0.cmp(b.0));
    for (name, value) in globals {
        println!("{name} = {value}");
    }
    0
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    let max_depth = args.max_depth;
    let stack_size = BASE_STACK_BYTES + max_depth * STACK_BYTES_PER_CALL;
    let worker = thread::Builder::new().name("stackwalk".to_string())
                                       .stack_size(stack_size)
                                       .spawn(move || execute(&script, max_depth));

    let code = match worker.map(thread::JoinHandle::join) {
        Ok(Ok(code)) => code,
        Ok(Err(_)) => 1,
        Err(e) => {
            eprintln!("Failed to start the interpreter thread: {e}");
            1
        },
    };
    process::exit(code);
}
