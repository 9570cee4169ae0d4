use crate::{
    format_json_with_repair, json_stats, minify_json_with_repair, parse_json_with_repair,
    repair_json, repair_json_with_log,
};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE   Write output to FILE (default stdout)\n\
               --pretty        Pretty-print (parse with repair, indent 2)\n\
               --indent N      Pretty-print with N spaces (implies --pretty)\n\
               --minify        Compact output (parse with repair)\n\
               --stats         Print key/depth/size stats to stderr\n\
               --log           Print applied repairs to stderr\n\
           -h, --help          Show this help\n",
        prog = program
    );
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Repair,
    Pretty(usize),
    Minify,
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    mode: OutputMode,
    stats: bool,
    log: bool,
}

fn parse_args() -> CliMode {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsonmend".to_string());
    args.remove(0);

    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut mode = OutputMode::Repair;
    let mut stats = false;
    let mut log = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                output = Some(args[i].clone());
            }
            "--pretty" => {
                mode = OutputMode::Pretty(2);
            }
            "--indent" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing N for --indent");
                    std::process::exit(2);
                }
                let n = match args[i].parse::<usize>() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("Invalid indent width: {}", args[i]);
                        std::process::exit(2);
                    }
                };
                mode = OutputMode::Pretty(n);
            }
            "--minify" => {
                mode = OutputMode::Minify;
            }
            "--stats" => {
                stats = true;
            }
            "--log" => {
                log = true;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    CliMode {
        input,
        output,
        mode,
        stats,
        log,
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mode = parse_args();

    let content = match &mode.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut out_writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    if mode.log {
        let (_, entries) = repair_json_with_log(&content);
        for e in &entries {
            eprintln!("repair at {}: {}", e.position, e.message);
        }
    }

    let text = match mode.mode {
        OutputMode::Repair => repair_json(&content),
        OutputMode::Pretty(indent) => {
            let parsed = match format_json_with_repair(&content, indent) {
                Ok(p) => p,
                Err(e) => return fail_parse(e),
            };
            emit_stats(mode.stats, &parsed.value);
            parsed.formatted.unwrap_or_default()
        }
        OutputMode::Minify => {
            let parsed = match minify_json_with_repair(&content) {
                Ok(p) => p,
                Err(e) => return fail_parse(e),
            };
            emit_stats(mode.stats, &parsed.value);
            parsed.formatted.unwrap_or_default()
        }
    };

    if mode.stats && mode.mode == OutputMode::Repair {
        match parse_json_with_repair(&content) {
            Ok(parsed) => emit_stats(true, &parsed.value),
            Err(e) => return fail_parse(e),
        }
    }

    out_writer.write_all(text.as_bytes())?;
    out_writer.write_all(b"\n")?;
    out_writer.flush()?;
    Ok(())
}

fn emit_stats(enabled: bool, value: &serde_json::Value) {
    if enabled {
        let s = json_stats(value);
        eprintln!("keys: {}, depth: {}, size: {}", s.keys, s.depth, s.size);
    }
}

fn fail_parse(e: crate::JsonError) -> Result<(), Box<dyn std::error::Error>> {
    match e.line() {
        Some(line) => eprintln!("parse error on line {}: {}", line, e),
        None => eprintln!("parse error: {}", e),
    }
    std::process::exit(1);
}
