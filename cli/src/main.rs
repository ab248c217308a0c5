use clap::{Parser, Subcommand};
use pdf_textencoding::{CharCode, EncodingError, SimpleEncoder, TransformReader, TransformWriter};
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "pdf-textencoding")]
#[command(about = "Convert text through single-byte PDF font encodings", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Decode encoded bytes from stdin to UTF-8 on stdout
    Decode(EncodingArgs),
    /// Encode UTF-8 from stdin to encoded bytes on stdout
    Encode(EncodingArgs),
    /// Print every mapped code with its rune and glyph name
    Table(EncodingArgs),
}

#[derive(clap::Args)]
struct EncodingArgs {
    /// Base encoding name
    #[arg(short, long, default_value = "StandardEncoding")]
    encoding: String,

    /// Override a code, e.g. `0x27=quotesingle` (repeatable)
    #[arg(short, long = "diff", value_name = "CODE=GLYPH", value_parser = parse_difference)]
    diffs: Vec<(CharCode, String)>,
}

impl EncodingArgs {
    fn build(&self) -> Result<SimpleEncoder, EncodingError> {
        SimpleEncoder::builder()
            .base_encoding(self.encoding.as_str())
            .differences(self.diffs.iter().cloned())
            .build()
    }
}

fn parse_difference(s: &str) -> Result<(CharCode, String), String> {
    let (code, glyph) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CODE=GLYPH, got {s:?}"))?;
    let code = match code.strip_prefix("0x").or_else(|| code.strip_prefix("0X")) {
        Some(hex) => CharCode::from_str_radix(hex, 16),
        None => code.parse(),
    }
    .map_err(|e| format!("invalid code {code:?}: {e}"))?;
    if code > 0xff {
        return Err(format!("code {code} does not fit in one byte"));
    }
    if glyph.is_empty() {
        return Err("empty glyph name".to_string());
    }
    Ok((code, glyph.to_string()))
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    match command {
        Command::Decode(args) => {
            let enc = args.build()?;
            let mut reader = TransformReader::new(stdin.lock(), enc.decoder());
            let mut out = stdout.lock();
            io::copy(&mut reader, &mut out)?;
            out.flush()?;
        }
        Command::Encode(args) => {
            let enc = args.build()?;
            let mut writer = TransformWriter::new(stdout.lock(), enc.encoder());
            io::copy(&mut stdin.lock(), &mut writer)?;
            writer.finish()?.flush()?;
        }
        Command::Table(args) => {
            let enc = args.build()?;
            let mut out = stdout.lock();
            for code in enc.charcodes() {
                let Some(rune) = enc.charcode_to_rune(code) else {
                    continue;
                };
                let glyph = enc.charcode_to_glyph(code).unwrap_or("-");
                writeln!(out, "{:#04x}\tU+{:04X}\t{}", code, u32::from(rune), glyph)?;
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        if let Err(e) = simple_logger::SimpleLogger::new()
            .with_level(log::LevelFilter::Debug)
            .init()
        {
            eprintln!("Could not set up logging: {}", e);
        }
    }

    if let Err(e) = run(args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
