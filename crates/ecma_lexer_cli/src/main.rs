//! Lexer shell: scans one or more files and either prints every token or
//! times the scan, mirroring `lexer-shell.cc`'s own `main()`.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use bpaf::Parser;
use ecma_lexer::{Allocator, CharacterStream, Kind, LexerFlags, Literal, LiteralRef, Scanner};
use ecma_span::{Encoding, SourceType};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone)]
struct Args {
    latin1: bool,
    utf8: bool,
    utf16: bool,
    print_tokens: bool,
    break_after_illegal: bool,
    use_harmony: bool,
    repeat: u32,
    eos_test: bool,
    files: Vec<PathBuf>,
}

fn args() -> bpaf::OptionParser<Args> {
    let latin1 = bpaf::long("latin1").help("Treat input as Latin-1").switch();
    let utf8 = bpaf::long("utf8").help("Treat input as UTF-8").switch();
    let utf16 = bpaf::long("utf16").help("Treat input as UTF-16 (native endian, BOM stripped)").switch();
    let print_tokens =
        bpaf::long("print-tokens").help("Emit each token's name, span, literal, octal position").switch();
    let break_after_illegal = bpaf::long("break-after-illegal").help("Stop printing on the first ILLEGAL").switch();
    let use_harmony = bpaf::long("use-harmony").help("Set all harmony flags").switch();
    let repeat = bpaf::long("repeat")
        .help("Concatenate the source N times before scanning")
        .argument::<u32>("N")
        .fallback(1);
    let eos_test = bpaf::long("eos-test")
        .help("Repeatedly truncate the input by one code unit from the end and re-scan")
        .switch();
    let files = bpaf::positional::<PathBuf>("FILE").help("Source file to scan").many();

    bpaf::construct!(Args {
        latin1,
        utf8,
        utf16,
        print_tokens,
        break_after_illegal,
        use_harmony,
        repeat,
        eos_test,
        files
    })
    .to_options()
    .descr("Scans ECMAScript source files and reports their token stream or timing")
    .version(env!("CARGO_PKG_VERSION"))
}

/// The file's bytes, already repeated and widened to the chosen encoding.
enum Source {
    Bytes(Vec<u8>),
    Units(Vec<u16>),
}

impl Source {
    fn len_code_units(&self) -> usize {
        match self {
            Self::Bytes(b) => b.len(),
            Self::Units(u) => u.len(),
        }
    }

    fn truncated(&self, by: usize) -> Self {
        match self {
            Self::Bytes(b) => Self::Bytes(b[..b.len() - by].to_vec()),
            Self::Units(u) => Self::Units(u[..u.len() - by].to_vec()),
        }
    }

    fn stream(&self, source_type: SourceType) -> CharacterStream<'_> {
        match (self, source_type.encoding()) {
            (Self::Bytes(b), Encoding::OneByte) => CharacterStream::from_one_byte(b),
            (Self::Bytes(b), Encoding::Utf8) => CharacterStream::from_utf8(b),
            (Self::Units(u), Encoding::TwoByte) => CharacterStream::from_two_byte(u),
            _ => unreachable!("Source/Encoding pairing is fixed at construction"),
        }
    }
}

fn load_source(path: &PathBuf, repeat: u32, source_type: SourceType) -> std::io::Result<Source> {
    let bytes = fs::read(path)?;
    let times = repeat.max(1) as usize;
    let mut repeated = Vec::with_capacity(bytes.len() * times);
    for _ in 0..times {
        repeated.extend_from_slice(&bytes);
    }

    Ok(match source_type.encoding() {
        Encoding::OneByte | Encoding::Utf8 => Source::Bytes(repeated),
        Encoding::TwoByte => {
            let units = repeated.chunks_exact(2).map(|pair| u16::from_ne_bytes([pair[0], pair[1]])).collect();
            Source::Units(units)
        }
    })
}

fn print_token(scanner: &Scanner<'_>, source: &Source) {
    let token = scanner.current_token();
    print!("=> {:>11} at ({}, {})", token.kind.name(), token.span.start, token.span.end);

    if token.kind.has_literal() {
        let one_byte = scanner.literal_is_one_byte();
        match scanner.literal() {
            Literal::OneByte(bytes) => {
                for b in bytes {
                    print!(" {b:02x}");
                }
            }
            Literal::TwoByte(units) => {
                for u in units {
                    print!(" {u:04x}");
                }
            }
            Literal::None => print_source_slice(token.literal, source, one_byte),
        }
        print!(" (is ascii: {})", u8::from(one_byte));
    }

    let octal = scanner.octal_position();
    let octal_start: i64 = if octal.is_valid() { i64::from(octal.start) } else { -1 };
    println!(" (last octal start: {octal_start})");
}

/// Print a `LiteralRef::Source` slice directly from the original buffer,
/// since the scanner itself only resolves `Buffer`-backed literals.
fn print_source_slice(literal: LiteralRef, source: &Source, one_byte: bool) {
    let LiteralRef::Source { offset, length, .. } = literal else { return };
    let start = offset as usize;
    let end = start + length as usize;
    match source {
        Source::Bytes(bytes) => {
            for b in &bytes[start..end] {
                print!(" {b:02x}");
            }
        }
        Source::Units(units) => {
            for u in &units[start..end] {
                if one_byte {
                    print!(" {:02x}", *u as u8);
                } else {
                    print!(" {u:04x}");
                }
            }
        }
    }
}

/// Scan `source` to completion, optionally printing every token. Returns the
/// elapsed time.
fn run_lexer(source: &Source, source_type: SourceType, flags: LexerFlags, args: &Args) -> std::time::Duration {
    let allocator = Allocator::default();
    let stream = source.stream(source_type);
    let mut scanner = Scanner::new(&allocator, stream, flags);

    let start = Instant::now();
    let mut saw_illegal = false;
    loop {
        let kind = scanner.current_token().kind;

        if args.print_tokens {
            if !(saw_illegal && args.break_after_illegal) {
                print_token(&scanner, source);
            }
        } else if kind.has_literal() {
            // Force literal resolution even when not printing, so the timed
            // region reflects the same work a real caller would do.
            let _ = scanner.literal();
        }

        if kind == Kind::Illegal {
            saw_illegal = true;
        }
        if kind == Kind::Eof {
            break;
        }
        scanner.advance();
    }
    start.elapsed()
}

fn process_file(path: &PathBuf, source_type: SourceType, flags: LexerFlags, args: &Args) -> std::time::Duration {
    let source = match load_source(path, args.repeat, source_type) {
        Ok(s) => s,
        Err(err) => {
            tracing::error!(file = %path.display(), %err, "failed to read source file");
            return std::time::Duration::ZERO;
        }
    };

    let mut total = std::time::Duration::ZERO;
    if args.eos_test {
        let full_len = source.len_code_units();
        for truncate_by in 0..=full_len {
            tracing::debug!(file = %path.display(), truncate_by, "eos-test pass");
            let truncated = source.truncated(truncate_by);
            total += run_lexer(&truncated, source_type, flags, args);
        }
    } else {
        total = run_lexer(&source, source_type, flags, args);
    }
    total
}

fn main() {
    let args = args().run();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();

    let source_type = SourceType::new(if args.utf16 {
        Encoding::TwoByte
    } else if args.utf8 {
        Encoding::Utf8
    } else if args.latin1 {
        Encoding::OneByte
    } else {
        // Matches the reference shell's default.
        Encoding::OneByte
    });

    let flags = if args.use_harmony { LexerFlags::all_harmony() } else { LexerFlags::empty() };

    let mut total_ms = 0.0f64;
    for file in &args.files {
        if args.print_tokens {
            println!("Processing file {}", file.display());
        }
        let elapsed = process_file(file, source_type, flags, &args);
        total_ms += elapsed.as_secs_f64() * 1000.0;
    }

    println!("RunTime: {total_ms:.0} ms");
}
