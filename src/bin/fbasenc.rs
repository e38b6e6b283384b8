// fbasenc: encode/decode data in various encodings (GNU basenc replacement)

use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};

use basenc_rs::basenc::{self, DEFAULT_WRAP, Encoding};
use basenc_rs::common::io::read_input;
use basenc_rs::common::{io_error_msg, reset_sigpipe};

const TOOL_NAME: &str = "basenc";

#[derive(Parser)]
#[command(
    name = "basenc",
    about = "basenc encode or decode FILE, or standard input, to standard output.",
    after_help = "With no FILE, or when FILE is -, read standard input.\n\n\
        When decoding, the input may contain newlines in addition to the bytes of\n\
        the formal alphabet.  Use --ignore-garbage to attempt to recover\n\
        from any other non-alphabet bytes in the encoded stream.",
    version
)]
#[command(group(ArgGroup::new("encoding").multiple(false)))]
struct Cli {
    /// Same as 'base64' program (RFC4648 section 4)
    #[arg(long, group = "encoding")]
    base64: bool,

    /// File- and url-safe base64 (RFC4648 section 5)
    #[arg(long, group = "encoding")]
    base64url: bool,

    /// Visually unambiguous base58 encoding
    #[arg(long, group = "encoding")]
    base58: bool,

    /// Same as 'base32' program (RFC4648 section 6)
    #[arg(long, group = "encoding")]
    base32: bool,

    /// Extended hex alphabet base32 (RFC4648 section 7)
    #[arg(long, group = "encoding")]
    base32hex: bool,

    /// Hex encoding (RFC4648 section 8)
    #[arg(long, group = "encoding")]
    base16: bool,

    /// Bit string with most significant bit (msb) first
    #[arg(long, group = "encoding")]
    base2msbf: bool,

    /// Bit string with least significant bit (lsb) first
    #[arg(long, group = "encoding")]
    base2lsbf: bool,

    /// Ascii85-like encoding (ZeroMQ spec:32/Z85);
    /// when encoding, input length must be a multiple of 4;
    /// when decoding, input length must be a multiple of 5
    #[arg(long, group = "encoding")]
    z85: bool,

    /// Decode data
    #[arg(short = 'd', long = "decode")]
    decode: bool,

    /// When decoding, ignore non-alphabet characters
    #[arg(short = 'i', long = "ignore-garbage")]
    ignore_garbage: bool,

    /// Wrap encoded lines after COLS character (default 76).
    /// Use 0 to disable line wrapping
    #[arg(
        short = 'w',
        long = "wrap",
        value_name = "COLS",
        default_value_t = DEFAULT_WRAP,
        value_parser = parse_wrap,
        allow_negative_numbers = true
    )]
    wrap: usize,

    /// File to process (reads stdin if omitted or -)
    file: Option<String>,
}

impl Cli {
    fn encoding(&self) -> Option<Encoding> {
        [
            (self.base64, Encoding::Base64),
            (self.base64url, Encoding::Base64Url),
            (self.base58, Encoding::Base58),
            (self.base32, Encoding::Base32),
            (self.base32hex, Encoding::Base32Hex),
            (self.base16, Encoding::Base16),
            (self.base2msbf, Encoding::Base2Msbf),
            (self.base2lsbf, Encoding::Base2Lsbf),
            (self.z85, Encoding::Z85),
        ]
        .into_iter()
        .find_map(|(set, encoding)| set.then_some(encoding))
    }
}

/// Negative widths disable wrapping, same as 0.
fn parse_wrap(s: &str) -> Result<usize, String> {
    match s.parse::<i64>() {
        Ok(n) if n <= 0 => Ok(0),
        _ => s
            .parse::<usize>()
            .map_err(|_| format!("invalid wrap size: '{}'", s)),
    }
}

/// Parse the command line. Usage errors get a single `basenc: ` line and exit 1.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("{}: {}", TOOL_NAME, usage_error_msg(&e));
                eprintln!("Try '{} --help' for more information.", TOOL_NAME);
                process::exit(1);
            }
        },
    }
}

/// First line of a clap error without its `error: ` tag; value parser
/// failures use the parser's own message.
fn usage_error_msg(e: &clap::Error) -> String {
    if let Some(source) = std::error::Error::source(e) {
        return source.to_string();
    }
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

fn main() {
    reset_sigpipe();

    let cli = parse_args();

    let Some(encoding) = cli.encoding() else {
        eprintln!("{}: missing encoding type", TOOL_NAME);
        eprintln!("Try '{} --help' for more information.", TOOL_NAME);
        process::exit(1);
    };

    let filename = cli.file.as_deref().unwrap_or("-");

    if let Err(err) = run(&cli, encoding, filename) {
        if is_broken_pipe(&err) {
            process::exit(0);
        }
        eprintln!("{}: {}", TOOL_NAME, describe(&err));
        process::exit(1);
    }
}

/// Read the whole input, run one codec call over it and write the result.
fn run(cli: &Cli, encoding: Encoding, filename: &str) -> anyhow::Result<()> {
    let data = if filename == "-" {
        read_input(filename)?
    } else {
        read_input(filename).with_context(|| filename.to_string())?
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::with_capacity(1024 * 1024, stdout.lock());

    if cli.decode {
        basenc::decode_to_writer(&data, encoding, cli.ignore_garbage, &mut out)?;
    } else {
        basenc::encode_to_writer(&data, encoding, cli.wrap, &mut out)?;
    }

    out.flush()?;
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

/// GNU-style message: context layers joined by ": ", OS errors without the "(os error N)" suffix.
fn describe(err: &anyhow::Error) -> String {
    err.chain()
        .map(|cause| match cause.downcast_ref::<io::Error>() {
            Some(e) => io_error_msg(e),
            None => cause.to_string(),
        })
        .collect::<Vec<_>>()
        .join(": ")
}
