use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use diffpane::{DiffpaneError, Format, RenderOptions, ViewMode, input, share};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "diffpane", version)]
#[command(about = "View unified diffs in unified or side-by-side layout")]
struct Cli {
    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a diff with line numbers
    View {
        /// Diff or patch file ("-" reads stdin)
        #[arg(default_value = "-")]
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t = ModeArg::Unified)]
        mode: ModeArg,
        #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
        /// Content width of each side-by-side text column
        #[arg(short, long, default_value_t = 60)]
        width: usize,
        /// Render the built-in sample diff instead of reading input
        #[arg(long)]
        sample: bool,
    },
    /// Print file, insertion and deletion counts
    Stats {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Encode or decode share tokens
    Share {
        #[command(subcommand)]
        action: ShareAction,
    },
    /// Generate shell completions
    Completions { shell: clap_complete::Shell },
    /// Generate a man page
    Man,
}

#[derive(Subcommand)]
enum ShareAction {
    /// Turn a diff into a share token (or URL with --base-url)
    Encode {
        #[arg(default_value = "-")]
        input: PathBuf,
        /// Page URL the token is added to as the `diff` query parameter
        #[arg(long)]
        base_url: Option<String>,
        #[arg(short, long, value_enum, default_value_t = EncodingArg::Brotli)]
        encoding: EncodingArg,
    },
    /// Print the diff held by a share token or URL
    Decode { token: String },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum ModeArg {
    Unified,
    SideBySide,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Html,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum EncodingArg {
    Brotli,
    Gzip,
    Raw,
}

impl From<ModeArg> for ViewMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Unified => ViewMode::Unified,
            ModeArg::SideBySide => ViewMode::SideBySide,
        }
    }
}

impl From<EncodingArg> for share::Encoding {
    fn from(encoding: EncodingArg) -> Self {
        match encoding {
            EncodingArg::Brotli => share::Encoding::Brotli,
            EncodingArg::Gzip => share::Encoding::Gzip,
            EncodingArg::Raw => share::Encoding::Raw,
        }
    }
}

impl From<FormatArg> for Format {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => Format::Text,
            FormatArg::Html => Format::Html,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::View {
            input,
            mode,
            format,
            width,
            sample,
        } => {
            let text = if sample {
                input::sample_diff().to_string()
            } else {
                read_input(&input)?
            };
            let loaded = diffpane::load(&text);
            if loaded.document.is_empty() {
                eprintln!("No diff to display");
                return Ok(());
            }
            log::info!("{}", loaded.stats);

            let options = RenderOptions {
                mode: mode.into(),
                format: format.into(),
                width,
            };
            stdout.write_all(diffpane::render(&loaded.document, &options).as_bytes())?;
        }
        Commands::Stats { input } => {
            let loaded = diffpane::load(&read_input(&input)?);
            writeln!(stdout, "{}", loaded.stats)?;
        }
        Commands::Share { action } => match action {
            ShareAction::Encode {
                input,
                base_url,
                encoding,
            } => {
                let text = read_input(&input)?;
                let shared = match base_url {
                    Some(base) => share::share_url(&base, &text, encoding.into()),
                    None => share::encode_with(&text, encoding.into()),
                }
                .map_err(DiffpaneError::from)?;
                writeln!(stdout, "{shared}")?;
            }
            ShareAction::Decode { token } => {
                let token = if token.contains('?') {
                    share::token_from_url(&token).map_err(DiffpaneError::from)?
                } else {
                    token
                };
                let text = share::decode(&token).map_err(DiffpaneError::from)?;
                stdout.write_all(text.as_bytes())?;
            }
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "diffpane", &mut stdout);
        }
        Commands::Man => {
            clap_mangen::Man::new(Cli::command()).render(&mut stdout)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Read diff text, rejecting input that holds nothing but whitespace
fn read_input(path: &Path) -> Result<String, DiffpaneError> {
    let text = input::read_diff(path)?;
    if text.trim().is_empty() {
        return Err(DiffpaneError::NoDiffContent {
            source_name: path.display().to_string(),
        });
    }
    Ok(text)
}
