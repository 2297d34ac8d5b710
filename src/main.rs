//! # Cashout CLI
//!
//! Command-line interface for voucher ticket printing.
//!
//! ## Usage
//!
//! ```bash
//! # List templates
//! cashout templates
//!
//! # Print a detailed ticket
//! cashout print --template detailed --amount 1500.50 --validation 01-2345-6789 --now
//!
//! # Print from a JSON request, to a file instead of the printer
//! cashout print --request voucher.json --output ticket.bin
//!
//! # Calibration ticket with custom alignment constants
//! cashout calibrate --config cashout.json
//!
//! # Amount in words
//! cashout words 1234.50
//!
//! # Inspect the composed bytes
//! cashout dump --template aligned --amount 20
//! ```
//!
//! Set `RUST_LOG=debug` to see request defaulting and composition details.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cashout::{
    Amount, CashoutError, Composer, Settings, Template,
    amount::AmountInput,
    ticket::{ComposeOptions, VoucherRecord, VoucherRequest},
    transport::{FileSink, PrintSink, SerialTransport},
};

/// Cashout - Voucher ticket printer utility
#[derive(Parser, Debug)]
#[command(name = "cashout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compose a voucher and send it to the printer
    Print {
        /// Layout template (see `cashout templates`)
        #[arg(long, default_value = "plain")]
        template: String,

        #[command(flatten)]
        voucher: VoucherArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Drop repeated font/alignment selections
        #[arg(long)]
        dedupe_styles: bool,
    },

    /// Print the calibration ticket
    Calibrate {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Spell out an amount in words
    Words {
        amount: String,

        /// Sentence case instead of upper case
        #[arg(long)]
        sentence: bool,
    },

    /// List available templates
    Templates,

    /// Print the composed stream as hex instead of sending it
    Dump {
        #[arg(long, default_value = "plain")]
        template: String,

        #[command(flatten)]
        voucher: VoucherArgs,

        /// Settings file (JSON)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        #[arg(long)]
        dedupe_styles: bool,
    },
}

/// Voucher fields. Flags override values from `--request`.
#[derive(Args, Debug)]
struct VoucherArgs {
    /// JSON request file (camelCase keys)
    #[arg(long, value_name = "FILE")]
    request: Option<PathBuf>,

    #[arg(long)]
    voucher_type: Option<String>,

    #[arg(long)]
    valid_date: Option<String>,

    #[arg(long)]
    amount: Option<String>,

    #[arg(long)]
    validation: Option<String>,

    #[arg(long)]
    ticket_no: Option<String>,

    #[arg(long)]
    time: Option<String>,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    asset: Option<String>,

    #[arg(long)]
    floor: Option<String>,

    /// Stamp time and valid date from the local clock
    #[arg(long)]
    now: bool,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Serial device (overrides the settings file)
    #[arg(long)]
    device: Option<String>,

    /// Baud rate (overrides the settings file)
    #[arg(long)]
    baud: Option<u32>,

    /// Write the stream to a file instead of the printer
    #[arg(long, value_name = "FILE", conflicts_with_all = ["device", "baud"])]
    output: Option<PathBuf>,

    /// Settings file (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CashoutError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            template,
            voucher,
            output,
            dedupe_styles,
        } => {
            let template: Template = template.parse()?;
            let settings = load_settings(output.config.as_ref())?;

            // Open the sink first: a missing printer should fail before composing
            let mut sink = open_sink(&output, &settings)?;

            let record = voucher.into_record()?;
            let bytes = Composer::from_settings(&settings)
                .with_options(ComposeOptions { dedupe_styles })
                .compose(template, &record)?;

            println!("Printing {} ticket #{}...", template, record.ticket_no);
            sink.send(&bytes)?;
            println!("Printed successfully!");
            Ok(())
        }

        Commands::Calibrate { output } => {
            let settings = load_settings(output.config.as_ref())?;
            let mut sink = open_sink(&output, &settings)?;

            let bytes = Composer::from_settings(&settings).diagnostic()?;

            println!("Printing calibration ticket...");
            sink.send(&bytes)?;
            println!(
                "Compare the ruler marks with the page, then adjust page_width and char_width."
            );
            Ok(())
        }

        Commands::Words { amount, sentence } => {
            let amount = Amount::try_from(AmountInput::from(amount))?;
            let words = amount.words();
            let words = if sentence { words.sentence() } else { words };
            println!("{}", words);
            Ok(())
        }

        Commands::Templates => {
            println!("Available templates:");
            for template in Template::all() {
                println!("  {:<12} {}", template.name(), template.description());
            }
            Ok(())
        }

        Commands::Dump {
            template,
            voucher,
            config,
            dedupe_styles,
        } => {
            let template: Template = template.parse()?;
            let settings = load_settings(config.as_ref())?;
            let record = voucher.into_record()?;
            let bytes = Composer::from_settings(&settings)
                .with_options(ComposeOptions { dedupe_styles })
                .compose(template, &record)?;

            println!("{}", hex_dump(&bytes));
            println!("{} bytes", bytes.len());
            Ok(())
        }
    }
}

impl VoucherArgs {
    fn into_record(self) -> Result<VoucherRecord, CashoutError> {
        let mut request = match &self.request {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|e| {
                    CashoutError::Request(format!("Failed to read {}: {}", path.display(), e))
                })?;
                VoucherRequest::from_json(&text)?
            }
            None => VoucherRequest::default(),
        };

        if self.now {
            let now = Local::now();
            request.time = Some(now.format("%H:%M:%S").to_string());
            request.valid_date = Some(now.format("%d.%m.%Y").to_string());
        }

        override_with(&mut request.voucher_type, self.voucher_type);
        override_with(&mut request.valid_date, self.valid_date);
        override_with(&mut request.validation, self.validation);
        override_with(&mut request.ticket_no, self.ticket_no);
        override_with(&mut request.time, self.time);
        override_with(&mut request.location, self.location);
        override_with(&mut request.asset, self.asset);
        override_with(&mut request.floor, self.floor);
        if let Some(amount) = self.amount {
            request.amount = Some(AmountInput::Text(amount));
        }

        request.into_record()
    }
}

fn override_with(slot: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *slot = value;
    }
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings, CashoutError> {
    match path {
        Some(path) => Settings::load(path),
        None => Ok(Settings::default()),
    }
}

fn open_sink(output: &OutputArgs, settings: &Settings) -> Result<Box<dyn PrintSink>, CashoutError> {
    if let Some(path) = &output.output {
        return Ok(Box::new(FileSink::create(path)?));
    }

    let device = output
        .device
        .as_deref()
        .unwrap_or(&settings.printer.device);
    let baud = output.baud.unwrap_or(settings.printer.baud_rate);
    Ok(Box::new(SerialTransport::open(device, baud)?))
}

/// 16 bytes per row, offset first.
fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .chunks(16)
        .enumerate()
        .map(|(row, chunk)| {
            let hex: Vec<String> = chunk.iter().map(|b| format!("{:02X}", b)).collect();
            format!("{:04X}  {}", row * 16, hex.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
