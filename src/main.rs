use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use log::info;

use rtuprobe::transport::{list_ports, Parity, SerialSettings, SerialTransport};
use rtuprobe::{execute, parse_request_line, HexFormatter, Outcome};

#[derive(Parser, Debug)]
#[command(name = "rtuprobe", version, about = "One-shot Modbus RTU register probe")]
struct Args {
    /// Serial port to probe, e.g. /dev/ttyUSB0 or COM12
    #[arg(short, long)]
    port: Option<String>,

    /// Baud rate
    #[arg(short, long, default_value_t = 9600)]
    baud: u32,

    /// Parity
    #[arg(long, value_enum, default_value = "none")]
    parity: Parity,

    /// Read timeout in milliseconds
    #[arg(long, default_value_t = 1000)]
    timeout_ms: u64,

    /// List available serial ports and exit
    #[arg(long)]
    list_ports: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_ports {
        list_ports()?;
        return Ok(());
    }

    let Some(port_name) = args.port else {
        bail!("no serial port given (use --port, or --list-ports to discover one)");
    };

    print!("Enter request parameters (hex, e.g. 0x01 0x03 0x00 0x00 0x00 0x02): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let params = parse_request_line(&line)?;

    let settings = SerialSettings {
        port_name,
        baud_rate: args.baud,
        parity: args.parity,
        timeout: Duration::from_millis(args.timeout_ms),
    };
    let transport = SerialTransport::open(&settings)?;

    // The transport is owned by the exchange and released when it returns,
    // on the error paths as well.
    let transaction = execute(transport, &params)?;

    let hex = HexFormatter;
    println!("Sent frame (Hex): {}", hex.format(&transaction.request));
    println!("Device response (Hex): {}", hex.format(&transaction.response));

    match transaction.outcome {
        Outcome::Valid => {
            println!("CRC verification OK!");
            if let Some(payload) = transaction.payload() {
                println!("Register data (Hex): {}", hex.format(payload));
            }
            info!("Transaction completed successfully");
        }
        Outcome::CrcMismatch => {
            println!("CRC verification failed!");
        }
    }

    Ok(())
}
