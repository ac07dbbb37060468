use std::io::{Read, Write};
use std::time::Duration;

use log::{error, info};
use serialport::SerialPort;

use super::Transport;
use crate::utils::error::RtuError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Parity {
    None,
    Even,
    Odd,
}

#[derive(Debug, Clone)]
pub struct SerialSettings {
    pub port_name: String,
    pub baud_rate: u32,
    pub parity: Parity,
    pub timeout: Duration,
}

pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Opens the serial port with 8 data bits and 1 stop bit.
    pub fn open(settings: &SerialSettings) -> Result<Self, RtuError> {
        info!("🔌 Connecting to Modbus RTU port: {}", settings.port_name);
        info!(
            "⚙️  Configuration: {} baud, 8 data bits, 1 stop bit",
            settings.baud_rate
        );

        let serial_parity = match settings.parity {
            Parity::None => serialport::Parity::None,
            Parity::Even => serialport::Parity::Even,
            Parity::Odd => serialport::Parity::Odd,
        };

        let port = serialport::new(&settings.port_name, settings.baud_rate)
            .timeout(settings.timeout)
            .data_bits(serialport::DataBits::Eight)
            .stop_bits(serialport::StopBits::One)
            .parity(serial_parity)
            .open()
            .map_err(|e| {
                error!("❌ Failed to open serial port {}: {}", settings.port_name, e);
                RtuError::Connection(format!("Failed to open port: {}", e))
            })?;

        info!("Modbus RTU connection established successfully");
        Ok(Self { port })
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<(), RtuError> {
        self.port
            .write_all(bytes)
            .map_err(|e| RtuError::Transport(format!("Write failed: {}", e)))?;
        self.port
            .flush()
            .map_err(|e| RtuError::Transport(format!("Flush failed: {}", e)))?;
        Ok(())
    }

    fn read(&mut self, max_bytes: usize) -> Result<Vec<u8>, RtuError> {
        let mut buf = vec![0u8; max_bytes];
        let mut filled = 0;

        // The port timeout bounds each read call; a timeout ends the
        // response rather than failing the transaction, so a slave that
        // answers short (or not at all) surfaces as a CRC failure upstream.
        while filled < max_bytes {
            match self.port.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::TimedOut => break,
                Err(e) => return Err(RtuError::Transport(format!("Read failed: {}", e))),
            }
        }

        buf.truncate(filled);
        Ok(buf)
    }
}

/// Prints the serial ports visible on this machine.
pub fn list_ports() -> Result<(), RtuError> {
    println!("📡 Available Serial Ports:");

    let ports = serialport::available_ports()?;
    if ports.is_empty() {
        println!("   ⚠️  No serial ports found");
        return Ok(());
    }

    for (index, port) in ports.iter().enumerate() {
        println!("   {}. {}", index + 1, port.port_name);
        if let serialport::SerialPortType::UsbPort(usb_info) = &port.port_type {
            if let Some(manufacturer) = &usb_info.manufacturer {
                println!("      Manufacturer: {}", manufacturer);
            }
            if let Some(serial_number) = &usb_info.serial_number {
                println!("      Serial Number: {}", serial_number);
            }
        }
    }

    Ok(())
}
