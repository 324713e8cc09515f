//! System MIDI output ports via `midir`.

use std::thread;
use std::time::Duration;

use midir::{MidiOutput, MidiOutputConnection, MidiOutputPort};
use tracing::info;

use crate::error::MidiError;
use crate::play::MidiSink;

const CLIENT_NAME: &str = "chimes";

fn client() -> Result<MidiOutput, MidiError> {
    MidiOutput::new(CLIENT_NAME).map_err(|e| MidiError::PortInit(Box::new(e)))
}

fn port_name(output: &MidiOutput, port: &MidiOutputPort) -> Result<String, MidiError> {
    output
        .port_name(port)
        .map_err(|e| MidiError::PortInfo(Box::new(e)))
}

/// Returns the names of the available MIDI output ports, in port-number
/// order.
///
/// # Errors
///
/// Returns [`MidiError::PortInit`] if the MIDI backend is unavailable, or
/// [`MidiError::PortInfo`] if a port disappears while it is listed.
pub fn output_ports() -> Result<Vec<String>, MidiError> {
    let output = client()?;
    output
        .ports()
        .iter()
        .map(|port| port_name(&output, port))
        .collect()
}

/// An open output port. Waits block the calling thread.
pub struct PortSink {
    connection: MidiOutputConnection,
    name: String,
}

impl PortSink {
    /// Connects to output port number `index` as listed by [`output_ports`].
    ///
    /// # Errors
    ///
    /// Returns [`MidiError::PortNotFound`] for an unknown port number,
    /// [`MidiError::PortConnect`] if the port refuses the connection, or a
    /// backend error from [`output_ports`].
    pub fn open(index: usize) -> Result<Self, MidiError> {
        let output = client()?;
        let ports = output.ports();
        let port = ports.get(index).ok_or(MidiError::PortNotFound {
            index,
            available: ports.len(),
        })?;
        let name = port_name(&output, port)?;
        let connection = output
            .connect(port, CLIENT_NAME)
            .map_err(|e| MidiError::PortConnect {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        info!(index, name = %name, "opened MIDI output port");
        Ok(Self { connection, name })
    }

    /// Returns the port name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Closes the connection.
    pub fn close(self) {
        self.connection.close();
    }
}

impl MidiSink for PortSink {
    fn send(&mut self, message: &[u8]) -> Result<(), MidiError> {
        self.connection
            .send(message)
            .map_err(|e| MidiError::Playback(Box::new(e)))
    }

    fn wait(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
