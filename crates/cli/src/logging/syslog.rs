use std::io;
use std::os::unix::net::UnixDatagram;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::MakeWriter;

/// A connected datagram socket to the syslog daemon.
///
/// Each formatted event arrives as a single `write` call and is sent as one
/// datagram, without its trailing newline.
#[derive(Debug, Clone)]
pub struct SyslogSocket {
    socket: Arc<UnixDatagram>,
}

impl SyslogSocket {
    pub fn connect(path: impl AsRef<Path>) -> io::Result<Self> {
        let socket = UnixDatagram::unbound()?;
        socket.connect(path)?;
        Ok(Self::from(socket))
    }
}

impl From<UnixDatagram> for SyslogSocket {
    fn from(socket: UnixDatagram) -> Self {
        Self {
            socket: Arc::new(socket),
        }
    }
}

impl io::Write for SyslogSocket {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let message = buf.strip_suffix(b"\n").unwrap_or(buf);
        self.socket.send(message)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SyslogSocket {
    type Writer = SyslogSocket;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
