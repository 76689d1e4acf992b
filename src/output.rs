use std::io::{self, Write};

// --- OutputTarget: where a stream of records ends up ---
pub enum OutputTarget {
    Stdout(io::Stdout),
    Stderr(io::Stderr),
    Buffer(Vec<u8>),
}

impl OutputTarget {
    pub fn stdout() -> Self {
        OutputTarget::Stdout(io::stdout())
    }

    pub fn stderr() -> Self {
        OutputTarget::Stderr(io::stderr())
    }

    /// Captured text, empty for the process streams.
    pub fn contents(&self) -> String {
        match self {
            OutputTarget::Buffer(buf) => String::from_utf8_lossy(buf).into_owned(),
            _ => String::new(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::Stdout(s) => s.write(buf),
            OutputTarget::Stderr(s) => s.write(buf),
            OutputTarget::Buffer(b) => b.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => s.flush(),
            OutputTarget::Stderr(s) => s.flush(),
            OutputTarget::Buffer(_) => Ok(()),
        }
    }
}
