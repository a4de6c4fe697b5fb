use std::io::{self, BufRead, BufReader, Write};
use std::sync::{Arc, Mutex};

/// Line-oriented terminal I/O shared by the adapters and the form driver.
pub struct Console {
    input: Arc<Mutex<Box<dyn BufRead + Send>>>,
    output: Mutex<Box<dyn Write + Send>>,
}

impl Console {
    pub fn new(input: Box<dyn BufRead + Send>, output: Box<dyn Write + Send>) -> Self {
        Self {
            input: Arc::new(Mutex::new(input)),
            output: Mutex::new(output),
        }
    }

    pub fn stdio() -> Self {
        Self::new(
            Box::new(BufReader::new(io::stdin())),
            Box::new(io::stdout()),
        )
    }

    pub fn println(&self, line: &str) {
        let mut output = self.output.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(err) = writeln!(output, "{line}").and_then(|_| output.flush()) {
            tracing::warn!(error = %err, "failed to write to console");
        }
    }

    /// Prints `label` and reads one line. Returns `None` at end of input.
    ///
    /// The read runs on the blocking pool so a waiting prompt does not hold
    /// a runtime worker.
    pub async fn prompt(&self, label: &str) -> io::Result<Option<String>> {
        {
            let mut output = self.output.lock().unwrap_or_else(|e| e.into_inner());
            write!(output, "{label}")?;
            output.flush()?;
        }

        let input = Arc::clone(&self.input);
        tokio::task::spawn_blocking(move || read_line(&input))
            .await
            .map_err(io::Error::other)?
    }
}

fn read_line(input: &Mutex<Box<dyn BufRead + Send>>) -> io::Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
