use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    rc::Rc,
};

use crate::{errors::errors::{Error, ErrorImpl}, Position};

/// Supplies source lines in order.
pub trait LineSource {
    /// Returns the next line without its terminator, or `None` at the end
    /// of input.
    fn next_line(&mut self) -> Result<Option<String>, Error>;

    /// 1-based number of the line most recently returned, 0 before the first.
    fn line_number(&self) -> usize;
}

/// Line source over any buffered reader.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    name: Rc<String>,
    line: usize,
    buffer: String,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R, name: &str) -> ReaderSource<R> {
        ReaderSource {
            reader,
            name: Rc::new(String::from(name)),
            line: 0,
            buffer: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ReaderSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let name = path.to_string_lossy();

        let file = File::open(path).map_err(|err| {
            Error::new(
                ErrorImpl::file_open(&err),
                Position(0, Rc::new(name.to_string())),
            )
        })?;

        log::info!("tokenizing {}", name);
        Ok(ReaderSource::new(BufReader::new(file), &name))
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Result<Option<String>, Error> {
        self.buffer.clear();

        let read = self.reader.read_line(&mut self.buffer).map_err(|err| {
            Error::new(
                ErrorImpl::read_line(&err),
                Position(self.line + 1, Rc::clone(&self.name)),
            )
        })?;

        if read == 0 {
            log::debug!("{}: end of input after {} lines", self.name, self.line);
            return Ok(None);
        }

        self.line += 1;

        let mut line = self.buffer.as_str();
        if let Some(stripped) = line.strip_suffix('\n') {
            line = stripped.strip_suffix('\r').unwrap_or(stripped);
        }

        Ok(Some(String::from(line)))
    }

    fn line_number(&self) -> usize {
        self.line
    }
}
