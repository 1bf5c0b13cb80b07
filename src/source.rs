//! Record sources: the export files each dataset is read from.
//!
//! Two shapes are supported. Relational exports arrive as XML with `<row>`
//! elements containing `<field name="...">` children, where an `xsi:nil`
//! attribute marks an absent value. Demographic feeds arrive as
//! pipe-delimited text with a header row.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{EntityError, SourceError};

/// A single source row as a field-name-to-value map.
///
/// Absent values (nil-marked, or empty after trimming) are not stored, so
/// `get` returning `None` covers both missing and empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Sets a field; an empty value removes it instead.
    pub fn set(&mut self, field: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.fields.remove(field);
        } else {
            self.fields.insert(field.to_string(), value.to_string());
        }
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.fields.remove(field)
    }

    pub fn rename(&mut self, from: &str, to: &str) {
        if let Some(value) = self.fields.remove(from) {
            self.fields.insert(to.to_string(), value);
        }
    }

    pub fn require(&self, field: &str) -> Result<&str, EntityError> {
        self.get(field).ok_or_else(|| EntityError::MissingField {
            field: field.to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.set(&k.into(), &v.into());
        }
        record
    }
}

pub type RecordIter<'a> = Box<dyn Iterator<Item = Result<Record, SourceError>> + 'a>;

/// Anything a dataset can be read from.
pub trait RecordSource {
    fn records(&self) -> Result<RecordIter<'_>, SourceError>;
}

fn open(path: &Path) -> Result<File, SourceError> {
    File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            SourceError::Missing {
                path: path.display().to_string(),
            }
        } else {
            SourceError::Io {
                path: path.display().to_string(),
                source,
            }
        }
    })
}

/// A relational-export XML file.
pub struct ExportXmlSource {
    path: PathBuf,
}

impl ExportXmlSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for ExportXmlSource {
    fn records(&self) -> Result<RecordIter<'_>, SourceError> {
        let file = open(&self.path)?;
        let mut reader = Reader::from_reader(BufReader::new(file));
        reader.config_mut().trim_text(true);
        Ok(Box::new(XmlRecords {
            path: self.path.display().to_string(),
            reader,
            buf: Vec::new(),
            done: false,
        }))
    }
}

struct XmlRecords {
    path: String,
    reader: Reader<BufReader<File>>,
    buf: Vec<u8>,
    done: bool,
}

impl XmlRecords {
    // Associated, not a method: callers hold the current event, which
    // borrows `self.buf` mutably.
    fn malformed(path: &str, message: impl ToString) -> SourceError {
        SourceError::Xml {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    fn next_row(&mut self) -> Result<Option<Record>, SourceError> {
        let mut record: Option<Record> = None;
        let mut field_name: Option<String> = None;
        let mut field_nil = false;
        let mut field_value = String::new();
        loop {
            self.buf.clear();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .map_err(|e| Self::malformed(&self.path, e))?;
            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let empty = matches!(event, Event::Empty(_));
                    match e.name().as_ref() {
                        b"row" => record = Some(Record::new()),
                        b"field" if record.is_some() => {
                            let mut name = None;
                            let mut nil = false;
                            for attr in e.attributes() {
                                let attr = attr.map_err(|e| Self::malformed(&self.path, e))?;
                                match attr.key.as_ref() {
                                    b"name" => {
                                        name = Some(
                                            attr.unescape_value()
                                                .map_err(|e| Self::malformed(&self.path, e))?
                                                .into_owned(),
                                        );
                                    }
                                    b"xsi:nil" => nil = true,
                                    _ => {}
                                }
                            }
                            let name = name.ok_or_else(|| {
                                Self::malformed(&self.path, "field without name attribute")
                            })?;
                            if empty {
                                // <field name="x"/> or nil-marked: absent.
                            } else {
                                field_name = Some(name);
                                field_nil = nil;
                                field_value.clear();
                            }
                        }
                        _ => {}
                    }
                }
                Event::Text(t) => {
                    if field_name.is_some() {
                        let text = t.unescape().map_err(|e| Self::malformed(&self.path, e))?;
                        field_value.push_str(&text);
                    }
                }
                Event::End(e) => match e.name().as_ref() {
                    b"field" => {
                        if let (Some(name), Some(record)) = (field_name.take(), record.as_mut()) {
                            if !field_nil {
                                record.set(&name, &field_value);
                            }
                        }
                    }
                    b"row" => {
                        if let Some(record) = record.take() {
                            return Ok(Some(record));
                        }
                    }
                    _ => {}
                },
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }
}

impl Iterator for XmlRecords {
    type Item = Result<Record, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_row() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// A delimited text file with a header row.
pub struct DelimitedSource {
    path: PathBuf,
    delimiter: u8,
}

impl DelimitedSource {
    pub fn new(path: impl Into<PathBuf>, delimiter: u8) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }

    /// The demographic feed dialect.
    pub fn pipe(path: impl Into<PathBuf>) -> Self {
        Self::new(path, b'|')
    }
}

impl RecordSource for DelimitedSource {
    fn records(&self) -> Result<RecordIter<'_>, SourceError> {
        let file = open(&self.path)?;
        let path = self.path.display().to_string();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(BufReader::new(file));
        let headers = reader
            .headers()
            .map_err(|e| SourceError::Delimited {
                path: path.clone(),
                message: e.to_string(),
            })?
            .clone();
        Ok(Box::new(reader.into_records().map(move |row| {
            let row = row.map_err(|e| SourceError::Delimited {
                path: path.clone(),
                message: e.to_string(),
            })?;
            Ok(headers.iter().zip(row.iter()).collect())
        })))
    }
}
