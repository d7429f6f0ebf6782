use crate::artifacts::log::commit::{ChangeAction, ChangedPath, Commit};
use crate::errors::SlogError;
use anyhow::Context;
use chrono::DateTime;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Author,
    Date,
    Msg,
    Path,
}

#[derive(Debug, Default)]
struct LogEntryBuilder {
    revision: Option<u64>,
    author: Option<String>,
    date: Option<String>,
    message: Option<String>,
    changed_paths: Vec<ChangedPath>,
    path_action: Option<String>,
}

impl LogEntryBuilder {
    fn start(element: &BytesStart) -> anyhow::Result<Self> {
        let revision = attribute(element, "revision")?
            .map(|revision| {
                revision.parse::<u64>().map_err(|_| {
                    SlogError::MalformedCommit(format!("invalid revision '{revision}'"))
                })
            })
            .transpose()?;

        Ok(LogEntryBuilder {
            revision,
            ..Default::default()
        })
    }

    fn push_path(&mut self, path: String) -> anyhow::Result<()> {
        let revision = self.revision.unwrap_or_default();
        let action = self.path_action.take().ok_or_else(|| {
            SlogError::MalformedCommit(format!("r{revision}: path '{path}' has no action"))
        })?;
        let action = ChangeAction::try_from(action.as_str())
            .map_err(|e| SlogError::MalformedCommit(format!("r{revision}: {e}")))?;

        self.changed_paths.push(ChangedPath::new(action, path));
        Ok(())
    }

    fn build(self) -> Result<Commit, SlogError> {
        let revision = self.revision.ok_or_else(|| {
            SlogError::MalformedCommit("logentry without revision attribute".to_string())
        })?;
        let author = self
            .author
            .ok_or_else(|| SlogError::MalformedCommit(format!("r{revision} has no author")))?;
        let date = self
            .date
            .ok_or_else(|| SlogError::MalformedCommit(format!("r{revision} has no date")))?;
        let date = DateTime::parse_from_rfc3339(date.trim()).map_err(|e| {
            SlogError::MalformedCommit(format!("r{revision} has invalid date '{date}': {e}"))
        })?;

        Ok(Commit::new(
            revision,
            author,
            date,
            self.message.unwrap_or_default(),
            self.changed_paths,
        ))
    }
}

fn attribute(element: &BytesStart, name: &str) -> anyhow::Result<Option<String>> {
    element
        .try_get_attribute(name)?
        .map(|attr| -> anyhow::Result<String> { Ok(attr.unescape_value()?.into_owned()) })
        .transpose()
}

/// Parses the output of `svn log --xml -v` into commits, in document order.
///
/// A `logentry` lacking a revision, author or date is rejected as a malformed
/// commit record; a missing `msg` or `paths` element reads as empty. Entries
/// nested inside a merge revision (`svn log -g`) are skipped, only the
/// top-level revisions are returned.
pub fn parse_log(xml: &str) -> anyhow::Result<Vec<Commit>> {
    let mut reader = Reader::from_str(xml);
    let mut commits = Vec::new();
    let mut entry: Option<LogEntryBuilder> = None;
    let mut field: Option<Field> = None;
    let mut text = String::new();
    // 1 inside a top-level logentry, more inside merged-in children
    let mut depth = 0usize;

    loop {
        match reader
            .read_event()
            .with_context(|| format!("invalid svn log xml at byte {}", reader.buffer_position()))?
        {
            Event::Start(element) if element.name().as_ref() == b"logentry" => {
                depth += 1;
                if depth == 1 {
                    entry = Some(LogEntryBuilder::start(&element)?);
                }
            }
            Event::Start(_) | Event::Empty(_) | Event::Text(_) | Event::CData(_) if depth > 1 => {}
            Event::Start(element) => match element.name().as_ref() {
                b"author" => field = Some(Field::Author),
                b"date" => field = Some(Field::Date),
                b"msg" => field = Some(Field::Msg),
                b"path" => {
                    if let Some(entry) = entry.as_mut() {
                        entry.path_action = attribute(&element, "action")?;
                    }
                    field = Some(Field::Path);
                }
                _ => {}
            },
            Event::Empty(element) => match (element.name().as_ref(), entry.as_mut()) {
                (b"logentry", None) => {
                    commits.push(LogEntryBuilder::start(&element)?.build()?);
                }
                (b"author", Some(entry)) => entry.author = Some(String::new()),
                (b"msg", Some(entry)) => entry.message = Some(String::new()),
                _ => {}
            },
            Event::Text(content) if field.is_some() => {
                text.push_str(&content.unescape()?);
            }
            Event::CData(content) if field.is_some() => {
                text.push_str(&String::from_utf8_lossy(&content));
            }
            Event::End(element) if element.name().as_ref() == b"logentry" => {
                depth = depth.saturating_sub(1);
                if depth == 0
                    && let Some(done) = entry.take()
                {
                    commits.push(done.build()?);
                }
            }
            Event::End(_) if depth > 1 => {}
            Event::End(element) => {
                let value = std::mem::take(&mut text);
                let closed = field.take();
                let Some(current) = entry.as_mut() else {
                    continue;
                };

                match (element.name().as_ref(), closed) {
                    (b"author", Some(Field::Author)) => current.author = Some(value),
                    (b"date", Some(Field::Date)) => current.date = Some(value),
                    (b"msg", Some(Field::Msg)) => current.message = Some(value),
                    (b"path", Some(Field::Path)) => current.push_path(value)?,
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(commits)
}
