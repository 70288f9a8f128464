//! In-place removal of stale messages from `.ts` content.
//!
//! The content is spliced rather than re-serialized, so everything outside
//! the removed `<message>` blocks stays byte-for-byte identical (entity
//! spelling, attribute order, indentation).

use std::ops::Range;

use anyhow::{Result, bail};
use quick_xml::{Reader, events::Event};

use super::{data::TranslationStatus, parsers::ts::markup_start};

/// Remove every `<message>` whose translation is obsolete or vanished.
///
/// Returns the new content and the number of removed messages. A removed
/// message takes its indentation and line break with it when it sits on its
/// own lines.
pub fn remove_stale_messages(content: &str) -> Result<(String, usize)> {
    let ranges = stale_message_ranges(content)?;
    if ranges.is_empty() {
        return Ok((content.to_string(), 0));
    }

    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;
    for range in &ranges {
        output.push_str(&content[cursor..range.start]);
        cursor = range.end;
    }
    output.push_str(&content[cursor..]);

    Ok((output, ranges.len()))
}

fn stale_message_ranges(content: &str) -> Result<Vec<Range<usize>>> {
    let mut reader = Reader::from_str(content);
    let mut ranges = Vec::new();
    let mut message_start: Option<usize> = None;
    let mut stale = false;

    loop {
        let offset = markup_start(content, reader.buffer_position() as usize);
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => bail!("XML error at byte {}: {}", reader.error_position(), e),
        };

        match event {
            Event::Start(e) if e.name().as_ref() == b"message" => {
                message_start = Some(offset);
                stale = false;
            }
            Event::Start(e) | Event::Empty(e)
                if message_start.is_some() && e.name().as_ref() == b"translation" =>
            {
                let status = match e.try_get_attribute(b"type")? {
                    Some(a) => {
                        let value = a.unescape_value()?;
                        TranslationStatus::from_type_attr(Some(&*value))
                    }
                    None => Some(TranslationStatus::Finished),
                };
                stale = status.is_some_and(|s| !s.is_live());
            }
            Event::End(e) if e.name().as_ref() == b"message" => {
                if let Some(start) = message_start.take()
                    && stale
                {
                    let end = reader.buffer_position() as usize;
                    ranges.push(expand_to_lines(content, start..end));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(ranges)
}

/// Widen `range` to whole lines when only whitespace surrounds it.
fn expand_to_lines(content: &str, range: Range<usize>) -> Range<usize> {
    let before = &content[..range.start];
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    if !before[line_start..].trim().is_empty() {
        return range;
    }

    let after = &content[range.end..];
    let line_end = after.find('\n').map(|i| i + 1).unwrap_or(after.len());
    if !after[..line_end].trim().is_empty() {
        return range;
    }

    line_start..range.end + line_end
}
