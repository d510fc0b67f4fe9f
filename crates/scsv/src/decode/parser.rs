use tracing::{debug, trace};

use crate::decode::directive::{Directive, parse_directive};
use crate::decode::flow::{FlowSlot, FlowState, parse_count, split_flow};
use crate::decode::scanner::{LineKind, classify, split_fields};
use crate::decode::source::LineSource;
use crate::document::{ParsedDocument, Row};
use crate::error::{Error, FormatErrorKind, Result};
use crate::options::Options;

/// Line-at-a-time SCSV parser.
///
/// Each call to [`Parser::feed`] first charges every active flow for the line,
/// then classifies and resolves it. A returned error is fatal; the caller
/// must drop the parser rather than keep feeding it.
#[derive(Debug, Clone)]
pub struct Parser {
    options: Options,
    line: usize,
    flow: FlowState,
    document: ParsedDocument,
}

impl Parser {
    pub fn new(options: &Options) -> Self {
        Self {
            options: *options,
            line: 1,
            flow: FlowState::default(),
            document: ParsedDocument::new(),
        }
    }

    /// 1-based number of the next line to be fed.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Flags currently in effect, including directive changes.
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn flow(&self) -> &FlowState {
        &self.flow
    }

    pub fn feed(&mut self, line: &str) -> Result<()> {
        self.flow.tick();
        let res = match classify(line) {
            LineKind::Blank | LineKind::Comment => Ok(()),
            LineKind::Directive(body) => self.apply_directive(body),
            LineKind::Reset => {
                debug!(line = self.line, "flow state reset");
                self.flow.clear();
                Ok(())
            }
            LineKind::Data(data) => self.data_line(data),
        };
        self.line += 1;
        res
    }

    pub fn finish(self) -> ParsedDocument {
        self.document
    }

    fn fail(&self, kind: FormatErrorKind) -> Error {
        Error::format(self.line, kind)
    }

    fn apply_directive(&mut self, body: &str) -> Result<()> {
        let directive = parse_directive(body).map_err(|kind| self.fail(kind))?;
        debug!(line = self.line, ?directive, "directive");
        match directive {
            Directive::StrictMode(on) => self.options.strict = on,
            Directive::ValuePrecedence(on) => self.options.value_precedence = on,
            Directive::Unknown => {}
        }
        Ok(())
    }

    fn data_line(&mut self, data: &str) -> Result<()> {
        let fields = split_fields(data);
        let (key, new_flow_key) = self.resolve_key(fields.key)?;

        let mut row: Row = Vec::with_capacity(fields.values.len());
        let mut new_flow_value = false;
        for (column, field) in fields.values.iter().enumerate() {
            let (value, declared) = self.resolve_value(column, field)?;
            new_flow_value |= declared;
            row.push(value);
        }

        // One declaring line may not leave both a flow key and flow values behind.
        if new_flow_key && new_flow_value && fields.values.len() > 1 {
            if self.options.value_precedence {
                debug!(line = self.line, "flow values take precedence, dropping flow key");
                self.flow.key = None;
            } else {
                debug!(line = self.line, "flow key takes precedence, dropping flow values");
                self.flow.values.clear();
            }
        }

        self.document.push(key, row);
        Ok(())
    }

    fn resolve_key(&mut self, field: &str) -> Result<(String, bool)> {
        if let Some((count, literal)) = split_flow(field) {
            if self.flow.key.is_some() && self.options.strict {
                return Err(self.fail(FormatErrorKind::FlowKeyRedefined));
            }
            let budget = parse_count(count)
                .ok_or_else(|| self.fail(FormatErrorKind::InvalidFlowKeyCount(count.to_string())))?;
            // `N|` with nothing after the marker names no key; rejected rather
            // than recording rows under an empty key.
            if literal.is_empty() {
                return Err(self.fail(FormatErrorKind::NoKey));
            }
            debug!(line = self.line, key = literal, ?budget, "flow key declared");
            self.flow.key = Some(FlowSlot::new(literal, budget));
            return Ok((literal.to_string(), true));
        }

        if field.is_empty() {
            return match &self.flow.key {
                Some(slot) => {
                    trace!(line = self.line, key = %slot.value, "key inherited");
                    Ok((slot.value.clone(), false))
                }
                None => Err(self.fail(FormatErrorKind::NoKey)),
            };
        }

        self.flow.key = None;
        Ok((field.to_string(), false))
    }

    fn resolve_value(&mut self, column: usize, field: &str) -> Result<(String, bool)> {
        if let Some((count, literal)) = split_flow(field) {
            if self.flow.values.contains_key(&column) && self.options.strict {
                return Err(self.fail(FormatErrorKind::FlowValueRedefined { column }));
            }
            let budget = parse_count(count).ok_or_else(|| {
                self.fail(FormatErrorKind::InvalidFlowValueCount(count.to_string()))
            })?;
            debug!(line = self.line, column, value = literal, ?budget, "flow value declared");
            self.flow.values.insert(column, FlowSlot::new(literal, budget));
            return Ok((literal.to_string(), true));
        }

        if field.is_empty() {
            if let Some(slot) = self.flow.values.get(&column) {
                trace!(line = self.line, column, value = %slot.value, "value inherited");
                return Ok((slot.value.clone(), false));
            }
            if self.options.strict {
                return Err(self.fail(FormatErrorKind::NoValue { column }));
            }
            return Ok((String::new(), false));
        }

        self.flow.values.remove(&column);
        Ok((field.to_string(), false))
    }
}

/// Drive `source` to exhaustion. Either the whole document or the first
/// error is returned.
pub fn parse_lines<S: LineSource>(mut source: S, options: &Options) -> Result<ParsedDocument> {
    let mut parser = Parser::new(options);
    while let Some(line) = source.next_line()? {
        parser.feed(line)?;
    }
    let document = parser.finish();
    debug!(keys = document.len(), rows = document.row_count(), "parse complete");
    Ok(document)
}
