//! CSV tick extractor, grounded on `dt_output::CsvWriter`'s
//! open-file-write-header-then-rows shape, but collapsed onto the single
//! persisted-state table the spec names rather than the teacher's two
//! separate snapshot/summary files: there is only one row shape here
//! (`time` plus one rendered cell per agent), so one file covers it.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use ev_agent::Phase;
use ev_core::Id;
use ev_sim::{AgentSnapshot, DataExtractor, ExtractError, ExtractResult, TickSnapshot};

use crate::error::OutputResult;

/// Writes one row per tick to a CSV file: `time,<agent_1>,<agent_2>,...`,
/// each agent cell a human-readable snapshot string (see [`render`]).
pub struct CsvExtractor {
    writer: Writer<File>,
    header_written: bool,
}

impl CsvExtractor {
    /// Create (or truncate) the CSV file at `path`. The header row is
    /// deferred until the first snapshot, since it needs the agent list.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer, header_written: false })
    }

    fn ensure_header<K: Id, A: Id>(&mut self, snapshot: &TickSnapshot<K, A>) -> OutputResult<()> {
        if self.header_written {
            return Ok(());
        }
        let mut header = vec!["time".to_string()];
        header.extend(snapshot.agents.iter().map(|a| format!("{:?}", a.agent)));
        self.writer.write_record(&header)?;
        self.header_written = true;
        Ok(())
    }

    fn write_row<K: Id, A: Id>(&mut self, snapshot: &TickSnapshot<K, A>) -> OutputResult<()> {
        let mut record = vec![format!("{:.6}", snapshot.time_min)];
        record.extend(snapshot.agents.iter().map(render));
        self.writer.write_record(&record)?;
        Ok(())
    }

    /// Flush the underlying file. Not part of [`DataExtractor`]; callers
    /// (e.g. the demo binary) invoke this once after the run loop exits.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// `"<soc%> @ <vertex | from→to>, <action_time>min"`, with `FINISHED` /
/// `WAITING` / `OOC` / `[O]` appended per spec.md §4.5's persisted-state
/// format.
fn render<K: Id, A: Id>(snapshot: &AgentSnapshot<K, A>) -> String {
    let state = &snapshot.state;
    let location = match &state.phase {
        Phase::Travelling { from, to } => format!("{from:?}\u{2192}{to:?}"),
        _ => format!("{:?}", snapshot.decision.vertex),
    };
    let mut rendered = format!("{:.1}% @ {}, {:.2}min", state.soc * 100.0, location, state.action_time_min);
    if state.phase.is_done() {
        rendered.push_str(" FINISHED");
    }
    if state.phase.is_waiting() {
        rendered.push_str(" WAITING");
    }
    if state.out_of_charge {
        rendered.push_str(" OOC");
    }
    if state.overcharged {
        rendered.push_str(" [O]");
    }
    rendered
}

impl<K: Id, A: Id> DataExtractor<K, A> for CsvExtractor {
    fn start(&mut self, snapshot: TickSnapshot<K, A>) -> ExtractResult<()> {
        self.ensure_header(&snapshot).map_err(|e| Box::new(e) as ExtractError)?;
        self.write_row(&snapshot).map_err(|e| Box::new(e) as ExtractError)?;
        Ok(())
    }

    fn append(&mut self, snapshot: TickSnapshot<K, A>) -> ExtractResult<()> {
        self.ensure_header(&snapshot).map_err(|e| Box::new(e) as ExtractError)?;
        self.write_row(&snapshot).map_err(|e| Box::new(e) as ExtractError)?;
        Ok(())
    }
}
