//! `TraceObserver` — writes node positions as CSV at every snapshot.

use std::io::Write;

use csv::Writer;
use rwp_core::{NodeId, Position, SimTime};
use rwp_mobility::MobilityStore;
use rwp_sim::SimObserver;

/// Streams `time_secs,node,x,y,phase` rows to any `Write` sink.
///
/// `SimObserver` methods cannot fail, so the first CSV error is kept and
/// surfaced by [`finish`][Self::finish].
pub struct TraceObserver<W: Write> {
    writer:     Writer<W>,
    last_error: Option<csv::Error>,
    arrivals:   u64,
    off_map:    u64,
}

impl<W: Write> TraceObserver<W> {
    pub fn new(sink: W) -> csv::Result<Self> {
        let mut writer = Writer::from_writer(sink);
        writer.write_record(["time_secs", "node", "x", "y", "phase"])?;
        Ok(Self {
            writer,
            last_error: None,
            arrivals:   0,
            off_map:    0,
        })
    }

    /// Flush the sink and return `(arrivals, off_map_reports)`, or the first
    /// write error.
    pub fn finish(mut self) -> anyhow::Result<(u64, u64)> {
        if let Some(e) = self.last_error.take() {
            return Err(e.into());
        }
        self.writer.flush()?;
        Ok((self.arrivals, self.off_map))
    }

    fn store_err(&mut self, result: csv::Result<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for TraceObserver<W> {
    fn on_arrival(&mut self, _node: NodeId, _now: SimTime, _waypoint: Position, _pause: f64) {
        self.arrivals += 1;
    }

    fn on_off_map(&mut self, node: NodeId, position: Position) {
        self.off_map += 1;
        tracing::warn!(%node, %position, "node outside playground");
    }

    fn on_snapshot(&mut self, now: SimTime, mobility: &MobilityStore) {
        for (node, model) in mobility.models.iter().enumerate() {
            let p = model.position();
            let phase = if model.phase(now).is_moving() { "moving" } else { "paused" };
            let result = self.writer.write_record(&[
                format!("{:.3}", now.secs()),
                node.to_string(),
                format!("{:.3}", p.x),
                format!("{:.3}", p.y),
                phase.to_string(),
            ]);
            self.store_err(result);
        }
    }
}
