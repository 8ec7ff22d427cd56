//! Modal session state. The chart handle is owned here explicitly so the
//! at-most-one-live-chart invariant is enforced in one place instead of a
//! closure-captured global.

/// Anything that must be released before being discarded (the Chart.js
/// binding in the browser, a mock in tests).
pub trait ChartResource {
    fn destroy(&self);
}

/// State of the project showcase modal across open/close cycles.
pub struct ModalSession<C: ChartResource> {
    open: bool,
    chart: Option<C>,
}

impl<C: ChartResource> ModalSession<C> {
    pub fn new() -> Self {
        Self { open: false, chart: None }
    }

    /// Open with a freshly built chart. Any chart from a previous opening is
    /// destroyed first, so at most one instance is ever alive.
    pub fn open_with(&mut self, chart: C) {
        if let Some(old) = self.chart.take() {
            old.destroy();
        }
        self.chart = Some(chart);
        self.open = true;
    }

    /// Close and release the live chart, if any. Idempotent.
    pub fn close(&mut self) {
        if let Some(chart) = self.chart.take() {
            chart.destroy();
        }
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }
}

impl<C: ChartResource> Default for ModalSession<C> {
    fn default() -> Self {
        Self::new()
    }
}
