//! UI-state bookkeeping that has to survive overlapping submissions.

/// Ticket handed out for one submitted prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic request counter; only the newest ticket may update the screen.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.current += 1;
        RequestTicket(self.current)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.current
    }
}

/// Ticket for one chart rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTicket(u64);

/// Single owner of the mounted chart handle.
///
/// A rebuild takes the mounted handle out (so it is destroyed exactly once)
/// and only the latest rebuild may store its new handle.
#[derive(Debug)]
pub struct ChartSlot<H> {
    version: u64,
    mounted: Option<H>,
}

impl<H> Default for ChartSlot<H> {
    fn default() -> Self {
        Self {
            version: 0,
            mounted: None,
        }
    }
}

impl<H> ChartSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a rebuild. The returned handle, if any, must be destroyed by
    /// the caller before drawing.
    pub fn begin_rebuild(&mut self) -> (ChartTicket, Option<H>) {
        self.version += 1;
        (ChartTicket(self.version), self.mounted.take())
    }

    /// Stores the freshly drawn chart. A superseded rebuild gets its handle
    /// back and is responsible for destroying it.
    pub fn commit(&mut self, ticket: ChartTicket, handle: H) -> Result<(), H> {
        if ticket.0 != self.version {
            return Err(handle);
        }
        self.mounted = Some(handle);
        Ok(())
    }

    /// Removes the mounted chart, e.g. on unmount.
    pub fn clear(&mut self) -> Option<H> {
        self.version += 1;
        self.mounted.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }
}

/// Visibility of the four page panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Panels {
    pub loading: bool,
    pub error: bool,
    pub results: bool,
    pub chart: bool,
}

/// Where the prediction form currently is.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase<T> {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Phase<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn panels(&self) -> Panels {
        match self {
            Self::Idle => Panels::default(),
            Self::Loading => Panels {
                loading: true,
                ..Panels::default()
            },
            Self::Failed(_) => Panels {
                error: true,
                ..Panels::default()
            },
            Self::Ready(_) => Panels {
                results: true,
                chart: true,
                ..Panels::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superseded_request_is_stale() {
        let mut generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_chart_slot_destroys_previous_once() {
        let mut slot = ChartSlot::new();
        let (ticket, previous) = slot.begin_rebuild();
        assert_eq!(previous, None);
        slot.commit(ticket, "chart-1").unwrap();
        assert!(slot.is_mounted());

        let (ticket, previous) = slot.begin_rebuild();
        assert_eq!(previous, Some("chart-1"));
        // a second overlapping rebuild finds nothing left to destroy
        let (latest, previous_again) = slot.begin_rebuild();
        assert_eq!(previous_again, None);

        assert_eq!(slot.commit(ticket, "chart-2"), Err("chart-2"));
        assert_eq!(slot.commit(latest, "chart-3"), Ok(()));
        assert_eq!(slot.clear(), Some("chart-3"));
        assert!(!slot.is_mounted());
    }

    #[test]
    fn test_loading_hides_everything_else() {
        let phase: Phase<()> = Phase::Loading;
        assert_eq!(
            phase.panels(),
            Panels {
                loading: true,
                error: false,
                results: false,
                chart: false
            }
        );
    }

    #[test]
    fn test_failure_shows_only_error() {
        let phase: Phase<()> = Phase::Failed("X".to_string());
        assert_eq!(phase.error(), Some("X"));
        let panels = phase.panels();
        assert!(panels.error);
        assert!(!panels.results && !panels.chart && !panels.loading);
    }

    #[test]
    fn test_ready_shows_results_and_chart() {
        let panels = Phase::Ready(1).panels();
        assert!(panels.results && panels.chart);
        assert!(!panels.loading && !panels.error);
    }
}
