use std::ops::AddAssign;

/// Search statistic collector.
/// It collects data during A* search.
pub trait SearchStatsCollector {
    /// Called before each node is expanded, can return false to cancel search process.
    #[inline(always)] fn expanded(&mut self) -> bool { true }
    /// Called for each node pushed to the queue.
    #[inline(always)] fn generated(&mut self) { }
}

/// Search statistic collector that ignore all events.
impl SearchStatsCollector for () {}

/// Counts expanded nodes.
impl SearchStatsCollector for u64 {
    #[inline(always)] fn expanded(&mut self) -> bool { *self += 1; true }
}

impl<S: SearchStatsCollector + ?Sized> SearchStatsCollector for &mut S {
    #[inline(always)] fn expanded(&mut self) -> bool { (**self).expanded() }
    #[inline(always)] fn generated(&mut self) { (**self).generated() }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchAllStats {
    pub expanded: u64,
    pub generated: u64
}

impl SearchAllStats {
    pub fn visits(&self) -> u64 { self.expanded + self.generated }
}

impl AddAssign for SearchAllStats {
    fn add_assign(&mut self, rhs: Self) {
        self.expanded += rhs.expanded;
        self.generated += rhs.generated;
    }
}

impl SearchStatsCollector for SearchAllStats {
    #[inline(always)] fn expanded(&mut self) -> bool { self.expanded += 1; true }
    #[inline(always)] fn generated(&mut self) { self.generated += 1; }
}

/// Collector that cancels the search after `limit` expansions.
#[derive(Copy, Clone, Debug)]
pub struct Limited {
    pub expanded: u64,
    pub generated: u64,
    pub limit: u64
}

impl Limited {
    pub fn with_limit(limit: u64) -> Self { Self{expanded: 0, generated: 0, limit} }

    pub fn reset_visits(&mut self) { self.expanded = 0; self.generated = 0; }

    pub fn reset_limit(&mut self, limit: u64) { self.reset_visits(); self.limit = limit; }

    pub fn visits(&self) -> u64 { self.expanded + self.generated }

    /// Checks whether the limit of expansions has been reached.
    pub fn exhausted(&self) -> bool { self.expanded >= self.limit }
}

impl SearchStatsCollector for Limited {
    #[inline(always)] fn expanded(&mut self) -> bool {
        if self.exhausted() { return false; }
        self.expanded += 1;
        true
    }

    #[inline(always)] fn generated(&mut self) { self.generated += 1; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limited() {
        let mut stats = Limited::with_limit(2);
        assert!(stats.expanded());
        stats.generated();
        assert!(stats.expanded());
        assert!(stats.exhausted());
        assert!(!stats.expanded());
        assert_eq!(stats.visits(), 3);
        stats.reset_limit(1);
        assert_eq!(stats.visits(), 0);
        assert!(stats.expanded());
        assert!(!stats.expanded());
    }

    #[test]
    fn test_all_stats() {
        let mut total = SearchAllStats::default();
        let mut stats = SearchAllStats::default();
        assert!(stats.expanded());
        stats.generated();
        stats.generated();
        total += stats;
        total += stats;
        assert_eq!(total, SearchAllStats { expanded: 2, generated: 4 });
        assert_eq!(total.visits(), 6);
        let mut count = 0u64;
        assert!((&mut count).expanded());
        assert_eq!(count, 1);
    }
}
