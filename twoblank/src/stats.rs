use std::time::Duration;
use cpu_time::ProcessTime;

/// Search statistic collector.
/// It collects data during A* search.
pub trait SearchStatsCollector {
    /// Called before each node expansion, can return false to cancel search process.
    #[inline(always)] fn expanded(&mut self) -> bool { true }
    /// Called for each new node pushed into the frontier.
    #[inline(always)] fn generated(&mut self) { }
    /// Called for each successor dropped because its board was already discovered.
    #[inline(always)] fn duplicate(&mut self) { }
}

/// Search statistic collector that ignore all events.
impl SearchStatsCollector for () {}

/// Both collectors get all events; search continues only if both agree.
impl<A: SearchStatsCollector, B: SearchStatsCollector> SearchStatsCollector for (A, B) {
    #[inline(always)] fn expanded(&mut self) -> bool {
        let a = self.0.expanded();
        let b = self.1.expanded();
        a && b
    }
    #[inline(always)] fn generated(&mut self) { self.0.generated(); self.1.generated(); }
    #[inline(always)] fn duplicate(&mut self) { self.0.duplicate(); self.1.duplicate(); }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchAllStats {
    pub expanded: u64,
    pub generated: u64,
    pub duplicates: u64
}

impl SearchStatsCollector for SearchAllStats {
    #[inline(always)] fn expanded(&mut self) -> bool { self.expanded += 1; true }
    #[inline(always)] fn generated(&mut self) { self.generated += 1; }
    #[inline(always)] fn duplicate(&mut self) { self.duplicates += 1; }
}

/// Cancels search after given number of expansions.
pub struct Limited {
    pub stats: SearchAllStats,
    pub limit: u64
}

impl Limited {
    pub fn with_limit(limit: u64) -> Self { Self{ stats: Default::default(), limit } }
}

impl SearchStatsCollector for Limited {
    #[inline(always)] fn expanded(&mut self) -> bool {
        if self.stats.expanded >= self.limit { return false; }
        self.stats.expanded += 1;
        true
    }
    #[inline(always)] fn generated(&mut self) { self.stats.generated += 1; }
    #[inline(always)] fn duplicate(&mut self) { self.stats.duplicates += 1; }
}

/// Cancels search when the process has used more CPU time than the budget.
/// The clock is read once per `CHECK_INTERVAL` expansions.
pub struct TimeLimited {
    start: ProcessTime,
    budget: Duration,
    until_check: u32,
    exceeded: bool
}

impl TimeLimited {
    const CHECK_INTERVAL: u32 = 1024;

    pub fn with_budget(budget: Duration) -> Self {
        Self { start: ProcessTime::now(), budget, until_check: 0, exceeded: false }
    }

    /// CPU time used since `self` was constructed.
    pub fn elapsed(&self) -> Duration { self.start.elapsed() }

    pub fn exceeded(&self) -> bool { self.exceeded }
}

impl SearchStatsCollector for TimeLimited {
    fn expanded(&mut self) -> bool {
        if self.exceeded { return false; }
        if self.until_check == 0 {
            self.until_check = Self::CHECK_INTERVAL;
            if self.start.elapsed() > self.budget {
                self.exceeded = true;
                return false;
            }
        }
        self.until_check -= 1;
        true
    }
}
