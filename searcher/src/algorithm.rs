//! Provides the building blocks for search algorithms

use std::default::Default;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use self::cache::Cache;
use crate::errors::{Result, SearchError};
use crate::frontier::SearchQueue;
use crate::node::SearchNode;

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod cache;

type GoalTest<'f, T> = Box<dyn Fn(&T) -> bool + 'f>;
type Successors<'f, T> = Box<dyn Fn(&T) -> Vec<T> + 'f>;
type Heuristic<'f, T> = Box<dyn Fn(&T) -> f64 + 'f>;

/// Limits and reporting for a single search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Give up after this many nodes have been popped.
    pub step_limit: Option<usize>,

    /// Give up after this much wall-clock time.
    pub time_limit: Option<Duration>,

    /// Log progress every this many nodes. Zero disables progress logging.
    pub progress_interval: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            step_limit: None,
            time_limit: None,
            progress_interval: 10_000,
        }
    }
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: Option<usize>,
}

impl StepLimit {
    fn new(limit: Option<usize>) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        match self.maximum {
            Some(maximum) if self.current > maximum => {
                Err(SearchError::StepLimitExhausted(self.current))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug)]
struct TimeLimit {
    started: Instant,
    maximum: Option<Duration>,
}

impl TimeLimit {
    fn new(limit: Option<Duration>) -> Self {
        Self {
            started: Instant::now(),
            maximum: limit,
        }
    }

    fn check(&self) -> Result<()> {
        let elapsed = self.started.elapsed();
        match self.maximum {
            Some(maximum) if elapsed > maximum => Err(SearchError::TimeLimitExhausted(elapsed)),
            _ => Ok(()),
        }
    }
}

/// Implementation of search, using generic components.
///
/// Uses a generic queue (Q) and a generic cache (C) to provide
/// a single foundation for multiple search algorithms.
pub struct SearchAlgorithm<'f, T, Q, C>
where
    Q: SearchQueue<Item = Rc<SearchNode<T>>> + Default,
    C: Cache<State = T>,
{
    cache: C,
    queue: Q,
    goal_test: GoalTest<'f, T>,
    successors: Successors<'f, T>,
    heuristic: Heuristic<'f, T>,
    options: SearchOptions,
}

impl<'f, T, Q, C> SearchAlgorithm<'f, T, Q, C>
where
    Q: SearchQueue<Item = Rc<SearchNode<T>>> + Default,
    C: Cache<State = T>,
{
    pub(crate) fn new(
        origin: T,
        goal_test: GoalTest<'f, T>,
        successors: Successors<'f, T>,
        heuristic: Heuristic<'f, T>,
    ) -> Self {
        let mut sr = SearchAlgorithm {
            cache: C::default(),
            queue: Q::default(),
            goal_test,
            successors,
            heuristic,
            options: SearchOptions::default(),
        };
        sr.cache.check(&origin, 0.0);
        let estimate = (sr.heuristic)(&origin);
        sr.queue
            .push(Rc::new(SearchNode::new(origin, None, 0.0, estimate)));
        sr
    }

    /// Replace the limits and reporting options for this search.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When more than this many candidates have been explored,
    /// the search algorithm will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.options.step_limit = Some(limit);
    }

    fn expand(&mut self, current: &Rc<SearchNode<T>>) {
        let cost = self.cache.step_cost(current);
        for child in (self.successors)(current.state()) {
            if !self.cache.check(&child, cost) {
                continue;
            }
            let estimate = (self.heuristic)(&child);
            self.queue.push(Rc::new(SearchNode::new(
                child,
                Some(Rc::clone(current)),
                cost,
                estimate,
            )));
        }
    }

    /// Run the search to completion.
    ///
    /// Returns the first node which passes the goal test, or `None`
    /// once every reachable state has been explored.
    pub fn run(mut self) -> Result<Option<Rc<SearchNode<T>>>> {
        let mut steps = StepLimit::new(self.options.step_limit);
        let clock = TimeLimit::new(self.options.time_limit);

        while !self.queue.is_empty() {
            steps.increment()?;
            clock.check()?;

            let current = self.queue.pop()?;
            if (self.goal_test)(current.state()) {
                tracing::trace!(
                    steps = steps.current,
                    cost = current.cost(),
                    "goal reached"
                );
                return Ok(Some(current));
            }

            if self.options.progress_interval > 0
                && steps.current % self.options.progress_interval == 0
            {
                tracing::debug!(
                    steps = steps.current,
                    frontier = self.queue.len(),
                    explored = self.cache.len(),
                    score = current.score(),
                    "search progress"
                );
            }

            self.expand(&current);
        }

        tracing::trace!(steps = steps.current, "search space exhausted");
        Ok(None)
    }
}

impl<'f, T, Q, C> fmt::Debug for SearchAlgorithm<'f, T, Q, C>
where
    Q: SearchQueue<Item = Rc<SearchNode<T>>> + Default,
    C: Cache<State = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchAlgorithm")
            .field("frontier", &self.queue.len())
            .field("explored", &self.cache.len())
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;
    use crate::{breadth_first, node_to_path};

    /// Counts debug events, which the search loop only emits for progress.
    struct ProgressCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ProgressCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::DEBUG {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn progress_events(interval: usize) -> (usize, Vec<u32>) {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ProgressCounter(Arc::clone(&count)));
        let options = SearchOptions {
            progress_interval: interval,
            ..SearchOptions::default()
        };
        let path = tracing::subscriber::with_default(subscriber, || {
            let node = breadth_first(0u32, |n| *n == 25, line)
                .with_options(options)
                .run()
                .unwrap()
                .unwrap();
            node_to_path(&node)
        });
        (count.load(Ordering::SeqCst), path)
    }

    fn line(n: &u32) -> Vec<u32> {
        vec![n + 1]
    }

    #[test]
    fn step_limit() {
        let options = SearchOptions {
            step_limit: Some(5),
            ..SearchOptions::default()
        };
        let result = breadth_first(0u32, |n| *n == 100, line)
            .with_options(options)
            .run();
        assert_eq!(result.unwrap_err(), SearchError::StepLimitExhausted(6));
    }

    #[test]
    fn step_limit_not_reached() {
        let mut search = breadth_first(0u32, |n| *n == 4, line);
        search.set_limit(5);
        let node = search.run().unwrap().unwrap();
        assert_eq!(node_to_path(&node), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn time_limit() {
        let options = SearchOptions {
            time_limit: Some(Duration::from_secs(0)),
            ..SearchOptions::default()
        };
        let result = breadth_first(0u32, |_| false, line)
            .with_options(options)
            .run();
        match result {
            Err(SearchError::TimeLimitExhausted(_)) => {}
            other => panic!("Expected a time limit error, got {:?}", other),
        }
    }

    #[test]
    fn progress_every_interval() {
        let (events, path) = progress_events(10);
        assert_eq!(events, 2);
        assert_eq!(path.len(), 26);
    }

    #[test]
    fn progress_disabled() {
        let (events, path) = progress_events(0);
        assert_eq!(events, 0);
        assert_eq!(path, (0..=25).collect::<Vec<_>>());
    }
}
