pub use bfs::{bfs, breadth_first, BreadthFirstSearcher};
pub use dfs::{depth_first, dfs, DepthFirstSearcher};

mod bfs {
    use std::hash::Hash;
    use std::rc::Rc;

    use crate::algorithm::cache::VisitedCache;
    use crate::algorithm::SearchAlgorithm;
    use crate::errors::Result;
    use crate::frontier::Queue;
    use crate::node::SearchNode;

    pub type BreadthFirstSearcher<'f, T> =
        SearchAlgorithm<'f, T, Queue<Rc<SearchNode<T>>>, VisitedCache<T>>;

    /// Build a breadth-first searcher, which can be configured before it is run.
    pub fn breadth_first<'f, T, G, S>(
        origin: T,
        goal_test: G,
        successors: S,
    ) -> BreadthFirstSearcher<'f, T>
    where
        T: Clone + Eq + Hash + 'f,
        G: Fn(&T) -> bool + 'f,
        S: Fn(&T) -> Vec<T> + 'f,
    {
        SearchAlgorithm::new(
            origin,
            Box::new(goal_test),
            Box::new(successors),
            Box::new(|_: &T| 0.0),
        )
    }

    /// Breadth-first search, where the order is determined
    /// by the states returned by the successor function.
    ///
    /// When every transition has the same cost, the path found
    /// has the fewest possible steps.
    pub fn bfs<'f, T, G, S>(
        origin: T,
        goal_test: G,
        successors: S,
    ) -> Result<Option<Rc<SearchNode<T>>>>
    where
        T: Clone + Eq + Hash + 'f,
        G: Fn(&T) -> bool + 'f,
        S: Fn(&T) -> Vec<T> + 'f,
    {
        breadth_first(origin, goal_test, successors).run()
    }
}

mod dfs {
    use std::hash::Hash;
    use std::rc::Rc;

    use crate::algorithm::cache::VisitedCache;
    use crate::algorithm::SearchAlgorithm;
    use crate::errors::Result;
    use crate::frontier::Stack;
    use crate::node::SearchNode;

    pub type DepthFirstSearcher<'f, T> =
        SearchAlgorithm<'f, T, Stack<Rc<SearchNode<T>>>, VisitedCache<T>>;

    pub fn depth_first<'f, T, G, S>(
        origin: T,
        goal_test: G,
        successors: S,
    ) -> DepthFirstSearcher<'f, T>
    where
        T: Clone + Eq + Hash + 'f,
        G: Fn(&T) -> bool + 'f,
        S: Fn(&T) -> Vec<T> + 'f,
    {
        SearchAlgorithm::new(
            origin,
            Box::new(goal_test),
            Box::new(successors),
            Box::new(|_: &T| 0.0),
        )
    }

    /// Depth-first search, where the order is determined
    /// by the states returned by the successor function.
    ///
    /// Finds a path, but not necessarily the shortest one.
    pub fn dfs<'f, T, G, S>(
        origin: T,
        goal_test: G,
        successors: S,
    ) -> Result<Option<Rc<SearchNode<T>>>>
    where
        T: Clone + Eq + Hash + 'f,
        G: Fn(&T) -> bool + 'f,
        S: Fn(&T) -> Vec<T> + 'f,
    {
        depth_first(origin, goal_test, successors).run()
    }
}
