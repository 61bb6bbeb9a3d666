use std::collections::VecDeque;

use pathviz_core::Position;

use crate::SearchField;
use crate::traits::Pather;

impl SearchField {
    /// Breadth-first search from `from` toward `to`.
    ///
    /// FIFO frontier, one unit per step — optimal on an unweighted grid.
    /// Neighbours are discovered (and given their parent) the first time
    /// they are seen; ties break by insertion order. The search stops the
    /// moment `to` is dequeued, before it is recorded as settled. Returns
    /// whether `to` was dequeued.
    pub fn bfs<P: Pather>(&mut self, pather: &P, from: Position, to: Position) -> bool {
        let Some(start_idx) = self.idx(from) else {
            return false;
        };
        let Some(goal_idx) = self.idx(to) else {
            return false;
        };

        let cur_gen = self.begin();
        self.seed(start_idx, 0);

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut reached = false;

        while let Some(ci) = queue.pop_front() {
            if ci == goal_idx {
                reached = true;
                break;
            }

            let cp = self.point(ci);
            self.expanded.push(cp);
            let dist = self.nodes[ci].g;

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.nodes[ni].generation == cur_gen {
                    // Already discovered.
                    continue;
                }
                let n = &mut self.nodes[ni];
                n.generation = cur_gen;
                n.g = dist + 1;
                n.f = n.g;
                n.parent = ci;
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        reached
    }
}
