use std::collections::BinaryHeap;

use pathviz_core::Position;

use crate::SearchField;
use crate::field::{HeapEntry, UNREACHABLE};
use crate::traits::WeightedPather;

impl SearchField {
    /// Uniform-cost (Dijkstra) search from `from` toward `to`.
    ///
    /// Min-priority frontier ordered by accumulated cost. No decrease-key:
    /// relaxing a node pushes a fresh heap entry and the stale one is
    /// discarded on pop when its priority exceeds the node's best known
    /// cost (lazy deletion). The search stops the moment `to` is dequeued,
    /// before it is recorded as settled. Returns whether `to` was dequeued.
    pub fn dijkstra<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Position,
        to: Position,
    ) -> bool {
        let Some(start_idx) = self.idx(from) else {
            return false;
        };
        let Some(goal_idx) = self.idx(to) else {
            return false;
        };

        let cur_gen = self.begin();
        self.seed(start_idx, 0);

        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        open.push(HeapEntry {
            idx: start_idx,
            f: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut reached = false;

        while let Some(current) = open.pop() {
            let ci = current.idx;

            if ci == goal_idx {
                reached = true;
                break;
            }

            // Lazy deletion: a better route to this node was already settled.
            if current.f > self.nodes[ci].g {
                continue;
            }

            let cp = self.point(ci);
            self.expanded.push(cp);
            let current_g = self.nodes[ci].g;

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + pather.cost(cp, np);

                let n = &mut self.nodes[ni];
                if n.generation != cur_gen {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                    n.parent = usize::MAX;
                    n.open = false;
                }
                if tentative >= n.g {
                    continue;
                }

                n.g = tentative;
                n.f = tentative;
                n.parent = ci;
                open.push(HeapEntry {
                    idx: ni,
                    f: tentative,
                });
            }
        }

        self.nbuf = nbuf;
        reached
    }
}
