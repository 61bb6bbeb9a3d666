use std::collections::BinaryHeap;

use pathviz_core::Position;

use crate::SearchField;
use crate::field::{HeapEntry, UNREACHABLE};
use crate::traits::AstarPather;

impl SearchField {
    /// A* search from `from` toward `to`, ordered by `f = g + estimate`.
    ///
    /// Each node carries an open-membership flag: relaxing a node that is
    /// already on the frontier updates its cost and parent but does not
    /// push a second heap entry, so the node may be dequeued at a stale
    /// priority while expanding with its current best cost. The flag is
    /// dropped on pop, before the goal check. With an admissible,
    /// consistent heuristic a settled node is never improved afterwards,
    /// so optimality and termination hold. The search stops the moment
    /// `to` is dequeued, before it is recorded as settled. Returns whether
    /// `to` was dequeued.
    pub fn astar<P: AstarPather>(&mut self, pather: &P, from: Position, to: Position) -> bool {
        let Some(start_idx) = self.idx(from) else {
            return false;
        };
        let Some(goal_idx) = self.idx(to) else {
            return false;
        };

        let cur_gen = self.begin();
        self.seed(start_idx, pather.estimate(from, to));

        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        open.push(HeapEntry {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut reached = false;

        while let Some(current) = open.pop() {
            let ci = current.idx;
            self.nodes[ci].open = false;

            if ci == goal_idx {
                reached = true;
                break;
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
                n.f = tentative + pather.estimate(np, to);
                n.parent = ci;
                if !n.open {
                    n.open = true;
                    open.push(HeapEntry { idx: ni, f: n.f });
                }
            }
        }

        self.nbuf = nbuf;
        reached
    }
}
