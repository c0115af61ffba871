//! Height-aware shortest paths over a [`Grid`].
//!
//! Movement is 4-connected. Stepping between two tiles costs one plus their
//! elevation difference, and an optional limit on that difference prunes
//! edges entirely (a unit that cannot climb more than one level never sees a
//! route over a cliff).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use arrayvec::ArrayVec;

use super::Grid;
use crate::state::Position;

/// Minimum traversal cost from every reachable tile to a fixed target.
///
/// Tiles that cannot be reached under the constraint used to build the map
/// are absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostMap {
    target: Position,
    costs: HashMap<Position, u32>,
}

impl CostMap {
    /// Tile the costs are measured against (cost 0).
    pub fn target(&self) -> Position {
        self.target
    }

    pub fn get(&self, position: Position) -> Option<u32> {
        self.costs.get(&position).copied()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.costs.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Always false; the target itself is always present.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.costs.iter().map(|(&position, &cost)| (position, cost))
    }

    /// Tiles whose cost does not exceed `max_cost` (`None` keeps every tile).
    pub fn within(&self, max_cost: Option<u32>) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(move |&(_, cost)| max_cost.is_none_or(|limit| cost <= limit))
            .map(|(position, _)| position)
    }
}

impl Grid {
    /// The four axis-aligned neighbours of a coordinate, unfiltered.
    pub fn neighbors(&self, position: Position) -> [Position; 4] {
        position.neighbors()
    }

    /// Cost of a single step: elevation difference plus one.
    pub fn step_cost(&self, from: Position, to: Position) -> u32 {
        self.elevation(from)
            .abs_diff(self.elevation(to))
            .saturating_add(1)
    }

    /// Whether a unit may step from `from` to `to`.
    ///
    /// Both tiles must be on the map and, when a limit is given, their
    /// elevation difference must not exceed it.
    pub fn enterable(
        &self,
        from: Position,
        to: Position,
        max_height_difference: Option<u32>,
    ) -> bool {
        if !self.contains(from) || !self.contains(to) {
            return false;
        }
        let difference = self.elevation(from).abs_diff(self.elevation(to));
        max_height_difference.is_none_or(|limit| difference <= limit)
    }

    /// Neighbours from which a step into `position` is allowed.
    fn enterable_neighbors(
        &self,
        position: Position,
        max_height_difference: Option<u32>,
    ) -> ArrayVec<Position, 4> {
        if !self.contains(position) {
            return ArrayVec::new();
        }
        position
            .neighbors()
            .into_iter()
            .filter(|&neighbor| self.enterable(neighbor, position, max_height_difference))
            .collect()
    }

    /// Single-source Dijkstra towards `target`.
    ///
    /// Costs are symmetric, so the map equally gives the cost of travelling
    /// from `target` to every tile. An off-map target yields `{target: 0}`.
    pub fn dijkstra(&self, target: Position, max_height_difference: Option<u32>) -> CostMap {
        let mut costs = HashMap::from([(target, 0)]);
        let mut frontier = BinaryHeap::from([Reverse((0u32, target))]);

        while let Some(Reverse((cost, current))) = frontier.pop() {
            if costs.get(&current).is_some_and(|&best| cost > best) {
                continue;
            }

            for neighbor in self.enterable_neighbors(current, max_height_difference) {
                let candidate = cost.saturating_add(self.step_cost(neighbor, current));
                if costs.get(&neighbor).is_none_or(|&known| candidate < known) {
                    costs.insert(neighbor, candidate);
                    frontier.push(Reverse((candidate, neighbor)));
                }
            }
        }

        tracing::trace!(%target, reachable = costs.len(), "built cost map");
        CostMap { target, costs }
    }

    /// Concrete shortest path from the cost map's target to `to`.
    ///
    /// Walks downhill from `to`, each time stepping to the enterable neighbour
    /// with the strictly lowest cost (earlier neighbours win ties), and returns
    /// the walk reversed so it runs target → `to` with both endpoints included.
    /// Returns an empty path when `to` is unreachable, or when the descent gets
    /// stuck because `max_height_difference` is tighter than the limit the map
    /// was built with.
    pub fn reconstruct_path(
        &self,
        to: Position,
        cost_map: &CostMap,
        max_height_difference: Option<u32>,
    ) -> Vec<Position> {
        let Some(mut current_cost) = cost_map.get(to) else {
            return Vec::new();
        };

        let mut current = to;
        let mut path = vec![to];
        while current_cost > 0 {
            let step = self
                .enterable_neighbors(current, max_height_difference)
                .into_iter()
                .filter_map(|neighbor| cost_map.get(neighbor).map(|cost| (cost, neighbor)))
                .min_by_key(|&(cost, _)| cost);

            match step {
                Some((cost, next)) if cost < current_cost => {
                    current = next;
                    current_cost = cost;
                    path.push(next);
                }
                _ => return Vec::new(),
            }
        }

        path.reverse();
        path
    }

    /// Total step cost along a path.
    pub fn path_cost(&self, path: &[Position]) -> u32 {
        path.windows(2)
            .map(|step| self.step_cost(step[0], step[1]))
            .fold(0, u32::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_HEIGHTMAP: [[i32; 5]; 6] = [
        [1, 1, 1, 1, 1],
        [1, 3, 3, 3, 1],
        [1, 3, 4, 4, 1],
        [1, 2, 2, 2, 1],
        [1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1],
    ];

    fn assert_costs<const W: usize>(grid: &Grid, cost_map: &CostMap, expected: &[[u32; W]]) {
        for (y, row) in expected.iter().enumerate() {
            for (x, &cost) in row.iter().enumerate() {
                let position = Position::new(x as i32, y as i32);
                assert_eq!(cost_map.get(position), Some(cost), "cost at {position}");
            }
        }
        assert_eq!(cost_map.len(), grid.tile_count());
    }

    fn positions(coords: &[(i32, i32)]) -> Vec<Position> {
        coords.iter().map(|&(x, y)| Position::new(x, y)).collect()
    }

    #[test]
    fn step_cost_grows_with_elevation_difference() {
        let grid = Grid::new(&[[1, 4], [2, 2]]).unwrap();
        assert_eq!(grid.step_cost(Position::new(0, 0), Position::new(1, 0)), 4);
        assert_eq!(grid.step_cost(Position::new(1, 0), Position::new(0, 0)), 4);
        assert_eq!(grid.step_cost(Position::new(0, 1), Position::new(1, 1)), 1);
    }

    #[test]
    fn enterable_requires_both_tiles_on_map() {
        let grid = Grid::new(&[[1, 4], [2, 2]]).unwrap();
        assert!(grid.enterable(Position::new(0, 0), Position::new(1, 0), None));
        assert!(!grid.enterable(Position::new(0, 0), Position::new(1, 0), Some(2)));
        assert!(grid.enterable(Position::new(0, 0), Position::new(1, 0), Some(3)));
        assert!(!grid.enterable(Position::new(0, 0), Position::new(-1, 0), None));
        assert!(!grid.enterable(Position::new(5, 5), Position::new(1, 1), None));
    }

    #[test]
    fn flat_grid_costs_are_manhattan() {
        let grid = Grid::new(&[[1; 4]; 4]).unwrap();
        let cost_map = grid.dijkstra(Position::ORIGIN, None);

        assert_costs(
            &grid,
            &cost_map,
            &[[0, 1, 2, 3], [1, 2, 3, 4], [2, 3, 4, 5], [3, 4, 5, 6]],
        );
    }

    #[test]
    fn climbing_costs_extra() {
        let grid = Grid::new(&[[1, 1, 1, 1], [1, 2, 2, 1], [1, 1, 3, 1], [1, 1, 1, 1]]).unwrap();
        let cost_map = grid.dijkstra(Position::ORIGIN, None);

        assert_costs(
            &grid,
            &cost_map,
            &[[0, 1, 2, 3], [1, 3, 4, 4], [2, 3, 6, 5], [3, 4, 5, 6]],
        );
    }

    #[test]
    fn costs_from_inner_target() {
        let grid = Grid::new(&[[1, 1, 1, 1], [1, 2, 2, 1], [1, 1, 3, 1], [1, 1, 1, 1]]).unwrap();
        let cost_map = grid.dijkstra(Position::new(1, 2), None);

        assert_eq!(cost_map.target(), Position::new(1, 2));
        assert_costs(
            &grid,
            &cost_map,
            &[[3, 4, 5, 6], [2, 2, 3, 5], [1, 0, 3, 4], [2, 1, 2, 3]],
        );
    }

    #[test]
    fn example_map_costs() {
        let grid = Grid::new(&EXAMPLE_HEIGHTMAP).unwrap();
        let cost_map = grid.dijkstra(Position::ORIGIN, None);

        assert_costs(
            &grid,
            &cost_map,
            &[
                [0, 1, 2, 3, 4],
                [1, 4, 5, 6, 5],
                [2, 5, 7, 8, 6],
                [3, 5, 6, 7, 7],
                [4, 5, 6, 7, 8],
                [5, 6, 7, 8, 9],
            ],
        );
    }

    #[test]
    fn height_limit_reroutes_around_cliffs() {
        let grid = Grid::new(&EXAMPLE_HEIGHTMAP).unwrap();
        let cost_map = grid.dijkstra(Position::ORIGIN, Some(1));

        assert_costs(
            &grid,
            &cost_map,
            &[
                [0, 1, 2, 3, 4],
                [1, 8, 9, 10, 5],
                [2, 7, 9, 10, 6],
                [3, 5, 6, 7, 7],
                [4, 5, 6, 7, 8],
                [5, 6, 7, 8, 9],
            ],
        );
    }

    #[test]
    fn height_limit_drops_unreachable_tiles() {
        let grid = Grid::new(&[[1, 1, 1], [1, 9, 1], [1, 1, 1]]).unwrap();
        let cost_map = grid.dijkstra(Position::ORIGIN, Some(2));

        assert_eq!(cost_map.len(), 8);
        assert!(!cost_map.contains(Position::new(1, 1)));
    }

    #[test]
    fn off_map_target_yields_single_entry() {
        let grid = Grid::new(&EXAMPLE_HEIGHTMAP).unwrap();
        let cost_map = grid.dijkstra(Position::new(-4, 2), None);

        assert_eq!(cost_map.len(), 1);
        assert_eq!(cost_map.get(Position::new(-4, 2)), Some(0));
    }

    #[test]
    fn extreme_off_map_target_yields_single_entry() {
        let grid = Grid::new(&[[1, 1]]).unwrap();

        for target in [Position::new(i32::MAX, 0), Position::new(i32::MIN, i32::MIN)] {
            let cost_map = grid.dijkstra(target, None);
            assert_eq!(cost_map.len(), 1);
            assert_eq!(cost_map.get(target), Some(0));
        }
    }

    #[test]
    fn towering_elevations_saturate_costs() {
        let grid = Grid::new(&[[0, i32::MAX, 0, i32::MAX, 0]]).unwrap();
        let cost_map = grid.dijkstra(Position::ORIGIN, None);

        assert_eq!(cost_map.len(), 5);
        assert_eq!(cost_map.get(Position::new(1, 0)), Some(1 << 31));
        assert_eq!(cost_map.get(Position::new(4, 0)), Some(u32::MAX));

        let path = grid.reconstruct_path(Position::new(1, 0), &cost_map, None);
        assert_eq!(path, positions(&[(0, 0), (1, 0)]));
        assert_eq!(grid.path_cost(&path), 1 << 31);
        assert_eq!(
            grid.path_cost(&positions(&[(0, 0), (1, 0), (2, 0), (3, 0)])),
            u32::MAX
        );
    }

    #[test]
    fn within_filters_by_cost() {
        let grid = Grid::new(&[[1; 4]; 4]).unwrap();
        let cost_map = grid.dijkstra(Position::ORIGIN, None);

        let mut near: Vec<_> = cost_map.within(Some(1)).collect();
        near.sort();
        assert_eq!(near, positions(&[(0, 0), (0, 1), (1, 0)]));
        assert_eq!(cost_map.within(None).count(), 16);
    }

    #[test]
    fn path_in_example_map() {
        let grid = Grid::new(&EXAMPLE_HEIGHTMAP).unwrap();
        let cost_map = grid.dijkstra(Position::ORIGIN, None);

        let path = grid.reconstruct_path(Position::new(3, 1), &cost_map, None);

        assert_eq!(path, positions(&[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)]));
        assert_eq!(grid.path_cost(&path), 6);
    }

    #[test]
    fn path_to_off_map_tile_is_empty() {
        let grid = Grid::new(&EXAMPLE_HEIGHTMAP).unwrap();
        let cost_map = grid.dijkstra(Position::ORIGIN, None);

        assert!(grid.reconstruct_path(Position::new(6, 9), &cost_map, None).is_empty());
    }

    #[test]
    fn path_respects_height_limit() {
        let grid = Grid::new(&[[1, 1, 1, 1], [1, 1, 8, 6], [1, 1, 2, 4]]).unwrap();
        let cost_map = grid.dijkstra(Position::ORIGIN, Some(2));

        let path = grid.reconstruct_path(Position::new(2, 1), &cost_map, Some(2));

        assert_eq!(
            path,
            positions(&[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 2),
                (2, 2),
                (3, 2),
                (3, 1),
                (2, 1)
            ])
        );
    }

    #[test]
    fn path_is_empty_when_limit_blocks_every_step() {
        let grid = Grid::new(&[[1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 8, 1], [1, 1, 1, 1]]).unwrap();
        let cost_map = grid.dijkstra(Position::ORIGIN, None);

        assert!(grid.reconstruct_path(Position::new(2, 2), &cost_map, Some(4)).is_empty());
    }

    #[test]
    fn path_to_target_is_the_target() {
        let grid = Grid::new(&EXAMPLE_HEIGHTMAP).unwrap();
        let cost_map = grid.dijkstra(Position::new(2, 2), None);

        assert_eq!(
            grid.reconstruct_path(Position::new(2, 2), &cost_map, None),
            vec![Position::new(2, 2)]
        );
    }

    #[test]
    fn reconstruction_is_deterministic() {
        let grid = Grid::new(&[[1; 6]; 6]).unwrap();
        let cost_map = grid.dijkstra(Position::ORIGIN, None);

        let first = grid.reconstruct_path(Position::new(5, 5), &cost_map, None);
        let second = grid.reconstruct_path(Position::new(5, 5), &cost_map, None);

        assert_eq!(first, second);
        assert_eq!(first.len(), 11);
    }
}
