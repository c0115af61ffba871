use proptest::prelude::*;
use tactics_core::{Grid, Position};

fn height_map() -> impl Strategy<Value = Vec<Vec<i32>>> {
    (1usize..=6, 1usize..=6).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(0i32..=5, width), height)
    })
}

fn grid_and_start() -> impl Strategy<Value = (Grid, Position)> {
    height_map().prop_flat_map(|rows| {
        let width = rows[0].len() as i32;
        let height = rows.len() as i32;
        let grid = Grid::new(&rows).expect("rectangular non-negative map");
        (Just(grid), 0..width, 0..height).prop_map(|(grid, x, y)| (grid, Position::new(x, y)))
    })
}

proptest! {
    #[test]
    fn raising_the_climb_limit_never_loses_tiles(
        (grid, start) in grid_and_start(),
        low in 0u32..=5,
        extra in 0u32..=5,
    ) {
        let tight = grid.dijkstra(start, Some(low));
        let loose = grid.dijkstra(start, Some(low + extra));
        let unlimited = grid.dijkstra(start, None);

        prop_assert!(tight.len() <= loose.len());
        prop_assert_eq!(unlimited.len(), grid.tile_count());
        for (tile, _) in tight.iter() {
            prop_assert!(loose.contains(tile));
        }
        for (tile, cost) in loose.iter() {
            prop_assert!(unlimited.get(tile).is_some_and(|best| best <= cost));
        }
    }

    #[test]
    fn reconstructed_paths_are_walkable(
        (grid, start) in grid_and_start(),
        limit in prop::option::of(0u32..=5),
    ) {
        let costs = grid.dijkstra(start, limit);

        for (tile, cost) in costs.iter() {
            let path = grid.reconstruct_path(tile, &costs, limit);

            prop_assert_eq!(path.first().copied(), Some(start));
            prop_assert_eq!(path.last().copied(), Some(tile));
            for step in path.windows(2) {
                prop_assert!(grid.neighbors(step[0]).contains(&step[1]));
                prop_assert!(grid.enterable(step[0], step[1], limit));
            }
            // the descent is greedy, so it can overpay but never undercut
            prop_assert!(grid.path_cost(&path) >= cost);
        }
    }

    #[test]
    fn reconstruction_is_deterministic(
        (grid, start) in grid_and_start(),
        limit in prop::option::of(0u32..=5),
    ) {
        let costs = grid.dijkstra(start, limit);

        for (tile, _) in costs.iter() {
            prop_assert_eq!(
                grid.reconstruct_path(tile, &costs, limit),
                grid.reconstruct_path(tile, &costs, limit)
            );
        }
    }
}
