use proptest::prelude::*;

use tri_state_life::{
    Cell, CellRenderer, EditSurface, GenerationStepper, GridState, PartitionPlan,
    PartitionedStepper, SequentialStepper,
};

#[derive(Default)]
struct Recorder {
    draws: Vec<(usize, usize, Cell)>,
    frames: usize,
}

impl CellRenderer for Recorder {
    fn render_cell(&mut self, x: usize, y: usize, state: Cell) {
        self.draws.push((x, y, state));
    }

    fn present_frame(&mut self) {
        self.frames += 1;
    }
}

fn arb_grid() -> impl Strategy<Value = (usize, usize, Vec<Cell>)> {
    (2usize..24, 1usize..16).prop_flat_map(|(w, h)| {
        let cells = prop::collection::vec(
            prop_oneof![Just(Cell::Off), Just(Cell::Dying), Just(Cell::On)],
            w * h,
        );
        (Just(w), Just(h), cells)
    })
}

proptest! {
    #[test]
    fn partitioned_equals_sequential(
        (width, height, cells) in arb_grid(),
        workers in 2usize..6,
        generations in 1usize..5,
    ) {
        let workers = workers.min(width);
        let stepper = PartitionedStepper::new(workers).unwrap();
        let mut seq = GridState::from_cells(width, height, cells.clone()).unwrap();
        let mut par = GridState::from_cells(width, height, cells).unwrap();

        for _ in 0..generations {
            let mut seq_draws = Recorder::default();
            let mut par_draws = Recorder::default();
            let a = SequentialStepper.step(&mut seq, &mut seq_draws).unwrap();
            let b = stepper.step(&mut par, &mut par_draws).unwrap();
            prop_assert_eq!(a, b);
            prop_assert_eq!(seq.current(), par.current());

            seq_draws.draws.sort_by_key(|&(x, y, _)| (x, y));
            par_draws.draws.sort_by_key(|&(x, y, _)| (x, y));
            prop_assert_eq!(&seq_draws.draws, &par_draws.draws);
            prop_assert_eq!(par_draws.frames, 1);
        }
    }

    #[test]
    fn plan_tiles_width_exactly_once(width in 2usize..400, workers in 2usize..16) {
        prop_assume!(workers <= width);
        let plan = PartitionPlan::new(width, workers).unwrap();
        prop_assert_eq!(plan.len(), workers);
        prop_assert!(plan.tiles(width));

        let mut owners = vec![0u32; width];
        for range in plan.ranges() {
            for x in range.clone() {
                owners[x] += 1;
            }
        }
        prop_assert!(owners.iter().all(|&n| n == 1));
    }

    #[test]
    fn changed_cells_are_drawn_with_their_new_state((width, height, cells) in arb_grid()) {
        let mut grid = GridState::from_cells(width, height, cells.clone()).unwrap();
        let mut recorder = Recorder::default();
        let report = PartitionedStepper::default().step(&mut grid, &mut recorder).unwrap();
        prop_assert_eq!(report.changed, recorder.draws.len());
        for &(x, y, state) in &recorder.draws {
            prop_assert_eq!(grid.get(x, y), Some(state));
            prop_assert_ne!(cells[x * height + y], state);
        }
    }
}

#[test]
fn paint_then_step_both_ways() {
    let mut seq = GridState::new(8, 8).unwrap();
    let mut recorder = Recorder::default();
    {
        let mut edit = EditSurface::new(&mut seq, &mut recorder);
        edit.set_cell(0, 0, Cell::On).unwrap();
        edit.set_cell(7, 0, Cell::On).unwrap();
        edit.set_cell(4, 4, Cell::Dying).unwrap();
    }
    let mut par = seq.clone();

    SequentialStepper.step(&mut seq, &mut recorder).unwrap();
    PartitionedStepper::new(4)
        .unwrap()
        .step(&mut par, &mut recorder)
        .unwrap();

    assert_eq!(seq.current(), par.current());
    // Both painted cells wrap around the west/east edge into each other's neighbourhood.
    assert_eq!(seq.get(0, 0), Some(Cell::Dying));
    assert_eq!(seq.get(7, 0), Some(Cell::Dying));
    assert_eq!(seq.get(0, 1), Some(Cell::On));
    assert_eq!(seq.get(7, 7), Some(Cell::On));
    assert_eq!(seq.get(4, 4), Some(Cell::Off));
}
