use std::time::Instant;

use line_drawing::Bresenham;
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use super::canvas::PixelCanvas;
use crate::auxiliary::{create_window, seed_grid, Config, Seeding};
use crate::engine::{EditSurface, GenerationStepper, GridState};
use crate::error::LifeError;
use crate::traits_and_structs::Cell;

/// Mouse buttons in winit_input_helper order, with the state each paints.
const BRUSHES: [(usize, Cell); 3] = [(0, Cell::On), (1, Cell::Off), (2, Cell::Dying)];

fn fatal(err: LifeError) -> ! {
    error!("{}", err);
    std::process::exit(1)
}

/// Paint `state` along the line of cells from `from` to `to`, skipping any
/// cell that falls outside the grid. Returns how many cells were painted.
pub fn paint_line(
    grid: &mut GridState,
    canvas: &mut PixelCanvas,
    from: (isize, isize),
    to: (isize, isize),
    state: Cell,
) -> Result<usize, LifeError> {
    let indexer = *grid.indexer();
    let mut edit = EditSurface::new(grid, canvas);
    let mut painted = 0;
    for (x, y) in Bresenham::new(from, to) {
        if x < 0 || y < 0 || !indexer.contains(x as usize, y as usize) {
            continue;
        }
        edit.set_cell(x as usize, y as usize, state)?;
        painted += 1;
    }
    Ok(painted)
}

pub fn run_decay_life(config: &Config) -> Result<(), LifeError> {
    let (width, height) = config.extent()?;
    let stepper = config.stepper(width)?;
    let frame_interval = config.frame_interval();
    info!(
        "{}x{} grid, {:?}, {:?} per generation",
        width, height, stepper, frame_interval
    );

    let mut canvas = PixelCanvas::new(width, height, config.cell_size)?;

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) = create_window(
        "Life",
        canvas.pixel_width(),
        canvas.pixel_height(),
        &event_loop,
    )?;

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);
    let mut pixels = Pixels::new(canvas.pixel_width(), canvas.pixel_height(), surface_texture)?;

    let mut grid = GridState::from_cells(width, height, seed_grid(width, height, config.seeding())?)?;
    EditSurface::new(&mut grid, &mut canvas).repaint();

    let mut paused = false;
    let mut brush: Option<(usize, Cell)> = None;
    let mut last_step = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::RedrawRequested(_) = event {
            canvas.draw(pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if input.key_pressed(VirtualKeyCode::Space) {
                paused = !paused;
                info!("{}", if paused { "paused" } else { "unpaused" });
            }
            let step_once = input.key_pressed(VirtualKeyCode::Return)
                || input.key_pressed(VirtualKeyCode::NumpadEnter);
            if step_once {
                paused = true;
                debug!("frame advanced");
            }
            if input.key_pressed(VirtualKeyCode::Back) || input.key_pressed(VirtualKeyCode::C) {
                let cleared = EditSurface::new(&mut grid, &mut canvas).clear();
                info!("grid cleared ({} cells were showing)", cleared);
            }
            if input.key_pressed(VirtualKeyCode::R) {
                info!("reset with random conditions");
                let reseeded = seed_grid(width, height, Seeding::Random)
                    .and_then(|cells| EditSurface::new(&mut grid, &mut canvas).reseed(cells));
                if let Err(e) = reseeded {
                    fatal(e);
                }
            }

            // Mouse position in grid cells, now and on the previous update.
            let mouse = input.mouse().map(|(mx, my)| {
                let (dx, dy) = input.mouse_diff();
                let (mx_i, my_i) = pixels
                    .window_pos_to_pixel((mx, my))
                    .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));
                let (px_i, py_i) = pixels
                    .window_pos_to_pixel((mx - dx, my - dy))
                    .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));
                (canvas.cell_of(mx_i, my_i), canvas.cell_of(px_i, py_i))
            });

            if let Some((mouse_cell, mouse_prev_cell)) = mouse {
                let pressed = BRUSHES.iter().find(|(b, _)| input.mouse_pressed(*b));
                let painted = if let Some(&(button, state)) = pressed {
                    debug!("paint {:?} at {:?}", state, mouse_cell);
                    brush = Some((button, state));
                    paint_line(&mut grid, &mut canvas, mouse_cell, mouse_cell, state)
                } else if let Some((button, state)) = brush {
                    let release = input.mouse_released(button);
                    let held = input.mouse_held(button);
                    if release || !held {
                        brush = None;
                    }
                    if release || held {
                        debug!("paint {:?} from {:?} to {:?}", state, mouse_prev_cell, mouse_cell);
                        paint_line(&mut grid, &mut canvas, mouse_prev_cell, mouse_cell, state)
                    } else {
                        Ok(0)
                    }
                } else {
                    Ok(0)
                };
                if let Err(e) = painted {
                    fatal(e);
                }
            }

            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }

            if step_once || (!paused && last_step.elapsed() >= frame_interval) {
                if let Err(e) = stepper.step(&mut grid, &mut canvas) {
                    fatal(e);
                }
                last_step = Instant::now();
            }
            if canvas.take_pending() {
                window.request_redraw();
            }
            *control_flow = if paused {
                ControlFlow::Wait
            } else {
                ControlFlow::WaitUntil(last_step + frame_interval)
            };
        }
    });
}
