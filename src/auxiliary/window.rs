use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::error::LifeError;

/// Create a window showing a `width` x `height` pixel buffer, scaled up to
/// roughly two thirds of the monitor height and centered.
///
/// Returns the window, its physical inner size and the hidpi factor.
pub fn create_window(
    title: &str,
    width: u32,
    height: u32,
    event_loop: &EventLoop<()>,
) -> Result<(Window, u32, u32, f64), LifeError> {
    // Create a hidden window so we can estimate a good default window size
    let window = WindowBuilder::new()
        .with_visible(false)
        .with_title(title)
        .build(event_loop)?;
    let hidpi_factor = window.scale_factor();

    let width = f64::from(width);
    let height = f64::from(height);
    let (monitor_width, monitor_height) = match window.current_monitor() {
        Some(monitor) => {
            let size = monitor.size().to_logical::<f64>(hidpi_factor);
            (size.width, size.height)
        }
        None => (width, height),
    };
    let scale = (monitor_height / height * 2.0 / 3.0).floor().max(1.0);

    let default_size = LogicalSize::new(width * scale, height * scale);
    let center = LogicalPosition::new(
        ((monitor_width - width * scale) / 2.0).max(0.0),
        ((monitor_height - height * scale) / 2.0).max(0.0),
    );
    window.set_inner_size(default_size);
    window.set_min_inner_size(Some(LogicalSize::new(width, height)));
    window.set_outer_position(center);
    window.set_visible(true);

    let size = default_size.to_physical::<f64>(hidpi_factor);

    Ok((
        window,
        size.width.round() as u32,
        size.height.round() as u32,
        hidpi_factor,
    ))
}
