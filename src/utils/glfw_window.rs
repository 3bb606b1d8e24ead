use glfw::{Monitor, Window};

pub trait CenterWindow {
    fn center_on_primary_monitor(&mut self);
}

impl CenterWindow for Window {
    fn center_on_primary_monitor(&mut self) {
        let mut glfw = self.glfw.clone();

        glfw.with_primary_monitor(|_, primary_monitor| {
            if let Some(mon) = primary_monitor {
                center_window(self, mon);
            }
        });
    }
}

fn center_window(window: &mut Window, monitor: &Monitor) {
    if let Some(mode) = monitor.get_video_mode() {
        let (monitor_x, monitor_y) = monitor.get_pos();
        let (window_w, window_h) = window.get_size();
        let (x, y) = centered_origin(
            (monitor_x, monitor_y),
            (mode.width as i32, mode.height as i32),
            (window_w, window_h),
        );
        window.set_pos(x, y);
    }
}

/// Coin haut-gauche d'une fenêtre centrée sur un moniteur.
pub fn centered_origin(
    monitor_pos: (i32, i32),
    monitor_size: (i32, i32),
    window_size: (i32, i32),
) -> (i32, i32) {
    (
        monitor_pos.0 + (monitor_size.0 - window_size.0) / 2,
        monitor_pos.1 + (monitor_size.1 - window_size.1) / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_origin() {
        assert_eq!(centered_origin((0, 0), (1920, 1080), (1024, 800)), (448, 140));
        assert_eq!(
            centered_origin((1920, 0), (1280, 1024), (1024, 800)),
            (2048, 112)
        );
    }
}
